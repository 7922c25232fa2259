use tracing_subscriber::EnvFilter;

use vitalink_lambda::config::{Config, StoreKind};
use vitalink_lambda::router;
use vitalink_lambda::state::AppState;
use vitalink_storage::store::{MemoryStore, ObjectStore, S3Store};

#[tokio::main]
async fn main() -> eyre::Result<()> {
    // Structured JSON logging for CloudWatch
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .init();

    let config = Config::from_env()?;
    tracing::info!(
        store = %config.store,
        bucket = %config.bucket,
        region = %config.region,
        "starting vitalink api"
    );

    match config.store {
        StoreKind::S3 => {
            let client = vitalink_storage::client::build_client(&config.region).await;
            serve(S3Store::new(client, config.bucket)).await
        }
        StoreKind::Memory => {
            tracing::warn!("using in-memory store, records are lost on shutdown");
            serve(MemoryStore::new()).await
        }
    }
}

async fn serve<S: ObjectStore>(store: S) -> eyre::Result<()> {
    let app = router(AppState::new(store));
    lambda_http::run(app).await.map_err(|e| eyre::eyre!(e))
}
