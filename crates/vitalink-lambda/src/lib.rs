//! vitalink-lambda
//!
//! HTTP API for the patient health assessment flow, served by AWS Lambda.

pub mod config;
pub mod error;
pub mod middleware;
pub mod routes;
pub mod state;

use axum::middleware as axum_mw;
use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use vitalink_storage::store::ObjectStore;

use state::AppState;

/// Build the API router over any record store.
pub fn router<S: ObjectStore>(state: AppState<S>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(routes::health::health_check))
        // Questionnaire reference data (static)
        .route(
            "/questionnaire/symptoms",
            get(routes::questionnaire::list_symptoms),
        )
        .route("/risk-levels", get(routes::questionnaire::list_risk_levels))
        // Scoring without persistence
        .route(
            "/assessments/preview",
            post(routes::assessments::preview_assessment),
        )
        // Per-user records
        .route(
            "/users/{user_id}/assessments",
            post(routes::assessments::submit_assessment::<S>),
        )
        .route(
            "/users/{user_id}/risk-scores",
            get(routes::risk_scores::list_risk_scores::<S>),
        )
        .route(
            "/users/{user_id}/risk-scores/latest",
            get(routes::risk_scores::latest_risk_score::<S>),
        )
        .route(
            "/users/{user_id}/risk-scores/{id}",
            get(routes::risk_scores::get_risk_score::<S>),
        )
        .route(
            "/users/{user_id}/health-metrics/{id}",
            get(routes::health_metrics::get_health_metric::<S>),
        )
        .layer(axum_mw::from_fn(middleware::request_log::log_request))
        .layer(cors)
        .with_state(state)
}
