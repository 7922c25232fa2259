use serde::{de::DeserializeOwned, Serialize};

use crate::error::StorageError;
use crate::store::ObjectStore;

/// Load and deserialize the JSON record at `key`.
pub async fn load_json<S, T>(store: &S, key: &str) -> Result<T, StorageError>
where
    S: ObjectStore,
    T: DeserializeOwned,
{
    let body = store.get(key).await?;
    Ok(serde_json::from_slice(&body)?)
}

/// Save a JSON record, replacing any previous version (update).
pub async fn save_json<S, T>(store: &S, key: &str, value: &T) -> Result<(), StorageError>
where
    S: ObjectStore,
    T: Serialize + Sync,
{
    let body = serde_json::to_vec_pretty(value)?;
    store.put(key, body).await?;
    tracing::debug!(key, "record saved");
    Ok(())
}

/// Save a JSON record that must not exist yet (insert).
///
/// Returns `StorageError::AlreadyExists` if another writer got there first.
pub async fn insert_json<S, T>(store: &S, key: &str, value: &T) -> Result<(), StorageError>
where
    S: ObjectStore,
    T: Serialize + Sync,
{
    let body = serde_json::to_vec_pretty(value)?;
    store.put_if_absent(key, body).await?;
    tracing::debug!(key, "record inserted");
    Ok(())
}
