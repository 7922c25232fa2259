use std::collections::BTreeMap;
use std::future::Future;
use std::sync::Arc;

use aws_sdk_s3::Client;
use tokio::sync::RwLock;

use crate::error::StorageError;
use crate::objects;

const JSON: &str = "application/json";

/// Key/value document store that records are persisted to.
pub trait ObjectStore: Send + Sync + 'static {
    /// Fetch the body stored at `key`, or `StorageError::NotFound`.
    fn get(&self, key: &str) -> impl Future<Output = Result<Vec<u8>, StorageError>> + Send;

    /// Store `body` at `key`, replacing any previous body.
    fn put(&self, key: &str, body: Vec<u8>) -> impl Future<Output = Result<(), StorageError>> + Send;

    /// Store `body` at `key` unless the key is already taken, in which case
    /// `StorageError::AlreadyExists` is returned and nothing is written.
    fn put_if_absent(
        &self,
        key: &str,
        body: Vec<u8>,
    ) -> impl Future<Output = Result<(), StorageError>> + Send;

    /// Remove the object at `key`. Removing a missing key is not an error.
    fn delete(&self, key: &str) -> impl Future<Output = Result<(), StorageError>> + Send;

    /// Keys under `prefix`, in lexicographic order.
    fn list(&self, prefix: &str) -> impl Future<Output = Result<Vec<String>, StorageError>> + Send;
}

/// S3-backed store. All objects live in one bucket.
#[derive(Clone)]
pub struct S3Store {
    client: Client,
    bucket: String,
}

impl S3Store {
    pub fn new(client: Client, bucket: impl Into<String>) -> Self {
        Self {
            client,
            bucket: bucket.into(),
        }
    }
}

impl ObjectStore for S3Store {
    async fn get(&self, key: &str) -> Result<Vec<u8>, StorageError> {
        objects::get_object(&self.client, &self.bucket, key).await
    }

    async fn put(&self, key: &str, body: Vec<u8>) -> Result<(), StorageError> {
        objects::put_object(&self.client, &self.bucket, key, body, Some(JSON)).await
    }

    async fn put_if_absent(&self, key: &str, body: Vec<u8>) -> Result<(), StorageError> {
        objects::put_object_if_absent(&self.client, &self.bucket, key, body, Some(JSON)).await
    }

    async fn delete(&self, key: &str) -> Result<(), StorageError> {
        objects::delete_object(&self.client, &self.bucket, key).await
    }

    async fn list(&self, prefix: &str) -> Result<Vec<String>, StorageError> {
        let mut keys = objects::list_objects(&self.client, &self.bucket, prefix).await?;
        // S3 already lists in UTF-8 binary order; sort anyway so both backends agree
        keys.sort();
        Ok(keys)
    }
}

/// In-process store for tests and local runs. Clones share the same map.
#[derive(Clone, Default)]
pub struct MemoryStore {
    objects: Arc<RwLock<BTreeMap<String, Vec<u8>>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored objects.
    pub async fn len(&self) -> usize {
        self.objects.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.objects.read().await.is_empty()
    }
}

impl ObjectStore for MemoryStore {
    async fn get(&self, key: &str) -> Result<Vec<u8>, StorageError> {
        self.objects
            .read()
            .await
            .get(key)
            .cloned()
            .ok_or_else(|| StorageError::NotFound {
                key: key.to_string(),
            })
    }

    async fn put(&self, key: &str, body: Vec<u8>) -> Result<(), StorageError> {
        self.objects.write().await.insert(key.to_string(), body);
        Ok(())
    }

    async fn put_if_absent(&self, key: &str, body: Vec<u8>) -> Result<(), StorageError> {
        let mut objects = self.objects.write().await;
        if objects.contains_key(key) {
            return Err(StorageError::AlreadyExists {
                key: key.to_string(),
            });
        }
        objects.insert(key.to_string(), body);
        Ok(())
    }

    async fn delete(&self, key: &str) -> Result<(), StorageError> {
        self.objects.write().await.remove(key);
        Ok(())
    }

    async fn list(&self, prefix: &str) -> Result<Vec<String>, StorageError> {
        Ok(self
            .objects
            .read()
            .await
            .range(prefix.to_string()..)
            .take_while(|(key, _)| key.starts_with(prefix))
            .map(|(key, _)| key.clone())
            .collect())
    }
}
