use async_trait::async_trait;

/// Byte payloads addressed by key within a single bucket.
#[async_trait]
pub trait ObjectStore: Send + Sync {
    /// Returns `None` when no object exists under `key`.
    async fn get(&self, key: &str) -> anyhow::Result<Option<Vec<u8>>>;
    async fn put(&self, key: &str, payload: Vec<u8>) -> anyhow::Result<()>;
    /// Deleting a missing key succeeds.
    async fn delete(&self, key: &str) -> anyhow::Result<()>;
    async fn list_keys(&self, prefix: &str) -> anyhow::Result<Vec<String>>;
}
