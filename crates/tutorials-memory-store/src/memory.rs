use async_trait::async_trait;
use std::{
    collections::BTreeMap,
    sync::{
        atomic::{AtomicBool, Ordering},
        Arc,
    },
    time::Duration,
};
use tokio::sync::Mutex;

use tutorials_core::ObjectStore;

/// Process-local object store. Optionally slow or failing so callers can
/// exercise timeouts and storage errors.
#[derive(Debug, Default)]
pub struct MemoryObjectStore {
    objects: Arc<Mutex<BTreeMap<String, Vec<u8>>>>,
    failing: AtomicBool,
    delay: Option<Duration>,
}

impl MemoryObjectStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_delay(delay: Duration) -> Self {
        Self {
            delay: Some(delay),
            ..Self::default()
        }
    }

    /// While set, every operation fails without touching stored objects.
    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    pub async fn contains(&self, key: &str) -> bool {
        self.objects.lock().await.contains_key(key)
    }

    pub async fn len(&self) -> usize {
        self.objects.lock().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.objects.lock().await.is_empty()
    }

    async fn simulate(&self, operation: &str, key: &str) -> anyhow::Result<()> {
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }

        if self.failing.load(Ordering::SeqCst) {
            return Err(anyhow::anyhow!("simulated {operation} failure for {key}"));
        }

        Ok(())
    }
}

#[async_trait]
impl ObjectStore for MemoryObjectStore {
    async fn get(&self, key: &str) -> anyhow::Result<Option<Vec<u8>>> {
        self.simulate("get", key).await?;

        let objects = self.objects.lock().await;

        Ok(objects.get(key).cloned())
    }

    async fn put(&self, key: &str, payload: Vec<u8>) -> anyhow::Result<()> {
        self.simulate("put", key).await?;

        let mut objects = self.objects.lock().await;

        objects.insert(key.to_owned(), payload);

        Ok(())
    }

    async fn delete(&self, key: &str) -> anyhow::Result<()> {
        self.simulate("delete", key).await?;

        let mut objects = self.objects.lock().await;

        objects.remove(key);

        Ok(())
    }

    async fn list_keys(&self, prefix: &str) -> anyhow::Result<Vec<String>> {
        self.simulate("list", prefix).await?;

        let objects = self.objects.lock().await;

        Ok(objects
            .keys()
            .filter(|key| key.starts_with(prefix))
            .cloned()
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_put_get_delete() {
        let store = MemoryObjectStore::new();

        store.put("tutorials/1.json", b"one".to_vec()).await.unwrap();

        let fetched = store.get("tutorials/1.json").await.unwrap();
        assert_eq!(fetched, Some(b"one".to_vec()));

        store.delete("tutorials/1.json").await.unwrap();
        assert_eq!(store.get("tutorials/1.json").await.unwrap(), None);

        // deleting again is a no-op
        store.delete("tutorials/1.json").await.unwrap();
        assert!(store.is_empty().await);
    }

    #[tokio::test]
    async fn test_list_keys() {
        let store = MemoryObjectStore::new();

        store.put("tutorials/2.json", vec![]).await.unwrap();
        store.put("tutorials/1.json", vec![]).await.unwrap();
        store.put("other/3.json", vec![]).await.unwrap();

        let keys = store.list_keys("tutorials/").await.unwrap();
        assert_eq!(keys, vec!["tutorials/1.json", "tutorials/2.json"]);
    }

    #[tokio::test]
    async fn test_failing() {
        let store = MemoryObjectStore::new();
        store.set_failing(true);

        assert!(store.put("tutorials/1.json", vec![]).await.is_err());
        assert!(store.get("tutorials/1.json").await.is_err());
        assert!(store.delete("tutorials/1.json").await.is_err());

        store.set_failing(false);
        assert!(store.is_empty().await);
        assert_eq!(store.get("tutorials/1.json").await.unwrap(), None);
    }
}
