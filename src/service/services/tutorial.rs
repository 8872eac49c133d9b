use std::{future::Future, sync::Arc, time::Duration};

use tutorials_core::{
    decode, encode, parse_storage_key, storage_key, CallerIdentity, Error, IdentityProbe,
    ObjectStore, Result, Tutorial, TUTORIALS_PREFIX,
};

use crate::persistence::TutorialIndex;

pub const DEFAULT_STORAGE_TIMEOUT: Duration = Duration::from_secs(10);

/// Owns tutorial durability: the object store is the system of record, the
/// index mirrors what this process created or updated.
///
/// Storage is always written before the index is touched, so the index never
/// holds a tutorial whose write failed. The two are not updated atomically.
pub struct TutorialService {
    store: Arc<dyn ObjectStore>,
    identity_probe: Arc<dyn IdentityProbe>,
    index: Box<dyn TutorialIndex>,
    storage_timeout: Duration,
}

impl TutorialService {
    pub fn new(
        store: Arc<dyn ObjectStore>,
        identity_probe: Arc<dyn IdentityProbe>,
        index: Box<dyn TutorialIndex>,
    ) -> Self {
        Self {
            store,
            identity_probe,
            index,
            storage_timeout: DEFAULT_STORAGE_TIMEOUT,
        }
    }

    pub fn with_storage_timeout(mut self, storage_timeout: Duration) -> Self {
        self.storage_timeout = storage_timeout;
        self
    }

    /// Reads a tutorial from storage. The caller identity is probed on a
    /// detached task and only logged; the read neither waits for the probe
    /// nor fails because of it.
    #[tracing::instrument(name = "service::tutorial::find_by_id", skip(self))]
    pub async fn find_by_id(&self, id: u64) -> Result<Tutorial> {
        self.spawn_caller_identity_log();

        let key = storage_key(id);
        let payload = self.bounded("get", &key, self.store.get(&key)).await?;

        match payload {
            Some(payload) => decode(&payload),
            None => Err(Error::NotFound { id }),
        }
    }

    /// Writes a tutorial to storage, minting an id first when it has none.
    ///
    /// New tutorials are appended to the index once stored. Existing ones
    /// replace their index entry if there is one; an update for a tutorial
    /// the index has never seen leaves the index as it is.
    #[tracing::instrument(name = "service::tutorial::save", skip(self))]
    pub async fn save(&self, tutorial: Tutorial) -> Result<Tutorial> {
        let mut tutorial = tutorial;

        let is_new = tutorial.is_unassigned();
        if is_new {
            tutorial.id = self.index.reserve_id()?;
        }

        let payload = encode(&tutorial)?;
        let key = tutorial.storage_key();

        self.bounded("put", &key, self.store.put(&key, payload)).await?;

        if is_new {
            self.index.append(&tutorial)?;
            tracing::info!("tutorial created: {:?}", tutorial);
        } else if self.index.replace(&tutorial)? {
            tracing::info!("tutorial updated: {:?}", tutorial);
        } else {
            tracing::warn!(
                "tutorial {} updated in storage but absent from the local index",
                tutorial.id
            );
        }

        Ok(tutorial)
    }

    #[tracing::instrument(name = "service::tutorial::delete_by_id", skip(self))]
    pub async fn delete_by_id(&self, id: u64) -> Result<()> {
        let key = storage_key(id);

        self.bounded("delete", &key, self.store.delete(&key)).await?;

        let removed_count = self.index.remove(id)?;

        tracing::info!(
            "tutorial {} deleted ({} local index entries removed)",
            id,
            removed_count
        );

        Ok(())
    }

    #[tracing::instrument(name = "service::tutorial::describe_caller", skip(self))]
    pub async fn describe_caller(&self) -> Result<CallerIdentity> {
        probe_caller_identity(self.identity_probe.as_ref(), self.storage_timeout).await
    }

    /// Highest id minted so far, or the seeded floor when nothing was minted.
    pub fn last_id(&self) -> Result<u64> {
        Ok(self.index.last_id()?)
    }

    /// Snapshot of the local index in insertion order.
    #[tracing::instrument(name = "service::tutorial::indexed", skip(self))]
    pub fn indexed(&self) -> Result<Vec<Tutorial>> {
        Ok(self.index.list()?)
    }

    /// Advances the id counter past every id already present in storage so a
    /// restarted process does not mint ids that collide with stored tutorials.
    /// Returns the highest id seen.
    #[tracing::instrument(name = "service::tutorial::seed_from_store", skip(self))]
    pub async fn seed_from_store(&self) -> Result<u64> {
        let keys = self
            .bounded("list", TUTORIALS_PREFIX, self.store.list_keys(TUTORIALS_PREFIX))
            .await?;

        let max_stored_id = keys
            .iter()
            .filter_map(|key| parse_storage_key(key))
            .max()
            .unwrap_or(0);

        self.index.advance_past(max_stored_id)?;

        tracing::info!(
            "seeded tutorial ids from {} stored objects, next id after {}",
            keys.len(),
            self.index.last_id()?
        );

        Ok(max_stored_id)
    }

    fn spawn_caller_identity_log(&self) {
        let identity_probe = Arc::clone(&self.identity_probe);
        let probe_timeout = self.storage_timeout;

        tokio::spawn(async move {
            match probe_caller_identity(identity_probe.as_ref(), probe_timeout).await {
                Ok(identity) => tracing::info!("caller identity: {}", identity),
                Err(err) => tracing::warn!("caller identity probe failed: {:#}", err),
            }
        });
    }

    async fn bounded<T>(
        &self,
        operation: &'static str,
        key: &str,
        call: impl Future<Output = anyhow::Result<T>>,
    ) -> Result<T> {
        match tokio::time::timeout(self.storage_timeout, call).await {
            Ok(Ok(value)) => Ok(value),
            Ok(Err(err)) => Err(Error::storage(operation, key, format!("{err:#}"))),
            Err(_) => Err(Error::storage(
                operation,
                key,
                format!("timed out after {:?}", self.storage_timeout),
            )),
        }
    }
}

async fn probe_caller_identity(
    identity_probe: &dyn IdentityProbe,
    probe_timeout: Duration,
) -> Result<CallerIdentity> {
    match tokio::time::timeout(probe_timeout, identity_probe.caller_identity()).await {
        Ok(identity) => Ok(identity?),
        Err(_) => Err(anyhow::anyhow!(
            "caller identity probe timed out after {:?}",
            probe_timeout
        )
        .into()),
    }
}
