use tutorials_core::Tutorial;

pub mod memory;

/// Process-local list of tutorials created or updated during this process
/// lifetime, together with the counter new ids are minted from.
///
/// Implementations must make every operation atomic with respect to the
/// others. Lookups are linear scans over the list.
pub trait TutorialIndex: Send + Sync {
    /// Mints the next id. Ids are strictly increasing and never reused.
    fn reserve_id(&self) -> anyhow::Result<u64>;

    /// Ensures ids minted from now on are greater than `id`.
    fn advance_past(&self, id: u64) -> anyhow::Result<()>;

    fn last_id(&self) -> anyhow::Result<u64>;

    fn append(&self, tutorial: &Tutorial) -> anyhow::Result<()>;

    /// Replaces the first entry with a matching id. Returns false, leaving the
    /// index unchanged, when there is none.
    fn replace(&self, tutorial: &Tutorial) -> anyhow::Result<bool>;

    /// Removes every entry with a matching id and returns how many there were.
    fn remove(&self, id: u64) -> anyhow::Result<usize>;

    fn get_by_id(&self, id: u64) -> anyhow::Result<Option<Tutorial>>;

    fn list(&self) -> anyhow::Result<Vec<Tutorial>>;
}
