use std::sync::{Arc, Mutex, MutexGuard};

use tutorials_core::Tutorial;

use crate::persistence::TutorialIndex;

#[derive(Debug, Default)]
struct IndexState {
    last_id: u64,
    tutorials: Vec<Tutorial>,
}

#[derive(Debug, Default)]
pub struct MemoryTutorialIndex {
    state: Arc<Mutex<IndexState>>,
}

impl TutorialIndex for MemoryTutorialIndex {
    fn reserve_id(&self) -> anyhow::Result<u64> {
        let mut locked_state = self.get_state_locked()?;

        locked_state.last_id = locked_state
            .last_id
            .checked_add(1)
            .ok_or_else(|| anyhow::anyhow!("tutorial id space exhausted"))?;

        Ok(locked_state.last_id)
    }

    fn advance_past(&self, id: u64) -> anyhow::Result<()> {
        let mut locked_state = self.get_state_locked()?;

        locked_state.last_id = locked_state.last_id.max(id);

        Ok(())
    }

    fn last_id(&self) -> anyhow::Result<u64> {
        Ok(self.get_state_locked()?.last_id)
    }

    fn append(&self, tutorial: &Tutorial) -> anyhow::Result<()> {
        let mut locked_state = self.get_state_locked()?;

        locked_state.tutorials.push(tutorial.clone());

        Ok(())
    }

    fn replace(&self, tutorial: &Tutorial) -> anyhow::Result<bool> {
        let mut locked_state = self.get_state_locked()?;

        match locked_state
            .tutorials
            .iter_mut()
            .find(|indexed| indexed.id == tutorial.id)
        {
            Some(indexed) => {
                *indexed = tutorial.clone();
                Ok(true)
            }
            None => Ok(false),
        }
    }

    fn remove(&self, id: u64) -> anyhow::Result<usize> {
        let mut locked_state = self.get_state_locked()?;

        let starting_len = locked_state.tutorials.len();
        locked_state.tutorials.retain(|tutorial| tutorial.id != id);

        Ok(starting_len - locked_state.tutorials.len())
    }

    fn get_by_id(&self, id: u64) -> anyhow::Result<Option<Tutorial>> {
        let locked_state = self.get_state_locked()?;

        Ok(locked_state
            .tutorials
            .iter()
            .find(|tutorial| tutorial.id == id)
            .cloned())
    }

    fn list(&self) -> anyhow::Result<Vec<Tutorial>> {
        Ok(self.get_state_locked()?.tutorials.clone())
    }
}

impl MemoryTutorialIndex {
    fn get_state_locked(&self) -> anyhow::Result<MutexGuard<'_, IndexState>> {
        match self.state.lock() {
            Ok(locked_state) => Ok(locked_state),
            Err(_) => Err(anyhow::anyhow!("failed to acquire lock")),
        }
    }
}
