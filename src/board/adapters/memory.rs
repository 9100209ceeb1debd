//! In-memory gateway for board store tests.

use crate::board::domain::Task;
use crate::board::ports::{BoardGateway, BoardGatewayResult, BoardStorageError};
use std::io;
use std::sync::{Arc, RwLock};

/// Thread-safe in-memory board gateway.
///
/// Cloning shares the backing collection, so a test can hand one clone to a
/// store and inspect the persisted state through another.
#[derive(Debug, Clone, Default)]
pub struct InMemoryGateway {
    state: Arc<RwLock<Vec<Task>>>,
}

impl InMemoryGateway {
    /// Creates an empty in-memory gateway.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a gateway pre-seeded with the given collection.
    #[must_use]
    pub fn seeded(tasks: Vec<Task>) -> Self {
        Self {
            state: Arc::new(RwLock::new(tasks)),
        }
    }

    /// Returns a copy of the currently persisted collection.
    ///
    /// # Errors
    ///
    /// Returns [`BoardStorageError::Unavailable`] when the backing lock is
    /// poisoned.
    pub fn snapshot(&self) -> BoardGatewayResult<Vec<Task>> {
        let state = self
            .state
            .read()
            .map_err(|err| BoardStorageError::unavailable(io::Error::other(err.to_string())))?;
        Ok(state.clone())
    }
}

impl BoardGateway for InMemoryGateway {
    fn load(&self) -> BoardGatewayResult<Vec<Task>> {
        let state = self
            .state
            .read()
            .map_err(|err| BoardStorageError::unavailable(io::Error::other(err.to_string())))?;
        Ok(state.clone())
    }

    fn save(&self, tasks: &[Task]) -> BoardGatewayResult<()> {
        let mut state = self
            .state
            .write()
            .map_err(|err| BoardStorageError::write_failed(io::Error::other(err.to_string())))?;
        *state = tasks.to_vec();
        Ok(())
    }
}
