//! Persistence port for the task collection, with the storage error
//! taxonomy shared by all adapters.

use crate::board::domain::Task;
use std::sync::Arc;
use thiserror::Error;

/// Result type for board gateway operations.
pub type BoardGatewayResult<T> = Result<T, BoardStorageError>;

/// Task collection persistence contract.
///
/// The store writes the full collection through this port synchronously
/// after every mutation; implementations need no durability guarantees
/// beyond single-process use.
#[cfg_attr(test, mockall::automock)]
pub trait BoardGateway {
    /// Loads the persisted collection.
    ///
    /// When no backing storage exists yet, implementations bootstrap it by
    /// writing an empty collection and return that empty collection.
    ///
    /// # Errors
    ///
    /// Returns [`BoardStorageError::Unavailable`] when the storage cannot be
    /// created or read, or [`BoardStorageError::Corrupt`] when existing
    /// content does not decode into a task collection.
    fn load(&self) -> BoardGatewayResult<Vec<Task>>;

    /// Overwrites the persisted collection with the given tasks.
    ///
    /// # Errors
    ///
    /// Returns [`BoardStorageError::WriteFailed`] when the collection cannot
    /// be written.
    fn save(&self, tasks: &[Task]) -> BoardGatewayResult<()>;
}

/// Errors returned by board gateway implementations.
#[derive(Debug, Clone, Error)]
pub enum BoardStorageError {
    /// The backing storage cannot be created or read. Fatal at startup.
    #[error("task storage unavailable: {0}")]
    Unavailable(Arc<dyn std::error::Error + Send + Sync>),

    /// Existing storage content does not decode into a task collection, or
    /// violates a collection invariant. Fatal at startup; never
    /// auto-recovered, since silently discarding task data is worse than
    /// failing loudly.
    #[error("task storage corrupt: {0}")]
    Corrupt(Arc<dyn std::error::Error + Send + Sync>),

    /// A write-through save failed. Non-fatal: the in-memory mutation
    /// stands and the next successful save is the only retry mechanism.
    #[error("task storage write failed: {0}")]
    WriteFailed(Arc<dyn std::error::Error + Send + Sync>),
}

impl BoardStorageError {
    /// Wraps an error that made the storage unavailable.
    pub fn unavailable(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Unavailable(Arc::new(err))
    }

    /// Wraps an error describing undecodable or invariant-violating content.
    pub fn corrupt(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Corrupt(Arc::new(err))
    }

    /// Wraps an error raised while writing the collection.
    pub fn write_failed(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::WriteFailed(Arc::new(err))
    }
}
