//! Identifier and legacy scalar types for the board domain.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unique identifier for a task on the board.
///
/// Identifiers are assigned monotonically at creation time and never reused
/// after deletion, so the largest identifier in a collection always belongs
/// to the most recently created task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskId(i64);

impl TaskId {
    /// Identifier assigned to the first task of an empty collection.
    pub const FIRST: Self = Self(0);

    /// Creates a task identifier from a raw persisted value.
    #[must_use]
    pub const fn new(value: i64) -> Self {
        Self(value)
    }

    /// Returns the underlying numeric value.
    #[must_use]
    pub const fn value(self) -> i64 {
        self.0
    }

    /// Returns the identifier assigned after this one.
    ///
    /// Saturates at `i64::MAX`; the monotonic assignment scheme cannot reach
    /// that bound in practice.
    #[must_use]
    pub const fn successor(self) -> Self {
        Self(self.0.saturating_add(1))
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Legacy ordering hint persisted alongside each task.
///
/// The weight always equals the task identifier at creation time and is not
/// consulted by any board operation; it is carried to keep the storage
/// format stable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Weight(i64);

impl Weight {
    /// Creates a weight from a raw persisted value.
    #[must_use]
    pub const fn new(value: i64) -> Self {
        Self(value)
    }

    /// Returns the weight recorded for a freshly created task.
    #[must_use]
    pub const fn of_task(id: TaskId) -> Self {
        Self(id.value())
    }

    /// Returns the underlying numeric value.
    #[must_use]
    pub const fn value(self) -> i64 {
        self.0
    }
}

impl fmt::Display for Weight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
