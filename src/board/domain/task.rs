//! Task record and its construction paths.

use super::{Stage, TaskId, Weight};
use serde::{Deserialize, Serialize};

/// A single unit of work on the board.
///
/// Field order is the storage contract: tasks serialize as objects with
/// `id`, `theme`, `description`, `stage`, and `weight`, in that order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    id: TaskId,
    theme: String,
    description: String,
    stage: Stage,
    weight: Weight,
}

impl Task {
    /// Creates a new task in the initial stage.
    ///
    /// The weight is recorded equal to the identifier, matching the legacy
    /// storage format.
    #[must_use]
    pub fn new(id: TaskId, theme: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            id,
            theme: theme.into(),
            description: description.into(),
            stage: Stage::FIRST,
            weight: Weight::of_task(id),
        }
    }

    /// Reconstructs a task from persisted fields.
    #[must_use]
    pub fn from_persisted(
        id: TaskId,
        theme: impl Into<String>,
        description: impl Into<String>,
        stage: Stage,
        weight: Weight,
    ) -> Self {
        Self {
            id,
            theme: theme.into(),
            description: description.into(),
            stage,
            weight,
        }
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> TaskId {
        self.id
    }

    /// Returns the display title.
    #[must_use]
    pub fn theme(&self) -> &str {
        &self.theme
    }

    /// Returns the free-text description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the current pipeline stage.
    #[must_use]
    pub const fn stage(&self) -> Stage {
        self.stage
    }

    /// Returns the legacy ordering weight.
    #[must_use]
    pub const fn weight(&self) -> Weight {
        self.weight
    }

    /// Moves the task to the given stage.
    ///
    /// Range validation against the pipeline is the caller's responsibility;
    /// the store only passes stages obtained from its own [`super::StageSet`].
    pub(crate) fn set_stage(&mut self, stage: Stage) {
        self.stage = stage;
    }
}
