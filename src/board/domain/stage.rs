//! Stage index and the fixed ordered stage pipeline.

use super::BoardDomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Zero-based index of one stage in the board pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Stage(usize);

impl Stage {
    /// The initial stage every task is created in.
    pub const FIRST: Self = Self(0);

    /// Creates a stage index from a raw persisted value.
    ///
    /// Range validation against a concrete pipeline happens through
    /// [`StageSet::contains`].
    #[must_use]
    pub const fn new(index: usize) -> Self {
        Self(index)
    }

    /// Returns the zero-based index.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The fixed, ordered sequence of stage names a board pipeline consists of.
///
/// A stage set is validated non-empty at construction and never changes for
/// the lifetime of the process. Navigation between neighbouring stages is
/// clamped: there is no stage before the first or after the last.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StageSet {
    names: Vec<String>,
}

impl StageSet {
    /// Creates a pipeline from an ordered sequence of stage names.
    ///
    /// # Errors
    ///
    /// Returns [`BoardDomainError::EmptyStagePipeline`] when no names are
    /// given.
    pub fn new(
        names: impl IntoIterator<Item = impl Into<String>>,
    ) -> Result<Self, BoardDomainError> {
        let names: Vec<String> = names.into_iter().map(Into::into).collect();
        if names.is_empty() {
            return Err(BoardDomainError::EmptyStagePipeline);
        }
        Ok(Self { names })
    }

    /// Returns the default three-column pipeline.
    #[must_use]
    pub fn default_pipeline() -> Self {
        Self {
            names: vec![
                "To Do".to_owned(),
                "In Progress".to_owned(),
                "Done".to_owned(),
            ],
        }
    }

    /// Returns the number of stages in the pipeline.
    #[must_use]
    pub fn stage_count(&self) -> usize {
        self.names.len()
    }

    /// Returns whether the given stage index falls inside the pipeline.
    #[must_use]
    pub fn contains(&self, stage: Stage) -> bool {
        stage.index() < self.names.len()
    }

    /// Returns the display name of the given stage, or `None` when the index
    /// is out of range.
    #[must_use]
    pub fn name(&self, stage: Stage) -> Option<&str> {
        self.names.get(stage.index()).map(String::as_str)
    }

    /// Returns the initial stage of the pipeline.
    #[must_use]
    pub const fn first(&self) -> Stage {
        Stage::FIRST
    }

    /// Returns the terminal stage of the pipeline.
    #[must_use]
    pub fn last(&self) -> Stage {
        Stage::new(self.names.len() - 1)
    }

    /// Returns the stage one step forward of the given stage, or `None` when
    /// the stage is already terminal or out of range.
    #[must_use]
    pub fn forward_of(&self, stage: Stage) -> Option<Stage> {
        let next = stage.index().checked_add(1)?;
        (next < self.names.len()).then(|| Stage::new(next))
    }

    /// Returns the stage one step backward of the given stage, or `None`
    /// when the stage is already initial or out of range.
    #[must_use]
    pub fn backward_of(&self, stage: Stage) -> Option<Stage> {
        if !self.contains(stage) {
            return None;
        }
        stage.index().checked_sub(1).map(Stage::new)
    }

    /// Iterates the pipeline in order as `(stage, name)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (Stage, &str)> {
        self.names
            .iter()
            .enumerate()
            .map(|(index, name)| (Stage::new(index), name.as_str()))
    }
}
