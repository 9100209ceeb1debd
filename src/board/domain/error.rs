//! Error types for board domain validation.

use super::TaskId;
use thiserror::Error;

/// Errors returned while constructing or validating domain board values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum BoardDomainError {
    /// The stage pipeline has no stages.
    #[error("stage pipeline must contain at least one stage")]
    EmptyStagePipeline,

    /// A stage index falls outside the pipeline.
    #[error("stage index {index} out of range for a pipeline of {stage_count} stages")]
    StageOutOfRange {
        /// The offending zero-based stage index.
        index: usize,
        /// Number of stages in the pipeline.
        stage_count: usize,
    },

    /// Two tasks in one collection share an identifier.
    #[error("duplicate task identifier: {0}")]
    DuplicateTaskId(TaskId),
}
