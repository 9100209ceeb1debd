//! The task store: collection ownership, stage transitions, and the
//! write-through persistence contract.

use crate::board::domain::{BoardDomainError, Stage, StageSet, Task, TaskId};
use crate::board::ports::{BoardGateway, BoardStorageError};
use std::collections::HashSet;

/// Outcome of the write-through save performed after a mutation.
///
/// A failed write is reported as a value and is non-fatal: the in-memory
/// mutation stands, and the next successful mutation's save is the only
/// retry mechanism.
pub type WriteOutcome = Result<(), BoardStorageError>;

/// Direction of a single-step stage move.
enum StageStep {
    Forward,
    Backward,
}

/// The board's task store.
///
/// Owns the task collection and the stage pipeline, assigns identities,
/// enforces stage bounds, and writes the full collection through the
/// persistence gateway synchronously after every mutation. Exactly one
/// store mutates a collection; no locking is involved.
#[derive(Debug)]
pub struct TaskStore<G: BoardGateway> {
    gateway: G,
    stages: StageSet,
    tasks: Vec<Task>,
}

impl<G: BoardGateway> TaskStore<G> {
    /// Opens the store by loading the persisted collection through the
    /// gateway and validating collection invariants.
    ///
    /// # Errors
    ///
    /// Returns [`BoardStorageError::Unavailable`] or
    /// [`BoardStorageError::Corrupt`] from the gateway load, and
    /// [`BoardStorageError::Corrupt`] when the loaded collection carries a
    /// duplicate identifier or an out-of-range stage.
    pub fn open(gateway: G, stages: StageSet) -> Result<Self, BoardStorageError> {
        let tasks = gateway.load()?;
        validate_collection(&tasks, &stages).map_err(BoardStorageError::corrupt)?;
        Ok(Self {
            gateway,
            stages,
            tasks,
        })
    }

    /// Creates a task in the initial stage and appends it to the collection.
    ///
    /// The new identifier is the successor of the largest existing
    /// identifier, or [`TaskId::FIRST`] for an empty collection. Creation
    /// never fails; a write-through failure is returned alongside the
    /// created task and does not roll back the append.
    pub fn create(
        &mut self,
        theme: impl Into<String>,
        description: impl Into<String>,
    ) -> (Task, WriteOutcome) {
        let task = Task::new(self.next_id(), theme, description);
        self.tasks.push(task.clone());
        (task, self.write_through())
    }

    /// Removes the task with the given identifier, preserving the relative
    /// order of the rest.
    ///
    /// Returns the removed task, or `None` when no task matches. The
    /// collection is written through either way.
    pub fn delete(&mut self, id: TaskId) -> (Option<Task>, WriteOutcome) {
        let removed = self
            .tasks
            .iter()
            .position(|task| task.id() == id)
            .map(|index| self.tasks.remove(index));
        (removed, self.write_through())
    }

    /// Moves the task with the given identifier one stage forward.
    ///
    /// Returns the new stage, or `None` when no task matches or the task is
    /// already in the terminal stage (a silent no-op, not an error). The
    /// collection is written through regardless of whether a change
    /// occurred.
    pub fn move_forward(&mut self, id: TaskId) -> (Option<Stage>, WriteOutcome) {
        self.shift(id, StageStep::Forward)
    }

    /// Moves the task with the given identifier one stage backward.
    ///
    /// Returns the new stage, or `None` when no task matches or the task is
    /// already in the initial stage (a silent no-op, not an error). The
    /// collection is written through regardless of whether a change
    /// occurred.
    pub fn move_backward(&mut self, id: TaskId) -> (Option<Stage>, WriteOutcome) {
        self.shift(id, StageStep::Backward)
    }

    /// Returns all tasks in the given stage, in collection order.
    #[must_use]
    pub fn tasks_in_stage(&self, stage: Stage) -> Vec<&Task> {
        self.tasks
            .iter()
            .filter(|task| task.stage() == stage)
            .collect()
    }

    /// Returns the full collection in insertion order.
    #[must_use]
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Returns the stage pipeline.
    #[must_use]
    pub const fn stages(&self) -> &StageSet {
        &self.stages
    }

    /// Returns the number of tasks on the board.
    #[must_use]
    pub fn task_count(&self) -> usize {
        self.tasks.len()
    }

    fn shift(&mut self, id: TaskId, step: StageStep) -> (Option<Stage>, WriteOutcome) {
        let mut moved = None;
        if let Some(task) = self.tasks.iter_mut().find(|task| task.id() == id) {
            let target = match step {
                StageStep::Forward => self.stages.forward_of(task.stage()),
                StageStep::Backward => self.stages.backward_of(task.stage()),
            };
            if let Some(stage) = target {
                task.set_stage(stage);
                moved = Some(stage);
            }
        }
        (moved, self.write_through())
    }

    fn next_id(&self) -> TaskId {
        self.tasks
            .iter()
            .map(Task::id)
            .max()
            .map_or(TaskId::FIRST, TaskId::successor)
    }

    fn write_through(&self) -> WriteOutcome {
        let outcome = self.gateway.save(&self.tasks);
        if let Err(err) = &outcome {
            tracing::warn!(error = %err, "write-through save failed; in-memory state kept");
        }
        outcome
    }
}

/// Checks the collection invariants: pairwise distinct identifiers and every
/// stage inside the pipeline.
fn validate_collection(tasks: &[Task], stages: &StageSet) -> Result<(), BoardDomainError> {
    let mut seen = HashSet::new();
    for task in tasks {
        if !seen.insert(task.id()) {
            return Err(BoardDomainError::DuplicateTaskId(task.id()));
        }
        if !stages.contains(task.stage()) {
            return Err(BoardDomainError::StageOutOfRange {
                index: task.stage().index(),
                stage_count: stages.stage_count(),
            });
        }
    }
    Ok(())
}
