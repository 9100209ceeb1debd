//! Shared world state for board flow BDD scenarios.

use std::path::PathBuf;

use rstest::fixture;
use tempfile::TempDir;
use tuido::board::{
    adapters::json_file::{JsonFileGateway, STORAGE_FILE_NAME},
    domain::{Stage, StageSet, TaskId},
    services::TaskStore,
};

/// Scenario world for board flow behaviour tests.
pub struct BoardWorld {
    /// Temporary directory owning the storage file for this scenario.
    _dir: TempDir,
    /// Resolved storage path, shared with reopened stores.
    pub storage_path: PathBuf,
    /// The store under test.
    pub store: TaskStore<JsonFileGateway>,
    /// Identifiers of created tasks, keyed by theme in creation order.
    pub created: Vec<(String, TaskId)>,
    /// Result of the most recent move step.
    pub last_move: Option<Option<Stage>>,
}

impl BoardWorld {
    /// Creates a world with a store over a fresh temporary storage file.
    pub fn new() -> Self {
        let dir = TempDir::new().expect("create scenario temp dir");
        let storage_path = dir.path().join(STORAGE_FILE_NAME);
        let store = TaskStore::open(
            JsonFileGateway::at(&storage_path),
            StageSet::default_pipeline(),
        )
        .expect("open store over fresh storage");
        Self {
            _dir: dir,
            storage_path,
            store,
            created: Vec::new(),
            last_move: None,
        }
    }

    /// Looks up the identifier recorded for a created task theme.
    pub fn id_of(&self, theme: &str) -> Option<TaskId> {
        self.created
            .iter()
            .find(|(created_theme, _)| created_theme == theme)
            .map(|(_, id)| *id)
    }
}

impl Default for BoardWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> BoardWorld {
    BoardWorld::default()
}
