//! JSON-file adapter for the board persistence port.
//!
//! Persists the task collection as a pretty-printed JSON array at a single,
//! deterministic path: either an explicit override, or the platform
//! configuration directory joined with [`STORAGE_FILE_NAME`].

use crate::board::domain::Task;
use crate::board::ports::{BoardGateway, BoardGatewayResult, BoardStorageError};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// File name used when no storage path override is given.
pub const STORAGE_FILE_NAME: &str = "tuido.json";

/// Board gateway backed by a JSON file on the local filesystem.
#[derive(Debug, Clone)]
pub struct JsonFileGateway {
    path: PathBuf,
}

impl JsonFileGateway {
    /// Creates a gateway for the given file path, used verbatim.
    #[must_use]
    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Creates a gateway at the resolved storage path.
    ///
    /// An explicit override is used verbatim. Otherwise the platform
    /// configuration directory (falling back to the home directory) is
    /// joined with [`STORAGE_FILE_NAME`].
    ///
    /// # Errors
    ///
    /// Returns [`BoardStorageError::Unavailable`] when the platform defines
    /// neither a configuration nor a home directory.
    pub fn resolve(override_path: Option<PathBuf>) -> BoardGatewayResult<Self> {
        match override_path {
            Some(path) => Ok(Self::at(path)),
            None => default_storage_path().map(Self::at),
        }
    }

    /// Returns the resolved storage path.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Writes an empty collection, creating parent directories as needed.
    fn bootstrap(&self) -> BoardGatewayResult<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(BoardStorageError::unavailable)?;
        }
        let body = render_collection(&[]).map_err(BoardStorageError::unavailable)?;
        fs::write(&self.path, body).map_err(BoardStorageError::unavailable)?;
        tracing::info!(path = %self.path.display(), "bootstrapped empty task storage");
        Ok(())
    }
}

impl BoardGateway for JsonFileGateway {
    fn load(&self) -> BoardGatewayResult<Vec<Task>> {
        if !self.path.exists() {
            self.bootstrap()?;
            return Ok(Vec::new());
        }

        let contents = fs::read_to_string(&self.path).map_err(BoardStorageError::unavailable)?;
        let tasks: Vec<Task> =
            serde_json::from_str(&contents).map_err(BoardStorageError::corrupt)?;
        tracing::debug!(path = %self.path.display(), count = tasks.len(), "loaded task storage");
        Ok(tasks)
    }

    fn save(&self, tasks: &[Task]) -> BoardGatewayResult<()> {
        let body = render_collection(tasks).map_err(BoardStorageError::write_failed)?;
        fs::write(&self.path, body).map_err(BoardStorageError::write_failed)?;
        tracing::debug!(path = %self.path.display(), count = tasks.len(), "saved task storage");
        Ok(())
    }
}

/// Serializes the collection in the stable storage format.
fn render_collection(tasks: &[Task]) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(tasks)
}

/// Resolves the platform default storage path.
fn default_storage_path() -> BoardGatewayResult<PathBuf> {
    dirs::config_dir()
        .or_else(dirs::home_dir)
        .map(|dir| dir.join(STORAGE_FILE_NAME))
        .ok_or_else(|| {
            BoardStorageError::unavailable(io::Error::other(
                "platform defines neither a configuration nor a home directory",
            ))
        })
}
