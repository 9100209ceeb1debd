//! Terminal kanban board over a local JSON task file.
//!
//! Usage:
//!
//! ```text
//! tuido [storage-path]
//! ```
//!
//! Without an argument the board file lives in the platform configuration
//! directory as `tuido.json`; an explicit path is used verbatim. Diagnostics
//! go to stderr and are silent unless `RUST_LOG` is set. Unreadable or
//! corrupt storage aborts startup with a non-zero exit code rather than
//! running with undefined state; a normal quit exits zero.

use std::env;
use std::path::PathBuf;

use thiserror::Error;
use tracing_subscriber::EnvFilter;

use tuido::board::adapters::json_file::JsonFileGateway;
use tuido::board::domain::StageSet;
use tuido::board::ports::BoardStorageError;
use tuido::board::services::TaskStore;

/// Boxed error type for the main result.
type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Errors that can occur while bootstrapping or running the board.
#[derive(Debug, Error)]
enum AppError {
    #[error("invalid arguments: {0}")]
    InvalidArgs(String),
    #[error("cannot resolve a storage path: {0}")]
    Resolve(#[source] BoardStorageError),
    #[error("cannot open task storage at {path}: {source}")]
    Startup {
        path: String,
        source: BoardStorageError,
    },
    #[error("terminal failure: {0}")]
    Terminal(#[source] std::io::Error),
}

fn main() -> Result<(), BoxError> {
    init_tracing();
    let override_path = parse_args()?;
    run(override_path).map_err(Into::into)
}

/// Installs the stderr subscriber before the UI takes over the screen.
fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();
}

fn parse_args() -> Result<Option<PathBuf>, AppError> {
    let mut args = env::args_os().skip(1);
    let override_path = args.next().map(PathBuf::from);
    if args.next().is_some() {
        return Err(AppError::InvalidArgs(
            "expected at most one storage-path argument".into(),
        ));
    }
    Ok(override_path)
}

fn run(override_path: Option<PathBuf>) -> Result<(), AppError> {
    let gateway = JsonFileGateway::resolve(override_path).map_err(AppError::Resolve)?;
    let path = gateway.path().display().to_string();

    let store = TaskStore::open(gateway, StageSet::default_pipeline())
        .map_err(|source| AppError::Startup { path, source })?;

    tuido::tui::run(store).map_err(AppError::Terminal)
}
