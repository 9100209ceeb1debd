//! Application services for board orchestration.

mod store;

pub use store::{TaskStore, WriteOutcome};
