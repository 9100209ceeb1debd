//! Terminal presentation layer for the board.
//!
//! Renders one list column per pipeline stage, captures keyboard input, and
//! dispatches exactly one store operation per user action before
//! re-rendering from store contents. The presentation layer never reaches
//! into the collection directly; every mutation goes through the
//! [`crate::board::services::TaskStore`] API, and every rendered row
//! carries the identifier of the task it displays.

mod app;
mod input;
mod render;

pub use app::run;
