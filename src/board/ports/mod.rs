//! Port contracts for board persistence.
//!
//! Ports define infrastructure-agnostic interfaces used by the board store.

pub mod gateway;

pub use gateway::{BoardGateway, BoardGatewayResult, BoardStorageError};
