//! Error handling for OPC.
//! One error enum per subsystem, `thiserror` only.
//!
//! Per-record snapshot problems are not surfaced as `Err`: intake turns them
//! into [`crate::models::ExcludedRecord`]s and keeps going.

pub mod config_error;
pub mod error_code;
pub mod opc_error;
pub mod snapshot_error;

pub use config_error::ConfigError;
pub use error_code::OpcErrorCode;
pub use opc_error::{OpcError, OpcResult};
pub use snapshot_error::SnapshotError;
