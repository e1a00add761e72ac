use super::error_code::{self, OpcErrorCode};
use super::{ConfigError, SnapshotError};

/// Top-level error for the OPC workspace.
#[derive(Debug, thiserror::Error)]
pub enum OpcError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Snapshot(#[from] SnapshotError),

    #[error("signal record store failed: {reason}")]
    Store { reason: String },
}

impl OpcErrorCode for OpcError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Config(e) => e.error_code(),
            Self::Snapshot(e) => e.error_code(),
            Self::Store { .. } => error_code::STORE_ERROR,
        }
    }
}

pub type OpcResult<T> = Result<T, OpcError>;
