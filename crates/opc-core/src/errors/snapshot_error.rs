//! Snapshot intake errors.

use super::error_code::{self, OpcErrorCode};

/// Reasons a snapshot document or one of its records is rejected.
///
/// Only `DocumentParse` aborts intake. Every other variant describes a single
/// record, which is excluded while the rest of the snapshot is kept.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SnapshotError {
    #[error("snapshot document could not be parsed: {message}")]
    DocumentParse { message: String },

    #[error("record {position} has a malformed shape: {message}")]
    MalformedRecord { position: usize, message: String },

    #[error("record {position} is missing required field `{field}`")]
    MissingField {
        position: usize,
        field: &'static str,
    },

    #[error("record {position} has a non-finite value in `{field}`")]
    NonFiniteValue {
        position: usize,
        field: &'static str,
    },

    #[error("record {position} has an empty identity")]
    EmptyIdentity { position: usize },

    #[error("record {position} repeats identity `{identity}` first seen at record {first_position}")]
    DuplicateIdentity {
        position: usize,
        identity: String,
        first_position: usize,
    },
}

impl OpcErrorCode for SnapshotError {
    fn error_code(&self) -> &'static str {
        error_code::SNAPSHOT_ERROR
    }
}
