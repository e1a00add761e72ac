//! # opc-signals
//!
//! Structured data recovered from an entity's free-text reasons and its
//! evidence items. Extraction never fails: a miss yields a defined default.

pub mod evidence;
pub mod mentions;

pub use evidence::EvidenceSummary;
pub use mentions::extract_mention_count;
