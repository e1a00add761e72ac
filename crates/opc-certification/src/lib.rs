//! # opc-certification
//!
//! Score interpretation: tier classification against a caller-selected
//! threshold table, the independent distinguished/flagged buckets, and
//! deterministic certificate identifiers.

pub mod buckets;
pub mod certificate;
pub mod classifier;

pub use buckets::BucketRules;
pub use certificate::{derive_certificate_id, CertificateIssuer};
pub use classifier::TierClassifier;
