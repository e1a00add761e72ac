//! # opc-core
//!
//! Foundation crate for the Organic Popularity Certification pipeline.
//! Defines the entity model, snapshot intake, tier and facet types, errors,
//! config, tracing setup, and constants. Every other crate in the workspace
//! depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod traits;
pub mod tracing;

// Re-export the most commonly used types at the crate root.
pub use config::{OpcConfig, ThresholdContext};
pub use errors::{OpcError, OpcResult};
pub use models::{
    CertificationClass, ClassificationBucket, Entity, EvidenceItem, FacetValue, RawEntity,
    ScoreBreakdown, Snapshot, ThresholdTable, Tier, TierThreshold, ViewFacets,
};
