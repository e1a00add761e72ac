pub mod entity;
pub mod facets;
pub mod snapshot;
pub mod tier;

pub use entity::{Entity, EvidenceItem, RawEntity, ScoreBreakdown};
pub use facets::{ClassificationBucket, FacetValue, ViewFacets};
pub use snapshot::{ExcludedRecord, Snapshot};
pub use tier::{CertificationClass, ThresholdTable, Tier, TierThreshold};
