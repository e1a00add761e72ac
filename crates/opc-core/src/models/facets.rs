//! View configuration: the facets a query narrows the ranked list by.
//!
//! A `ViewFacets` value is immutable and passed into every query. The filter
//! engine keeps no per-view state of its own.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Classification-bucket selector.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "kebab-case")]
pub enum ClassificationBucket {
    #[default]
    All,
    CertifiedOnly,
    #[serde(rename = "class-i")]
    ClassI,
    #[serde(rename = "class-ii")]
    ClassII,
    #[serde(rename = "class-iii")]
    ClassIII,
    DistinguishedOnly,
    FlaggedOnly,
}

/// Exact-match facet selector.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub enum FacetValue {
    #[default]
    All,
    Only(String),
}

impl FacetValue {
    pub fn only(value: impl Into<String>) -> Self {
        Self::Only(value.into())
    }

    /// `true` when `candidate` passes this selector.
    pub fn matches(&self, candidate: &str) -> bool {
        match self {
            Self::All => true,
            Self::Only(v) => v == candidate,
        }
    }
}

/// Independent, AND-composed facets for one view query.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(default, rename_all = "camelCase")]
pub struct ViewFacets {
    pub classification: ClassificationBucket,
    pub geography: FacetValue,
    pub category: FacetValue,
}

impl ViewFacets {
    pub fn all() -> Self {
        Self::default()
    }

    pub fn with_classification(mut self, bucket: ClassificationBucket) -> Self {
        self.classification = bucket;
        self
    }

    pub fn with_geography(mut self, geography: FacetValue) -> Self {
        self.geography = geography;
        self
    }

    pub fn with_category(mut self, category: FacetValue) -> Self {
        self.category = category;
        self
    }
}
