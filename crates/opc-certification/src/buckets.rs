//! Distinguished ("fame") and flagged ("shame") buckets.
//!
//! Kept as two separate predicates, independent of the tier tables. An
//! entity may sit in both buckets at once and in any certification class.

use opc_core::config::BucketConfig;
use opc_core::models::Entity;

#[derive(Debug, Clone, PartialEq)]
pub struct BucketRules {
    pub distinguished_min_score: f64,
    pub flagged_below_score: f64,
}

impl BucketRules {
    pub fn from_config(config: &BucketConfig) -> Self {
        Self {
            distinguished_min_score: config.distinguished_min_score,
            flagged_below_score: config.flagged_below_score,
        }
    }

    /// Score at or above the distinguished breakpoint.
    pub fn is_distinguished(&self, entity: &Entity) -> bool {
        entity.score >= self.distinguished_min_score
    }

    /// Upstream-flagged as promotional and scoring below the flagged breakpoint.
    pub fn is_flagged(&self, entity: &Entity) -> bool {
        entity.is_flagged_promotional && entity.score < self.flagged_below_score
    }
}

impl Default for BucketRules {
    fn default() -> Self {
        Self::from_config(&BucketConfig::default())
    }
}
