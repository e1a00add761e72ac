use serde::{Deserialize, Serialize};

use super::defaults;

/// Breakpoints of the distinguished ("fame") and flagged ("shame") buckets.
///
/// These buckets are independent of the tier tables and may coexist with
/// any certification class.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BucketConfig {
    /// Scores at or above this are distinguished.
    pub distinguished_min_score: f64,
    /// Promotional entities scoring below this are flagged.
    pub flagged_below_score: f64,
}

impl Default for BucketConfig {
    fn default() -> Self {
        Self {
            distinguished_min_score: defaults::DEFAULT_DISTINGUISHED_MIN_SCORE,
            flagged_below_score: defaults::DEFAULT_FLAGGED_BELOW_SCORE,
        }
    }
}
