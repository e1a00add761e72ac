use serde::{Deserialize, Serialize};

use crate::models::ThresholdTable;

/// Threshold table for the leaderboard display context (85/70/50, no classes).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LeaderboardConfig {
    pub thresholds: ThresholdTable,
}

impl Default for LeaderboardConfig {
    fn default() -> Self {
        Self {
            thresholds: ThresholdTable::leaderboard(),
        }
    }
}
