//! Tier classifier over a threshold table.
//!
//! Evaluated top-down: the first entry with `score >= min_score` wins.

use opc_core::models::{ThresholdTable, Tier};

/// Classifies scores against one calling context's threshold table.
#[derive(Debug, Clone)]
pub struct TierClassifier {
    table: ThresholdTable,
}

impl TierClassifier {
    pub fn new(table: ThresholdTable) -> Self {
        Self { table }
    }

    /// Classifier over the 90/75/60 certification table.
    pub fn certification() -> Self {
        Self::new(ThresholdTable::certification())
    }

    /// Classifier over the 85/70/50 leaderboard table.
    pub fn leaderboard() -> Self {
        Self::new(ThresholdTable::leaderboard())
    }

    pub fn table(&self) -> &ThresholdTable {
        &self.table
    }

    /// Index into the table of the tier `score` falls in.
    ///
    /// Total: scores that satisfy no threshold (negative, NaN) land on the
    /// floor entry.
    pub fn classify_index(&self, score: f64) -> usize {
        self.table
            .tiers()
            .iter()
            .position(|t| score >= t.min_score)
            .unwrap_or_else(|| self.table.floor_index())
    }

    /// The tier `score` falls in.
    pub fn classify(&self, score: f64) -> Tier {
        self.table.tier_at(self.classify_index(score))
    }
}

impl Default for TierClassifier {
    fn default() -> Self {
        Self::certification()
    }
}
