//! Tier and threshold-table types.
//!
//! A threshold table is data, not an enum: each calling context supplies its
//! own ordered list of `{min_score, label, class}` entries.

use std::fmt;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::constants::SCORE_MAX;
use crate::errors::ConfigError;

/// Certification class awarded by the certification threshold table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum CertificationClass {
    I,
    II,
    III,
}

impl CertificationClass {
    /// Roman numeral shown on the seal.
    pub fn roman(self) -> &'static str {
        match self {
            Self::I => "I",
            Self::II => "II",
            Self::III => "III",
        }
    }

    pub fn display_name(self) -> String {
        format!("Class {}", self.roman())
    }
}

impl fmt::Display for CertificationClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.roman())
    }
}

/// One row of a threshold table. Closed below: a score qualifies when
/// `score >= min_score`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TierThreshold {
    pub min_score: f64,
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub class: Option<CertificationClass>,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub description: String,
}

impl TierThreshold {
    pub fn new(min_score: f64, label: impl Into<String>) -> Self {
        Self {
            min_score,
            label: label.into(),
            class: None,
            description: String::new(),
        }
    }

    pub fn with_class(mut self, class: CertificationClass) -> Self {
        self.class = Some(class);
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }
}

/// The tier an entity lands in under a given threshold table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Tier {
    pub label: String,
    pub class: Option<CertificationClass>,
    /// Position from the bottom of the table: the floor tier is 0 and higher
    /// tiers have larger levels.
    pub level: usize,
}

impl Tier {
    pub fn is_certified(&self) -> bool {
        self.class.is_some()
    }
}

/// An ordered, validated threshold table, highest `min_score` first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<TierThreshold>", into = "Vec<TierThreshold>")]
pub struct ThresholdTable {
    tiers: Vec<TierThreshold>,
}

impl ThresholdTable {
    /// Build a table, sorting entries by `min_score` descending.
    ///
    /// Rejects an empty table, non-finite thresholds, and duplicate
    /// thresholds (tiers must not overlap).
    pub fn new(mut tiers: Vec<TierThreshold>) -> Result<Self, ConfigError> {
        if tiers.is_empty() {
            return Err(ConfigError::ValidationFailed {
                field: "thresholds".to_string(),
                message: "threshold table must have at least one tier".to_string(),
            });
        }
        if let Some(t) = tiers.iter().find(|t| !t.min_score.is_finite()) {
            return Err(ConfigError::InvalidValue {
                field: "thresholds.min_score".to_string(),
                message: format!("tier `{}` has a non-finite minimum score", t.label),
            });
        }
        tiers.sort_by(|a, b| {
            b.min_score
                .partial_cmp(&a.min_score)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        if let Some(pair) = tiers.windows(2).find(|w| w[0].min_score == w[1].min_score) {
            return Err(ConfigError::ValidationFailed {
                field: "thresholds.min_score".to_string(),
                message: format!(
                    "tiers `{}` and `{}` share minimum score {}",
                    pair[0].label, pair[1].label, pair[0].min_score
                ),
            });
        }
        Ok(Self { tiers })
    }

    /// The 90/75/60 certification table with classes I-III.
    pub fn certification() -> Self {
        Self {
            tiers: vec![
                TierThreshold::new(90.0, "Exceptional")
                    .with_class(CertificationClass::I)
                    .with_description(
                        "Exceptional organic reputation. Minimal advertising footprint.",
                    ),
                TierThreshold::new(75.0, "Outstanding")
                    .with_class(CertificationClass::II)
                    .with_description("Strong organic presence. Limited promotional spend."),
                TierThreshold::new(60.0, "Verified")
                    .with_class(CertificationClass::III)
                    .with_description("Verified organic presence. Balanced visibility."),
                TierThreshold::new(0.0, "Not Certified"),
            ],
        }
    }

    /// The 85/70/50 leaderboard table. It has no certification classes.
    pub fn leaderboard() -> Self {
        Self {
            tiers: vec![
                TierThreshold::new(85.0, "Exceptional")
                    .with_description("Overwhelmingly organic buzz."),
                TierThreshold::new(70.0, "Strong")
                    .with_description("Mostly organic buzz."),
                TierThreshold::new(50.0, "Mixed")
                    .with_description("Organic and promoted visibility in balance."),
                TierThreshold::new(0.0, "Promotion-Driven")
                    .with_description("Visibility driven mainly by promotion."),
            ],
        }
    }

    /// Entries, highest `min_score` first.
    pub fn tiers(&self) -> &[TierThreshold] {
        &self.tiers
    }

    pub fn len(&self) -> usize {
        self.tiers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiers.is_empty()
    }

    /// Index of the lowest entry, used for scores that satisfy no threshold.
    pub fn floor_index(&self) -> usize {
        self.tiers.len().saturating_sub(1)
    }

    /// The [`Tier`] for the entry at `index`.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds.
    pub fn tier_at(&self, index: usize) -> Tier {
        let t = &self.tiers[index];
        Tier {
            label: t.label.clone(),
            class: t.class,
            level: self.floor_index() - index,
        }
    }

    /// Inclusive display range of the entry at `index`, e.g. "75-89".
    ///
    /// The top entry runs to 100. Returns `None` when `index` is out of bounds.
    pub fn score_range(&self, index: usize) -> Option<String> {
        let lower = self.tiers.get(index)?.min_score;
        let upper = match index {
            0 => SCORE_MAX,
            _ => self.tiers[index - 1].min_score - 1.0,
        };
        Some(format!("{}-{}", lower, upper))
    }

    /// The entry awarding `class`, if this table has one.
    pub fn index_of_class(&self, class: CertificationClass) -> Option<usize> {
        self.tiers.iter().position(|t| t.class == Some(class))
    }
}

impl TryFrom<Vec<TierThreshold>> for ThresholdTable {
    type Error = ConfigError;

    fn try_from(tiers: Vec<TierThreshold>) -> Result<Self, Self::Error> {
        Self::new(tiers)
    }
}

impl From<ThresholdTable> for Vec<TierThreshold> {
    fn from(table: ThresholdTable) -> Self {
        table.tiers
    }
}

impl Default for ThresholdTable {
    fn default() -> Self {
        Self::certification()
    }
}
