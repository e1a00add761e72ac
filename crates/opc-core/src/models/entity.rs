use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::errors::SnapshotError;

/// Named contributors to an entity's composite score.
///
/// The components are informational. Nothing guarantees they sum to
/// [`Entity::score`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct ScoreBreakdown {
    /// Organic-signal component (>= 0). Secondary ranking key.
    pub organic_signal: f64,
    /// Engagement component (>= 0).
    pub engagement: f64,
    /// Recency component (>= 0).
    pub recency: f64,
    /// Paid-promotion penalty (<= 0).
    pub paid_promotion_penalty: f64,
}

impl ScoreBreakdown {
    /// Name of the first non-finite component, if any.
    pub fn first_non_finite(&self) -> Option<&'static str> {
        [
            ("scoreBreakdown.organicSignal", self.organic_signal),
            ("scoreBreakdown.engagement", self.engagement),
            ("scoreBreakdown.recency", self.recency),
            ("scoreBreakdown.paidPromotionPenalty", self.paid_promotion_penalty),
        ]
        .into_iter()
        .find(|(_, v)| !v.is_finite())
        .map(|(name, _)| name)
    }

    /// Sum of all components. May differ from the composite score.
    pub fn component_sum(&self) -> f64 {
        self.organic_signal + self.engagement + self.recency + self.paid_promotion_penalty
    }
}

/// A citation supporting an entity's score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct EvidenceItem {
    pub title: String,
    /// Source-community label, e.g. a subreddit or forum name.
    pub source: String,
    /// Engagement magnitude (upvotes, likes, ...).
    #[ts(type = "number")]
    pub engagement: u64,
    pub reply_count: u32,
    pub created_at: DateTime<Utc>,
    pub url: String,
}

/// One ranked subject in a snapshot. Never mutated once admitted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Entity {
    /// Unique within a snapshot. Join key for every derived value.
    pub identity: String,
    /// Descriptive facet (e.g. cuisine).
    pub category: String,
    /// Filterable facet (e.g. neighborhood).
    pub geographic_facet: String,
    /// Composite score, nominally in [0, 100]. Always finite.
    pub score: f64,
    pub score_breakdown: ScoreBreakdown,
    pub narrative_reasons: Vec<String>,
    pub evidence_items: Vec<EvidenceItem>,
    /// Set upstream when heavy paid promotion was detected.
    pub is_flagged_promotional: bool,
}

impl Entity {
    /// The secondary ranking key.
    pub fn organic_signal(&self) -> f64 {
        self.score_breakdown.organic_signal
    }
}

/// A snapshot record as delivered by ingestion, before validation.
///
/// Every field is optional so a record with gaps can still be decoded and
/// then excluded with a precise reason.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawEntity {
    pub identity: Option<String>,
    pub category: Option<String>,
    pub geographic_facet: Option<String>,
    pub score: Option<f64>,
    pub score_breakdown: Option<ScoreBreakdown>,
    pub narrative_reasons: Option<Vec<String>>,
    pub evidence_items: Option<Vec<EvidenceItem>>,
    pub is_flagged_promotional: Option<bool>,
}

impl RawEntity {
    /// Validate the record at `position` and turn it into an [`Entity`].
    pub fn into_entity(self, position: usize) -> Result<Entity, SnapshotError> {
        let missing = |field: &'static str| SnapshotError::MissingField { position, field };

        let identity = self.identity.ok_or_else(|| missing("identity"))?;
        if identity.trim().is_empty() {
            return Err(SnapshotError::EmptyIdentity { position });
        }
        let category = self.category.ok_or_else(|| missing("category"))?;
        let geographic_facet = self
            .geographic_facet
            .ok_or_else(|| missing("geographicFacet"))?;
        let score = self.score.ok_or_else(|| missing("score"))?;
        if !score.is_finite() {
            return Err(SnapshotError::NonFiniteValue {
                position,
                field: "score",
            });
        }
        let score_breakdown = self
            .score_breakdown
            .ok_or_else(|| missing("scoreBreakdown"))?;
        if let Some(field) = score_breakdown.first_non_finite() {
            return Err(SnapshotError::NonFiniteValue { position, field });
        }
        let narrative_reasons = self
            .narrative_reasons
            .ok_or_else(|| missing("narrativeReasons"))?;
        let evidence_items = self
            .evidence_items
            .ok_or_else(|| missing("evidenceItems"))?;
        let is_flagged_promotional = self
            .is_flagged_promotional
            .ok_or_else(|| missing("isFlaggedPromotional"))?;

        Ok(Entity {
            identity,
            category,
            geographic_facet,
            score,
            score_breakdown,
            narrative_reasons,
            evidence_items,
            is_flagged_promotional,
        })
    }
}

impl From<Entity> for RawEntity {
    fn from(e: Entity) -> Self {
        Self {
            identity: Some(e.identity),
            category: Some(e.category),
            geographic_facet: Some(e.geographic_facet),
            score: Some(e.score),
            score_breakdown: Some(e.score_breakdown),
            narrative_reasons: Some(e.narrative_reasons),
            evidence_items: Some(e.evidence_items),
            is_flagged_promotional: Some(e.is_flagged_promotional),
        }
    }
}
