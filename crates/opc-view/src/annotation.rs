//! Per-entity derived values, computed fresh for every query.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use opc_certification::{BucketRules, CertificateIssuer, TierClassifier};
use opc_core::models::{Entity, Tier};
use opc_ranking::RankedEntity;
use opc_signals::{extract_mention_count, EvidenceSummary};

/// An entity as handed to the view projector.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct AnnotatedEntity {
    /// 1-based position in the full, unfiltered order.
    pub global_rank: usize,
    pub entity: Entity,
    pub tier: Tier,
    /// `None` when the tier carries no certification class.
    pub certificate_id: Option<String>,
    #[ts(type = "number")]
    pub mention_count: u64,
    pub distinguished: bool,
    pub flagged: bool,
    pub evidence: EvidenceSummary,
}

/// Derives every annotation for a ranked entity.
#[derive(Debug, Clone)]
pub struct Annotator {
    classifier: TierClassifier,
    issuer: CertificateIssuer,
    buckets: BucketRules,
}

impl Annotator {
    pub fn new(classifier: TierClassifier, issuer: CertificateIssuer, buckets: BucketRules) -> Self {
        Self {
            classifier,
            issuer,
            buckets,
        }
    }

    pub fn annotate(&self, ranked: &RankedEntity) -> AnnotatedEntity {
        let entity = &ranked.entity;
        let tier = self.classifier.classify(entity.score);
        let certificate_id = self.issuer.issue(&entity.identity, &tier);

        AnnotatedEntity {
            global_rank: ranked.global_rank,
            tier,
            certificate_id,
            mention_count: extract_mention_count(&entity.narrative_reasons),
            distinguished: self.buckets.is_distinguished(entity),
            flagged: self.buckets.is_flagged(entity),
            evidence: EvidenceSummary::from_items(&entity.evidence_items),
            entity: entity.clone(),
        }
    }
}
