//! FilterEngine: AND-composition of independent facet predicates.
//!
//! Filtering only removes entries. Relative rank order and global ranks are
//! left exactly as the ranking engine produced them.

use opc_certification::{BucketRules, TierClassifier};
use opc_core::models::{CertificationClass, ClassificationBucket, Entity, ViewFacets};
use opc_ranking::RankedEntity;

#[derive(Debug, Clone)]
pub struct FilterEngine {
    classifier: TierClassifier,
    buckets: BucketRules,
}

impl FilterEngine {
    pub fn new(classifier: TierClassifier, buckets: BucketRules) -> Self {
        Self {
            classifier,
            buckets,
        }
    }

    /// Keep the entries of `ordered` that pass every facet in `facets`.
    pub fn filter(&self, ordered: &[RankedEntity], facets: &ViewFacets) -> Vec<RankedEntity> {
        ordered
            .iter()
            .filter(|r| self.matches(&r.entity, facets))
            .cloned()
            .collect()
    }

    /// `true` when `entity` passes every facet.
    pub fn matches(&self, entity: &Entity, facets: &ViewFacets) -> bool {
        self.matches_classification(entity, facets.classification)
            && facets.geography.matches(&entity.geographic_facet)
            && facets.category.matches(&entity.category)
    }

    /// Classification-bucket predicate on its own.
    pub fn matches_classification(&self, entity: &Entity, bucket: ClassificationBucket) -> bool {
        let class = || self.classifier.classify(entity.score).class;
        match bucket {
            ClassificationBucket::All => true,
            ClassificationBucket::CertifiedOnly => class().is_some(),
            ClassificationBucket::ClassI => class() == Some(CertificationClass::I),
            ClassificationBucket::ClassII => class() == Some(CertificationClass::II),
            ClassificationBucket::ClassIII => class() == Some(CertificationClass::III),
            ClassificationBucket::DistinguishedOnly => self.buckets.is_distinguished(entity),
            ClassificationBucket::FlaggedOnly => self.buckets.is_flagged(entity),
        }
    }
}

impl Default for FilterEngine {
    fn default() -> Self {
        Self::new(TierClassifier::default(), BucketRules::default())
    }
}
