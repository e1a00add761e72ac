//! ViewEngine: rank a snapshot once, answer many facet queries against it.

use tracing::{debug, info};

use opc_certification::{BucketRules, CertificateIssuer, TierClassifier};
use opc_core::models::{Snapshot, ViewFacets};
use opc_core::traits::ISignalRecordStore;
use opc_core::{OpcConfig, OpcResult, ThresholdContext};
use opc_ranking::{RankedSnapshot, RankingEngine};

use crate::annotation::{AnnotatedEntity, Annotator};
use crate::filter::FilterEngine;
use crate::view::View;

/// Holds the configured classifier, issuer and bucket rules for one
/// threshold context.
#[derive(Debug, Clone)]
pub struct ViewEngine {
    annotator: Annotator,
    filter: FilterEngine,
    context: ThresholdContext,
}

impl ViewEngine {
    pub fn new(config: &OpcConfig, context: ThresholdContext) -> Self {
        let classifier = TierClassifier::new(config.threshold_table(context).clone());
        let buckets = BucketRules::from_config(&config.buckets);
        let issuer = CertificateIssuer::from_config(&config.certification);

        Self {
            annotator: Annotator::new(classifier.clone(), issuer, buckets.clone()),
            filter: FilterEngine::new(classifier, buckets),
            context,
        }
    }

    pub fn context(&self) -> ThresholdContext {
        self.context
    }

    /// Rank `snapshot`. The returned view answers queries without ranking again.
    pub fn prepare(&self, snapshot: &Snapshot) -> PreparedView<'_> {
        let ranked = RankingEngine::rank_snapshot(snapshot);
        info!(
            context = ?self.context,
            entities = ranked.len(),
            excluded = snapshot.excluded_count(),
            "snapshot ranked"
        );
        PreparedView {
            engine: self,
            ranked,
            excluded_count: snapshot.excluded_count(),
        }
    }

    /// Pull records from `store`, build a snapshot and rank it.
    pub fn prepare_from_store(
        &self,
        store: &dyn ISignalRecordStore,
    ) -> OpcResult<PreparedView<'_>> {
        let snapshot = Snapshot::from_records(store.records()?);
        Ok(self.prepare(&snapshot))
    }
}

/// A ranked snapshot bound to the engine that ranked it.
#[derive(Debug, Clone)]
pub struct PreparedView<'a> {
    engine: &'a ViewEngine,
    ranked: RankedSnapshot,
    excluded_count: usize,
}

impl PreparedView<'_> {
    pub fn ranked(&self) -> &RankedSnapshot {
        &self.ranked
    }

    pub fn excluded_count(&self) -> usize {
        self.excluded_count
    }

    pub fn global_rank_of(&self, identity: &str) -> Option<usize> {
        self.ranked.global_rank_of(identity)
    }

    /// Filter and annotate for one facet combination.
    pub fn query(&self, facets: &ViewFacets) -> View {
        let ordered: Vec<AnnotatedEntity> = self
            .ranked
            .ranked()
            .iter()
            .map(|r| self.engine.annotator.annotate(r))
            .collect();

        let filtered: Vec<AnnotatedEntity> = self
            .engine
            .filter
            .filter(self.ranked.ranked(), facets)
            .iter()
            .filter_map(|r| ordered.get(r.global_rank - 1).cloned())
            .collect();

        debug!(
            facets = ?facets,
            total = ordered.len(),
            filtered = filtered.len(),
            "view query"
        );

        View::new(facets.clone(), ordered, filtered, self.excluded_count)
    }
}
