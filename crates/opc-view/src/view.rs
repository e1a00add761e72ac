//! The query result handed to the view projector.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use opc_core::models::{CertificationClass, Tier, ViewFacets};

use crate::annotation::AnnotatedEntity;

/// Counts over the full ordered list, plus the size of the filtered view.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct ViewSummary {
    pub total: usize,
    pub filtered: usize,
    pub certified: usize,
    pub class_i: usize,
    pub class_ii: usize,
    pub class_iii: usize,
    pub distinguished: usize,
    pub flagged: usize,
    /// Snapshot records rejected at intake.
    pub excluded: usize,
}

impl ViewSummary {
    pub(crate) fn tally(ordered: &[AnnotatedEntity], filtered: usize, excluded: usize) -> Self {
        let mut summary = Self {
            total: ordered.len(),
            filtered,
            excluded,
            ..Self::default()
        };
        for entry in ordered {
            match entry.tier.class {
                Some(CertificationClass::I) => summary.class_i += 1,
                Some(CertificationClass::II) => summary.class_ii += 1,
                Some(CertificationClass::III) => summary.class_iii += 1,
                None => {}
            }
            if entry.distinguished {
                summary.distinguished += 1;
            }
            if entry.flagged {
                summary.flagged += 1;
            }
        }
        summary.certified = summary.class_i + summary.class_ii + summary.class_iii;
        summary
    }
}

/// One query's output: the full ordered list, the filtered subsequence, and
/// per-identity lookups of the derived values.
#[derive(Debug, Clone, PartialEq, Serialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct View {
    pub facets: ViewFacets,
    pub ordered_full_list: Vec<AnnotatedEntity>,
    pub filtered: Vec<AnnotatedEntity>,
    pub excluded_count: usize,
    pub summary: ViewSummary,
    #[serde(skip)]
    #[ts(skip)]
    positions: HashMap<String, usize>,
}

impl View {
    pub(crate) fn new(
        facets: ViewFacets,
        ordered_full_list: Vec<AnnotatedEntity>,
        filtered: Vec<AnnotatedEntity>,
        excluded_count: usize,
    ) -> Self {
        let mut positions = HashMap::with_capacity(ordered_full_list.len());
        for (i, entry) in ordered_full_list.iter().enumerate() {
            positions.entry(entry.entity.identity.clone()).or_insert(i);
        }
        let summary = ViewSummary::tally(&ordered_full_list, filtered.len(), excluded_count);
        Self {
            facets,
            ordered_full_list,
            filtered,
            excluded_count,
            summary,
            positions,
        }
    }

    /// Look up an entry of the full list by identity.
    pub fn get(&self, identity: &str) -> Option<&AnnotatedEntity> {
        self.positions
            .get(identity)
            .and_then(|&i| self.ordered_full_list.get(i))
    }

    pub fn global_rank_of(&self, identity: &str) -> Option<usize> {
        self.get(identity).map(|e| e.global_rank)
    }

    pub fn derived_tier(&self, identity: &str) -> Option<&Tier> {
        self.get(identity).map(|e| &e.tier)
    }

    /// `None` both for unknown identities and for uncertified entities.
    pub fn derived_certificate_id(&self, identity: &str) -> Option<&str> {
        self.get(identity).and_then(|e| e.certificate_id.as_deref())
    }

    pub fn derived_mention_count(&self, identity: &str) -> Option<u64> {
        self.get(identity).map(|e| e.mention_count)
    }

    /// Identities of the filtered view, in rank order.
    pub fn filtered_identities(&self) -> Vec<&str> {
        self.filtered
            .iter()
            .map(|e| e.entity.identity.as_str())
            .collect()
    }

    /// Global ranks of the filtered view, in rank order.
    pub fn filtered_ranks(&self) -> Vec<usize> {
        self.filtered.iter().map(|e| e.global_rank).collect()
    }
}
