//! RankingEngine: orders a snapshot once and records global ranks.

use std::collections::HashMap;

use opc_core::models::{Entity, Snapshot};
use tracing::debug;

use crate::comparator::compare_entities;

/// An entity with its 1-based position in the full, unfiltered order.
#[derive(Debug, Clone, PartialEq)]
pub struct RankedEntity {
    pub global_rank: usize,
    pub entity: Entity,
}

/// The full ranked order of one snapshot plus an identity → rank map.
#[derive(Debug, Clone, Default)]
pub struct RankedSnapshot {
    ranked: Vec<RankedEntity>,
    rank_of: HashMap<String, usize>,
}

impl RankedSnapshot {
    /// Entities in rank order.
    pub fn ranked(&self) -> &[RankedEntity] {
        &self.ranked
    }

    /// Plain entities in rank order.
    pub fn entities(&self) -> impl Iterator<Item = &Entity> + '_ {
        self.ranked.iter().map(|r| &r.entity)
    }

    /// 1-based rank of `identity` in the full order.
    pub fn global_rank_of(&self, identity: &str) -> Option<usize> {
        self.rank_of.get(identity).copied()
    }

    pub fn len(&self) -> usize {
        self.ranked.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ranked.is_empty()
    }
}

/// Stateless ranking over entity sequences. Never mutates its input.
pub struct RankingEngine;

impl RankingEngine {
    /// Rank `entities`, keeping snapshot order among exact ties.
    pub fn rank(entities: &[Entity]) -> RankedSnapshot {
        let mut order: Vec<&Entity> = entities.iter().collect();
        // `sort_by` is stable.
        order.sort_by(|a, b| compare_entities(a, b));

        let ranked: Vec<RankedEntity> = order
            .into_iter()
            .enumerate()
            .map(|(i, e)| RankedEntity {
                global_rank: i + 1,
                entity: e.clone(),
            })
            .collect();

        // Identities are unique within a snapshot; on a repeat the better rank stays.
        let mut rank_of = HashMap::with_capacity(ranked.len());
        for r in &ranked {
            rank_of
                .entry(r.entity.identity.clone())
                .or_insert(r.global_rank);
        }

        debug!(ranked = ranked.len(), "ranked snapshot");

        RankedSnapshot { ranked, rank_of }
    }

    /// Rank every admitted entity of `snapshot`.
    pub fn rank_snapshot(snapshot: &Snapshot) -> RankedSnapshot {
        Self::rank(snapshot.entities())
    }
}
