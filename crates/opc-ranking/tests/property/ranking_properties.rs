use opc_core::models::{Entity, ScoreBreakdown};
use opc_ranking::{compare_entities, RankingEngine};
use proptest::prelude::*;

fn make_entity(i: usize, score: f64, organic: f64) -> Entity {
    Entity {
        identity: format!("e{i}"),
        category: "Tacos".to_string(),
        geographic_facet: "Mission".to_string(),
        score,
        score_breakdown: ScoreBreakdown {
            organic_signal: organic,
            ..ScoreBreakdown::default()
        },
        narrative_reasons: vec![],
        evidence_items: vec![],
        is_flagged_promotional: false,
    }
}

/// Coarse values so ties actually occur.
fn arb_entities() -> impl Strategy<Value = Vec<Entity>> {
    prop::collection::vec((0u8..6, 0u8..3), 0..40).prop_map(|pairs| {
        pairs
            .into_iter()
            .enumerate()
            .map(|(i, (s, o))| make_entity(i, f64::from(s) * 20.0, f64::from(o)))
            .collect()
    })
}

fn position(entities: &[Entity], identity: &str) -> usize {
    entities.iter().position(|e| e.identity == identity).unwrap()
}

proptest! {
    #[test]
    fn output_is_sorted(entities in arb_entities()) {
        let ranked = RankingEngine::rank(&entities);
        let out: Vec<&Entity> = ranked.entities().collect();
        for w in out.windows(2) {
            prop_assert!(compare_entities(w[0], w[1]) != std::cmp::Ordering::Greater);
        }
    }

    #[test]
    fn ties_keep_snapshot_order(entities in arb_entities()) {
        let ranked = RankingEngine::rank(&entities);
        let out: Vec<&Entity> = ranked.entities().collect();
        for w in out.windows(2) {
            if compare_entities(w[0], w[1]) == std::cmp::Ordering::Equal {
                prop_assert!(
                    position(&entities, &w[0].identity) < position(&entities, &w[1].identity)
                );
            }
        }
    }

    #[test]
    fn ranking_is_idempotent(entities in arb_entities()) {
        let first = RankingEngine::rank(&entities);
        let reordered: Vec<Entity> = first.entities().cloned().collect();
        let second = RankingEngine::rank(&reordered);
        prop_assert_eq!(first.ranked(), second.ranked());
    }

    #[test]
    fn global_ranks_are_a_permutation(entities in arb_entities()) {
        let ranked = RankingEngine::rank(&entities);
        prop_assert_eq!(ranked.len(), entities.len());
        for (i, r) in ranked.ranked().iter().enumerate() {
            prop_assert_eq!(r.global_rank, i + 1);
            prop_assert_eq!(ranked.global_rank_of(&r.entity.identity), Some(i + 1));
        }
    }
}
