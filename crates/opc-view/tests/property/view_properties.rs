use opc_core::models::{ClassificationBucket, Entity, FacetValue, ScoreBreakdown, Snapshot, ViewFacets};
use opc_core::{OpcConfig, ThresholdContext};
use opc_ranking::RankingEngine;
use opc_view::{FilterEngine, ViewEngine};
use proptest::prelude::*;

const HOODS: [&str; 3] = ["Mission", "Sunset", "Richmond"];
const CATEGORIES: [&str; 2] = ["Dim Sum", "Burritos"];

fn make_entity(i: usize, score: f64, organic: f64, hood: usize, cat: usize, promo: bool) -> Entity {
    Entity {
        identity: format!("e{i}"),
        category: CATEGORIES[cat].to_string(),
        geographic_facet: HOODS[hood].to_string(),
        score,
        score_breakdown: ScoreBreakdown {
            organic_signal: organic,
            ..ScoreBreakdown::default()
        },
        narrative_reasons: vec![],
        evidence_items: vec![],
        is_flagged_promotional: promo,
    }
}

fn arb_entities() -> impl Strategy<Value = Vec<Entity>> {
    prop::collection::vec((0u8..=20, 0u8..3, 0usize..3, 0usize..2, any::<bool>()), 0..30).prop_map(
        |rows| {
            rows.into_iter()
                .enumerate()
                .map(|(i, (s, o, h, c, p))| {
                    make_entity(i, f64::from(s) * 5.0, f64::from(o), h, c, p)
                })
                .collect()
        },
    )
}

fn arb_bucket() -> impl Strategy<Value = ClassificationBucket> {
    prop_oneof![
        Just(ClassificationBucket::All),
        Just(ClassificationBucket::CertifiedOnly),
        Just(ClassificationBucket::ClassI),
        Just(ClassificationBucket::ClassII),
        Just(ClassificationBucket::ClassIII),
        Just(ClassificationBucket::DistinguishedOnly),
        Just(ClassificationBucket::FlaggedOnly),
    ]
}

fn arb_facet(values: &'static [&'static str]) -> impl Strategy<Value = FacetValue> {
    prop_oneof![
        Just(FacetValue::All),
        (0..values.len()).prop_map(move |i| FacetValue::only(values[i])),
    ]
}

fn arb_facets() -> impl Strategy<Value = ViewFacets> {
    (arb_bucket(), arb_facet(&HOODS), arb_facet(&CATEGORIES)).prop_map(|(b, g, c)| {
        ViewFacets::all()
            .with_classification(b)
            .with_geography(g)
            .with_category(c)
    })
}

/// Split `facets` into its three single-facet parts.
fn parts(facets: &ViewFacets) -> [ViewFacets; 3] {
    [
        ViewFacets::all().with_classification(facets.classification),
        ViewFacets::all().with_geography(facets.geography.clone()),
        ViewFacets::all().with_category(facets.category.clone()),
    ]
}

proptest! {
    #[test]
    fn filtering_keeps_global_ranks(entities in arb_entities(), facets in arb_facets()) {
        let ranked = RankingEngine::rank(&entities);
        for r in FilterEngine::default().filter(ranked.ranked(), &facets) {
            prop_assert_eq!(ranked.global_rank_of(&r.entity.identity), Some(r.global_rank));
        }
    }

    #[test]
    fn filtered_is_a_subsequence(entities in arb_entities(), facets in arb_facets()) {
        let ranked = RankingEngine::rank(&entities);
        let out = FilterEngine::default().filter(ranked.ranked(), &facets);
        let ranks: Vec<usize> = out.iter().map(|r| r.global_rank).collect();
        prop_assert!(ranks.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn facet_order_does_not_matter(entities in arb_entities(), facets in arb_facets()) {
        let ranked = RankingEngine::rank(&entities);
        let engine = FilterEngine::default();
        let [a, b, c] = parts(&facets);

        let combined = engine.filter(ranked.ranked(), &facets);
        let abc = engine.filter(&engine.filter(&engine.filter(ranked.ranked(), &a), &b), &c);
        let cba = engine.filter(&engine.filter(&engine.filter(ranked.ranked(), &c), &b), &a);
        prop_assert_eq!(&combined, &abc);
        prop_assert_eq!(&combined, &cba);
    }

    #[test]
    fn filtering_is_idempotent(entities in arb_entities(), facets in arb_facets()) {
        let ranked = RankingEngine::rank(&entities);
        let engine = FilterEngine::default();
        let once = engine.filter(ranked.ranked(), &facets);
        let twice = engine.filter(&once, &facets);
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn query_ranks_match_full_order(entities in arb_entities(), facets in arb_facets()) {
        let engine = ViewEngine::new(&OpcConfig::default(), ThresholdContext::Certification);
        let prepared = engine.prepare(&Snapshot::from_entities(entities));
        let view = prepared.query(&facets);

        for entry in &view.filtered {
            prop_assert_eq!(view.global_rank_of(&entry.entity.identity), Some(entry.global_rank));
            prop_assert_eq!(
                &view.ordered_full_list[entry.global_rank - 1].entity.identity,
                &entry.entity.identity
            );
        }
        prop_assert_eq!(view.summary.filtered, view.filtered.len());
    }

    #[test]
    fn certificates_only_for_certified(entities in arb_entities()) {
        let engine = ViewEngine::new(&OpcConfig::default(), ThresholdContext::Certification);
        let view = engine
            .prepare(&Snapshot::from_entities(entities))
            .query(&ViewFacets::all());
        for entry in &view.ordered_full_list {
            prop_assert_eq!(entry.certificate_id.is_some(), entry.tier.is_certified());
        }
    }
}
