use opc_core::models::*;
use proptest::prelude::*;

fn make_raw(identity: String, score: Option<f64>) -> RawEntity {
    RawEntity {
        identity: Some(identity),
        category: Some("Cafe".to_string()),
        geographic_facet: Some("SoMa".to_string()),
        score,
        score_breakdown: Some(ScoreBreakdown::default()),
        narrative_reasons: Some(vec![]),
        evidence_items: Some(vec![]),
        is_flagged_promotional: Some(false),
    }
}

fn arb_score() -> impl Strategy<Value = Option<f64>> {
    prop_oneof![
        4 => (0.0f64..=100.0).prop_map(Some),
        1 => Just(None),
        1 => Just(Some(f64::NAN)),
    ]
}

proptest! {
    #[test]
    fn every_record_is_admitted_or_excluded(
        records in prop::collection::vec(("[a-e]", arb_score()), 0..40)
    ) {
        let n = records.len();
        let raws: Vec<RawEntity> = records
            .into_iter()
            .map(|(id, score)| make_raw(id, score))
            .collect();
        let snapshot = Snapshot::from_records(raws);
        prop_assert_eq!(snapshot.len() + snapshot.excluded_count(), n);
    }

    #[test]
    fn admitted_identities_are_unique_and_scores_finite(
        records in prop::collection::vec(("[a-e]", arb_score()), 0..40)
    ) {
        let raws: Vec<RawEntity> = records
            .into_iter()
            .map(|(id, score)| make_raw(id, score))
            .collect();
        let snapshot = Snapshot::from_records(raws);
        let mut ids: Vec<&str> = snapshot.entities().iter().map(|e| e.identity.as_str()).collect();
        let before = ids.len();
        ids.sort_unstable();
        ids.dedup();
        prop_assert_eq!(ids.len(), before);
        prop_assert!(snapshot.entities().iter().all(|e| e.score.is_finite()));
    }

    #[test]
    fn excluded_positions_are_increasing(
        records in prop::collection::vec(("[a-c]", arb_score()), 0..30)
    ) {
        let raws: Vec<RawEntity> = records
            .into_iter()
            .map(|(id, score)| make_raw(id, score))
            .collect();
        let snapshot = Snapshot::from_records(raws);
        let positions: Vec<usize> = snapshot.excluded().iter().map(|x| x.position).collect();
        prop_assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }
}
