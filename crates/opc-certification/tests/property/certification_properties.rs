use opc_certification::{derive_certificate_id, TierClassifier};
use proptest::prelude::*;

fn arb_classifier() -> impl Strategy<Value = TierClassifier> {
    prop_oneof![
        Just(TierClassifier::certification()),
        Just(TierClassifier::leaderboard()),
    ]
}

proptest! {
    #[test]
    fn classification_is_monotonic(
        classifier in arb_classifier(),
        a in -50.0f64..150.0,
        b in -50.0f64..150.0,
    ) {
        let (hi, lo) = if a >= b { (a, b) } else { (b, a) };
        prop_assert!(classifier.classify(hi).level >= classifier.classify(lo).level);
    }

    #[test]
    fn classification_is_total(classifier in arb_classifier(), score in any::<f64>()) {
        let tier = classifier.classify(score);
        prop_assert!(tier.level < classifier.table().len());
    }

    #[test]
    fn certificate_ids_are_deterministic(identity in ".*", epoch in "[0-9]{4}") {
        prop_assert_eq!(
            derive_certificate_id(&identity, &epoch),
            derive_certificate_id(&identity, &epoch)
        );
    }

    #[test]
    fn certificate_ids_have_five_digit_suffix(identity in ".*") {
        let id = derive_certificate_id(&identity, "2026");
        let suffix = id.rsplit('-').next().unwrap();
        prop_assert_eq!(suffix.len(), 5);
        prop_assert!(suffix.chars().all(|c| c.is_ascii_digit()));
    }
}
