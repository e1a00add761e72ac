use opc_signals::extract_mention_count;
use proptest::prelude::*;

proptest! {
    #[test]
    fn extraction_never_panics(reasons in prop::collection::vec(".*", 0..8)) {
        let _ = extract_mention_count(&reasons);
    }

    #[test]
    fn leading_match_wins_over_any_tail(
        n in 0u64..1_000_000,
        recent in any::<bool>(),
        tail in prop::collection::vec(".*", 0..5),
    ) {
        let head = if recent {
            format!("{n} recent mentions")
        } else {
            format!("{n} mentions")
        };
        let mut reasons = vec![head];
        reasons.extend(tail);
        prop_assert_eq!(extract_mention_count(&reasons), n);
    }

    #[test]
    fn reasons_without_digits_yield_zero(reasons in prop::collection::vec("[a-zA-Z ]*", 0..8)) {
        prop_assert_eq!(extract_mention_count(&reasons), 0);
    }
}
