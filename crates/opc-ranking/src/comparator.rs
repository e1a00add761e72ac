use std::cmp::Ordering;

use opc_core::models::Entity;

/// Orders `a` before `b` when it ranks higher.
///
/// Primary key: `score` descending. Secondary key on exact equality:
/// `score_breakdown.organic_signal` descending. Entities equal on both keys
/// compare `Equal`, so a stable sort keeps their snapshot order.
///
/// Uses IEEE total ordering, so the order stays total even for NaN, which
/// intake rejects but direct callers of the ranking engine may pass.
pub fn compare_entities(a: &Entity, b: &Entity) -> Ordering {
    descending(a.score, b.score).then_with(|| descending(a.organic_signal(), b.organic_signal()))
}

fn descending(a: f64, b: f64) -> Ordering {
    b.total_cmp(&a)
}
