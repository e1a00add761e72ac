//! # opc-ranking
//!
//! Total order over a snapshot: score descending, then organic-signal
//! component descending, ties kept in snapshot order. Global ranks are
//! computed once per snapshot and never renumbered by filtering.

pub mod comparator;
pub mod engine;

pub use comparator::compare_entities;
pub use engine::{RankedEntity, RankedSnapshot, RankingEngine};
