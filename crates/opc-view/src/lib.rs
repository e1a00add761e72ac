//! # opc-view
//!
//! Query side of the pipeline. A snapshot is ranked once; every query then
//! filters the ranked order by an immutable [`opc_core::ViewFacets`] value
//! and annotates entities with tier, certificate identifier, mention count
//! and bucket membership. Each entity keeps its global rank from the full
//! order in every filtered view.

pub mod annotation;
pub mod engine;
pub mod filter;
pub mod view;

pub use annotation::{AnnotatedEntity, Annotator};
pub use engine::{PreparedView, ViewEngine};
pub use filter::FilterEngine;
pub use view::{View, ViewSummary};
