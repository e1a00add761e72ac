//! Generates TypeScript bindings for the types the view layer consumes.
//!
//! `#[ts(export)]` writes `bindings/*.ts` when `cargo test` runs; this test
//! keeps every exported type importable and TS-derivable.

#[test]
fn export_bindings() {
    use opc_core::models::{
        CertificationClass, ClassificationBucket, Entity, EvidenceItem, FacetValue,
        ScoreBreakdown, Tier, ViewFacets,
    };
    use ts_rs::TS;

    let decls = [
        Entity::decl(&ts_rs::Config::default()),
        EvidenceItem::decl(&ts_rs::Config::default()),
        ScoreBreakdown::decl(&ts_rs::Config::default()),
        Tier::decl(&ts_rs::Config::default()),
        CertificationClass::decl(&ts_rs::Config::default()),
        ClassificationBucket::decl(&ts_rs::Config::default()),
        FacetValue::decl(&ts_rs::Config::default()),
        ViewFacets::decl(&ts_rs::Config::default()),
    ];
    for decl in &decls {
        assert!(!decl.is_empty());
    }
}
