// Artifact round-trips and drift detection on disk

mod common;

use std::fs;

use curator::config;
use curator::core::{EligibleItem, FilterCriteria, ItemId};
use curator::engine::Engine;
use curator::storage;

use common::{bank, standard_catalog, standard_eligible_src, TERMS};

fn fixture_artifacts() -> storage::Artifacts {
    let bank = bank(TERMS);
    let eligible_src = standard_eligible_src();

    let eligible: Vec<EligibleItem> = eligible_src
        .iter()
        .map(|it| EligibleItem {
            id: it.id,
            name: it.name.clone(),
            price: it.price,
            quality: it.quality,
        })
        .collect();

    let dim = bank.dim();
    let mut values = Vec::with_capacity(eligible_src.len() * dim);
    for it in &eligible_src {
        values.extend(bank.project(it).iter().copied());
    }
    let matrix = ndarray::Array2::from_shape_vec((eligible_src.len(), dim), values)
        .expect("rectangular fixture matrix");

    storage::Artifacts { catalog: standard_catalog(), eligible, bank, matrix }
}

#[test]
fn test_artifact_round_trip() {
    let dir = tempfile::tempdir().expect("tempdir");
    storage::save(dir.path(), &fixture_artifacts()).expect("save artifacts");

    let engine = Engine::load(dir.path()).expect("load saved artifacts");

    assert_eq!(engine.catalog().len(), 7);
    assert_eq!(engine.eligible().len(), 6);

    let results = engine
        .recommend(&[ItemId(10)], 3, &FilterCriteria::default())
        .expect("loaded engine ranks");
    assert!(!results.is_empty());
}

#[test]
fn test_drifted_artifact_is_rejected() {
    let dir = tempfile::tempdir().expect("tempdir");
    storage::save(dir.path(), &fixture_artifacts()).expect("save artifacts");

    // Regenerate one table behind the manifest's back: same row count,
    // different bytes. Alignment alone cannot catch this; the
    // fingerprint must.
    let mut artifacts = fixture_artifacts();
    artifacts.eligible[0].name = "Renamed Behind The Manifest".to_string();
    let bytes = rmp_serde::to_vec(&artifacts.eligible).expect("encode eligible");
    fs::write(dir.path().join(config::ELIGIBLE_FILE), bytes).expect("overwrite eligible");

    let err = Engine::load(dir.path()).unwrap_err();
    assert!(
        err.to_string().contains("rebuild"),
        "drift error should tell the operator to rebuild, got: {}",
        err
    );

    // The escape hatch for intentional rebuilds skips the fingerprints
    // but keeps structural validation.
    let artifacts = storage::load_unverified(dir.path()).expect("unverified load");
    assert_eq!(artifacts.eligible[0].name, "Renamed Behind The Manifest");
}

#[test]
fn test_missing_manifest_only_warns() {
    let dir = tempfile::tempdir().expect("tempdir");
    storage::save(dir.path(), &fixture_artifacts()).expect("save artifacts");

    fs::remove_file(dir.path().join(config::MANIFEST_FILE)).expect("drop manifest");

    let engine = Engine::load(dir.path()).expect("load without manifest");
    assert_eq!(engine.eligible().len(), 6);
}

#[test]
fn test_misaligned_matrix_is_rejected() {
    let mut artifacts = fixture_artifacts();
    artifacts.eligible.pop();

    let err = Engine::from_parts(
        artifacts.catalog,
        artifacts.eligible,
        artifacts.bank,
        artifacts.matrix,
    )
    .unwrap_err();

    assert!(
        err.to_string().contains("rows"),
        "alignment error should mention rows, got: {}",
        err
    );
}
