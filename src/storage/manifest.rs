//! Build manifest and artifact drift detection
//!
//! The eligible table and the feature matrix are only meaningful together;
//! a single regenerated file next to stale siblings silently misaligns row
//! indices. The manifest records an xxh3 fingerprint per artifact at build
//! time so that drift becomes a load-time error instead of bad rankings.

use anyhow::{bail, Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use xxhash_rust::xxh3::xxh3_64;

use crate::config;

/// Artifact files covered by fingerprints
const FINGERPRINTED: &[&str] = &[
	config::CATALOG_FILE,
	config::ELIGIBLE_FILE,
	config::VECTORIZER_FILE,
	config::SCALERS_FILE,
	config::MATRIX_FILE,
];

#[derive(Debug, Serialize, Deserialize)]
pub struct Manifest {
	pub version: String,
	pub built_at: DateTime<Utc>,
	/// Eligible table length == matrix row count at build time
	pub rows: usize,
	/// Vocabulary size of the fitted vectorizer
	pub vocab_size: usize,
	pub fingerprints: Vec<Fingerprint>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct Fingerprint {
	pub file: String,
	pub xxh3: String,
}

impl Manifest {
	/// Fingerprint the artifact files currently on disk.
	pub fn stamp(data_dir: &Path, rows: usize, vocab_size: usize) -> Result<Self> {
		let mut fingerprints = Vec::with_capacity(FINGERPRINTED.len());

		for file in FINGERPRINTED {
			fingerprints.push(Fingerprint {
				file: (*file).to_string(),
				xxh3: fingerprint_file(&data_dir.join(file))?,
			});
		}

		Ok(Self {
			version: env!("CARGO_PKG_VERSION").to_string(),
			built_at: Utc::now(),
			rows,
			vocab_size,
			fingerprints,
		})
	}
}

/// Check every recorded fingerprint against the file on disk.
pub fn verify(data_dir: &Path, manifest: &Manifest) -> Result<()> {
	for fp in &manifest.fingerprints {
		let actual = fingerprint_file(&data_dir.join(&fp.file))?;
		if actual != fp.xxh3 {
			bail!(
				"{} changed since the model build (expected {}, found {}); rebuild the artifact set",
				fp.file,
				fp.xxh3,
				actual
			);
		}
	}
	Ok(())
}

pub fn save(data_dir: &Path, manifest: &Manifest) -> Result<()> {
	let path = data_dir.join(config::MANIFEST_FILE);
	let bytes = rmp_serde::to_vec(manifest).context("Failed to serialize manifest")?;
	fs::write(&path, bytes).with_context(|| format!("Failed to write {}", path.display()))?;
	Ok(())
}

/// Whole-file xxh3 as a 16-character hex string
fn fingerprint_file(path: &Path) -> Result<String> {
	let bytes = fs::read(path).with_context(|| format!("Failed to read {}", path.display()))?;
	Ok(format!("{:016x}", xxh3_64(&bytes)))
}
