//! Artifact file set and msgpack I/O

use anyhow::{bail, Context, Result};
use ndarray::Array2;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use super::Manifest;
use crate::config;
use crate::core::{EligibleItem, Item};
use crate::models::{MinMaxScaler, TextVectorizer, TransformBank};
use crate::ui;

/// Dense matrix as stored on disk: row-major values with explicit shape
#[derive(Debug, Serialize, Deserialize)]
pub struct MatrixFile {
	pub rows: usize,
	pub cols: usize,
	pub values: Vec<f32>,
}

impl MatrixFile {
	pub fn from_matrix(matrix: &Array2<f32>) -> Self {
		Self {
			rows: matrix.nrows(),
			cols: matrix.ncols(),
			values: matrix.iter().copied().collect(),
		}
	}

	pub fn into_matrix(self) -> Result<Array2<f32>> {
		if self.values.len() != self.rows * self.cols {
			bail!(
				"Matrix artifact claims {}x{} but holds {} values",
				self.rows,
				self.cols,
				self.values.len()
			);
		}
		Array2::from_shape_vec((self.rows, self.cols), self.values).context("Malformed matrix artifact")
	}
}

/// The two fitted scalers travel in one file
#[derive(Debug, Serialize, Deserialize)]
struct ScalerFile {
	price_age: MinMaxScaler,
	quality: MinMaxScaler,
}

/// Everything `Engine::load` needs, fully decoded
pub struct Artifacts {
	pub catalog: Vec<Item>,
	pub eligible: Vec<EligibleItem>,
	pub bank: TransformBank,
	pub matrix: Array2<f32>,
}

/// Load and validate the full artifact set from a data directory.
///
/// When a manifest is present, every artifact's fingerprint must match it;
/// a file regenerated on its own is a hard error telling the operator to
/// rebuild the set. A missing manifest only warns.
pub fn load(data_dir: &Path) -> Result<Artifacts> {
	load_inner(data_dir, true)
}

/// Load without the fingerprint check, for re-stamping the manifest after
/// an intentional rebuild. Structural validation still applies.
pub fn load_unverified(data_dir: &Path) -> Result<Artifacts> {
	load_inner(data_dir, false)
}

fn load_inner(data_dir: &Path, verify: bool) -> Result<Artifacts> {
	match manifest_for(data_dir)? {
		Some(manifest) if verify => {
			super::manifest::verify(data_dir, &manifest)?;
			ui::debug(&format!(
				"Manifest ok: built {} ({} rows, {} terms)",
				manifest.built_at.format("%Y-%m-%d %H:%M UTC"),
				manifest.rows,
				manifest.vocab_size
			));
		}
		Some(_) => ui::debug("Skipping artifact fingerprint check"),
		None => ui::warn("No manifest found, skipping artifact fingerprint check"),
	}

	let catalog: Vec<Item> = read_msgpack(&data_dir.join(config::CATALOG_FILE))?;
	let eligible: Vec<EligibleItem> = read_msgpack(&data_dir.join(config::ELIGIBLE_FILE))?;
	let vectorizer: TextVectorizer = read_msgpack(&data_dir.join(config::VECTORIZER_FILE))?;
	let scalers: ScalerFile = read_msgpack(&data_dir.join(config::SCALERS_FILE))?;
	let matrix_file: MatrixFile = read_msgpack(&data_dir.join(config::MATRIX_FILE))?;

	let bank = TransformBank::new(vectorizer, scalers.price_age, scalers.quality)?;
	let matrix = matrix_file.into_matrix()?;

	Ok(Artifacts { catalog, eligible, bank, matrix })
}

/// Write the full artifact set plus a fresh manifest.
///
/// The production set comes out of the offline model build; this writer
/// exists for fixture generation and for re-stamping a manifest.
pub fn save(data_dir: &Path, artifacts: &Artifacts) -> Result<()> {
	fs::create_dir_all(data_dir)
		.with_context(|| format!("Failed to create {}", data_dir.display()))?;

	write_msgpack(&data_dir.join(config::CATALOG_FILE), &artifacts.catalog)?;
	write_msgpack(&data_dir.join(config::ELIGIBLE_FILE), &artifacts.eligible)?;
	write_msgpack(&data_dir.join(config::VECTORIZER_FILE), &artifacts.bank.text)?;

	let scalers = ScalerFile {
		price_age: artifacts.bank.price_age.clone(),
		quality: artifacts.bank.quality.clone(),
	};
	write_msgpack(&data_dir.join(config::SCALERS_FILE), &scalers)?;

	let matrix_file = MatrixFile::from_matrix(&artifacts.matrix);
	write_msgpack(&data_dir.join(config::MATRIX_FILE), &matrix_file)?;

	let manifest = Manifest::stamp(
		data_dir,
		artifacts.matrix.nrows(),
		artifacts.bank.text.dim(),
	)?;
	super::manifest::save(data_dir, &manifest)?;

	Ok(())
}

fn manifest_for(data_dir: &Path) -> Result<Option<Manifest>> {
	let path = data_dir.join(config::MANIFEST_FILE);
	if !path.exists() {
		return Ok(None);
	}
	read_msgpack(&path).map(Some)
}

fn read_msgpack<T: DeserializeOwned>(path: &Path) -> Result<T> {
	let bytes = fs::read(path).with_context(|| format!("Failed to read {}", path.display()))?;
	rmp_serde::from_slice(&bytes).with_context(|| format!("Failed to decode {}", path.display()))
}

fn write_msgpack<T: Serialize>(path: &Path, value: &T) -> Result<()> {
	let bytes = rmp_serde::to_vec(value).with_context(|| format!("Failed to serialize {}", path.display()))?;
	fs::write(path, bytes).with_context(|| format!("Failed to write {}", path.display()))?;
	Ok(())
}
