//! Check command - verify the artifact set on disk

use anyhow::{Context, Result};
use std::time::Instant;

use crate::config;
use crate::engine::Engine;
use crate::storage;
use crate::ui;

pub fn run(update: bool) -> Result<()> {
	ui::print_logo();
	println!();

	let dir = config::data_dir()
		.context("Data directory not found. Pass --data-dir or set CURATOR_DATA_DIR")?;
	ui::info(&format!("Checking artifacts in {}", dir.display()));

	let start = Instant::now();

	// Full load exercises fingerprints, decoding, transform consistency
	// and matrix alignment in one pass. With --update the fingerprint
	// check is skipped so a rebuilt set can be re-stamped.
	let artifacts = if update {
		storage::load_unverified(&dir)?
	} else {
		storage::load(&dir)?
	};
	let engine = Engine::from_parts(
		artifacts.catalog,
		artifacts.eligible,
		artifacts.bank,
		artifacts.matrix,
	)?;

	let (rows, cols) = engine.matrix_shape();
	ui::success(&format!(
		"{} catalog entries, {} eligible, {}x{} matrix",
		engine.catalog().len(),
		engine.eligible().len(),
		rows,
		cols
	));
	ui::success(&format!("Artifact set ok in {:.2}s", start.elapsed().as_secs_f32()));

	if update {
		let vocab = cols - 3; // text block plus price, age, quality
		let manifest = storage::Manifest::stamp(&dir, rows, vocab)?;
		storage::manifest::save(&dir, &manifest)?;
		ui::success("Manifest re-stamped");
	}

	Ok(())
}
