//! Query vector construction

use ndarray::Array1;

use super::Engine;
use crate::core::vector;
use crate::core::ItemId;
use crate::error::EngineError;
use crate::ui;

/// Average the projections of every resolvable seed.
///
/// A seed id missing from the catalog is skipped with a warning so one stale
/// entry in a saved list does not sink the whole request. Only when every
/// seed fails does the request error out.
pub fn build(engine: &Engine, seeds: &[ItemId]) -> Result<Array1<f32>, EngineError> {
	let mut projected = Vec::with_capacity(seeds.len());

	for &seed in seeds {
		let Some(item) = engine.item(seed) else {
			ui::warn(&format!("Seed {} not found in catalog, skipping", seed));
			continue;
		};

		projected.push(engine.bank.project(item));
	}

	if projected.is_empty() {
		return Err(EngineError::NoValidSeeds);
	}

	ui::debug(&format!(
		"Query built from {}/{} seeds ({} columns)",
		projected.len(),
		seeds.len(),
		projected[0].len()
	));

	Ok(vector::mean(&projected))
}
