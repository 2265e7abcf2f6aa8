//! Similarity ranking over the weighted feature matrix

use ndarray::Array1;
use rayon::prelude::*;
use serde::Serialize;

use super::Engine;
use crate::core::vector;
use crate::core::{FilterCriteria, ItemId};
use crate::error::EngineError;

/// One ranked result: row index into the eligible table plus cosine score.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Ranked {
	pub index: usize,
	pub score: f32,
}

/// Score every eligible row, drop excluded rows, return the top `n`.
///
/// Exclusion filters row indices instead of overwriting scores with a
/// sentinel, so a legitimate -1.0 cosine score survives ranking. Seed rows
/// are excluded by raw id membership, independent of whether the seed
/// contributed to the query vector.
pub fn rank(
	engine: &Engine,
	query: &Array1<f32>,
	n: usize,
	seeds: &[ItemId],
	filters: &FilterCriteria,
) -> Result<Vec<Ranked>, EngineError> {
	let query_norm = vector::l2_norm(query.view());

	let scores: Vec<f32> = (0..engine.matrix.nrows())
		.into_par_iter()
		.map(|row| {
			vector::cosine_with_norms(
				query.view(),
				query_norm,
				engine.matrix.row(row),
				engine.row_norms[row],
			)
		})
		.collect();

	let mut ranked: Vec<Ranked> = scores
		.iter()
		.enumerate()
		.filter(|&(row, _)| {
			let item = &engine.eligible[row];
			!seeds.contains(&item.id) && filters.accepts(item.price, item.quality)
		})
		.map(|(index, &score)| Ranked { index, score })
		.collect();

	if ranked.is_empty() {
		return Err(EngineError::NoRecommendations);
	}

	// Descending score; exact ties resolve by ascending row index so the
	// ordering is total and repeat calls agree.
	ranked.sort_unstable_by(|a, b| b.score.total_cmp(&a.score).then(a.index.cmp(&b.index)));
	ranked.truncate(n);

	Ok(ranked)
}
