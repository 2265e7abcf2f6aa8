//! # Recommendation Engine
//!
//! One immutable snapshot per handle: catalog, eligible table, fitted
//! transforms and the weighted feature matrix. Loading validates that all
//! artifacts belong together; after that every request is a single
//! read-only batch computation, so handles are freely shared across
//! threads. Hot reload means building a new engine and swapping the
//! reference, never mutating in place.

pub mod query;
pub mod rank;

pub use rank::Ranked;

use anyhow::{bail, Result};
use ndarray::Array2;
use std::collections::HashMap;
use std::path::Path;

use crate::core::{vector, EligibleItem, FilterCriteria, Item, ItemId};
use crate::error::EngineError;
use crate::models::TransformBank;
use crate::storage;

#[derive(Debug)]
pub struct Engine {
	catalog: Vec<Item>,
	/// Catalog position by id, for seed lookups
	by_id: HashMap<ItemId, usize>,
	/// Row-aligned with `matrix`
	eligible: Vec<EligibleItem>,
	bank: TransformBank,
	matrix: Array2<f32>,
	/// Per-row L2 norms, computed once at load
	row_norms: Vec<f32>,
}

impl Engine {
	/// Load a complete artifact set from a data directory.
	pub fn load(data_dir: &Path) -> Result<Self> {
		let artifacts = storage::load(data_dir)?;
		Self::from_parts(artifacts.catalog, artifacts.eligible, artifacts.bank, artifacts.matrix)
	}

	/// Assemble an engine from already-loaded parts.
	///
	/// This is the only constructor; `load` goes through it too, so fixture
	/// engines in tests get the same alignment validation as production.
	pub fn from_parts(
		catalog: Vec<Item>,
		eligible: Vec<EligibleItem>,
		bank: TransformBank,
		matrix: Array2<f32>,
	) -> Result<Self> {
		if matrix.nrows() != eligible.len() {
			bail!(
				"Feature matrix has {} rows but the eligible table has {}; rebuild the artifact set",
				matrix.nrows(),
				eligible.len()
			);
		}
		if matrix.ncols() != bank.dim() {
			bail!(
				"Feature matrix has {} columns but the transforms produce {}; rebuild the artifact set",
				matrix.ncols(),
				bank.dim()
			);
		}

		let mut by_id = HashMap::with_capacity(catalog.len());
		for (pos, item) in catalog.iter().enumerate() {
			if by_id.insert(item.id, pos).is_some() {
				bail!("Duplicate catalog id {}", item.id);
			}
		}

		let row_norms = matrix.outer_iter().map(vector::l2_norm).collect();

		Ok(Self { catalog, by_id, eligible, bank, matrix, row_norms })
	}

	/// Resolve a name or numeric id to a canonical item id.
	///
	/// Numeric input is an id probe only: an unknown id fails rather than
	/// falling back to name matching, so games with numeric names must be
	/// addressed by id. Name matching is case-insensitive and exact.
	pub fn resolve(&self, name_or_id: &str) -> std::result::Result<ItemId, EngineError> {
		let input = name_or_id.trim();

		if let Ok(raw) = input.parse::<u32>() {
			let id = ItemId(raw);
			return if self.by_id.contains_key(&id) {
				Ok(id)
			} else {
				Err(EngineError::NotFound(input.to_string()))
			};
		}

		let wanted = input.to_lowercase();
		let mut matches = self
			.catalog
			.iter()
			.filter(|item| item.name.to_lowercase() == wanted);

		match (matches.next(), matches.next()) {
			(None, _) => Err(EngineError::NotFound(input.to_string())),
			(Some(item), None) => Ok(item.id),
			(Some(_), Some(_)) => {
				let count = 2 + matches.count();
				Err(EngineError::AmbiguousName { name: input.to_string(), count })
			}
		}
	}

	/// Rank the eligible table against the averaged seed vector.
	///
	/// Seeds that fail catalog lookup are skipped with a warning; their ids
	/// are still excluded from the results by raw membership.
	pub fn recommend(
		&self,
		seeds: &[ItemId],
		n: usize,
		filters: &FilterCriteria,
	) -> std::result::Result<Vec<Ranked>, EngineError> {
		let query = query::build(self, seeds)?;
		rank::rank(self, &query, n, seeds, filters)
	}

	/// Catalog row for an id, if the id exists
	pub fn item(&self, id: ItemId) -> Option<&Item> {
		self.by_id.get(&id).map(|&pos| &self.catalog[pos])
	}

	pub fn catalog(&self) -> &[Item] {
		&self.catalog
	}

	pub fn eligible(&self) -> &[EligibleItem] {
		&self.eligible
	}

	/// Matrix shape as (rows, columns)
	pub fn matrix_shape(&self) -> (usize, usize) {
		(self.matrix.nrows(), self.matrix.ncols())
	}
}
