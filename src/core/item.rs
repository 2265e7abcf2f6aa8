//! Catalog item types

use serde::{Deserialize, Serialize};

/// Canonical game identifier (store app id)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ItemId(pub u32);

impl ItemId {
	pub fn value(&self) -> u32 {
		self.0
	}
}

impl std::fmt::Display for ItemId {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "{}", self.0)
	}
}

/// One feature-store row: everything the query builder needs to project a
/// game into matrix space. Immutable after load.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Item {
	pub id: ItemId,
	/// Display name, not guaranteed unique
	pub name: String,
	/// Free text used for the TF-IDF block
	pub description: String,
	pub price: f32,
	/// Wilson lower-bound review score in [0, 1]
	pub quality: f32,
	/// Days since the model's reference date
	pub age_days: f32,
}

/// One row of the eligible table, aligned 1:1 with the feature matrix rows.
///
/// Membership and order may differ from the catalog; the two tables are only
/// ever cross-referenced by id, never by index.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EligibleItem {
	pub id: ItemId,
	pub name: String,
	pub price: f32,
	pub quality: f32,
}
