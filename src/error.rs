//! Engine error taxonomy

use thiserror::Error;

/// Failures the recommendation engine surfaces to its caller.
///
/// Lookup failures for individual seeds are recovered internally (logged and
/// skipped); these variants are the ones a caller has to handle. The kinds
/// stay distinguishable so the shell can word each one differently.
#[derive(Error, Debug)]
pub enum EngineError {
	#[error("no game matches \"{0}\"")]
	NotFound(String),

	#[error("\"{name}\" matches {count} games, use the id to disambiguate")]
	AmbiguousName { name: String, count: usize },

	#[error("none of the seed ids exist in the catalog")]
	NoValidSeeds,

	#[error("no recommendations left after exclusions and filters")]
	NoRecommendations,
}
