//! Fitted TF-IDF text vectorizer
//!
//! Transform-only: the vocabulary and per-term idf weights arrive fitted
//! from the model build. Queries are projected into that term space; words
//! the fit never saw drop out.

use anyhow::{bail, Result};
use ndarray::Array1;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TextVectorizer {
	/// Term → column index
	vocabulary: HashMap<String, usize>,
	/// Inverse document frequency per column
	idf: Vec<f32>,
	/// Block weight applied after normalization
	weight: f32,
}

impl TextVectorizer {
	pub fn new(vocabulary: HashMap<String, usize>, idf: Vec<f32>, weight: f32) -> Self {
		Self { vocabulary, idf, weight }
	}

	/// Number of text columns
	pub fn dim(&self) -> usize {
		self.idf.len()
	}

	pub fn weight(&self) -> f32 {
		self.weight
	}

	/// Validate internal consistency after deserialization
	pub fn check(&self) -> Result<()> {
		for (term, &col) in &self.vocabulary {
			if col >= self.idf.len() {
				bail!("Vocabulary term \"{}\" points at column {} outside idf table of {}", term, col, self.idf.len());
			}
		}
		Ok(())
	}

	/// Project text into the fitted term space.
	///
	/// Term counts are multiplied by idf, the vector is L2-normalized, then
	/// scaled by the block weight. An all-unknown text yields a zero block.
	pub fn transform(&self, text: &str) -> Array1<f32> {
		let mut vec = Array1::<f32>::zeros(self.idf.len());

		for token in tokenize(text) {
			if let Some(&col) = self.vocabulary.get(token.as_str()) {
				vec[col] += self.idf[col];
			}
		}

		let norm = vec.dot(&vec).sqrt();
		if norm > 0.0 {
			vec.mapv_inplace(|x| x / norm * self.weight);
		}

		vec
	}
}

/// Lowercased alphanumeric tokens of at least two characters
fn tokenize(text: &str) -> impl Iterator<Item = String> + '_ {
	text.split(|c: char| !c.is_alphanumeric())
		.filter(|token| token.chars().count() >= 2)
		.map(str::to_lowercase)
}
