//! # Fitted Transforms
//!
//! The pre-fitted encoders that project a game into matrix column space.
//! Fitting happens in the offline model build; at runtime these only
//! transform.

pub mod scaler;
pub mod vectorizer;

pub use scaler::MinMaxScaler;
pub use vectorizer::TextVectorizer;

use anyhow::{bail, Result};
use ndarray::Array1;

use crate::core::Item;

/// The three fitted transforms behind one projection surface.
///
/// Column order is fixed: `[text features..., price, age, quality]`. The
/// corpus matrix is built through this same method, so query vectors land in
/// the identical space by construction.
#[derive(Debug)]
pub struct TransformBank {
	pub text: TextVectorizer,
	pub price_age: MinMaxScaler,
	pub quality: MinMaxScaler,
}

impl TransformBank {
	pub fn new(text: TextVectorizer, price_age: MinMaxScaler, quality: MinMaxScaler) -> Result<Self> {
		if price_age.dim() != 2 {
			bail!("Price/age scaler covers {} columns, expected 2", price_age.dim());
		}
		if quality.dim() != 1 {
			bail!("Quality scaler covers {} columns, expected 1", quality.dim());
		}
		text.check()?;

		Ok(Self { text, price_age, quality })
	}

	/// Total number of columns the bank produces
	pub fn dim(&self) -> usize {
		self.text.dim() + self.price_age.dim() + self.quality.dim()
	}

	/// Project one catalog item into matrix column space
	pub fn project(&self, item: &Item) -> Array1<f32> {
		let mut combined = self.text.transform(&item.description).to_vec();
		combined.extend(self.price_age.transform(&[item.price, item.age_days]));
		combined.extend(self.quality.transform(&[item.quality]));

		Array1::from_vec(combined)
	}
}
