//! Fitted min-max scalers for the numeric feature blocks

use serde::{Deserialize, Serialize};

/// Per-column range normalizer, fitted during the model build.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MinMaxScaler {
	/// Smallest value of each column seen during fit
	data_min: Vec<f32>,
	/// Largest value of each column seen during fit
	data_max: Vec<f32>,
	/// Block weight applied to every scaled value
	weight: f32,
}

impl MinMaxScaler {
	pub fn new(data_min: Vec<f32>, data_max: Vec<f32>, weight: f32) -> Self {
		debug_assert_eq!(data_min.len(), data_max.len());
		Self { data_min, data_max, weight }
	}

	/// Number of columns this scaler covers
	pub fn dim(&self) -> usize {
		self.data_min.len()
	}

	pub fn weight(&self) -> f32 {
		self.weight
	}

	/// Map each value into the fitted range, then apply the block weight.
	///
	/// Values outside the fitted range extrapolate beyond [0, 1], same as
	/// the fit-time behavior. A degenerate column (min == max) maps to 0.
	pub fn transform(&self, values: &[f32]) -> Vec<f32> {
		debug_assert_eq!(values.len(), self.dim());

		values
			.iter()
			.enumerate()
			.map(|(i, &v)| {
				let range = self.data_max[i] - self.data_min[i];
				if range == 0.0 {
					0.0
				} else {
					(v - self.data_min[i]) / range * self.weight
				}
			})
			.collect()
	}
}
