//! Query vector arithmetic

use ndarray::{Array1, ArrayView1};

/// Euclidean length of a vector
pub fn l2_norm(v: ArrayView1<f32>) -> f32 {
	v.dot(&v).sqrt()
}

/// Cosine similarity with precomputed norms.
///
/// A zero vector on either side scores 0.0 rather than dividing by zero, so
/// an all-out-of-vocabulary query still ranks finitely against every row.
pub fn cosine_with_norms(a: ArrayView1<f32>, a_norm: f32, b: ArrayView1<f32>, b_norm: f32) -> f32 {
	if a_norm == 0.0 || b_norm == 0.0 {
		return 0.0;
	}
	a.dot(&b) / (a_norm * b_norm)
}

/// Element-wise arithmetic mean of equal-length vectors.
///
/// Callers guarantee `vectors` is non-empty; every contributor weighs the
/// same regardless of how many candidates were skipped upstream.
pub fn mean(vectors: &[Array1<f32>]) -> Array1<f32> {
	debug_assert!(!vectors.is_empty());

	let mut sum = Array1::<f32>::zeros(vectors[0].len());
	for v in vectors {
		sum += v;
	}
	sum / vectors.len() as f32
}
