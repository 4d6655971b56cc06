use crate::vector::ComparisonVector;

/// Cosine similarity between two sparse vectors, in `[0, 1]`.
///
/// The feature universe is the union of keys; a key absent from one side
/// reads as 0.0 there. When either norm is exactly zero no similarity is
/// computable and the score is 0.0 rather than an error.
pub fn similarity(a: &ComparisonVector, b: &ComparisonVector) -> f64 {
	let mut dot = 0.0;
	let mut norm_a = 0.0;
	let mut norm_b = 0.0;

	for (key, weight) in a {
		norm_a += weight * weight;
		dot += weight * b.get(key).copied().unwrap_or(0.0);
	}
	for weight in b.values() {
		norm_b += weight * weight;
	}

	if norm_a == 0.0 || norm_b == 0.0 {
		return 0.0;
	}

	dot / (norm_a.sqrt() * norm_b.sqrt())
}
