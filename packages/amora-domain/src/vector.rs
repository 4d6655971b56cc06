use std::collections::HashMap;

use crate::profile::TraitProfile;

/// Feature identifier namespaced by origin. A structured key keeps an
/// interest named "openness" from colliding with the personality trait of
/// the same name.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub enum FeatureKey {
	Personality(String),
	Interest(String),
	Value(String),
}

/// Ephemeral sparse representation of a [`TraitProfile`]; produced per
/// comparison and never persisted.
pub type ComparisonVector = HashMap<FeatureKey, f64>;

/// Maps a trait profile onto a sparse vector.
///
/// Personality traits carry their intensity; interest and value keywords are
/// binary presence features at weight 1.0. Duplicate keywords collapse by map
/// semantics. An empty profile yields an empty vector.
pub fn vectorize(profile: &TraitProfile) -> ComparisonVector {
	let mut vector = ComparisonVector::with_capacity(
		profile.personality_traits.len() + profile.interests.len() + profile.values.len(),
	);

	for (name, intensity) in &profile.personality_traits {
		vector.insert(FeatureKey::Personality(name.clone()), *intensity);
	}
	for keyword in &profile.interests {
		vector.insert(FeatureKey::Interest(keyword.clone()), 1.0);
	}
	for keyword in &profile.values {
		vector.insert(FeatureKey::Value(keyword.clone()), 1.0);
	}

	vector
}
