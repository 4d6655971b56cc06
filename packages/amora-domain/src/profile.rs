use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

/// Structured trait representation derived from a user's biography text.
///
/// An absent trait key means "unknown", never "zero intensity". The only
/// place absence is read as zero is inside the similarity computation, where
/// a missing feature contributes nothing to the dot product.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct TraitProfile {
	/// Trait name to intensity in `[0, 1]`.
	#[serde(default)]
	pub personality_traits: BTreeMap<String, f64>,
	/// Membership-only keywords; no weight.
	#[serde(default)]
	pub interests: BTreeSet<String>,
	#[serde(default)]
	pub values: BTreeSet<String>,
}
impl TraitProfile {
	pub fn is_empty(&self) -> bool {
		self.personality_traits.is_empty() && self.interests.is_empty() && self.values.is_empty()
	}
}
