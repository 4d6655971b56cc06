use std::cmp::Ordering;

use uuid::Uuid;

use crate::{
	profile::TraitProfile,
	similarity::similarity,
	vector::vectorize,
};

/// One member of the candidate set, as fetched for a ranking call. The
/// profile stays optional so inconsistent rows degrade to exclusion instead
/// of a panic.
#[derive(Clone, Debug)]
pub struct RankCandidate {
	pub user_id: Uuid,
	pub name: String,
	pub bio: Option<String>,
	pub profile: Option<TraitProfile>,
}

#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct RankedMatch {
	pub candidate_id: Uuid,
	pub name: String,
	pub bio: Option<String>,
	pub score: f64,
}

/// Scores and orders an already-filtered candidate set against the
/// requester's profile.
///
/// Candidates without a profile are dropped. Ordering is score descending;
/// equal scores break by candidate id ascending so a fixed snapshot always
/// ranks the same way. The result is truncated to `limit`. An empty
/// candidate set yields an empty list, not an error.
pub fn rank_candidates(
	requester: &TraitProfile,
	candidates: Vec<RankCandidate>,
	limit: usize,
) -> Vec<RankedMatch> {
	let requester_vector = vectorize(requester);
	let mut ranked = candidates
		.into_iter()
		.filter_map(|candidate| {
			let profile = candidate.profile?;
			let score = similarity(&requester_vector, &vectorize(&profile));

			Some(RankedMatch {
				candidate_id: candidate.user_id,
				name: candidate.name,
				bio: candidate.bio,
				score,
			})
		})
		.collect::<Vec<_>>();

	ranked.sort_by(|a, b| cmp_score_desc_then_id(a, b));
	ranked.truncate(limit);

	ranked
}

fn cmp_score_desc_then_id(a: &RankedMatch, b: &RankedMatch) -> Ordering {
	b.score.total_cmp(&a.score).then_with(|| a.candidate_id.cmp(&b.candidate_id))
}
