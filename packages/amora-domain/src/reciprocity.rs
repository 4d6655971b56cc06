use serde::Serialize;
use uuid::Uuid;

/// Relationship state of an unordered user pair, derived from the directed
/// likes between them and whether a match row exists.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PairState {
	NoRelation,
	OneSidedLike,
	MutualLike,
	Matched,
}

/// Classifies a pair from its stored relations. A match row wins over the
/// like flags: the row is the authority for messaging permission, and eager
/// unlike cleanup keeps it from outliving a mutual like.
pub fn classify_pair(forward_like: bool, reverse_like: bool, match_exists: bool) -> PairState {
	if match_exists {
		return PairState::Matched;
	}

	match (forward_like, reverse_like) {
		(true, true) => PairState::MutualLike,
		(true, false) | (false, true) => PairState::OneSidedLike,
		(false, false) => PairState::NoRelation,
	}
}

/// True when inserting a directed like completes a mutual pair, which is the
/// single trigger for match creation.
pub fn like_completes_pair(reverse_like_exists: bool) -> bool {
	reverse_like_exists
}

/// Canonical stored orientation of a match: the smaller UUID first. Both
/// like directions resolve to the same row, which is what the unordered-pair
/// uniqueness constraint is declared over.
pub fn canonical_pair(a: Uuid, b: Uuid) -> (Uuid, Uuid) {
	if a <= b { (a, b) } else { (b, a) }
}
