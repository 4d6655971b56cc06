use serde::{Deserialize, Serialize};
use uuid::Uuid;

use amora_domain::ranking::{RankCandidate, RankedMatch, rank_candidates};
use amora_storage::queries;

use crate::{Error, MatchService, Result, decode_profile};

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RankRequest {
	pub user_id: Uuid,
	pub limit: u32,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RankResponse {
	pub matches: Vec<RankedMatch>,
}

impl MatchService {
	/// Ranks the requester's community by compatibility. Read-only: the
	/// candidate snapshot is fetched once and scored in memory. The limit
	/// is capped at `matching.max_rank_limit` here, at the boundary; the
	/// ranker itself accepts any positive limit.
	pub async fn rank(&self, req: RankRequest) -> Result<RankResponse> {
		if req.limit == 0 {
			return Err(Error::InvalidRequest {
				message: "limit must be greater than zero.".to_string(),
			});
		}

		let limit = req.limit.min(self.cfg.matching.max_rank_limit) as usize;
		let requester = queries::fetch_user(&self.db, req.user_id)
			.await?
			.ok_or_else(|| Error::NotFound { message: format!("User {} not found.", req.user_id) })?;
		let requester_profile = decode_profile(requester.user_id, requester.trait_profile.as_ref())
			.ok_or(Error::MissingProfile { user_id: requester.user_id })?;
		let rows =
			queries::fetch_rank_candidates(&self.db, requester.community_id, requester.user_id)
				.await?;
		let candidates = rows
			.into_iter()
			.map(|row| {
				let profile = decode_profile(row.user_id, row.trait_profile.as_ref());

				RankCandidate { user_id: row.user_id, name: row.name, bio: row.bio, profile }
			})
			.collect::<Vec<_>>();

		Ok(RankResponse { matches: rank_candidates(&requester_profile, candidates, limit) })
	}
}
