use serde::{Deserialize, Serialize};
use uuid::Uuid;

use amora_domain::reciprocity::{PairState, canonical_pair, classify_pair};
use amora_storage::queries;

use crate::{Error, MatchService, Result};

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PairStateRequest {
	pub user_a: Uuid,
	pub user_b: Uuid,
}

#[derive(Clone, Debug, Serialize)]
pub struct PairStateResponse {
	pub state: PairState,
	pub can_message: bool,
}

impl MatchService {
	/// Reports the reciprocity state of a pair. `can_message` is true iff a
	/// match row exists; the row is the sole authority for messaging
	/// permission.
	pub async fn pair_state(&self, req: PairStateRequest) -> Result<PairStateResponse> {
		if req.user_a == req.user_b {
			return Err(Error::InvalidRequest {
				message: "Pair state requires two distinct users.".to_string(),
			});
		}

		let forward = queries::like_exists(&self.db, req.user_a, req.user_b).await?;
		let reverse = queries::like_exists(&self.db, req.user_b, req.user_a).await?;
		let (user_a, user_b) = canonical_pair(req.user_a, req.user_b);
		let match_row = queries::fetch_match(&self.db, user_a, user_b).await?;
		let state = classify_pair(forward, reverse, match_row.is_some());

		Ok(PairStateResponse { state, can_message: match_row.is_some() })
	}

	pub async fn can_message(&self, user_a: Uuid, user_b: Uuid) -> Result<bool> {
		if user_a == user_b {
			return Err(Error::InvalidRequest {
				message: "Messaging requires two distinct users.".to_string(),
			});
		}

		let (user_a, user_b) = canonical_pair(user_a, user_b);

		Ok(queries::fetch_match(&self.db, user_a, user_b).await?.is_some())
	}
}
