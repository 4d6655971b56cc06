use serde::{Deserialize, Serialize};
use uuid::Uuid;

use amora_domain::reciprocity::canonical_pair;

use crate::{Error, MatchService, Result};

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct UnlikeRequest {
	pub from_user: Uuid,
	pub to_user: Uuid,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct UnlikeResponse {
	pub match_deleted: bool,
}

impl MatchService {
	/// Deletes a directed like and, in the same transaction, the pair's
	/// match if one exists. Cleanup is eager: a match must never outlive
	/// the mutual like that justified it, or messaging permission would
	/// outlive its precondition.
	pub async fn unlike(&self, req: UnlikeRequest) -> Result<UnlikeResponse> {
		if req.from_user == req.to_user {
			return Err(Error::InvalidRequest {
				message: "A user cannot unlike themselves.".to_string(),
			});
		}

		let mut tx = self.db.pool.begin().await?;
		let deleted = sqlx::query("DELETE FROM likes WHERE from_user = $1 AND to_user = $2")
			.bind(req.from_user)
			.bind(req.to_user)
			.execute(&mut *tx)
			.await?;

		if deleted.rows_affected() == 0 {
			return Err(Error::NotFound { message: "Like not found.".to_string() });
		}

		let (user_a, user_b) = canonical_pair(req.from_user, req.to_user);
		let match_deleted = sqlx::query("DELETE FROM matches WHERE user_a = $1 AND user_b = $2")
			.bind(user_a)
			.bind(user_b)
			.execute(&mut *tx)
			.await?
			.rows_affected()
			> 0;

		tx.commit().await?;

		if match_deleted {
			tracing::info!(
				user_a = %user_a,
				user_b = %user_b,
				"Match removed after unlike.",
			);
		}

		Ok(UnlikeResponse { match_deleted })
	}
}
