use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use uuid::Uuid;

use amora_domain::reciprocity::{canonical_pair, like_completes_pair};
use amora_storage::models::MatchRow;

use crate::{Error, MatchService, Result};

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct LikeRequest {
	pub from_user: Uuid,
	pub to_user: Uuid,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MatchView {
	pub match_id: Uuid,
	pub user_a: Uuid,
	pub user_b: Uuid,
	pub created_at: OffsetDateTime,
}
impl From<MatchRow> for MatchView {
	fn from(row: MatchRow) -> Self {
		Self {
			match_id: row.match_id,
			user_a: row.user_a,
			user_b: row.user_b,
			created_at: row.created_at,
		}
	}
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct LikeResponse {
	pub matched: bool,
	pub created_match: Option<MatchView>,
}

impl MatchService {
	/// Records a directed like and resolves reciprocity in one transaction:
	/// insert the like, check the reverse direction, and on a mutual pair
	/// create the canonical match if absent. `ON CONFLICT DO NOTHING` plus
	/// the unordered-pair unique constraint makes a racing duplicate create
	/// fail closed; the loser re-reads the winner's row.
	pub async fn like(&self, req: LikeRequest) -> Result<LikeResponse> {
		if req.from_user == req.to_user {
			return Err(Error::InvalidRequest {
				message: "A user cannot like themselves.".to_string(),
			});
		}

		let mut tx = self.db.pool.begin().await?;
		let from_community = fetch_community(&mut tx, req.from_user).await?;
		let to_community = fetch_community(&mut tx, req.to_user).await?;

		if from_community != to_community {
			return Err(Error::InvalidRequest {
				message: "Users belong to different communities.".to_string(),
			});
		}

		let inserted = sqlx::query(
			"INSERT INTO likes (from_user, to_user) VALUES ($1, $2) ON CONFLICT DO NOTHING",
		)
		.bind(req.from_user)
		.bind(req.to_user)
		.execute(&mut *tx)
		.await?;

		if inserted.rows_affected() == 0 {
			return Err(Error::Conflict { message: "Like already exists.".to_string() });
		}

		let reverse_exists = sqlx::query_scalar::<_, bool>(
			"SELECT EXISTS (SELECT 1 FROM likes WHERE from_user = $1 AND to_user = $2)",
		)
		.bind(req.to_user)
		.bind(req.from_user)
		.fetch_one(&mut *tx)
		.await?;

		if !like_completes_pair(reverse_exists) {
			tx.commit().await?;

			return Ok(LikeResponse { matched: false, created_match: None });
		}

		let (user_a, user_b) = canonical_pair(req.from_user, req.to_user);

		sqlx::query(
			"\
INSERT INTO matches (user_a, user_b)
VALUES ($1, $2)
ON CONFLICT (user_a, user_b) DO NOTHING",
		)
		.bind(user_a)
		.bind(user_b)
		.execute(&mut *tx)
		.await?;

		let row = sqlx::query_as::<_, MatchRow>(
			"SELECT * FROM matches WHERE user_a = $1 AND user_b = $2",
		)
		.bind(user_a)
		.bind(user_b)
		.fetch_one(&mut *tx)
		.await?;

		tx.commit().await?;

		tracing::info!(
			match_id = %row.match_id,
			user_a = %row.user_a,
			user_b = %row.user_b,
			"Mutual like promoted to a match.",
		);

		Ok(LikeResponse { matched: true, created_match: Some(row.into()) })
	}
}

async fn fetch_community(
	tx: &mut sqlx::Transaction<'_, sqlx::Postgres>,
	user_id: Uuid,
) -> Result<Uuid> {
	sqlx::query_scalar::<_, Uuid>("SELECT community_id FROM users WHERE user_id = $1")
		.bind(user_id)
		.fetch_optional(&mut **tx)
		.await?
		.ok_or_else(|| Error::NotFound { message: format!("User {user_id} not found.") })
}
