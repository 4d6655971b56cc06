use serde_json::Value;
use time::OffsetDateTime;
use uuid::Uuid;

use crate::{
	Result,
	db::Db,
	models::{CommunityRow, MatchRow, UserRow},
};

pub async fn insert_community(db: &Db, name: &str) -> Result<CommunityRow> {
	let row = sqlx::query_as::<_, CommunityRow>(
		"\
INSERT INTO communities (name)
VALUES ($1)
RETURNING *",
	)
	.bind(name)
	.fetch_one(&db.pool)
	.await?;

	Ok(row)
}

pub async fn insert_user(db: &Db, community_id: Uuid, name: &str) -> Result<UserRow> {
	let row = sqlx::query_as::<_, UserRow>(
		"\
INSERT INTO users (community_id, name)
VALUES ($1, $2)
RETURNING *",
	)
	.bind(community_id)
	.bind(name)
	.fetch_one(&db.pool)
	.await?;

	Ok(row)
}

pub async fn fetch_user(db: &Db, user_id: Uuid) -> Result<Option<UserRow>> {
	let row = sqlx::query_as::<_, UserRow>("SELECT * FROM users WHERE user_id = $1")
		.bind(user_id)
		.fetch_optional(&db.pool)
		.await?;

	Ok(row)
}

pub async fn update_user_bio(
	db: &Db,
	user_id: Uuid,
	bio: Option<&str>,
	trait_profile: Option<&Value>,
	now: OffsetDateTime,
) -> Result<()> {
	let result = sqlx::query(
		"\
UPDATE users
SET bio = $1, trait_profile = $2, updated_at = $3
WHERE user_id = $4",
	)
	.bind(bio)
	.bind(trait_profile)
	.bind(now)
	.bind(user_id)
	.execute(&db.pool)
	.await?;

	if result.rows_affected() == 0 {
		return Err(crate::Error::NotFound(format!("User {user_id} not found.")));
	}

	Ok(())
}

/// Fetches the candidate set for a ranking call: same community, not the
/// requester, not already liked by the requester, trait profile present.
/// Being liked *by* a candidate does not exclude them. Ordered by user id so
/// the snapshot the ranker sees is reproducible.
pub async fn fetch_rank_candidates(
	db: &Db,
	community_id: Uuid,
	requester_id: Uuid,
) -> Result<Vec<UserRow>> {
	let rows = sqlx::query_as::<_, UserRow>(
		"\
SELECT u.*
FROM users u
WHERE u.community_id = $1
	AND u.user_id <> $2
	AND u.trait_profile IS NOT NULL
	AND NOT EXISTS (
		SELECT 1
		FROM likes l
		WHERE l.from_user = $2 AND l.to_user = u.user_id
	)
ORDER BY u.user_id",
	)
	.bind(community_id)
	.bind(requester_id)
	.fetch_all(&db.pool)
	.await?;

	Ok(rows)
}

pub async fn like_exists(db: &Db, from_user: Uuid, to_user: Uuid) -> Result<bool> {
	let exists = sqlx::query_scalar::<_, bool>(
		"SELECT EXISTS (SELECT 1 FROM likes WHERE from_user = $1 AND to_user = $2)",
	)
	.bind(from_user)
	.bind(to_user)
	.fetch_one(&db.pool)
	.await?;

	Ok(exists)
}

/// `user_a`/`user_b` must already be in canonical order.
pub async fn fetch_match(db: &Db, user_a: Uuid, user_b: Uuid) -> Result<Option<MatchRow>> {
	let row =
		sqlx::query_as::<_, MatchRow>("SELECT * FROM matches WHERE user_a = $1 AND user_b = $2")
			.bind(user_a)
			.bind(user_b)
			.fetch_optional(&db.pool)
			.await?;

	Ok(row)
}
