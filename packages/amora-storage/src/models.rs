use serde_json::Value;
use time::OffsetDateTime;
use uuid::Uuid;

#[derive(Debug, sqlx::FromRow)]
pub struct CommunityRow {
	pub community_id: Uuid,
	pub name: String,
	pub created_at: OffsetDateTime,
}

#[derive(Debug, sqlx::FromRow)]
pub struct UserRow {
	pub user_id: Uuid,
	pub community_id: Uuid,
	pub name: String,
	pub bio: Option<String>,
	/// Cached derivation of `bio`; replaced whole on every biography write
	/// and NULL while the user has no biography.
	pub trait_profile: Option<Value>,
	pub created_at: OffsetDateTime,
	pub updated_at: OffsetDateTime,
}

#[derive(Debug, sqlx::FromRow)]
pub struct LikeRow {
	pub from_user: Uuid,
	pub to_user: Uuid,
	pub created_at: OffsetDateTime,
}

/// Stored canonically with `user_a < user_b`; one row per unordered pair.
#[derive(Debug, sqlx::FromRow)]
pub struct MatchRow {
	pub match_id: Uuid,
	pub user_a: Uuid,
	pub user_b: Uuid,
	pub created_at: OffsetDateTime,
}
