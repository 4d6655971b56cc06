pub mod like;
pub mod pair;
pub mod profile;
pub mod rank;
pub mod unlike;

use std::{future::Future, pin::Pin, sync::Arc};

use serde_json::Value;
use uuid::Uuid;

use amora_config::{Config, ExtractorProviderConfig};
use amora_domain::profile::TraitProfile;
use amora_providers::extractor;
use amora_storage::db::Db;

pub use like::{LikeRequest, LikeResponse, MatchView};
pub use pair::{PairStateRequest, PairStateResponse};
pub use profile::{UpdateBioRequest, UpdateBioResponse};
pub use rank::{RankRequest, RankResponse};
pub use unlike::{UnlikeRequest, UnlikeResponse};

pub type Result<T, E = Error> = std::result::Result<T, E>;

pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
	#[error("User {user_id} has no trait profile; ranking is undefined without one.")]
	MissingProfile { user_id: Uuid },
	#[error("Invalid request: {message}")]
	InvalidRequest { message: String },
	#[error("Not found: {message}")]
	NotFound { message: String },
	#[error("Conflict: {message}")]
	Conflict { message: String },
	#[error("Provider error: {message}")]
	Provider { message: String },
	#[error("Storage error: {message}")]
	Storage { message: String },
}
impl From<sqlx::Error> for Error {
	fn from(err: sqlx::Error) -> Self {
		Self::Storage { message: err.to_string() }
	}
}

impl From<amora_storage::Error> for Error {
	fn from(err: amora_storage::Error) -> Self {
		match err {
			amora_storage::Error::Sqlx(inner) => Self::Storage { message: inner.to_string() },
			amora_storage::Error::InvalidArgument(message) => Self::InvalidRequest { message },
			amora_storage::Error::NotFound(message) => Self::NotFound { message },
			amora_storage::Error::Conflict(message) => Self::Conflict { message },
		}
	}
}

/// Seam for the trait-extraction capability. The default implementation
/// calls the configured chat-completions endpoint; tests substitute stubs.
pub trait ExtractorProvider
where
	Self: Send + Sync,
{
	fn extract<'a>(
		&'a self,
		cfg: &'a ExtractorProviderConfig,
		bio: &'a str,
	) -> BoxFuture<'a, color_eyre::Result<TraitProfile>>;
}

#[derive(Clone)]
pub struct Providers {
	pub extractor: Arc<dyn ExtractorProvider>,
}

pub struct MatchService {
	pub cfg: Config,
	pub db: Db,
	pub providers: Providers,
}

struct DefaultProviders;

impl ExtractorProvider for DefaultProviders {
	fn extract<'a>(
		&'a self,
		cfg: &'a ExtractorProviderConfig,
		bio: &'a str,
	) -> BoxFuture<'a, color_eyre::Result<TraitProfile>> {
		Box::pin(extractor::extract(cfg, bio))
	}
}

impl Providers {
	pub fn new(extractor: Arc<dyn ExtractorProvider>) -> Self {
		Self { extractor }
	}
}

impl Default for Providers {
	fn default() -> Self {
		Self { extractor: Arc::new(DefaultProviders) }
	}
}

impl MatchService {
	pub fn new(cfg: Config, db: Db) -> Self {
		Self { cfg, db, providers: Providers::default() }
	}

	pub fn with_providers(cfg: Config, db: Db, providers: Providers) -> Self {
		Self { cfg, db, providers }
	}
}

/// Decodes a stored `trait_profile` column. A malformed value is treated as
/// absent so inconsistent rows drop out of ranking instead of failing it.
pub(crate) fn decode_profile(user_id: Uuid, value: Option<&Value>) -> Option<TraitProfile> {
	let value = value?;

	match serde_json::from_value(value.clone()) {
		Ok(profile) => Some(profile),
		Err(err) => {
			tracing::warn!(
				user_id = %user_id,
				error = %err,
				"Stored trait profile is malformed; treating it as absent.",
			);

			None
		},
	}
}
