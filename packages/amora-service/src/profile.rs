use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use uuid::Uuid;

use amora_domain::profile::TraitProfile;
use amora_storage::queries;

use crate::{Error, MatchService, Result};

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct UpdateBioRequest {
	pub user_id: Uuid,
	pub bio: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct UpdateBioResponse {
	pub user_id: Uuid,
	pub profile: Option<TraitProfile>,
}

impl MatchService {
	/// Stores a new biography and recomputes the trait profile at write
	/// time; ranking never recomputes it on read. A blank biography clears
	/// both columns. Extraction failure degrades to the default empty
	/// profile instead of surfacing an error, so the user keeps a usable,
	/// if weak, profile.
	pub async fn update_bio(&self, req: UpdateBioRequest) -> Result<UpdateBioResponse> {
		let now = OffsetDateTime::now_utc();
		let user = queries::fetch_user(&self.db, req.user_id)
			.await?
			.ok_or_else(|| Error::NotFound { message: format!("User {} not found.", req.user_id) })?;
		let bio = req.bio.trim();

		if bio.is_empty() {
			queries::update_user_bio(&self.db, user.user_id, None, None, now).await?;

			return Ok(UpdateBioResponse { user_id: user.user_id, profile: None });
		}

		let profile =
			match self.providers.extractor.extract(&self.cfg.providers.extractor, bio).await {
				Ok(profile) => profile,
				Err(err) => {
					tracing::warn!(
						user_id = %user.user_id,
						error = %err,
						"Trait extraction degraded; storing the default empty profile.",
					);

					TraitProfile::default()
				},
			};
		let stored = serde_json::to_value(&profile)
			.map_err(|err| Error::Storage { message: err.to_string() })?;

		queries::update_user_bio(&self.db, user.user_id, Some(bio), Some(&stored), now).await?;

		Ok(UpdateBioResponse { user_id: user.user_id, profile: Some(profile) })
	}
}
