use std::sync::Arc;

use amora_service::UpdateBioRequest;
use amora_storage::{db::Db, queries};

use super::*;

#[tokio::test]
async fn biography_write_replaces_the_stored_profile() {
	let Some(test_db) = test_db().await else {
		eprintln!("AMORA_PG_DSN is not set; skipping.");

		return;
	};
	let service = service_with_extractor(&test_db, Arc::new(InterestListExtractor)).await;
	let community = seed_community(&service, "c").await;
	let user = seed_user(&service, community, "alice").await;

	service
		.update_bio(UpdateBioRequest { user_id: user, bio: "hiking, tea".to_string() })
		.await
		.expect("update_bio failed");

	let db = Db { pool: service.db.pool.clone() };
	let row = queries::fetch_user(&db, user).await.expect("fetch failed").expect("user missing");
	let stored = row.trait_profile.expect("profile missing");

	assert!(stored.to_string().contains("hiking"));

	// The second write fully replaces the first derivation.
	service
		.update_bio(UpdateBioRequest { user_id: user, bio: "jazz".to_string() })
		.await
		.expect("update_bio failed");

	let row = queries::fetch_user(&db, user).await.expect("fetch failed").expect("user missing");
	let stored = row.trait_profile.expect("profile missing");

	assert!(stored.to_string().contains("jazz"));
	assert!(!stored.to_string().contains("hiking"));

	test_db.cleanup().await.expect("cleanup failed");
}

#[tokio::test]
async fn extraction_failure_degrades_to_the_empty_profile() {
	let Some(test_db) = test_db().await else {
		eprintln!("AMORA_PG_DSN is not set; skipping.");

		return;
	};
	let service = service_with_extractor(&test_db, Arc::new(FailingExtractor)).await;
	let community = seed_community(&service, "c").await;
	let user = seed_user(&service, community, "alice").await;

	let outcome = service
		.update_bio(UpdateBioRequest { user_id: user, bio: "anything at all".to_string() })
		.await
		.expect("degradation must not surface an error");
	let profile = outcome.profile.expect("profile missing");

	assert!(profile.is_empty());

	test_db.cleanup().await.expect("cleanup failed");
}

#[tokio::test]
async fn blank_biography_clears_the_profile() {
	let Some(test_db) = test_db().await else {
		eprintln!("AMORA_PG_DSN is not set; skipping.");

		return;
	};
	let service = service_with_extractor(&test_db, Arc::new(InterestListExtractor)).await;
	let community = seed_community(&service, "c").await;
	let user = seed_user(&service, community, "alice").await;

	service
		.update_bio(UpdateBioRequest { user_id: user, bio: "hiking".to_string() })
		.await
		.expect("update_bio failed");
	let outcome = service
		.update_bio(UpdateBioRequest { user_id: user, bio: "   ".to_string() })
		.await
		.expect("update_bio failed");

	assert!(outcome.profile.is_none());

	let db = Db { pool: service.db.pool.clone() };
	let row = queries::fetch_user(&db, user).await.expect("fetch failed").expect("user missing");

	assert!(row.bio.is_none());
	assert!(row.trait_profile.is_none());

	test_db.cleanup().await.expect("cleanup failed");
}
