use std::sync::Arc;

use amora_service::{Error, LikeRequest, RankRequest, UpdateBioRequest};

use super::*;

async fn set_interests(service: &amora_service::MatchService, user: uuid::Uuid, interests: &str) {
	service
		.update_bio(UpdateBioRequest { user_id: user, bio: interests.to_string() })
		.await
		.expect("update_bio failed");
}

#[tokio::test]
async fn excludes_candidates_the_requester_already_liked() {
	let Some(test_db) = test_db().await else {
		eprintln!("AMORA_PG_DSN is not set; skipping.");

		return;
	};
	let service = service_with_extractor(&test_db, Arc::new(InterestListExtractor)).await;
	let community = seed_community(&service, "c").await;
	let requester = seed_user(&service, community, "u0").await;
	let u1 = seed_user(&service, community, "u1").await;
	let u2 = seed_user(&service, community, "u2").await;
	let u3 = seed_user(&service, community, "u3").await;

	for user in [requester, u1, u2, u3] {
		set_interests(&service, user, "hiking, tea").await;
	}

	service.like(LikeRequest { from_user: requester, to_user: u2 }).await.expect("like failed");
	// A like *received* from a candidate does not exclude them.
	service.like(LikeRequest { from_user: u3, to_user: requester }).await.expect("like failed");

	let ranked = service
		.rank(RankRequest { user_id: requester, limit: 10 })
		.await
		.expect("rank failed");
	let ids = ranked.matches.iter().map(|m| m.candidate_id).collect::<Vec<_>>();

	assert!(!ids.contains(&u2));
	assert!(ids.contains(&u1));
	assert!(ids.contains(&u3));

	test_db.cleanup().await.expect("cleanup failed");
}

#[tokio::test]
async fn ranks_by_similarity_and_respects_limit() {
	let Some(test_db) = test_db().await else {
		eprintln!("AMORA_PG_DSN is not set; skipping.");

		return;
	};
	let service = service_with_extractor(&test_db, Arc::new(InterestListExtractor)).await;
	let community = seed_community(&service, "c").await;
	let requester = seed_user(&service, community, "u0").await;
	let close = seed_user(&service, community, "close").await;
	let far = seed_user(&service, community, "far").await;

	set_interests(&service, requester, "hiking, tea, jazz").await;
	set_interests(&service, close, "hiking, tea, jazz").await;
	set_interests(&service, far, "jazz").await;

	let ranked = service
		.rank(RankRequest { user_id: requester, limit: 1 })
		.await
		.expect("rank failed");

	assert_eq!(ranked.matches.len(), 1);
	assert_eq!(ranked.matches[0].candidate_id, close);
	assert!(ranked.matches[0].score > 0.999);

	test_db.cleanup().await.expect("cleanup failed");
}

#[tokio::test]
async fn requester_without_profile_cannot_rank() {
	let Some(test_db) = test_db().await else {
		eprintln!("AMORA_PG_DSN is not set; skipping.");

		return;
	};
	let service = service_with_extractor(&test_db, Arc::new(InterestListExtractor)).await;
	let community = seed_community(&service, "c").await;
	let requester = seed_user(&service, community, "u0").await;

	let outcome = service.rank(RankRequest { user_id: requester, limit: 10 }).await;

	assert!(matches!(outcome, Err(Error::MissingProfile { .. })));

	test_db.cleanup().await.expect("cleanup failed");
}

#[tokio::test]
async fn empty_candidate_set_is_an_empty_list() {
	let Some(test_db) = test_db().await else {
		eprintln!("AMORA_PG_DSN is not set; skipping.");

		return;
	};
	let service = service_with_extractor(&test_db, Arc::new(InterestListExtractor)).await;
	let community = seed_community(&service, "c").await;
	let requester = seed_user(&service, community, "u0").await;
	// A member without a biography never enters the candidate set.
	let _lurker = seed_user(&service, community, "lurker").await;

	set_interests(&service, requester, "hiking").await;

	let ranked = service
		.rank(RankRequest { user_id: requester, limit: 10 })
		.await
		.expect("rank failed");

	assert!(ranked.matches.is_empty());

	test_db.cleanup().await.expect("cleanup failed");
}
