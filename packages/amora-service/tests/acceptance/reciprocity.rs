use std::sync::Arc;

use amora_service::{Error, LikeRequest, PairStateRequest, UnlikeRequest};

use super::*;

#[tokio::test]
async fn mutual_like_creates_exactly_one_match() {
	let Some(test_db) = test_db().await else {
		eprintln!("AMORA_PG_DSN is not set; skipping.");

		return;
	};
	let service = service_with_extractor(&test_db, Arc::new(InterestListExtractor)).await;
	let community = seed_community(&service, "c").await;
	let alice = seed_user(&service, community, "alice").await;
	let bob = seed_user(&service, community, "bob").await;

	let first = service
		.like(LikeRequest { from_user: alice, to_user: bob })
		.await
		.expect("like failed");

	assert!(!first.matched);
	assert!(first.created_match.is_none());

	let second = service
		.like(LikeRequest { from_user: bob, to_user: alice })
		.await
		.expect("like failed");
	let created = second.created_match.expect("expected a match");

	assert!(second.matched);

	// Re-liking is a conflict and never mints a second match.
	let repeat = service.like(LikeRequest { from_user: alice, to_user: bob }).await;

	assert!(matches!(repeat, Err(Error::Conflict { .. })));

	let state = service
		.pair_state(PairStateRequest { user_a: alice, user_b: bob })
		.await
		.expect("pair_state failed");

	assert!(state.can_message);
	assert!(
		service.can_message(bob, alice).await.expect("can_message failed"),
		"messaging gate must be orientation-free"
	);
	assert_eq!((created.user_a.min(created.user_b)), created.user_a);

	test_db.cleanup().await.expect("cleanup failed");
}

#[tokio::test]
async fn unlike_removes_the_match() {
	let Some(test_db) = test_db().await else {
		eprintln!("AMORA_PG_DSN is not set; skipping.");

		return;
	};
	let service = service_with_extractor(&test_db, Arc::new(InterestListExtractor)).await;
	let community = seed_community(&service, "c").await;
	let alice = seed_user(&service, community, "alice").await;
	let bob = seed_user(&service, community, "bob").await;

	service.like(LikeRequest { from_user: alice, to_user: bob }).await.expect("like failed");
	service.like(LikeRequest { from_user: bob, to_user: alice }).await.expect("like failed");

	let outcome = service
		.unlike(UnlikeRequest { from_user: alice, to_user: bob })
		.await
		.expect("unlike failed");

	assert!(outcome.match_deleted);
	assert!(!service.can_message(alice, bob).await.expect("can_message failed"));

	// The other direction's like survives; dropping it deletes no match.
	let outcome = service
		.unlike(UnlikeRequest { from_user: bob, to_user: alice })
		.await
		.expect("unlike failed");

	assert!(!outcome.match_deleted);

	test_db.cleanup().await.expect("cleanup failed");
}

#[tokio::test]
async fn one_sided_like_never_matches() {
	let Some(test_db) = test_db().await else {
		eprintln!("AMORA_PG_DSN is not set; skipping.");

		return;
	};
	let service = service_with_extractor(&test_db, Arc::new(InterestListExtractor)).await;
	let community = seed_community(&service, "c").await;
	let alice = seed_user(&service, community, "alice").await;
	let bob = seed_user(&service, community, "bob").await;

	service.like(LikeRequest { from_user: alice, to_user: bob }).await.expect("like failed");

	assert!(!service.can_message(alice, bob).await.expect("can_message failed"));

	test_db.cleanup().await.expect("cleanup failed");
}

#[tokio::test]
async fn self_like_and_cross_community_are_rejected() {
	let Some(test_db) = test_db().await else {
		eprintln!("AMORA_PG_DSN is not set; skipping.");

		return;
	};
	let service = service_with_extractor(&test_db, Arc::new(InterestListExtractor)).await;
	let community = seed_community(&service, "c").await;
	let other = seed_community(&service, "d").await;
	let alice = seed_user(&service, community, "alice").await;
	let carol = seed_user(&service, other, "carol").await;

	let self_like = service.like(LikeRequest { from_user: alice, to_user: alice }).await;

	assert!(matches!(self_like, Err(Error::InvalidRequest { .. })));

	let cross = service.like(LikeRequest { from_user: alice, to_user: carol }).await;

	assert!(matches!(cross, Err(Error::InvalidRequest { .. })));

	test_db.cleanup().await.expect("cleanup failed");
}
