//! Tests for the in-memory post store.

use chrono::{Duration, Utc};
use herald_core::{PostId, PostStatus, ScheduledPost, ScheduledPostBuilder, UserId};
use herald_store::{InMemoryPostStore, PostStore};

fn post(id: &str, status: PostStatus, minutes_from_now: i64) -> ScheduledPost {
    ScheduledPostBuilder::default()
        .id(id)
        .content("body")
        .platform_name("twitter")
        .scheduled_at(Utc::now() + Duration::minutes(minutes_from_now))
        .status(status)
        .build()
        .unwrap()
}

fn owner() -> UserId {
    UserId::from("user-1")
}

#[tokio::test]
async fn due_posts_filters_owner_status_and_window() {
    let store = InMemoryPostStore::new();
    let now = Utc::now();
    store.insert(owner(), post("in-window", PostStatus::Scheduled, 3)).await;
    store.insert(owner(), post("too-late", PostStatus::Scheduled, 10)).await;
    store.insert(owner(), post("already-past", PostStatus::Scheduled, -2)).await;
    store.insert(owner(), post("draft", PostStatus::Draft, 3)).await;
    store.insert(owner(), post("published", PostStatus::Published, 3)).await;
    store
        .insert(UserId::from("user-2"), post("foreign", PostStatus::Scheduled, 3))
        .await;

    let due = store
        .due_posts(&owner(), now, now + Duration::minutes(5))
        .await
        .unwrap();

    assert_eq!(due.len(), 1);
    assert_eq!(*due[0].id(), PostId::from("in-window"));
}

#[tokio::test]
async fn due_posts_window_bounds_are_inclusive() {
    let store = InMemoryPostStore::new();
    let now = Utc::now();
    let until = now + Duration::minutes(5);
    let exactly_at_bound = ScheduledPostBuilder::default()
        .id("at-bound")
        .content("body")
        .platform_name("twitter")
        .scheduled_at(until)
        .status(PostStatus::Scheduled)
        .build()
        .unwrap();
    store.insert(owner(), exactly_at_bound).await;

    let due = store.due_posts(&owner(), now, until).await.unwrap();
    assert_eq!(due.len(), 1);
}

#[tokio::test]
async fn update_status_transitions_and_stamps_the_mutation() {
    let store = InMemoryPostStore::new();
    store.insert(owner(), post("p1", PostStatus::Scheduled, 3)).await;

    store
        .update_status(&PostId::from("p1"), PostStatus::Published)
        .await
        .unwrap();

    let updated = store.get(&PostId::from("p1")).await.unwrap();
    assert_eq!(*updated.status(), PostStatus::Published);
    assert!(updated.updated_at().is_some());
}

#[tokio::test]
async fn update_status_for_unknown_id_errors() {
    let store = InMemoryPostStore::new();
    let err = store
        .update_status(&PostId::from("ghost"), PostStatus::Failed)
        .await
        .unwrap_err();
    assert!(err.to_string().contains("not found"));
}

#[tokio::test]
async fn clear_empties_the_store() {
    let store = InMemoryPostStore::new();
    store.insert(owner(), post("p1", PostStatus::Scheduled, 3)).await;
    assert_eq!(store.len().await, 1);

    store.clear().await;
    assert!(store.is_empty().await);
}
