//! Tests for the publish API surface.

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use chrono::Utc;
use herald_core::{PlatformKind, PostId, PostStatus, ScheduledPost, ScheduledPostBuilder, UserId};
use herald_error::{HeraldResult, HttpError};
use herald_publish::{PlatformRegistry, PublishPipeline, PublishStrategy};
use herald_server::create_router;
use herald_store::{InMemoryPostStore, PostStore};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use std::sync::Arc;
use tower::ServiceExt;

struct StubStrategy {
    outcome: fn() -> HeraldResult<Value>,
}

#[async_trait]
impl PublishStrategy for StubStrategy {
    async fn publish(&self, _text: &str) -> HeraldResult<Value> {
        (self.outcome)()
    }

    fn platform(&self) -> PlatformKind {
        PlatformKind::Twitter
    }
}

fn succeeding() -> Arc<StubStrategy> {
    Arc::new(StubStrategy {
        outcome: || Ok(json!({ "data": { "id": "1450916163" } })),
    })
}

fn failing() -> Arc<StubStrategy> {
    Arc::new(StubStrategy {
        outcome: || Err(HttpError::new("HTTP error! status: 403, body: Forbidden").into()),
    })
}

fn scheduled_post(id: &str) -> ScheduledPost {
    ScheduledPostBuilder::default()
        .id(id)
        .content("Launch day")
        .platform_name("twitter")
        .scheduled_at(Utc::now())
        .status(PostStatus::Scheduled)
        .build()
        .unwrap()
}

async fn app_with(strategy: Arc<StubStrategy>) -> (axum::Router, Arc<InMemoryPostStore>) {
    let store = Arc::new(InMemoryPostStore::new());
    store
        .insert(UserId::from("user-1"), scheduled_post("p1"))
        .await;
    let pipeline = PublishPipeline::new(
        Arc::clone(&store) as Arc<dyn PostStore>,
        PlatformRegistry::new(strategy),
    );
    (create_router(Arc::new(pipeline)), store)
}

fn publish_request(body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/publish")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn json_body(response: axum::response::Response) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn health_reports_healthy() {
    let (app, _store) = app_with(succeeding()).await;

    let response = app
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(json_body(response).await, json!({ "status": "healthy" }));
}

#[tokio::test]
async fn publish_success_returns_the_platform_response() {
    let (app, store) = app_with(succeeding()).await;

    let response = app
        .oneshot(publish_request(json!({
            "postId": "p1",
            "platform": "twitter",
            "content": "Launch day",
            "hashtags": ["rust"]
        })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    assert_eq!(body["success"], json!(true));
    assert_eq!(body["platform"], json!("twitter"));
    assert_eq!(body["result"]["data"]["id"], json!("1450916163"));
    let post = store.get(&PostId::from("p1")).await.unwrap();
    assert_eq!(*post.status(), PostStatus::Published);
}

#[tokio::test]
async fn missing_content_is_a_400_and_leaves_status_alone() {
    let (app, store) = app_with(succeeding()).await;

    let response = app
        .oneshot(publish_request(json!({
            "postId": "p1",
            "platform": "twitter"
        })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = json_body(response).await;
    assert_eq!(body["success"], json!(false));
    assert_eq!(
        body["error"],
        json!("Missing required fields: postId, platform, and content are required")
    );
    let post = store.get(&PostId::from("p1")).await.unwrap();
    assert_eq!(*post.status(), PostStatus::Scheduled);
}

#[tokio::test]
async fn upstream_failure_is_a_500_with_the_upstream_status() {
    let (app, store) = app_with(failing()).await;

    let response = app
        .oneshot(publish_request(json!({
            "postId": "p1",
            "platform": "twitter",
            "content": "Launch day"
        })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = json_body(response).await;
    assert_eq!(body["success"], json!(false));
    assert!(body["error"].as_str().unwrap().contains("status: 403"));
    let post = store.get(&PostId::from("p1")).await.unwrap();
    assert_eq!(*post.status(), PostStatus::Failed);
}

#[tokio::test]
async fn unsupported_platform_is_a_500_naming_the_platform() {
    let (app, store) = app_with(succeeding()).await;

    let response = app
        .oneshot(publish_request(json!({
            "postId": "p1",
            "platform": "mastodon",
            "content": "Launch day"
        })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = json_body(response).await;
    assert_eq!(body["error"], json!("Unsupported platform: mastodon"));
    let post = store.get(&PostId::from("p1")).await.unwrap();
    assert_eq!(*post.status(), PostStatus::Failed);
}
