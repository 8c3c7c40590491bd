//! HTTP boundary tests driving the router directly, no socket involved.

use api_server::{router, AppState};
use application::VideoHostingApp;
use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::ServiceExt; // for `oneshot`

fn test_router() -> Router {
    router(AppState::new(VideoHostingApp::default()))
}

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, body)
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn delete(uri: &str) -> Request<Body> {
    Request::builder()
        .method("DELETE")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

fn post_json(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn create_video(app: &Router, body: Value) -> Value {
    let (status, created) = send(app, post_json("/videos", body)).await;
    assert_eq!(status, StatusCode::CREATED, "{created}");
    created
}

#[tokio::test]
async fn health_reports_ok() {
    let app = test_router();
    let (status, body) = send(&app, get("/health")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "status": "ok" }));
}

#[tokio::test]
async fn register_returns_normalized_user() {
    let app = test_router();
    let (status, body) = send(
        &app,
        post_json(
            "/users/register",
            json!({ "username": " john ", "email": "John@Example.com" }),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["username"], "john");
    assert_eq!(body["email"], "john@example.com");
    assert!(body["id"].as_str().is_some());
}

#[tokio::test]
async fn register_failures_are_bad_requests() {
    let app = test_router();
    let (status, _) = send(
        &app,
        post_json(
            "/users/register",
            json!({ "username": "john", "email": "john@example.com" }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = send(
        &app,
        post_json(
            "/users/register",
            json!({ "username": "jane", "email": "john@example.com" }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["detail"], "Email already registered: john@example.com");

    let (status, body) = send(
        &app,
        post_json(
            "/users/register",
            json!({ "username": "john", "email": "other@example.com" }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["detail"], "Username already taken: john");

    let (status, body) = send(
        &app,
        post_json(
            "/users/register",
            json!({ "username": "bob", "email": "not-an-email" }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["detail"], "Invalid email: not-an-email");
}

#[tokio::test]
async fn user_profile_includes_upload_path() {
    let app = test_router();
    let (_, user) = send(
        &app,
        post_json(
            "/users/register",
            json!({ "username": "jane", "email": "jane@example.com" }),
        ),
    )
    .await;
    let id = user["id"].as_str().unwrap();

    let (status, body) = send(&app, get(&format!("/users/{}", id))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["username"], "jane");
    assert!(body["upload_path"].as_str().unwrap().ends_with(id));

    let (status, _) = send(&app, get("/users/not-a-uuid")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn create_video_sanitizes_filename() {
    let app = test_router();
    let created = create_video(
        &app,
        json!({
            "title": "  My Clip ",
            "filename": "my video (1).mp4",
            "owner_id": "u1",
            "description": "First upload",
            "duration_seconds": 12
        }),
    )
    .await;

    assert_eq!(created["title"], "My Clip");
    assert_eq!(created["filename"], "my_video_1.mp4");
    assert_eq!(created["owner_id"], "u1");
    assert_eq!(created["views"], 0);
    assert_eq!(created["duration_seconds"], 12);
}

#[tokio::test]
async fn create_video_rejections() {
    let app = test_router();

    let (status, body) = send(
        &app,
        post_json(
            "/videos",
            json!({ "title": "Bad", "filename": "bad.exe", "owner_id": "u1" }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["detail"]
        .as_str()
        .unwrap()
        .starts_with("Unsupported file extension: exe"));

    let (status, body) = send(
        &app,
        post_json(
            "/videos",
            json!({ "title": "   ", "filename": "ok.mp4", "owner_id": "u1" }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["detail"], "Video title cannot be empty");

    let (status, _) = send(
        &app,
        post_json(
            "/videos",
            json!({ "title": "Huge", "filename": "huge.mp4", "owner_id": "u1", "size_bytes": 0 }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (_, listed) = send(&app, get("/videos")).await;
    assert_eq!(listed, json!([]));
}

#[tokio::test]
async fn watching_counts_views() {
    let app = test_router();
    let created = create_video(
        &app,
        json!({ "title": "Watch me", "filename": "w.mp4", "owner_id": "u1" }),
    )
    .await;
    let uri = format!("/videos/{}", created["id"].as_str().unwrap());

    let (status, body) = send(&app, get(&uri)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["views"], 1);
    assert_eq!(body["filename"], "w.mp4");
    assert_eq!(body["description"], "");

    let (_, body) = send(&app, get(&uri)).await;
    assert_eq!(body["views"], 2);
}

#[tokio::test]
async fn unknown_video_is_not_found() {
    let app = test_router();
    let (status, body) = send(
        &app,
        get("/videos/00000000-0000-4000-8000-000000000000"),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["detail"], "Video not found");

    let (status, _) = send(&app, get("/videos/garbage")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn list_filters_by_owner() {
    let app = test_router();
    create_video(
        &app,
        json!({ "title": "A", "filename": "a.mp4", "owner_id": "u1" }),
    )
    .await;
    create_video(
        &app,
        json!({ "title": "B", "filename": "b.webm", "owner_id": "u2" }),
    )
    .await;

    let (status, all) = send(&app, get("/videos")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(all.as_array().unwrap().len(), 2);

    let (_, mine) = send(&app, get("/videos?owner_id=u1")).await;
    let mine = mine.as_array().unwrap();
    assert_eq!(mine.len(), 1);
    assert_eq!(mine[0]["title"], "A");
    assert_eq!(mine[0]["views"], 0);
    assert!(mine[0]["created_at"].as_str().unwrap().contains('T'));
}

#[tokio::test]
async fn search_returns_matches() {
    let app = test_router();
    create_video(
        &app,
        json!({ "title": "Python Tutorial", "filename": "tut.mp4", "owner_id": "u1" }),
    )
    .await;
    create_video(
        &app,
        json!({ "title": "Cooking", "filename": "cook.mp4", "owner_id": "u1" }),
    )
    .await;

    let (status, hits) = send(&app, get("/videos/search/python")).await;
    assert_eq!(status, StatusCode::OK);
    let hits = hits.as_array().unwrap();
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0]["title"], "Python Tutorial");

    let (_, hits) = send(&app, get("/videos/search/rust")).await;
    assert_eq!(hits, json!([]));
}

#[tokio::test]
async fn delete_removes_video() {
    let app = test_router();
    let created = create_video(
        &app,
        json!({ "title": "Gone", "filename": "gone.mkv", "owner_id": "u1" }),
    )
    .await;
    let uri = format!("/videos/{}", created["id"].as_str().unwrap());

    let (status, _) = send(&app, delete(&uri)).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, _) = send(&app, delete(&uri)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = send(&app, get(&uri)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
