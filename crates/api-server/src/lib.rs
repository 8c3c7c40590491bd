use anyhow::Result;
use application::VideoHostingApp;
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Json},
    routing::{get, post},
    Router,
};
use config::Config;
use domain::{DomainError, ValidationService, Video};
use serde_json::json;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};
use uuid::Uuid;

pub mod dto;
pub mod error;

use dto::*;
use error::ApiError;

#[derive(Clone)]
pub struct AppState {
    pub app: Arc<VideoHostingApp>,
}

impl AppState {
    pub fn new(app: VideoHostingApp) -> Self {
        Self { app: Arc::new(app) }
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        // Users
        .route("/users/register", post(register_user))
        .route("/users/:id", get(get_user))
        // Video catalog
        .route("/videos", get(list_videos).post(create_video))
        .route("/videos/search/:query", get(search_videos))
        .route("/videos/:id", get(watch_video).delete(delete_video))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Build the application from `config` and serve until the listener fails.
pub async fn serve(config: &Config) -> Result<()> {
    let state = AppState::new(VideoHostingApp::new_with_config(config));
    let app = router(state);

    let bind_address = config.api_address();
    let listener = tokio::net::TcpListener::bind(&bind_address).await?;
    info!("🌐 API Server listening on http://{}", bind_address);
    info!("   GET    /health                 - Health check");
    info!("   POST   /users/register         - Register a user");
    info!("   GET    /users/:id              - User profile");
    info!("   GET    /videos?owner_id=       - List videos, newest first");
    info!("   POST   /videos                 - Register video metadata");
    info!("   GET    /videos/:id             - Watch a video (counts a view)");
    info!("   DELETE /videos/:id             - Remove a video");
    info!("   GET    /videos/search/:query   - Search titles and descriptions");

    axum::serve(listener, app).await?;

    Ok(())
}

/// Malformed ids cannot name a stored record, so they read as "not found".
fn parse_id(raw: &str, what: &'static str) -> Result<Uuid, ApiError> {
    Uuid::parse_str(raw).map_err(|_| ApiError::NotFound(what))
}

async fn health_check() -> impl IntoResponse {
    Json(json!({ "status": "ok" }))
}

async fn register_user(
    State(state): State<AppState>,
    Json(payload): Json<RegisterRequest>,
) -> Result<Json<RegisteredUser>, ApiError> {
    let user = state
        .app
        .user_service
        .register_user(&payload.username, &payload.email)
        .await?;
    Ok(Json(user.into()))
}

async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<UserProfile>, ApiError> {
    let id = parse_id(&id, "User")?;
    let user = state
        .app
        .user_service
        .get_user(id)
        .await?
        .ok_or(ApiError::NotFound("User"))?;

    let upload_path = state
        .app
        .user_service
        .get_upload_path(&user.id.to_string())
        .display()
        .to_string();

    Ok(Json(UserProfile {
        id: user.id,
        created_at: iso8601(&user.created_at),
        username: user.username,
        email: user.email,
        upload_path,
    }))
}

async fn list_videos(
    State(state): State<AppState>,
    Query(query): Query<ListVideosQuery>,
) -> Result<Json<Vec<VideoSummary>>, ApiError> {
    let videos = state
        .app
        .video_service
        .list_videos(query.owner_id.as_deref())
        .await?;
    Ok(Json(videos.into_iter().map(Into::into).collect()))
}

async fn create_video(
    State(state): State<AppState>,
    Json(payload): Json<CreateVideoRequest>,
) -> Result<(StatusCode, Json<CreatedVideo>), ApiError> {
    if let Some(size_bytes) = payload.size_bytes {
        if !state.app.validation.validate_file_size(size_bytes) {
            warn!("Rejected video size {} bytes", size_bytes);
            return Err(DomainError::InvalidInput(format!(
                "Invalid file size: {} bytes (must be between 1 and {} bytes)",
                size_bytes,
                state.app.validation.max_video_size_bytes()
            ))
            .into());
        }
    }

    let filename = ValidationService::sanitize_filename(&payload.filename);
    let mut video = Video::new(&payload.title, &filename, &payload.owner_id)?
        .with_description(payload.description);
    if let Some(duration) = payload.duration_seconds {
        video = video.with_duration_seconds(duration);
    }

    let video = state.app.video_service.add_video(video).await?;
    Ok((StatusCode::CREATED, Json(video.into())))
}

async fn watch_video(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<VideoDetails>, ApiError> {
    let id = parse_id(&id, "Video")?;
    let video = state
        .app
        .video_service
        .watch_video(id)
        .await?
        .ok_or(ApiError::NotFound("Video"))?;
    Ok(Json(video.into()))
}

async fn delete_video(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let id = parse_id(&id, "Video")?;
    if state.app.video_service.delete_video(id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(ApiError::NotFound("Video"))
    }
}

async fn search_videos(
    State(state): State<AppState>,
    Path(query): Path<String>,
) -> Result<Json<Vec<SearchHit>>, ApiError> {
    let videos = state.app.video_service.search_videos(&query).await?;
    Ok(Json(videos.into_iter().map(Into::into).collect()))
}
