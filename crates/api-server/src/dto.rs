use chrono::{DateTime, SecondsFormat, Utc};
use domain::entities::{User, Video};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
}

#[derive(Debug, Serialize)]
pub struct RegisteredUser {
    pub id: Uuid,
    pub username: String,
    pub email: String,
}

impl From<User> for RegisteredUser {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            username: user.username,
            email: user.email,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct UserProfile {
    pub id: Uuid,
    pub username: String,
    pub email: String,
    pub created_at: String,
    pub upload_path: String,
}

#[derive(Debug, Default, Deserialize)]
pub struct ListVideosQuery {
    pub owner_id: Option<String>,
}

/// Metadata registration; no file bytes travel with it.
#[derive(Debug, Serialize, Deserialize)]
pub struct CreateVideoRequest {
    pub title: String,
    pub filename: String,
    pub owner_id: String,
    #[serde(default)]
    pub description: String,
    pub duration_seconds: Option<u32>,
    pub size_bytes: Option<i64>,
}

#[derive(Debug, Serialize)]
pub struct VideoSummary {
    pub id: Uuid,
    pub title: String,
    pub views: u64,
    pub created_at: String,
}

impl From<Video> for VideoSummary {
    fn from(video: Video) -> Self {
        Self {
            id: video.id,
            title: video.title,
            views: video.views,
            created_at: iso8601(&video.created_at),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct VideoDetails {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub views: u64,
    pub filename: String,
}

impl From<Video> for VideoDetails {
    fn from(video: Video) -> Self {
        Self {
            id: video.id,
            title: video.title,
            description: video.description,
            views: video.views,
            filename: video.filename,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct CreatedVideo {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub views: u64,
    pub filename: String,
    pub owner_id: String,
    pub duration_seconds: Option<u32>,
    pub created_at: String,
}

impl From<Video> for CreatedVideo {
    fn from(video: Video) -> Self {
        Self {
            created_at: iso8601(&video.created_at),
            id: video.id,
            title: video.title,
            description: video.description,
            views: video.views,
            filename: video.filename,
            owner_id: video.owner_id,
            duration_seconds: video.duration_seconds,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct SearchHit {
    pub id: Uuid,
    pub title: String,
    pub views: u64,
}

impl From<Video> for SearchHit {
    fn from(video: Video) -> Self {
        Self {
            id: video.id,
            title: video.title,
            views: video.views,
        }
    }
}

pub fn iso8601(timestamp: &DateTime<Utc>) -> String {
    timestamp.to_rfc3339_opts(SecondsFormat::Micros, false)
}
