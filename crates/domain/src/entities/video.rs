use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::DomainError;

/// Video metadata record. Only becomes part of the catalog once
/// `VideoService::add_video` accepts it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Video {
    pub id: Uuid,
    pub title: String,
    pub filename: String,
    pub owner_id: String, // weak reference to a User id, never validated
    pub description: String,
    pub duration_seconds: Option<u32>,
    pub views: u64,
    pub created_at: DateTime<Utc>,
}

impl Video {
    pub fn new(title: &str, filename: &str, owner_id: &str) -> Result<Self, DomainError> {
        let title = title.trim();
        if title.is_empty() {
            return Err(DomainError::InvalidInput(
                "Video title cannot be empty".to_string(),
            ));
        }

        if filename.is_empty() {
            return Err(DomainError::InvalidInput(
                "Filename cannot be empty".to_string(),
            ));
        }

        Ok(Self {
            id: Uuid::new_v4(),
            title: title.to_string(),
            filename: filename.to_string(),
            owner_id: owner_id.to_string(),
            description: String::new(),
            duration_seconds: None,
            views: 0,
            created_at: Utc::now(),
        })
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_duration_seconds(mut self, duration_seconds: u32) -> Self {
        self.duration_seconds = Some(duration_seconds);
        self
    }

    /// Lower-cased suffix after the last `.`, or an empty string.
    pub fn extension(&self) -> String {
        file_extension(&self.filename).unwrap_or_default()
    }

    pub fn increment_views(&mut self) {
        self.views += 1;
    }
}

pub(crate) fn file_extension(filename: &str) -> Option<String> {
    filename
        .rsplit_once('.')
        .map(|(_, ext)| ext.to_lowercase())
}
