use crate::entities::Video;
use crate::errors::DomainError;
use crate::repositories::VideoRepository;
use crate::services::ValidationService;
use std::sync::Arc;
use tracing::{debug, info, warn};
use uuid::Uuid;

/// Video catalog service: ingestion policy, listing, search and view counts
pub struct VideoService {
    video_repository: Arc<dyn VideoRepository>,
    validation: Arc<ValidationService>,
}

impl VideoService {
    pub fn new(
        video_repository: Arc<dyn VideoRepository>,
        validation: Arc<ValidationService>,
    ) -> Self {
        Self {
            video_repository,
            validation,
        }
    }

    /// Accept a video into the catalog. The catalog is left untouched when
    /// the extension is not allowed.
    pub async fn add_video(&self, video: Video) -> Result<Video, DomainError> {
        if !self.validation.validate_file_extension(&video.filename) {
            warn!("Rejected video {} with filename {}", video.id, video.filename);
            return Err(DomainError::UnsupportedExtension {
                extension: video.extension(),
                allowed: self.validation.allowed_extensions_display(),
            });
        }

        let saved = self.video_repository.save(&video).await?;
        info!("Added video {} \"{}\" for owner {}", saved.id, saved.title, saved.owner_id);
        Ok(saved)
    }

    pub async fn get_video(&self, id: Uuid) -> Result<Option<Video>, DomainError> {
        self.video_repository.find_by_id(id).await
    }

    /// All videos, newest first. An empty or missing owner means no filter.
    pub async fn list_videos(&self, owner_id: Option<&str>) -> Result<Vec<Video>, DomainError> {
        let mut videos = self.video_repository.find_all().await?;
        if let Some(owner_id) = owner_id.filter(|owner| !owner.is_empty()) {
            videos.retain(|video| video.owner_id == owner_id);
        }
        videos.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(videos)
    }

    pub async fn delete_video(&self, id: Uuid) -> Result<bool, DomainError> {
        let removed = self.video_repository.delete(id).await?;
        if removed {
            info!("Deleted video {}", id);
        }
        Ok(removed)
    }

    /// Case-insensitive substring match on title or description, oldest first.
    pub async fn search_videos(&self, query: &str) -> Result<Vec<Video>, DomainError> {
        let query = query.to_lowercase();
        let mut matches: Vec<Video> = self
            .video_repository
            .find_all()
            .await?
            .into_iter()
            .filter(|video| {
                video.title.to_lowercase().contains(&query)
                    || video.description.to_lowercase().contains(&query)
            })
            .collect();
        matches.sort_by(|a, b| a.created_at.cmp(&b.created_at));
        debug!("Search {:?} matched {} videos", query, matches.len());
        Ok(matches)
    }

    /// Fetch a video for playback, counting one view.
    pub async fn watch_video(&self, id: Uuid) -> Result<Option<Video>, DomainError> {
        self.video_repository.increment_views(id).await
    }
}
