use async_trait::async_trait;
use domain::{DomainError, Video, VideoRepository};
use std::collections::HashMap;
use tokio::sync::RwLock;
use tracing::debug;
use uuid::Uuid;

/// Process-lifetime video catalog guarded by a single lock.
#[derive(Default)]
pub struct InMemoryVideoRepository {
    videos: RwLock<HashMap<Uuid, Video>>,
}

impl InMemoryVideoRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl VideoRepository for InMemoryVideoRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Video>, DomainError> {
        Ok(self.videos.read().await.get(&id).cloned())
    }

    async fn find_all(&self) -> Result<Vec<Video>, DomainError> {
        Ok(self.videos.read().await.values().cloned().collect())
    }

    async fn save(&self, video: &Video) -> Result<Video, DomainError> {
        let mut videos = self.videos.write().await;
        videos.insert(video.id, video.clone());
        debug!("Stored video {} ({} total)", video.id, videos.len());
        Ok(video.clone())
    }

    async fn delete(&self, id: Uuid) -> Result<bool, DomainError> {
        Ok(self.videos.write().await.remove(&id).is_some())
    }

    async fn increment_views(&self, id: Uuid) -> Result<Option<Video>, DomainError> {
        let mut videos = self.videos.write().await;
        Ok(videos.get_mut(&id).map(|video| {
            video.increment_views();
            video.clone()
        }))
    }
}
