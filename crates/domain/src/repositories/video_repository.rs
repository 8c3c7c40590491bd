use crate::entities::Video;
use crate::errors::DomainError;
use async_trait::async_trait;
use uuid::Uuid;

#[async_trait]
pub trait VideoRepository: Send + Sync {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Video>, DomainError>;
    async fn find_all(&self) -> Result<Vec<Video>, DomainError>;
    async fn save(&self, video: &Video) -> Result<Video, DomainError>;
    /// Returns whether a record was removed.
    async fn delete(&self, id: Uuid) -> Result<bool, DomainError>;
    /// Bumps the view counter by one in a single step and returns the
    /// updated record, or `None` without side effects when absent.
    async fn increment_views(&self, id: Uuid) -> Result<Option<Video>, DomainError>;
}
