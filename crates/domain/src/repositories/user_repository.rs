use crate::entities::User;
use crate::errors::DomainError;
use async_trait::async_trait;
use uuid::Uuid;

/// Repository trait - defines what the user service needs from storage
/// This is a PORT in hexagonal architecture
#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, DomainError>;
    /// Every user, in the order they were registered.
    async fn find_all(&self) -> Result<Vec<User>, DomainError>;
    async fn save(&self, user: &User) -> Result<User, DomainError>;
}
