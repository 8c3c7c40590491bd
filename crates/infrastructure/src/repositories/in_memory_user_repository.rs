use async_trait::async_trait;
use domain::{DomainError, User, UserRepository};
use std::collections::HashMap;
use tokio::sync::RwLock;
use tracing::debug;
use uuid::Uuid;

#[derive(Default)]
struct UserTable {
    by_id: HashMap<Uuid, User>,
    registration_order: Vec<Uuid>,
}

/// Process-lifetime user store. Every call takes the lock once, so each
/// operation is atomic on its own. `find_all` yields users in the order they
/// were first saved.
#[derive(Default)]
pub struct InMemoryUserRepository {
    users: RwLock<UserTable>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, DomainError> {
        Ok(self.users.read().await.by_id.get(&id).cloned())
    }

    async fn find_all(&self) -> Result<Vec<User>, DomainError> {
        let users = self.users.read().await;
        Ok(users
            .registration_order
            .iter()
            .filter_map(|id| users.by_id.get(id).cloned())
            .collect())
    }

    async fn save(&self, user: &User) -> Result<User, DomainError> {
        let mut users = self.users.write().await;
        if users.by_id.insert(user.id, user.clone()).is_none() {
            users.registration_order.push(user.id);
        }
        debug!("Stored user {} ({} total)", user.id, users.by_id.len());
        Ok(user.clone())
    }
}
