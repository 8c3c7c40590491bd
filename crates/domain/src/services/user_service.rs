use crate::entities::user::normalize_email;
use crate::entities::User;
use crate::errors::DomainError;
use crate::repositories::UserRepository;
use crate::services::ValidationService;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{debug, info, warn};
use uuid::Uuid;

/// User Service - registration and lookup of accounts
pub struct UserService {
    user_repository: Arc<dyn UserRepository>,
    upload_dir: PathBuf,
    // Serializes the uniqueness scan with the insert that follows it.
    registration_lock: Mutex<()>,
}

impl UserService {
    pub fn new(user_repository: Arc<dyn UserRepository>, upload_dir: impl Into<PathBuf>) -> Self {
        Self {
            user_repository,
            upload_dir: upload_dir.into(),
            registration_lock: Mutex::new(()),
        }
    }

    /// Register a new user.
    ///
    /// Existing users are scanned one at a time; for each one the email is
    /// compared before the username, so the first colliding user decides
    /// which conflict is reported.
    pub async fn register_user(&self, username: &str, email: &str) -> Result<User, DomainError> {
        if !ValidationService::validate_email(email) {
            warn!("Rejected registration with invalid email: {}", email);
            return Err(DomainError::InvalidInput(format!("Invalid email: {}", email)));
        }

        let _guard = self.registration_lock.lock().await;

        let normalized_email = normalize_email(email);
        let trimmed_username = username.trim();
        for existing in self.user_repository.find_all().await? {
            if existing.email == normalized_email {
                return Err(DomainError::EmailAlreadyRegistered(email.to_string()));
            }
            if existing.username == trimmed_username {
                return Err(DomainError::UsernameAlreadyTaken(username.to_string()));
            }
        }

        let user = User::new(username, email)?;
        let saved = self.user_repository.save(&user).await?;
        info!("Registered user {} ({})", saved.username, saved.id);
        Ok(saved)
    }

    pub async fn get_user(&self, id: Uuid) -> Result<Option<User>, DomainError> {
        debug!("Looking up user {}", id);
        self.user_repository.find_by_id(id).await
    }

    /// Directory where a user's uploads would live. No filesystem access.
    pub fn get_upload_path(&self, user_id: &str) -> PathBuf {
        self.upload_dir.join(user_id)
    }
}
