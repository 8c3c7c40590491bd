use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::DomainError;

/// Core User entity - represents a registered account
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,
    pub username: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Validates and normalizes the input: username is trimmed, email is
    /// trimmed and lower-cased.
    pub fn new(username: &str, email: &str) -> Result<Self, DomainError> {
        let username = username.trim();
        if username.is_empty() {
            return Err(DomainError::InvalidInput(
                "Username cannot be empty".to_string(),
            ));
        }

        if !email.contains('@') {
            return Err(DomainError::InvalidInput(
                "Invalid email address".to_string(),
            ));
        }

        Ok(Self {
            id: Uuid::new_v4(),
            username: username.to_string(),
            email: normalize_email(email),
            created_at: Utc::now(),
        })
    }
}

pub(crate) fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}
