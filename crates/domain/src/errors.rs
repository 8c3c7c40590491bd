use thiserror::Error;

/// Broad category of a [`DomainError`], so callers can branch without
/// matching on messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    InvalidInput,
    PolicyViolation,
    Conflict,
    Internal,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("{0}")]
    InvalidInput(String),

    #[error("Unsupported file extension: {extension}. Allowed: {allowed}")]
    UnsupportedExtension { extension: String, allowed: String },

    #[error("Email already registered: {0}")]
    EmailAlreadyRegistered(String),

    #[error("Username already taken: {0}")]
    UsernameAlreadyTaken(String),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

impl DomainError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            DomainError::InvalidInput(_) => ErrorKind::InvalidInput,
            DomainError::UnsupportedExtension { .. } => ErrorKind::PolicyViolation,
            DomainError::EmailAlreadyRegistered(_) | DomainError::UsernameAlreadyTaken(_) => {
                ErrorKind::Conflict
            }
            DomainError::RepositoryError(_) => ErrorKind::Internal,
        }
    }
}
