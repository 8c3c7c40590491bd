use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use domain::{DomainError, ErrorKind};
use serde_json::json;
use tracing::error;

/// Boundary error: the only place domain failures become status codes.
#[derive(Debug)]
pub enum ApiError {
    Domain(DomainError),
    NotFound(&'static str),
}

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        ApiError::Domain(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, detail) = match self {
            ApiError::NotFound(what) => (StatusCode::NOT_FOUND, format!("{} not found", what)),
            ApiError::Domain(err) => match err.kind() {
                ErrorKind::InvalidInput | ErrorKind::PolicyViolation | ErrorKind::Conflict => {
                    (StatusCode::BAD_REQUEST, err.to_string())
                }
                ErrorKind::Internal => {
                    error!("Request failed: {}", err);
                    (StatusCode::INTERNAL_SERVER_ERROR, err.to_string())
                }
            },
        };

        (status, Json(json!({ "detail": detail }))).into_response()
    }
}
