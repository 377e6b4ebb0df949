use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use strum_macros::IntoStaticStr;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, DirectoryError>;

#[derive(Debug, Error, IntoStaticStr)]
pub enum DirectoryError {
    #[error("missing user id")]
    MissingId,

    #[error("invalid user id")]
    InvalidId,

    #[error("user id must be positive")]
    NonPositiveId,

    #[error("user not found")]
    NotFound,

    #[error("invalid request body")]
    MalformedBody,

    #[error("name is required")]
    MissingName,

    #[error("email is required")]
    MissingEmail,

    #[error("invalid email format")]
    InvalidEmail,

    #[error("email already exists")]
    DuplicateEmail,

    #[error("Dependency not found: {type_name}")]
    DependencyNotFound { type_name: String },

    #[error("Failed to downcast type: {type_name}")]
    DowncastFailed { type_name: String },

    #[error("Invalid configuration for {key}: {message}")]
    Config { key: String, message: String },
}

impl DirectoryError {
    /// Stable variant name, used as a structured logging field.
    pub fn kind(&self) -> &'static str {
        self.into()
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            DirectoryError::MissingId
            | DirectoryError::InvalidId
            | DirectoryError::NonPositiveId
            | DirectoryError::MalformedBody
            | DirectoryError::MissingName
            | DirectoryError::MissingEmail
            | DirectoryError::InvalidEmail => StatusCode::BAD_REQUEST,
            DirectoryError::NotFound => StatusCode::NOT_FOUND,
            DirectoryError::DuplicateEmail => StatusCode::CONFLICT,
            DirectoryError::DependencyNotFound { .. }
            | DirectoryError::DowncastFailed { .. }
            | DirectoryError::Config { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn is_client_error(&self) -> bool {
        self.status_code().is_client_error()
    }
}

impl IntoResponse for DirectoryError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if self.is_client_error() {
            tracing::warn!(kind = self.kind(), status = status.as_u16(), "request rejected: {}", self);
        } else {
            tracing::error!(kind = self.kind(), "request failed: {}", self);
        }
        // A String body is served as text/plain; charset=utf-8.
        (status, self.to_string()).into_response()
    }
}
