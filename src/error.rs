use axum::http::StatusCode;

use crate::{db::repository::RepoError, services::TodoError};

#[derive(Debug)]
pub enum AppError {
    BadRequest(String),
    NotFound(String),
    /// Any other client error whose status should reach the caller unchanged
    /// (405, 415, 422, ...).
    Rejected(StatusCode, String),
    Internal(String),
}

impl AppError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::BadRequest(message.into())
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound(message.into())
    }

    pub fn rejected(status: StatusCode, message: impl Into<String>) -> Self {
        Self::Rejected(status, message.into())
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    pub fn message(&self) -> &str {
        match self {
            Self::BadRequest(message)
            | Self::NotFound(message)
            | Self::Rejected(_, message)
            | Self::Internal(message) => message.as_str(),
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Rejected(status, _) => *status,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for AppError {}

const INTERNAL_MESSAGE: &str = "internal server error";

/// Store failures are logged in full; clients only see a generic message.
impl From<RepoError> for AppError {
    fn from(err: RepoError) -> Self {
        tracing::error!(error = %err, "todo store operation failed");
        AppError::internal(INTERNAL_MESSAGE)
    }
}

impl From<TodoError> for AppError {
    fn from(err: TodoError) -> Self {
        match err {
            TodoError::NotFound(_) => AppError::not_found(err.to_string()),
            TodoError::Repository(err) => err.into(),
        }
    }
}
