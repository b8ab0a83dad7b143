//! Request-level errors and their HTTP rendering.

use axum::extract::rejection::{FormRejection, QueryRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use crate::store::StoreError;
use crate::views::{Message, Page};

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("not found")]
    NotFound,
    #[error("malformed form body: {0}")]
    Form(#[from] FormRejection),
    #[error("malformed query string: {0}")]
    Query(#[from] QueryRejection),
    #[error(transparent)]
    Store(#[from] StoreError),
    #[error("session error: {0}")]
    Session(#[from] tower_sessions::session::Error),
    #[error("password hashing failed: {0}")]
    Password(String),
    #[error("background task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}

impl From<argon2::password_hash::Error> for AppError {
    fn from(e: argon2::password_hash::Error) -> Self {
        AppError::Password(e.to_string())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::NotFound => (
                StatusCode::NOT_FOUND,
                Page::new("not_found", Vec::new(), Message::new("Page not found.")),
            )
                .into_response(),
            AppError::Form(_) | AppError::Query(_) => {
                // The rejection text stays in the log
                tracing::warn!(error = %self, "bad request");
                (
                    StatusCode::BAD_REQUEST,
                    Page::new("bad_request", Vec::new(), Message::new("Bad request.")),
                )
                    .into_response()
            }
            other => {
                tracing::error!(error = %other, "request failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Page::new("error", Vec::new(), Message::new("Something went wrong.")),
                )
                    .into_response()
            }
        }
    }
}
