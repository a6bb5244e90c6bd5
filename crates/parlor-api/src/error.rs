//! Application error type. Every variant collapses to the same unstyled 500
//! page: the store, session, and hashing layers have no failure modes the
//! browser can act on, so nothing is classified for the user.

use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use thiserror::Error;
use tracing::error;

use parlor_types::forms::MissingField;

use crate::views;

#[derive(Debug, Error)]
pub enum AppError {
    /// Store read/write failure.
    #[error(transparent)]
    Store(#[from] anyhow::Error),

    /// Session store failure (load, insert, or flush).
    #[error("session error: {0}")]
    Session(#[from] tower_sessions::session::Error),

    /// Password hashing or hash parsing failure.
    #[error("password hash error: {0}")]
    PasswordHash(argon2::password_hash::Error),

    /// A blocking store task panicked or was cancelled.
    #[error("blocking task failed: {0}")]
    Join(#[from] tokio::task::JoinError),

    /// A required form field was missing or empty.
    #[error(transparent)]
    Validation(#[from] MissingField),
}

impl From<argon2::password_hash::Error> for AppError {
    fn from(e: argon2::password_hash::Error) -> Self {
        AppError::PasswordHash(e)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        error!("request failed: {}", self);
        (StatusCode::INTERNAL_SERVER_ERROR, Html(views::error_page())).into_response()
    }
}
