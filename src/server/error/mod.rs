//! Error types for the eco server application.
//!
//! Upstream API failures are described by [`api::ApiError`] and are always turned into flash
//! messages by the controllers. [`Error`] covers the remaining infrastructure failures (session
//! store, configuration, HTTP client construction, I/O) and implements `IntoResponse` so Axum
//! handlers can propagate them with `?`.

pub mod api;
pub mod config;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use dioxus_logger::tracing;
use thiserror::Error;

use crate::server::error::config::ConfigError;

/// Main error type for the eco server application.
///
/// Aggregates domain-specific error types and external library errors into a single
/// type. `#[from]` conversions let handlers and startup code use `?` directly.
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error (invalid environment variable values).
    #[error(transparent)]
    ConfigError(#[from] ConfigError),
    /// HTTP client construction error.
    #[error("Failed to build HTTP client: {0}")]
    HttpClientError(reqwest::Error),
    /// Session error (session retrieval, storage, serialization).
    #[error(transparent)]
    SessionError(#[from] tower_sessions::session::Error),
    /// Redis session store error (connection, command execution).
    #[error(transparent)]
    SessionRedisError(#[from] tower_sessions_redis_store::fred::prelude::Error),
    /// I/O error (binding the listener, serving connections).
    #[error(transparent)]
    IoError(#[from] std::io::Error),
}

/// Converts application errors into HTTP responses.
///
/// Every variant is an infrastructure failure the user cannot act on, so all of them map
/// to a logged 500 Internal Server Error.
impl IntoResponse for Error {
    fn into_response(self) -> Response {
        InternalServerError(self).into_response()
    }
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error response.
///
/// Logs the error message and returns a generic message to the client to avoid leaking
/// implementation details.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error").into_response()
    }
}
