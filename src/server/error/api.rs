//! Upstream books API failure taxonomy.
//!
//! Every outbound call resolves to either a decoded payload or one of these variants.
//! Controllers match on them to pick the flash message shown to the user, so an
//! `ApiError` never reaches the HTTP response directly.

use reqwest::StatusCode;
use thiserror::Error;

/// Maximum length of an upstream body kept for logging and error extraction
const MAX_ERROR_BODY_LENGTH: usize = 2000;

/// Failure of a call to the upstream books API.
#[derive(Error, Debug)]
pub enum ApiError {
    /// The upstream answered 404 for the requested resource.
    #[error("Upstream resource not found")]
    NotFound,
    /// The request never produced an HTTP response (connection refused, DNS, timeout).
    #[error("Failed to reach the books API: {0}")]
    Transport(#[from] reqwest::Error),
    /// The upstream answered with a status the caller does not accept.
    #[error("Books API responded with status {status}")]
    Upstream {
        /// HTTP status returned by the upstream
        status: StatusCode,
        /// Raw response body, truncated
        body: String,
    },
    /// The upstream answered successfully but the payload did not have the expected shape.
    #[error("Malformed response from the books API: {0}")]
    Malformed(String),
}

impl ApiError {
    /// Builds an [`ApiError`] for a non-accepted status, mapping 404 to [`ApiError::NotFound`].
    pub fn from_status(status: StatusCode, body: &str) -> Self {
        if status == StatusCode::NOT_FOUND {
            return Self::NotFound;
        }

        Self::Upstream {
            status,
            body: truncate_body(body),
        }
    }

    /// Whether the failure happened before any HTTP response was received.
    pub fn is_unreachable(&self) -> bool {
        matches!(self, Self::Transport(_))
    }
}

fn truncate_body(body: &str) -> String {
    if body.len() <= MAX_ERROR_BODY_LENGTH {
        return body.to_string();
    }

    let mut end = MAX_ERROR_BODY_LENGTH;
    while !body.is_char_boundary(end) {
        end -= 1;
    }

    body[..end].to_string()
}
