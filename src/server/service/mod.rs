//! Service layer for the upstream books API.
//!
//! [`api::ApiClient`] owns the HTTP plumbing. The book and auth services wrap it with one
//! typed method per upstream endpoint so controllers only ever see decoded payloads or an
//! [`ApiError`](crate::server::error::api::ApiError).

pub mod api;
pub mod auth;
pub mod book;
