//! Test fixture modules for upstream payloads and mock endpoints.
//!
//! - `api` - mock endpoints of the upstream books API
//! - `book` - book payloads as the upstream serializes them

pub mod api;
pub mod book;
