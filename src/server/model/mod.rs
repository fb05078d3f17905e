//! Server application models.
//!
//! Application state shared by every handler and the typed session data wrappers.

pub mod app;
pub mod session;
