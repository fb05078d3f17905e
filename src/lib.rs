//! Server-rendered front-end for the eco books catalog.
//!
//! The server proxies the upstream books API, keeps the user's upstream token in a
//! server-side session and renders pages with dioxus on the server.

pub mod client;
pub mod model;
pub mod server;
