//! Data models shared between the server handlers and the page renderer.

pub mod book;
pub mod flash;
pub mod user;
