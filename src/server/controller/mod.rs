//! HTTP controller endpoints for the eco front-end.
//!
//! Each handler loads the [`SessionContext`](crate::server::model::session::SessionContext),
//! calls the upstream services and answers with a [`View`](crate::server::view::View): a
//! rendered page or a redirect. Upstream failures never become error responses; they are
//! turned into flash messages. Only session store failures surface as a 500.

pub mod auth;
pub mod book;
pub mod util;
