//! Upstream authentication token session storage.
//!
//! The token returned by the upstream `login/` endpoint is kept in the session under
//! `auth_token` and attached to every upstream request made on behalf of the user. Its
//! presence is the only authorization signal the front-end uses.

use serde::{Deserialize, Serialize};
use tower_sessions::Session;

use crate::server::error::Error;

/// Session key for the upstream authentication token.
pub const SESSION_AUTH_TOKEN_KEY: &str = "auth_token";

/// Session wrapper for the upstream authentication token.
#[derive(Default, Deserialize, Serialize, Debug)]
pub struct SessionAuthToken(pub String);

impl SessionAuthToken {
    /// Inserts the upstream token into the session, replacing any previous token.
    pub async fn insert(session: &Session, token: &str) -> Result<(), Error> {
        session
            .insert(SESSION_AUTH_TOKEN_KEY, SessionAuthToken(token.to_string()))
            .await?;

        Ok(())
    }

    /// Retrieves the upstream token, `None` when the user is not logged in.
    ///
    /// An empty stored token counts as absent.
    pub async fn get(session: &Session) -> Result<Option<String>, Error> {
        let token = session
            .get::<SessionAuthToken>(SESSION_AUTH_TOKEN_KEY)
            .await?
            .map(|SessionAuthToken(token)| token)
            .filter(|token| !token.is_empty());

        Ok(token)
    }
}
