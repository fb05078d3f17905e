//! Session data models and utilities.
//!
//! This module provides type-safe wrappers for session data storage and retrieval using
//! tower-sessions. Each submodule defines one piece of session state (upstream token, user
//! display data, flash queue). [`SessionContext`] is the explicit per-request snapshot of the
//! authentication state that handlers pass to the upstream API client.

pub mod auth;
pub mod flash;
pub mod user;

use tower_sessions::Session;

use crate::{
    model::user::UserData,
    server::{
        error::Error,
        model::session::{auth::SessionAuthToken, user::SessionUserData},
    },
};

/// Authentication state of the current request, loaded from the session.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SessionContext {
    /// Upstream token, present only while logged in.
    pub auth_token: Option<String>,
    /// Display data cached at login.
    pub user_data: Option<UserData>,
}

impl SessionContext {
    /// Loads the authentication state from the session.
    pub async fn load(session: &Session) -> Result<Self, Error> {
        let auth_token = SessionAuthToken::get(session).await?;
        let user_data = SessionUserData::get(session).await?;

        Ok(Self {
            auth_token,
            user_data,
        })
    }

    /// Whether the session holds an upstream token.
    pub fn is_authenticated(&self) -> bool {
        self.auth_token.is_some()
    }

    /// Stores a fresh login in the session and returns the matching context.
    pub async fn login(session: &Session, token: &str, username: &str) -> Result<Self, Error> {
        let user_data = UserData::new(username);

        SessionAuthToken::insert(session, token).await?;
        SessionUserData::insert(session, &user_data).await?;

        Ok(Self {
            auth_token: Some(token.to_string()),
            user_data: Some(user_data),
        })
    }

    /// Drops the whole session, logging the user out.
    ///
    /// The stored record is deleted, so anything written afterwards lands in a fresh session.
    pub async fn logout(session: &Session) -> Result<(), Error> {
        session.flush().await?;

        Ok(())
    }
}
