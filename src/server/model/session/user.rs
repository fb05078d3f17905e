use tower_sessions::Session;

use crate::{model::user::UserData, server::error::Error};

/// Session key for the cached user display data.
pub const SESSION_USER_DATA_KEY: &str = "user_data";

/// Session wrapper for the user display data cached at login.
pub struct SessionUserData;

impl SessionUserData {
    /// Insert user display data into session
    pub async fn insert(session: &Session, user_data: &UserData) -> Result<(), Error> {
        session.insert(SESSION_USER_DATA_KEY, user_data).await?;

        Ok(())
    }

    /// Get user display data from session
    pub async fn get(session: &Session) -> Result<Option<UserData>, Error> {
        let user_data = session.get::<UserData>(SESSION_USER_DATA_KEY).await?;

        Ok(user_data)
    }
}
