//! Flash message queue stored in the session.
//!
//! Handlers push messages before redirecting or rendering; the next rendered page takes the
//! whole queue, so each message is shown exactly once.

use tower_sessions::Session;

use crate::{
    model::flash::{FlashLevel, FlashMessage},
    server::error::Error,
};

/// Session key for pending flash messages.
pub const SESSION_FLASH_KEY: &str = "flash";

/// Session wrapper for the pending flash message queue.
pub struct SessionFlash;

impl SessionFlash {
    /// Appends a message to the pending queue.
    pub async fn push(
        session: &Session,
        level: FlashLevel,
        text: impl Into<String>,
    ) -> Result<(), Error> {
        let mut messages = session
            .get::<Vec<FlashMessage>>(SESSION_FLASH_KEY)
            .await?
            .unwrap_or_default();

        messages.push(FlashMessage::new(level, text));
        session.insert(SESSION_FLASH_KEY, messages).await?;

        Ok(())
    }

    /// Queues an informational message.
    pub async fn info(session: &Session, text: impl Into<String>) -> Result<(), Error> {
        Self::push(session, FlashLevel::Info, text).await
    }

    /// Queues a success message.
    pub async fn success(session: &Session, text: impl Into<String>) -> Result<(), Error> {
        Self::push(session, FlashLevel::Success, text).await
    }

    /// Queues a warning message.
    pub async fn warning(session: &Session, text: impl Into<String>) -> Result<(), Error> {
        Self::push(session, FlashLevel::Warning, text).await
    }

    /// Queues an error message.
    pub async fn error(session: &Session, text: impl Into<String>) -> Result<(), Error> {
        Self::push(session, FlashLevel::Error, text).await
    }

    /// Removes and returns every pending message, oldest first.
    pub async fn take(session: &Session) -> Result<Vec<FlashMessage>, Error> {
        let messages = session
            .remove::<Vec<FlashMessage>>(SESSION_FLASH_KEY)
            .await?
            .unwrap_or_default();

        Ok(messages)
    }

    /// Returns pending messages without consuming them.
    pub async fn peek(session: &Session) -> Result<Vec<FlashMessage>, Error> {
        let messages = session
            .get::<Vec<FlashMessage>>(SESSION_FLASH_KEY)
            .await?
            .unwrap_or_default();

        Ok(messages)
    }
}
