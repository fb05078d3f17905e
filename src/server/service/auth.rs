//! Account services backed by the upstream `login/` and `register/` endpoints.

use dioxus_logger::tracing;
use reqwest::StatusCode;
use serde_json::Value;

use crate::{
    model::book::LoginResult,
    server::{
        error::api::ApiError,
        form::{login::LoginCredentials, register::Registration},
        service::api::ApiClient,
    },
};

/// Fallback shown when a failed registration carries no readable reason.
pub const REGISTRATION_ERROR_MESSAGE: &str = "Error registering user.";

/// Keys the upstream uses for a single top-level error message.
const MESSAGE_KEYS: [&str; 3] = ["detail", "error", "message"];

/// Login and registration against the upstream account endpoints.
pub struct AuthService<'a> {
    api_client: &'a ApiClient,
}

impl<'a> AuthService<'a> {
    /// Creates a new instance of [`AuthService`]
    pub fn new(api_client: &'a ApiClient) -> Self {
        Self { api_client }
    }

    /// Exchanges credentials for an upstream token.
    ///
    /// The request is sent without an `Authorization` header.
    ///
    /// # Returns
    /// - `Ok(String)` - upstream answered 200 with a token
    /// - `Err(ApiError::Malformed)` - 200 without a token or with an unreadable body
    /// - `Err(ApiError::Upstream)` - any other status, typically rejected credentials
    /// - `Err(ApiError::Transport)` - the authentication service could not be reached
    pub async fn login(&self, credentials: &LoginCredentials) -> Result<String, ApiError> {
        let response = self.api_client.post("login/", credentials, None).await?;

        if response.status != StatusCode::OK {
            tracing::debug!(
                username = %credentials.username,
                status = %response.status,
                "Upstream rejected login"
            );

            return Err(ApiError::from_status(response.status, &response.body));
        }

        let result: LoginResult = response.json()?;

        match result.token.filter(|token| !token.is_empty()) {
            Some(token) => Ok(token),
            None => Err(ApiError::Malformed(
                "login response did not contain a token".to_string(),
            )),
        }
    }

    /// Creates an upstream account.
    ///
    /// Only 201 Created counts as success.
    pub async fn register(&self, registration: &Registration) -> Result<(), ApiError> {
        let response = self
            .api_client
            .post("register/", registration, None)
            .await?;

        if response.status != StatusCode::CREATED {
            tracing::debug!(
                username = %registration.username,
                status = %response.status,
                "Upstream rejected registration"
            );

            return Err(ApiError::from_status(response.status, &response.body));
        }

        Ok(())
    }
}

/// Builds the flash text for a failed registration.
///
/// Reads the upstream error body when there is one: a `detail`, `error` or `message` key,
/// otherwise every `field: message` pair, otherwise a bare JSON string or list. Falls back to
/// [`REGISTRATION_ERROR_MESSAGE`] when nothing readable is found.
pub fn registration_error_message(error: &ApiError) -> String {
    let ApiError::Upstream { body, .. } = error else {
        return REGISTRATION_ERROR_MESSAGE.to_string();
    };

    let Ok(value) = serde_json::from_str::<Value>(body) else {
        return REGISTRATION_ERROR_MESSAGE.to_string();
    };

    match describe(&value) {
        Some(reason) => format!("Error registering user: {}", reason),
        None => REGISTRATION_ERROR_MESSAGE.to_string(),
    }
}

fn describe(value: &Value) -> Option<String> {
    match value {
        Value::Object(map) => {
            if let Some(message) = MESSAGE_KEYS
                .iter()
                .find_map(|key| map.get(*key).and_then(flatten_messages))
            {
                return Some(message);
            }

            let pairs: Vec<String> = map
                .iter()
                .filter_map(|(field, value)| {
                    flatten_messages(value).map(|message| format!("{}: {}", field, message))
                })
                .collect();

            (!pairs.is_empty()).then(|| pairs.join("; "))
        }
        other => flatten_messages(other),
    }
}

fn flatten_messages(value: &Value) -> Option<String> {
    match value {
        Value::String(message) => {
            let message = message.trim();
            (!message.is_empty()).then(|| message.to_string())
        }
        Value::Array(items) => {
            let messages: Vec<String> = items.iter().filter_map(flatten_messages).collect();
            (!messages.is_empty()).then(|| messages.join(" "))
        }
        _ => None,
    }
}
