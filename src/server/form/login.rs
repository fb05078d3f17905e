use serde::{Deserialize, Serialize};

use crate::server::form::{required, FormErrors};

/// Submitted login form.
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct LoginForm {
    /// Account name
    pub username: String,
    /// Plain password, never trimmed
    pub password: String,
}

/// Credentials posted to the upstream `login/` endpoint.
#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct LoginCredentials {
    /// Account name
    pub username: String,
    /// Plain password, never trimmed
    pub password: String,
}

impl LoginForm {
    /// Checks both fields are filled in.
    ///
    /// The username is trimmed, the password is sent exactly as typed.
    pub fn validate(&self) -> Result<LoginCredentials, FormErrors> {
        let mut errors = FormErrors::new();

        let username = required(&mut errors, "username", &self.username);
        required(&mut errors, "password", &self.password);

        errors.into_result(LoginCredentials {
            username,
            password: self.password.clone(),
        })
    }

    /// Copy of the form safe to render back, with the password cleared.
    pub fn redisplay(&self) -> Self {
        Self {
            username: self.username.clone(),
            password: String::new(),
        }
    }
}
