use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::server::form::{required, FormErrors, INVALID_EMAIL_MESSAGE};

static EMAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid")
});

/// Submitted registration form.
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct RegisterForm {
    /// Account name
    pub username: String,
    /// Contact address, must look like `local@domain.tld`
    pub email: String,
    /// Plain password, never trimmed
    pub password: String,
}

/// Account payload posted to the upstream `register/` endpoint.
#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct Registration {
    /// Account name
    pub username: String,
    /// Contact address, must look like `local@domain.tld`
    pub email: String,
    /// Plain password, never trimmed
    pub password: String,
}

impl RegisterForm {
    /// Checks every field is filled in and the email is well formed.
    pub fn validate(&self) -> Result<Registration, FormErrors> {
        let mut errors = FormErrors::new();

        let username = required(&mut errors, "username", &self.username);
        let email = required(&mut errors, "email", &self.email);
        required(&mut errors, "password", &self.password);

        if !email.is_empty() && !EMAIL_REGEX.is_match(&email) {
            errors.add("email", INVALID_EMAIL_MESSAGE);
        }

        errors.into_result(Registration {
            username,
            email,
            password: self.password.clone(),
        })
    }

    /// Copy of the form safe to render back, with the password cleared.
    pub fn redisplay(&self) -> Self {
        Self {
            username: self.username.clone(),
            email: self.email.clone(),
            password: String::new(),
        }
    }
}
