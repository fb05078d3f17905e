use serde::{Deserialize, Serialize};

/// Display data cached in the session after login so pages can greet the user
/// without calling the upstream API.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct UserData {
    pub username: String,
}

impl UserData {
    pub fn new(username: impl Into<String>) -> Self {
        Self {
            username: username.into(),
        }
    }
}
