use crate::server::service::api::ApiClient;

/// State shared by every handler.
#[derive(Clone)]
pub struct AppState {
    /// Client for the upstream books API.
    pub api_client: ApiClient,
}

impl From<ApiClient> for AppState {
    fn from(api_client: ApiClient) -> Self {
        Self { api_client }
    }
}
