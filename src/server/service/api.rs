//! HTTP client for the upstream books API.
//!
//! Every request goes to `{base}/api/books/{endpoint}` with a JSON content type and, when the
//! caller passes a logged-in [`SessionContext`], an `Authorization: Token {token}` header.
//! There are no retries: a call either yields a response within [`REQUEST_TIMEOUT_SECS`] or
//! fails with [`ApiError::Transport`].

use std::time::Duration;

use dioxus_logger::tracing;
use reqwest::{
    header::{self, HeaderMap, HeaderValue},
    Client, StatusCode,
};
use serde::{de::DeserializeOwned, Serialize};

use crate::server::{
    error::{api::ApiError, Error},
    model::session::SessionContext,
};

/// Fixed timeout applied to every upstream request.
pub const REQUEST_TIMEOUT_SECS: u64 = 5;

/// Path prefix of every upstream books endpoint.
const API_PREFIX: &str = "api/books";

/// Raw upstream response returned by [`ApiClient::post`].
///
/// POST callers branch on the status themselves, so the body is kept undecoded.
#[derive(Debug, Clone)]
pub struct ApiResponse {
    /// HTTP status returned by the upstream
    pub status: StatusCode,
    /// Raw response body
    pub body: String,
}

impl ApiResponse {
    /// Decodes the body as JSON.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, ApiError> {
        serde_json::from_str(&self.body).map_err(|e| ApiError::Malformed(e.to_string()))
    }

    /// Whether the upstream answered with one of `accepted`.
    pub fn has_status(&self, accepted: &[StatusCode]) -> bool {
        accepted.contains(&self.status)
    }
}

/// Client for the upstream books API.
///
/// Clone is cheap, `reqwest::Client` shares its connection pool between clones.
#[derive(Clone, Debug)]
pub struct ApiClient {
    client: Client,
    base_url: String,
}

impl ApiClient {
    /// Creates a client for the API at `base_url`.
    pub fn new(base_url: impl Into<String>) -> Result<Self, Error> {
        let client = Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .map_err(Error::HttpClientError)?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    /// Base URL the client was configured with.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Full URL of an upstream books endpoint.
    pub fn url(&self, endpoint: &str) -> String {
        format!(
            "{}/{}/{}",
            self.base_url,
            API_PREFIX,
            endpoint.trim_start_matches('/')
        )
    }

    fn headers(ctx: Option<&SessionContext>) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(
            header::CONTENT_TYPE,
            HeaderValue::from_static("application/json"),
        );

        let token = ctx.and_then(|ctx| ctx.auth_token.as_deref());
        if let Some(token) = token {
            match HeaderValue::from_str(&format!("Token {}", token)) {
                Ok(value) => {
                    headers.insert(header::AUTHORIZATION, value);
                }
                Err(_) => {
                    tracing::warn!(
                        "Session token is not a valid header value, sending request without it"
                    );
                }
            }
        }

        headers
    }

    /// Fetches `endpoint` and decodes a 2xx JSON body into `T`.
    ///
    /// # Returns
    /// - `Ok(T)` - 2xx response with a body matching `T`
    /// - `Err(ApiError::NotFound)` - upstream answered 404
    /// - `Err(ApiError::Upstream)` - any other non-2xx status
    /// - `Err(ApiError::Malformed)` - 2xx body that does not decode into `T`
    /// - `Err(ApiError::Transport)` - no response (connection error, DNS, timeout)
    pub async fn get<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        ctx: Option<&SessionContext>,
        query: Option<&[(&str, &str)]>,
    ) -> Result<T, ApiError> {
        let mut request = self.client.get(self.url(endpoint)).headers(Self::headers(ctx));
        if let Some(query) = query {
            request = request.query(query);
        }

        let response = request.send().await.map_err(|e| {
            tracing::warn!(endpoint = %endpoint, "GET request to books API failed: {}", e);
            ApiError::Transport(e)
        })?;

        let status = response.status();
        let body = response.text().await?;

        tracing::debug!(endpoint = %endpoint, status = %status, "GET books API");

        if !status.is_success() {
            return Err(ApiError::from_status(status, &body));
        }

        serde_json::from_str(&body).map_err(|e| {
            tracing::warn!(endpoint = %endpoint, "Unexpected payload from books API: {}", e);
            ApiError::Malformed(e.to_string())
        })
    }

    /// Posts `body` as JSON to `endpoint`.
    ///
    /// Any HTTP response, whatever its status, is returned as an [`ApiResponse`]; only
    /// transport failures are errors.
    pub async fn post<B: Serialize + ?Sized>(
        &self,
        endpoint: &str,
        body: &B,
        ctx: Option<&SessionContext>,
    ) -> Result<ApiResponse, ApiError> {
        let response = self
            .client
            .post(self.url(endpoint))
            .headers(Self::headers(ctx))
            .json(body)
            .send()
            .await
            .map_err(|e| {
                tracing::warn!(endpoint = %endpoint, "POST request to books API failed: {}", e);
                ApiError::Transport(e)
            })?;

        let status = response.status();
        let body = response.text().await?;

        tracing::debug!(endpoint = %endpoint, status = %status, "POST books API");

        Ok(ApiResponse { status, body })
    }
}
