// =============================================================================
// SkillBridge Web - Supabase Client Module
// =============================================================================
// Table of Contents:
// 1. Submodules
// 2. Re-exports
// 3. Supabase Client
// =============================================================================

// -----------------------------------------------------------------------------
// 1. Submodules
// -----------------------------------------------------------------------------

pub mod auth;
pub mod jobs;

// -----------------------------------------------------------------------------
// 2. Re-exports
// -----------------------------------------------------------------------------

pub use auth::*;
pub use skillbridge_board::ApiError;

use gloo_net::http::{Request, RequestBuilder, Response};
use serde::{de::DeserializeOwned, Serialize};

// -----------------------------------------------------------------------------
// 3. Supabase Client
// -----------------------------------------------------------------------------

/// HTTP client for the Supabase REST and auth gateways.
#[derive(Clone, Debug)]
pub struct SupabaseClient {
    base_url: String,
    anon_key: String,
    access_token: Option<String>,
}

impl SupabaseClient {
    /// Create an anonymous client.
    pub fn new(base_url: impl Into<String>, anon_key: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            anon_key: anon_key.into(),
            access_token: None,
        }
    }

    /// Act on behalf of a signed-in user.
    pub fn with_access_token(mut self, token: impl Into<String>) -> Self {
        self.access_token = Some(token.into());
        self
    }

    /// The same client without the user's token, for public reads.
    pub fn anonymous(&self) -> Self {
        Self {
            access_token: None,
            ..self.clone()
        }
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Bearer token: the user's access token, or the anon key for public reads.
    fn bearer(&self) -> &str {
        self.access_token.as_deref().unwrap_or(&self.anon_key)
    }

    /// Build a request with the gateway headers.
    fn build_request(&self, method: &str, endpoint: &str) -> RequestBuilder {
        let url = format!("{}{}", self.base_url, endpoint);
        let req = match method {
            "POST" => Request::post(&url),
            _ => Request::get(&url),
        };

        req.header("apikey", &self.anon_key)
            .header("Authorization", &format!("Bearer {}", self.bearer()))
            .header("Content-Type", "application/json")
    }

    /// Decode a JSON body or classify the failure.
    async fn handle_response<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
        match response.status() {
            200..=299 => response
                .json::<T>()
                .await
                .map_err(|e| ApiError::Deserialize(e.to_string())),
            status => Err(Self::error_from(status, response).await),
        }
    }

    async fn error_from(status: u16, response: Response) -> ApiError {
        let body = response.text().await.unwrap_or_default();
        ApiError::from_response(status, &body)
    }

    /// GET request.
    pub async fn get<T: DeserializeOwned>(&self, endpoint: &str) -> Result<T, ApiError> {
        let response = self
            .build_request("GET", endpoint)
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        Self::handle_response(response).await
    }

    /// POST request with JSON body.
    pub async fn post<T: DeserializeOwned, B: Serialize>(
        &self,
        endpoint: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let response = self
            .build_request("POST", endpoint)
            .json(body)
            .map_err(|e| ApiError::Deserialize(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        Self::handle_response(response).await
    }

    /// POST request whose success carries no body (`Prefer: return=minimal`).
    pub async fn post_minimal<B: Serialize>(&self, endpoint: &str, body: &B) -> Result<(), ApiError> {
        let response = self
            .build_request("POST", endpoint)
            .header("Prefer", "return=minimal")
            .json(body)
            .map_err(|e| ApiError::Deserialize(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        match response.status() {
            200..=299 => Ok(()),
            status => Err(Self::error_from(status, response).await),
        }
    }
}
