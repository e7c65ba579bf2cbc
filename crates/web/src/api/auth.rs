// =============================================================================
// SkillBridge Web - Auth API
// =============================================================================
// Table of Contents:
// 1. Request/Response Types
// 2. Auth API Functions
// =============================================================================

use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use skillbridge_board::{rest, ApiError, Session, SessionRefresher, SessionUser};

use super::SupabaseClient;

// -----------------------------------------------------------------------------
// 1. Request/Response Types
// -----------------------------------------------------------------------------

/// Email/password credentials for sign-in and sign-up.
#[derive(Debug, Serialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

/// Body of the refresh-token grant.
#[derive(Debug, Serialize)]
struct RefreshRequest<'a> {
    refresh_token: &'a str,
}

/// Token grant response, for both the password and refresh grants.
#[derive(Debug, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    #[serde(default)]
    pub refresh_token: Option<String>,
    #[serde(default)]
    pub expires_in: Option<i64>,
    /// Unix seconds.
    #[serde(default)]
    pub expires_at: Option<i64>,
    pub user: SessionUser,
}

impl TokenResponse {
    pub fn into_session(self, now: DateTime<Utc>) -> Session {
        Session {
            expires_at: expiry(self.expires_at, self.expires_in, now),
            access_token: self.access_token,
            refresh_token: self.refresh_token,
            user: self.user,
        }
    }
}

/// Sign-up response; carries a session only when the project auto-confirms.
#[derive(Debug, Deserialize)]
pub struct SignUpResponse {
    #[serde(default)]
    pub access_token: Option<String>,
    #[serde(default)]
    pub refresh_token: Option<String>,
    #[serde(default)]
    pub expires_in: Option<i64>,
    #[serde(default)]
    pub expires_at: Option<i64>,
    #[serde(default)]
    pub user: Option<SessionUser>,
}

impl SignUpResponse {
    pub fn into_session(self, now: DateTime<Utc>) -> Option<Session> {
        match (self.access_token, self.user) {
            (Some(access_token), Some(user)) => Some(Session {
                access_token,
                refresh_token: self.refresh_token,
                expires_at: expiry(self.expires_at, self.expires_in, now),
                user,
            }),
            _ => None,
        }
    }
}

/// Absolute expiry, preferring the server's timestamp over `now + expires_in`.
fn expiry(
    expires_at: Option<i64>,
    expires_in: Option<i64>,
    now: DateTime<Utc>,
) -> Option<DateTime<Utc>> {
    expires_at
        .and_then(|secs| DateTime::from_timestamp(secs, 0))
        .or_else(|| expires_in.map(|secs| now + Duration::seconds(secs)))
}

// -----------------------------------------------------------------------------
// 2. Auth API Functions
// -----------------------------------------------------------------------------

/// Sign in with email and password.
pub async fn sign_in(
    client: &SupabaseClient,
    email: &str,
    password: &str,
) -> Result<Session, ApiError> {
    let request = Credentials {
        email: email.to_string(),
        password: password.to_string(),
    };

    let response: TokenResponse = client.post(rest::password_grant(), &request).await?;
    Ok(response.into_session(Utc::now()))
}

/// Register a new account. `None` means the email must be confirmed first.
pub async fn sign_up(
    client: &SupabaseClient,
    email: &str,
    password: &str,
) -> Result<Option<Session>, ApiError> {
    let request = Credentials {
        email: email.to_string(),
        password: password.to_string(),
    };

    let response: SignUpResponse = client.post(rest::signup(), &request).await?;
    Ok(response.into_session(Utc::now()))
}

/// Trade a refresh token for a new session.
pub async fn refresh_session(
    client: &SupabaseClient,
    refresh_token: &str,
) -> Result<Session, ApiError> {
    let request = RefreshRequest { refresh_token };
    let response: TokenResponse = client.post(rest::refresh_grant(), &request).await?;
    Ok(response.into_session(Utc::now()))
}

/// Revoke the session server-side. The client must carry the access token.
pub async fn sign_out(client: &SupabaseClient) -> Result<(), ApiError> {
    client.post_minimal(rest::logout(), &()).await
}

#[async_trait(?Send)]
impl SessionRefresher for SupabaseClient {
    async fn refresh_session(&self, refresh_token: &str) -> Result<Session, ApiError> {
        refresh_session(self, refresh_token).await
    }
}
