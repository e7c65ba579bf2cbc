// =============================================================================
// SkillBridge Web - Global Application State
// =============================================================================
// Table of Contents:
// 1. Auth State
// 2. App State
// 3. Auth Actions
// =============================================================================

use chrono::Utc;
use gloo_storage::Storage;
use leptos::prelude::*;
use leptos::task::spawn_local;
use skillbridge_board::{ensure_fresh, Session};
use uuid::Uuid;

use crate::api::SupabaseClient;
use crate::config::AppConfig;
use crate::services::Toaster;

const SESSION_KEY: &str = "sb_session";

// -----------------------------------------------------------------------------
// 1. Auth State
// -----------------------------------------------------------------------------

/// Authentication state.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum AuthState {
    #[default]
    Unknown,
    Authenticated(Session),
    Unauthenticated,
}

impl AuthState {
    /// Check if user is authenticated.
    pub fn is_authenticated(&self) -> bool {
        matches!(self, AuthState::Authenticated(_))
    }

    /// Get the session, if any.
    pub fn session(&self) -> Option<&Session> {
        match self {
            AuthState::Authenticated(session) => Some(session),
            _ => None,
        }
    }

    /// Stable identity used to detect session changes.
    pub fn user_id(&self) -> Option<Uuid> {
        self.session().map(Session::user_id)
    }
}

// -----------------------------------------------------------------------------
// 2. App State
// -----------------------------------------------------------------------------

/// Global application state provided via Leptos context.
#[derive(Clone)]
pub struct AppState {
    /// Current authentication state.
    pub auth: RwSignal<AuthState>,

    /// Backend settings.
    pub config: AppConfig,

    /// Toast queue.
    pub toaster: Toaster,
}

impl AppState {
    /// Create a new app state instance.
    pub fn new() -> Self {
        let config = AppConfig::from_build_env();
        log::debug!("Using Supabase at {}", config.supabase_url);

        Self {
            auth: RwSignal::new(AuthState::Unknown),
            config,
            toaster: Toaster::new(),
        }
    }

    /// Snapshot of the current session without subscribing to it.
    pub fn session(&self) -> Option<Session> {
        self.auth.with_untracked(|auth| auth.session().cloned())
    }

    /// Client acting for `session`, anonymous when `None`.
    pub fn client_for(&self, session: Option<&Session>) -> SupabaseClient {
        let client = SupabaseClient::new(&self.config.supabase_url, &self.config.supabase_anon_key);
        match session {
            Some(session) => client.with_access_token(&session.access_token),
            None => client,
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

// -----------------------------------------------------------------------------
// 3. Auth Actions
// -----------------------------------------------------------------------------

impl AppState {
    /// Store a fresh session.
    pub fn login(&self, session: Session) {
        let _ = gloo_storage::LocalStorage::set(SESSION_KEY, &session);
        self.auth.set(AuthState::Authenticated(session));
    }

    /// Try to restore session from localStorage.
    ///
    /// An expiring session stays `Unknown` until the refresh settles, so
    /// pages never query with a token the gateway will reject.
    pub fn restore_session(&self) {
        let Ok(stored) = gloo_storage::LocalStorage::get::<Session>(SESSION_KEY) else {
            self.auth.set(AuthState::Unauthenticated);
            return;
        };

        if !stored.needs_refresh(Utc::now()) {
            self.auth.set(AuthState::Authenticated(stored));
            return;
        }

        let state = self.clone();
        spawn_local(async move {
            let client = state.client_for(None);
            let restored = ensure_fresh(&client, stored, Utc::now()).await;
            state.settle(restored);
        });
    }

    /// The current session, refreshed first when its token is about to
    /// expire. Ends the session when the refresh fails.
    pub async fn fresh_session(&self) -> Option<Session> {
        let session = self.session()?;
        if !session.needs_refresh(Utc::now()) {
            return Some(session);
        }

        let client = self.client_for(None);
        let refreshed = ensure_fresh(&client, session, Utc::now()).await;
        self.settle(refreshed.clone());
        refreshed
    }

    fn settle(&self, session: Option<Session>) {
        match session {
            Some(session) => self.login(session),
            None => self.logout(),
        }
    }

    /// Log out the current user.
    pub fn logout(&self) {
        self.auth.set(AuthState::Unauthenticated);
        gloo_storage::LocalStorage::delete(SESSION_KEY);
    }
}
