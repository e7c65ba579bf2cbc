// =============================================================================
// SkillBridge Web - Site Navigation
// =============================================================================
// Top bar shared by every page. Shows the signed-in email and a sign-out
// button, or a sign-in link.
// =============================================================================

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::components::Logo;
use crate::state::{AppState, AuthState};

/// Site navigation bar.
///
/// # Arguments
/// * `active` - The currently active page ("home", "jobs", ...)
#[component]
pub fn SiteNav(#[prop(optional, into)] active: String) -> impl IntoView {
    let app_state = expect_context::<AppState>();
    let auth = app_state.auth;

    let link_class = move |page: &str| {
        if page == active { "nav-link active" } else { "nav-link" }
    };
    let home_class = link_class("home");
    let jobs_class = link_class("jobs");

    view! {
        <nav class="site-nav">
            <a href="/" class="nav-logo">
                <Logo />
            </a>

            <div class="nav-links">
                <a href="/" class=home_class>"Home"</a>
                <a href="/jobs" class=jobs_class>"Browse Jobs"</a>
            </div>

            <div class="nav-right">
                {move || match auth.get() {
                    AuthState::Authenticated(session) => {
                        let app_state = app_state.clone();
                        let email = session.user.email.clone().unwrap_or_default();
                        view! {
                            <div class="nav-user-section">
                                <span class="nav-email">{email}</span>
                                <button
                                    type="button"
                                    class="btn btn-ghost"
                                    on:click=move |_| {
                                        let client = app_state.client_for(Some(&session));
                                        app_state.logout();
                                        spawn_local(async move {
                                            if let Err(e) = api::sign_out(&client).await {
                                                log::warn!("Sign-out request failed: {}", e);
                                            }
                                        });
                                    }
                                >
                                    "Sign Out"
                                </button>
                            </div>
                        }
                        .into_any()
                    }
                    _ => view! {
                        <div class="nav-user-section">
                            <a href="/login" class="btn btn-ghost">"Sign In"</a>
                            <a href="/register" class="btn btn-primary">"Get Started"</a>
                        </div>
                    }
                    .into_any(),
                }}
            </div>
        </nav>
    }
}
