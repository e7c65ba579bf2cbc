// =============================================================================
// SkillBridge Web - Main App Component
// =============================================================================
// Table of Contents:
// 1. Imports
// 2. App Component
// 3. Router Configuration
// =============================================================================

// -----------------------------------------------------------------------------
// 1. Imports
// -----------------------------------------------------------------------------

use leptos::prelude::*;
use leptos_meta::provide_meta_context;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

use crate::components::ToastHost;
use crate::pages::{
    HomePage, JobDetailPage, JobsPage, NotFoundPage, RegisterPage, SignInPage,
};
use crate::state::AppState;

// -----------------------------------------------------------------------------
// 2. App Component
// -----------------------------------------------------------------------------

/// Root application component with routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let app_state = AppState::new();

    // Restore session from localStorage on startup
    app_state.restore_session();

    provide_context(app_state);

    // -------------------------------------------------------------------------
    // 3. Router Configuration
    // -------------------------------------------------------------------------

    view! {
        <Router>
            <main class="app-main">
                <Routes fallback=|| view! { <NotFoundPage /> }>
                    <Route path=path!("/") view=HomePage />
                    <Route path=path!("/jobs") view=JobsPage />
                    <Route path=path!("/jobs/:id") view=JobDetailPage />
                    <Route path=path!("/login") view=SignInPage />
                    <Route path=path!("/register") view=RegisterPage />
                </Routes>
            </main>
            <ToastHost />
        </Router>
    }
}
