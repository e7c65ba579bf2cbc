// =============================================================================
// SkillBridge Web - Common UI Components
// =============================================================================
// Table of Contents:
// 1. Loading Spinner
// 2. Error Display
// =============================================================================

use leptos::prelude::*;

// -----------------------------------------------------------------------------
// 1. Loading Spinner
// -----------------------------------------------------------------------------

/// Centered loading spinner.
#[component]
pub fn LoadingSpinner(#[prop(optional, into)] message: Option<String>) -> impl IntoView {
    view! {
        <div class="loading-container" role="status">
            <div class="spinner"></div>
            {message.map(|m| view! { <p class="loading-message">{m}</p> })}
        </div>
    }
}

// -----------------------------------------------------------------------------
// 2. Error Display
// -----------------------------------------------------------------------------

/// Inline error banner.
#[component]
pub fn ErrorDisplay(
    #[prop(into)] message: String,
    #[prop(optional, into)] on_dismiss: Option<Callback<()>>,
) -> impl IntoView {
    view! {
        <div class="error-display" role="alert">
            <span class="error-message">{message}</span>
            {on_dismiss.map(|dismiss| view! {
                <button type="button" class="error-dismiss" on:click=move |_| dismiss.run(())>
                    "✕"
                </button>
            })}
        </div>
    }
}
