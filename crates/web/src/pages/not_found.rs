// =============================================================================
// SkillBridge Web - Unknown Route
// =============================================================================

use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::hooks::use_location;

use crate::components::{Footer, SiteNav};

/// What to tell a visitor who followed a dead link. Stale links into the
/// directory usually point at a posting that was closed.
fn dead_link_hint(path: &str) -> &'static str {
    if path.starts_with("/jobs/") {
        "This posting may have been filled or taken down by the employer."
    } else {
        "There is nothing at this address. The open roles are all in the directory."
    }
}

/// Fallback route.
#[component]
pub fn NotFoundPage() -> impl IntoView {
    let location = use_location();
    let hint = move || location.pathname.with(|path| dead_link_hint(path));

    view! {
        <Title text="Not Found | SkillBridge" />
        <div class="page page-not-found">
            <SiteNav />
            <section class="not-found-content">
                <h1 class="page-title">"We couldn't find that page"</h1>
                <p class="page-subtitle">{hint}</p>
                <div class="not-found-actions">
                    <a href="/jobs" class="btn btn-primary">"Browse open roles"</a>
                    <a href="/" class="btn btn-outline">"Back to home"</a>
                </div>
            </section>
            <Footer />
        </div>
    }
}
