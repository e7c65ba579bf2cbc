// =============================================================================
// SkillBridge Web - Home Page
// =============================================================================

use leptos::prelude::*;
use leptos_meta::Title;

use crate::components::{Cta, Footer, Hero, SiteNav};

/// Public landing page.
#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <Title text="SkillBridge | Bridge Your Skills Gap" />
        <div class="page page-home">
            <SiteNav active="home" />
            <Hero />
            <Cta />
            <Footer />
        </div>
    }
}
