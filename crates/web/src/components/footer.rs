// =============================================================================
// SkillBridge Web - Footer Component
// =============================================================================

use leptos::prelude::*;

use crate::components::{Logo, LogoSize};

/// Global footer shown on all pages.
#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="footer">
            <div class="footer-main">
                <div class="footer-brand-col">
                    <Logo size=LogoSize::Sm />
                    <p class="footer-tagline">"Bridge your skills gap. Land your dream job."</p>
                </div>
                <div class="footer-links">
                    <a href="/jobs" class="footer-link">"Browse Jobs"</a>
                    <a href="/register" class="footer-link">"Create Account"</a>
                    <a href="/login" class="footer-link">"Sign In"</a>
                </div>
            </div>
            <p class="footer-copyright">"© 2025 SkillBridge. Built with Leptos + Rust."</p>
        </footer>
    }
}
