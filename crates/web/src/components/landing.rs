// =============================================================================
// SkillBridge Web - Landing Sections
// =============================================================================
// Table of Contents:
// 1. Hero
// 2. CTA
// =============================================================================

use leptos::prelude::*;

use crate::components::{Logo, LogoSize, LogoVariant};

// -----------------------------------------------------------------------------
// 1. Hero
// -----------------------------------------------------------------------------

const HERO_STATS: [(&str, &str); 4] = [
    ("10K+", "Jobs Analyzed"),
    ("50K+", "Resumes Processed"),
    ("95%", "Match Accuracy"),
    ("2.5x", "Faster Hiring"),
];

const HERO_STEPS: [(&str, &str, &str); 3] = [
    ("📄", "Upload Resume", "PDF or DOCX format"),
    ("🔍", "AI Analysis", "Skill extraction & matching"),
    ("✅", "Get Matched", "Personalized recommendations"),
];

/// Landing hero with the primary calls to action.
#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <section class="hero">
            <div class="hero-bg-pattern"></div>

            <div class="hero-main">
                <span class="hero-tag">"📈 AI-Powered Career Intelligence"</span>

                <h1 class="hero-headline">
                    "Bridge Your "
                    <span class="headline-accent">"Skills Gap"</span>
                    <br/>
                    "Land Your Dream Job"
                </h1>

                <p class="hero-description">
                    "Upload your resume, discover skill gaps, and get personalized learning paths. "
                    "Our AI matches you with jobs where you'll thrive."
                </p>

                <div class="hero-buttons">
                    <a href="/register" class="btn btn-accent btn-lg">
                        "Get Started Free"
                        <span class="btn-icon">"→"</span>
                    </a>
                    <a href="/jobs" class="btn btn-outline btn-lg">
                        "Browse Jobs"
                    </a>
                </div>

                <div class="hero-stats">
                    {HERO_STATS
                        .into_iter()
                        .map(|(value, label)| view! {
                            <div class="stat">
                                <span class="stat-value">{value}</span>
                                <span class="stat-label">{label}</span>
                            </div>
                        })
                        .collect_view()}
                </div>
            </div>

            <div class="hero-steps">
                {HERO_STEPS
                    .into_iter()
                    .map(|(icon, title, desc)| view! {
                        <div class="step-card">
                            <div class="step-icon">{icon}</div>
                            <div>
                                <h3>{title}</h3>
                                <p>{desc}</p>
                            </div>
                        </div>
                    })
                    .collect_view()}
            </div>
        </section>
    }
}

// -----------------------------------------------------------------------------
// 2. CTA
// -----------------------------------------------------------------------------

/// Closing call to action.
#[component]
pub fn Cta() -> impl IntoView {
    view! {
        <section class="cta-section">
            <div class="cta-card">
                <Logo variant=LogoVariant::Light size=LogoSize::Lg show_text=false />
                <span class="cta-tag">"✨ Start for Free"</span>

                <h2 class="cta-title">
                    "Ready to Transform"
                    <br/>
                    "Your Career Journey?"
                </h2>

                <p class="cta-description">
                    "Join thousands of professionals who've discovered their skill gaps "
                    "and landed their dream jobs with SkillBridge."
                </p>

                <div class="cta-buttons">
                    <a href="/register" class="btn btn-accent btn-lg">
                        "Create Free Account"
                        <span class="btn-icon">"→"</span>
                    </a>
                    <a href="/register?role=recruiter" class="btn btn-outline btn-lg">
                        "I'm a Recruiter"
                    </a>
                </div>

                <p class="cta-footnote">"No credit card required • Free forever for basic features"</p>
            </div>
        </section>
    }
}
