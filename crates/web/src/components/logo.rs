// =============================================================================
// SkillBridge Web - Logo
// =============================================================================

use leptos::prelude::*;

/// Colour scheme of the wordmark.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum LogoVariant {
    #[default]
    Default,
    /// For dark backgrounds.
    Light,
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum LogoSize {
    Sm,
    #[default]
    Md,
    Lg,
}

impl LogoSize {
    fn mark_class(self) -> &'static str {
        match self {
            LogoSize::Sm => "logo-mark logo-mark-sm",
            LogoSize::Md => "logo-mark logo-mark-md",
            LogoSize::Lg => "logo-mark logo-mark-lg",
        }
    }

    fn text_class(self) -> &'static str {
        match self {
            LogoSize::Sm => "logo-text-sm",
            LogoSize::Md => "logo-text-md",
            LogoSize::Lg => "logo-text-lg",
        }
    }
}

/// Briefcase mark with the SkillBridge wordmark.
#[component]
pub fn Logo(
    #[prop(optional)] variant: LogoVariant,
    #[prop(optional)] size: LogoSize,
    #[prop(default = true)] show_text: bool,
) -> impl IntoView {
    let text_class = format!(
        "logo-text {} {}",
        size.text_class(),
        if variant == LogoVariant::Light { "logo-text-light" } else { "logo-text-default" }
    );

    view! {
        <div class="logo">
            <div class=size.mark_class()>
                <span class="logo-briefcase" aria-hidden="true">"💼"</span>
                <span class="logo-trend" aria-hidden="true">"↗"</span>
            </div>
            {show_text.then(|| view! { <span class=text_class>"SkillBridge"</span> })}
        </div>
    }
}
