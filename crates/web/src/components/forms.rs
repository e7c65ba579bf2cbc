// =============================================================================
// SkillBridge Web - Form Components
// =============================================================================
// Table of Contents:
// 1. TextInput
// 2. SelectField
// =============================================================================

use leptos::prelude::*;

// -----------------------------------------------------------------------------
// 1. TextInput
// -----------------------------------------------------------------------------

/// Text input bound to a signal. The label is visually optional.
#[component]
pub fn TextInput(
    #[prop(into)] value: RwSignal<String>,
    #[prop(optional, into)] label: Option<String>,
    #[prop(optional, into)] placeholder: String,
    #[prop(optional, into)] input_type: String,
    #[prop(optional, into)] list: Option<String>,
    #[prop(optional, into)] class: String,
    #[prop(optional)] required: bool,
) -> impl IntoView {
    let input_type = if input_type.is_empty() { "text".to_string() } else { input_type };

    view! {
        <div class=format!("form-field {}", class)>
            {label.map(|label| view! {
                <label class="form-label">
                    {label}
                    {required.then(|| view! { <span class="required">"*"</span> })}
                </label>
            })}
            <input
                type=input_type
                class="form-input"
                placeholder=placeholder
                list=list
                required=required
                prop:value=move || value.get()
                on:input=move |e| value.set(event_target_value(&e))
            />
        </div>
    }
}

// -----------------------------------------------------------------------------
// 2. SelectField
// -----------------------------------------------------------------------------

/// Dropdown over `(value, label)` pairs.
#[component]
pub fn SelectField(
    #[prop(into)] value: RwSignal<String>,
    options: Vec<(String, String)>,
    #[prop(optional, into)] class: String,
) -> impl IntoView {
    view! {
        <select
            class=format!("form-select {}", class)
            prop:value=move || value.get()
            on:change=move |e| value.set(event_target_value(&e))
        >
            {options
                .into_iter()
                .map(|(option_value, option_label)| view! {
                    <option value=option_value>{option_label}</option>
                })
                .collect_view()}
        </select>
    }
}
