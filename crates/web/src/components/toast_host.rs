// =============================================================================
// SkillBridge Web - Toast Host
// =============================================================================

use leptos::prelude::*;

use crate::state::AppState;

/// Renders the toast queue in a fixed corner stack.
#[component]
pub fn ToastHost() -> impl IntoView {
    let toaster = expect_context::<AppState>().toaster;
    let toasts = toaster.toasts();

    view! {
        <div class="toast-stack" aria-live="polite">
            <For
                each=move || toasts.get()
                key=|toast| toast.id
                children=move |toast| {
                    let id = toast.id;
                    view! {
                        <div class=format!("toast {}", toast.kind.class())>
                            <span class="toast-message">{toast.message}</span>
                            <button
                                type="button"
                                class="toast-dismiss"
                                on:click=move |_| toaster.dismiss(id)
                            >
                                "✕"
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}
