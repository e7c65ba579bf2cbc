// =============================================================================
// SkillBridge Web - Apply Action
// =============================================================================
// Wires `submit_application` to the page's state, the toast queue and the
// router.
// =============================================================================

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;
use skillbridge_board::{submit_application, ApplyOutcome};

use crate::state::AppState;

/// Build the apply callback for a page. `on_outcome` folds each outcome into
/// the page's applied set.
///
/// Signed-out users are sent to the login page; the redirect goes through a
/// signal so the callback itself stays `Send`. A token the store rejects ends
/// the session before redirecting.
pub fn use_apply(on_outcome: Callback<ApplyOutcome>) -> Callback<String> {
    let app_state = expect_context::<AppState>();
    let navigate = use_navigate();
    let redirect = RwSignal::new(Option::<&'static str>::None);

    Effect::new(move |_| {
        if let Some(path) = redirect.get() {
            navigate(path, Default::default());
        }
    });

    Callback::new(move |job_id: String| {
        let app_state = app_state.clone();

        spawn_local(async move {
            let session = app_state.fresh_session().await;
            let client = app_state.client_for(session.as_ref());
            let toaster = app_state.toaster;

            let outcome = submit_application(&client, session.as_ref(), &job_id, &toaster).await;
            if outcome == ApplyOutcome::SessionExpired {
                app_state.logout();
            }
            if let Some(path) = outcome.redirect() {
                redirect.set(Some(path));
                return;
            }
            on_outcome.run(outcome);
        });
    })
}
