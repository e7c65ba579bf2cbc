// =============================================================================
// SkillBridge Web - Jobs Page
// =============================================================================
// Table of Contents:
// 1. Page State
// 2. Directory Loading
// 3. View
// =============================================================================

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_meta::Title;
use skillbridge_board::{
    job_type_options, load_directory, result_count_label, ApplyOutcome, FilterCriteria,
    InternshipFilter, JobBoard, JobTypeFilter, EMPTY_STATE_MESSAGE,
};

use crate::components::{Footer, JobCard, LoadingSpinner, SelectField, SiteNav, TextInput};
use crate::services::use_apply;
use crate::state::{AppState, AuthState};

const LOCATIONS_LIST_ID: &str = "job-locations";

/// Browse, filter and apply to active postings.
#[component]
pub fn JobsPage() -> impl IntoView {
    let app_state = expect_context::<AppState>();
    let auth = app_state.auth;

    // -------------------------------------------------------------------------
    // 1. Page State
    // -------------------------------------------------------------------------

    let board = RwSignal::new(JobBoard::new());

    let search = RwSignal::new(String::new());
    let job_type = RwSignal::new(JobTypeFilter::All.value().to_string());
    let location = RwSignal::new(String::new());
    let internship = RwSignal::new(InternshipFilter::Unset);

    let criteria = Memo::new(move |_| FilterCriteria {
        search: search.get(),
        job_type: JobTypeFilter::from_value(&job_type.get()),
        location: location.get(),
        internship: internship.get(),
    });
    let filtered = Memo::new(move |_| criteria.with(|c| board.with(|b| b.filtered_by(c))));
    let locations = Memo::new(move |_| board.with(JobBoard::locations));
    let loading = Memo::new(move |_| board.with(JobBoard::is_loading));

    let on_apply = use_apply(Callback::new(move |outcome: ApplyOutcome| {
        board.update(|b| b.record(&outcome));
    }));

    // -------------------------------------------------------------------------
    // 2. Directory Loading
    // -------------------------------------------------------------------------

    let user_id = Memo::new(move |_| auth.with(AuthState::user_id));

    Effect::new(move |_| {
        let user = user_id.get();
        let app_state = app_state.clone();

        let ticket = board.write().begin_load();
        log::debug!("Loading job directory ({:?}, user {:?})", ticket, user);

        spawn_local(async move {
            let session = app_state.fresh_session().await;
            let client = app_state.client_for(session.as_ref());
            load_directory(
                &client,
                session.as_ref(),
                |jobs| board.maybe_update(|b| b.commit_postings(ticket, jobs)),
                |applied| board.maybe_update(|b| b.commit_applied(ticket, applied)),
            )
            .await;
        });
    });

    // -------------------------------------------------------------------------
    // 3. View
    // -------------------------------------------------------------------------

    view! {
        <Title text="Browse Jobs | SkillBridge" />
        <div class="page page-jobs">
            <SiteNav active="jobs" />

            <section class="jobs-header">
                <h1 class="page-title">"Browse Jobs"</h1>
                <p class="page-subtitle">"Find your perfect job or internship opportunity"</p>
            </section>

            <section class="jobs-filters">
                <TextInput
                    value=search
                    placeholder="Search jobs, companies, or skills..."
                    class="filter-search"
                />
                <SelectField value=job_type options=job_type_options() class="filter-type" />
                <TextInput
                    value=location
                    placeholder="Location"
                    list=LOCATIONS_LIST_ID
                    class="filter-location"
                />
                <datalist id=LOCATIONS_LIST_ID>
                    <For
                        each=move || locations.get()
                        key=|loc| loc.clone()
                        children=|loc| view! { <option value=loc></option> }
                    />
                </datalist>

                <div class="filter-badges">
                    {InternshipFilter::ALL
                        .into_iter()
                        .map(|option| view! {
                            <button
                                type="button"
                                class=move || {
                                    if internship.get() == option { "badge badge-filter active" } else { "badge badge-filter" }
                                }
                                on:click=move |_| internship.set(option)
                            >
                                {option.label()}
                            </button>
                        })
                        .collect_view()}
                </div>
            </section>

            <section class="jobs-results">
                {move || {
                    if loading.get() {
                        view! { <LoadingSpinner message="Loading jobs..." /> }.into_any()
                    } else if filtered.with(Vec::is_empty) {
                        view! {
                            <div class="empty-state">
                                <p>{EMPTY_STATE_MESSAGE}</p>
                            </div>
                        }
                        .into_any()
                    } else {
                        view! {
                            <div class="jobs-list">
                                <p class="result-count">
                                    {move || result_count_label(filtered.with(Vec::len))}
                                </p>
                                <div class="job-grid">
                                    <For
                                        each=move || filtered.get()
                                        key=|job| job.id.clone()
                                        children=move |job| {
                                            let id = job.id.clone();
                                            let is_applied = Signal::derive(move || {
                                                board.with(|b| b.has_applied(&id))
                                            });
                                            view! {
                                                <JobCard job=job applied=is_applied on_apply=on_apply />
                                            }
                                        }
                                    />
                                </div>
                            </div>
                        }
                        .into_any()
                    }
                }}
            </section>

            <Footer />
        </div>
    }
}
