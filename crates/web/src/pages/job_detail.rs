// =============================================================================
// SkillBridge Web - Job Detail Page
// =============================================================================

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_meta::Title;
use leptos_router::hooks::use_params_map;
use skillbridge_board::{
    load_applied_job_ids, ApiError, AppliedJobs, ApplyOutcome, JobDataService, JobPosting,
};

use crate::components::{ErrorDisplay, Footer, LoadingSpinner, SiteNav};
use crate::services::use_apply;
use crate::state::{AppState, AuthState};
use crate::utils::posted_ago;

const NOT_FOUND_MESSAGE: &str = "Job not found";

/// Fetch result for the requested posting.
#[derive(Clone, Debug, PartialEq)]
enum DetailState {
    Loading,
    Loaded(JobPosting),
    Failed(String),
}

/// Full description of one posting, with the apply action.
#[component]
pub fn JobDetailPage() -> impl IntoView {
    let app_state = expect_context::<AppState>();
    let auth = app_state.auth;
    let params = use_params_map();

    let job_id = Memo::new(move |_| params.with(|p| p.get("id").unwrap_or_default()));
    let user_id = Memo::new(move |_| auth.with(AuthState::user_id));

    let state = RwSignal::new(DetailState::Loading);
    let applied = RwSignal::new(AppliedJobs::new());
    let on_apply = use_apply(Callback::new(move |outcome: ApplyOutcome| {
        applied.update(|set| outcome.record(set));
    }));

    Effect::new(move |_| {
        let id = job_id.get();
        user_id.track();
        let app_state = app_state.clone();

        state.set(DetailState::Loading);
        spawn_local(async move {
            let session = app_state.fresh_session().await;
            let client = app_state.client_for(session.as_ref());
            let job = async {
                match client.fetch_job(&id).await {
                    Ok(job) => DetailState::Loaded(job),
                    Err(ApiError::NotFound) => DetailState::Failed(NOT_FOUND_MESSAGE.to_string()),
                    Err(e) => {
                        log::error!("Error fetching job {}: {}", id, e);
                        DetailState::Failed("Failed to load job".to_string())
                    }
                }
            };
            let (job, ids) = futures::join!(job, load_applied_job_ids(&client, session.as_ref()));
            state.set(job);
            applied.set(ids);
        });
    });

    view! {
        <Title text="Job Details | SkillBridge" />
        <div class="page page-job-detail">
            <SiteNav active="jobs" />

            <a href="/jobs" class="back-link">"← Back to jobs"</a>

            {move || match state.get() {
                DetailState::Loading => view! { <LoadingSpinner message="Loading job..." /> }.into_any(),
                DetailState::Failed(message) => view! {
                    <div class="job-detail-missing">
                        <ErrorDisplay message=message />
                    </div>
                }
                .into_any(),
                DetailState::Loaded(job) => {
                    let id = job.id.clone();
                    let is_applied = Signal::derive(move || applied.with(|set| set.contains(&id)));
                    let apply_id = job.id.clone();
                    let posted = posted_ago(job.created_at, chrono::Utc::now());

                    view! {
                        <article class="job-detail">
                            <header class="job-detail-header">
                                <div>
                                    <h1 class="job-detail-title">{job.title.clone()}</h1>
                                    <p class="job-detail-company">{job.company.clone()}</p>
                                </div>
                                {job.is_internship.then(|| view! {
                                    <span class="badge badge-internship">"Internship"</span>
                                })}
                            </header>

                            <div class="job-detail-meta">
                                <span>{job.location.clone()}</span>
                                <span>{job.job_type.label()}</span>
                                {job.salary_label().map(|s| view! { <span class="job-card-salary">{s}</span> })}
                                <span class="job-card-posted">{posted}</span>
                            </div>

                            <section class="job-detail-section">
                                <h2>"Required Skills"</h2>
                                <div class="job-card-skills">
                                    {job.required_skills
                                        .iter()
                                        .cloned()
                                        .map(|skill| view! { <span class="skill-chip">{skill}</span> })
                                        .collect_view()}
                                </div>
                            </section>

                            <section class="job-detail-section">
                                <h2>"About the Role"</h2>
                                <p class="job-detail-description">
                                    {job.description.clone().unwrap_or_else(|| "No description provided.".to_string())}
                                </p>
                            </section>

                            <button
                                type="button"
                                class=move || if is_applied.get() { "btn btn-applied btn-lg" } else { "btn btn-primary btn-lg" }
                                disabled=move || is_applied.get()
                                on:click=move |_| on_apply.run(apply_id.clone())
                            >
                                {move || if is_applied.get() { "Applied" } else { "Apply Now" }}
                            </button>
                        </article>
                    }
                    .into_any()
                }
            }}

            <Footer />
        </div>
    }
}
