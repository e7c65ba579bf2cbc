// =============================================================================
// SkillBridge Web - Job Card
// =============================================================================

use leptos::prelude::*;
use skillbridge_board::{job_detail_route, JobPosting};

use crate::utils::{posted_ago, truncate};

/// Skills shown before collapsing into a `+N` chip.
const MAX_SKILLS: usize = 4;
const DESCRIPTION_PREVIEW_CHARS: usize = 120;

/// Summary card for one posting with apply and detail actions.
#[component]
pub fn JobCard(
    job: JobPosting,
    #[prop(into)] applied: Signal<bool>,
    on_apply: Callback<String>,
) -> impl IntoView {
    let detail_href = job_detail_route(&job.id);
    let posted = posted_ago(job.created_at, chrono::Utc::now());
    let salary = job.salary_label();
    let hidden_skills = job.required_skills.len().saturating_sub(MAX_SKILLS);
    let preview = job
        .description
        .as_deref()
        .map(|d| truncate(d, DESCRIPTION_PREVIEW_CHARS));
    let job_id = job.id.clone();

    view! {
        <article class="job-card">
            <div class="job-card-header">
                <div>
                    <h3 class="job-card-title">{job.title.clone()}</h3>
                    <p class="job-card-company">{job.company.clone()}</p>
                </div>
                {job.is_internship.then(|| view! {
                    <span class="badge badge-internship">"Internship"</span>
                })}
            </div>

            <div class="job-card-meta">
                <span class="job-card-location">{job.location.clone()}</span>
                <span class="job-card-type">{job.job_type.label()}</span>
                {salary.map(|s| view! { <span class="job-card-salary">{s}</span> })}
            </div>

            {preview.map(|p| view! { <p class="job-card-description">{p}</p> })}

            <div class="job-card-skills">
                {job.required_skills
                    .iter()
                    .take(MAX_SKILLS)
                    .cloned()
                    .map(|skill| view! { <span class="skill-chip">{skill}</span> })
                    .collect_view()}
                {(hidden_skills > 0).then(|| view! {
                    <span class="skill-chip skill-more">{format!("+{}", hidden_skills)}</span>
                })}
            </div>

            <div class="job-card-footer">
                <span class="job-card-posted">{posted}</span>
                <div class="job-card-actions">
                    <a href=detail_href class="btn btn-secondary">"View Details"</a>
                    <button
                        type="button"
                        class=move || if applied.get() { "btn btn-applied" } else { "btn btn-primary" }
                        disabled=move || applied.get()
                        on:click=move |_| on_apply.run(job_id.clone())
                    >
                        {move || if applied.get() { "Applied" } else { "Apply Now" }}
                    </button>
                </div>
            </div>
        </article>
    }
}
