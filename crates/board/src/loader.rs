//! Job directory loader
//!
//! Fetches the active postings and, for a signed-in user, the ids of the
//! postings they already applied to. Failures never escape: a postings
//! failure is logged and yields an empty list, an applications failure
//! yields an empty set.

use std::collections::HashSet;

use crate::models::{JobPosting, Session};
use crate::service::JobDataService;

/// Ids of postings the current user has applied to.
pub type AppliedJobs = HashSet<String>;

/// Active postings, newest first, or an empty list on failure.
pub async fn load_postings<S>(service: &S) -> Vec<JobPosting>
where
    S: JobDataService + ?Sized,
{
    match service.list_active_postings().await {
        Ok(jobs) => {
            log::info!("Loaded {} job postings", jobs.len());
            jobs
        }
        Err(e) => {
            log::error!("Error fetching jobs: {}", e);
            Vec::new()
        }
    }
}

/// Applied job ids for `session`, or an empty set when signed out or on failure.
pub async fn load_applied_job_ids<S>(service: &S, session: Option<&Session>) -> AppliedJobs
where
    S: JobDataService + ?Sized,
{
    let Some(session) = session else {
        return AppliedJobs::new();
    };

    match service.list_applied_job_ids(session.user_id()).await {
        Ok(ids) => ids.into_iter().collect(),
        Err(e) => {
            // Indistinguishable from "no applications yet" for the screen.
            log::debug!("Could not fetch applications for {}: {}", session.user_id(), e);
            AppliedJobs::new()
        }
    }
}

/// Run both retrievals concurrently, handing each result over as soon as it
/// resolves.
///
/// `on_postings` fires when the postings fetch settles, independently of the
/// applications fetch, so a caller can end its loading state early.
pub async fn load_directory<S, P, A>(
    service: &S,
    session: Option<&Session>,
    on_postings: P,
    on_applied: A,
) where
    S: JobDataService + ?Sized,
    P: FnOnce(Vec<JobPosting>),
    A: FnOnce(AppliedJobs),
{
    let postings = async { on_postings(load_postings(service).await) };
    let applied = async { on_applied(load_applied_job_ids(service, session).await) };
    futures::join!(postings, applied);
}
