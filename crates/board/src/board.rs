//! Headless jobs screen
//!
//! [`JobBoard`] holds the state of the jobs page: the loaded postings, the
//! applied set, the filter criteria and the loading flag. Loads are tagged
//! with a [`LoadTicket`]; results from a load that a newer one superseded are
//! dropped instead of overwriting the newer state.

use std::cell::RefCell;

use crate::apply::{submit_application, ApplyOutcome};
use crate::filter::{filter_jobs, unique_locations, FilterCriteria};
use crate::loader::{load_directory, AppliedJobs};
use crate::models::{JobPosting, Session};
use crate::notify::Notifier;
use crate::service::JobDataService;

/// Identifies one load. Only the most recently issued ticket may commit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadTicket(u64);

#[derive(Debug, Clone)]
pub struct JobBoard {
    jobs: Vec<JobPosting>,
    applied: AppliedJobs,
    pub criteria: FilterCriteria,
    loading: bool,
    generation: u64,
}

impl Default for JobBoard {
    fn default() -> Self {
        Self::new()
    }
}

impl JobBoard {
    /// A board that has not loaded yet.
    pub fn new() -> Self {
        Self {
            jobs: Vec::new(),
            applied: AppliedJobs::new(),
            criteria: FilterCriteria::default(),
            loading: true,
            generation: 0,
        }
    }

    pub fn jobs(&self) -> &[JobPosting] {
        &self.jobs
    }

    pub fn applied(&self) -> &AppliedJobs {
        &self.applied
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn has_applied(&self, job_id: &str) -> bool {
        self.applied.contains(job_id)
    }

    // -------------------------------------------------------------------------
    // Loading
    // -------------------------------------------------------------------------

    /// Start a load, superseding any load still in flight.
    pub fn begin_load(&mut self) -> LoadTicket {
        self.generation += 1;
        self.loading = true;
        LoadTicket(self.generation)
    }

    pub fn is_current(&self, ticket: LoadTicket) -> bool {
        ticket.0 == self.generation
    }

    /// Store fetched postings and clear the loading flag. Returns `false`
    /// and changes nothing when `ticket` was superseded.
    pub fn commit_postings(&mut self, ticket: LoadTicket, jobs: Vec<JobPosting>) -> bool {
        if !self.is_current(ticket) {
            log::debug!("Dropping postings from superseded load {}", ticket.0);
            return false;
        }
        self.jobs = jobs;
        self.loading = false;
        true
    }

    /// Store the applied set. Returns `false` when `ticket` was superseded.
    pub fn commit_applied(&mut self, ticket: LoadTicket, applied: AppliedJobs) -> bool {
        if !self.is_current(ticket) {
            log::debug!("Dropping applied ids from superseded load {}", ticket.0);
            return false;
        }
        self.applied = applied;
        true
    }

    /// Load on mount or after the session changed.
    pub async fn load<S>(&mut self, service: &S, session: Option<&Session>)
    where
        S: JobDataService + ?Sized,
    {
        let ticket = self.begin_load();
        let board = RefCell::new(self);
        load_directory(
            service,
            session,
            |jobs| {
                board.borrow_mut().commit_postings(ticket, jobs);
            },
            |applied| {
                board.borrow_mut().commit_applied(ticket, applied);
            },
        )
        .await;
    }

    // -------------------------------------------------------------------------
    // Filtering
    // -------------------------------------------------------------------------

    /// Postings visible under the board's own criteria.
    pub fn filtered(&self) -> Vec<JobPosting> {
        self.filtered_by(&self.criteria)
    }

    /// Postings visible under `criteria`.
    pub fn filtered_by(&self, criteria: &FilterCriteria) -> Vec<JobPosting> {
        filter_jobs(&self.jobs, criteria)
    }

    /// Distinct locations for the location filter.
    pub fn locations(&self) -> Vec<String> {
        unique_locations(&self.jobs)
    }

    // -------------------------------------------------------------------------
    // Applying
    // -------------------------------------------------------------------------

    /// Fold an apply outcome into the applied set.
    pub fn record(&mut self, outcome: &ApplyOutcome) {
        outcome.record(&mut self.applied);
    }

    /// Apply to `job_id` and fold the outcome into the applied set.
    pub async fn apply<S, N>(
        &mut self,
        service: &S,
        session: Option<&Session>,
        job_id: &str,
        notifier: &N,
    ) -> ApplyOutcome
    where
        S: JobDataService + ?Sized,
        N: Notifier + ?Sized,
    {
        let outcome = submit_application(service, session, job_id, notifier).await;
        self.record(&outcome);
        outcome
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;
    use crate::error::ApiError;
    use crate::fake::{posting, session, FakeService, RecordingNotifier};
    use crate::filter::{InternshipFilter, EMPTY_STATE_MESSAGE};

    fn service() -> FakeService {
        FakeService::with_postings(vec![
            posting("a", "Backend Engineer", 3, false),
            posting("b", "Design Intern", 5, true),
            posting("c", "Site Reliability Engineer", 1, false),
        ])
    }

    fn ids(jobs: &[JobPosting]) -> Vec<&str> {
        jobs.iter().map(|j| j.id.as_str()).collect()
    }

    #[test]
    fn test_new_board_is_loading() {
        let board = JobBoard::new();
        assert!(board.is_loading());
        assert!(board.filtered().is_empty());
    }

    #[tokio::test]
    async fn test_load_then_filter() {
        let service = service();
        let mut board = JobBoard::new();
        board.load(&service, None).await;

        assert!(!board.is_loading());
        assert_eq!(board.jobs().len(), 3);

        board.criteria.search = "engineer".into();
        board.criteria.internship = InternshipFilter::JobsOnly;
        assert_eq!(ids(&board.filtered()), vec!["a", "c"]);
        assert_eq!(board.jobs().len(), 3);
        assert_eq!(board.locations(), vec!["Berlin"]);
    }

    #[tokio::test]
    async fn test_postings_failure_clears_loading() {
        let service = FakeService {
            fail_postings: Some(ApiError::Network("dns".into())),
            ..Default::default()
        };
        let mut board = JobBoard::new();
        board.load(&service, Some(&session())).await;

        assert!(!board.is_loading());
        assert!(board.filtered().is_empty());
        assert_eq!(EMPTY_STATE_MESSAGE, "No jobs found matching your criteria");
    }

    #[tokio::test]
    async fn test_loading_stays_set_until_postings_resolve() {
        let user = session();
        let service = service();
        service.seed_application("b", user.user_id());
        let release = service.gate_postings();

        let board = RefCell::new(JobBoard::new());
        let ticket = board.borrow_mut().begin_load();
        let load = load_directory(
            &service,
            Some(&user),
            |jobs| {
                board.borrow_mut().commit_postings(ticket, jobs);
            },
            |applied| {
                board.borrow_mut().commit_applied(ticket, applied);
            },
        );
        let check_then_release = async {
            assert!(board.borrow().is_loading());
            assert!(board.borrow().has_applied("b"));
            assert!(board.borrow().jobs().is_empty());
            let _ = release.send(());
        };
        futures::join!(load, check_then_release);

        let board = board.into_inner();
        assert!(!board.is_loading());
        assert_eq!(ids(board.jobs()), vec!["b", "a", "c"]);
    }

    #[tokio::test]
    async fn test_superseded_load_resolving_late_is_dropped() {
        let user = session();
        let signed_out =
            FakeService::with_postings(vec![posting("old", "Stale Listing", 2, false)]);
        let release_signed_out = signed_out.gate_postings();
        let signed_in = service();
        signed_in.seed_application("a", user.user_id());

        let board = RefCell::new(JobBoard::new());
        let late_commit_accepted = Cell::new(None);

        let first = board.borrow_mut().begin_load();
        let first_load = load_directory(
            &signed_out,
            None,
            |jobs| late_commit_accepted.set(Some(board.borrow_mut().commit_postings(first, jobs))),
            |applied| {
                board.borrow_mut().commit_applied(first, applied);
            },
        );
        let second_load = async {
            // The session changes while the first load is still in flight.
            let second = board.borrow_mut().begin_load();
            assert!(!board.borrow().is_current(first));
            load_directory(
                &signed_in,
                Some(&user),
                |jobs| {
                    assert!(board.borrow_mut().commit_postings(second, jobs));
                },
                |applied| {
                    assert!(board.borrow_mut().commit_applied(second, applied));
                },
            )
            .await;
            let _ = release_signed_out.send(());
        };
        futures::join!(first_load, second_load);

        assert_eq!(late_commit_accepted.get(), Some(false));
        let board = board.into_inner();
        assert!(!board.is_loading());
        assert_eq!(ids(board.jobs()), vec!["b", "a", "c"]);
        assert!(board.has_applied("a"));
    }

    #[test]
    fn test_stale_applied_set_is_dropped() {
        let mut board = JobBoard::new();
        let first = board.begin_load();
        let second = board.begin_load();

        assert!(board.commit_applied(second, AppliedJobs::from(["x".to_string()])));
        assert!(!board.commit_applied(first, AppliedJobs::new()));
        assert!(board.has_applied("x"));
    }

    #[tokio::test]
    async fn test_apply_round_trip_with_reload() {
        let service = service();
        let notifier = RecordingNotifier::default();
        let user = session();
        let mut board = JobBoard::new();
        board.load(&service, Some(&user)).await;
        assert!(board.applied().is_empty());

        let outcome = board.apply(&service, Some(&user), "b", &notifier).await;
        assert_eq!(outcome, ApplyOutcome::Submitted { job_id: "b".into() });
        assert!(board.has_applied("b"));

        let outcome = board.apply(&service, Some(&user), "b", &notifier).await;
        assert_eq!(outcome, ApplyOutcome::AlreadyApplied { job_id: "b".into() });
        assert_eq!(board.applied().len(), 1);

        // A fresh mount picks the application up from the store.
        let mut remounted = JobBoard::new();
        remounted.load(&service, Some(&user)).await;
        assert!(remounted.has_applied("b"));
    }

    #[tokio::test]
    async fn test_sign_out_reload_clears_applied() {
        let service = service();
        let user = session();
        service.seed_application("a", user.user_id());
        let mut board = JobBoard::new();

        board.load(&service, Some(&user)).await;
        assert!(board.has_applied("a"));

        board.load(&service, None).await;
        assert!(board.applied().is_empty());
    }

    #[tokio::test]
    async fn test_signed_out_apply_keeps_state() {
        let service = service();
        let notifier = RecordingNotifier::default();
        let mut board = JobBoard::new();
        board.load(&service, None).await;

        let outcome = board.apply(&service, None, "a", &notifier).await;
        assert_eq!(outcome.redirect(), Some("/login"));
        assert!(board.applied().is_empty());
        assert_eq!(service.insert_calls.get(), 0);
    }
}
