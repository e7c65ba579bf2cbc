//! In-memory data service and notifier for tests.

use std::cell::{Cell, RefCell};
use std::collections::HashSet;

use async_trait::async_trait;
use chrono::{DateTime, TimeZone, Utc};
use futures::channel::oneshot;
use uuid::Uuid;

use crate::error::{ApiError, Result};
use crate::models::{ApplicationRecord, JobPosting, JobType, Session, SessionUser};
use crate::notify::{NotificationKind, Notifier};
use crate::service::JobDataService;
use crate::session::SessionRefresher;

/// Backing store with a `(job_id, user_id)` unique constraint.
#[derive(Default)]
pub struct FakeService {
    pub postings: Vec<JobPosting>,
    pub applications: RefCell<HashSet<(String, Uuid)>>,
    pub fail_postings: Option<ApiError>,
    pub fail_applications: Option<ApiError>,
    pub fail_insert: Option<ApiError>,
    pub posting_calls: Cell<usize>,
    pub application_calls: Cell<usize>,
    pub insert_calls: Cell<usize>,
    /// When set, the postings query waits until the sender fires or drops.
    pub postings_gate: RefCell<Option<oneshot::Receiver<()>>>,
}

impl FakeService {
    pub fn with_postings(postings: Vec<JobPosting>) -> Self {
        Self {
            postings,
            ..Default::default()
        }
    }

    /// Hold the postings query until the returned sender fires.
    pub fn gate_postings(&self) -> oneshot::Sender<()> {
        let (tx, rx) = oneshot::channel();
        *self.postings_gate.borrow_mut() = Some(rx);
        tx
    }

    pub fn seed_application(&self, job_id: &str, user_id: Uuid) {
        self.applications
            .borrow_mut()
            .insert((job_id.to_string(), user_id));
    }
}

#[async_trait(?Send)]
impl JobDataService for FakeService {
    async fn list_active_postings(&self) -> Result<Vec<JobPosting>> {
        self.posting_calls.set(self.posting_calls.get() + 1);
        let gate = self.postings_gate.borrow_mut().take();
        if let Some(gate) = gate {
            let _ = gate.await;
        }
        if let Some(err) = &self.fail_postings {
            return Err(err.clone());
        }
        let mut active: Vec<JobPosting> =
            self.postings.iter().filter(|j| j.is_active).cloned().collect();
        active.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(active)
    }

    async fn fetch_job(&self, job_id: &str) -> Result<JobPosting> {
        self.postings
            .iter()
            .find(|j| j.id == job_id && j.is_active)
            .cloned()
            .ok_or(ApiError::NotFound)
    }

    async fn list_applied_job_ids(&self, user_id: Uuid) -> Result<Vec<String>> {
        self.application_calls.set(self.application_calls.get() + 1);
        if let Some(err) = &self.fail_applications {
            return Err(err.clone());
        }
        Ok(self
            .applications
            .borrow()
            .iter()
            .filter(|(_, user)| *user == user_id)
            .map(|(job, _)| job.clone())
            .collect())
    }

    async fn insert_application(&self, record: &ApplicationRecord) -> Result<()> {
        self.insert_calls.set(self.insert_calls.get() + 1);
        if let Some(err) = &self.fail_insert {
            return Err(err.clone());
        }
        let inserted = self
            .applications
            .borrow_mut()
            .insert((record.job_id.clone(), record.user_id));
        if inserted {
            Ok(())
        } else {
            Err(ApiError::UniqueViolation(
                "duplicate key value violates unique constraint".to_string(),
            ))
        }
    }
}

/// Notifier that remembers everything it was told.
#[derive(Default)]
pub struct RecordingNotifier {
    pub seen: RefCell<Vec<(NotificationKind, String)>>,
}

impl RecordingNotifier {
    pub fn messages(&self) -> Vec<(NotificationKind, String)> {
        self.seen.borrow().clone()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, kind: NotificationKind, message: &str) {
        self.seen.borrow_mut().push((kind, message.to_string()));
    }
}

pub fn session() -> Session {
    Session {
        access_token: "token".to_string(),
        refresh_token: Some("refresh".to_string()),
        expires_at: Some(Utc.with_ymd_and_hms(2100, 1, 1, 0, 0, 0).unwrap()),
        user: SessionUser {
            id: Uuid::from_u128(0x42),
            email: Some("ada@example.com".to_string()),
        },
    }
}

pub fn posting(id: &str, title: &str, day: u32, is_internship: bool) -> JobPosting {
    JobPosting {
        id: id.to_string(),
        title: title.to_string(),
        company: "Acme".to_string(),
        location: "Berlin".to_string(),
        job_type: if is_internship {
            JobType::PartTime
        } else {
            JobType::FullTime
        },
        required_skills: vec!["Rust".to_string()],
        salary_min: None,
        salary_max: None,
        is_internship,
        description: None,
        is_active: true,
        created_at: Utc.with_ymd_and_hms(2024, 6, day, 8, 30, 0).unwrap(),
    }
}

/// Session issued by [`FakeRefresher`], valid for an hour from `now`.
pub fn refreshed_session(now: DateTime<Utc>) -> Session {
    Session {
        access_token: "fresh-token".to_string(),
        expires_at: Some(now + chrono::Duration::hours(1)),
        ..session()
    }
}

/// Identity service that trades refresh tokens for new sessions.
pub struct FakeRefresher {
    pub now: DateTime<Utc>,
    pub fail: Option<ApiError>,
    pub calls: RefCell<Vec<String>>,
}

impl FakeRefresher {
    pub fn at(now: DateTime<Utc>) -> Self {
        Self {
            now,
            fail: None,
            calls: RefCell::new(Vec::new()),
        }
    }
}

#[async_trait(?Send)]
impl SessionRefresher for FakeRefresher {
    async fn refresh_session(&self, refresh_token: &str) -> Result<Session> {
        self.calls.borrow_mut().push(refresh_token.to_string());
        match &self.fail {
            Some(err) => Err(err.clone()),
            None => Ok(refreshed_session(self.now)),
        }
    }
}
