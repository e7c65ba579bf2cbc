//! Data service seam and PostgREST request paths
//!
//! ## Table of Contents
//! - **JobDataService**: Queries and mutations the board needs
//! - **rest**: Paths for the hosted REST gateway

use async_trait::async_trait;
use uuid::Uuid;

use crate::error::Result;
use crate::models::{ApplicationRecord, JobPosting};

/// External data service holding postings and applications.
///
/// Browser fetch futures are not `Send`, hence `?Send`.
#[async_trait(?Send)]
pub trait JobDataService {
    /// Active postings, newest first.
    async fn list_active_postings(&self) -> Result<Vec<JobPosting>>;

    /// A single active posting.
    async fn fetch_job(&self, job_id: &str) -> Result<JobPosting>;

    /// Ids of every posting `user_id` has applied to.
    async fn list_applied_job_ids(&self, user_id: Uuid) -> Result<Vec<String>>;

    /// Insert an application; a duplicate fails with `ApiError::UniqueViolation`.
    async fn insert_application(&self, record: &ApplicationRecord) -> Result<()>;
}

/// Request paths relative to the project URL.
pub mod rest {
    use uuid::Uuid;

    pub const JOBS_TABLE: &str = "jobs";
    pub const APPLICATIONS_TABLE: &str = "job_applications";

    /// `GET` active postings ordered newest first.
    pub fn active_postings() -> String {
        format!(
            "/rest/v1/{}?select=*&is_active=eq.true&order=created_at.desc",
            JOBS_TABLE
        )
    }

    /// `GET` one active posting by id.
    pub fn posting(job_id: &str) -> String {
        format!(
            "/rest/v1/{}?select=*&id=eq.{}&is_active=eq.true&limit=1",
            JOBS_TABLE,
            urlencoding::encode(job_id)
        )
    }

    /// `GET` the job ids a user applied to.
    pub fn applied_job_ids(user_id: Uuid) -> String {
        format!(
            "/rest/v1/{}?select=job_id&user_id=eq.{}",
            APPLICATIONS_TABLE, user_id
        )
    }

    /// `POST` target for new applications.
    pub fn applications() -> String {
        format!("/rest/v1/{}", APPLICATIONS_TABLE)
    }

    /// Password grant on the auth gateway.
    pub fn password_grant() -> &'static str {
        "/auth/v1/token?grant_type=password"
    }

    /// Exchange a refresh token for a new session.
    pub fn refresh_grant() -> &'static str {
        "/auth/v1/token?grant_type=refresh_token"
    }

    pub fn signup() -> &'static str {
        "/auth/v1/signup"
    }

    pub fn logout() -> &'static str {
        "/auth/v1/logout"
    }
}
