// =============================================================================
// SkillBridge Web - Jobs API
// =============================================================================
// `JobDataService` over the `jobs` and `job_applications` tables. Postings
// are public and always read with the anon key.
// =============================================================================

use async_trait::async_trait;
use skillbridge_board::{
    rest, ApiError, AppliedJobRow, ApplicationRecord, JobDataService, JobPosting,
};
use uuid::Uuid;

use super::SupabaseClient;

#[async_trait(?Send)]
impl JobDataService for SupabaseClient {
    async fn list_active_postings(&self) -> Result<Vec<JobPosting>, ApiError> {
        self.anonymous().get(&rest::active_postings()).await
    }

    async fn fetch_job(&self, job_id: &str) -> Result<JobPosting, ApiError> {
        let rows: Vec<JobPosting> = self.anonymous().get(&rest::posting(job_id)).await?;
        rows.into_iter().next().ok_or(ApiError::NotFound)
    }

    async fn list_applied_job_ids(&self, user_id: Uuid) -> Result<Vec<String>, ApiError> {
        let rows: Vec<AppliedJobRow> = self.get(&rest::applied_job_ids(user_id)).await?;
        Ok(rows.into_iter().map(|row| row.job_id).collect())
    }

    async fn insert_application(&self, record: &ApplicationRecord) -> Result<(), ApiError> {
        self.post_minimal(&rest::applications(), record).await
    }
}
