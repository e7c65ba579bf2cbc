//! Data model for postings, applications and sessions
//!
//! ## Table of Contents
//! - **JobType**: Employment type of a posting
//! - **JobPosting**: A single job or internship listing
//! - **ApplicationRecord**: Evidence that a user applied to a posting
//! - **Session**: The signed-in user as seen by the board

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// -----------------------------------------------------------------------------
// 1. Job Type
// -----------------------------------------------------------------------------

/// Employment type of a posting.
///
/// Stored as a plain string by the backend. Values outside the known set are
/// kept verbatim in `Other` and only ever compare equal to the same string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum JobType {
    FullTime,
    PartTime,
    Contract,
    Remote,
    Hybrid,
    Other(String),
}

impl JobType {
    /// All known types, in selector order.
    pub const KNOWN: [JobType; 5] = [
        JobType::FullTime,
        JobType::PartTime,
        JobType::Contract,
        JobType::Remote,
        JobType::Hybrid,
    ];

    /// Wire value, e.g. `full-time`.
    pub fn as_str(&self) -> &str {
        match self {
            JobType::FullTime => "full-time",
            JobType::PartTime => "part-time",
            JobType::Contract => "contract",
            JobType::Remote => "remote",
            JobType::Hybrid => "hybrid",
            JobType::Other(value) => value,
        }
    }

    /// Display label, e.g. `Full-time`.
    pub fn label(&self) -> String {
        match self {
            JobType::FullTime => "Full-time".to_string(),
            JobType::PartTime => "Part-time".to_string(),
            JobType::Contract => "Contract".to_string(),
            JobType::Remote => "Remote".to_string(),
            JobType::Hybrid => "Hybrid".to_string(),
            JobType::Other(value) => value.clone(),
        }
    }
}

impl From<String> for JobType {
    fn from(value: String) -> Self {
        match value.as_str() {
            "full-time" => JobType::FullTime,
            "part-time" => JobType::PartTime,
            "contract" => JobType::Contract,
            "remote" => JobType::Remote,
            "hybrid" => JobType::Hybrid,
            _ => JobType::Other(value),
        }
    }
}

impl From<&str> for JobType {
    fn from(value: &str) -> Self {
        JobType::from(value.to_string())
    }
}

impl From<JobType> for String {
    fn from(value: JobType) -> Self {
        value.as_str().to_string()
    }
}

impl std::fmt::Display for JobType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// -----------------------------------------------------------------------------
// 2. Job Posting
// -----------------------------------------------------------------------------

/// A job or internship listing as stored in the `jobs` table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobPosting {
    pub id: String,
    pub title: String,
    pub company: String,
    pub location: String,
    pub job_type: JobType,
    #[serde(default)]
    pub required_skills: Vec<String>,
    #[serde(default)]
    pub salary_min: Option<f64>,
    #[serde(default)]
    pub salary_max: Option<f64>,
    #[serde(default)]
    pub is_internship: bool,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default = "default_active")]
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

fn default_active() -> bool {
    true
}

impl JobPosting {
    /// Salary range label for cards, or `None` when no bound is published.
    pub fn salary_label(&self) -> Option<String> {
        format_salary(self.salary_min, self.salary_max)
    }
}

/// Format salary bounds as `$80k - $120k`, `From $80k` or `Up to $120k`.
pub fn format_salary(min: Option<f64>, max: Option<f64>) -> Option<String> {
    match (min, max) {
        (Some(min), Some(max)) => Some(format!("{} - {}", short_amount(min), short_amount(max))),
        (Some(min), None) => Some(format!("From {}", short_amount(min))),
        (None, Some(max)) => Some(format!("Up to {}", short_amount(max))),
        (None, None) => None,
    }
}

fn short_amount(amount: f64) -> String {
    if amount >= 1000.0 {
        let thousands = amount / 1000.0;
        if thousands.fract() == 0.0 {
            format!("${}k", thousands as u64)
        } else {
            format!("${:.1}k", thousands)
        }
    } else {
        format!("${}", amount.round() as u64)
    }
}

// -----------------------------------------------------------------------------
// 3. Applications
// -----------------------------------------------------------------------------

/// Row inserted into `job_applications`; unique per `(job_id, user_id)`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApplicationRecord {
    pub job_id: String,
    pub user_id: Uuid,
}

/// Projection returned by `select=job_id`.
#[derive(Debug, Clone, Deserialize)]
pub struct AppliedJobRow {
    pub job_id: String,
}

// -----------------------------------------------------------------------------
// 4. Session
// -----------------------------------------------------------------------------

/// Identity of the signed-in user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionUser {
    pub id: Uuid,
    #[serde(default)]
    pub email: Option<String>,
}

/// Access tokens this close to expiry are refreshed before use.
pub const EXPIRY_MARGIN_SECS: i64 = 60;

/// An authenticated session issued by the identity service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub access_token: String,
    #[serde(default)]
    pub refresh_token: Option<String>,
    /// Absent for sessions stored before expiry tracking; treated as expired.
    #[serde(default)]
    pub expires_at: Option<DateTime<Utc>>,
    pub user: SessionUser,
}

impl Session {
    pub fn user_id(&self) -> Uuid {
        self.user.id
    }

    /// Whether the access token is expired or about to expire at `now`.
    pub fn needs_refresh(&self, now: DateTime<Utc>) -> bool {
        match self.expires_at {
            Some(expires_at) => expires_at - chrono::Duration::seconds(EXPIRY_MARGIN_SECS) <= now,
            None => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_posting_from_row() {
        let row = r#"{
            "id": "7c1e",
            "title": "Backend Engineer",
            "company": "Acme",
            "location": "Berlin",
            "job_type": "full-time",
            "required_skills": ["Go", "SQL"],
            "salary_min": 80000,
            "salary_max": null,
            "is_internship": false,
            "is_active": true,
            "created_at": "2024-05-01T12:00:00+00:00"
        }"#;

        let job: JobPosting = serde_json::from_str(row).unwrap();
        assert_eq!(job.job_type, JobType::FullTime);
        assert_eq!(job.required_skills, vec!["Go", "SQL"]);
        assert_eq!(job.salary_min, Some(80000.0));
        assert_eq!(job.salary_max, None);
        assert!(job.description.is_none());
    }

    #[test]
    fn test_unknown_job_type_is_preserved() {
        let job_type: JobType = serde_json::from_str(r#""freelance""#).unwrap();
        assert_eq!(job_type, JobType::Other("freelance".to_string()));
        assert_eq!(serde_json::to_string(&job_type).unwrap(), r#""freelance""#);
        assert_ne!(job_type, JobType::Contract);
    }

    #[test]
    fn test_format_salary() {
        assert_eq!(
            format_salary(Some(80_000.0), Some(120_000.0)).as_deref(),
            Some("$80k - $120k")
        );
        assert_eq!(format_salary(Some(45_500.0), None).as_deref(), Some("From $45.5k"));
        assert_eq!(format_salary(None, Some(900.0)).as_deref(), Some("Up to $900"));
        assert_eq!(format_salary(None, None), None);
    }

    #[test]
    fn test_session_expiry_margin() {
        let now = Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap();
        let mut session = crate::fake::session();

        session.expires_at = Some(now + chrono::Duration::hours(1));
        assert!(!session.needs_refresh(now));

        session.expires_at = Some(now + chrono::Duration::seconds(30));
        assert!(session.needs_refresh(now));

        session.expires_at = None;
        assert!(session.needs_refresh(now));
    }

    #[test]
    fn test_session_without_expiry_fields_still_decodes() {
        let stored = r#"{
            "access_token": "t",
            "user": {"id": "3f2504e0-4f89-11d3-9a0c-0305e82c3301"}
        }"#;
        let session: Session = serde_json::from_str(stored).unwrap();
        assert!(session.refresh_token.is_none());
        assert!(session.expires_at.is_none());
    }

    #[test]
    fn test_application_record_wire_shape() {
        let record = ApplicationRecord {
            job_id: "j1".to_string(),
            user_id: Uuid::nil(),
        };
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["job_id"], "j1");
        assert_eq!(json["user_id"], "00000000-0000-0000-0000-000000000000");
    }
}
