//! # SkillBridge Board
//!
//! Job directory core shared by the SkillBridge frontend: loads active
//! postings from the hosted backend, filters them on the client and submits
//! applications.
//!
//! ## Table of Contents
//! - **models**: Postings, applications, sessions
//! - **filter**: Filter criteria and the pure recompute
//! - **loader**: Directory loading with contained failures
//! - **apply**: Application submission and its outcomes
//! - **board**: Headless jobs screen state
//! - **service**: Data service trait and REST paths
//! - **session**: Access token expiry and refresh
//! - **notify**: Toast-style notification seam
//! - **error**: Error types
//!
//! ## Example
//!
//! ```
//! use skillbridge_board::{filter_jobs, FilterCriteria, InternshipFilter};
//!
//! let criteria = FilterCriteria {
//!     search: "rust".into(),
//!     internship: InternshipFilter::JobsOnly,
//!     ..Default::default()
//! };
//! assert!(filter_jobs(&[], &criteria).is_empty());
//! ```

pub mod apply;
pub mod board;
pub mod error;
pub mod filter;
pub mod loader;
pub mod models;
pub mod notify;
pub mod service;
pub mod session;

#[cfg(test)]
pub(crate) mod fake;

pub use apply::{job_detail_route, submit_application, ApplyOutcome, LOGIN_ROUTE};
pub use board::{JobBoard, LoadTicket};
pub use error::{ApiError, PostgrestError, Result};
pub use filter::{
    filter_jobs, job_type_options, result_count_label, unique_locations, FilterCriteria,
    InternshipFilter, JobTypeFilter, EMPTY_STATE_MESSAGE,
};
pub use loader::{load_applied_job_ids, load_directory, load_postings, AppliedJobs};
pub use models::{
    format_salary, ApplicationRecord, AppliedJobRow, JobPosting, JobType, Session, SessionUser,
    EXPIRY_MARGIN_SECS,
};
pub use notify::{NotificationKind, Notifier};
pub use service::{rest, JobDataService};
pub use session::{ensure_fresh, SessionRefresher};
