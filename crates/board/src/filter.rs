//! Filter engine for the job directory
//!
//! ## Table of Contents
//! - **JobTypeFilter**: "all" or one exact job type
//! - **InternshipFilter**: Tri-state internship flag
//! - **FilterCriteria**: The user's current narrowing predicates
//! - **filter_jobs**: Pure recompute of the visible postings
//! - **unique_locations**: Distinct locations for the filter UI

use std::collections::HashSet;

use crate::models::{JobPosting, JobType};

/// Message shown in place of the list when nothing survives filtering.
pub const EMPTY_STATE_MESSAGE: &str = "No jobs found matching your criteria";

// -----------------------------------------------------------------------------
// 1. Criteria
// -----------------------------------------------------------------------------

/// Job type selector. `All` is the selector's `"all"` entry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum JobTypeFilter {
    #[default]
    All,
    Only(JobType),
}

impl JobTypeFilter {
    /// Selector value, `"all"` or the job type's wire value.
    pub fn value(&self) -> &str {
        match self {
            JobTypeFilter::All => "all",
            JobTypeFilter::Only(job_type) => job_type.as_str(),
        }
    }

    /// Parse a selector value.
    pub fn from_value(value: &str) -> Self {
        if value == "all" {
            JobTypeFilter::All
        } else {
            JobTypeFilter::Only(JobType::from(value))
        }
    }

    fn matches(&self, job: &JobPosting) -> bool {
        match self {
            JobTypeFilter::All => true,
            JobTypeFilter::Only(job_type) => &job.job_type == job_type,
        }
    }
}

/// Options for the job type selector as `(value, label)` pairs.
pub fn job_type_options() -> Vec<(String, String)> {
    std::iter::once(("all".to_string(), "All Types".to_string()))
        .chain(
            JobType::KNOWN
                .iter()
                .map(|t| (t.as_str().to_string(), t.label())),
        )
        .collect()
}

/// Tri-state internship flag: no opinion, internships only, or jobs only.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum InternshipFilter {
    #[default]
    Unset,
    InternshipsOnly,
    JobsOnly,
}

impl InternshipFilter {
    /// Badge row in display order.
    pub const ALL: [InternshipFilter; 3] = [
        InternshipFilter::Unset,
        InternshipFilter::JobsOnly,
        InternshipFilter::InternshipsOnly,
    ];

    pub fn from_flag(flag: Option<bool>) -> Self {
        match flag {
            None => InternshipFilter::Unset,
            Some(true) => InternshipFilter::InternshipsOnly,
            Some(false) => InternshipFilter::JobsOnly,
        }
    }

    pub fn as_flag(self) -> Option<bool> {
        match self {
            InternshipFilter::Unset => None,
            InternshipFilter::InternshipsOnly => Some(true),
            InternshipFilter::JobsOnly => Some(false),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            InternshipFilter::Unset => "All",
            InternshipFilter::JobsOnly => "Jobs",
            InternshipFilter::InternshipsOnly => "Internships",
        }
    }
}

/// Current filter state of the jobs screen.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterCriteria {
    pub search: String,
    pub job_type: JobTypeFilter,
    pub location: String,
    pub internship: InternshipFilter,
}

impl FilterCriteria {
    /// Whether every predicate is inactive.
    pub fn is_empty(&self) -> bool {
        self.search.is_empty()
            && self.job_type == JobTypeFilter::All
            && self.location.is_empty()
            && self.internship == InternshipFilter::Unset
    }

    /// Whether `job` passes every active predicate.
    pub fn matches(&self, job: &JobPosting) -> bool {
        self.matches_search(job)
            && self.job_type.matches(job)
            && self.matches_location(job)
            && self.matches_internship(job)
    }

    fn matches_search(&self, job: &JobPosting) -> bool {
        if self.search.is_empty() {
            return true;
        }
        let query = self.search.to_lowercase();
        job.title.to_lowercase().contains(&query)
            || job.company.to_lowercase().contains(&query)
            || job
                .required_skills
                .iter()
                .any(|skill| skill.to_lowercase().contains(&query))
    }

    fn matches_location(&self, job: &JobPosting) -> bool {
        self.location.is_empty()
            || job
                .location
                .to_lowercase()
                .contains(&self.location.to_lowercase())
    }

    fn matches_internship(&self, job: &JobPosting) -> bool {
        match self.internship.as_flag() {
            None => true,
            Some(flag) => job.is_internship == flag,
        }
    }
}

// -----------------------------------------------------------------------------
// 2. Recompute
// -----------------------------------------------------------------------------

/// Postings that pass `criteria`, in their original order.
pub fn filter_jobs(jobs: &[JobPosting], criteria: &FilterCriteria) -> Vec<JobPosting> {
    jobs.iter()
        .filter(|job| criteria.matches(job))
        .cloned()
        .collect()
}

/// Each distinct location once, in order of first appearance.
pub fn unique_locations(jobs: &[JobPosting]) -> Vec<String> {
    let mut seen = HashSet::new();
    jobs.iter()
        .filter(|job| seen.insert(job.location.as_str()))
        .map(|job| job.location.clone())
        .collect()
}

/// `"1 job found"` / `"N jobs found"`.
pub fn result_count_label(count: usize) -> String {
    format!("{} job{} found", count, if count == 1 { "" } else { "s" })
}
