//! Apply flow
//!
//! Submits an application for the signed-in user and reports the outcome
//! through a [`Notifier`]. The store's `(job_id, user_id)` uniqueness
//! constraint is what makes a repeated submission safe; this module only
//! turns its conflict signal into the "already applied" notification.

use crate::loader::AppliedJobs;
use crate::models::{ApplicationRecord, Session};
use crate::error::ApiError;
use crate::notify::{
    NotificationKind, Notifier, ALREADY_APPLIED, APPLICATION_SUBMITTED, APPLY_FAILED,
    SESSION_EXPIRED,
};
use crate::service::JobDataService;

/// Route of the sign-in view.
pub const LOGIN_ROUTE: &str = "/login";

/// Route of the detail view for `job_id`.
pub fn job_detail_route(job_id: &str) -> String {
    format!("/jobs/{}", urlencoding::encode(job_id))
}

/// Result of an apply attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApplyOutcome {
    /// No session; the caller must navigate to [`LOGIN_ROUTE`].
    RedirectToLogin,
    /// The store rejected the access token; the caller must drop the
    /// session and navigate to [`LOGIN_ROUTE`].
    SessionExpired,
    /// Application stored.
    Submitted { job_id: String },
    /// The store already holds an application for this pair.
    AlreadyApplied { job_id: String },
    /// Any other failure; nothing was stored.
    Failed { job_id: String, reason: String },
}

impl ApplyOutcome {
    /// Navigation the caller must perform, if any.
    pub fn redirect(&self) -> Option<&'static str> {
        match self {
            ApplyOutcome::RedirectToLogin | ApplyOutcome::SessionExpired => Some(LOGIN_ROUTE),
            _ => None,
        }
    }

    /// Fold the outcome into the applied set. Only a fresh submission adds an id.
    pub fn record(&self, applied: &mut AppliedJobs) {
        if let ApplyOutcome::Submitted { job_id } = self {
            applied.insert(job_id.clone());
        }
    }
}

/// Insert an application for `job_id` on behalf of `session`.
///
/// Without a session nothing is written and no notification is sent.
pub async fn submit_application<S, N>(
    service: &S,
    session: Option<&Session>,
    job_id: &str,
    notifier: &N,
) -> ApplyOutcome
where
    S: JobDataService + ?Sized,
    N: Notifier + ?Sized,
{
    let Some(session) = session else {
        return ApplyOutcome::RedirectToLogin;
    };

    let record = ApplicationRecord {
        job_id: job_id.to_string(),
        user_id: session.user_id(),
    };

    match service.insert_application(&record).await {
        Ok(()) => {
            log::info!("Applied to job {}", job_id);
            notifier.notify(NotificationKind::Success, APPLICATION_SUBMITTED);
            ApplyOutcome::Submitted {
                job_id: record.job_id,
            }
        }
        Err(e) if e.is_unique_violation() => {
            log::warn!("Duplicate application for job {}", job_id);
            notifier.notify(NotificationKind::Info, ALREADY_APPLIED);
            ApplyOutcome::AlreadyApplied {
                job_id: record.job_id,
            }
        }
        Err(ApiError::Unauthorized) => {
            log::warn!("Access token rejected while applying to job {}", job_id);
            notifier.notify(NotificationKind::Info, SESSION_EXPIRED);
            ApplyOutcome::SessionExpired
        }
        Err(e) => {
            log::error!("Failed to apply to job {}: {}", job_id, e);
            notifier.notify(NotificationKind::Error, APPLY_FAILED);
            ApplyOutcome::Failed {
                job_id: record.job_id,
                reason: e.to_string(),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fake::{session, FakeService, RecordingNotifier};

    #[tokio::test]
    async fn test_signed_out_redirects_without_writing() {
        let service = FakeService::default();
        let notifier = RecordingNotifier::default();

        let outcome = submit_application(&service, None, "job-1", &notifier).await;

        assert_eq!(outcome, ApplyOutcome::RedirectToLogin);
        assert_eq!(outcome.redirect(), Some("/login"));
        assert_eq!(service.insert_calls.get(), 0);
        assert!(notifier.messages().is_empty());
    }

    #[tokio::test]
    async fn test_fresh_application_is_recorded() {
        let service = FakeService::default();
        let notifier = RecordingNotifier::default();
        let user = session();
        let mut applied = AppliedJobs::from(["job-0".to_string()]);

        let outcome = submit_application(&service, Some(&user), "job-1", &notifier).await;
        outcome.record(&mut applied);

        assert_eq!(
            outcome,
            ApplyOutcome::Submitted {
                job_id: "job-1".into()
            }
        );
        assert_eq!(
            applied,
            AppliedJobs::from(["job-0".to_string(), "job-1".to_string()])
        );
        assert_eq!(
            notifier.messages(),
            vec![(NotificationKind::Success, "Application submitted!".to_string())]
        );
    }

    #[tokio::test]
    async fn test_duplicate_leaves_applied_set_alone() {
        let service = FakeService::default();
        let notifier = RecordingNotifier::default();
        let user = session();
        service.seed_application("job-1", user.user_id());
        let mut applied = AppliedJobs::from(["job-1".to_string()]);
        let before = applied.clone();

        let outcome = submit_application(&service, Some(&user), "job-1", &notifier).await;
        outcome.record(&mut applied);

        assert!(matches!(outcome, ApplyOutcome::AlreadyApplied { .. }));
        assert_eq!(applied, before);
        assert_eq!(
            notifier.messages(),
            vec![(
                NotificationKind::Info,
                "You have already applied to this job".to_string()
            )]
        );
    }

    #[tokio::test]
    async fn test_duplicate_tolerates_missing_local_id() {
        let service = FakeService::default();
        let notifier = RecordingNotifier::default();
        let user = session();
        service.seed_application("job-9", user.user_id());
        let mut applied = AppliedJobs::new();

        submit_application(&service, Some(&user), "job-9", &notifier)
            .await
            .record(&mut applied);

        assert!(applied.is_empty());
    }

    #[tokio::test]
    async fn test_generic_failure() {
        let service = FakeService {
            fail_insert: Some(ApiError::Network("connection reset".into())),
            ..Default::default()
        };
        let notifier = RecordingNotifier::default();
        let mut applied = AppliedJobs::new();

        let outcome = submit_application(&service, Some(&session()), "job-1", &notifier).await;
        outcome.record(&mut applied);

        assert!(matches!(outcome, ApplyOutcome::Failed { .. }));
        assert!(applied.is_empty());
        assert_eq!(
            notifier.messages(),
            vec![(NotificationKind::Error, "Failed to apply".to_string())]
        );
    }

    #[tokio::test]
    async fn test_rejected_token_sends_user_to_login() {
        let service = FakeService {
            fail_insert: Some(ApiError::Unauthorized),
            ..Default::default()
        };
        let notifier = RecordingNotifier::default();
        let mut applied = AppliedJobs::new();

        let outcome = submit_application(&service, Some(&session()), "job-1", &notifier).await;
        outcome.record(&mut applied);

        assert_eq!(outcome, ApplyOutcome::SessionExpired);
        assert_eq!(outcome.redirect(), Some("/login"));
        assert!(applied.is_empty());
        assert_eq!(
            notifier.messages(),
            vec![(NotificationKind::Info, SESSION_EXPIRED.to_string())]
        );
    }

    #[tokio::test]
    async fn test_double_submit_relies_on_store_constraint() {
        let service = FakeService::default();
        let notifier = RecordingNotifier::default();
        let user = session();
        let mut applied = AppliedJobs::new();

        let (first, second) = futures::join!(
            submit_application(&service, Some(&user), "job-1", &notifier),
            submit_application(&service, Some(&user), "job-1", &notifier)
        );
        first.record(&mut applied);
        second.record(&mut applied);

        assert_eq!(service.insert_calls.get(), 2);
        assert_eq!(service.applications.borrow().len(), 1);
        assert_eq!(applied.len(), 1);
        let kinds: Vec<NotificationKind> =
            notifier.messages().into_iter().map(|(k, _)| k).collect();
        assert_eq!(kinds, vec![NotificationKind::Success, NotificationKind::Info]);
    }

    #[test]
    fn test_detail_route() {
        assert_eq!(job_detail_route("abc-123"), "/jobs/abc-123");
        assert_eq!(job_detail_route("a/b"), "/jobs/a%2Fb");
    }
}
