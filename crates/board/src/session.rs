//! Session freshness
//!
//! Access tokens issued by the identity service expire after about an hour.
//! A stored session is checked before use and, when close to expiry, traded
//! for a new one with its refresh token.

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::error::Result;
use crate::models::Session;

/// Identity service operation that renews a session.
#[async_trait(?Send)]
pub trait SessionRefresher {
    async fn refresh_session(&self, refresh_token: &str) -> Result<Session>;
}

/// A usable session derived from `session`, or `None` when it must be dropped.
///
/// Fresh sessions are returned unchanged. Expiring ones are refreshed; a
/// missing refresh token or a rejected refresh ends the session.
pub async fn ensure_fresh<R>(refresher: &R, session: Session, now: DateTime<Utc>) -> Option<Session>
where
    R: SessionRefresher + ?Sized,
{
    if !session.needs_refresh(now) {
        return Some(session);
    }

    let Some(refresh_token) = session.refresh_token.as_deref() else {
        log::info!("Session for {} expired without a refresh token", session.user_id());
        return None;
    };

    match refresher.refresh_session(refresh_token).await {
        Ok(fresh) => {
            log::debug!("Refreshed session for {}", fresh.user_id());
            Some(fresh)
        }
        Err(e) => {
            log::warn!("Session refresh failed for {}: {}", session.user_id(), e);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ApiError;
    use crate::fake::{refreshed_session, session, FakeRefresher};
    use chrono::TimeZone;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap()
    }

    fn expired() -> Session {
        Session {
            expires_at: Some(now() - chrono::Duration::minutes(5)),
            ..session()
        }
    }

    #[tokio::test]
    async fn test_fresh_session_is_kept_without_refresh() {
        let refresher = FakeRefresher::at(now());
        let stored = Session {
            expires_at: Some(now() + chrono::Duration::minutes(30)),
            ..session()
        };

        let restored = ensure_fresh(&refresher, stored.clone(), now()).await;

        assert_eq!(restored, Some(stored));
        assert!(refresher.calls.borrow().is_empty());
    }

    #[tokio::test]
    async fn test_expired_session_is_refreshed() {
        let refresher = FakeRefresher::at(now());

        let restored = ensure_fresh(&refresher, expired(), now()).await;

        assert_eq!(restored, Some(refreshed_session(now())));
        assert_eq!(*refresher.calls.borrow(), vec!["refresh".to_string()]);
        assert!(!restored.map_or(true, |s| s.needs_refresh(now())));
    }

    #[tokio::test]
    async fn test_rejected_refresh_ends_session() {
        let refresher = FakeRefresher {
            fail: Some(ApiError::Unauthorized),
            ..FakeRefresher::at(now())
        };

        assert_eq!(ensure_fresh(&refresher, expired(), now()).await, None);
    }

    #[tokio::test]
    async fn test_expired_without_refresh_token_ends_session() {
        let refresher = FakeRefresher::at(now());
        let stored = Session {
            refresh_token: None,
            ..expired()
        };

        assert_eq!(ensure_fresh(&refresher, stored, now()).await, None);
        assert!(refresher.calls.borrow().is_empty());
    }
}
