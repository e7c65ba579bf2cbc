// =============================================================================
// SkillBridge Web - Utility Functions
// =============================================================================
// Table of Contents:
// 1. Format Utilities
// 2. Validation Utilities
// =============================================================================

use chrono::{DateTime, Utc};

// -----------------------------------------------------------------------------
// 1. Format Utilities
// -----------------------------------------------------------------------------

/// Relative posting age, e.g. `Posted 3 days ago`.
pub fn posted_ago(created_at: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let age = now.signed_duration_since(created_at);

    if age.num_days() >= 30 {
        let months = age.num_days() / 30;
        format!("Posted {} month{} ago", months, plural(months))
    } else if age.num_days() >= 1 {
        let days = age.num_days();
        format!("Posted {} day{} ago", days, plural(days))
    } else if age.num_hours() >= 1 {
        let hours = age.num_hours();
        format!("Posted {} hour{} ago", hours, plural(hours))
    } else {
        "Posted just now".to_string()
    }
}

fn plural(n: i64) -> &'static str {
    if n == 1 {
        ""
    } else {
        "s"
    }
}

/// Truncate a string to a maximum number of characters with ellipsis.
pub fn truncate(s: &str, max_chars: usize) -> String {
    if s.chars().count() <= max_chars {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_chars.saturating_sub(3)).collect();
        format!("{}...", kept.trim_end())
    }
}

// -----------------------------------------------------------------------------
// 2. Validation Utilities
// -----------------------------------------------------------------------------

/// Validate an email address (basic check).
pub fn is_valid_email(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };

    !local.is_empty()
        && !domain.contains('@')
        && domain.contains('.')
        && !domain.starts_with('.')
        && !domain.ends_with('.')
}

/// Minimum password length accepted by the auth gateway.
pub const MIN_PASSWORD_LEN: usize = 6;

pub fn is_valid_password(password: &str) -> bool {
    password.chars().count() >= MIN_PASSWORD_LEN
}
