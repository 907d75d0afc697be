use chrono::DateTime;
use chrono::Duration;
use chrono::Utc;
use rand::distributions::Alphanumeric;
use rand::Rng;
use serde::Serialize;

/// Hours a session token stays valid after issuance.
pub const SESSION_TTL_HOURS: i64 = 24;

const TOKEN_SUFFIX_LENGTH: usize = 8;

/// An issued session.
///
/// The token is an opaque string with best-effort uniqueness
/// (timestamp plus random suffix). There is no revocation list; the
/// token is valid until `expires_at` on the issuer's side alone.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Session {
    pub token: String,
    pub expires_at: DateTime<Utc>,
}

/// Mint a session for a username.
///
/// Each call yields a distinct token; nothing is stored issuer-side.
///
/// # Arguments
/// * `username` - Authenticated username
///
/// # Returns
/// Session with opaque token and expiry 24 hours from now
pub fn create_session(username: &str) -> Session {
    let now = Utc::now();
    let suffix: String = rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(TOKEN_SUFFIX_LENGTH)
        .map(char::from)
        .collect();

    Session {
        token: format!(
            "{username}-{}-{}",
            now.timestamp_millis(),
            suffix.to_lowercase()
        ),
        expires_at: now + Duration::hours(SESSION_TTL_HOURS),
    }
}
