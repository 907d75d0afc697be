use async_trait::async_trait;

use crate::domain::login::errors::ConsumeError;
use crate::domain::login::errors::SecureWordError;
use crate::domain::login::models::IssuedSecureWord;
use crate::domain::login::models::LockoutStatus;
use crate::domain::login::models::SecureWordEntry;
use crate::domain::login::models::UserConfig;

/// Port for the time-boxed, single-use secure word store.
///
/// One live slot per username. Words are retired exactly once, by a
/// successful `consume` or an explicit `remove`.
#[async_trait]
pub trait SecureWordStore: Send + Sync + 'static {
    /// Issue a fresh secure word for a username, overwriting any prior
    /// slot.
    ///
    /// # Errors
    /// * `RateLimited` - Previous issuance is less than the rate limit
    ///   window old
    async fn issue(&self, username: &str) -> Result<IssuedSecureWord, SecureWordError>;

    /// Read the current slot without side effects.
    async fn peek(&self, username: &str) -> Option<SecureWordEntry>;

    /// Validate and retire the stored word. This is the single path by
    /// which a word is spent; the check and the deletion are atomic.
    ///
    /// # Errors
    /// * `NotFound` - No slot exists for the username
    /// * `Expired` - Word is older than the expiry window (slot kept)
    /// * `Mismatch` - Supplied word differs from the stored one (slot kept)
    async fn consume(&self, username: &str, supplied_word: &str) -> Result<(), ConsumeError>;

    /// Delete the slot unconditionally. No-op when absent.
    async fn remove(&self, username: &str);
}

/// Port for MFA failure bookkeeping and lockout.
#[async_trait]
pub trait MfaAttemptTracker: Send + Sync + 'static {
    /// Report the lockout state. An elapsed lockout is cleared as a side
    /// effect and reported as `Clear`, so the caller evaluates the
    /// attempt fresh.
    async fn check_lockout(&self, username: &str) -> LockoutStatus;

    /// Record a failed attempt and return the new consecutive failure
    /// count. Reaching the threshold starts the lockout window.
    async fn record_failure(&self, username: &str) -> u32;

    /// Clear all failure state for a username.
    async fn record_success(&self, username: &str);
}

/// Port for the static credential directory.
#[async_trait]
pub trait UserDirectory: Send + Sync + 'static {
    /// Look up a user's directory entry.
    async fn find(&self, username: &str) -> Option<UserConfig>;
}
