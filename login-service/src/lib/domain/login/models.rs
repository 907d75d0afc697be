use auth::Session;

/// How long an issued secure word can be consumed, in milliseconds.
pub const SECURE_WORD_EXPIRY_MS: i64 = 60_000;

/// Minimum gap between secure word issuances per username, in milliseconds.
pub const RATE_LIMIT_MS: i64 = 10_000;

/// How long an MFA lockout lasts, in milliseconds.
pub const LOCKOUT_MS: i64 = 20_000;

/// Consecutive MFA failures that trigger a lockout.
pub const LOCKOUT_THRESHOLD: u32 = 3;

/// Static credential directory entry.
///
/// Loaded once at startup, immutable for the process lifetime. The
/// verifier is precomputed from the raw demo password at load; the login
/// pipeline compares verifier outputs only, never the raw secret.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserConfig {
    pub username: String,
    pub password_hash: String,
    pub requires_mfa: bool,
}

/// Live secure word slot for one username (at most one per username).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SecureWordEntry {
    pub word: String,
    /// Epoch milliseconds of generation; the word is consumable while
    /// `now - issued_at <= SECURE_WORD_EXPIRY_MS`.
    pub issued_at: i64,
    /// Cumulative issuance count for this username. Monotonic, never reset.
    pub request_count: u64,
    /// Epoch milliseconds of the most recent issuance; drives rate limiting.
    pub last_request: i64,
}

/// Result of a successful secure word issuance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IssuedSecureWord {
    pub word: String,
    pub issued_at: i64,
}

/// Per-username MFA failure bookkeeping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MfaAttemptEntry {
    /// Consecutive failures since the last success or lockout reset.
    pub count: u32,
    /// Set when `count` reaches the lockout threshold.
    pub lockout_started_at: Option<i64>,
}

/// Lockout state reported by the attempt tracker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LockoutStatus {
    Clear,
    Locked { seconds_remaining: i64 },
}

/// Login pipeline input.
#[derive(Debug, Clone)]
pub struct LoginCommand {
    pub username: String,
    pub hashed_password: String,
    pub secure_word: Option<String>,
}

/// Login pipeline outcome.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoginOutcome {
    /// Password accepted; a valid secure word was consumed. The client
    /// must still pass MFA verification before a session is issued.
    MfaPending,
    /// Fully authenticated (user has no MFA requirement).
    Complete(Session),
}

/// MFA verification pipeline input.
#[derive(Debug, Clone)]
pub struct MfaCommand {
    pub username: String,
    pub code: String,
}
