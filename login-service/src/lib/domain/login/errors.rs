use thiserror::Error;

/// Error for secure word issuance
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SecureWordError {
    #[error("Too many requests. Please wait.")]
    RateLimited,
}

/// Error for secure word consumption.
///
/// `Expired` and `Mismatch` leave the stored entry in place — only a
/// successful consume retires a word.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConsumeError {
    #[error("No secure word found for this user")]
    NotFound,

    #[error("Secure Word Expired")]
    Expired,

    #[error("Secure word does not match")]
    Mismatch,
}

/// Top-level error for the login pipeline
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum LoginError {
    #[error("User does not exist")]
    UnknownUser(String),

    #[error("Incorrect password")]
    IncorrectPassword,

    #[error("A secure word is required for this account")]
    SecureWordRequired,

    #[error("Secure word rejected: {0}")]
    SecureWord(#[from] ConsumeError),
}

/// Top-level error for the MFA verification pipeline
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum MfaError {
    #[error("Too many failed attempts. Account locked. Try again in {seconds_remaining} seconds.")]
    LockedOut { seconds_remaining: i64 },

    #[error("Invalid MFA code")]
    InvalidCode { attempts: u32 },
}
