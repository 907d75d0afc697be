use std::sync::Arc;

use auth::derive_mfa_code;
use auth::Session;
use auth::FALLBACK_MFA_CODE;

use crate::domain::login::errors::LoginError;
use crate::domain::login::errors::MfaError;
use crate::domain::login::errors::SecureWordError;
use crate::domain::login::locks::UserLocks;
use crate::domain::login::models::IssuedSecureWord;
use crate::domain::login::models::LockoutStatus;
use crate::domain::login::models::LoginCommand;
use crate::domain::login::models::LoginOutcome;
use crate::domain::login::models::MfaCommand;
use crate::domain::login::ports::MfaAttemptTracker;
use crate::domain::login::ports::SecureWordStore;
use crate::domain::login::ports::UserDirectory;

/// Domain service for the multi-step login flow.
///
/// Orchestrates the credential directory, secure word store, and MFA
/// attempt tracker. Every operation runs under a per-username lock so a
/// single-use secure word cannot be spent twice by racing requests.
pub struct LoginService<D, S, T>
where
    D: UserDirectory,
    S: SecureWordStore,
    T: MfaAttemptTracker,
{
    users: Arc<D>,
    secure_words: Arc<S>,
    attempts: Arc<T>,
    locks: UserLocks,
}

impl<D, S, T> LoginService<D, S, T>
where
    D: UserDirectory,
    S: SecureWordStore,
    T: MfaAttemptTracker,
{
    /// Create a new login service with injected dependencies.
    ///
    /// # Arguments
    /// * `users` - Static credential directory
    /// * `secure_words` - Secure word store
    /// * `attempts` - MFA attempt tracker
    ///
    /// # Returns
    /// Configured login service instance
    pub fn new(users: Arc<D>, secure_words: Arc<S>, attempts: Arc<T>) -> Self {
        Self {
            users,
            secure_words,
            attempts,
            locks: UserLocks::new(),
        }
    }

    /// Issue a secure word for a username.
    ///
    /// # Errors
    /// * `RateLimited` - Issued again within the rate limit window
    pub async fn issue_secure_word(
        &self,
        username: &str,
    ) -> Result<IssuedSecureWord, SecureWordError> {
        let _guard = self.locks.acquire(username).await;

        let issued = self.secure_words.issue(username).await?;

        tracing::debug!(username, issued_at = issued.issued_at, "Secure word issued");

        Ok(issued)
    }

    /// Run the login pipeline: password check, then (for MFA accounts)
    /// secure word consumption.
    ///
    /// Validation short-circuits at the first failure. A consumed secure
    /// word is retired even though the overall flow still awaits MFA.
    ///
    /// # Errors
    /// * `UnknownUser` - Username not in the directory
    /// * `IncorrectPassword` - Supplied verifier differs from the stored one
    /// * `SecureWordRequired` - MFA account logged in without a secure word
    /// * `SecureWord` - Stored word missing, expired, or mismatched
    pub async fn login(&self, command: LoginCommand) -> Result<LoginOutcome, LoginError> {
        let _guard = self.locks.acquire(&command.username).await;

        let user = self
            .users
            .find(&command.username)
            .await
            .ok_or_else(|| LoginError::UnknownUser(command.username.clone()))?;

        // Verifier output comparison, never the raw secret.
        if command.hashed_password != user.password_hash {
            tracing::warn!(username = %command.username, "Password mismatch");
            return Err(LoginError::IncorrectPassword);
        }

        if !user.requires_mfa {
            let session = auth::create_session(&user.username);
            tracing::info!(username = %command.username, "Login successful without MFA");
            return Ok(LoginOutcome::Complete(session));
        }

        let supplied = command
            .secure_word
            .as_deref()
            .ok_or(LoginError::SecureWordRequired)?;

        self.secure_words
            .consume(&command.username, supplied)
            .await?;

        tracing::info!(username = %command.username, "Password and secure word accepted, MFA pending");

        Ok(LoginOutcome::MfaPending)
    }

    /// Run the MFA verification pipeline: lockout check, code validation
    /// against the stored secure word, attempt bookkeeping, session
    /// issuance.
    ///
    /// The failure count increment on a wrong code is committed even
    /// though the call reports failure.
    ///
    /// # Errors
    /// * `LockedOut` - Within the lockout cooldown window
    /// * `InvalidCode` - Code matched neither the derived code nor the
    ///   fallback; carries the consecutive failure count
    pub async fn verify_mfa(&self, command: MfaCommand) -> Result<Session, MfaError> {
        let _guard = self.locks.acquire(&command.username).await;

        if let LockoutStatus::Locked { seconds_remaining } =
            self.attempts.check_lockout(&command.username).await
        {
            tracing::warn!(
                username = %command.username,
                seconds_remaining,
                "MFA attempt rejected during lockout"
            );
            return Err(MfaError::LockedOut { seconds_remaining });
        }

        // Expected code tracks the word currently on file; with no word on
        // file only the fallback debug code is accepted.
        let expected = self
            .secure_words
            .peek(&command.username)
            .await
            .map(|entry| derive_mfa_code(&entry.word));

        let accepted = command.code == FALLBACK_MFA_CODE
            || expected.as_deref() == Some(command.code.as_str());

        if !accepted {
            let attempts = self.attempts.record_failure(&command.username).await;
            tracing::warn!(username = %command.username, attempts, "Invalid MFA code");
            return Err(MfaError::InvalidCode { attempts });
        }

        self.attempts.record_success(&command.username).await;
        // Retire the word so the same code cannot be replayed.
        self.secure_words.remove(&command.username).await;

        let session = auth::create_session(&command.username);
        tracing::info!(username = %command.username, "MFA verification successful");

        Ok(session)
    }
}
