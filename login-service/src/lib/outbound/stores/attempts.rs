use std::collections::HashMap;
use std::sync::Arc;
use std::sync::Mutex;

use async_trait::async_trait;

use crate::domain::login::clock::Clock;
use crate::domain::login::models::LockoutStatus;
use crate::domain::login::models::MfaAttemptEntry;
use crate::domain::login::models::LOCKOUT_MS;
use crate::domain::login::models::LOCKOUT_THRESHOLD;
use crate::domain::login::ports::MfaAttemptTracker;

/// In-memory MFA attempt tracker.
///
/// Per-username state machine: Clean (no entry) -> Failing(1..2) ->
/// LockedOut(since) -> Clean once the cooldown elapses. The cooldown
/// reset happens lazily inside `check_lockout`; there is no background
/// sweep.
pub struct InMemoryMfaAttemptTracker {
    entries: Mutex<HashMap<String, MfaAttemptEntry>>,
    clock: Arc<dyn Clock>,
}

impl InMemoryMfaAttemptTracker {
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self {
            entries: Mutex::new(HashMap::new()),
            clock,
        }
    }
}

#[async_trait]
impl MfaAttemptTracker for InMemoryMfaAttemptTracker {
    async fn check_lockout(&self, username: &str) -> LockoutStatus {
        let now = self.clock.now_ms();
        let mut entries = self.entries.lock().expect("attempt tracker poisoned");

        let Some(entry) = entries.get(username) else {
            return LockoutStatus::Clear;
        };

        let Some(started_at) = entry.lockout_started_at else {
            return LockoutStatus::Clear;
        };

        let elapsed = now - started_at;
        if elapsed >= LOCKOUT_MS {
            // Cooldown over: reset to Clean so the caller evaluates the
            // attempt fresh.
            entries.remove(username);
            return LockoutStatus::Clear;
        }

        LockoutStatus::Locked {
            seconds_remaining: (LOCKOUT_MS - elapsed + 999) / 1000,
        }
    }

    async fn record_failure(&self, username: &str) -> u32 {
        let now = self.clock.now_ms();
        let mut entries = self.entries.lock().expect("attempt tracker poisoned");

        let entry = entries.entry(username.to_string()).or_default();
        entry.count += 1;

        if entry.count >= LOCKOUT_THRESHOLD && entry.lockout_started_at.is_none() {
            entry.lockout_started_at = Some(now);
        }

        entry.count
    }

    async fn record_success(&self, username: &str) {
        self.entries
            .lock()
            .expect("attempt tracker poisoned")
            .remove(username);
    }
}
