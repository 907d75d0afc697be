use std::collections::HashMap;
use std::sync::Arc;
use std::sync::Mutex;

use tokio::sync::Mutex as AsyncMutex;
use tokio::sync::OwnedMutexGuard;

/// Per-username mutual exclusion for pipeline executions.
///
/// A secure word is a single-use credential: two logins racing on the same
/// username must not both observe a live word before one retires it. The
/// stores are individually atomic, but the pipelines read and then mutate
/// across calls, so the whole pipeline run is serialized per username.
///
/// Lock entries are never evicted, matching the unbounded per-username
/// state kept by the stores.
#[derive(Debug, Default)]
pub struct UserLocks {
    locks: Mutex<HashMap<String, Arc<AsyncMutex<()>>>>,
}

impl UserLocks {
    pub fn new() -> Self {
        Self::default()
    }

    /// Acquire the lock for a username, waiting if another pipeline run
    /// for the same username is in flight. Requests for different
    /// usernames never contend.
    pub async fn acquire(&self, username: &str) -> OwnedMutexGuard<()> {
        let lock = {
            let mut locks = self.locks.lock().expect("user lock map poisoned");
            Arc::clone(
                locks
                    .entry(username.to_string())
                    .or_insert_with(|| Arc::new(AsyncMutex::new(()))),
            )
        };

        lock.lock_owned().await
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;

    #[tokio::test]
    async fn test_same_username_is_serialized() {
        let locks = Arc::new(UserLocks::new());

        let guard = locks.acquire("admin").await;

        let contender = {
            let locks = Arc::clone(&locks);
            tokio::spawn(async move {
                let _guard = locks.acquire("admin").await;
            })
        };

        // Second acquire must block while the first guard is held.
        tokio::time::sleep(Duration::from_millis(20)).await;
        assert!(!contender.is_finished());

        drop(guard);
        contender.await.expect("contender task panicked");
    }

    #[tokio::test]
    async fn test_different_usernames_do_not_contend() {
        let locks = UserLocks::new();

        let _admin = locks.acquire("admin").await;
        // Must not deadlock.
        let _demo = locks.acquire("demo").await;
    }
}
