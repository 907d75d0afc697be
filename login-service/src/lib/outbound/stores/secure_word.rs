use std::collections::HashMap;
use std::sync::Arc;
use std::sync::Mutex;

use async_trait::async_trait;

use crate::domain::login::clock::Clock;
use crate::domain::login::errors::ConsumeError;
use crate::domain::login::errors::SecureWordError;
use crate::domain::login::models::IssuedSecureWord;
use crate::domain::login::models::SecureWordEntry;
use crate::domain::login::models::RATE_LIMIT_MS;
use crate::domain::login::models::SECURE_WORD_EXPIRY_MS;
use crate::domain::login::ports::SecureWordStore;

/// In-memory secure word store.
///
/// Process-wide map, one live slot per username. Entries leave the map
/// only through a successful consume or an explicit remove — expiry is a
/// check at consume time, not an eviction.
pub struct InMemorySecureWordStore {
    entries: Mutex<HashMap<String, SecureWordEntry>>,
    clock: Arc<dyn Clock>,
}

impl InMemorySecureWordStore {
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self {
            entries: Mutex::new(HashMap::new()),
            clock,
        }
    }
}

#[async_trait]
impl SecureWordStore for InMemorySecureWordStore {
    async fn issue(&self, username: &str) -> Result<IssuedSecureWord, SecureWordError> {
        let now = self.clock.now_ms();
        let mut entries = self.entries.lock().expect("secure word store poisoned");

        let previous_count = match entries.get(username) {
            Some(existing) if now - existing.last_request < RATE_LIMIT_MS => {
                return Err(SecureWordError::RateLimited);
            }
            Some(existing) => existing.request_count,
            None => 0,
        };

        let word = auth::generate_secure_word(username, now);

        entries.insert(
            username.to_string(),
            SecureWordEntry {
                word: word.clone(),
                issued_at: now,
                request_count: previous_count + 1,
                last_request: now,
            },
        );

        Ok(IssuedSecureWord {
            word,
            issued_at: now,
        })
    }

    async fn peek(&self, username: &str) -> Option<SecureWordEntry> {
        self.entries
            .lock()
            .expect("secure word store poisoned")
            .get(username)
            .cloned()
    }

    async fn consume(&self, username: &str, supplied_word: &str) -> Result<(), ConsumeError> {
        let now = self.clock.now_ms();
        let mut entries = self.entries.lock().expect("secure word store poisoned");

        let entry = entries.get(username).ok_or(ConsumeError::NotFound)?;

        // Expired and mismatched words stay on file; only a correct consume
        // retires a word.
        if now - entry.issued_at > SECURE_WORD_EXPIRY_MS {
            return Err(ConsumeError::Expired);
        }

        if entry.word != supplied_word {
            return Err(ConsumeError::Mismatch);
        }

        entries.remove(username);

        Ok(())
    }

    async fn remove(&self, username: &str) {
        self.entries
            .lock()
            .expect("secure word store poisoned")
            .remove(username);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::login::clock::ManualClock;

    fn store_with_clock() -> (InMemorySecureWordStore, Arc<ManualClock>) {
        let clock = Arc::new(ManualClock::new(1_700_000_000_000));
        let store = InMemorySecureWordStore::new(Arc::clone(&clock) as Arc<dyn Clock>);
        (store, clock)
    }

    #[tokio::test]
    async fn test_issue_within_rate_limit_window_is_rejected() {
        let (store, _clock) = store_with_clock();

        store.issue("admin").await.expect("first issue");
        let second = store.issue("admin").await;

        assert_eq!(second, Err(SecureWordError::RateLimited));
    }

    #[tokio::test]
    async fn test_issue_after_rate_limit_window_overwrites_slot() {
        let (store, clock) = store_with_clock();

        let first = store.issue("admin").await.expect("first issue");
        clock.advance_ms(RATE_LIMIT_MS);
        let second = store.issue("admin").await.expect("second issue");

        assert_ne!(first.word, second.word);

        let entry = store.peek("admin").await.expect("entry on file");
        assert_eq!(entry.word, second.word);
        assert_eq!(entry.request_count, 2);
        assert_eq!(entry.issued_at, second.issued_at);
    }

    #[tokio::test]
    async fn test_rate_limit_is_per_username() {
        let (store, _clock) = store_with_clock();

        store.issue("admin").await.expect("admin issue");
        store
            .issue("demo")
            .await
            .expect("other usernames are not limited");
    }

    #[tokio::test]
    async fn test_consume_correct_word_succeeds_exactly_once() {
        let (store, _clock) = store_with_clock();

        let issued = store.issue("admin").await.expect("issue");

        assert_eq!(store.consume("admin", &issued.word).await, Ok(()));
        // The slot is gone, so a replay reports NotFound.
        assert_eq!(
            store.consume("admin", &issued.word).await,
            Err(ConsumeError::NotFound)
        );
    }

    #[tokio::test]
    async fn test_consume_mismatch_leaves_entry_for_retry() {
        let (store, _clock) = store_with_clock();

        let issued = store.issue("admin").await.expect("issue");

        assert_eq!(
            store.consume("admin", "WRONGWRD").await,
            Err(ConsumeError::Mismatch)
        );
        // Correct word still works after a wrong guess.
        assert_eq!(store.consume("admin", &issued.word).await, Ok(()));
    }

    #[tokio::test]
    async fn test_consume_after_expiry_fails_and_entry_survives() {
        let (store, clock) = store_with_clock();

        let issued = store.issue("admin").await.expect("issue");
        clock.advance_ms(SECURE_WORD_EXPIRY_MS + 1_000);

        assert_eq!(
            store.consume("admin", &issued.word).await,
            Err(ConsumeError::Expired)
        );

        let entry = store.peek("admin").await.expect("stale entry kept");
        assert_eq!(entry.word, issued.word);
    }

    #[tokio::test]
    async fn test_consume_exactly_at_expiry_still_valid() {
        let (store, clock) = store_with_clock();

        let issued = store.issue("admin").await.expect("issue");
        clock.advance_ms(SECURE_WORD_EXPIRY_MS);

        assert_eq!(store.consume("admin", &issued.word).await, Ok(()));
    }

    #[tokio::test]
    async fn test_consume_unknown_username() {
        let (store, _clock) = store_with_clock();

        assert_eq!(
            store.consume("ghost", "ANYWORD1").await,
            Err(ConsumeError::NotFound)
        );
    }

    #[tokio::test]
    async fn test_request_count_is_monotonic_across_reissues() {
        let (store, clock) = store_with_clock();

        for _ in 0..3 {
            store.issue("admin").await.expect("issue");
            clock.advance_ms(RATE_LIMIT_MS);
        }

        let entry = store.peek("admin").await.expect("entry on file");
        assert_eq!(entry.request_count, 3);
    }

    #[tokio::test]
    async fn test_remove_clears_slot() {
        let (store, _clock) = store_with_clock();

        store.issue("admin").await.expect("issue");
        store.remove("admin").await;

        assert_eq!(store.peek("admin").await, None);
    }
}
