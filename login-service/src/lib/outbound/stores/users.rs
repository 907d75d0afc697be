use std::collections::HashMap;

use async_trait::async_trait;

use crate::domain::login::models::UserConfig;
use crate::domain::login::ports::UserDirectory;

/// Static in-memory credential directory.
///
/// Built once at startup and never mutated. Verifiers are precomputed
/// from the raw demo passwords, so login compares verifier outputs only.
pub struct InMemoryUserDirectory {
    users: HashMap<String, UserConfig>,
}

impl InMemoryUserDirectory {
    /// Build a directory from raw credentials.
    ///
    /// # Arguments
    /// * `entries` - `(username, raw_password, requires_mfa)` triples
    /// * `salt` - Shared salt for the verifier encoding
    pub fn new<'a>(entries: impl IntoIterator<Item = (&'a str, &'a str, bool)>, salt: &str) -> Self {
        let users = entries
            .into_iter()
            .map(|(username, raw_password, requires_mfa)| {
                (
                    username.to_string(),
                    UserConfig {
                        username: username.to_string(),
                        password_hash: auth::hash_password(raw_password, salt),
                        requires_mfa,
                    },
                )
            })
            .collect();

        Self { users }
    }

    /// The three demo accounts.
    pub fn with_demo_users(salt: &str) -> Self {
        Self::new(
            [
                ("admin", "password123", true),
                ("user", "userpass", false),
                ("demo", "demo123", true),
            ],
            salt,
        )
    }
}

#[async_trait]
impl UserDirectory for InMemoryUserDirectory {
    async fn find(&self, username: &str) -> Option<UserConfig> {
        self.users.get(username).cloned()
    }
}
