pub mod attempts;
pub mod secure_word;
pub mod users;

pub use attempts::InMemoryMfaAttemptTracker;
pub use secure_word::InMemorySecureWordStore;
pub use users::InMemoryUserDirectory;
