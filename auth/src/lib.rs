//! Authentication primitives library
//!
//! Provides the credential derivations shared by the login service:
//! - Password verifier encoding (demo-grade, reversible)
//! - Secure word generation
//! - MFA code derivation from a secure word
//! - Session token minting
//!
//! Everything here is a pure function (session minting aside, which reads
//! the wall clock and a random suffix). State, expiry, and rate limiting
//! live in the service that calls these.
//!
//! # Examples
//!
//! ## Password verifier
//! ```
//! use auth::hash_password;
//!
//! let verifier = hash_password("password123", "your-secret-salt");
//! assert_eq!(verifier, hash_password("password123", "your-secret-salt"));
//! ```
//!
//! ## Secure word and MFA code
//! ```
//! use auth::{generate_secure_word, derive_mfa_code};
//!
//! let word = generate_secure_word("admin", 1_700_000_000_000);
//! assert_eq!(word.len(), 8);
//!
//! let code = derive_mfa_code(&word);
//! assert_eq!(code.len(), 6);
//! assert_eq!(code, derive_mfa_code(&word));
//! ```

pub mod mfa;
pub mod password;
pub mod secure_word;
pub mod session;

// Re-export commonly used items
pub use mfa::derive_mfa_code;
pub use mfa::FALLBACK_MFA_CODE;
pub use password::hash_password;
pub use secure_word::generate_secure_word;
pub use session::create_session;
pub use session::Session;
