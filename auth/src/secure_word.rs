/// Length of a generated secure word.
pub const SECURE_WORD_LENGTH: usize = 8;

/// Generate a secure word for a username at a point in time.
///
/// The word is the first 8 characters of the uppercase hex MD5 digest of
/// `username + timestamp_ms`. Collisions are not guarded against — demo
/// scope only.
///
/// # Arguments
/// * `username` - Username the word is issued for
/// * `timestamp_ms` - Issuance time in epoch milliseconds
///
/// # Returns
/// 8-character uppercase alphanumeric word
pub fn generate_secure_word(username: &str, timestamp_ms: i64) -> String {
    let digest = md5::compute(format!("{username}{timestamp_ms}").as_bytes());
    let hex = format!("{digest:x}");
    hex[..SECURE_WORD_LENGTH].to_uppercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_word_format() {
        let word = generate_secure_word("admin", 1_700_000_000_000);
        assert_eq!(word.len(), SECURE_WORD_LENGTH);
        assert!(word
            .chars()
            .all(|c| c.is_ascii_digit() || c.is_ascii_uppercase()));
    }

    #[test]
    fn test_deterministic_for_same_inputs() {
        let a = generate_secure_word("admin", 1_700_000_000_000);
        let b = generate_secure_word("admin", 1_700_000_000_000);
        assert_eq!(a, b);
    }

    #[test]
    fn test_timestamp_changes_word() {
        let a = generate_secure_word("admin", 1_700_000_000_000);
        let b = generate_secure_word("admin", 1_700_000_000_001);
        assert_ne!(a, b);
    }

    #[test]
    fn test_username_changes_word() {
        let a = generate_secure_word("admin", 1_700_000_000_000);
        let b = generate_secure_word("demo", 1_700_000_000_000);
        assert_ne!(a, b);
    }
}
