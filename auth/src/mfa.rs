/// Universal fallback MFA code, accepted regardless of the stored secure
/// word. Kept for demo/debug parity with the original flow; flagged for
/// review before any non-demo use.
pub const FALLBACK_MFA_CODE: &str = "123456";

/// Number of digits in a derived MFA code.
pub const MFA_CODE_LENGTH: usize = 6;

/// Derive the expected 6-digit MFA code from a secure word.
///
/// Takes the MD5 digest of the word, scans its lowercase hex
/// representation left to right collecting decimal digits until 6 are
/// found. If the hex characters run out first, each remaining output
/// position `i` is filled with `digest_byte[i] % 10`.
///
/// Pure: the same secure word always yields the same code.
///
/// # Arguments
/// * `secure_word` - Secure word currently on file for the user
///
/// # Returns
/// 6-character ASCII digit string
pub fn derive_mfa_code(secure_word: &str) -> String {
    let digest = md5::compute(secure_word.as_bytes());
    let hex = format!("{digest:x}");

    let mut code = String::with_capacity(MFA_CODE_LENGTH);
    for c in hex.chars() {
        if code.len() == MFA_CODE_LENGTH {
            break;
        }
        if c.is_ascii_digit() {
            code.push(c);
        }
    }

    // A 32-char hex digest almost always contains 6 digits; the pad path
    // covers the pathological all-letters case.
    while code.len() < MFA_CODE_LENGTH {
        let byte = digest.0[code.len()];
        code.push(char::from(b'0' + byte % 10));
    }

    code
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_is_six_digits() {
        let code = derive_mfa_code("A1B2C3D4");
        assert_eq!(code.len(), MFA_CODE_LENGTH);
        assert!(code.chars().all(|c| c.is_ascii_digit()));
    }

    #[test]
    fn test_pure_function() {
        let a = derive_mfa_code("A1B2C3D4");
        let b = derive_mfa_code("A1B2C3D4");
        assert_eq!(a, b);
    }

    #[test]
    fn test_code_matches_digest_digits() {
        let word = "FFA0B1C2";
        let digest = md5::compute(word.as_bytes());
        let expected: String = format!("{digest:x}")
            .chars()
            .filter(char::is_ascii_digit)
            .take(MFA_CODE_LENGTH)
            .collect();
        // Hex digests of these short words carry at least 6 digits, so the
        // scan path alone produces the code.
        assert_eq!(expected.len(), MFA_CODE_LENGTH);
        assert_eq!(derive_mfa_code(word), expected);
    }

    #[test]
    fn test_fallback_code_shape() {
        assert_eq!(FALLBACK_MFA_CODE.len(), MFA_CODE_LENGTH);
        assert!(FALLBACK_MFA_CODE.chars().all(|c| c.is_ascii_digit()));
    }
}
