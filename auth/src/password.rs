use base64ct::Base64;
use base64ct::Encoding;

/// Compute the demo password verifier for a plaintext password.
///
/// The verifier is `base64(password + salt)` — a reversible encoding kept
/// for wire compatibility with the demo clients, NOT a real KDF. The login
/// pipeline only ever compares verifier outputs, so swapping this for a
/// proper KDF changes no other component.
///
/// # Arguments
/// * `password` - Plaintext password
/// * `salt` - Shared salt string (from configuration)
///
/// # Returns
/// Base64-encoded verifier string
pub fn hash_password(password: &str, salt: &str) -> String {
    let salted = format!("{password}{salt}");
    Base64::encode_string(salted.as_bytes())
}
