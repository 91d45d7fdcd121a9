use crate::constants::{TOKEN_ID_ALPHABET, TOKEN_ID_LENGTH};
use base64::{Engine as _, engine::general_purpose};
use once_cell::sync::Lazy;

static TOKEN_ID_CHARS: Lazy<Vec<char>> = Lazy::new(|| TOKEN_ID_ALPHABET.chars().collect());

/// Generates a random string of `length` characters drawn from the token id alphabet.
///
/// Uses the `nanoid` generator, which is backed by a cryptographically secure RNG.
/// A zero `length` yields an empty string.
///
/// # Examples
/// ```
/// use baokim_client::utils::id::random_string;
/// let raw = random_string(32);
/// assert_eq!(raw.len(), 32);
/// ```
pub fn random_string(length: usize) -> String {
    // nanoid never terminates for a zero size
    if length == 0 {
        return String::new();
    }
    nanoid::nanoid!(length, &TOKEN_ID_CHARS)
}

/// Generates the `jti` claim of a new token.
///
/// A 32 character random string, standard base64 encoded (44 characters with padding).
pub fn get_token_id() -> String {
    general_purpose::STANDARD.encode(random_string(TOKEN_ID_LENGTH))
}
