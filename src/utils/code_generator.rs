//! Short code generation.
//!
//! Codes are drawn from a 62-symbol alphabet (`a-z`, `A-Z`, `0-9`). The
//! generator makes no uniqueness promise; collisions are resolved by the
//! allocation retry loop in [`crate::application::services::ShortenerService`].

use rand::Rng;

/// Alphabet short codes are drawn from.
pub const CODE_ALPHABET: &[u8] = b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// Default short code length.
pub const DEFAULT_CODE_LENGTH: usize = 6;

/// Produces candidate short codes.
#[cfg_attr(test, mockall::automock)]
pub trait CodeGenerator: Send + Sync {
    /// Returns a code of exactly `length` symbols.
    fn generate(&self, length: usize) -> String;
}

/// Uniform random generator backed by the thread-local RNG.
///
/// Not cryptographically secure, and does not need to be: codes are public
/// identifiers, not secrets.
#[derive(Debug, Default, Clone, Copy)]
pub struct RandomCodeGenerator;

impl CodeGenerator for RandomCodeGenerator {
    fn generate(&self, length: usize) -> String {
        generate_code(length)
    }
}

/// Generates a random code of `length` symbols from [`CODE_ALPHABET`].
///
/// Each symbol is drawn independently and uniformly.
///
/// # Examples
///
/// ```ignore
/// let code = generate_code(6);
/// assert_eq!(code.len(), 6);
/// assert!(code.chars().all(|c| c.is_ascii_alphanumeric()));
/// ```
pub fn generate_code(length: usize) -> String {
    let mut rng = rand::rng();

    (0..length)
        .map(|_| CODE_ALPHABET[rng.random_range(0..CODE_ALPHABET.len())] as char)
        .collect()
}
