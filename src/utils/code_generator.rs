//! Short code generation and validation utilities.
//!
//! Provides cryptographically secure random code generation and validation
//! for user-provided aliases and lookup codes.

use crate::error::AppError;
use regex::Regex;
use std::sync::LazyLock;

/// Base62 alphabet used for generated codes.
pub const ALPHABET: &[u8; 62] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz";

/// Length of generated codes when none is configured.
pub const DEFAULT_CODE_LENGTH: usize = 7;

pub const MIN_CODE_LENGTH: usize = 3;
pub const MAX_CODE_LENGTH: usize = 64;

/// Largest multiple of 62 that fits in a byte. Bytes at or above it are
/// rejected so that every symbol is drawn with probability exactly 1/62.
const REJECTION_THRESHOLD: u8 = 248;

static CODE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9_-]+$").expect("code pattern is a valid regex")
});

/// Source of candidate short codes.
///
/// Implementations are pure generators and never touch storage; collision
/// handling belongs to [`crate::application::services::LinkService`].
#[cfg_attr(test, mockall::automock)]
pub trait CodeGenerator: Send + Sync {
    /// Produces a fresh candidate code.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Generator`] if the randomness source fails.
    fn generate(&self) -> Result<String, AppError>;
}

/// Generates fixed-length base62 codes from the operating system CSPRNG.
///
/// Codes are unpredictable, so knowing some short links does not help an
/// attacker enumerate others.
#[derive(Debug, Clone)]
pub struct RandomCodeGenerator {
    length: usize,
}

impl RandomCodeGenerator {
    /// Creates a generator for codes of `length` characters.
    ///
    /// A length of zero falls back to [`DEFAULT_CODE_LENGTH`].
    pub fn new(length: usize) -> Self {
        let length = if length == 0 {
            DEFAULT_CODE_LENGTH
        } else {
            length
        };
        Self { length }
    }

    pub fn length(&self) -> usize {
        self.length
    }
}

impl Default for RandomCodeGenerator {
    fn default() -> Self {
        Self::new(DEFAULT_CODE_LENGTH)
    }
}

impl CodeGenerator for RandomCodeGenerator {
    fn generate(&self) -> Result<String, AppError> {
        generate_code(self.length).map_err(|e| AppError::Generator(e.to_string()))
    }
}

/// Generates a random base62 code of exactly `length` characters.
///
/// Uses `getrandom` for entropy with rejection sampling, so characters are
/// uniform and independent.
///
/// # Errors
///
/// Returns the underlying [`getrandom::Error`] if the system random number
/// generator fails.
///
/// # Examples
///
/// ```ignore
/// let code = generate_code(7)?;
/// assert_eq!(code.len(), 7);
/// assert!(code.chars().all(|c| c.is_ascii_alphanumeric()));
/// ```
pub fn generate_code(length: usize) -> Result<String, getrandom::Error> {
    let mut code = String::with_capacity(length);
    let mut buffer = [0u8; 32];

    while code.len() < length {
        getrandom::fill(&mut buffer)?;

        for &byte in buffer.iter().filter(|&&b| b < REJECTION_THRESHOLD) {
            if code.len() == length {
                break;
            }
            code.push(ALPHABET[usize::from(byte % 62)] as char);
        }
    }

    Ok(code)
}

/// Returns true if `code` is 3-64 characters of `[A-Za-z0-9_-]`.
pub fn is_valid_code(code: &str) -> bool {
    (MIN_CODE_LENGTH..=MAX_CODE_LENGTH).contains(&code.len()) && CODE_REGEX.is_match(code)
}

/// Validates an alias or lookup code.
///
/// # Rules
///
/// - Length: 3-64 characters
/// - Allowed characters: ASCII letters, digits, `_` and `-`
///
/// # Errors
///
/// Returns [`AppError::InvalidCode`] if any rule is violated.
///
/// # Examples
///
/// ```ignore
/// assert!(validate_code("my-link_2024").is_ok());
/// assert!(validate_code("ab").is_err());        // Too short
/// assert!(validate_code("has space").is_err()); // Bad character
/// ```
pub fn validate_code(code: &str) -> Result<(), AppError> {
    if !(MIN_CODE_LENGTH..=MAX_CODE_LENGTH).contains(&code.len()) {
        return Err(AppError::InvalidCode(format!(
            "code must be {MIN_CODE_LENGTH}-{MAX_CODE_LENGTH} characters, got {}",
            code.len()
        )));
    }

    if !CODE_REGEX.is_match(code) {
        return Err(AppError::InvalidCode(
            "code can only contain letters, digits, '_' and '-'".to_string(),
        ));
    }

    Ok(())
}
