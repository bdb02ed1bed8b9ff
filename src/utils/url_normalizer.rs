//! URL normalization and validation utilities.
//!
//! Produces the canonical form of a destination URL. That form is what gets
//! stored and what redirects point to.

use url::Url;

/// Maximum accepted length of a destination URL, in characters.
pub const MAX_URL_LENGTH: usize = 2048;

/// Errors that can occur during URL normalization.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum UrlNormalizationError {
    #[error("URL is empty")]
    Empty,

    #[error("URL is too long ({0} characters, max {MAX_URL_LENGTH})")]
    TooLong(usize),

    #[error("Invalid URL format: {0}")]
    InvalidFormat(String),

    #[error("Only HTTP and HTTPS protocols are allowed")]
    UnsupportedProtocol,

    #[error("URL has no host")]
    MissingHost,
}

/// Normalizes a URL to a canonical form.
///
/// # Normalization Rules
///
/// 1. **Whitespace**: Leading and trailing whitespace is trimmed
/// 2. **Length**: At most 2048 characters, both after trimming and after
///    serialization
/// 3. **Protocol**: Only HTTP and HTTPS are allowed
/// 4. **Host**: Must be present and non-empty
/// 5. **Serialization**: The parsed URL is re-serialized, which lowercases the
///    host, drops default ports and normalizes percent-encoding
///
/// # Errors
///
/// Returns the matching [`UrlNormalizationError`] variant for each rule.
///
/// # Examples
///
/// ```ignore
/// assert_eq!(
///     normalize_url("  HTTPS://EXAMPLE.COM:443/Path ").unwrap(),
///     "https://example.com/Path"
/// );
/// ```
pub fn normalize_url(input: &str) -> Result<String, UrlNormalizationError> {
    let trimmed = input.trim();

    if trimmed.is_empty() {
        return Err(UrlNormalizationError::Empty);
    }

    let length = trimmed.chars().count();
    if length > MAX_URL_LENGTH {
        return Err(UrlNormalizationError::TooLong(length));
    }

    let url =
        Url::parse(trimmed).map_err(|e| UrlNormalizationError::InvalidFormat(e.to_string()))?;

    match url.scheme() {
        "http" | "https" => {}
        _ => return Err(UrlNormalizationError::UnsupportedProtocol),
    }

    if url.host_str().is_none_or(str::is_empty) {
        return Err(UrlNormalizationError::MissingHost);
    }

    let normalized = url.to_string();

    // Percent-encoding and punycode can grow the input past the limit.
    let normalized_length = normalized.chars().count();
    if normalized_length > MAX_URL_LENGTH {
        return Err(UrlNormalizationError::TooLong(normalized_length));
    }

    Ok(normalized)
}
