//! URL normalization and validation utilities.
//!
//! Submitted URLs are first normalized (trimmed, `https://` added when no
//! HTTP scheme is present) and then validated. Only the validated string is
//! ever persisted.

use url::Url;

const HTTP_PREFIX: &str = "http://";
const HTTPS_PREFIX: &str = "https://";

/// Errors that can occur during URL validation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UrlValidationError {
    #[error("URL cannot be empty")]
    Empty,

    #[error("Invalid URL format: {0}")]
    InvalidFormat(String),

    #[error("URL must start with http:// or https://")]
    UnsupportedProtocol,

    #[error("URL must include a host")]
    MissingHost,
}

/// Trims surrounding whitespace and prepends `https://` when the input has
/// no `http://` or `https://` prefix.
///
/// Prefix detection ignores ASCII case, so `HTTP://example.com` is kept as is.
/// Applying the function twice gives the same result as applying it once.
///
/// # Examples
///
/// ```ignore
/// assert_eq!(normalize_url("  example.com/path "), "https://example.com/path");
/// assert_eq!(normalize_url("http://example.com"), "http://example.com");
/// ```
pub fn normalize_url(input: &str) -> String {
    let trimmed = input.trim();

    if has_http_prefix(trimmed) {
        trimmed.to_string()
    } else {
        format!("{HTTPS_PREFIX}{trimmed}")
    }
}

/// Validates that a string is a well-formed absolute HTTP(S) URL.
///
/// # Rules
///
/// 1. Must not be empty
/// 2. Must start with `http://` or `https://`
/// 3. Must not contain control characters
/// 4. Must parse as an absolute URL with a host
/// 5. Must not hide another scheme behind the prefix (`https://ftp://host`)
///
/// # Errors
///
/// Returns the [`UrlValidationError`] variant of the first rule that fails.
pub fn validate_url(url: &str) -> Result<(), UrlValidationError> {
    if url.trim().is_empty() {
        return Err(UrlValidationError::Empty);
    }

    if !has_http_prefix(url) {
        return Err(UrlValidationError::UnsupportedProtocol);
    }

    // `Url::parse` silently drops these, but the raw string is what gets
    // stored and later sent back as a `Location` header.
    if url.chars().any(char::is_control) {
        return Err(UrlValidationError::InvalidFormat(
            "URL contains control characters".to_string(),
        ));
    }

    let parsed = Url::parse(url).map_err(|e| UrlValidationError::InvalidFormat(e.to_string()))?;

    match parsed.scheme() {
        "http" | "https" => {}
        _ => return Err(UrlValidationError::UnsupportedProtocol),
    }

    if has_nested_scheme(url) {
        return Err(UrlValidationError::UnsupportedProtocol);
    }

    if parsed.host_str().is_none_or(str::is_empty) {
        return Err(UrlValidationError::MissingHost);
    }

    Ok(())
}

/// Normalizes then validates user input, returning the string to persist.
///
/// # Errors
///
/// Returns [`UrlValidationError::Empty`] for blank input, otherwise whatever
/// [`validate_url`] reports for the normalized string.
pub fn normalize_and_validate(input: &str) -> Result<String, UrlValidationError> {
    if input.trim().is_empty() {
        return Err(UrlValidationError::Empty);
    }

    let normalized = normalize_url(input);
    validate_url(&normalized)?;

    Ok(normalized)
}

fn has_http_prefix(s: &str) -> bool {
    starts_with_ignore_ascii_case(s, HTTP_PREFIX) || starts_with_ignore_ascii_case(s, HTTPS_PREFIX)
}

fn starts_with_ignore_ascii_case(s: &str, prefix: &str) -> bool {
    s.get(..prefix.len())
        .is_some_and(|head| head.eq_ignore_ascii_case(prefix))
}

/// Detects `https://<scheme>://...`, which appears when normalization
/// prefixes input such as `ftp://host`.
fn has_nested_scheme(url: &str) -> bool {
    let Some((_, rest)) = url.split_once("://") else {
        return false;
    };
    let Some((candidate, _)) = rest.split_once("://") else {
        return false;
    };

    let mut chars = candidate.chars();
    chars.next().is_some_and(|c| c.is_ascii_alphabetic())
        && chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
}
