//! URL scheme normalization.
//!
//! Stored URLs always carry an explicit `http://` or `https://` prefix.
//! Normalization happens before any persistence, identically for manual
//! registration, automatic allocation, and edits. The stored string is
//! otherwise kept byte-exact; reachability checking is a caller concern.

/// Minimum accepted URL length, before scheme prefixing.
pub const MIN_URL_LENGTH: usize = 2;

/// Errors that can occur during URL normalization.
#[derive(Debug, thiserror::Error)]
pub enum UrlNormalizationError {
    #[error("URL must be at least {MIN_URL_LENGTH} characters")]
    TooShort,
}

/// Normalizes a URL to its stored form.
///
/// Prepends `http://` when neither `http://` nor `https://` is present;
/// returns the input unchanged otherwise.
///
/// # Errors
///
/// Returns [`UrlNormalizationError::TooShort`] for inputs under
/// [`MIN_URL_LENGTH`] characters.
///
/// # Examples
///
/// ```ignore
/// assert_eq!(normalize_url("example.com/x").unwrap(), "http://example.com/x");
/// assert_eq!(normalize_url("https://example.com").unwrap(), "https://example.com");
/// ```
pub fn normalize_url(input: &str) -> Result<String, UrlNormalizationError> {
    if input.len() < MIN_URL_LENGTH {
        return Err(UrlNormalizationError::TooShort);
    }

    if input.starts_with("http://") || input.starts_with("https://") {
        Ok(input.to_string())
    } else {
        Ok(format!("http://{input}"))
    }
}
