//! Deterministic slug derivation and validation.
//!
//! Slug candidates are derived from a 32-bit checksum of the destination
//! URL, folded into a fixed bucket space and base-62 encoded. Identical URLs
//! therefore land on identical initial candidates; collisions advance a
//! probe counter that grows quadratically, skipping far ahead in the bucket
//! space.

use crate::error::AppError;
use serde_json::json;
use xxhash_rust::xxh32::xxh32;

/// Base-62 digits in value order: `0-9`, then `a-z`, then `A-Z`.
const ALPHABET: &[u8; 62] = b"0123456789abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Size of the bucket space URL checksums are folded into.
///
/// Keeps generated slugs at 5-6 base-62 characters.
pub const BUCKET_SPACE: u64 = 1_000_000_000;

/// Minimum slug length accepted from callers.
pub const MIN_SLUG_LENGTH: usize = 2;

/// Slugs that cannot be used for entries.
///
/// These are the HTTP surface's own fixed path segments; an entry under any
/// of them would be unreachable. Deployments can extend the set via
/// `RESERVED_SLUGS` (see [`crate::config::Config`]).
pub const DEFAULT_RESERVED_SLUGS: &[&str] =
    &["api", "all", "top", "search", "edit", "delete", "health"];

/// Stable 32-bit checksum of a destination URL.
pub fn url_checksum(url: &str) -> u32 {
    xxh32(url.as_bytes(), 0)
}

/// Folds a checksum and probe counter into a bucket index.
pub fn bucket_for(checksum: u32, base: u64) -> u64 {
    (u64::from(checksum) + base) % BUCKET_SPACE
}

/// Advances the probe counter after a collision.
///
/// Squares the counter modulo the bucket space; falls back to a single
/// increment whenever squaring does not advance (base 1 squares to itself,
/// and a reduced square can land at or below the current value). The probe
/// therefore always moves, while keeping quadratic growth for every
/// non-degenerate step.
pub fn next_base(base: u64) -> u64 {
    let reduced = base % BUCKET_SPACE;
    let squared = reduced * reduced % BUCKET_SPACE;
    if squared > base { squared } else { base + 1 }
}

/// Encodes a bucket index in base-62.
///
/// Pure positional-numeral conversion with an explicit accumulator: divide
/// by 62, prepend the remainder's digit. Zero encodes to `"0"`; no other
/// value carries leading-zero digits.
pub fn encode_base62(mut n: u64) -> String {
    if n == 0 {
        return "0".to_string();
    }

    let mut buf = [0u8; 11]; // u64 in base 62 never exceeds 11 digits
    let mut i = buf.len();
    while n > 0 {
        i -= 1;
        buf[i] = ALPHABET[(n % 62) as usize];
        n /= 62;
    }

    String::from_utf8(buf[i..].to_vec()).expect("alphabet is valid ascii")
}

/// Derives the slug candidate for a checksum at a given probe position.
pub fn candidate_slug(checksum: u32, base: u64) -> String {
    encode_base62(bucket_for(checksum, base))
}

/// Validates a caller-supplied slug's length and charset.
///
/// # Rules
///
/// - Length at least [`MIN_SLUG_LENGTH`]
/// - Allowed characters: ASCII alphanumeric, `_`, `-`
///
/// # Errors
///
/// Returns [`AppError::Validation`] if either rule is violated.
pub fn validate_slug_format(slug: &str) -> Result<(), AppError> {
    if slug.len() < MIN_SLUG_LENGTH {
        return Err(AppError::bad_request(
            "Slug must be at least 2 characters",
            json!({ "provided_length": slug.len() }),
        ));
    }

    if !slug
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
    {
        return Err(AppError::bad_request(
            "Slug can contain only alphanumeric characters and _ and -",
            json!({ "slug": slug }),
        ));
    }

    Ok(())
}

/// Returns true if `slug` collides with a reserved name.
pub fn is_reserved(slug: &str, extra: &[String]) -> bool {
    DEFAULT_RESERVED_SLUGS.contains(&slug) || extra.iter().any(|r| r == slug)
}
