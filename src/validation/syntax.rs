//! URL syntax checks
//!
//! Pure, total functions: malformed input yields `false` or an
//! `InvalidFormat` error, never a panic.

use url::Url;

use crate::core::constants::{error_messages, schemes};
use crate::core::error::{ArchiveCliError, Result};

/// Parse `url` only if it has the `scheme://host` shape.
///
/// `url::Url` accepts `http:example.com` for special schemes, so the
/// `://` separator is checked on the raw input as well.
pub(crate) fn parse_with_authority(url: &str) -> Option<Url> {
    let parsed = Url::parse(url).ok()?;
    let scheme_len = parsed.scheme().len();
    let rest = url.trim_start().get(scheme_len..)?;
    if !rest.starts_with("://") {
        return None;
    }
    match parsed.host_str() {
        Some(host) if !host.is_empty() => Some(parsed),
        _ => None,
    }
}

/// Check that a URL has a non-empty scheme and host.
pub fn is_well_formed(url: &str) -> bool {
    parse_with_authority(url).is_some()
}

/// Check that a URL uses `http` or `https`.
pub fn has_allowed_scheme(url: &str) -> bool {
    Url::parse(url)
        .map(|parsed| schemes::ALLOWED.contains(&parsed.scheme()))
        .unwrap_or(false)
}

/// Validate format first, then scheme. Both failures are `InvalidFormat`.
pub fn validate(url: &str) -> Result<&str> {
    if !is_well_formed(url) {
        return Err(ArchiveCliError::InvalidFormat(
            error_messages::INVALID_URL_FORMAT.to_string(),
        ));
    }
    if !has_allowed_scheme(url) {
        return Err(ArchiveCliError::InvalidFormat(
            error_messages::INVALID_SCHEME.to_string(),
        ));
    }
    Ok(url)
}
