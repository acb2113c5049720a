//! User-facing status and error messages

use crate::core::error::{ArchiveCliError, LookupError};

/// Lines written to stderr when a run fails for `url`
pub fn error_lines(err: &ArchiveCliError, url: &str) -> Vec<String> {
    match err {
        ArchiveCliError::InvalidFormat(_)
        | ArchiveCliError::DomainBlocked(_)
        | ArchiveCliError::Blocklist(crate::core::error::BlocklistError::Parse(_)) => {
            vec![format!("Error: Invalid URL format - {err}")]
        }
        ArchiveCliError::Reachability(_) => vec![format!("Error: Could not reach URL - {err}")],
        ArchiveCliError::Lookup(LookupError::NotFound) => vec![
            format!("Error: No archived version found for {url}"),
            "Tip: You can try again later as the page might be archived in the future."
                .to_string(),
        ],
        ArchiveCliError::Lookup(LookupError::ServiceUnavailable(_)) => vec![
            format!("Error: Archive.is service unavailable - {err}"),
            "Tip: Please wait a few minutes and try again.".to_string(),
        ],
        ArchiveCliError::Lookup(LookupError::CreationNotImplemented) => {
            vec![format!("Error: Could not create archive - {err}")]
        }
        ArchiveCliError::Lookup(_) => vec![format!("Error: Archive service error - {err}")],
        ArchiveCliError::Browser(_) => vec![
            format!("Error: Could not open browser - {err}"),
            "Tip: Try setting your default browser or manually visit the archive URL."
                .to_string(),
        ],
        ArchiveCliError::Config(msg) => vec![format!("Error: Configuration error - {msg}")],
        ArchiveCliError::Blocklist(_) => vec![format!("Error: Configuration error - {err}")],
        ArchiveCliError::Http(_) | ArchiveCliError::Io(_) => vec![
            format!("Error: An unexpected error occurred - {err}"),
            "This is likely a bug. Please report it to the developers.".to_string(),
        ],
    }
}

/// Print the failure for `url` to stderr
pub fn print_error(err: &ArchiveCliError, url: &str) {
    for line in error_lines(err, url) {
        eprintln!("{line}");
    }
}

/// Confirmation printed after the archive was opened
pub fn success_message(archive_url: &str) -> String {
    format!("Successfully opened archived version: {archive_url}")
}
