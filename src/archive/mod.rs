//! Archive service access
//!
//! This module queries the archive service for the most recent
//! snapshot of a URL and classifies its responses.

pub mod client;

// Re-export commonly used items
pub use client::{ArchiveClient, LookupArchive, classify_response};
