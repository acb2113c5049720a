//! Value types passed between the pipeline stages

use crate::core::error::LookupError;

/// Outcome of a successful reachability probe
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReachabilityResult {
    /// URL after all redirects were followed
    pub final_url: String,
    pub reachable: bool,
}

impl ReachabilityResult {
    pub fn reachable(final_url: impl Into<String>) -> Self {
        Self {
            final_url: final_url.into(),
            reachable: true,
        }
    }
}

/// Result of one archive lookup: the snapshot URL or why there is none
pub type ArchiveLookupResult = std::result::Result<String, LookupError>;

/// How the archive service is queried
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LookupMode {
    /// Only return an existing snapshot
    #[default]
    Latest,
    /// Return an existing snapshot, asking for a new one when none exists
    GetOrCreate,
}
