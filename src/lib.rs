//! archivecli - find and open the latest archive.is snapshot of a URL
//!
//! A URL goes through syntax, blocklist and reachability checks, its
//! post-redirect form is looked up on the archive service, and the
//! resulting snapshot is opened in the default browser.

pub mod archive;
pub mod archiver;
pub mod browser;
pub mod config;
pub mod core;
pub mod reporting;
pub mod ui;
pub mod validation;

// Re-export commonly used items for convenience
pub use archive::{ArchiveClient, LookupArchive};
pub use archiver::Archiver;
pub use browser::{OpenBrowser, SystemBrowser};
pub use config::{CliConfig, Config};
pub use crate::core::{
    ArchiveCliError, ArchiveLookupResult, BlocklistError, BrowserError, LookupError, LookupMode,
    ReachabilityError, ReachabilityResult, Result,
};
pub use validation::{
    CheckReachability, DomainBlocklist, HttpReachabilityChecker, validate_for_archiving,
};
