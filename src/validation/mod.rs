//! URL validation
//!
//! This module checks a URL before it is looked up in the archive:
//! syntax, the domain blocklist and a live reachability probe.

pub mod blocklist;
pub mod pipeline;
pub mod reachability;
pub mod syntax;

// Re-export commonly used items
pub use blocklist::DomainBlocklist;
pub use pipeline::validate_for_archiving;
pub use reachability::{CheckReachability, HttpReachabilityChecker};
pub use syntax::{has_allowed_scheme, is_well_formed, validate};
