use std::fmt;

use crate::core::constants::exit_codes;

/// Why a reachability probe did not confirm the target URL
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReachabilityError {
    /// HTTP 403
    AccessForbidden,
    /// HTTP 404
    PageNotFound,
    /// HTTP 5xx, carrying the status code
    ServerError(u16),
    /// Any other non-200 status
    UnexpectedStatus(u16),
    TimedOut,
    TooManyRedirects,
    TlsVerificationFailed,
    /// Any other transport failure (DNS, refused connection, reset...)
    TransportFailed(String),
}

impl fmt::Display for ReachabilityError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReachabilityError::AccessForbidden => write!(f, "Access forbidden"),
            ReachabilityError::PageNotFound => write!(f, "Page not found"),
            ReachabilityError::ServerError(code) => {
                write!(f, "Server error occurred (status code: {code})")
            }
            ReachabilityError::UnexpectedStatus(code) => {
                write!(f, "Unexpected status code: {code}")
            }
            ReachabilityError::TimedOut => write!(f, "Request timed out"),
            ReachabilityError::TooManyRedirects => write!(f, "Too many redirects"),
            ReachabilityError::TlsVerificationFailed => write!(f, "SSL verification failed"),
            ReachabilityError::TransportFailed(detail) => write!(f, "Request failed: {detail}"),
        }
    }
}

impl std::error::Error for ReachabilityError {}

/// Outcome of an archive lookup that did not yield a snapshot URL
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupError {
    /// The service has no snapshot for the URL
    NotFound,
    /// HTTP 5xx from the archive service
    ServiceUnavailable(u16),
    /// Any other status the lookup does not understand
    UnexpectedResponse(u16),
    /// DNS, TLS, timeout or connection failure talking to the service
    CommunicationFailure(String),
    /// A snapshot was requested to be created, which is not supported
    CreationNotImplemented,
}

impl fmt::Display for LookupError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LookupError::NotFound => write!(f, "No archived version found"),
            LookupError::ServiceUnavailable(_) => write!(
                f,
                "Archive.is service is temporarily unavailable. Please try again later."
            ),
            LookupError::UnexpectedResponse(code) => write!(
                f,
                "Received unexpected response from archive.is (status code: {code}). \
                 Please try again or report this issue if it persists."
            ),
            LookupError::CommunicationFailure(detail) => {
                write!(f, "Failed to communicate with archive.is: {detail}")
            }
            LookupError::CreationNotImplemented => write!(
                f,
                "Archive creation is not yet implemented. \
                 Please try again later when this feature becomes available."
            ),
        }
    }
}

impl std::error::Error for LookupError {}

/// Errors raised by the domain blocklist API
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BlocklistError {
    /// Loading or saving the blocklist resource failed
    Config(String),
    /// The domain to remove is not in the list
    NotFound(String),
    /// The host could not be extracted from a URL
    Parse(String),
}

impl fmt::Display for BlocklistError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BlocklistError::Config(msg) => write!(f, "{msg}"),
            BlocklistError::NotFound(domain) => {
                write!(f, "Domain {domain} is not in the blocked list")
            }
            BlocklistError::Parse(msg) => write!(f, "Failed to parse URL: {msg}"),
        }
    }
}

impl std::error::Error for BlocklistError {}

/// The OS could not open a URL in the default browser
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BrowserError(pub String);

impl fmt::Display for BrowserError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::error::Error for BrowserError {}

/// Comprehensive error types for archivecli operations
#[derive(Debug)]
pub enum ArchiveCliError {
    /// URL is malformed or uses a scheme other than http/https
    InvalidFormat(String),

    /// URL host matches the domain blocklist
    DomainBlocked(String),

    /// Target URL could not be reached
    Reachability(ReachabilityError),

    /// Archive service lookup failed
    Lookup(LookupError),

    /// Browser launch failed
    Browser(BrowserError),

    /// Domain blocklist error
    Blocklist(BlocklistError),

    /// Configuration error
    Config(String),

    /// HTTP client construction error
    Http(reqwest::Error),

    /// IO error
    Io(std::io::Error),
}

impl ArchiveCliError {
    /// Map the error onto the process exit code reported by the CLI
    pub fn exit_code(&self) -> i32 {
        match self {
            ArchiveCliError::InvalidFormat(_)
            | ArchiveCliError::DomainBlocked(_)
            | ArchiveCliError::Blocklist(BlocklistError::Parse(_)) => exit_codes::INVALID_URL,
            ArchiveCliError::Reachability(_) => exit_codes::UNREACHABLE_URL,
            ArchiveCliError::Lookup(LookupError::NotFound) => exit_codes::ARCHIVE_NOT_FOUND,
            ArchiveCliError::Lookup(LookupError::ServiceUnavailable(_)) => {
                exit_codes::SERVICE_UNAVAILABLE
            }
            ArchiveCliError::Lookup(LookupError::CreationNotImplemented) => {
                exit_codes::CREATION_NOT_IMPLEMENTED
            }
            ArchiveCliError::Lookup(_) => exit_codes::ARCHIVE_SERVICE_ERROR,
            ArchiveCliError::Browser(_) => exit_codes::BROWSER_FAILURE,
            ArchiveCliError::Config(_) | ArchiveCliError::Blocklist(_) => {
                exit_codes::CONFIGURATION_ERROR
            }
            ArchiveCliError::Http(_) | ArchiveCliError::Io(_) => exit_codes::UNCLASSIFIED,
        }
    }
}

impl fmt::Display for ArchiveCliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArchiveCliError::InvalidFormat(msg) => write!(f, "{msg}"),
            ArchiveCliError::DomainBlocked(msg) => write!(f, "{msg}"),
            ArchiveCliError::Reachability(err) => write!(f, "{err}"),
            ArchiveCliError::Lookup(err) => write!(f, "{err}"),
            ArchiveCliError::Browser(err) => write!(f, "{err}"),
            ArchiveCliError::Blocklist(err) => write!(f, "{err}"),
            ArchiveCliError::Config(msg) => write!(f, "Configuration error: {msg}"),
            ArchiveCliError::Http(err) => write!(f, "HTTP error: {err}"),
            ArchiveCliError::Io(err) => write!(f, "IO error: {err}"),
        }
    }
}

impl std::error::Error for ArchiveCliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ArchiveCliError::Reachability(err) => Some(err),
            ArchiveCliError::Lookup(err) => Some(err),
            ArchiveCliError::Browser(err) => Some(err),
            ArchiveCliError::Blocklist(err) => Some(err),
            ArchiveCliError::Http(err) => Some(err),
            ArchiveCliError::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<ReachabilityError> for ArchiveCliError {
    fn from(err: ReachabilityError) -> Self {
        ArchiveCliError::Reachability(err)
    }
}

impl From<LookupError> for ArchiveCliError {
    fn from(err: LookupError) -> Self {
        ArchiveCliError::Lookup(err)
    }
}

impl From<BlocklistError> for ArchiveCliError {
    fn from(err: BlocklistError) -> Self {
        ArchiveCliError::Blocklist(err)
    }
}

impl From<BrowserError> for ArchiveCliError {
    fn from(err: BrowserError) -> Self {
        ArchiveCliError::Browser(err)
    }
}

impl From<reqwest::Error> for ArchiveCliError {
    fn from(err: reqwest::Error) -> Self {
        ArchiveCliError::Http(err)
    }
}

impl From<std::io::Error> for ArchiveCliError {
    fn from(err: std::io::Error) -> Self {
        ArchiveCliError::Io(err)
    }
}

/// Type alias for Results using ArchiveCliError
pub type Result<T> = std::result::Result<T, ArchiveCliError>;
