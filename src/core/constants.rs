/// Application-wide constants to avoid magic values throughout the codebase.
///
/// This module centralizes the service endpoints, header values, status codes
/// and exit codes used across the application.
/// HTTP status code constants
pub mod http_status {
    /// HTTP 200 OK - successful response
    pub const OK: u16 = 200;
    /// HTTP 403 Forbidden - access forbidden
    pub const FORBIDDEN: u16 = 403;
    /// HTTP 404 Not Found - resource not found
    pub const NOT_FOUND: u16 = 404;
    /// Lowest status code treated as a server-side failure
    pub const SERVER_ERROR_MIN: u16 = 500;
}

/// Timeout and redirect constants
pub mod timeouts {
    /// Default per-request timeout in seconds
    pub const DEFAULT_TIMEOUT_SECONDS: u64 = 10;
    /// Maximum accepted timeout in seconds (24 hours)
    pub const MAX_TIMEOUT_SECONDS: u64 = 86400;
    /// Redirect hops followed before giving up
    pub const MAX_REDIRECTS: usize = 10;
}

/// Archive service endpoint and request headers
pub mod archive {
    /// Base URL of the archive service
    pub const BASE_URL: &str = "https://archive.is";
    /// Search/submit endpoint, relative to the base URL
    pub const SUBMIT_ENDPOINT: &str = "submit/";
    /// Browser-like User-Agent sent to the archive service
    pub const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";
    pub const ACCEPT: &str =
        "text/html,application/xhtml+xml,application/xml;q=0.9,image/webp,*/*;q=0.8";
    pub const ACCEPT_LANGUAGE: &str = "en-US,en;q=0.5";
    pub const CONNECTION: &str = "keep-alive";
}

/// Domain blocklist defaults
pub mod blocklist {
    /// Domains blocked out of the box
    pub const DEFAULT_BLOCKED_DOMAINS: [&str; 6] = [
        "facebook.com",
        "twitter.com",
        "instagram.com",
        "linkedin.com",
        "accounts.google.com",
        "login.yahoo.com",
    ];
    /// Prefix stripped from hosts before matching
    pub const WWW_PREFIX: &str = "www.";
}

/// Allowed URL schemes
pub mod schemes {
    pub const HTTP: &str = "http";
    pub const HTTPS: &str = "https";
    pub const ALLOWED: [&str; 2] = [HTTP, HTTPS];
}

/// Configuration file locations
pub mod config_files {
    /// Name of the application config file searched for in standard locations
    pub const FILE_NAME: &str = ".archivecli.toml";
    /// How many parent directories are searched for the config file
    pub const MAX_PARENT_LEVELS: usize = 3;
}

/// Process exit codes reported by the `archive` binary
pub mod exit_codes {
    pub const SUCCESS: i32 = 0;
    pub const UNCLASSIFIED: i32 = 1;
    pub const INVALID_URL: i32 = 2;
    pub const UNREACHABLE_URL: i32 = 3;
    pub const ARCHIVE_NOT_FOUND: i32 = 4;
    pub const SERVICE_UNAVAILABLE: i32 = 5;
    pub const CREATION_NOT_IMPLEMENTED: i32 = 6;
    pub const ARCHIVE_SERVICE_ERROR: i32 = 7;
    pub const BROWSER_FAILURE: i32 = 8;
    pub const CONFIGURATION_ERROR: i32 = 9;
}

/// Validation error messages
pub mod error_messages {
    pub const INVALID_URL_FORMAT: &str = "Invalid URL format";
    pub const INVALID_SCHEME: &str = "URL must start with http:// or https://";
    pub const DOMAIN_BLOCKED: &str = "Domain is blocked";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_http_status_constants() {
        assert_eq!(http_status::OK, 200);
        assert_eq!(http_status::FORBIDDEN, 403);
        assert_eq!(http_status::NOT_FOUND, 404);
        assert_eq!(http_status::SERVER_ERROR_MIN, 500);
    }

    #[test]
    fn test_timeout_constants() {
        assert_eq!(timeouts::DEFAULT_TIMEOUT_SECONDS, 10);
        assert!(timeouts::MAX_TIMEOUT_SECONDS > timeouts::DEFAULT_TIMEOUT_SECONDS);
    }

    #[test]
    fn test_exit_codes_are_distinct() {
        let codes = [
            exit_codes::SUCCESS,
            exit_codes::UNCLASSIFIED,
            exit_codes::INVALID_URL,
            exit_codes::UNREACHABLE_URL,
            exit_codes::ARCHIVE_NOT_FOUND,
            exit_codes::SERVICE_UNAVAILABLE,
            exit_codes::CREATION_NOT_IMPLEMENTED,
            exit_codes::ARCHIVE_SERVICE_ERROR,
            exit_codes::BROWSER_FAILURE,
            exit_codes::CONFIGURATION_ERROR,
        ];
        for (i, a) in codes.iter().enumerate() {
            for b in &codes[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn test_default_blocked_domains_are_lowercase() {
        for domain in blocklist::DEFAULT_BLOCKED_DOMAINS {
            assert_eq!(domain, domain.to_lowercase());
        }
    }
}
