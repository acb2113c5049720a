//! Reachability probe
//!
//! Issues a single HEAD request against the target, following redirects,
//! and turns the response (or transport error) into a verdict.

use async_trait::async_trait;
use reqwest::redirect::Policy;
use std::time::Duration;

use crate::core::constants::{http_status, timeouts};
use crate::core::error::{ReachabilityError, Result};
use crate::core::types::ReachabilityResult;

#[async_trait]
pub trait CheckReachability: Send + Sync {
    async fn check_reachability(
        &self,
        url: &str,
        timeout: Duration,
    ) -> std::result::Result<ReachabilityResult, ReachabilityError>;
}

/// Reachability checker backed by a `reqwest` client
#[derive(Debug, Clone)]
pub struct HttpReachabilityChecker {
    client: reqwest::Client,
}

impl HttpReachabilityChecker {
    /// Build a checker sending `user_agent`, or `archivecli/<version>` when `None`.
    pub fn new(user_agent: Option<&str>) -> Result<Self> {
        let user_agent = user_agent.unwrap_or(concat!(
            env!("CARGO_PKG_NAME"),
            "/",
            env!("CARGO_PKG_VERSION")
        ));

        let client = reqwest::Client::builder()
            .redirect(Policy::limited(timeouts::MAX_REDIRECTS))
            .user_agent(user_agent)
            .build()?;

        Ok(Self { client })
    }
}

#[async_trait]
impl CheckReachability for HttpReachabilityChecker {
    async fn check_reachability(
        &self,
        url: &str,
        timeout: Duration,
    ) -> std::result::Result<ReachabilityResult, ReachabilityError> {
        log::debug!("Probing {url} (timeout {}s)", timeout.as_secs_f64());

        let response = self
            .client
            .head(url)
            .timeout(timeout)
            .send()
            .await
            .map_err(|err| classify_transport_error(&err))?;

        let final_url = response.url().to_string();
        let status = response.status().as_u16();
        log::debug!("Probe of {url} returned {status} at {final_url}");

        classify_status(status, final_url)
    }
}

/// Map the probe's status code onto a verdict.
pub fn classify_status(
    status: u16,
    final_url: String,
) -> std::result::Result<ReachabilityResult, ReachabilityError> {
    match status {
        http_status::OK => Ok(ReachabilityResult::reachable(final_url)),
        http_status::FORBIDDEN => Err(ReachabilityError::AccessForbidden),
        http_status::NOT_FOUND => Err(ReachabilityError::PageNotFound),
        code if code >= http_status::SERVER_ERROR_MIN => Err(ReachabilityError::ServerError(code)),
        code => Err(ReachabilityError::UnexpectedStatus(code)),
    }
}

/// Map a transport failure onto a verdict.
pub fn classify_transport_error(err: &reqwest::Error) -> ReachabilityError {
    if err.is_timeout() {
        ReachabilityError::TimedOut
    } else if err.is_redirect() {
        ReachabilityError::TooManyRedirects
    } else if is_tls_failure(err) {
        ReachabilityError::TlsVerificationFailed
    } else {
        ReachabilityError::TransportFailed(describe(err))
    }
}

/// Innermost cause of an error, which carries the useful detail for reqwest errors.
pub(crate) fn describe(err: &(dyn std::error::Error + 'static)) -> String {
    let mut current = err;
    while let Some(source) = current.source() {
        current = source;
    }
    current.to_string()
}

/// Whether a rustls error sits anywhere in the cause chain of `err`.
///
/// `io::Error` hides a wrapped error from `source()`, so those are
/// unwrapped with `get_ref()` on the way down.
pub(crate) fn is_tls_failure(err: &(dyn std::error::Error + 'static)) -> bool {
    let mut current = Some(err);
    while let Some(e) = current {
        if e.is::<rustls::Error>() {
            return true;
        }
        if let Some(io_err) = e.downcast_ref::<std::io::Error>()
            && let Some(inner) = io_err.get_ref()
            && is_tls_failure(inner)
        {
            return true;
        }
        current = e.source();
    }
    false
}
