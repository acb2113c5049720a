//! Validation pipeline run before every archive lookup

use std::time::Duration;

use crate::core::constants::error_messages;
use crate::core::error::{ArchiveCliError, Result};
use crate::validation::blocklist::DomainBlocklist;
use crate::validation::reachability::CheckReachability;
use crate::validation::syntax;

/// Validate a URL for archiving and return its post-redirect form.
///
/// Steps run in order and stop at the first failure: format, scheme,
/// blocklist (when given), then the reachability probe. Nothing touches the
/// network before the probe.
pub async fn validate_for_archiving<C>(
    url: &str,
    timeout: Duration,
    blocklist: Option<&DomainBlocklist>,
    checker: &C,
) -> Result<String>
where
    C: CheckReachability + ?Sized,
{
    syntax::validate(url)?;

    if let Some(blocklist) = blocklist
        && blocklist.is_blocked(url)?
    {
        log::debug!("{url} matches the domain blocklist");
        return Err(ArchiveCliError::DomainBlocked(
            error_messages::DOMAIN_BLOCKED.to_string(),
        ));
    }

    let result = checker.check_reachability(url, timeout).await?;
    if result.final_url != url {
        log::debug!("{url} redirected to {}", result.final_url);
    }
    Ok(result.final_url)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::ReachabilityError;
    use crate::core::types::ReachabilityResult;
    use async_trait::async_trait;
    use std::sync::Mutex;

    const TIMEOUT: Duration = Duration::from_secs(10);

    /// Records probed URLs and answers with a fixed outcome
    struct FakeChecker {
        outcome: std::result::Result<ReachabilityResult, ReachabilityError>,
        calls: Mutex<Vec<String>>,
    }

    impl FakeChecker {
        fn answering(
            outcome: std::result::Result<ReachabilityResult, ReachabilityError>,
        ) -> Self {
            Self {
                outcome,
                calls: Mutex::new(Vec::new()),
            }
        }

        fn calls(&self) -> Vec<String> {
            self.calls.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl CheckReachability for FakeChecker {
        async fn check_reachability(
            &self,
            url: &str,
            _timeout: Duration,
        ) -> std::result::Result<ReachabilityResult, ReachabilityError> {
            self.calls.lock().unwrap().push(url.to_string());
            self.outcome.clone()
        }
    }

    #[tokio::test]
    async fn test_returns_post_redirect_url() {
        let checker = FakeChecker::answering(Ok(ReachabilityResult::reachable(
            "https://www.example.com/",
        )));

        let actual = validate_for_archiving("https://example.com", TIMEOUT, None, &checker).await;

        assert_eq!(actual.ok(), Some("https://www.example.com/".to_string()));
        assert_eq!(checker.calls(), vec!["https://example.com".to_string()]);
    }

    #[tokio::test]
    async fn test_invalid_format_makes_no_network_call() {
        let checker = FakeChecker::answering(Ok(ReachabilityResult::reachable("unused")));

        let actual = validate_for_archiving("not_a_url", TIMEOUT, None, &checker).await;

        match actual {
            Err(ArchiveCliError::InvalidFormat(msg)) => assert_eq!(msg, "Invalid URL format"),
            other => panic!("expected InvalidFormat, got {other:?}"),
        }
        assert!(checker.calls().is_empty());
    }

    #[tokio::test]
    async fn test_invalid_scheme_makes_no_network_call() {
        let checker = FakeChecker::answering(Ok(ReachabilityResult::reachable("unused")));

        let actual = validate_for_archiving("ftp://x.com", TIMEOUT, None, &checker).await;

        match actual {
            Err(ArchiveCliError::InvalidFormat(msg)) => {
                assert_eq!(msg, "URL must start with http:// or https://")
            }
            other => panic!("expected InvalidFormat, got {other:?}"),
        }
        assert!(checker.calls().is_empty());
    }

    #[tokio::test]
    async fn test_blocked_domain_makes_no_network_call() {
        let checker = FakeChecker::answering(Ok(ReachabilityResult::reachable("unused")));
        let blocklist = DomainBlocklist::new();

        let actual = validate_for_archiving(
            "https://www.facebook.com/x",
            TIMEOUT,
            Some(&blocklist),
            &checker,
        )
        .await;

        assert!(matches!(actual, Err(ArchiveCliError::DomainBlocked(_))));
        assert!(checker.calls().is_empty());
    }

    #[tokio::test]
    async fn test_blocklist_is_optional() {
        let checker = FakeChecker::answering(Ok(ReachabilityResult::reachable(
            "https://facebook.com/",
        )));

        let actual = validate_for_archiving("https://facebook.com", TIMEOUT, None, &checker).await;

        assert!(actual.is_ok());
        assert_eq!(checker.calls().len(), 1);
    }

    #[tokio::test]
    async fn test_reachability_error_propagates() {
        let checker = FakeChecker::answering(Err(ReachabilityError::PageNotFound));
        let blocklist = DomainBlocklist::new();

        let actual = validate_for_archiving(
            "https://example.com/missing",
            TIMEOUT,
            Some(&blocklist),
            &checker,
        )
        .await;

        assert!(matches!(
            actual,
            Err(ArchiveCliError::Reachability(ReachabilityError::PageNotFound))
        ));
    }
}
