use async_trait::async_trait;
use reqwest::header::{ACCEPT, ACCEPT_LANGUAGE, CONNECTION, HeaderMap, HeaderValue};
use reqwest::redirect::Policy;
use std::time::Duration;
use url::Url;

use crate::core::constants::{archive, http_status, timeouts};
use crate::core::error::{ArchiveCliError, LookupError, Result};
use crate::core::types::ArchiveLookupResult;
use crate::validation::reachability::describe;

#[async_trait]
pub trait LookupArchive: Send + Sync {
    /// Find the most recent snapshot of `url`.
    async fn lookup(&self, url: &str, timeout: Duration) -> ArchiveLookupResult;

    /// Find the most recent snapshot, or report that creating one is unsupported.
    async fn get_or_create(&self, url: &str, timeout: Duration) -> ArchiveLookupResult {
        match self.lookup(url, timeout).await {
            Err(LookupError::NotFound) => {
                log::info!(
                    "No existing archive found for {url}, attempting to create new archive..."
                );
                Err(LookupError::CreationNotImplemented)
            }
            other => other,
        }
    }
}

/// Client for the archive service's search endpoint
#[derive(Debug, Clone)]
pub struct ArchiveClient {
    client: reqwest::Client,
    base_url: Url,
}

impl ArchiveClient {
    /// Client for the public archive service
    pub fn new() -> Result<Self> {
        Self::with_base_url(archive::BASE_URL)
    }

    /// Client for a service hosted at `base_url` (mirrors, tests)
    pub fn with_base_url(base_url: &str) -> Result<Self> {
        let base_url = Url::parse(base_url).map_err(|e| {
            ArchiveCliError::Config(format!("Invalid archive URL '{base_url}': {e}"))
        })?;

        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static(archive::ACCEPT));
        headers.insert(
            ACCEPT_LANGUAGE,
            HeaderValue::from_static(archive::ACCEPT_LANGUAGE),
        );
        headers.insert(CONNECTION, HeaderValue::from_static(archive::CONNECTION));

        let client = reqwest::Client::builder()
            .redirect(Policy::limited(timeouts::MAX_REDIRECTS))
            .user_agent(archive::USER_AGENT)
            .default_headers(headers)
            .build()?;

        Ok(Self { client, base_url })
    }

    /// Search URL for `url`: every reserved character is percent-encoded,
    /// including `/` and `:`.
    pub fn construct_search_url(&self, url: &str) -> String {
        format!(
            "{}/{}?url={}",
            self.base_url.as_str().trim_end_matches('/'),
            archive::SUBMIT_ENDPOINT,
            urlencoding::encode(url)
        )
    }

    fn archive_host(&self) -> Option<&str> {
        self.base_url.host_str()
    }
}

#[async_trait]
impl LookupArchive for ArchiveClient {
    async fn lookup(&self, url: &str, timeout: Duration) -> ArchiveLookupResult {
        let search_url = self.construct_search_url(url);
        log::debug!("Constructed search URL: {search_url}");

        let response = self
            .client
            .get(&search_url)
            .timeout(timeout)
            .send()
            .await
            .map_err(|err| LookupError::CommunicationFailure(describe(&err)))?;

        let status = response.status().as_u16();
        log::debug!("Received response with status code: {status}");

        let search_url = Url::parse(&search_url)
            .map_err(|e| LookupError::CommunicationFailure(e.to_string()))?;
        let outcome = classify_response(status, response.url(), &search_url, self.archive_host());

        match &outcome {
            Ok(found) => log::debug!("Found archive at: {found}"),
            Err(LookupError::NotFound) => log::warn!("No archive found for URL: {url}"),
            Err(LookupError::ServiceUnavailable(_)) => {
                log::error!("Archive service returned server error")
            }
            Err(err) => log::error!("{err}"),
        }
        outcome
    }
}

/// Classify the archive service's response.
///
/// A 200 only counts as a snapshot when the request was redirected away from
/// the search URL and stayed on the archive host.
pub fn classify_response(
    status: u16,
    final_url: &Url,
    search_url: &Url,
    archive_host: Option<&str>,
) -> ArchiveLookupResult {
    match status {
        http_status::OK => {
            let on_archive_host = archive_host.is_some() && final_url.host_str() == archive_host;
            if on_archive_host && final_url != search_url {
                Ok(final_url.to_string())
            } else {
                Err(LookupError::NotFound)
            }
        }
        http_status::NOT_FOUND => Err(LookupError::NotFound),
        code if code >= http_status::SERVER_ERROR_MIN => Err(LookupError::ServiceUnavailable(code)),
        code => Err(LookupError::UnexpectedResponse(code)),
    }
}
