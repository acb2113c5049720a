//! End-to-end workflow: validate a URL, find its latest snapshot and open it.

use std::time::Duration;

use crate::archive::LookupArchive;
use crate::browser::OpenBrowser;
use crate::core::constants::timeouts;
use crate::core::error::Result;
use crate::core::types::LookupMode;
use crate::validation::{CheckReachability, DomainBlocklist, validate_for_archiving};

pub struct Archiver {
    checker: Box<dyn CheckReachability>,
    archive: Box<dyn LookupArchive>,
    browser: Box<dyn OpenBrowser>,
    blocklist: Option<DomainBlocklist>,
    timeout: Duration,
    mode: LookupMode,
}

impl Archiver {
    pub fn new(
        checker: Box<dyn CheckReachability>,
        archive: Box<dyn LookupArchive>,
        browser: Box<dyn OpenBrowser>,
    ) -> Self {
        Self {
            checker,
            archive,
            browser,
            blocklist: None,
            timeout: Duration::from_secs(timeouts::DEFAULT_TIMEOUT_SECONDS),
            mode: LookupMode::default(),
        }
    }

    /// Reject URLs whose host matches `blocklist` before probing them
    pub fn with_blocklist(mut self, blocklist: DomainBlocklist) -> Self {
        self.blocklist = Some(blocklist);
        self
    }

    /// Per-request timeout applied to each network call
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_mode(mut self, mode: LookupMode) -> Self {
        self.mode = mode;
        self
    }

    /// Validate `url` and return the URL of its most recent snapshot.
    pub async fn find_archive(&self, url: &str) -> Result<String> {
        log::info!("Validating URL: {url}");
        let validated_url = validate_for_archiving(
            url,
            self.timeout,
            self.blocklist.as_ref(),
            self.checker.as_ref(),
        )
        .await?;
        log::debug!("URL validated successfully: {validated_url}");

        log::info!("Searching for archived version...");
        let archive_url = match self.mode {
            LookupMode::Latest => self.archive.lookup(&validated_url, self.timeout).await?,
            LookupMode::GetOrCreate => {
                self.archive
                    .get_or_create(&validated_url, self.timeout)
                    .await?
            }
        };
        log::debug!("Found archive URL: {archive_url}");
        Ok(archive_url)
    }

    /// Find the most recent snapshot of `url` and open it in the browser.
    ///
    /// Returns the URL that was opened. A launcher failure ends the run.
    pub async fn archive_url(&self, url: &str) -> Result<String> {
        let archive_url = self.find_archive(url).await?;

        log::info!("Opening archived version: {archive_url}");
        self.browser.open(&archive_url)?;

        log::info!("Operation completed successfully");
        Ok(archive_url)
    }
}
