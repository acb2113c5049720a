//! Configuration management
//!
//! This module handles loading and managing configuration from
//! TOML files and CLI arguments.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::core::constants::{archive, config_files, schemes, timeouts};
use crate::core::error::{ArchiveCliError, Result};
use crate::validation::DomainBlocklist;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Timeout in seconds for each HTTP request
    pub timeout: Option<u64>,

    /// User-Agent sent with the reachability probe
    pub user_agent: Option<String>,

    /// Base URL of the archive service
    pub archive_url: Option<String>,

    /// Check URLs against the domain blocklist
    pub use_blocklist: Option<bool>,

    /// Blocklist resource (JSON or TOML) loaded on start
    pub blocklist_file: Option<String>,

    /// Extra domains to block
    pub blocked_domains: Option<Vec<String>>,

    /// Enable verbose logging
    pub verbose: Option<bool>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            timeout: Some(timeouts::DEFAULT_TIMEOUT_SECONDS),
            user_agent: None, // archivecli/<version>
            archive_url: Some(archive::BASE_URL.to_string()),
            use_blocklist: Some(true),
            blocklist_file: None,
            blocked_domains: None,
            verbose: Some(false),
        }
    }
}

impl Config {
    /// Load configuration from file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            ArchiveCliError::Config(format!(
                "Could not read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| {
            ArchiveCliError::Config(format!(
                "Invalid TOML in config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Find the config file in the current directory or up to three parents
    pub fn find_in_standard_locations() -> Option<PathBuf> {
        (0..=config_files::MAX_PARENT_LEVELS)
            .map(|level| PathBuf::from(format!("{}{}", "../".repeat(level), config_files::FILE_NAME)))
            .find(|path| path.is_file())
    }

    /// Try to find and load a config file in standard locations, falling back to defaults
    pub fn load_from_standard_locations() -> Result<Self> {
        match Self::find_in_standard_locations() {
            Some(path) => {
                log::debug!("Using config file {}", path.display());
                Self::load_from_file(path)
            }
            None => Ok(Self::default()),
        }
    }

    /// Merge this config with CLI arguments (CLI takes precedence)
    pub fn merge_with_cli(&mut self, cli_config: &CliConfig) {
        if let Some(timeout) = cli_config.timeout {
            self.timeout = Some(timeout);
        }
        if let Some(ref user_agent) = cli_config.user_agent {
            self.user_agent = Some(user_agent.clone());
        }
        if let Some(ref archive_url) = cli_config.archive_url {
            self.archive_url = Some(archive_url.clone());
        }
        if cli_config.no_blocklist {
            self.use_blocklist = Some(false);
        }
        if let Some(ref blocklist_file) = cli_config.blocklist_file {
            self.blocklist_file = Some(blocklist_file.clone());
        }
        if !cli_config.block.is_empty() {
            self.blocked_domains
                .get_or_insert_with(Vec::new)
                .extend(cli_config.block.iter().cloned());
        }
        if cli_config.verbose {
            self.verbose = Some(true);
        }
    }

    /// Get timeout as Duration
    pub fn timeout_duration(&self) -> Duration {
        Duration::from_secs(self.timeout.unwrap_or(timeouts::DEFAULT_TIMEOUT_SECONDS))
    }

    pub fn archive_base_url(&self) -> &str {
        self.archive_url.as_deref().unwrap_or(archive::BASE_URL)
    }

    /// Build the domain blocklist: defaults, then `blocklist_file`, then `blocked_domains`
    pub fn build_blocklist(&self) -> Result<DomainBlocklist> {
        let mut blocklist = DomainBlocklist::new();
        if let Some(ref path) = self.blocklist_file {
            blocklist.load(path)?;
        }
        for domain in self.blocked_domains.iter().flatten() {
            blocklist.add(domain);
        }
        Ok(blocklist)
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if let Some(timeout) = self.timeout {
            if timeout == 0 {
                return Err(ArchiveCliError::Config(
                    "Timeout cannot be 0. Expected a positive integer representing seconds."
                        .to_string(),
                ));
            }
            if timeout > timeouts::MAX_TIMEOUT_SECONDS {
                return Err(ArchiveCliError::Config(format!(
                    "Timeout of {timeout} seconds is extremely large (>24 hours). Consider using a smaller value."
                )));
            }
        }

        if let Some(ref user_agent) = self.user_agent
            && user_agent.trim().is_empty()
        {
            return Err(ArchiveCliError::Config(
                "User agent cannot be empty.".to_string(),
            ));
        }

        if let Some(ref archive_url) = self.archive_url {
            let valid = url::Url::parse(archive_url)
                .map(|u| schemes::ALLOWED.contains(&u.scheme()) && u.host_str().is_some())
                .unwrap_or(false);
            if !valid {
                return Err(ArchiveCliError::Config(format!(
                    "Archive URL '{archive_url}' is invalid. Expected an http:// or https:// URL."
                )));
            }
        }

        Ok(())
    }
}

/// Configuration options that can come from CLI
#[derive(Debug, Default)]
pub struct CliConfig {
    pub timeout: Option<u64>,            // --timeout
    pub user_agent: Option<String>,      // --user-agent
    pub archive_url: Option<String>,     // --archive-url
    pub no_blocklist: bool,              // --no-blocklist
    pub blocklist_file: Option<String>,  // --blocklist
    pub block: Vec<String>,              // --block
    pub quiet: bool,                     // --quiet
    pub verbose: bool,                   // --verbose
    pub config_file: Option<String>,     // --config
    pub no_config: bool,                 // --no-config
}
