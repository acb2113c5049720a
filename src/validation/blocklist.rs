//! Domain blocklist
//!
//! A set of lowercase domain substrings checked against a URL's host
//! before any network request is made. Matching is substring based, so
//! `facebook.com` also blocks `notfacebook.com`.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use url::{Host, Url};

use crate::core::constants::blocklist::{DEFAULT_BLOCKED_DOMAINS, WWW_PREFIX};
use crate::core::error::BlocklistError;

/// On-disk shape of a blocklist resource
#[derive(Debug, Default, Serialize, Deserialize)]
struct BlocklistFile {
    #[serde(default)]
    blocked_domains: Vec<String>,
}

/// Serialization format of a blocklist resource, picked from the file extension
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ResourceFormat {
    Json,
    Toml,
}

impl ResourceFormat {
    fn for_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("toml") => ResourceFormat::Toml,
            _ => ResourceFormat::Json,
        }
    }
}

#[derive(Debug, Clone)]
pub struct DomainBlocklist {
    domains: FxHashSet<String>,
}

impl Default for DomainBlocklist {
    fn default() -> Self {
        Self {
            domains: DEFAULT_BLOCKED_DOMAINS
                .iter()
                .map(|domain| domain.to_string())
                .collect(),
        }
    }
}

impl DomainBlocklist {
    /// Blocklist seeded with the default domains
    pub fn new() -> Self {
        Self::default()
    }

    /// Blocklist seeded with the defaults and extended from `path`
    pub fn with_config<P: AsRef<Path>>(path: P) -> Result<Self, BlocklistError> {
        let mut blocklist = Self::default();
        blocklist.load(path)?;
        Ok(blocklist)
    }

    /// Add the domains listed in `path` to the current set.
    pub fn load<P: AsRef<Path>>(&mut self, path: P) -> Result<(), BlocklistError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            BlocklistError::Config(format!(
                "Failed to load configuration from '{}': {}",
                path.display(),
                e
            ))
        })?;

        let parsed: BlocklistFile = match ResourceFormat::for_path(path) {
            ResourceFormat::Json => serde_json::from_str(&content).map_err(|e| e.to_string()),
            ResourceFormat::Toml => toml::from_str(&content).map_err(|e| e.to_string()),
        }
        .map_err(|e| {
            BlocklistError::Config(format!(
                "Failed to load configuration from '{}': {}",
                path.display(),
                e
            ))
        })?;

        let before = self.domains.len();
        for domain in parsed.blocked_domains {
            self.add(&domain);
        }
        log::debug!(
            "Loaded {} new blocked domain(s) from {}",
            self.domains.len() - before,
            path.display()
        );
        Ok(())
    }

    /// Write the full current set to `path`.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), BlocklistError> {
        let path = path.as_ref();
        let resource = BlocklistFile {
            blocked_domains: self.sorted(),
        };

        let content = match ResourceFormat::for_path(path) {
            ResourceFormat::Json => {
                serde_json::to_string_pretty(&resource).map_err(|e| e.to_string())
            }
            ResourceFormat::Toml => toml::to_string_pretty(&resource).map_err(|e| e.to_string()),
        }
        .map_err(|e| {
            BlocklistError::Config(format!(
                "Failed to save configuration to '{}': {}",
                path.display(),
                e
            ))
        })?;

        fs::write(path, content).map_err(|e| {
            BlocklistError::Config(format!(
                "Failed to save configuration to '{}': {}",
                path.display(),
                e
            ))
        })
    }

    /// Check whether the host of `url` contains any blocked domain.
    pub fn is_blocked(&self, url: &str) -> Result<bool, BlocklistError> {
        let parsed = Url::parse(url).map_err(|e| BlocklistError::Parse(e.to_string()))?;
        let host = parsed
            .host_str()
            .filter(|host| !host.is_empty())
            .ok_or_else(|| BlocklistError::Parse(format!("no host in '{url}'")))?
            .to_lowercase();
        let host = host.strip_prefix(WWW_PREFIX).unwrap_or(&host);

        Ok(self
            .domains
            .iter()
            .any(|blocked| host.contains(blocked.as_str())))
    }

    /// Block `domain`. Internationalized names are stored in their ASCII
    /// (punycode) form, which is what parsed URL hosts carry.
    pub fn add(&mut self, domain: &str) {
        self.domains.insert(normalize_domain(domain));
    }

    pub fn remove(&mut self, domain: &str) -> Result<(), BlocklistError> {
        if self.domains.remove(&normalize_domain(domain)) {
            Ok(())
        } else {
            Err(BlocklistError::NotFound(domain.to_string()))
        }
    }

    /// Copy of the current set
    pub fn snapshot(&self) -> FxHashSet<String> {
        self.domains.clone()
    }

    /// Current set in lexical order
    pub fn sorted(&self) -> Vec<String> {
        let mut domains: Vec<String> = self.domains.iter().cloned().collect();
        domains.sort();
        domains
    }

    pub fn len(&self) -> usize {
        self.domains.len()
    }

    pub fn is_empty(&self) -> bool {
        self.domains.is_empty()
    }
}

/// Lowercase ASCII form of a blocklist entry.
///
/// Entries that are not valid domain names (fragments, IP literals) are
/// only lowercased.
fn normalize_domain(domain: &str) -> String {
    match Host::parse(domain) {
        Ok(Host::Domain(ascii)) => ascii,
        _ => domain.to_lowercase(),
    }
}
