//! Opening URLs in the user's default browser

use crate::core::constants::error_messages;
use crate::core::error::BrowserError;
use crate::validation::syntax;

pub trait OpenBrowser: Send + Sync {
    fn open(&self, url: &str) -> Result<(), BrowserError>;
}

/// Launcher backed by the operating system's URL handler
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemBrowser;

impl OpenBrowser for SystemBrowser {
    fn open(&self, url: &str) -> Result<(), BrowserError> {
        if !syntax::is_well_formed(url) {
            return Err(BrowserError(error_messages::INVALID_URL_FORMAT.to_string()));
        }

        webbrowser::open(url).map_err(|e| {
            log::error!("Browser error: {e}");
            BrowserError(format!("Browser error: {e}"))
        })
    }
}
