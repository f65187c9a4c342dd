// src/config/options.rs
use std::fmt;
use std::path::PathBuf;
use std::time::Duration;

use super::consts::*;
use crate::store::Letter;

#[derive(Clone, Debug, Default)]
pub struct AppOptions {
    pub scrape: ScrapeOptions,
    pub export: ExportOptions,
    pub browser: BrowserOptions,
}

/// Login identifier + secret. Fixed once constructed.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    username: String,
    password: String,
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self { username: username.into(), password: password.into() }
    }
    pub fn username(&self) -> &str { &self.username }
    pub fn password(&self) -> &str { &self.password }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScrapeOptions {
    /// Listing URL with a `{letter}` placeholder.
    pub listing_url: String,
    pub page_settle: Duration,
    pub letter_settle: Duration,
    pub login_settle: Duration,
    /// Upper bound on pages walked per letter.
    pub max_pages: usize,
    /// Fail the run if the login form is still showing after submit.
    pub verify_login: bool,
    /// Also extract the page that has no "next" control.
    pub extract_final_page: bool,
}

impl Default for ScrapeOptions {
    fn default() -> Self {
        Self {
            listing_url: LISTING_URL.to_string(),
            page_settle: Duration::from_millis(PAGE_SETTLE_MS),
            letter_settle: Duration::from_millis(LETTER_SETTLE_MS),
            login_settle: Duration::from_millis(LOGIN_SETTLE_MS),
            max_pages: MAX_PAGES,
            verify_login: true,
            extract_final_page: false,
        }
    }
}

impl ScrapeOptions {
    pub fn listing_url_for(&self, letter: Letter) -> String {
        self.listing_url.replace(LETTER_PLACEHOLDER, &letter.to_string())
    }

    /// No pauses at all. Handy for local fixtures.
    pub fn without_pauses(mut self) -> Self {
        self.page_settle = Duration::ZERO;
        self.letter_settle = Duration::ZERO;
        self.login_settle = Duration::ZERO;
        self
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExportOptions {
    pub out_dir: PathBuf,
    /// Leading unnamed index column (position inside the letter bucket).
    pub include_index: bool,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            out_dir: PathBuf::from(DEFAULT_OUT_DIR),
            include_index: true,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BrowserKind {
    Firefox,
    Chrome,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BrowserOptions {
    pub webdriver_url: String,
    pub kind: BrowserKind,
    pub headless: bool,
    pub timeout: Duration,
}

impl Default for BrowserOptions {
    fn default() -> Self {
        Self {
            webdriver_url: DEFAULT_WEBDRIVER_URL.to_string(),
            kind: BrowserKind::Firefox,
            headless: false,
            timeout: Duration::from_secs(WEBDRIVER_TIMEOUT_SECS),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn listing_url_substitutes_letter() {
        let opts = ScrapeOptions::default();
        let url = opts.listing_url_for(Letter::new('E').unwrap());
        assert!(url.contains("_alpha=E&"));
        assert!(!url.contains(LETTER_PLACEHOLDER));
    }

    #[test]
    fn credentials_debug_hides_secret() {
        let c = Credentials::new("me@example.org", "hunter2");
        let dbg = format!("{c:?}");
        assert!(dbg.contains("me@example.org"));
        assert!(!dbg.contains("hunter2"));
    }
}
