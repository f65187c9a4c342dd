// src/browser.rs
//! The seam between scraping logic and whatever drives the page.
//!
//! [`Browser`] is the small subset of WebDriver the scraper needs. The real
//! implementation lives in `core::webdriver`; tests plug in an in-memory page.

use std::fmt;
use std::ops::{Deref, DerefMut};

use tracing::{debug, warn};

use crate::error::DriverError;

/// How to find an element on the rendered page.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Locator {
    XPath(String),
    Css(String),
}

impl Locator {
    pub fn xpath(s: impl Into<String>) -> Self { Locator::XPath(s.into()) }
    pub fn css(s: impl Into<String>) -> Self { Locator::Css(s.into()) }

    /// WebDriver location strategy name.
    pub fn strategy(&self) -> &'static str {
        match self {
            Locator::XPath(_) => "xpath",
            Locator::Css(_) => "css selector",
        }
    }

    pub fn value(&self) -> &str {
        match self {
            Locator::XPath(s) | Locator::Css(s) => s,
        }
    }
}

impl fmt::Display for Locator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.strategy(), self.value())
    }
}

/// Opaque handle to an element, valid until the page changes.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ElementRef(pub String);

pub trait Browser {
    fn goto(&mut self, url: &str) -> Result<(), DriverError>;

    /// First match, or `DriverError::NoSuchElement`.
    fn find(&mut self, locator: &Locator) -> Result<ElementRef, DriverError>;

    /// All matches; empty when nothing matches.
    fn find_all(&mut self, locator: &Locator) -> Result<Vec<ElementRef>, DriverError>;

    fn send_keys(&mut self, element: &ElementRef, text: &str) -> Result<(), DriverError>;
    fn click(&mut self, element: &ElementRef) -> Result<(), DriverError>;

    /// Rendered text of the element.
    fn text(&mut self, element: &ElementRef) -> Result<String, DriverError>;

    /// End the browser session.
    fn quit(&mut self) -> Result<(), DriverError>;
}

impl<B: Browser + ?Sized> Browser for Box<B> {
    fn goto(&mut self, url: &str) -> Result<(), DriverError> { (**self).goto(url) }
    fn find(&mut self, locator: &Locator) -> Result<ElementRef, DriverError> { (**self).find(locator) }
    fn find_all(&mut self, locator: &Locator) -> Result<Vec<ElementRef>, DriverError> { (**self).find_all(locator) }
    fn send_keys(&mut self, element: &ElementRef, text: &str) -> Result<(), DriverError> { (**self).send_keys(element, text) }
    fn click(&mut self, element: &ElementRef) -> Result<(), DriverError> { (**self).click(element) }
    fn text(&mut self, element: &ElementRef) -> Result<String, DriverError> { (**self).text(element) }
    fn quit(&mut self) -> Result<(), DriverError> { (**self).quit() }
}

/// Presence probe: does `locator` match anything right now?
///
/// Only "no such element" maps to `false`. Every other failure is returned.
pub fn is_present<B: Browser + ?Sized>(browser: &mut B, locator: &Locator) -> Result<bool, DriverError> {
    match browser.find(locator) {
        Ok(_) => Ok(true),
        Err(DriverError::NoSuchElement { .. }) => Ok(false),
        Err(e) => Err(e),
    }
}

/// Probe, then read text. Absent -> `None`.
pub fn text_if_present<B: Browser + ?Sized>(
    browser: &mut B,
    locator: &Locator,
) -> Result<Option<String>, DriverError> {
    if !is_present(browser, locator)? {
        return Ok(None);
    }
    let el = browser.find(locator)?;
    browser.text(&el).map(Some)
}

/// Owns a browser session and quits it on every exit path.
///
/// Use [`BrowserGuard::close`] on the happy path to see the quit result;
/// otherwise `Drop` quits and logs any failure.
pub struct BrowserGuard<B: Browser> {
    inner: B,
    closed: bool,
}

impl<B: Browser> BrowserGuard<B> {
    pub fn new(browser: B) -> Self {
        Self { inner: browser, closed: false }
    }

    pub fn close(mut self) -> Result<(), DriverError> {
        self.closed = true;
        debug!("Closing browser session");
        self.inner.quit()
    }
}

impl<B: Browser> Deref for BrowserGuard<B> {
    type Target = B;
    fn deref(&self) -> &B { &self.inner }
}

impl<B: Browser> DerefMut for BrowserGuard<B> {
    fn deref_mut(&mut self) -> &mut B { &mut self.inner }
}

impl<B: Browser> Drop for BrowserGuard<B> {
    fn drop(&mut self) {
        if self.closed { return; }
        self.closed = true;
        debug!("Releasing browser session on early exit");
        if let Err(e) = self.inner.quit() {
            warn!("Failed to quit browser session: {e}");
        }
    }
}
