// src/error.rs
//! Typed errors for the driver layer and for a scrape run.

use std::io;

use thiserror::Error;

/// Failures reported by a [`Browser`](crate::browser::Browser) implementation.
#[derive(Debug, Error)]
pub enum DriverError {
    /// Nothing on the page matches the locator.
    #[error("no such element: {locator}")]
    NoSuchElement { locator: String },

    /// The element was found earlier but is no longer attached to the page.
    #[error("stale element reference")]
    StaleElement,

    /// Any other error reported by the WebDriver endpoint.
    #[error("webdriver error `{error}`: {message}")]
    Protocol { error: String, message: String },

    #[error("malformed webdriver response: {0}")]
    MalformedResponse(String),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl DriverError {
    /// True for "the element is not there (anymore)".
    pub fn is_missing(&self) -> bool {
        matches!(self, DriverError::NoSuchElement { .. } | DriverError::StaleElement)
    }
}

/// Errors that abort a run.
#[derive(Debug, Error)]
pub enum ScrapeError {
    /// Rejected before any browser was opened.
    #[error("{0}")]
    InvalidInvocation(String),

    /// A login control could not be found.
    #[error("login form incomplete: {0}")]
    LoginForm(#[source] DriverError),

    /// The login form is still showing after submitting credentials.
    #[error("login rejected: the login form is still present after submitting")]
    LoginRejected,

    #[error(transparent)]
    Driver(#[from] DriverError),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

pub type Result<T, E = ScrapeError> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_covers_not_found_and_stale() {
        assert!(DriverError::NoSuchElement { locator: ".x".into() }.is_missing());
        assert!(DriverError::StaleElement.is_missing());
        let other = DriverError::Protocol { error: "timeout".into(), message: "slow".into() };
        assert!(!other.is_missing());
    }

    #[test]
    fn invalid_invocation_displays_message_verbatim() {
        let e = ScrapeError::InvalidInvocation("pick one".into());
        assert_eq!(e.to_string(), "pick one");
    }
}
