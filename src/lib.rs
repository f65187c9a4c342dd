// src/lib.rs
//! Letter-by-letter scraper for authenticated contact directories.
//!
//! ```text
//! runner::run ─ login ─┬─ scrape::scrape_letter (A) ─ specs::contacts ─ store
//!                      ├─ scrape::scrape_letter (B) ...
//!                      └─ file::export_store ─ table ─ <L>.csv | contacts[-N].csv
//! ```

pub mod browser;
pub mod config;
pub mod core;
pub mod error;
pub mod file;
pub mod log;
pub mod progress;
pub mod runner;
pub mod scrape;
pub mod specs;
pub mod store;
pub mod table;

#[cfg(feature = "cli")]
pub mod cli;

pub use browser::{Browser, BrowserGuard, ElementRef, Locator};
pub use config::{AppOptions, Credentials};
pub use error::{DriverError, ScrapeError};
pub use runner::{run, LetterSelection, RunSummary};
pub use store::{ContactStore, Letter, LetterBucket, Record};
