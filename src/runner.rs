// src/runner.rs
use std::path::PathBuf;
use std::thread;

use tracing::{debug, info, warn};

use crate::{
    browser::{Browser, BrowserGuard},
    config::options::{AppOptions, Credentials},
    error::{DriverError, Result, ScrapeError},
    file,
    progress::{NullProgress, Progress},
    scrape::{self, LetterReport},
    store::{ContactStore, Letter},
    table::ExportScope,
};

pub const MIXED_SELECTION_MSG: &str =
    "Choose either a single letter or a first letter range to search from";

/// Which letters to walk: a range (`first..=last`) or one `letter`.
/// `letter` together with a non-default `first` is refused.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LetterSelection {
    pub first: Letter,
    pub last: Letter,
    pub letter: Option<Letter>,
}

impl Default for LetterSelection {
    fn default() -> Self {
        Self { first: Letter::A, last: Letter::Z, letter: None }
    }
}

/// A validated selection.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Plan {
    pub letters: Vec<Letter>,
    pub scope: ExportScope,
}

impl LetterSelection {
    pub fn single(letter: Letter) -> Self {
        Self { letter: Some(letter), ..Self::default() }
    }

    pub fn range(first: Letter, last: Letter) -> Self {
        Self { first, last, letter: None }
    }

    pub fn plan(&self) -> Result<Plan> {
        match self.letter {
            Some(_) if self.first != Letter::A => {
                Err(ScrapeError::InvalidInvocation(MIXED_SELECTION_MSG.to_string()))
            }
            Some(l) => Ok(Plan { letters: vec![l], scope: ExportScope::Letter(l) }),
            None if self.first > self.last => Err(ScrapeError::InvalidInvocation(format!(
                "First letter {} comes after last letter {}",
                self.first, self.last
            ))),
            None => Ok(Plan {
                letters: Letter::range(self.first, self.last).collect(),
                scope: ExportScope::Merged,
            }),
        }
    }
}

/// Summary of what was produced.
#[derive(Debug)]
pub struct RunSummary {
    pub path: PathBuf,
    pub letters: Vec<LetterReport>,
    pub store: ContactStore,
}

/// Top-level run: validate, open the browser, log in, walk the letters, export.
///
/// `open_browser` is only called once the selection is valid. The browser is
/// quit on every exit path, including errors half-way through a letter.
pub fn run<B, F>(
    creds: &Credentials,
    opts: &AppOptions,
    selection: LetterSelection,
    open_browser: F,
    progress: Option<&mut dyn Progress>,
) -> Result<RunSummary>
where
    B: Browser,
    F: FnOnce() -> Result<B, DriverError>,
{
    let mut null = NullProgress;
    let progress: &mut dyn Progress = match progress {
        Some(p) => p,
        None => &mut null,
    };

    let plan = match selection.plan() {
        Ok(p) => p,
        Err(e) => {
            debug!("Refusing to scrape: {e}");
            return Err(e);
        }
    };
    let scrape_opts = &opts.scrape;

    progress.begin(plan.letters.len());
    progress.log("starting browser...");
    let mut browser = BrowserGuard::new(open_browser()?);
    let mut store = ContactStore::new();

    let first = plan.letters[0];
    scrape::login(&mut *browser, creds, first, scrape_opts, &mut *progress)?;
    progress.log("initializing scraper...");

    let mut reports = Vec::with_capacity(plan.letters.len());
    for &letter in &plan.letters {
        // login already loaded the first letter's listing
        if letter != first {
            browser.goto(&scrape_opts.listing_url_for(letter))?;
        }
        let rep = scrape::scrape_letter(&mut *browser, letter, &mut store, scrape_opts, &mut *progress)?;
        progress.letter_done(&rep);
        reports.push(rep);

        // keeps the remote session from idling out between letters
        if !scrape_opts.letter_settle.is_zero() {
            thread::sleep(scrape_opts.letter_settle);
        }
    }

    let path = file::export_store(&store, plan.scope, &opts.export)?;
    progress.log(&format!("saving results to {}", path.display()));

    // export is done; a failed quit is only logged
    if let Err(e) = browser.close() {
        warn!("Failed to quit browser session after export: {e}");
    }
    info!("Run finished: {} records, {}", store.total_records(), path.display());
    progress.log("finished!");
    progress.finish();
    Ok(RunSummary { path, letters: reports, store })
}
