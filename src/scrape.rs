// src/scrape.rs
//
// Login and the per-letter page walk. Everything here talks to a `Browser`;
// where to find things on the page is `specs::contacts`' business.

use std::thread;
use std::time::Duration;

use tracing::{debug, info, warn};

use crate::{
    browser::{is_present, Browser, Locator},
    config::{
        consts::{PASSWORD_CSS, SUBMIT_CSS, USERNAME_CSS},
        options::{Credentials, ScrapeOptions},
    },
    error::{DriverError, Result, ScrapeError},
    progress::Progress,
    specs::contacts,
    store::{ContactStore, Letter},
};

/// What one letter's page walk produced.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LetterReport {
    pub letter: Letter,
    /// Pages visited (including the last one, which has no "next" control).
    pub pages: usize,
    pub records: usize,
    /// The walk stopped at `max_pages` while a "next" control was still present.
    pub truncated: bool,
}

fn settle(d: Duration) {
    if !d.is_zero() {
        thread::sleep(d);
    }
}

fn report(progress: &mut dyn Progress, msg: &str) {
    debug!("{msg}");
    progress.log(msg);
}

/// Open the listing for `letter` and submit the login form.
pub fn login<B: Browser + ?Sized>(
    browser: &mut B,
    creds: &Credentials,
    letter: Letter,
    opts: &ScrapeOptions,
    progress: &mut dyn Progress,
) -> Result<()> {
    browser.goto(&opts.listing_url_for(letter))?;
    report(progress, "logging in....");

    let user_loc = Locator::css(USERNAME_CSS);
    let usr = browser.find(&user_loc).map_err(ScrapeError::LoginForm)?;
    let pwd = browser.find(&Locator::css(PASSWORD_CSS)).map_err(ScrapeError::LoginForm)?;
    let submit = browser.find(&Locator::css(SUBMIT_CSS)).map_err(ScrapeError::LoginForm)?;

    browser.send_keys(&usr, creds.username())?;
    browser.send_keys(&pwd, creds.password())?;
    browser.click(&submit)?;
    settle(opts.login_settle);

    if opts.verify_login && is_present(browser, &user_loc)? {
        return Err(ScrapeError::LoginRejected);
    }
    debug!("Logged in as {}", creds.username());
    Ok(())
}

/// Walk every listing page of the currently loaded letter.
///
/// Loop: probe "next"; if absent stop. Otherwise extract the visible rows,
/// click "next", wait `page_settle`, go again. Bounded by `max_pages`.
pub fn scrape_letter<B: Browser + ?Sized>(
    browser: &mut B,
    letter: Letter,
    store: &mut ContactStore,
    opts: &ScrapeOptions,
    progress: &mut dyn Progress,
) -> Result<LetterReport> {
    let next = contacts::next_button();
    let rows = contacts::list_items();
    let mut rep = LetterReport { letter, pages: 0, records: 0, truncated: false };

    loop {
        if rep.pages >= opts.max_pages {
            warn!("{letter}: stopped after {} pages with a next control still present", rep.pages);
            rep.truncated = true;
            break;
        }
        rep.pages += 1;
        report(progress, &format!("loading {letter} (p. {})", rep.pages));

        if !is_present(browser, &next)? {
            if opts.extract_final_page {
                rep.records += extract_visible(browser, &rows, letter, store)?;
            }
            debug!("{letter}: no next control on page {}", rep.pages);
            break;
        }

        let n = browser.find_all(&rows)?.len();
        if n == 0 {
            report(progress, "no elements found on this page");
            break;
        }
        rep.records += contacts::extract_rows(browser, letter, n, store)?;

        if !click_next(browser, &next)? {
            warn!("{letter}: next control vanished before it could be clicked (p. {})", rep.pages);
            break;
        }
        settle(opts.page_settle);
    }

    info!("{letter}: {} records over {} pages", rep.records, rep.pages);
    Ok(rep)
}

fn extract_visible<B: Browser + ?Sized>(
    browser: &mut B,
    rows: &Locator,
    letter: Letter,
    store: &mut ContactStore,
) -> Result<usize, DriverError> {
    let n = browser.find_all(rows)?.len();
    contacts::extract_rows(browser, letter, n, store)
}

/// `Ok(false)` when the control is gone (not found or stale).
fn click_next<B: Browser + ?Sized>(browser: &mut B, next: &Locator) -> Result<bool, DriverError> {
    let clicked = browser.find(next).and_then(|el| browser.click(&el));
    match clicked {
        Ok(()) => Ok(true),
        Err(e) if e.is_missing() => Ok(false),
        Err(e) => Err(e),
    }
}
