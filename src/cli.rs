// src/cli.rs
use std::path::PathBuf;

use clap::{builder::RangedU64ValueParser, Parser, ValueEnum};
use dialoguer::{theme::ColorfulTheme, Password};

use crate::{
    config::options::{AppOptions, BrowserKind, Credentials},
    core::WebDriver,
    error::ScrapeError,
    log::{self, LogTarget},
    progress::Progress,
    runner::{self, LetterSelection, RunSummary},
    scrape::LetterReport,
    store::Letter,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum BrowserArg {
    Firefox,
    Chrome,
}

impl From<BrowserArg> for BrowserKind {
    fn from(b: BrowserArg) -> Self {
        match b {
            BrowserArg::Firefox => BrowserKind::Firefox,
            BrowserArg::Chrome => BrowserKind::Chrome,
        }
    }
}

/// Scrape a letter-partitioned contact directory into CSV.
///
/// Examples:
///   cli -u me@example.org -p SECRET --letter E         # E.csv
///   cli -u me@example.org -p SECRET --first B --last W # contacts[-N].csv
#[derive(Debug, Parser)]
#[command(name = "contact_scrape", version, about, long_about = None)]
pub struct Args {
    /// Login identifier
    #[arg(short, long)]
    pub username: String,

    /// Login secret; prompted for (without echo) when omitted
    #[arg(short, long)]
    pub password: Option<String>,

    /// First surname initial of the range
    #[arg(long, default_value = "A")]
    pub first: Letter,

    /// Last surname initial of the range (inclusive)
    #[arg(long, default_value = "Z")]
    pub last: Letter,

    /// Scrape only this initial (conflicts with a non-default --first)
    #[arg(long)]
    pub letter: Option<Letter>,

    /// Directory the CSV is written to
    #[arg(short, long, default_value = ".")]
    pub out_dir: PathBuf,

    /// WebDriver endpoint (geckodriver / chromedriver)
    #[arg(long, default_value = crate::config::consts::DEFAULT_WEBDRIVER_URL)]
    pub webdriver: String,

    #[arg(long, value_enum, default_value_t = BrowserArg::Firefox)]
    pub browser: BrowserArg,

    #[arg(long)]
    pub headless: bool,

    /// Omit the leading index column
    #[arg(long)]
    pub no_index: bool,

    /// Stop a letter after this many pages (at least 1)
    #[arg(long, value_parser = RangedU64ValueParser::<usize>::new().range(1..))]
    pub max_pages: Option<usize>,

    /// Skip the check that the login form went away
    #[arg(long)]
    pub no_verify_login: bool,

    /// Also extract the last page of each letter
    #[arg(long)]
    pub include_last_page: bool,

    /// Log to .store/debug.log instead of stderr
    #[arg(long)]
    pub log_file: bool,
}

impl Args {
    pub fn selection(&self) -> LetterSelection {
        LetterSelection { first: self.first, last: self.last, letter: self.letter }
    }

    pub fn options(&self) -> AppOptions {
        let mut opts = AppOptions::default();
        opts.export.out_dir = self.out_dir.clone();
        opts.export.include_index = !self.no_index;
        opts.browser.webdriver_url = self.webdriver.clone();
        opts.browser.kind = self.browser.into();
        opts.browser.headless = self.headless;
        if let Some(n) = self.max_pages {
            opts.scrape.max_pages = n;
        }
        opts.scrape.verify_login = !self.no_verify_login;
        opts.scrape.extract_final_page = self.include_last_page;
        opts
    }

    /// Uses `--password` when given, otherwise asks on the terminal.
    pub fn credentials(&self) -> Result<Credentials, ScrapeError> {
        let password = match &self.password {
            Some(p) => p.clone(),
            None => prompt_password(&self.username)?,
        };
        Ok(Credentials::new(&self.username, &password))
    }
}

fn prompt_password(username: &str) -> std::io::Result<String> {
    Password::with_theme(&ColorfulTheme::default())
        .with_prompt(format!("Password for {username}"))
        .interact()
        .map_err(|e| std::io::Error::other(e.to_string()))
}

/// Prints status lines to stdout.
struct StdoutProgress;

impl Progress for StdoutProgress {
    fn log(&mut self, msg: &str) {
        println!("{msg}");
    }
    fn letter_done(&mut self, r: &LetterReport) {
        let note = if r.truncated { " (page limit reached)" } else { "" };
        println!("{}: {} contacts, {} pages{note}\n", r.letter, r.records, r.pages);
    }
}

pub fn run(args: Args) -> Result<RunSummary, ScrapeError> {
    log::init(if args.log_file { LogTarget::debug_file() } else { LogTarget::Stderr })?;

    let opts = args.options();
    let creds = args.credentials()?;
    let mut stdout = StdoutProgress;
    let progress: &mut dyn Progress = &mut stdout;

    runner::run(
        &creds,
        &opts,
        args.selection(),
        || WebDriver::connect(&opts.browser),
        Some(progress),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(extra: &[&str]) -> Args {
        let mut argv = vec!["cli", "-u", "me", "-p", "pw"];
        argv.extend_from_slice(extra);
        Args::try_parse_from(argv).unwrap()
    }

    #[test]
    fn defaults_are_full_range() {
        let a = parse(&[]);
        assert_eq!(a.selection(), LetterSelection::default());
        let opts = a.options();
        assert!(opts.export.include_index);
        assert!(opts.scrape.verify_login);
    }

    #[test]
    fn letters_are_case_insensitive() {
        let a = parse(&["--letter", "e"]);
        assert_eq!(a.selection().letter, Letter::new('E'));
    }

    #[test]
    fn bad_letter_is_a_parse_error() {
        assert!(Args::try_parse_from(["cli", "-u", "me", "-p", "pw", "--first", "BB"]).is_err());
    }

    #[test]
    fn zero_page_limit_is_rejected() {
        assert!(Args::try_parse_from(["cli", "-u", "me", "-p", "pw", "--max-pages", "0"]).is_err());
        assert_eq!(parse(&["--max-pages", "1"]).options().scrape.max_pages, 1);
    }

    #[test]
    fn password_flag_is_optional() {
        let a = Args::try_parse_from(["cli", "-u", "me"]).unwrap();
        assert_eq!(a.password, None);
        let c = parse(&[]).credentials().unwrap();
        assert_eq!(c.password(), "pw");
    }

    #[test]
    fn flags_reach_options() {
        let a = parse(&["--browser", "chrome", "--headless", "--no-index", "--max-pages", "3", "-o", "out"]);
        let opts = a.options();
        assert_eq!(opts.browser.kind, BrowserKind::Chrome);
        assert!(opts.browser.headless);
        assert!(!opts.export.include_index);
        assert_eq!(opts.scrape.max_pages, 3);
        assert_eq!(opts.export.out_dir, PathBuf::from("out"));
    }
}
