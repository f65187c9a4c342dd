// tests/common/mod.rs
//
// In-memory stand-in for a logged-in directory site, driven through `Browser`.
//
#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;
use std::rc::Rc;

use contact_scrape::browser::{Browser, ElementRef, Locator};
use contact_scrape::config::consts::{
    LIST_ITEM_CSS, NEXT_BUTTON_CSS, PASSWORD_CSS, SUBMIT_CSS, USERNAME_CSS,
};
use contact_scrape::config::options::{AppOptions, ExportOptions, ScrapeOptions};
use contact_scrape::error::DriverError;
use contact_scrape::specs::contacts::{field_locator, Field};

pub const FAKE_URL: &str = "fake://list/{letter}";

#[derive(Clone, Debug, Default)]
pub struct FakeRow {
    pub name: Option<String>,
    pub company: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
}

impl FakeRow {
    pub fn full(name: &str, company: &str, email: &str, phone: &str) -> Self {
        Self {
            name: Some(name.into()),
            company: Some(company.into()),
            email: Some(email.into()),
            phone: Some(phone.into()),
        }
    }

    fn get(&self, f: Field) -> Option<&String> {
        match f {
            Field::Name => self.name.as_ref(),
            Field::Company => self.company.as_ref(),
            Field::Email => self.email.as_ref(),
            Field::Phone => self.phone.as_ref(),
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct FakePage {
    pub rows: Vec<FakeRow>,
    pub has_next: bool,
}

impl FakePage {
    pub fn new(rows: Vec<FakeRow>, has_next: bool) -> Self { Self { rows, has_next } }
}

#[derive(Debug)]
pub struct SiteState {
    pub pages: HashMap<char, Vec<FakePage>>,
    /// Page served for any index past the end of a letter's list.
    pub endless: Option<FakePage>,
    pub letter: Option<char>,
    pub page: usize,
    pub logged_in: bool,
    pub accept_login: bool,
    pub has_login_form: bool,
    pub next_vanishes: bool,
    /// `quit` reports a dead session.
    pub quit_fails: bool,
    pub fail_on: Option<Locator>,
    pub visited: Vec<String>,
    pub typed: Vec<String>,
    pub quit_calls: usize,
}

impl Default for SiteState {
    fn default() -> Self {
        Self {
            pages: HashMap::new(),
            endless: None,
            letter: None,
            page: 0,
            logged_in: false,
            accept_login: true,
            has_login_form: true,
            next_vanishes: false,
            quit_fails: false,
            fail_on: None,
            visited: Vec::new(),
            typed: Vec::new(),
            quit_calls: 0,
        }
    }
}

impl SiteState {
    fn current(&self) -> Option<FakePage> {
        let l = self.letter?;
        self.pages
            .get(&l)
            .and_then(|ps| ps.get(self.page).cloned())
            .or_else(|| self.endless.clone())
    }
}

#[derive(Clone, Default)]
pub struct FakeBrowser {
    pub state: Rc<RefCell<SiteState>>,
}

impl FakeBrowser {
    pub fn with_pages(pages: Vec<(char, Vec<FakePage>)>) -> Self {
        let b = FakeBrowser::default();
        b.state.borrow_mut().pages = pages.into_iter().collect();
        b
    }

    /// Log in without going through the form.
    pub fn on_letter(self, letter: char) -> Self {
        {
            let mut s = self.state.borrow_mut();
            s.logged_in = true;
            s.letter = Some(letter);
            s.page = 0;
        }
        self
    }

    pub fn quit_calls(&self) -> usize { self.state.borrow().quit_calls }
}

fn missing(locator: &Locator) -> DriverError {
    DriverError::NoSuchElement { locator: locator.to_string() }
}

impl Browser for FakeBrowser {
    fn goto(&mut self, url: &str) -> Result<(), DriverError> {
        let mut s = self.state.borrow_mut();
        s.visited.push(url.to_string());
        s.letter = url.chars().last();
        s.page = 0;
        Ok(())
    }

    fn find(&mut self, locator: &Locator) -> Result<ElementRef, DriverError> {
        let s = self.state.borrow();
        if s.fail_on.as_ref() == Some(locator) {
            return Err(DriverError::Protocol { error: "unknown error".into(), message: "boom".into() });
        }

        if let Locator::Css(css) = locator {
            let login_visible = !s.logged_in && s.has_login_form;
            let id = match css.as_str() {
                USERNAME_CSS if login_visible => Some("username"),
                PASSWORD_CSS if login_visible => Some("password"),
                SUBMIT_CSS if login_visible => Some("submit"),
                NEXT_BUTTON_CSS if s.logged_in && s.current().is_some_and(|p| p.has_next) => Some("next"),
                LIST_ITEM_CSS if s.logged_in && s.current().is_some_and(|p| !p.rows.is_empty()) => Some("row:1"),
                _ => None,
            };
            return id.map(|i| ElementRef(i.to_string())).ok_or_else(|| missing(locator));
        }

        if s.logged_in {
            if let Some(page) = s.current() {
                for (i, row) in page.rows.iter().enumerate() {
                    for f in Field::ALL {
                        if field_locator(f, i + 1) == *locator && row.get(f).is_some() {
                            return Ok(ElementRef(format!("cell:{}:{:?}", i, f)));
                        }
                    }
                }
            }
        }
        Err(missing(locator))
    }

    fn find_all(&mut self, locator: &Locator) -> Result<Vec<ElementRef>, DriverError> {
        let s = self.state.borrow();
        if *locator != Locator::css(LIST_ITEM_CSS) || !s.logged_in {
            return Ok(Vec::new());
        }
        let n = s.current().map_or(0, |p| p.rows.len());
        Ok((1..=n).map(|i| ElementRef(format!("row:{i}"))).collect())
    }

    fn send_keys(&mut self, _element: &ElementRef, text: &str) -> Result<(), DriverError> {
        self.state.borrow_mut().typed.push(text.to_string());
        Ok(())
    }

    fn click(&mut self, element: &ElementRef) -> Result<(), DriverError> {
        let mut s = self.state.borrow_mut();
        match element.0.as_str() {
            "submit" => {
                if s.accept_login { s.logged_in = true; }
                Ok(())
            }
            "next" if s.next_vanishes => Err(DriverError::StaleElement),
            "next" => {
                s.page += 1;
                Ok(())
            }
            _ => Ok(()),
        }
    }

    fn text(&mut self, element: &ElementRef) -> Result<String, DriverError> {
        let s = self.state.borrow();
        let mut parts = element.0.split(':');
        let (Some("cell"), Some(i), Some(f)) = (parts.next(), parts.next(), parts.next()) else {
            return Ok(String::new());
        };
        let i: usize = i.parse().unwrap();
        let field = Field::ALL.into_iter().find(|x| format!("{x:?}") == f).unwrap();
        let page = s.current().unwrap();
        Ok(page.rows[i].get(field).cloned().unwrap_or_default())
    }

    fn quit(&mut self) -> Result<(), DriverError> {
        let mut s = self.state.borrow_mut();
        s.quit_calls += 1;
        if s.quit_fails {
            return Err(DriverError::Protocol { error: "invalid session id".into(), message: "session gone".into() });
        }
        Ok(())
    }
}

pub fn tmp_dir(name: &str) -> PathBuf {
    let mut p = std::env::temp_dir();
    p.push(format!("contact_scrape_{}_{}", name, std::process::id()));
    let _ = fs::remove_dir_all(&p);
    fs::create_dir_all(&p).unwrap();
    p
}

pub fn options(out_dir: PathBuf) -> AppOptions {
    AppOptions {
        scrape: ScrapeOptions { listing_url: FAKE_URL.into(), ..Default::default() }.without_pauses(),
        export: ExportOptions { out_dir, include_index: true },
        ..Default::default()
    }
}

pub fn row(name: &str) -> FakeRow {
    FakeRow::full(name, &format!("{name} Corp"), &format!("{}@example.org", name.to_lowercase()), "555-0100")
}
