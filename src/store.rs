// src/store.rs
//
// In-memory contact store, keyed by surname initial.
//
// - Letter:        an uppercase ASCII letter A..=Z.
// - LetterBucket:  four parallel columns (name/company/email/phone). The only
//                  mutator is `push(Record)`, so the columns never drift apart.
// - ContactStore:  all 26 buckets, created empty at run start, append-only.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/* ---------------- Letter ---------------- */

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Letter(u8);

impl Letter {
    pub const A: Letter = Letter(b'A');
    pub const Z: Letter = Letter(b'Z');

    /// Uppercase ASCII only.
    pub fn new(c: char) -> Option<Self> {
        if c.is_ascii_uppercase() { Some(Letter(c as u8)) } else { None }
    }

    pub fn as_char(self) -> char { self.0 as char }

    pub fn all() -> impl Iterator<Item = Letter> {
        Self::range(Self::A, Self::Z)
    }

    /// Inclusive; empty when `first > last`.
    pub fn range(first: Letter, last: Letter) -> impl Iterator<Item = Letter> {
        (first.0..=last.0).map(Letter)
    }
}

impl fmt::Display for Letter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

impl FromStr for Letter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.trim().chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Letter::new(c.to_ascii_uppercase())
                .ok_or_else(|| format!("Not a letter A-Z: {s}")),
            _ => Err(format!("Expected a single letter, got: {s:?}")),
        }
    }
}

/* ---------------- Record ---------------- */

/// One directory entry. Missing fields are empty strings.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Record {
    pub name: String,
    pub company: String,
    pub email: String,
    pub phone: String,
}

/* ---------------- LetterBucket ---------------- */

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LetterBucket {
    names: Vec<String>,
    companies: Vec<String>,
    emails: Vec<String>,
    phones: Vec<String>,
}

impl LetterBucket {
    /// Append all four fields as one unit.
    pub fn push(&mut self, record: Record) {
        let Record { name, company, email, phone } = record;
        self.names.push(name);
        self.companies.push(company);
        self.emails.push(email);
        self.phones.push(phone);
        debug_assert!(self.is_aligned());
    }

    pub fn len(&self) -> usize { self.names.len() }
    pub fn is_empty(&self) -> bool { self.names.is_empty() }

    pub fn names(&self) -> &[String] { &self.names }
    pub fn companies(&self) -> &[String] { &self.companies }
    pub fn emails(&self) -> &[String] { &self.emails }
    pub fn phones(&self) -> &[String] { &self.phones }

    /// All four columns have the same length.
    pub fn is_aligned(&self) -> bool {
        let n = self.names.len();
        self.companies.len() == n && self.emails.len() == n && self.phones.len() == n
    }

    pub fn get(&self, i: usize) -> Option<Record> {
        Some(Record {
            name: self.names.get(i)?.clone(),
            company: self.companies.get(i)?.clone(),
            email: self.emails.get(i)?.clone(),
            phone: self.phones.get(i)?.clone(),
        })
    }

    pub fn records(&self) -> impl Iterator<Item = Record> + '_ {
        (0..self.len()).filter_map(move |i| self.get(i))
    }
}

/* ---------------- ContactStore ---------------- */

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ContactStore {
    buckets: BTreeMap<Letter, LetterBucket>,
}

impl Default for ContactStore {
    fn default() -> Self { Self::new() }
}

impl ContactStore {
    /// One empty bucket per letter.
    pub fn new() -> Self {
        Self { buckets: Letter::all().map(|l| (l, LetterBucket::default())).collect() }
    }

    pub fn push(&mut self, letter: Letter, record: Record) {
        self.buckets.entry(letter).or_default().push(record);
    }

    pub fn bucket(&self, letter: Letter) -> &LetterBucket {
        // every letter is seeded in `new`
        &self.buckets[&letter]
    }

    /// Buckets in A..Z order.
    pub fn iter(&self) -> impl Iterator<Item = (Letter, &LetterBucket)> {
        self.buckets.iter().map(|(l, b)| (*l, b))
    }

    pub fn total_records(&self) -> usize {
        self.buckets.values().map(LetterBucket::len).sum()
    }

    pub fn is_empty(&self) -> bool { self.total_records() == 0 }
}
