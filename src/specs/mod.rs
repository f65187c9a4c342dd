// src/specs/mod.rs
//! # Page specs
//!
//! Where the data lives on each remote page and how to read it.
//!
//! Specs only locate and extract. Login, pagination and pacing live in
//! `scrape`; persistence lives in `file`.
//!
//! ## Conventions
//! - Locators are built here and nowhere else, so a markup change means
//!   editing one file.
//! - Extraction never fails on a missing field: absence is an empty string.
//!   Only driver errors of another kind are returned.
//! - Rows are addressed by 1-based position, as the page's XPath expects.
pub mod contacts;
