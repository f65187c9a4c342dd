// src/core/mod.rs

pub mod sanitize;
pub mod webdriver;

pub use webdriver::WebDriver;
