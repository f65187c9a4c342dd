// src/config/consts.rs

// Site
pub const LISTING_URL: &str =
    "https://harvard-csm.symplicity.com/students/?_alpha={letter}&_so_clear_paging=1&s=employers&ss=mini_contacts";
pub const LETTER_PLACEHOLDER: &str = "{letter}";

// Login form
pub const USERNAME_CSS: &str = "#username";
pub const PASSWORD_CSS: &str = "#password";
pub const SUBMIT_CSS: &str = ".input-submit";

// Listing
pub const NEXT_BUTTON_CSS: &str = ".lst-next-btn";
pub const LIST_ITEM_CSS: &str = ".list-item";
pub const ROW_XPATH_PREFIX: &str = r#"//*[@id="_list_form"]/ul/li"#;

// Pacing (empirical; keeps the remote session alive)
pub const PAGE_SETTLE_MS: u64 = 1_600;
pub const LETTER_SETTLE_MS: u64 = 10_000;
pub const LOGIN_SETTLE_MS: u64 = 1_600;
pub const MAX_PAGES: usize = 500;

// Export
pub const DEFAULT_OUT_DIR: &str = ".";
pub const MERGED_STEM: &str = "contacts";
pub const EXPORT_EXT: &str = "csv";
pub const EXPORT_HEADERS: [&str; 4] = ["Company", "Name", "Email", "Phone"];
pub const PREVIEW_ROWS: usize = 5;

// WebDriver
pub const DEFAULT_WEBDRIVER_URL: &str = "http://localhost:4444";
pub const WEBDRIVER_TIMEOUT_SECS: u64 = 60;

// Logging
pub const STORE_DIR: &str = ".store";
pub const LOG_FILE: &str = "debug.log";
