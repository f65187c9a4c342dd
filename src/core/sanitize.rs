// src/core/sanitize.rs

/// Collapse every whitespace run (including newlines) to one space and trim.
pub fn normalize_ws(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_space = false;
    for ch in s.chars() {
        if ch.is_whitespace() {
            if !prev_space { out.push(' '); prev_space = true; }
        } else { out.push(ch); prev_space = false; }
    }
    out.trim().to_string()
}

/// Rendered element text -> CSV cell.
/// Drops NULs and other control chars that some pages leak into `innerText`.
pub fn clean_field(raw: &str) -> String {
    let visible: String = raw
        .chars()
        .filter(|c| !c.is_control() || c.is_whitespace())
        .collect();
    normalize_ws(&visible)
}
