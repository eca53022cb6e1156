// src/core/sanitize.rs
use std::sync::LazyLock;

use regex::Regex;

static FOOTNOTE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[[^\[\]]*\]").expect("FOOTNOTE_RE: hardcoded regex is valid"));

static DIGITS_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[0-9]+").expect("DIGITS_RE: hardcoded regex is valid"));

/// Collapse whitespace runs to a single space and trim.
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

/// Delete `[ ... ]` footnote markers (e.g. `[12]`, `[注 1]`) without leaving a
/// gap, then re-collapse whitespace.
pub fn strip_footnotes(s: &str) -> String {
    normalize_ws(&FOOTNOTE_RE.replace_all(s, ""))
}

/// First run of ASCII digits anywhere in `s`, as a number.
/// `None` when there are no digits or the run overflows `u32`.
pub fn first_number(s: &str) -> Option<u32> {
    DIGITS_RE.find(s)?.as_str().parse().ok()
}
