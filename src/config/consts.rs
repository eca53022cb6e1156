// src/config/consts.rs

// Net config
pub const USER_AGENT: &str = concat!(
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) ",
    "AppleWebKit/537.36 (KHTML, like Gecko) ",
    "Chrome/122.0.0.0 Safari/537.36"
);
pub const ACCEPT_LANGUAGE: &str = "ja-JP,ja;q=0.9,en-US;q=0.8,en;q=0.7";
pub const FALLBACK_CHARSET: &str = "utf-8";
pub const FETCH_TIMEOUT_SECS: u64 = 30;

// Extract
pub const DEFAULT_SKIP_TAGS: &[&str] = &["sup", "rt", "rp"];
pub const MISSING_PREVIEW: usize = 10;

// Export
pub const TEMPLATE_MIN: &str = "{min}";
pub const TEMPLATE_MAX: &str = "{max}";
