// src/specs/mod.rs
//! # Source specs
//!
//! One `SourceSpec` per page. A spec encodes *where the ground truth lives* on
//! that page and *how to read it*: URL and referer, extraction strategy,
//! duplicate policy, range check, output columns and default file name.
//!
//! ## What lives here
//! - Static data only. Parsing lives in `extract`, fetching in `core::net`,
//!   writing in `file`.
//!
//! ## Conventions
//! - Prefer `Strategy::Table` whenever the page has a real table; the header
//!   needles are substrings, so small label changes on the site do not break it.
//! - `Strategy::Pattern` is the lossy fallback. Give it a fixed `domain` and an
//!   `Expected` range check so silent drops surface as an incomplete range.
//!
//! ## Current specs
//! - `irasuto` – table on pokemon-irasuto-taizen.com, `図鑑No` / `ポケモン名`.
//! - `gamewith` – `No.NNN name` text on a gamewith.jp article, ids 1..=1023.
pub mod gamewith;
pub mod irasuto;

use crate::config::options::SourceSpec;

/// Every source this crate knows, by name.
pub fn all() -> [&'static SourceSpec; 2] {
    [&irasuto::SPEC, &gamewith::SPEC]
}

pub fn by_name(name: &str) -> Option<&'static SourceSpec> {
    all().into_iter().find(|s| s.name == name)
}
