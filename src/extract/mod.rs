// src/extract/mod.rs
//! Page text → ordered, validated entries.
//!
//! Two strategies share one contract: produce an `EntrySet` (ascending,
//! duplicates already resolved by the source's policy), then apply the
//! source's range check.
//!
//! - `table` walks the markup and picks the table whose header row carries the
//!   expected labels. This is the primary path.
//! - `pattern` runs an ordered regex cascade over text units. It is lossy by
//!   nature and only meant for pages without a usable table.

pub mod pattern;
pub mod table;

use log::info;

use crate::config::options::{SourceSpec, Strategy};
use crate::entry::Entry;
use crate::error::ScrapeError;

pub fn extract(spec: &SourceSpec, html: &str) -> Result<Vec<Entry>, ScrapeError> {
    let set = match &spec.strategy {
        Strategy::Table(t) => table::extract(html, t, spec.duplicates)?,
        Strategy::Pattern(p) => pattern::extract(html, p, spec.duplicates)?,
    };
    set.check_range(spec.range_check)?;
    if let Some(r) = set.bounds() {
        info!("{}: {} entries, ids {}..={}", spec.name, set.len(), r.min, r.max);
    }
    Ok(set.into_entries())
}
