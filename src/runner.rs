// src/runner.rs
use std::fmt;
use std::path::PathBuf;

use log::info;

use crate::config::options::{IdRange, RunOptions, SourceSpec};
use crate::core::net;
use crate::entry::Entry;
use crate::error::ScrapeError;
use crate::extract;
use crate::file::{render_template, resolve_out_path, write_entries_atomic};

/// What a run produced.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RunSummary {
    pub path: PathBuf,
    pub count: usize,
    pub bounds: Option<IdRange>,
}

/// The line printed after a successful run.
impl fmt::Display for RunSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Wrote {} entries to {}", self.count, self.path.display())
    }
}

/// fetch → extract → write. Nothing touches the filesystem until extraction
/// (including the range check) has succeeded.
pub fn run(spec: &SourceSpec, opts: &RunOptions) -> Result<RunSummary, ScrapeError> {
    let html = net::http_get(opts)?;
    let entries = extract::extract(spec, &html)?;
    write(spec, opts, &entries)
}

/// Same as `run` minus the network: for saved pages.
pub fn run_offline(spec: &SourceSpec, opts: &RunOptions, html: &str) -> Result<RunSummary, ScrapeError> {
    let entries = extract::extract(spec, html)?;
    write(spec, opts, &entries)
}

fn write(spec: &SourceSpec, opts: &RunOptions, entries: &[Entry]) -> Result<RunSummary, ScrapeError> {
    let bounds = match (entries.first(), entries.last()) {
        (Some(a), Some(b)) => Some(IdRange::new(a.id, b.id)),
        _ => None,
    };
    let default_name = render_template(spec.out_template, bounds);
    let path = resolve_out_path(opts.out.as_deref(), &default_name)?;

    let path = write_entries_atomic(&path, &spec.columns, entries)?;
    info!("{}: wrote {} rows to {}", spec.name, entries.len(), path.display());
    Ok(RunSummary { path, count: entries.len(), bounds })
}
