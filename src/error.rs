// src/error.rs
use std::time::Duration;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScrapeError {
    #[error("request to {url} timed out after {timeout:?}")]
    Timeout { url: String, timeout: Duration },

    #[error("request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("HTTP error: {status} {url}")]
    Status { url: String, status: u16 },

    #[error("could not locate a table whose header row contains {needles}")]
    TableNotFound { needles: String },

    #[error(
        "identifier range {min}..={max} is incomplete: {total} missing (first: {})",
        join_ids(.missing)
    )]
    Incomplete { min: u32, max: u32, missing: Vec<u32>, total: usize },

    #[error("identifier {id} seen twice with different names: {kept:?} vs {rejected:?}")]
    DuplicateConflict { id: u32, kept: String, rejected: String },

    #[error("invalid pattern {label:?}: {source}")]
    Pattern {
        label: &'static str,
        #[source]
        source: regex::Error,
    },

    #[error("{0}")]
    Usage(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Csv(#[from] csv::Error),

    #[error("could not move finished file into place: {0}")]
    Persist(#[from] tempfile::PersistError),
}

fn join_ids(ids: &[u32]) -> String {
    ids.iter().map(u32::to_string).collect::<Vec<_>>().join(", ")
}
