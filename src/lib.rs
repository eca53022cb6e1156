// src/lib.rs

#[macro_use]
pub mod macros;

pub mod cli;
pub mod config;
pub mod core;
pub mod csv;
pub mod entry;
pub mod error;
pub mod extract;
pub mod file;
pub mod logging;
pub mod runner;
pub mod specs;

pub use entry::{Entry, EntrySet};
pub use error::ScrapeError;
