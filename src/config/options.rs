// src/config/options.rs
use std::path::PathBuf;
use std::time::Duration;

use super::consts::*;

/// Static description of one page and how to read it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SourceSpec {
    pub name: &'static str,
    pub url: &'static str,
    pub referer: Option<&'static str>,
    pub strategy: Strategy,
    pub duplicates: DuplicatePolicy,
    pub range_check: RangeCheck,
    /// Header row of the output file: identifier label, name label.
    pub columns: [&'static str; 2],
    /// Default output file name. `{min}` / `{max}` expand to the observed id range.
    pub out_template: &'static str,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Strategy {
    Table(TableSpec),
    Pattern(PatternSpec),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TableSpec {
    /// Substrings the header row must contain: id column first, name column second.
    pub header_needles: [&'static str; 2],
    /// Elements whose text never reaches a cell (footnotes, ruby glosses).
    pub skip_tags: &'static [&'static str],
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PatternSpec {
    pub source: PatternSource,
    /// A unit is only considered when its own text matches this.
    pub trigger: &'static str,
    /// Tried in order; the first one yielding a pair wins.
    pub matchers: &'static [MatcherSpec],
    /// Identifiers outside this range are dropped.
    pub domain: Option<IdRange>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PatternSource {
    /// Text nodes of the parsed document, with their parent element's text.
    TextNodes,
    /// Raw lines; only `Scope::Own` matchers can apply.
    Lines,
}

/// One regex attempt. The pattern must capture the named groups `id` and `name`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MatcherSpec {
    pub label: &'static str,
    pub scope: Scope,
    pub pattern: &'static str,
    pub max_name_chars: Option<usize>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Scope {
    Own,
    Parent,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DuplicatePolicy {
    FirstWins,
    LastWins,
    /// Identical repeats are ignored; a repeat with a different name is fatal.
    RejectConflicts,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RangeCheck {
    None,
    /// Every id between the observed minimum and maximum must be present.
    Observed,
    Expected(IdRange),
}

/// Inclusive identifier range.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct IdRange {
    pub min: u32,
    pub max: u32,
}

impl IdRange {
    pub const fn new(min: u32, max: u32) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, id: u32) -> bool {
        self.min <= id && id <= self.max
    }

    pub fn len(&self) -> usize {
        if self.max < self.min { 0 } else { (self.max - self.min) as usize + 1 }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Per-invocation knobs. Defaults come from the source.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RunOptions {
    pub url: String,
    pub referer: Option<String>,
    /// User-supplied output path; `None` uses the source's template.
    pub out: Option<PathBuf>,
    pub timeout: Duration,
}

impl RunOptions {
    pub fn for_source(spec: &SourceSpec) -> Self {
        Self {
            url: s!(spec.url),
            referer: spec.referer.map(String::from),
            out: None,
            timeout: Duration::from_secs(FETCH_TIMEOUT_SECS),
        }
    }
}
