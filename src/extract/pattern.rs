// src/extract/pattern.rs
// Best-effort fallback: no structural ground truth, just an ordered cascade of
// regexes per text unit. Anything that does not match is dropped silently.

use log::{debug, info};
use regex::{Captures, Regex};
use scraper::{ElementRef, Html};

use crate::config::options::{DuplicatePolicy, MatcherSpec, PatternSource, PatternSpec, Scope};
use crate::core::sanitize::{first_number, normalize_ws};
use crate::entry::EntrySet;
use crate::error::ScrapeError;

const IGNORED_PARENTS: &[&str] = &["script", "style", "noscript", "template"];

/// One piece of text to try the cascade on, plus its wider context if any.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Unit {
    pub own: String,
    pub parent: Option<String>,
}

/// A compiled cascade.
pub struct Cascade<'a> {
    trigger: Regex,
    matchers: Vec<(&'a MatcherSpec, Regex)>,
}

/// A successful cascade step.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Hit {
    pub id: u32,
    pub name: String,
    pub label: &'static str,
}

impl<'a> Cascade<'a> {
    pub fn compile(spec: &'a PatternSpec) -> Result<Self, ScrapeError> {
        let trigger = Regex::new(spec.trigger)
            .map_err(|source| ScrapeError::Pattern { label: "trigger", source })?;
        let matchers = spec
            .matchers
            .iter()
            .map(|m| {
                Regex::new(m.pattern)
                    .map(|re| (m, re))
                    .map_err(|source| ScrapeError::Pattern { label: m.label, source })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { trigger, matchers })
    }

    /// First matcher yielding a valid `(id, name)` wins.
    ///
    /// A parent text may hold several `No.NNN name` pairs (siblings sharing one
    /// element); only the pair whose id equals the number in the unit's own
    /// trigger match is taken. Without such a number the first pair is used.
    pub fn apply(&self, unit: &Unit) -> Option<Hit> {
        let trigger = self.trigger.find(&unit.own)?;
        let own_id = first_number(trigger.as_str());
        self.matchers.iter().find_map(|(m, re)| match m.scope {
            Scope::Own => hit_from(m, re.captures(&unit.own)?),
            Scope::Parent => {
                let text = unit.parent.as_deref()?;
                let mut hits = re.captures_iter(text).filter_map(|caps| hit_from(m, caps));
                match own_id {
                    Some(want) => hits.find(|hit| hit.id == want),
                    None => hits.next(),
                }
            }
        })
    }
}

fn hit_from(m: &MatcherSpec, caps: Captures<'_>) -> Option<Hit> {
    let id: u32 = caps.name("id")?.as_str().parse().ok()?;
    let name = normalize_ws(caps.name("name")?.as_str());
    if name.is_empty() {
        return None;
    }
    if m.max_name_chars.is_some_and(|max| name.chars().count() > max) {
        return None;
    }
    Some(Hit { id, name, label: m.label })
}

/// Text nodes of the document, each with its parent element's text
/// (fragments trimmed, empty ones dropped, joined with a space).
pub fn text_node_units(html: &str) -> Vec<Unit> {
    let doc = Html::parse_document(html);
    let mut units = Vec::new();

    for node in doc.tree.nodes() {
        let Some(text) = node.value().as_text() else { continue };
        let parent = node.parent().and_then(ElementRef::wrap);
        if parent.is_some_and(|p| IGNORED_PARENTS.contains(&p.value().name())) {
            continue;
        }
        let own: &str = text;
        if own.trim().is_empty() {
            continue;
        }
        let parent_text = parent.map(|p| {
            p.text()
                .map(str::trim)
                .filter(|t| !t.is_empty())
                .collect::<Vec<_>>()
                .join(" ")
        });
        units.push(Unit { own: s!(own), parent: parent_text });
    }
    units
}

/// Raw lines; no parent scope.
pub fn line_units(text: &str) -> Vec<Unit> {
    text.lines()
        .filter(|l| !l.trim().is_empty())
        .map(|l| Unit { own: s!(l), parent: None })
        .collect()
}

/// Run the cascade over every unit. Out-of-domain ids are dropped; duplicates
/// follow `policy`.
pub fn scan_units(units: &[Unit], spec: &PatternSpec, policy: DuplicatePolicy) -> Result<EntrySet, ScrapeError> {
    let cascade = Cascade::compile(spec)?;
    let mut set = EntrySet::new(policy);
    let mut considered = 0usize;

    for unit in units {
        if !cascade.trigger.is_match(&unit.own) {
            continue;
        }
        considered += 1;
        let Some(hit) = cascade.apply(unit) else {
            debug!("no matcher accepted {:?}", unit.own.trim());
            continue;
        };
        if spec.domain.is_some_and(|d| !d.contains(hit.id)) {
            debug!("id {} outside domain, dropped", hit.id);
            continue;
        }
        debug!("{} → {} via {}", hit.id, hit.name, hit.label);
        set.insert(hit.id, hit.name)?;
    }

    info!("{} of {considered} candidate unit(s) produced distinct ids", set.len());
    Ok(set)
}

pub fn extract(html: &str, spec: &PatternSpec, policy: DuplicatePolicy) -> Result<EntrySet, ScrapeError> {
    let units = match spec.source {
        PatternSource::TextNodes => text_node_units(html),
        PatternSource::Lines => line_units(html),
    };
    scan_units(&units, spec, policy)
}
