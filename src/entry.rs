// src/entry.rs
use std::collections::BTreeMap;
use std::collections::btree_map::Entry as Slot;

use log::warn;
use serde::{Deserialize, Serialize};

use crate::config::consts::MISSING_PREVIEW;
use crate::config::options::{DuplicatePolicy, IdRange, RangeCheck};
use crate::error::ScrapeError;

/// One (identifier, name) pair.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Entry {
    pub id: u32,
    pub name: String,
}

impl Entry {
    pub fn new(id: u32, name: impl Into<String>) -> Self {
        Self { id, name: name.into() }
    }
}

/// Entries keyed by identifier; iteration is always ascending.
#[derive(Clone, Debug)]
pub struct EntrySet {
    map: BTreeMap<u32, String>,
    policy: DuplicatePolicy,
}

impl EntrySet {
    pub fn new(policy: DuplicatePolicy) -> Self {
        Self { map: BTreeMap::new(), policy }
    }

    /// Insert according to the duplicate policy.
    /// Returns `true` when the set now holds `name` for `id`.
    pub fn insert(&mut self, id: u32, name: String) -> Result<bool, ScrapeError> {
        match self.map.entry(id) {
            Slot::Vacant(v) => {
                v.insert(name);
                Ok(true)
            }
            Slot::Occupied(mut o) => {
                if *o.get() == name {
                    return Ok(true);
                }
                match self.policy {
                    DuplicatePolicy::FirstWins => {
                        warn!("id {id}: keeping {:?}, ignoring {name:?}", o.get());
                        Ok(false)
                    }
                    DuplicatePolicy::LastWins => {
                        warn!("id {id}: {:?} replaced by {name:?}", o.get());
                        o.insert(name);
                        Ok(true)
                    }
                    DuplicatePolicy::RejectConflicts => Err(ScrapeError::DuplicateConflict {
                        id,
                        kept: o.get().clone(),
                        rejected: name,
                    }),
                }
            }
        }
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    pub fn get(&self, id: u32) -> Option<&str> {
        self.map.get(&id).map(String::as_str)
    }

    /// Observed identifier range, `None` when empty.
    pub fn bounds(&self) -> Option<IdRange> {
        let min = *self.map.keys().next()?;
        let max = *self.map.keys().next_back()?;
        Some(IdRange::new(min, max))
    }

    /// Identifiers in `range` that have no entry, ascending. Lazy, so a wide
    /// range costs nothing until iterated.
    pub fn missing_in(&self, range: IdRange) -> impl Iterator<Item = u32> + '_ {
        (range.min..=range.max).filter(|id| !self.map.contains_key(id))
    }

    /// How many identifiers in `range` have no entry.
    pub fn count_missing(&self, range: IdRange) -> usize {
        if range.is_empty() {
            return 0;
        }
        range.len() - self.map.range(range.min..=range.max).count()
    }

    /// Fail with `Incomplete` if the range demanded by `check` has gaps.
    pub fn check_range(&self, check: RangeCheck) -> Result<(), ScrapeError> {
        let range = match check {
            RangeCheck::None => return Ok(()),
            RangeCheck::Observed => match self.bounds() {
                Some(r) => r,
                None => return Ok(()),
            },
            RangeCheck::Expected(r) => r,
        };

        let total = self.count_missing(range);
        if total == 0 {
            return Ok(());
        }
        let missing = self.missing_in(range).take(MISSING_PREVIEW).collect();
        Err(ScrapeError::Incomplete { min: range.min, max: range.max, missing, total })
    }

    pub fn into_entries(self) -> Vec<Entry> {
        self.map.into_iter().map(|(id, name)| Entry { id, name }).collect()
    }
}
