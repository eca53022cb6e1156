// src/specs/irasuto.rs
// pokemon-irasuto-taizen.com/pokemon-list/
// The list is a plain table: 図鑑No | ポケモン名 | ...; names may carry ruby
// glosses and footnote markers. The site answers 403 to non-browser agents,
// hence the referer.

use crate::config::consts::DEFAULT_SKIP_TAGS;
use crate::config::options::{DuplicatePolicy, RangeCheck, SourceSpec, Strategy, TableSpec};

pub static SPEC: SourceSpec = SourceSpec {
    name: "irasuto",
    url: "https://pokemon-irasuto-taizen.com/pokemon-list/",
    referer: Some("https://pokemon-irasuto-taizen.com/"),
    strategy: Strategy::Table(TableSpec {
        header_needles: ["図鑑", "ポケモン"],
        skip_tags: DEFAULT_SKIP_TAGS,
    }),
    duplicates: DuplicatePolicy::RejectConflicts,
    range_check: RangeCheck::Observed,
    columns: ["図鑑No", "ポケモン名"],
    out_template: "pokemon_irasuto_taizen.csv",
};
