// src/specs/gamewith.rs
// gamewith.jp Scarlet/Violet dex article. No usable table: entries appear as
// "No.001 フシギダネ" either inside one text node or spread over sibling
// elements, so this source runs the pattern cascade over text nodes.

use crate::config::options::{
    DuplicatePolicy, IdRange, MatcherSpec, PatternSource, PatternSpec, RangeCheck, Scope, SourceSpec,
    Strategy,
};

pub const DEX: IdRange = IdRange::new(1, 1023);

pub const MATCHERS: &[MatcherSpec] = &[
    // "No.001 フシギダネ" in one node
    MatcherSpec {
        label: "inline",
        scope: Scope::Own,
        pattern: r"(?s)No\.\s*(?P<id>\d{3,4})(?P<name>.*)",
        max_name_chars: Some(20),
    },
    // number and name in sibling elements
    MatcherSpec {
        label: "parent",
        scope: Scope::Parent,
        pattern: r"No\.\s*(?P<id>\d{3,4})\s*(?P<name>[^\s|/・,，、]{1,20})",
        max_name_chars: None,
    },
];

pub static SPEC: SourceSpec = SourceSpec {
    name: "gamewith",
    url: "https://gamewith.jp/pokemon-sv/article/show/375426",
    referer: None,
    strategy: Strategy::Pattern(PatternSpec {
        source: PatternSource::TextNodes,
        trigger: r"No\.\s*\d{3,4}",
        matchers: MATCHERS,
        domain: Some(DEX),
    }),
    duplicates: DuplicatePolicy::FirstWins,
    range_check: RangeCheck::Expected(DEX),
    columns: ["id", "name"],
    out_template: "pokemon_{min}_{max}_ja_from_gamewith.csv",
};
