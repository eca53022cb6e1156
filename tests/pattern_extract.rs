// tests/pattern_extract.rs
//
// Pattern cascade against gamewith-shaped pages, offline.
//
mod common;

use pokedex_scrape::config::options::{PatternSource, PatternSpec, Strategy};
use pokedex_scrape::extract::{extract, pattern};
use pokedex_scrape::specs::gamewith::{self, SPEC};
use pokedex_scrape::{Entry, ScrapeError};

use common::gamewith_page;

#[test]
fn full_dex_is_extracted_in_order() {
    let entries = extract(&SPEC, &gamewith_page(1..=1023)).unwrap();
    assert_eq!(entries.len(), 1023);
    assert_eq!(entries[0], Entry::new(1, "ポケ1"));
    assert_eq!(entries[1], Entry::new(2, "ポケ2"));
    assert_eq!(entries[1022], Entry::new(1023, "ポケ1023"));
    assert!(entries.windows(2).all(|w| w[0].id < w[1].id));
}

#[test]
fn out_of_domain_ids_are_ignored() {
    let entries = extract(&SPEC, &gamewith_page((1..=1023).chain([1024, 1025]))).unwrap();
    assert_eq!(entries.len(), 1023);
}

#[test]
fn one_gap_is_fatal() {
    let html = gamewith_page((1..=1023).filter(|&id| id != 500));
    match extract(&SPEC, &html) {
        Err(ScrapeError::Incomplete { missing, total, min, max }) => {
            assert_eq!(missing, vec![500]);
            assert_eq!(total, 1);
            assert_eq!((min, max), (1, 1023));
        }
        other => panic!("expected Incomplete, got {other:?}"),
    }
}

#[test]
fn empty_page_reports_whole_range() {
    match extract(&SPEC, "<html><body>メンテナンス中</body></html>") {
        Err(ScrapeError::Incomplete { missing, total, .. }) => {
            assert_eq!(total, 1023);
            assert_eq!(missing.first(), Some(&1));
        }
        other => panic!("expected Incomplete, got {other:?}"),
    }
}

#[test]
fn first_occurrence_wins() {
    let mut html = gamewith_page(1..=1023);
    html = html.replace("<ul>", "<ul><li>No.025 ピカチュウ</li>");
    let entries = extract(&SPEC, &html).unwrap();
    assert_eq!(entries[24], Entry::new(25, "ピカチュウ"));
}

#[test]
fn line_mode_reads_plain_text() {
    let Strategy::Pattern(base) = &SPEC.strategy else { panic!("gamewith is a pattern source") };
    let spec = PatternSpec { source: PatternSource::Lines, ..base.clone() };
    let text = "No.001 フシギダネ\nNo.002 フシギソウ\n\n関連記事\nNo.003";
    let set = pattern::extract(text, &spec, SPEC.duplicates).unwrap();
    assert_eq!(set.len(), 2);
    assert_eq!(set.missing_in(gamewith::DEX).next(), Some(3));
    assert_eq!(set.count_missing(gamewith::DEX), 1021);
}
