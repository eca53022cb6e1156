// tests/export_roundtrip.rs
//
// Writer: atomic file output and read-back.
//
use std::fs;
use std::path::PathBuf;

use pokedex_scrape::csv::read_entries;
use pokedex_scrape::file::{resolve_out_path, write_entries_atomic};
use pokedex_scrape::Entry;

const COLUMNS: [&str; 2] = ["図鑑No", "ポケモン名"];

fn sample() -> Vec<Entry> {
    vec![
        Entry::new(1, "フシギダネ"),
        Entry::new(29, "ニドラン♀"),
        Entry::new(122, "Mr. Mime, \"バリヤード\""),
        Entry::new(1008, "ミライドン"),
    ]
}

#[test]
fn round_trip_keeps_rows_and_order() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("out.csv");
    let entries = sample();

    let written = write_entries_atomic(&path, &COLUMNS, &entries).unwrap();
    assert_eq!(written, path);

    let text = fs::read_to_string(&path).unwrap();
    assert_eq!(text.lines().count(), entries.len() + 1);
    assert!(text.starts_with("図鑑No,ポケモン名\n1,フシギダネ\n"));

    let (headers, back) = read_entries(fs::File::open(&path).unwrap()).unwrap();
    assert_eq!(headers, vec!["図鑑No", "ポケモン名"]);
    assert_eq!(back, entries);
}

#[test]
fn existing_file_is_replaced_and_no_temp_left_behind() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("out.csv");
    fs::write(&path, "stale contents that are much longer than the new file\n".repeat(10)).unwrap();

    write_entries_atomic(&path, &COLUMNS, &[Entry::new(1, "A")]).unwrap();
    assert_eq!(fs::read_to_string(&path).unwrap(), "図鑑No,ポケモン名\n1,A\n");

    let names: Vec<_> = fs::read_dir(dir.path()).unwrap().map(|e| e.unwrap().file_name()).collect();
    assert_eq!(names, vec![std::ffi::OsString::from("out.csv")]);
}

#[test]
fn missing_parent_directories_are_created() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("a").join("b").join("out.csv");
    write_entries_atomic(&path, &["id", "name"], &sample()).unwrap();
    assert!(path.is_file());
}

#[test]
fn directory_argument_receives_default_name() {
    let dir = tempfile::tempdir().unwrap();
    let resolved = resolve_out_path(Some(dir.path()), "default.csv").unwrap();
    assert_eq!(resolved, dir.path().join("default.csv"));

    let hinted = PathBuf::from(format!("{}/new_dir/", dir.path().display()));
    let resolved = resolve_out_path(Some(&hinted), "default.csv").unwrap();
    assert!(dir.path().join("new_dir").is_dir());
    assert_eq!(resolved.file_name().unwrap(), "default.csv");
}
