// tests/pipeline.rs
//
// fetch → extract → write end to end, against a mock server.
//
mod common;

use std::fs;
use std::net::TcpListener;
use std::thread;
use std::time::Duration;

use mockito::Server;
use pokedex_scrape::config::options::RunOptions;
use pokedex_scrape::runner::{run, run_offline};
use pokedex_scrape::specs::{gamewith, irasuto};
use pokedex_scrape::ScrapeError;

use common::{gamewith_page, irasuto_page};

#[test]
fn irasuto_run_writes_csv() {
    let mut server = Server::new();
    let _m = server
        .mock("GET", "/pokemon-list/")
        .with_status(200)
        .with_header("content-type", "text/html; charset=utf-8")
        .with_body(irasuto_page(&[("002", "フシギソウ"), ("001", "フシギダネ[1]")]))
        .create();

    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("dex.csv");
    let opts = RunOptions {
        url: format!("{}/pokemon-list/", server.url()),
        out: Some(out.clone()),
        ..RunOptions::for_source(&irasuto::SPEC)
    };

    let summary = run(&irasuto::SPEC, &opts).unwrap();
    assert_eq!(summary.count, 2);
    assert_eq!(summary.path, out);
    assert_eq!(fs::read_to_string(&out).unwrap(), "図鑑No,ポケモン名\n1,フシギダネ\n2,フシギソウ\n");
}

#[test]
fn gamewith_default_name_follows_observed_range() {
    let dir = tempfile::tempdir().unwrap();
    let opts = RunOptions { out: Some(dir.path().to_path_buf()), ..RunOptions::for_source(&gamewith::SPEC) };

    let summary = run_offline(&gamewith::SPEC, &opts, &gamewith_page(1..=1023)).unwrap();
    assert_eq!(summary.count, 1023);
    assert_eq!(summary.path, dir.path().join("pokemon_1_1023_ja_from_gamewith.csv"));
    assert_eq!(summary.to_string(), format!("Wrote 1023 entries to {}", summary.path.display()));

    let text = fs::read_to_string(&summary.path).unwrap();
    assert!(text.starts_with("id,name\n1,ポケ1\n2,ポケ2\n"));
    assert_eq!(text.lines().count(), 1024);
}

#[test]
fn missing_table_writes_nothing() {
    let mut server = Server::new();
    let _m = server.mock("GET", "/").with_status(200).with_body("<p>no table here</p>").create();

    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("dex.csv");
    let opts = RunOptions { url: server.url(), out: Some(out.clone()), ..RunOptions::for_source(&irasuto::SPEC) };

    assert!(matches!(run(&irasuto::SPEC, &opts), Err(ScrapeError::TableNotFound { .. })));
    assert!(!out.exists());
}

#[test]
fn gap_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("dex.csv");
    let opts = RunOptions { out: Some(out.clone()), ..RunOptions::for_source(&irasuto::SPEC) };

    let html = irasuto_page(&[("001", "A"), ("003", "C")]);
    assert!(matches!(run_offline(&irasuto::SPEC, &opts, &html), Err(ScrapeError::Incomplete { .. })));
    assert!(!out.exists());
}

#[test]
fn timeout_writes_nothing() {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    thread::spawn(move || {
        if let Ok((stream, _)) = listener.accept() {
            thread::sleep(Duration::from_secs(3));
            drop(stream);
        }
    });

    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("dex.csv");
    let opts = RunOptions {
        url: format!("http://{addr}/"),
        out: Some(out.clone()),
        timeout: Duration::from_millis(300),
        ..RunOptions::for_source(&irasuto::SPEC)
    };

    assert!(matches!(run(&irasuto::SPEC, &opts), Err(ScrapeError::Timeout { .. })));
    assert!(!out.exists());
    assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 0);
}
