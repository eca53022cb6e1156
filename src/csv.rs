// src/csv.rs
use std::io::{Read, Write};

use ::csv::{ReaderBuilder, Terminator, WriterBuilder};

use crate::entry::Entry;

/* ---------------- Writing ---------------- */

/// Header row of the two column labels, then one row per entry in the given order.
/// Fields are quoted only when they need it; records end with `\n`.
pub fn write_entries<W: Write>(w: W, columns: &[&str; 2], entries: &[Entry]) -> Result<(), ::csv::Error> {
    let mut wtr = WriterBuilder::new()
        .has_headers(false)
        .terminator(Terminator::Any(b'\n'))
        .from_writer(w);
    wtr.write_record(columns)?;
    for e in entries {
        wtr.serialize(e)?;
    }
    wtr.flush()?;
    Ok(())
}

/* ---------------- Parsing ---------------- */

/// Read back a file produced by `write_entries`: (header labels, entries).
/// Columns are taken by position, whatever the header says.
pub fn read_entries<R: Read>(r: R) -> Result<(Vec<String>, Vec<Entry>), ::csv::Error> {
    let mut rdr = ReaderBuilder::new().has_headers(true).from_reader(r);
    let headers = rdr.headers()?.iter().map(String::from).collect();
    let mut entries = Vec::new();
    for rec in rdr.records() {
        let rec = rec?;
        entries.push(rec.deserialize(None)?);
    }
    Ok((headers, entries))
}
