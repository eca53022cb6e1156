// src/extract/table.rs
// Structural table extraction: markup events → tables of plain-text cells →
// the table whose header row carries the expected labels → entries.

use log::{debug, info};

use crate::config::options::{DuplicatePolicy, TableSpec};
use crate::core::lexer::{Event, Lexer};
use crate::core::sanitize::{first_number, normalize_ws, strip_footnotes};
use crate::entry::EntrySet;
use crate::error::ScrapeError;

/// Annotation elements whose end tag HTML lets authors omit inside `<ruby>`.
const RUBY_ANNOTATIONS: &[&str] = &["rt", "rp"];

pub type Row = Vec<String>;
pub type Table = Vec<Row>;

/// Collect every outermost `<table>` in `html` as rows of normalized cell text.
pub fn collect_tables(html: &str, skip_tags: &[&str]) -> Vec<Table> {
    let mut c = TableCollector::new(skip_tags);
    for ev in Lexer::new(html) {
        c.feed(ev);
    }
    c.finish()
}

/// Event-driven table builder.
///
/// * `table_depth` counts open `<table>` elements; only the outermost one
///   opens and closes a collected table, nested ones just contribute text.
/// * `skip_open` holds the open annotation elements, innermost last; while it
///   is non-empty no text reaches the current cell. `</ruby>` (and a new
///   `<rt>`/`<rp>`) closes ruby annotations left open, as HTML allows.
pub struct TableCollector<'s> {
    skip_tags: &'s [&'s str],
    tables: Vec<Table>,
    table_depth: usize,
    skip_open: Vec<String>,
    current: Table,
    row: Option<Row>,
    cell: Option<String>,
}

impl<'s> TableCollector<'s> {
    pub fn new(skip_tags: &'s [&'s str]) -> Self {
        Self {
            skip_tags,
            tables: Vec::new(),
            table_depth: 0,
            skip_open: Vec::new(),
            current: Vec::new(),
            row: None,
            cell: None,
        }
    }

    pub fn feed(&mut self, ev: Event<'_>) {
        match ev {
            Event::Start { name, self_closing } => self.start(&name, self_closing),
            Event::End { name } => self.end(&name),
            Event::Text(t) => self.push_text(t),
            Event::Entity(t) | Event::CharRef(t) => self.push_text(&t),
        }
    }

    /// Flush whatever is still open (unterminated documents) and return the tables.
    pub fn finish(mut self) -> Vec<Table> {
        if self.table_depth > 0 {
            self.close_table();
        }
        self.tables
    }

    fn is_skip(&self, name: &str) -> bool {
        self.skip_tags.contains(&name)
    }

    fn start(&mut self, name: &str, self_closing: bool) {
        if self.is_skip(name) {
            if !self_closing && self.cell.is_some() {
                if RUBY_ANNOTATIONS.contains(&name) {
                    self.close_ruby_annotations();
                }
                self.skip_open.push(s!(name));
            }
            return;
        }
        match name {
            "table" if !self_closing => {
                self.table_depth += 1;
                if self.table_depth == 1 {
                    self.current.clear();
                    self.row = None;
                    self.cell = None;
                }
            }
            "tr" if self.table_depth == 1 => {
                self.close_row();
                self.row = Some(Vec::new());
            }
            "td" | "th" if self.table_depth == 1 => {
                self.close_cell();
                if self.row.is_none() {
                    self.row = Some(Vec::new());
                }
                self.cell = Some(s!());
                self.skip_open.clear();
            }
            "br" => self.push_text(" "),
            _ => {}
        }
    }

    fn end(&mut self, name: &str) {
        if self.is_skip(name) {
            if let Some(at) = self.skip_open.iter().rposition(|open| open == name) {
                self.skip_open.truncate(at);
            }
            return;
        }
        match name {
            "ruby" => self.close_ruby_annotations(),
            "table" if self.table_depth > 0 => {
                self.table_depth -= 1;
                if self.table_depth == 0 {
                    self.close_table();
                }
            }
            "tr" if self.table_depth == 1 => self.close_row(),
            "td" | "th" if self.table_depth == 1 => self.close_cell(),
            _ => {}
        }
    }

    /// Pop `rt`/`rp` regions still open at the top of the stack.
    fn close_ruby_annotations(&mut self) {
        while self.skip_open.last().is_some_and(|open| RUBY_ANNOTATIONS.contains(&open.as_str())) {
            self.skip_open.pop();
        }
    }

    fn push_text(&mut self, t: &str) {
        if !self.skip_open.is_empty() {
            return;
        }
        if let Some(cell) = self.cell.as_mut() {
            cell.push_str(t);
        }
    }

    fn close_cell(&mut self) {
        if let Some(raw) = self.cell.take() {
            let text = normalize_ws(&raw);
            self.row.get_or_insert_with(Vec::new).push(text);
        }
        self.skip_open.clear();
    }

    fn close_row(&mut self) {
        self.close_cell();
        if let Some(row) = self.row.take() {
            if !row.is_empty() {
                self.current.push(row);
            }
        }
    }

    fn close_table(&mut self) {
        self.close_row();
        self.table_depth = 0;
        let table = std::mem::take(&mut self.current);
        if !table.is_empty() {
            self.tables.push(table);
        }
    }
}

/// (id column, name column): the first header cell containing the id needle,
/// then the first *other* cell containing the name needle.
/// `None` unless both are found in distinct cells.
pub fn match_header(header: &[String], needles: &[&str; 2]) -> Option<(usize, usize)> {
    let id_col = header.iter().position(|cell| cell.contains(needles[0]))?;
    let name_col = header
        .iter()
        .enumerate()
        .position(|(i, cell)| i != id_col && cell.contains(needles[1]))?;
    Some((id_col, name_col))
}

/// Map the data rows of one table into `set`. Malformed rows are skipped.
/// Returns the number of rows that produced an entry.
pub fn rows_to_entries(
    rows: &[Row],
    id_col: usize,
    name_col: usize,
    set: &mut EntrySet,
) -> Result<usize, ScrapeError> {
    let mut accepted = 0;
    for (i, row) in rows.iter().enumerate() {
        let (Some(id_cell), Some(name_cell)) = (row.get(id_col), row.get(name_col)) else {
            debug!("row {i}: {} cell(s), skipped", row.len());
            continue;
        };
        let Some(id) = first_number(id_cell).filter(|&id| id > 0) else {
            debug!("row {i}: no identifier in {id_cell:?}, skipped");
            continue;
        };
        let name = strip_footnotes(name_cell);
        if name.is_empty() {
            debug!("row {i}: empty name for id {id}, skipped");
            continue;
        }
        if set.insert(id, name)? {
            accepted += 1;
        }
    }
    Ok(accepted)
}

/// Find the first table whose header row matches `spec.header_needles` and
/// yields at least one entry.
pub fn extract(html: &str, spec: &TableSpec, policy: DuplicatePolicy) -> Result<EntrySet, ScrapeError> {
    let tables = collect_tables(html, spec.skip_tags);
    debug!("{} table(s) on page", tables.len());

    for (t, table) in tables.iter().enumerate() {
        let Some((header, body)) = table.split_first() else { continue };
        let Some((id_col, name_col)) = match_header(header, &spec.header_needles) else {
            continue;
        };

        let mut set = EntrySet::new(policy);
        let accepted = rows_to_entries(body, id_col, name_col, &mut set)?;
        if set.is_empty() {
            debug!("table {t}: header matched but no usable rows");
            continue;
        }
        info!("table {t}: {accepted} of {} row(s) accepted", body.len());
        return Ok(set);
    }

    Err(ScrapeError::TableNotFound {
        needles: spec.header_needles.iter().map(|n| format!("{n:?}")).collect::<Vec<_>>().join(" and "),
    })
}
