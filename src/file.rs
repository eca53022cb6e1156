// src/file.rs

use std::{
    fs,
    io::{BufWriter, Write},
    path::{Path, PathBuf},
};

use log::debug;
use tempfile::NamedTempFile;

use crate::config::consts::{TEMPLATE_MAX, TEMPLATE_MIN};
use crate::config::options::IdRange;
use crate::csv::write_entries;
use crate::entry::Entry;
use crate::error::ScrapeError;

/// Write `entries` to `path` through a temp file in the same directory, then
/// rename it into place. A failure part-way leaves any previous file untouched.
pub fn write_entries_atomic(
    path: &Path,
    columns: &[&str; 2],
    entries: &[Entry],
) -> Result<PathBuf, ScrapeError> {
    let dir = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    ensure_directory(dir)?;

    let mut tmp = NamedTempFile::new_in(dir)?;
    {
        let mut out = BufWriter::new(tmp.as_file_mut());
        write_entries(&mut out, columns, entries)?;
        out.flush()?;
    }
    debug!("{}: {} rows staged in {}", path.display(), entries.len(), tmp.path().display());
    tmp.persist(path)?;
    Ok(path.to_path_buf())
}

/// Expand `{min}` / `{max}` with the observed id range (`0` when there is none).
pub fn render_template(template: &str, bounds: Option<IdRange>) -> String {
    let (min, max) = bounds.map_or((0, 0), |r| (r.min, r.max));
    template
        .replace(TEMPLATE_MIN, &min.to_string())
        .replace(TEMPLATE_MAX, &max.to_string())
}

/// User path wins; a directory (existing, or spelled with a trailing separator)
/// receives the default file name.
pub fn resolve_out_path(user: Option<&Path>, default_filename: &str) -> Result<PathBuf, ScrapeError> {
    let Some(p) = user else { return Ok(PathBuf::from(default_filename)) };
    if p.as_os_str().is_empty() {
        return Ok(PathBuf::from(default_filename));
    }
    if looks_like_dir_hint(p) || p.is_dir() {
        ensure_directory(p)?;
        Ok(p.join(default_filename))
    } else {
        Ok(p.to_path_buf())
    }
}

pub fn ensure_directory(dir: &Path) -> Result<(), ScrapeError> {
    if dir.exists() && !dir.is_dir() {
        return Err(std::io::Error::other(format!("Path exists but is not a directory: {}", dir.display())).into());
    }
    if !dir.exists() { fs::create_dir_all(dir)?; }
    Ok(())
}

pub fn looks_like_dir_hint(p: &Path) -> bool {
    let s = p.to_string_lossy();
    s.ends_with('/') || s.ends_with('\\')
}
