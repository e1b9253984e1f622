//! # Remediation Reports
//!
//! Unresolved artists and unresolved tracks are written to two report files
//! for manual curation. Both are removed at the start of every run, so a
//! report that is absent after a run means nothing was left unresolved.

use crate::config::ReportFiles;
use crate::error::{Error, Result};
use log::{debug, info};
use std::collections::BTreeSet;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

/// Delete report files left by a previous run. Absent files are fine.
pub fn clear_reports(reports: &ReportFiles) -> Result<()> {
    for path in [&reports.unresolved_artists, &reports.unresolved_paths] {
        match fs::remove_file(path) {
            Ok(()) => debug!("Removed stale report {}", path.display()),
            Err(e) if e.kind() == ErrorKind::NotFound => {}
            Err(e) => return Err(Error::io(path, e)),
        }
    }
    Ok(())
}

/// Deduplicate and sort report entries.
pub fn dedup_sorted<I, S>(entries: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    entries
        .into_iter()
        .map(Into::into)
        .collect::<BTreeSet<String>>()
        .into_iter()
        .collect()
}

/// Write `entries` newline-joined to `path`. Nothing is written for an empty list.
///
/// Returns whether a file was written.
pub fn write_report(path: &Path, entries: &[String]) -> Result<bool> {
    if entries.is_empty() {
        return Ok(false);
    }

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| Error::io(parent, e))?;
    }
    fs::write(path, entries.join("\n")).map_err(|e| Error::io(path, e))?;
    info!("Wrote {} entries to {}", entries.len(), path.display());
    Ok(true)
}
