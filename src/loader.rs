//! # Table Loader
//!
//! Reads the flat-file inputs of a run into memory.
//!
//! - Line lists (favorites, matched, unmatched): one trimmed entry per
//!   non-blank line, file order preserved.
//! - Delimited tables (playlist directory, artist table, overrides): one
//!   `;`-separated pair per non-blank line. No quoting or escaping. Any line
//!   that does not split into exactly two fields aborts the load.
//!
//! Mandatory files must exist. Optional files that are unset or absent load as
//! empty tables.

use crate::config::{ArtistTableLayout, InputFiles};
use crate::error::{Error, Result};
use log::debug;
use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// Playlist id to display name.
pub type PlaylistDirectory = HashMap<String, String>;

/// Track reference (display form) to a literal filesystem path.
pub type OverrideTable = HashMap<String, String>;

/// Everything a run reads from disk.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Tables {
    pub favorites: Vec<String>,
    pub matched: Vec<String>,
    pub unmatched: Vec<String>,
    pub playlists: PlaylistDirectory,
    /// `(artist_name, playlist_id)` pairs in declaration order
    pub artists: Vec<(String, String)>,
    pub overrides: OverrideTable,
}

/// Load all six tables.
pub fn load_tables(inputs: &InputFiles, layout: ArtistTableLayout) -> Result<Tables> {
    let favorites = read_lines(&inputs.favorites)?;
    let playlists = read_playlist_directory(&inputs.playlists)?;
    let artists = read_artist_table(&inputs.artists, layout)?;

    let matched = read_optional(inputs.matched.as_deref(), read_lines)?;
    let unmatched = read_optional(inputs.unmatched.as_deref(), read_lines)?;
    let overrides = read_optional(inputs.overrides.as_deref(), read_override_table)?;

    debug!(
        "Loaded {} favorites, {} matched, {} unmatched, {} playlists, {} artist rows, {} overrides",
        favorites.len(),
        matched.len(),
        unmatched.len(),
        playlists.len(),
        artists.len(),
        overrides.len()
    );

    Ok(Tables {
        favorites,
        matched,
        unmatched,
        playlists,
        artists,
        overrides,
    })
}

/// Read a mandatory line list.
pub fn read_lines(path: &Path) -> Result<Vec<String>> {
    let content = read_mandatory(path)?;
    Ok(content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect())
}

/// Read a `id;display_name` playlist directory. Later duplicates win.
pub fn read_playlist_directory(path: &Path) -> Result<PlaylistDirectory> {
    Ok(read_pairs(path)?.into_iter().collect())
}

/// Read the artist table into `(artist_name, playlist_id)` pairs.
pub fn read_artist_table(path: &Path, layout: ArtistTableLayout) -> Result<Vec<(String, String)>> {
    let pairs = read_pairs(path)?;
    Ok(match layout {
        ArtistTableLayout::IdFirst => pairs.into_iter().map(|(id, artist)| (artist, id)).collect(),
        ArtistTableLayout::ArtistFirst => pairs,
    })
}

/// Read a `track_reference;literal_path` override table. Later duplicates win.
pub fn read_override_table(path: &Path) -> Result<OverrideTable> {
    Ok(read_pairs(path)?.into_iter().collect())
}

/// Split a `;`-delimited file into two-field records.
fn read_pairs(path: &Path) -> Result<Vec<(String, String)>> {
    let content = read_mandatory(path)?;
    let mut pairs = Vec::new();

    for (idx, line) in content.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let fields: Vec<&str> = line.split(';').collect();
        match fields.as_slice() {
            [first, second] => pairs.push((first.to_string(), second.to_string())),
            _ => {
                return Err(Error::MalformedRecord {
                    path: path.to_path_buf(),
                    line: idx + 1,
                    fields: fields.len(),
                })
            }
        }
    }

    Ok(pairs)
}

fn read_mandatory(path: &Path) -> Result<String> {
    if !path.exists() {
        return Err(Error::NotFound(path.to_path_buf()));
    }
    fs::read_to_string(path).map_err(|e| Error::io(path, e))
}

/// Run `read` on an optional path, yielding an empty table when unset or absent.
fn read_optional<T, F>(path: Option<&Path>, read: F) -> Result<T>
where
    T: Default,
    F: Fn(&Path) -> Result<T>,
{
    match path {
        Some(p) if p.exists() => read(p),
        Some(p) => {
            debug!("Optional input {} is absent, treating as empty", p.display());
            Ok(T::default())
        }
        None => Ok(T::default()),
    }
}
