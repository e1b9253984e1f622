//! # Playlist Aggregation and Export
//!
//! Groups associations by playlist id, names each group
//! `<zero-padded id>_<display name>` and writes one file per group.
//!
//! ## Padding
//!
//! Ids are left-padded with zeros to the digit count of the largest numeric id
//! in the playlist directory, so `1` and `10` become `01_Rock` and `10_Jazz`
//! and sort in id order by file name.
//!
//! ## File format
//!
//! Entries are joined with `\n` without a trailing newline. Existing files
//! with the same name are overwritten.

use crate::error::{Error, Result};
use crate::loader::PlaylistDirectory;
use crate::matcher::Association;
use crate::path_translator::with_base_path;
use log::{info, warn};
use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::path::{Path, PathBuf};

/// Composite playlist name to ordered tracks.
pub type Playlists = BTreeMap<String, Vec<String>>;

/// Group `associations` by playlist id and key each group by its composite name.
///
/// Track order inside a group is association order. Ids missing from
/// `directory` are reported and their group is dropped.
///
/// # Errors
///
/// [`Error::EmptyPlaylistDirectory`] when `directory` is empty, whether or not
/// there is anything to group.
pub fn build_playlists(associations: &[Association], directory: &PlaylistDirectory) -> Result<Playlists> {
    let width = id_width(directory)?;
    let mut playlists = Playlists::new();

    for (playlist_id, tracks) in group_by_playlist(associations) {
        match directory.get(playlist_id) {
            Some(name) => {
                playlists.insert(playlist_name(playlist_id, name, width), tracks);
            }
            None => warn!("Playlist id {playlist_id} not in the playlist directory."),
        }
    }

    Ok(playlists)
}

/// Stable group-by on playlist id, groups in order of first appearance.
fn group_by_playlist(associations: &[Association]) -> Vec<(&str, Vec<String>)> {
    let mut groups: Vec<(&str, Vec<String>)> = Vec::new();
    let mut positions: HashMap<&str, usize> = HashMap::new();

    for assoc in associations {
        let pos = *positions.entry(assoc.playlist_id.as_str()).or_insert_with(|| {
            groups.push((assoc.playlist_id.as_str(), Vec::new()));
            groups.len() - 1
        });
        groups[pos].1.push(assoc.track.clone());
    }

    groups
}

/// Digit count of the largest numeric id in `directory`.
///
/// Non-numeric ids do not take part; a directory with no numeric id pads nothing.
pub fn id_width(directory: &PlaylistDirectory) -> Result<usize> {
    if directory.is_empty() {
        return Err(Error::EmptyPlaylistDirectory);
    }

    let max = directory
        .keys()
        .filter_map(|id| id.trim().parse::<u64>().ok())
        .max();

    Ok(max.map_or(0, |m| m.to_string().len()))
}

/// `<id padded to width>_<name>`.
pub fn playlist_name(playlist_id: &str, name: &str, width: usize) -> String {
    format!("{playlist_id:0>width$}_{name}")
}

/// File name for a playlist: every `/` becomes `-`, then the extension.
pub fn playlist_file_name(playlist: &str, extension: &str) -> String {
    format!("{}.{extension}", playlist.replace('/', "-"))
}

/// Write every playlist into `folder` with `base_path` in front of each entry.
///
/// Returns the written file paths.
pub fn export_playlists(
    folder: &Path,
    base_path: &str,
    extension: &str,
    playlists: &Playlists,
) -> Result<Vec<PathBuf>> {
    write_playlists(folder, extension, playlists, |track| with_base_path(base_path, track))
}

/// Write every playlist into `folder` with entries as they are.
pub fn export_raw_playlists(folder: &Path, extension: &str, playlists: &Playlists) -> Result<Vec<PathBuf>> {
    write_playlists(folder, extension, playlists, str::to_string)
}

fn write_playlists<F>(folder: &Path, extension: &str, playlists: &Playlists, entry: F) -> Result<Vec<PathBuf>>
where
    F: Fn(&str) -> String,
{
    fs::create_dir_all(folder).map_err(|e| Error::io(folder, e))?;

    let mut written = Vec::with_capacity(playlists.len());
    for (playlist, tracks) in playlists {
        let filename = folder.join(playlist_file_name(playlist, extension));
        info!("Creating {}.", filename.display());

        let content = tracks.iter().map(|t| entry(t.as_str())).collect::<Vec<_>>().join("\n");
        fs::write(&filename, content).map_err(|e| Error::io(&filename, e))?;
        written.push(filename);
    }

    Ok(written)
}
