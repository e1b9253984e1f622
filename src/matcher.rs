//! # Track Matching
//!
//! Turns track references into [`Association`]s by looking up their artist in
//! the [`ArtistIndex`].
//!
//! ## Traversal order
//!
//! [`match_tracks`] walks its input **backwards** and [`match_missing_tracks`]
//! walks **forwards**. Track lists are exported oldest-favorite-first, so
//! reversing them puts the newest favorites first in the association list.
//! Reconciled tracks are appended after that. Changing either order changes
//! the order of every generated playlist.

use crate::artist_index::ArtistIndex;
use crate::loader::OverrideTable;
use crate::path_translator::local_to_library_relative;
use log::{debug, warn};
use std::path::Path;

/// Separator between artist and title in display-form references.
pub const DISPLAY_SEPARATOR: &str = " - ";

/// One `(playlist id, track)` pairing produced during matching.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Association {
    pub playlist_id: String,
    pub track: String,
}

impl Association {
    pub fn new(playlist_id: impl Into<String>, track: impl Into<String>) -> Self {
        Self {
            playlist_id: playlist_id.into(),
            track: track.into(),
        }
    }
}

/// Output of [`match_tracks`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TrackMatches {
    pub associations: Vec<Association>,
    /// One entry per unmatched track, trimmed, duplicates kept
    pub unmatched_artists: Vec<String>,
}

/// Output of [`match_missing_tracks`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Reconciliation {
    /// Associations carrying library-relative paths
    pub associations: Vec<Association>,
    /// Tracks with no entry in the override table, verbatim
    pub unresolved_tracks: Vec<String>,
    pub unmatched_artists: Vec<String>,
}

/// Everything before the first `separator`, or the whole reference if absent.
pub fn artist_segment<'a>(track: &'a str, separator: &str) -> &'a str {
    track.split_once(separator).map_or(track, |(artist, _)| artist)
}

/// Match tracks to playlists by artist, newest (last) track first.
///
/// Each association carries the original, untrimmed track reference.
pub fn match_tracks(tracks: &[String], index: &ArtistIndex, separator: &str) -> TrackMatches {
    let mut result = TrackMatches::default();

    for track in tracks.iter().rev() {
        let artist = artist_segment(track, separator).trim();
        match index.get(artist) {
            Some(ids) => result
                .associations
                .extend(ids.iter().map(|id| Association::new(id.as_str(), track.as_str()))),
            None => result.unmatched_artists.push(artist.to_string()),
        }
    }

    debug!(
        "Matched {} tracks into {} associations, {} unmatched artists",
        tracks.len(),
        result.associations.len(),
        result.unmatched_artists.len()
    );
    result
}

/// Resolve tracks the player could not find through the manual override table.
///
/// Tracks are processed in input order. For each one:
/// - no override: kept verbatim in `unresolved_tracks`
/// - override path not a file on disk: warned about and dropped entirely
/// - otherwise the artist (before `" - "` in the track reference) is looked up
///   and the path, with `local_prefix` removed, is associated with each of its
///   playlists
pub fn match_missing_tracks(
    tracks: &[String],
    overrides: &OverrideTable,
    index: &ArtistIndex,
    local_prefix: &str,
) -> Reconciliation {
    let mut result = Reconciliation::default();

    for track in tracks {
        let Some(raw_path) = overrides.get(track) else {
            result.unresolved_tracks.push(track.clone());
            continue;
        };

        let path = raw_path.trim();
        if !Path::new(path).is_file() {
            warn!("File {path} doesn't seem to exist for track {track}. Skipping.");
            continue;
        }

        let artist = artist_segment(track, DISPLAY_SEPARATOR);
        let relative = local_to_library_relative(path, local_prefix);

        match index.get(artist) {
            Some(ids) => result
                .associations
                .extend(ids.iter().map(|id| Association::new(id.as_str(), relative.as_str()))),
            None => result.unmatched_artists.push(artist.to_string()),
        }
    }

    debug!(
        "Reconciled {} missing tracks: {} associations, {} unresolved, {} unmatched artists",
        tracks.len(),
        result.associations.len(),
        result.unresolved_tracks.len(),
        result.unmatched_artists.len()
    );
    result
}
