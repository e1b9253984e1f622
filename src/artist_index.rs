//! Artist name to playlist ids.
//!
//! One artist may feed several playlists. Ids keep declaration order and
//! duplicates are not removed.

use std::collections::HashMap;

/// Multi-valued lookup from artist name (exact, case-sensitive) to playlist ids.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArtistIndex {
    entries: HashMap<String, Vec<String>>,
}

impl ArtistIndex {
    /// Build the index from `(artist_name, playlist_id)` pairs.
    pub fn from_pairs<I, A, P>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (A, P)>,
        A: Into<String>,
        P: Into<String>,
    {
        let mut entries: HashMap<String, Vec<String>> = HashMap::new();
        for (artist, playlist_id) in pairs {
            entries.entry(artist.into()).or_default().push(playlist_id.into());
        }
        Self { entries }
    }

    /// Playlist ids for `artist`, if it is known.
    pub fn get(&self, artist: &str) -> Option<&[String]> {
        self.entries.get(artist).map(Vec::as_slice)
    }

    pub fn contains(&self, artist: &str) -> bool {
        self.entries.contains_key(artist)
    }

    /// Number of distinct artists.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
