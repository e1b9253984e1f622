//! Builds per-category playlists from a favorite-tracks list.
//!
//! Core modules:
//! - [`loader`] - Flat-file tables into memory
//! - [`artist_index`] - Artist name to playlist ids
//! - [`matcher`] - Track and missing-track matching
//! - [`playlist`] - Aggregation and export
//! - [`pipeline`] - A full run, start to finish
//!
//! ### Supporting Modules
//!
//! - [`config`] - Paths, prefixes and separators for a run
//! - [`error`] - Fatal error types
//! - [`report`] - Remediation report files
//! - [`path_translator`] - Local-prefix stripping and base-path prefixing
//! - [`cli`] - Command-line interface definitions with clap integration
//! - [`completion`] - Shell completion generation
//!
//! ## Quick Start Example
//!
//! ```no_run
//! use favlists::artist_index::ArtistIndex;
//! use favlists::{matcher, playlist};
//! use std::path::Path;
//!
//! let index = ArtistIndex::from_pairs([("Miles Davis", "3")]);
//! let tracks = vec!["Miles Davis/Kind of Blue/01 So What.flac".to_string()];
//! let matches = matcher::match_tracks(&tracks, &index, "/");
//!
//! let directory = [("3".to_string(), "Jazz".to_string())].into_iter().collect();
//! let playlists = playlist::build_playlists(&matches.associations, &directory)?;
//! playlist::export_playlists(Path::new("playlists"), "/music/", "m3u", &playlists)?;
//! # Ok::<(), favlists::error::Error>(())
//! ```
//!
//! ## Input Files
//!
//! | File | Format |
//! |---|---|
//! | favorites | `Artist - Title` per line |
//! | playlist directory | `id;display_name` per line |
//! | artist table | `playlist_id;artist_name` per line |
//! | matched tracks | `Artist/Album/Track.ext` per line |
//! | unmatched tracks | `Artist - Title` per line |
//! | overrides | `Artist - Title;/literal/path.ext` per line |
//!
//! Matched and unmatched tracks come from querying the music player's
//! database; the other tables are maintained by hand.
//!
//! ## Error Handling
//!
//! Only missing mandatory inputs, malformed `;` tables and an empty playlist
//! directory abort a run. Everything else is logged with the `log` crate and
//! collected into the remediation reports.

pub mod artist_index;
pub mod cli;
pub mod completion;
pub mod config;
pub mod error;
pub mod loader;
pub mod matcher;
pub mod path_translator;
pub mod pipeline;
pub mod playlist;
pub mod report;
