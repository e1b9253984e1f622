//! # Run Pipeline
//!
//! One batch run, start to finish:
//!
//! 1. Remove stale remediation reports
//! 2. Load every table
//! 3. Build the artist index
//! 4. Match library paths (separator `/`) and favorites (separator ` - `)
//! 5. Reconcile missing tracks through the override table and append the
//!    result to both association lists
//! 6. Write the remediation reports
//! 7. Aggregate and export: playlists with base path, playlists without,
//!    raw favorites playlists
//!
//! Nothing is kept between runs. Every output file is rewritten, so running
//! again after a crash repairs a partial export.

use crate::artist_index::ArtistIndex;
use crate::config::Config;
use crate::error::Result;
use crate::loader::{self, Tables};
use crate::matcher::{self, Association};
use crate::playlist;
use crate::report;
use log::info;
use std::path::PathBuf;

/// What a run produced and what still needs manual attention.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Deduplicated, sorted
    pub unresolved_artists: Vec<String>,
    /// Deduplicated, sorted
    pub unresolved_paths: Vec<String>,
    /// Unresolved missing tracks counted with repeats
    pub unresolved_path_count: usize,
    pub playlist_files: Vec<PathBuf>,
    pub player_playlist_files: Vec<PathBuf>,
    pub raw_playlist_files: Vec<PathBuf>,
}

impl RunSummary {
    /// True when every artist and every missing track was resolved.
    pub fn all_set(&self) -> bool {
        self.unresolved_artists.is_empty() && self.unresolved_paths.is_empty()
    }
}

/// Sizes of the loaded tables.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TableStats {
    pub favorites: usize,
    pub matched: usize,
    pub unmatched: usize,
    pub playlists: usize,
    pub artists: usize,
    pub overrides: usize,
}

impl From<&Tables> for TableStats {
    fn from(t: &Tables) -> Self {
        Self {
            favorites: t.favorites.len(),
            matched: t.matched.len(),
            unmatched: t.unmatched.len(),
            playlists: t.playlists.len(),
            artists: ArtistIndex::from_pairs(t.artists.iter().cloned()).len(),
            overrides: t.overrides.len(),
        }
    }
}

/// Associations from every matching pass of a run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MatchOutcome {
    /// Library paths, then reconciled overrides
    pub files: Vec<Association>,
    /// Favorite references, then reconciled overrides
    pub raw: Vec<Association>,
    /// All passes, with duplicates
    pub unmatched_artists: Vec<String>,
    pub unresolved_paths: Vec<String>,
}

/// Run every matching pass over loaded tables.
pub fn match_all(tables: &Tables, config: &Config) -> MatchOutcome {
    let index = ArtistIndex::from_pairs(tables.artists.iter().cloned());
    let settings = &config.matching;

    let files = matcher::match_tracks(&tables.matched, &index, &settings.matched_separator);
    let raw = matcher::match_tracks(&tables.favorites, &index, &settings.favorites_separator);
    let missing = matcher::match_missing_tracks(
        &tables.unmatched,
        &tables.overrides,
        &index,
        &settings.local_prefix,
    );

    let mut outcome = MatchOutcome {
        files: files.associations,
        raw: raw.associations,
        unmatched_artists: files.unmatched_artists,
        unresolved_paths: missing.unresolved_tracks,
    };
    outcome.files.extend(missing.associations.iter().cloned());
    outcome.raw.extend(missing.associations);
    outcome.unmatched_artists.extend(raw.unmatched_artists);
    outcome.unmatched_artists.extend(missing.unmatched_artists);
    outcome
}

/// Load and validate every table without writing anything.
pub fn check(config: &Config) -> Result<TableStats> {
    config.validate()?;
    let tables = loader::load_tables(&config.inputs, config.matching.artist_table_layout)?;
    playlist::id_width(&tables.playlists)?;
    Ok(TableStats::from(&tables))
}

/// Execute a full run.
pub fn run(config: &Config) -> Result<RunSummary> {
    config.validate()?;
    report::clear_reports(&config.reports)?;

    let tables = loader::load_tables(&config.inputs, config.matching.artist_table_layout)?;
    let outcome = match_all(&tables, config);

    let unresolved_artists = report::dedup_sorted(outcome.unmatched_artists);
    let unresolved_path_count = outcome.unresolved_paths.len();
    let unresolved_paths = report::dedup_sorted(outcome.unresolved_paths);
    report::write_report(&config.reports.unresolved_artists, &unresolved_artists)?;
    report::write_report(&config.reports.unresolved_paths, &unresolved_paths)?;

    let playlists = playlist::build_playlists(&outcome.files, &tables.playlists)?;
    let raw_playlists = playlist::build_playlists(&outcome.raw, &tables.playlists)?;

    let out = &config.output;
    let playlist_files =
        playlist::export_playlists(&out.playlists_dir, &out.base_path, &out.playlist_extension, &playlists)?;
    let player_playlist_files =
        playlist::export_playlists(&out.player_playlists_dir, "", &out.playlist_extension, &playlists)?;
    let raw_playlist_files =
        playlist::export_raw_playlists(&out.raw_playlists_dir, &out.raw_extension, &raw_playlists)?;

    info!(
        "Run complete: {} playlists, {} raw playlists, {} unresolved artists, {} unresolved paths",
        playlist_files.len(),
        raw_playlist_files.len(),
        unresolved_artists.len(),
        unresolved_paths.len()
    );

    Ok(RunSummary {
        unresolved_artists,
        unresolved_paths,
        unresolved_path_count,
        playlist_files,
        player_playlist_files,
        raw_playlist_files,
    })
}
