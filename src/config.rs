//! # Configuration Module
//!
//! Every path, prefix and separator used during a run lives in one [`Config`]
//! value that is passed down into each stage. Nothing is read from globals.
//!
//! ## Sources
//!
//! Precedence (highest wins):
//! 1. Command-line flags (applied by the binary after loading)
//! 2. An explicit `--config` file
//! 3. The default config file, if present:
//!    - Linux: `~/.config/favlists/config.toml`
//!    - macOS: `~/Library/Application Support/favlists/config.toml`
//!    - Windows: `%APPDATA%\favlists\config.toml`
//! 4. Struct defaults, which mirror the historical `files/` layout
//!
//! ## Example
//!
//! ```toml
//! [output]
//! base_path = "/music/"
//!
//! [matching]
//! local_prefix = "/mnt/nas/Music/"
//! artist_table_layout = "artist-first"
//! ```

use crate::error::{Error, Result};
use log::debug;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Name of the application directory under the platform config dir.
const APP_DIR: &str = "favlists";

/// Folder the default input and report paths live in.
const DEFAULT_DATA_DIR: &str = "files";

/// Full runtime configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub inputs: InputFiles,
    pub reports: ReportFiles,
    pub output: OutputSettings,
    pub matching: MatchSettings,
}

/// The six input tables. The first three are mandatory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InputFiles {
    /// Favorite tracks, one `Artist - Title` per line
    pub favorites: PathBuf,
    /// Playlist directory, `id;display_name`
    pub playlists: PathBuf,
    /// Artist table, `playlist_id;artist_name` by default
    pub artists: PathBuf,
    /// Tracks the player resolved to library files
    pub matched: Option<PathBuf>,
    /// Tracks the player could not resolve
    pub unmatched: Option<PathBuf>,
    /// Manual overrides, `track_reference;literal_path`
    pub overrides: Option<PathBuf>,
}

impl Default for InputFiles {
    fn default() -> Self {
        Self {
            favorites: PathBuf::from("files/00_favorite-tracks.txt"),
            playlists: PathBuf::from("files/01_playlists.csv"),
            artists: PathBuf::from("files/02_artists.csv"),
            matched: Some(PathBuf::from("files/04_result-mplaylist.csv")),
            unmatched: Some(PathBuf::from("files/05_result-mplaylist-missing.csv")),
            overrides: Some(PathBuf::from("files/06_fix-missing-tracks.csv")),
        }
    }
}

/// Remediation reports written when something could not be resolved.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportFiles {
    pub unresolved_artists: PathBuf,
    pub unresolved_paths: PathBuf,
}

impl Default for ReportFiles {
    fn default() -> Self {
        Self {
            unresolved_artists: PathBuf::from("files/03_artists_NOT-FOUND.csv"),
            unresolved_paths: PathBuf::from("files/07_fix-missing-tracks_NOT-FOUND.csv"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputSettings {
    /// Playlists with `base_path` prepended to every entry
    pub playlists_dir: PathBuf,
    /// Same playlists without any prefix, for players with a library root
    pub player_playlists_dir: PathBuf,
    /// Playlists of original favorite references
    pub raw_playlists_dir: PathBuf,
    /// Prefix for every entry in `playlists_dir`. Empty means none.
    pub base_path: String,
    pub playlist_extension: String,
    pub raw_extension: String,
}

impl Default for OutputSettings {
    fn default() -> Self {
        Self {
            playlists_dir: PathBuf::from("playlists"),
            player_playlists_dir: PathBuf::from("mpd_playlists"),
            raw_playlists_dir: PathBuf::from("raw_playlists"),
            base_path: "/music/".to_string(),
            playlist_extension: "m3u".to_string(),
            raw_extension: "txt".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchSettings {
    /// Local filesystem prefix removed from override paths
    pub local_prefix: String,
    /// Artist separator in matched-track paths
    pub matched_separator: String,
    /// Artist separator in favorite track references
    pub favorites_separator: String,
    pub artist_table_layout: ArtistTableLayout,
}

impl Default for MatchSettings {
    fn default() -> Self {
        Self {
            local_prefix: String::new(),
            matched_separator: "/".to_string(),
            favorites_separator: " - ".to_string(),
            artist_table_layout: ArtistTableLayout::IdFirst,
        }
    }
}

/// Field order of the artist table. Deployments disagree, so it is configurable.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ArtistTableLayout {
    /// `playlist_id;artist_name`
    #[default]
    #[serde(alias = "id_first")]
    IdFirst,
    /// `artist_name;playlist_id`
    #[serde(alias = "artist_first")]
    ArtistFirst,
}

impl Config {
    /// Load configuration.
    ///
    /// An explicit `path` must exist. Without one, the default config file is
    /// used when present and struct defaults otherwise.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(p) => {
                if !p.is_file() {
                    return Err(Error::NotFound(p.to_path_buf()));
                }
                Self::from_file(p)
            }
            None => match default_config_path() {
                Some(p) if p.is_file() => Self::from_file(&p),
                _ => {
                    debug!("No config file found, using defaults");
                    Ok(Self::default())
                }
            },
        }
    }

    /// Parse a TOML config file.
    pub fn from_file(path: &Path) -> Result<Self> {
        debug!("Reading config file {}", path.display());
        let content = fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        toml::from_str(&content).map_err(|source| Error::ConfigParse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Rebase every relative input and report path onto `dir`.
    ///
    /// A leading `files/` is replaced by `dir`; any other relative path is
    /// joined onto `dir` whole, subfolders included. Output directories are
    /// left alone; they are relative to the working directory.
    pub fn with_data_dir(mut self, dir: &Path) -> Self {
        let rebase = |p: &mut PathBuf| {
            if p.is_relative() {
                let rest = p.strip_prefix(DEFAULT_DATA_DIR).unwrap_or(p.as_path());
                *p = dir.join(rest);
            }
        };

        rebase(&mut self.inputs.favorites);
        rebase(&mut self.inputs.playlists);
        rebase(&mut self.inputs.artists);
        for p in [
            &mut self.inputs.matched,
            &mut self.inputs.unmatched,
            &mut self.inputs.overrides,
        ]
        .into_iter()
        .flatten()
        {
            rebase(p);
        }
        rebase(&mut self.reports.unresolved_artists);
        rebase(&mut self.reports.unresolved_paths);
        self
    }

    /// Reject values that would make matching or export meaningless.
    pub fn validate(&self) -> Result<()> {
        if self.matching.matched_separator.is_empty() {
            return Err(Error::Config("matching.matched_separator must not be empty".into()));
        }
        if self.matching.favorites_separator.is_empty() {
            return Err(Error::Config("matching.favorites_separator must not be empty".into()));
        }
        if self.output.playlist_extension.is_empty() || self.output.raw_extension.is_empty() {
            return Err(Error::Config("output extensions must not be empty".into()));
        }
        Ok(())
    }
}

/// Default config file location, `<config dir>/favlists/config.toml`.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join(APP_DIR).join("config.toml"))
}
