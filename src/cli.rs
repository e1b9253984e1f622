//! # Command-Line Interface Module
//!
//! Clap derive definitions for the `favlists` binary.
//!
//! ## Commands
//!
//! - `run`: Build and export every playlist, then report what is unresolved
//! - `check`: Load and validate the input tables without writing anything
//! - `completion`: Print a shell completion script
//!
//! ## Examples
//!
//! ```bash
//! favlists run
//! favlists --data-dir ~/favlists/files run --base-path /music/
//! favlists completion fish > ~/.config/fish/completions/favlists.fish
//! ```

use crate::config::ArtistTableLayout;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Shell types supported for completion generation
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum, Debug)]
#[allow(clippy::enum_variant_names)]
pub enum Shell {
    /// Bash shell
    Bash,
    /// Zsh shell
    Zsh,
    /// Fish shell
    Fish,
    /// PowerShell
    PowerShell,
    /// Elvish shell
    Elvish,
}

/// Artist table field order, as accepted on the command line
#[derive(Copy, Clone, PartialEq, Eq, ValueEnum, Debug)]
pub enum Layout {
    /// `playlist_id;artist_name`
    IdFirst,
    /// `artist_name;playlist_id`
    ArtistFirst,
}

impl From<Layout> for ArtistTableLayout {
    fn from(layout: Layout) -> Self {
        match layout {
            Layout::IdFirst => ArtistTableLayout::IdFirst,
            Layout::ArtistFirst => ArtistTableLayout::ArtistFirst,
        }
    }
}

/// Main application arguments structure.
#[derive(Parser, Debug)]
#[command(name = "favlists")]
#[command(about = "Favlists: turn favorite tracks into per-genre playlists for your music players")]
#[command(version)]
pub struct Args {
    /// Path to a TOML config file
    ///
    /// Defaults to `<config dir>/favlists/config.toml` when that file exists.
    #[arg(short, long, global = true, env = "FAVLISTS_CONFIG", value_hint = clap::ValueHint::FilePath)]
    pub config: Option<PathBuf>,

    /// Folder holding the input tables and reports
    ///
    /// Relative input and report paths from the config are resolved inside
    /// this folder, with a leading `files/` replaced by it.
    #[arg(short, long, global = true, value_hint = clap::ValueHint::DirPath)]
    pub data_dir: Option<PathBuf>,

    /// The subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Build and export all playlists
    ///
    /// Matches favorites and library paths against the artist table, resolves
    /// missing tracks through the override table and writes three sets of
    /// playlists. Unresolved artists and tracks are written to report files
    /// for manual curation.
    Run {
        /// Prefix for every entry of the main playlists (e.g. `/music/`)
        #[arg(long)]
        base_path: Option<String>,

        /// Local filesystem prefix removed from override paths
        #[arg(long, value_hint = clap::ValueHint::DirPath)]
        local_prefix: Option<String>,

        /// Field order of the artist table
        #[arg(long, value_enum)]
        artist_layout: Option<Layout>,
    },

    /// Load and validate all input tables
    ///
    /// Fails on missing mandatory files, malformed records or an empty
    /// playlist directory. Writes nothing.
    Check {
        /// Field order of the artist table
        #[arg(long, value_enum)]
        artist_layout: Option<Layout>,
    },

    /// Generate shell completions
    ///
    /// Usage: favlists completion bash > ~/.local/share/bash-completion/completions/favlists
    Completion {
        /// Shell to generate completions for
        shell: Shell,
    },
}
