//! # Favlists
//!
//! Reconciles a favorite-tracks list with the local music library and a set of
//! hand-maintained tables, then writes one playlist per category (genre,
//! mood, whatever the playlist directory says) for each music player.
//!
//! ## Usage
//!
//! ```bash
//! # Build everything from ./files
//! favlists run
//!
//! # Tables elsewhere, different player root
//! favlists --data-dir ~/music-lists run --base-path /srv/music/
//!
//! # Validate the tables only
//! favlists check
//! ```

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser};
use favlists::cli::{self, Args};
use favlists::completion;
use favlists::config::Config;
use favlists::pipeline::{self, RunSummary};
use log::debug;
use std::path::Path;

/// Initializes logging, parses arguments and dispatches the subcommand.
///
/// # Logging
///
/// Warnings (missing override files, unknown playlist ids) are shown by
/// default. Use `RUST_LOG` for more:
/// - `RUST_LOG=info favlists run` - Show every file written
/// - `RUST_LOG=favlists::matcher=debug favlists run` - Module-specific logging
fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();

    match args.command {
        cli::Command::Run { base_path, local_prefix, artist_layout } => {
            let mut config = load_config(args.config.as_deref(), args.data_dir.as_deref())?;
            if let Some(base_path) = base_path {
                config.output.base_path = base_path;
            }
            if let Some(local_prefix) = local_prefix {
                config.matching.local_prefix = local_prefix;
            }
            if let Some(layout) = artist_layout {
                config.matching.artist_table_layout = layout.into();
            }
            debug!("Running with {config:?}");

            let summary = pipeline::run(&config).context("Failed to build playlists")?;
            print_summary(&summary, &config);
        }
        cli::Command::Check { artist_layout } => {
            let mut config = load_config(args.config.as_deref(), args.data_dir.as_deref())?;
            if let Some(layout) = artist_layout {
                config.matching.artist_table_layout = layout.into();
            }

            let stats = pipeline::check(&config).context("Input tables are not valid")?;
            println!("{} favorite tracks", stats.favorites);
            println!("{} matched tracks", stats.matched);
            println!("{} unmatched tracks", stats.unmatched);
            println!("{} playlists", stats.playlists);
            println!("{} artists", stats.artists);
            println!("{} manual overrides", stats.overrides);
            println!("Tables look good.");
        }
        cli::Command::Completion { shell } => {
            let mut cmd = Args::command();
            completion::generate_completions(completion::shell_to_completion_shell(&shell), &mut cmd);
        }
    }

    Ok(())
}

fn load_config(path: Option<&Path>, data_dir: Option<&Path>) -> Result<Config> {
    let config = Config::load(path).context("Failed to load configuration")?;
    Ok(match data_dir {
        Some(dir) => config.with_data_dir(dir),
        None => config,
    })
}

/// Print unresolved entries and the final verdict.
fn print_summary(summary: &RunSummary, config: &Config) {
    let artists_file = config.inputs.artists.display();
    let artists_report = config.reports.unresolved_artists.display();
    let overrides_file = config
        .inputs
        .overrides
        .as_deref()
        .map_or_else(|| "the override table".to_string(), |p| p.display().to_string());
    let paths_report = config.reports.unresolved_paths.display();

    for artist in &summary.unresolved_artists {
        println!("{artist} is missing.");
    }
    if !summary.unresolved_artists.is_empty() {
        println!("{} artists missing!", summary.unresolved_artists.len());
    }

    for path in &summary.unresolved_paths {
        println!("{path} is missing.");
    }
    if !summary.unresolved_paths.is_empty() {
        println!("{} paths missing!", summary.unresolved_paths.len());
    }

    println!(
        "{} artists not found in {artists_file}.\n{} missing tracks not found in {overrides_file}.",
        summary.unresolved_artists.len(),
        summary.unresolved_path_count
    );
    if !summary.unresolved_artists.is_empty() {
        println!("Update {artists_file} with the artists in {artists_report}.");
    }
    if !summary.unresolved_paths.is_empty() {
        println!("Update {overrides_file} with the paths in {paths_report}.");
    }
    if summary.all_set() {
        println!(
            "You're all set, all your playlists were successfully created in the {} folder!",
            config.output.playlists_dir.display()
        );
    }
}
