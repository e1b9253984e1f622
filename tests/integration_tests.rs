//! # Integration Tests for Favlists
//!
//! End-to-end runs over a temporary data folder, through the library
//! pipeline and through the compiled binary.

use anyhow::Result;
use favlists::config::{Config, InputFiles, MatchSettings, OutputSettings, ReportFiles};
use favlists::error::Error;
use favlists::pipeline;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;
use tempfile::TempDir;

/// Test helper to lay out a data folder with every input table.
///
/// Returns the temp dir and a config whose paths all point inside it.
fn create_test_workspace() -> Result<(TempDir, Config)> {
    let temp_dir = TempDir::new()?;
    let root = temp_dir.path();
    let data = root.join("files");
    let library = root.join("library");
    fs::create_dir_all(&data)?;
    fs::create_dir_all(library.join("Artist One").join("Other"))?;
    fs::write(library.join("Artist One").join("Other").join("lost.mp3"), b"")?;

    let lib = library.display();
    let write = |name: &str, content: String| -> Result<PathBuf> {
        let path = data.join(name);
        fs::write(&path, content)?;
        Ok(path)
    };

    let favorites = write(
        "00_favorite-tracks.txt",
        "Artist One - Track One\nArtist Two - Track Two\n\nArtist Three - Track Three\nArtist Four - Missing Track\nUnknown - Song\n".into(),
    )?;
    let playlists = write("01_playlists.csv", "1;Rock\n2;Pop\n10;Jazz/Fusion\n".into())?;
    let artists = write(
        "02_artists.csv",
        "1;Artist One\n2;Artist Two\n10;Artist Three\n2;Artist One\n".into(),
    )?;
    let matched = write(
        "04_result-mplaylist.csv",
        "Artist One/Album/01 Track One.mp3\nArtist Two/Album/02 Track Two.mp3\nArtist Three/Album/03 Track Three.mp3\nNobody/Album/x.mp3\n".into(),
    )?;
    let unmatched = write(
        "05_result-mplaylist-missing.csv",
        "Artist Four - Missing Track\nArtist One - Lost Track\nArtist Two - Gone Track\n".into(),
    )?;
    let overrides = write(
        "06_fix-missing-tracks.csv",
        format!(
            "Artist One - Lost Track;{lib}/Artist One/Other/lost.mp3\nArtist Two - Gone Track;{lib}/nowhere.mp3\n"
        ),
    )?;

    let config = Config {
        inputs: InputFiles {
            favorites,
            playlists,
            artists,
            matched: Some(matched),
            unmatched: Some(unmatched),
            overrides: Some(overrides),
        },
        reports: ReportFiles {
            unresolved_artists: data.join("03_artists_NOT-FOUND.csv"),
            unresolved_paths: data.join("07_fix-missing-tracks_NOT-FOUND.csv"),
        },
        output: OutputSettings {
            playlists_dir: root.join("playlists"),
            player_playlists_dir: root.join("mpd_playlists"),
            raw_playlists_dir: root.join("raw_playlists"),
            ..OutputSettings::default()
        },
        matching: MatchSettings {
            local_prefix: format!("{lib}/"),
            ..MatchSettings::default()
        },
    };

    Ok((temp_dir, config))
}

fn read(path: impl AsRef<Path>) -> String {
    fs::read_to_string(path).expect("output file should exist")
}

/// Make every table resolvable.
fn resolve_everything(config: &Config) -> Result<()> {
    fs::write(
        &config.inputs.artists,
        "1;Artist One\n2;Artist Two\n10;Artist Three\n2;Artist One\n1;Artist Four\n1;Nobody\n1;Unknown\n",
    )?;
    fs::write(config.inputs.unmatched.as_ref().unwrap(), "Artist One - Lost Track\n")?;
    Ok(())
}

#[cfg(test)]
mod pipeline_tests {
    use super::*;

    #[test]
    fn test_full_run_writes_three_playlist_sets() -> Result<()> {
        let (tmp, config) = create_test_workspace()?;
        let root = tmp.path();

        let summary = pipeline::run(&config)?;

        assert_eq!(summary.playlist_files.len(), 3);
        assert_eq!(summary.player_playlist_files.len(), 3);
        assert_eq!(summary.raw_playlist_files.len(), 3);

        // Newest matched track first, reconciled override last
        assert_eq!(
            read(root.join("playlists/02_Pop.m3u")),
            "/music/Artist Two/Album/02 Track Two.mp3\n\
             /music/Artist One/Album/01 Track One.mp3\n\
             /music/Artist One/Other/lost.mp3"
        );
        assert_eq!(
            read(root.join("playlists/01_Rock.m3u")),
            "/music/Artist One/Album/01 Track One.mp3\n/music/Artist One/Other/lost.mp3"
        );
        assert_eq!(
            read(root.join("playlists/10_Jazz-Fusion.m3u")),
            "/music/Artist Three/Album/03 Track Three.mp3"
        );
        assert_eq!(
            read(root.join("mpd_playlists/01_Rock.m3u")),
            "Artist One/Album/01 Track One.mp3\nArtist One/Other/lost.mp3"
        );
        assert_eq!(
            read(root.join("raw_playlists/02_Pop.txt")),
            "Artist Two - Track Two\nArtist One - Track One\nArtist One/Other/lost.mp3"
        );
        assert!(!root.join("playlists/10_Jazz").exists());

        Ok(())
    }

    #[test]
    fn test_unresolved_entries_reported() -> Result<()> {
        let (_tmp, config) = create_test_workspace()?;

        let summary = pipeline::run(&config)?;

        assert_eq!(summary.unresolved_artists, vec!["Artist Four", "Nobody", "Unknown"]);
        assert_eq!(summary.unresolved_paths, vec!["Artist Four - Missing Track"]);
        assert!(!summary.all_set());
        assert_eq!(
            read(&config.reports.unresolved_artists),
            "Artist Four\nNobody\nUnknown"
        );
        assert_eq!(
            read(&config.reports.unresolved_paths),
            "Artist Four - Missing Track"
        );

        Ok(())
    }

    #[test]
    fn test_repeated_missing_track_counted_once_in_report() -> Result<()> {
        let (_tmp, config) = create_test_workspace()?;
        fs::write(
            config.inputs.unmatched.as_ref().unwrap(),
            "Artist Four - Missing Track\nArtist Four - Missing Track\n",
        )?;

        let summary = pipeline::run(&config)?;

        assert_eq!(summary.unresolved_paths, vec!["Artist Four - Missing Track"]);
        assert_eq!(summary.unresolved_path_count, 2);
        assert_eq!(
            read(&config.reports.unresolved_paths),
            "Artist Four - Missing Track"
        );

        Ok(())
    }

    #[test]
    fn test_stale_reports_removed_when_all_resolved() -> Result<()> {
        let (_tmp, config) = create_test_workspace()?;
        pipeline::run(&config)?;
        assert!(config.reports.unresolved_artists.exists());

        resolve_everything(&config)?;
        let summary = pipeline::run(&config)?;

        assert!(summary.all_set());
        assert!(!config.reports.unresolved_artists.exists());
        assert!(!config.reports.unresolved_paths.exists());

        Ok(())
    }

    #[test]
    fn test_rerun_is_byte_identical() -> Result<()> {
        let (_tmp, config) = create_test_workspace()?;

        let first = pipeline::run(&config)?;
        let before: Vec<Vec<u8>> = first.playlist_files.iter().map(fs::read).collect::<Result<_, _>>()?;
        let second = pipeline::run(&config)?;
        let after: Vec<Vec<u8>> = second.playlist_files.iter().map(fs::read).collect::<Result<_, _>>()?;

        assert_eq!(first, second);
        assert_eq!(before, after);

        Ok(())
    }

    #[test]
    fn test_missing_optional_inputs_still_export() -> Result<()> {
        let (tmp, mut config) = create_test_workspace()?;
        config.inputs.matched = None;
        config.inputs.unmatched = Some(tmp.path().join("absent.csv"));
        config.inputs.overrides = None;

        let summary = pipeline::run(&config)?;

        assert!(summary.unresolved_paths.is_empty());
        assert_eq!(
            read(tmp.path().join("raw_playlists/01_Rock.txt")),
            "Artist One - Track One"
        );
        // Matched list is empty, so only the raw export has content
        assert!(summary.playlist_files.is_empty());

        Ok(())
    }

    #[test]
    fn test_missing_mandatory_input_aborts() -> Result<()> {
        let (tmp, config) = create_test_workspace()?;
        fs::remove_file(&config.inputs.favorites)?;

        let err = pipeline::run(&config).unwrap_err();
        assert!(matches!(err, Error::NotFound(ref p) if p == &config.inputs.favorites));
        assert!(!tmp.path().join("playlists").exists());

        Ok(())
    }

    #[test]
    fn test_malformed_playlist_directory_aborts() -> Result<()> {
        let (_tmp, config) = create_test_workspace()?;
        fs::write(&config.inputs.playlists, "1;Rock\n2\n")?;

        let err = pipeline::run(&config).unwrap_err();
        assert!(matches!(err, Error::MalformedRecord { line: 2, fields: 1, .. }));

        Ok(())
    }

    #[test]
    fn test_empty_playlist_directory_aborts() -> Result<()> {
        let (_tmp, config) = create_test_workspace()?;
        fs::write(&config.inputs.playlists, "\n")?;

        let err = pipeline::run(&config).unwrap_err();
        assert!(matches!(err, Error::EmptyPlaylistDirectory));
        assert!(pipeline::check(&config).is_err());

        Ok(())
    }

    #[test]
    fn test_check_reports_table_sizes() -> Result<()> {
        let (_tmp, config) = create_test_workspace()?;

        let stats = pipeline::check(&config)?;
        assert_eq!(stats.favorites, 5);
        assert_eq!(stats.matched, 4);
        assert_eq!(stats.unmatched, 3);
        assert_eq!(stats.playlists, 3);
        assert_eq!(stats.artists, 3);
        assert_eq!(stats.overrides, 2);

        Ok(())
    }
}

#[cfg(test)]
mod cli_tests {
    use super::*;

    /// Write `config` as TOML next to the data and return its path.
    fn write_config(config: &Config, dir: &Path) -> Result<PathBuf> {
        let path = dir.join("config.toml");
        fs::write(&path, toml::to_string(config)?)?;
        Ok(path)
    }

    fn favlists() -> Command {
        Command::new(env!("CARGO_BIN_EXE_favlists"))
    }

    #[test]
    fn test_cli_help_displays_correctly() {
        let output = favlists().arg("--help").output().expect("Failed to run help command");

        let stdout = String::from_utf8_lossy(&output.stdout);
        assert!(output.status.success());
        assert!(stdout.contains("favlists"));
        assert!(stdout.contains("run"));
        assert!(stdout.contains("check"));
        assert!(stdout.contains("completion"));
    }

    #[test]
    fn test_cli_run_prints_report() -> Result<()> {
        let (tmp, config) = create_test_workspace()?;
        let config_path = write_config(&config, tmp.path())?;

        let output = favlists()
            .args(["--config", config_path.to_str().unwrap(), "run"])
            .output()?;

        assert!(output.status.success());
        let stdout = String::from_utf8_lossy(&output.stdout);
        assert!(stdout.contains("Nobody is missing."));
        assert!(stdout.contains("3 artists missing!"));
        assert!(stdout.contains("Artist Four - Missing Track is missing."));
        assert!(stdout.contains("1 missing tracks not found in"));
        assert!(!stdout.contains("all set"));

        Ok(())
    }

    #[test]
    fn test_cli_run_counts_repeated_missing_tracks() -> Result<()> {
        let (tmp, config) = create_test_workspace()?;
        fs::write(
            config.inputs.unmatched.as_ref().unwrap(),
            "Artist Four - Missing Track\nArtist Four - Missing Track\n",
        )?;
        let config_path = write_config(&config, tmp.path())?;

        let output = favlists()
            .args(["--config", config_path.to_str().unwrap(), "run"])
            .output()?;

        assert!(output.status.success());
        let stdout = String::from_utf8_lossy(&output.stdout);
        assert!(stdout.contains("1 paths missing!"));
        assert!(stdout.contains("2 missing tracks not found in"));

        Ok(())
    }

    #[test]
    fn test_cli_run_all_set_with_base_path_override() -> Result<()> {
        let (tmp, config) = create_test_workspace()?;
        resolve_everything(&config)?;
        let config_path = write_config(&config, tmp.path())?;

        let output = favlists()
            .args(["--config", config_path.to_str().unwrap(), "run", "--base-path", "/srv/"])
            .output()?;

        assert!(output.status.success());
        assert!(String::from_utf8_lossy(&output.stdout).contains("You're all set"));
        assert_eq!(
            read(tmp.path().join("playlists/10_Jazz-Fusion.m3u")),
            "/srv/Artist Three/Album/03 Track Three.mp3"
        );

        Ok(())
    }

    #[test]
    fn test_cli_check_fails_on_missing_table() -> Result<()> {
        let (tmp, config) = create_test_workspace()?;
        fs::remove_file(&config.inputs.artists)?;
        let config_path = write_config(&config, tmp.path())?;

        let output = favlists()
            .args(["--config", config_path.to_str().unwrap(), "check"])
            .output()?;

        assert!(!output.status.success());
        assert!(String::from_utf8_lossy(&output.stderr).contains("File not found"));

        Ok(())
    }

    #[test]
    fn test_completion_generation() {
        let output = favlists()
            .args(["completion", "bash"])
            .output()
            .expect("Failed to run completion command");

        assert!(output.status.success());
        let stdout = String::from_utf8_lossy(&output.stdout);
        assert!(stdout.contains("_favlists"));
        assert!(stdout.contains("complete"));
    }
}
