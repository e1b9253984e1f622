//! # Path Translation Module
//!
//! Converts between the three path forms a run deals with:
//!
//! - **Local paths** from the override table, as seen by the machine running
//!   the tool (`/mnt/nas/Music/Artist/Album/01.flac`)
//! - **Library-relative paths**, the form players resolve against their own
//!   music root (`Artist/Album/01.flac`)
//! - **Player paths**, library-relative paths with a base path in front
//!   (`/music/Artist/Album/01.flac`)
//!
//! Both conversions are literal string operations. They are not path-aware
//! and never touch the filesystem.
//!
//! ```
//! use favlists::path_translator::{local_to_library_relative, with_base_path};
//!
//! let rel = local_to_library_relative("/mnt/nas/Music/A/B/01.flac", "/mnt/nas/Music/");
//! assert_eq!(rel, "A/B/01.flac");
//! assert_eq!(with_base_path("/music/", &rel), "/music/A/B/01.flac");
//! ```

/// Remove the first occurrence of `local_prefix` from `local_path`.
///
/// The prefix may appear anywhere in the string. Paths that do not contain it,
/// and empty prefixes, leave the input unchanged.
pub fn local_to_library_relative(local_path: &str, local_prefix: &str) -> String {
    if local_prefix.is_empty() {
        return local_path.to_string();
    }
    local_path.replacen(local_prefix, "", 1)
}

/// Prepend `base_path` to a library-relative track. Empty base path means no prefix.
pub fn with_base_path(base_path: &str, track: &str) -> String {
    let mut out = String::with_capacity(base_path.len() + track.len());
    out.push_str(base_path);
    out.push_str(track);
    out
}
