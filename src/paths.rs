//! XDG-compliant path resolution for the catalog database.

use std::env;
use std::ffi::OsString;
use std::path::PathBuf;

const APP_DIR: &str = "movie-catalog";
const DB_FILE: &str = "catalog.db";

/// Get the data directory.
///
/// # Returns
/// `$XDG_DATA_HOME/movie-catalog`, or `~/.local/share/movie-catalog` when
/// `XDG_DATA_HOME` is unset.
pub fn get_data_dir() -> PathBuf {
    resolve_data_dir(env::var_os("XDG_DATA_HOME"), env::var_os("HOME"))
}

/// Get database file path (data_dir/catalog.db).
pub fn get_db_path() -> PathBuf {
    get_data_dir().join(DB_FILE)
}

fn resolve_data_dir(xdg_data_home: Option<OsString>, home: Option<OsString>) -> PathBuf {
    let data_home = match (xdg_data_home, home) {
        (Some(xdg), _) if !xdg.is_empty() => PathBuf::from(xdg),
        (_, Some(home)) => PathBuf::from(home).join(".local/share"),
        // No home either: fall back to the working directory
        _ => PathBuf::from("."),
    };

    data_home.join(APP_DIR)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_xdg_data_home_wins() {
        let dir = resolve_data_dir(Some("/xdg".into()), Some("/home/me".into()));
        assert_eq!(dir, PathBuf::from("/xdg/movie-catalog"));
    }

    #[test]
    fn test_falls_back_to_home() {
        let dir = resolve_data_dir(None, Some("/home/me".into()));
        assert_eq!(dir, PathBuf::from("/home/me/.local/share/movie-catalog"));
    }

    #[test]
    fn test_empty_xdg_is_ignored() {
        let dir = resolve_data_dir(Some("".into()), Some("/home/me".into()));
        assert_eq!(dir, PathBuf::from("/home/me/.local/share/movie-catalog"));
    }

    #[test]
    fn test_no_home_uses_working_dir() {
        let dir = resolve_data_dir(None, None);
        assert_eq!(dir, PathBuf::from("./movie-catalog"));
    }

    #[test]
    fn test_get_db_path_ends_with_catalog_db() {
        // Env vars are unreliable in parallel tests, only check the suffix
        assert!(get_db_path().ends_with("movie-catalog/catalog.db"));
    }
}
