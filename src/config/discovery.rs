//! Database file discovery.

use std::path::{Path, PathBuf};

use crate::config::constants::{CONTAINER_DATA_DIR, LOCAL_DATA_DIR};

/// Directories searched for database files, in order of preference:
/// `<exe_dir>/data`, the container data directory, then `./data`.
pub fn database_search_dirs() -> Vec<PathBuf> {
    let mut dirs = Vec::with_capacity(3);
    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            dirs.push(exe_dir.join(LOCAL_DATA_DIR));
        }
    }
    dirs.push(PathBuf::from(CONTAINER_DATA_DIR));
    dirs.push(PathBuf::from(LOCAL_DATA_DIR));
    dirs
}

/// Picks the database path to use.
///
/// An explicit path is returned as-is, even if it does not exist, so that the
/// open error names the file the operator asked for. Otherwise the first
/// `dir/file_name` that exists wins.
pub fn find_database(
    explicit: Option<&Path>,
    file_name: &str,
    search_dirs: &[PathBuf],
) -> Option<PathBuf> {
    if let Some(path) = explicit {
        return Some(path.to_path_buf());
    }

    search_dirs
        .iter()
        .map(|dir| dir.join(file_name))
        .find(|candidate| candidate.is_file())
}
