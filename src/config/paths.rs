// Settings and log file locations.
// Resolved through the platform's project directories.

use std::path::PathBuf;

use directories::ProjectDirs;

const APP_NAME: &str = "folio";

fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("", "", APP_NAME)
}

/// Base config directory (~/.config/folio on Linux).
pub fn config_dir() -> Option<PathBuf> {
    project_dirs().map(|dirs| dirs.config_dir().to_path_buf())
}

/// Path to the settings file.
pub fn settings_path() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join("config.json"))
}

/// Base cache directory (~/.cache/folio on Linux).
pub fn cache_dir() -> Option<PathBuf> {
    project_dirs().map(|dirs| dirs.cache_dir().to_path_buf())
}

/// Default log file.
pub fn log_path() -> Option<PathBuf> {
    cache_dir().map(|dir| dir.join(format!("{APP_NAME}.log")))
}
