//! Platform-specific directory utilities
//!
//! Follows platform conventions for cache and data directories.

use std::path::PathBuf;

use crate::config::CliConfig;

/// Log root: `TILEMON_LOG_DIR`, else the platform cache dir.
///
/// - macOS: `~/Library/Caches/tilemon/logs`
/// - Linux: `~/.cache/tilemon/logs` (or `$XDG_CACHE_HOME/tilemon/logs`)
/// - Windows: `%LOCALAPPDATA%\tilemon\logs`
/// - Fallback: `/tmp/tilemon/logs`
pub fn log_dir(config: &CliConfig) -> PathBuf {
    if let Some(dir) = &config.log_dir {
        return dir.clone();
    }

    directories::ProjectDirs::from("", "", "tilemon")
        .map(|dirs| dirs.cache_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("/tmp/tilemon"))
        .join("logs")
}

/// Save directory: `TILEMON_SAVE_DIR`, else the platform data dir.
///
/// Fallback: `./save_data`
pub fn save_dir(config: &CliConfig) -> PathBuf {
    if let Some(dir) = &config.save_dir {
        return dir.clone();
    }

    directories::ProjectDirs::from("", "", "tilemon")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("./save_data"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_dirs_win() {
        let config = CliConfig {
            log_dir: Some(PathBuf::from("/var/log/tm")),
            save_dir: Some(PathBuf::from("/srv/saves")),
            ..CliConfig::default()
        };
        assert_eq!(log_dir(&config), PathBuf::from("/var/log/tm"));
        assert_eq!(save_dir(&config), PathBuf::from("/srv/saves"));
    }

    #[test]
    fn default_log_dir_ends_in_logs() {
        assert!(log_dir(&CliConfig::default()).ends_with("logs"));
    }
}
