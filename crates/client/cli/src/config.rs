//! CLI runtime configuration read from the process environment.
use std::env;
use std::path::PathBuf;

/// Process-level settings. Game tuning lives in `config.toml` instead.
#[derive(Clone, Debug, Default)]
pub struct CliConfig {
    pub data_dir: Option<PathBuf>,
    pub log_dir: Option<PathBuf>,
    pub save_dir: Option<PathBuf>,
    pub session_id: Option<String>,
    pub seed: Option<u64>,
}

impl CliConfig {
    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `TILEMON_DATA_DIR` - Content directory (default: bundled `game-content/data`)
    /// - `TILEMON_LOG_DIR` - Log root (default: platform cache dir)
    /// - `TILEMON_SAVE_DIR` - Save file directory (default: platform data dir)
    /// - `GAME_SESSION_ID` - Session identifier for saves and logs (default: `default`)
    /// - `TILEMON_SEED` - World seed for wild encounters (default: time-based)
    pub fn from_env() -> Self {
        Self {
            data_dir: env::var_os("TILEMON_DATA_DIR").map(PathBuf::from),
            log_dir: env::var_os("TILEMON_LOG_DIR").map(PathBuf::from),
            save_dir: env::var_os("TILEMON_SAVE_DIR").map(PathBuf::from),
            session_id: env::var("GAME_SESSION_ID").ok().filter(|id| !id.is_empty()),
            seed: read_env::<u64>("TILEMON_SEED"),
        }
    }

    pub fn session_id(&self) -> &str {
        self.session_id.as_deref().unwrap_or("default")
    }

    pub fn data_dir(&self) -> PathBuf {
        self.data_dir
            .clone()
            .unwrap_or_else(|| PathBuf::from(BUNDLED_DATA_DIR))
    }
}

const BUNDLED_DATA_DIR: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/../../game/content/data");

impl CliConfig {
    /// Explicit seed, else the current Unix time.
    pub fn seed_or_now(&self) -> u64 {
        use std::time::{SystemTime, UNIX_EPOCH};

        self.seed.unwrap_or_else(|| {
            SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map_or(0, |elapsed| elapsed.as_secs())
        })
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_default_session() {
        let config = CliConfig::default();
        assert_eq!(config.session_id(), "default");
    }

    #[test]
    fn bundled_data_dir_contains_species() {
        let config = CliConfig::default();
        assert!(config.data_dir().join("species.ron").exists());
    }
}
