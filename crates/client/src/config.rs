//! Terminal client configuration and loaders.
use std::env;
use std::path::PathBuf;

use twenty48_core::GameConfig;

const APP_NAME: &str = "twenty48";

/// Configuration required to start the terminal client.
#[derive(Clone, Debug)]
pub struct ClientConfig {
    pub game: GameConfig,
    /// Seed for the game-seed generator; drawn from entropy when unset.
    pub seed: Option<u64>,
    pub data_dir: Option<PathBuf>,
    pub log_dir: Option<PathBuf>,
    /// Input poll cadence of the event loop.
    pub frame_interval_ms: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            game: GameConfig::default(),
            seed: None,
            data_dir: None,
            log_dir: None,
            frame_interval_ms: Self::DEFAULT_FRAME_INTERVAL_MS,
        }
    }
}

impl ClientConfig {
    pub const DEFAULT_FRAME_INTERVAL_MS: u64 = 16;

    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `TWENTY48_SEED` - Seed for reproducible games (default: random)
    /// - `TWENTY48_DATA_DIR` - Directory holding the high score (default: platform-specific)
    /// - `TWENTY48_LOG_DIR` - Directory for log files (default: platform-specific)
    /// - `TWENTY48_LEVEL_UP_DELAY_MS` - Pause before level two starts (default: 2000)
    /// - `TWENTY48_FRAME_INTERVAL_MS` - Input poll interval (default: 16)
    pub fn from_env() -> Self {
        let mut config = Self::default();

        config.seed = read_env::<u64>("TWENTY48_SEED");
        config.data_dir = env::var_os("TWENTY48_DATA_DIR").map(PathBuf::from);
        config.log_dir = env::var_os("TWENTY48_LOG_DIR").map(PathBuf::from);

        if let Some(delay) = read_env::<u64>("TWENTY48_LEVEL_UP_DELAY_MS") {
            config.game = config.game.with_level_up_delay_ms(delay);
        }

        if let Some(interval) = read_env::<u64>("TWENTY48_FRAME_INTERVAL_MS") {
            config.frame_interval_ms = interval.max(1);
        }

        config
    }

    /// Directory holding persisted data such as the high score.
    ///
    /// Follows platform conventions when not overridden:
    /// - Linux: `~/.local/share/twenty48`
    /// - macOS: `~/Library/Application Support/twenty48`
    /// - Windows: `%APPDATA%\twenty48`
    pub fn resolved_data_dir(&self) -> PathBuf {
        self.data_dir.clone().unwrap_or_else(|| {
            directories::ProjectDirs::from("", "", APP_NAME)
                .map(|dirs| dirs.data_dir().to_path_buf())
                .unwrap_or_else(|| PathBuf::from("./save_data"))
        })
    }

    /// Directory for the client log file.
    pub fn resolved_log_dir(&self) -> PathBuf {
        self.log_dir.clone().unwrap_or_else(|| {
            directories::ProjectDirs::from("", "", APP_NAME)
                .map(|dirs| dirs.cache_dir().join("logs"))
                .unwrap_or_else(|| PathBuf::from("/tmp/twenty48/logs"))
        })
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.trim().parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_game_rules() {
        let config = ClientConfig::default();
        assert_eq!(config.game, GameConfig::default());
        assert_eq!(config.frame_interval_ms, 16);
        assert!(config.seed.is_none());
    }

    #[test]
    fn explicit_dirs_win_over_platform_dirs() {
        let config = ClientConfig {
            data_dir: Some(PathBuf::from("/srv/twenty48")),
            log_dir: Some(PathBuf::from("/var/log/twenty48")),
            ..ClientConfig::default()
        };
        assert_eq!(config.resolved_data_dir(), PathBuf::from("/srv/twenty48"));
        assert_eq!(config.resolved_log_dir(), PathBuf::from("/var/log/twenty48"));
    }

    #[test]
    fn read_env_treats_unset_as_none() {
        assert_eq!(read_env::<u64>("TWENTY48_TEST_UNSET_VARIABLE"), None);
    }
}
