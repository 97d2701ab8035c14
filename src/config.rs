use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::difficulty::{DEFAULT_DIFFICULTY, Difficulty};
use crate::error::{GameError, Result};
use crate::snake::Position;

const APP_DIR_NAME: &str = "grid-snake";
const CONFIG_FILE_NAME: &str = "config.json";

/// Default side length of the square board.
pub const DEFAULT_GRID_SIZE: u16 = 35;

/// Default starting cell of the snake head.
pub const DEFAULT_START: Position = Position { x: 17, y: 17 };

/// Smallest board that still has a free interior cell next to the snake.
pub const MIN_GRID_SIZE: u16 = 4;

/// Random samples tried before food placement scans for free cells.
pub const FOOD_PLACEMENT_MAX_ATTEMPTS: usize = 1024;

/// How long the front end waits for input between clock updates.
pub const FRAME_POLL_INTERVAL: Duration = Duration::from_millis(2);

/// Settings fixed for the lifetime of one game instance.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub grid_size: u16,
    pub start: Position,
    pub default_difficulty: u8,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            grid_size: DEFAULT_GRID_SIZE,
            start: DEFAULT_START,
            default_difficulty: DEFAULT_DIFFICULTY,
        }
    }
}

impl GameConfig {
    /// Builds a config for a `size * size` board with the snake centred.
    #[must_use]
    pub fn with_size(size: u16) -> Self {
        let centre = i32::from(size / 2);
        Self {
            grid_size: size,
            start: Position::new(centre, centre),
            ..Self::default()
        }
    }

    /// Checks that a game can be seeded from this config.
    pub fn validate(&self) -> Result<()> {
        if self.grid_size < MIN_GRID_SIZE {
            return Err(GameError::InvalidConfig(format!(
                "grid size {} is below the minimum of {MIN_GRID_SIZE}",
                self.grid_size
            )));
        }

        if crate::collision::is_out_of_bounds(self.grid_size, self.start) {
            return Err(GameError::InvalidConfig(format!(
                "start position ({}, {}) is outside the {}x{} board",
                self.start.x, self.start.y, self.grid_size, self.grid_size
            )));
        }

        if Difficulty::from_level(self.default_difficulty).is_none() {
            return Err(GameError::InvalidConfig(format!(
                "difficulty {} is outside {}..={}",
                self.default_difficulty,
                Difficulty::MIN,
                Difficulty::MAX
            )));
        }

        Ok(())
    }

    /// Validated default difficulty.
    #[must_use]
    pub fn difficulty(&self) -> Difficulty {
        Difficulty::from_level(self.default_difficulty).unwrap_or_default()
    }
}

/// Returns the platform-correct config file path.
#[must_use]
pub fn config_path() -> PathBuf {
    let mut base = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
    base.push(APP_DIR_NAME);
    base.push(CONFIG_FILE_NAME);
    base
}

/// Loads the game config from `path`.
///
/// Returns the defaults when the file does not exist yet. Fields missing
/// from the file fall back to their defaults.
pub fn load_config(path: &Path) -> Result<GameConfig> {
    let raw = match fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(GameConfig::default()),
        Err(source) => {
            return Err(GameError::ConfigIo {
                path: path.to_path_buf(),
                source,
            });
        }
    };

    serde_json::from_str(&raw).map_err(|source| GameError::ConfigParse {
        path: path.to_path_buf(),
        source,
    })
}

/// Writes `config` to `path`, creating parent directories when needed.
pub fn save_config(path: &Path, config: &GameConfig) -> Result<()> {
    let io_error = |source| GameError::ConfigIo {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(io_error)?;
    }

    let json = serde_json::to_string_pretty(config).map_err(|source| GameError::ConfigParse {
        path: path.to_path_buf(),
        source,
    })?;

    fs::write(path, json).map_err(io_error)
}

#[cfg(test)]
mod tests {
    use std::fs;
    use std::path::PathBuf;
    use std::time::{SystemTime, UNIX_EPOCH};

    use crate::error::GameError;
    use crate::snake::Position;

    use super::{DEFAULT_GRID_SIZE, GameConfig, load_config, save_config};

    #[test]
    fn default_config_is_valid() {
        let config = GameConfig::default();

        assert_eq!(config.grid_size, DEFAULT_GRID_SIZE);
        assert_eq!(config.start, Position::new(17, 17));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn validation_rejects_bad_values() {
        let tiny = GameConfig::with_size(3);
        assert!(matches!(tiny.validate(), Err(GameError::InvalidConfig(_))));

        let outside = GameConfig {
            start: Position::new(10, 2),
            ..GameConfig::with_size(5)
        };
        assert!(outside.validate().is_err());

        let too_hard = GameConfig {
            default_difficulty: 9,
            ..GameConfig::default()
        };
        assert!(too_hard.validate().is_err());
    }

    #[test]
    fn config_file_round_trip() {
        let path = unique_test_path("round_trip");
        let config = GameConfig::with_size(12);

        save_config(&path, &config).expect("config save should succeed");
        let loaded = load_config(&path).expect("config load should succeed");

        assert_eq!(loaded, config);
        cleanup_test_path(&path);
    }

    #[test]
    fn missing_config_file_returns_defaults() {
        let path = unique_test_path("missing");

        let loaded = load_config(&path).expect("missing file should yield defaults");

        assert_eq!(loaded, GameConfig::default());
    }

    #[test]
    fn partial_config_file_keeps_other_defaults() {
        let path = unique_test_path("partial");
        write_test_file(&path, r#"{ "default_difficulty": 5 }"#);

        let loaded = load_config(&path).expect("partial file should parse");

        assert_eq!(loaded.default_difficulty, 5);
        assert_eq!(loaded.grid_size, DEFAULT_GRID_SIZE);
        cleanup_test_path(&path);
    }

    #[test]
    fn malformed_config_file_returns_error() {
        let path = unique_test_path("malformed");
        write_test_file(&path, "not-json");

        assert!(matches!(
            load_config(&path),
            Err(GameError::ConfigParse { .. })
        ));

        cleanup_test_path(&path);
    }

    fn write_test_file(path: &PathBuf, contents: &str) {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("test parent directory should be creatable");
        }
        fs::write(path, contents).expect("test file write should succeed");
    }

    fn unique_test_path(label: &str) -> PathBuf {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("system time should be after epoch")
            .as_nanos();

        std::env::temp_dir()
            .join("grid-snake-config-tests")
            .join(format!("{label}-{nanos}.json"))
    }

    fn cleanup_test_path(path: &PathBuf) {
        let _ = fs::remove_file(path);
        if let Some(parent) = path.parent() {
            let _ = fs::remove_dir(parent);
        }
    }
}
