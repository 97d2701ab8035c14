use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors surfaced by the simulation core and its configuration layer.
///
/// Collisions and rejected inputs are not errors; they are ordinary game
/// state transitions or no-ops.
#[derive(Debug, Error)]
pub enum GameError {
    #[error("no free interior cell left on the {size}x{size} board")]
    BoardFull { size: u16 },

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("failed to read config file {}: {source}", .path.display())]
    ConfigIo {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to parse config file {}: {source}", .path.display())]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

pub type Result<T> = std::result::Result<T, GameError>;

impl From<GameError> for io::Error {
    fn from(error: GameError) -> Self {
        match error {
            GameError::ConfigIo { source, .. } => source,
            other => io::Error::new(io::ErrorKind::InvalidData, other),
        }
    }
}
