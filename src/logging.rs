use std::fs::File;
use std::io;
use std::path::Path;

use log::LevelFilter;
use simplelog::{ConfigBuilder, WriteLogger};

/// Default log file, relative to the working directory.
pub const DEFAULT_LOG_FILE: &str = "grid-snake.log";

/// Routes `log` output to `path`; the terminal belongs to the UI.
///
/// Calling this twice keeps the first logger and returns an error.
pub fn init_file_logger(path: &Path, level: LevelFilter) -> io::Result<()> {
    let file = File::create(path)?;
    let config = ConfigBuilder::new()
        .set_target_level(LevelFilter::Error)
        .set_thread_level(LevelFilter::Off)
        .build();

    WriteLogger::init(level, config, file)
        .map_err(|error| io::Error::new(io::ErrorKind::AlreadyExists, error))
}
