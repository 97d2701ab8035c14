use std::io;
use std::path::PathBuf;
use std::time::Instant;

use clap::Parser;
use grid_snake::config::{FRAME_POLL_INTERVAL, GameConfig, config_path, load_config};
use grid_snake::game::{Game, TickOutcome};
use grid_snake::input::{GameInput, poll_input};
use grid_snake::logging::{DEFAULT_LOG_FILE, init_file_logger};
use grid_snake::renderer;
use grid_snake::terminal_runtime::TerminalSession;
use log::{LevelFilter, error, info};

#[derive(Debug, Parser)]
#[command(version, about = "Grid snake in the terminal")]
struct Cli {
    /// Side length of the square board.
    #[arg(long)]
    size: Option<u16>,

    /// Starting difficulty level (1 = slowest, 5 = fastest).
    #[arg(long)]
    difficulty: Option<u8>,

    /// Config file to read instead of the platform default.
    #[arg(long)]
    config: Option<PathBuf>,

    /// File that receives log output.
    #[arg(long, default_value = DEFAULT_LOG_FILE)]
    log_file: PathBuf,

    /// Log verbosity (off, error, warn, info, debug, trace).
    #[arg(long, default_value = "info")]
    log_level: LevelFilter,
}

fn main() -> io::Result<()> {
    let cli = Cli::parse();
    init_file_logger(&cli.log_file, cli.log_level)?;

    let config_file = cli.config.clone().unwrap_or_else(config_path);
    let mut config = load_config(&config_file)?;
    if let Some(size) = cli.size {
        let resized = GameConfig::with_size(size);
        config.grid_size = resized.grid_size;
        config.start = resized.start;
    }
    if let Some(level) = cli.difficulty {
        config.default_difficulty = level;
    }

    let game = Game::new(config)?;
    info!(
        "starting {}x{} board from {}",
        config.grid_size,
        config.grid_size,
        config_file.display()
    );

    TerminalSession::install_panic_hook();
    let mut session = TerminalSession::enter()?;
    let result = run(&mut session, game);
    drop(session);

    if let Err(error) = &result {
        error!("terminal loop failed: {error}");
    }
    result
}

fn run(session: &mut TerminalSession, mut game: Game) -> io::Result<()> {
    let mut last_frame = Instant::now();

    loop {
        session.draw(|frame| renderer::render(frame, &game))?;

        if let Some(input) = poll_input(FRAME_POLL_INTERVAL)? {
            match input {
                GameInput::Quit => break,
                GameInput::Direction(direction) => game.update_direction(direction),
                GameInput::Difficulty(level) => game.update_difficulty(level),
                GameInput::Start => game.start(),
                GameInput::Stop => game.stop(),
                GameInput::Reset => game.reset(),
            }
        }

        let now = Instant::now();
        if let TickOutcome::GameOver(reason) = game.advance_clock(now - last_frame) {
            info!("final length {} ({reason:?})", game.snake().len());
        }
        last_frame = now;
    }

    info!("quit after {} ticks", game.tick_count());
    Ok(())
}
