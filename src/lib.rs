pub mod clock;
pub mod collision;
pub mod config;
pub mod difficulty;
pub mod error;
pub mod food;
pub mod game;
pub mod grid;
pub mod input;
pub mod logging;
pub mod renderer;
pub mod snake;
pub mod terminal_runtime;
pub mod ui;

pub use error::{GameError, Result};
