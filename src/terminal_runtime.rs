use std::io;
use std::panic;

use crossterm::cursor::{Hide, Show};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::backend::CrosstermBackend;
use ratatui::{Frame, Terminal};

/// Raw-mode alternate screen that the board is drawn on.
///
/// Dropping the session hands the terminal back to the shell.
pub struct TerminalSession {
    terminal: Terminal<CrosstermBackend<io::Stdout>>,
}

impl TerminalSession {
    /// Takes over stdout. Any partial setup is undone if a later step fails.
    pub fn enter() -> io::Result<Self> {
        enable_raw_mode()?;

        let session = execute!(io::stdout(), EnterAlternateScreen, Hide)
            .and_then(|()| Terminal::new(CrosstermBackend::new(io::stdout())))
            .map(|terminal| Self { terminal });
        if session.is_err() {
            let _ = Self::restore();
        }
        session
    }

    /// Renders one frame.
    pub fn draw<F>(&mut self, render: F) -> io::Result<()>
    where
        F: FnOnce(&mut Frame<'_>),
    {
        self.terminal.draw(render).map(|_| ())
    }

    /// Makes a panic leave raw mode before the default report prints.
    pub fn install_panic_hook() {
        let default_hook = panic::take_hook();

        panic::set_hook(Box::new(move |panic_info| {
            let _ = Self::restore();
            default_hook(panic_info);
        }));
    }

    fn restore() -> io::Result<()> {
        let raw = disable_raw_mode();
        execute!(io::stdout(), Show, LeaveAlternateScreen).and(raw)
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        let _ = Self::restore();
    }
}
