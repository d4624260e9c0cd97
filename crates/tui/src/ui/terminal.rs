use std::io::{self, Stdout, stdout};

use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::{Terminal, backend::CrosstermBackend};

use crate::error::{AppError, Result};

pub type AppTerminal = Terminal<CrosstermBackend<Stdout>>;

fn terminal_error(step: &'static str) -> impl FnOnce(io::Error) -> AppError {
    move |err| {
        tracing::error!(step, "terminal: {err}");
        AppError::Terminal(format!("{step}: {err}"))
    }
}

/// Raw mode plus alternate screen; pair with [`restore_terminal`].
pub fn setup_terminal() -> Result<AppTerminal> {
    enable_raw_mode().map_err(terminal_error("enable raw mode"))?;
    let mut stdout = stdout();
    crossterm::execute!(stdout, EnterAlternateScreen)
        .map_err(terminal_error("enter alternate screen"))?;
    Terminal::new(CrosstermBackend::new(stdout)).map_err(terminal_error("create terminal"))
}

pub fn restore_terminal(terminal: &mut AppTerminal) -> Result<()> {
    disable_raw_mode().map_err(terminal_error("disable raw mode"))?;
    crossterm::execute!(terminal.backend_mut(), LeaveAlternateScreen)
        .map_err(terminal_error("leave alternate screen"))?;
    terminal
        .show_cursor()
        .map_err(terminal_error("show cursor"))?;
    Ok(())
}
