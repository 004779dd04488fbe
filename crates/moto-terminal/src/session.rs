// ABOUTME: Owns the terminal for the lifetime of the UI.
// ABOUTME: Raw mode and the alternate screen are undone when the session drops.

use std::io::{self, Stdout, Write};

use crossterm::cursor::{Hide, MoveTo, Show};
use crossterm::style::Print;
use crossterm::terminal::{
    self, Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::{execute, queue};

#[derive(Debug, thiserror::Error)]
pub enum TerminalError {
    #[error("Failed to set up terminal: {0}")]
    SetupError(#[source] io::Error),

    #[error("Failed to write to terminal: {0}")]
    WriteError(#[source] io::Error),

    #[error("Failed to read terminal input: {0}")]
    ReadError(#[source] io::Error),
}

pub struct TerminalSession {
    stdout: Stdout,
}

impl TerminalSession {
    /// Take over the terminal: raw mode, alternate screen, hidden cursor
    pub fn enter() -> Result<Self, TerminalError> {
        terminal::enable_raw_mode().map_err(TerminalError::SetupError)?;

        let mut stdout = io::stdout();
        if let Err(e) = execute!(stdout, EnterAlternateScreen, Clear(ClearType::All), Hide) {
            let _ = terminal::disable_raw_mode();
            return Err(TerminalError::SetupError(e));
        }

        tracing::info!("entered alternate screen");
        Ok(Self { stdout })
    }

    /// Current size as (columns, rows)
    pub fn size(&self) -> Result<(u16, u16), TerminalError> {
        terminal::size().map_err(TerminalError::SetupError)
    }

    /// Paint a frame from the top-left corner, clearing whatever the
    /// previous frame left to the right of and below it
    pub fn draw(&mut self, frame: &str) -> Result<(), TerminalError> {
        let mut rows = 0u16;
        for (row, line) in frame.lines().enumerate() {
            let row = u16::try_from(row).unwrap_or(u16::MAX);
            queue!(
                self.stdout,
                MoveTo(0, row),
                Print(line),
                Clear(ClearType::UntilNewLine)
            )
            .map_err(TerminalError::WriteError)?;
            rows = row.saturating_add(1);
        }
        queue!(self.stdout, MoveTo(0, rows), Clear(ClearType::FromCursorDown))
            .map_err(TerminalError::WriteError)?;
        self.stdout.flush().map_err(TerminalError::WriteError)
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        if let Err(e) = execute!(self.stdout, Show, LeaveAlternateScreen) {
            tracing::warn!("Failed to leave alternate screen: {}", e);
        }
        if let Err(e) = terminal::disable_raw_mode() {
            tracing::warn!("Failed to disable raw mode: {}", e);
        }
        tracing::info!("restored terminal");
    }
}
