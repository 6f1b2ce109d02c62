//! Raw-mode terminal session for the interactive quiz.

use std::io::{self, Stdout};
use std::panic;

use crossterm::{
    cursor, execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};

pub type QuizTerminal = Terminal<CrosstermBackend<Stdout>>;

/// Owns the alternate screen while the quiz runs.
///
/// Dropping an active session puts the terminal back, so an early `?`
/// return from the event loop never leaves the shell in raw mode.
pub struct TerminalSession {
    terminal: QuizTerminal,
    active: bool,
}

impl TerminalSession {
    /// Enter raw mode on the alternate screen.
    pub fn enter() -> io::Result<Self> {
        install_panic_hook();
        enable_raw_mode()?;
        if let Err(e) = execute!(io::stdout(), EnterAlternateScreen, cursor::Hide) {
            let _ = disable_raw_mode();
            return Err(e);
        }

        let terminal = match Terminal::new(CrosstermBackend::new(io::stdout())) {
            Ok(terminal) => terminal,
            Err(e) => {
                let _ = release();
                return Err(e);
            }
        };
        tracing::debug!("entered quiz terminal session");

        Ok(Self {
            terminal,
            active: true,
        })
    }

    pub fn terminal_mut(&mut self) -> &mut QuizTerminal {
        &mut self.terminal
    }

    /// Leave the session, reporting any failure to restore the terminal.
    pub fn leave(mut self) -> io::Result<()> {
        self.active = false;
        release()?;
        tracing::debug!("left quiz terminal session");
        Ok(())
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        if self.active {
            if let Err(e) = release() {
                tracing::error!(error = %e, "failed to restore terminal");
            }
        }
    }
}

fn release() -> io::Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen, cursor::Show)
}

/// Put the terminal back before the default hook prints the panic.
fn install_panic_hook() {
    let previous = panic::take_hook();
    panic::set_hook(Box::new(move |info| {
        let _ = release();
        tracing::error!(%info, "quiz panicked");
        previous(info);
    }));
}
