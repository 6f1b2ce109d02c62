//! # math-quiz
//!
//! A terminal math practice quiz: pick a topic and difficulty, then answer
//! multiple-choice problems with immediate feedback and explanations.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use math_quiz::{Quiz, QuizError};
//!
//! fn main() -> Result<(), QuizError> {
//!     // Load the problem bank from a JSON file
//!     let quiz = Quiz::from_json("problems.json")?;
//!
//!     // Run the quiz in the terminal
//!     quiz.run()?;
//!
//!     Ok(())
//! }
//! ```

mod app;
mod data;
pub mod logging;
mod models;
pub mod screens;
pub mod terminal;
mod ui;

use std::io;
use std::path::Path;

use crossterm::event::{self, Event, KeyEventKind};
use thiserror::Error;

pub use app::{App, Screen, Tally};
pub use data::{
    DEFAULT_PROBLEMS_PATH, LoadError, ProblemBank, ProblemRecord, ProblemSource,
    load_problems_from_json,
};
pub use models::{Difficulty, MathProblem, ProblemId, QuizSettings, Topic};
pub use ui::{Button, ButtonVariant};

/// Error type for quiz operations.
#[derive(Debug, Error)]
pub enum QuizError {
    /// Error loading problems from file.
    #[error("Failed to load problems: {0}")]
    Load(#[from] LoadError),
    /// IO error during quiz execution.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

/// A quiz instance that can be run in the terminal.
pub struct Quiz {
    app: App,
}

impl Quiz {
    /// Create a quiz drawing problems from `source`.
    pub fn new(source: impl ProblemSource + 'static) -> Self {
        Self {
            app: App::new(source),
        }
    }

    /// Load a quiz from a JSON problem bank.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use math_quiz::Quiz;
    ///
    /// let quiz = Quiz::from_json("problems.json").expect("Failed to load problems");
    /// ```
    pub fn from_json<P: AsRef<Path>>(path: P) -> Result<Self, QuizError> {
        let records = load_problems_from_json(path)?;
        Ok(Self::new(ProblemBank::from_records(&records)))
    }

    /// Run the quiz in the terminal.
    ///
    /// This will take over the terminal, display the quiz UI, and return
    /// when the user quits.
    pub fn run(mut self) -> Result<(), QuizError> {
        let mut session = terminal::TerminalSession::enter()?;
        let result = run_event_loop(session.terminal_mut(), &mut self.app);
        session.leave()?;
        result
    }

    /// Get a reference to the underlying app for custom handling.
    pub fn app(&self) -> &App {
        &self.app
    }

    /// Get a mutable reference to the underlying app for custom handling.
    pub fn app_mut(&mut self) -> &mut App {
        &mut self.app
    }
}

fn run_event_loop(terminal: &mut terminal::QuizTerminal, app: &mut App) -> Result<(), QuizError> {
    loop {
        terminal.draw(|frame| ui::render(frame, app))?;

        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }

            if app.handle_key(key.code) {
                tracing::info!("quit requested");
                break;
            }
        }
    }

    Ok(())
}
