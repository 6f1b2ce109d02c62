//! Screen state machines.
//!
//! Nothing here knows about the terminal; `ui` renders these states.

mod quiz;
mod setup;

pub use quiz::{AnswerState, OptionStyle, QuizEvent, QuizMessage, QuizScreen};
pub use setup::SetupScreen;
