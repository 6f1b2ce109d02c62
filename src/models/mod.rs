mod problem;
mod settings;

pub use problem::{MathProblem, ProblemId};
pub use settings::{Difficulty, QuizSettings, Topic};
