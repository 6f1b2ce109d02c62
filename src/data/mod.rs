mod bank;
mod loader;

pub use bank::{ProblemBank, ProblemSource};
pub use loader::{DEFAULT_PROBLEMS_PATH, LoadError, ProblemRecord, load_problems_from_json};
