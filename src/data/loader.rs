use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use crate::models::{Difficulty, MathProblem, Topic};

pub const DEFAULT_PROBLEMS_PATH: &str = "problems.json";

/// Errors raised while reading a problem bank file.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("{} must contain at least one problem", path.display())]
    Empty { path: PathBuf },

    #[error("problem #{index} is invalid: {reason}")]
    InvalidProblem { index: usize, reason: String },
}

/// One entry of the problem bank file.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProblemRecord {
    pub topic: Topic,
    pub difficulty: Difficulty,
    pub question: String,
    pub options: Vec<String>,
    pub correct_answer_index: usize,
    #[serde(default)]
    pub explanation: String,
}

impl ProblemRecord {
    fn validate(&self, index: usize) -> Result<(), LoadError> {
        if self.options.is_empty() {
            return Err(LoadError::InvalidProblem {
                index,
                reason: "options must not be empty".to_string(),
            });
        }

        if self.correct_answer_index >= self.options.len() {
            return Err(LoadError::InvalidProblem {
                index,
                reason: format!(
                    "correctAnswerIndex {} is out of range for {} options",
                    self.correct_answer_index,
                    self.options.len()
                ),
            });
        }

        Ok(())
    }

    pub fn to_problem(&self) -> MathProblem {
        MathProblem::new(
            self.question.clone(),
            self.options.clone(),
            self.correct_answer_index,
            self.explanation.clone(),
        )
    }
}

pub fn load_problems_from_json<P: AsRef<Path>>(path: P) -> Result<Vec<ProblemRecord>, LoadError> {
    let path = path.as_ref();

    let json_content = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let records: Vec<ProblemRecord> =
        serde_json::from_str(&json_content).map_err(|source| LoadError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

    if records.is_empty() {
        return Err(LoadError::Empty {
            path: path.to_path_buf(),
        });
    }

    for (index, record) in records.iter().enumerate() {
        record.validate(index)?;
    }

    tracing::info!(path = %path.display(), count = records.len(), "loaded problem bank");
    Ok(records)
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use tempfile::NamedTempFile;

    use super::*;

    fn write_fixture(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_loads_valid_file() {
        let file = write_fixture(
            r#"[{
                "topic": "ARITHMETIC",
                "difficulty": "EASY",
                "question": "2+2=?",
                "options": ["3", "4", "5", "6"],
                "correctAnswerIndex": 1,
                "explanation": "Basic addition"
            }]"#,
        );

        let records = load_problems_from_json(file.path()).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].topic, Topic::Arithmetic);
        assert_eq!(records[0].difficulty, Difficulty::Easy);

        let problem = records[0].to_problem();
        assert_eq!(problem.options.len(), 4);
        assert_eq!(problem.correct_answer_index, 1);
        assert_eq!(problem.explanation, "Basic addition");
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = load_problems_from_json("/definitely/not/here.json").unwrap_err();
        assert!(matches!(err, LoadError::Io { .. }));
    }

    #[test]
    fn test_malformed_json_is_parse_error() {
        let file = write_fixture("[{ not json");
        let err = load_problems_from_json(file.path()).unwrap_err();
        assert!(matches!(err, LoadError::Parse { .. }));
    }

    #[test]
    fn test_unknown_topic_is_parse_error() {
        let file = write_fixture(
            r#"[{"topic": "TRIGONOMETRY", "difficulty": "EASY", "question": "?",
                 "options": ["a"], "correctAnswerIndex": 0}]"#,
        );
        let err = load_problems_from_json(file.path()).unwrap_err();
        assert!(matches!(err, LoadError::Parse { .. }));
    }

    #[test]
    fn test_empty_bank_is_rejected() {
        let file = write_fixture("[]");
        let err = load_problems_from_json(file.path()).unwrap_err();
        assert!(matches!(err, LoadError::Empty { .. }));
    }

    #[test]
    fn test_out_of_range_answer_is_rejected() {
        let file = write_fixture(
            r#"[{"topic": "ALGEBRA", "difficulty": "HARD", "question": "x?",
                 "options": ["1", "2"], "correctAnswerIndex": 2, "explanation": ""}]"#,
        );
        let err = load_problems_from_json(file.path()).unwrap_err();
        assert!(matches!(err, LoadError::InvalidProblem { index: 0, .. }));
    }

    #[test]
    fn test_empty_options_are_rejected() {
        let file = write_fixture(
            r#"[{"topic": "ALGEBRA", "difficulty": "HARD", "question": "x?",
                 "options": [], "correctAnswerIndex": 0}]"#,
        );
        let err = load_problems_from_json(file.path()).unwrap_err();
        assert!(err.to_string().contains("options must not be empty"));
    }
}
