use std::fmt;

use uuid::Uuid;

/// Identity of one issued problem.
///
/// Two problems with equal text are still distinct if they were issued
/// separately; the quiz screen resets its answer state when the id changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ProblemId(Uuid);

impl ProblemId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for ProblemId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ProblemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// A single multiple-choice question.
///
/// Callers guarantee that `options` is non-empty and that
/// `correct_answer_index` addresses one of them. The quiz screen relies on
/// this without checking.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MathProblem {
    id: ProblemId,
    pub question: String,
    pub options: Vec<String>,
    pub correct_answer_index: usize,
    pub explanation: String,
}

impl MathProblem {
    pub fn new(
        question: impl Into<String>,
        options: Vec<String>,
        correct_answer_index: usize,
        explanation: impl Into<String>,
    ) -> Self {
        Self {
            id: ProblemId::new(),
            question: question.into(),
            options,
            correct_answer_index,
            explanation: explanation.into(),
        }
    }

    pub fn id(&self) -> ProblemId {
        self.id
    }

    /// Same content under a fresh identity.
    pub fn reissue(&self) -> Self {
        Self {
            id: ProblemId::new(),
            ..self.clone()
        }
    }

    pub fn option_count(&self) -> usize {
        self.options.len()
    }
}
