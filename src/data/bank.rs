use std::collections::HashMap;

use crate::models::{MathProblem, QuizSettings};

use super::loader::ProblemRecord;

/// Anything that can hand out problems for a given topic and difficulty.
pub trait ProblemSource {
    /// Next problem for `settings`, or `None` if the source has nothing to offer.
    ///
    /// Every returned problem must carry a fresh [`crate::ProblemId`].
    fn next_problem(&mut self, settings: &QuizSettings) -> Option<MathProblem>;
}

/// In-memory bank that cycles through its problems per settings.
#[derive(Debug, Default)]
pub struct ProblemBank {
    problems: HashMap<QuizSettings, Vec<MathProblem>>,
    cursors: HashMap<QuizSettings, usize>,
}

impl ProblemBank {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_records(records: &[ProblemRecord]) -> Self {
        let mut bank = Self::new();
        for record in records {
            bank.insert(QuizSettings::new(record.topic, record.difficulty), record.to_problem());
        }
        bank
    }

    pub fn insert(&mut self, settings: QuizSettings, problem: MathProblem) {
        self.problems.entry(settings).or_default().push(problem);
    }

    pub fn count(&self, settings: &QuizSettings) -> usize {
        self.problems.get(settings).map_or(0, Vec::len)
    }

    pub fn len(&self) -> usize {
        self.problems.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl ProblemSource for ProblemBank {
    fn next_problem(&mut self, settings: &QuizSettings) -> Option<MathProblem> {
        let problems = self.problems.get(settings).filter(|p| !p.is_empty())?;
        let cursor = self.cursors.entry(*settings).or_insert(0);

        let problem = problems[*cursor % problems.len()].reissue();
        *cursor = (*cursor + 1) % problems.len();

        tracing::debug!(%settings, id = %problem.id(), "issued problem");
        Some(problem)
    }
}
