use std::fmt;

use serde::{Deserialize, Serialize};

/// Subject area a problem belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Topic {
    #[default]
    Arithmetic,
    Algebra,
    Geometry,
    Calculus,
    Statistics,
}

impl Topic {
    /// Every topic, in the order the setup screen offers them.
    pub const ALL: [Topic; 5] = [
        Topic::Arithmetic,
        Topic::Algebra,
        Topic::Geometry,
        Topic::Calculus,
        Topic::Statistics,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Topic::Arithmetic => "Arithmetic",
            Topic::Algebra => "Algebra",
            Topic::Geometry => "Geometry",
            Topic::Calculus => "Calculus",
            Topic::Statistics => "Statistics",
        }
    }

    pub fn glyph(self) -> &'static str {
        match self {
            Topic::Arithmetic => "#",
            Topic::Algebra => "x",
            Topic::Geometry => "△",
            Topic::Calculus => "∫",
            Topic::Statistics => "σ",
        }
    }

    /// Position of this topic in [`Topic::ALL`].
    pub fn position(self) -> usize {
        Self::ALL.iter().position(|t| *t == self).unwrap_or(0)
    }
}

impl fmt::Display for Topic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Coarse difficulty tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Difficulty {
    #[default]
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    pub fn label(self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        }
    }

    pub fn position(self) -> usize {
        Self::ALL.iter().position(|d| *d == self).unwrap_or(0)
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Topic and difficulty chosen on the setup screen, used to request problems.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct QuizSettings {
    pub topic: Topic,
    pub difficulty: Difficulty,
}

impl QuizSettings {
    pub fn new(topic: Topic, difficulty: Difficulty) -> Self {
        Self { topic, difficulty }
    }
}

impl fmt::Display for QuizSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} / {}", self.topic, self.difficulty)
    }
}
