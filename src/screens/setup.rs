//! Topic and difficulty selection.

use crate::models::{Difficulty, QuizSettings, Topic};

/// Local selection state of the setup screen.
///
/// Both fields start at their defaults and change only by assignment; the
/// screen's only output is [`SetupScreen::confirm`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SetupScreen {
    topic: Topic,
    difficulty: Difficulty,
    notice: Option<String>,
}

impl SetupScreen {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fresh setup screen showing a one-line notice.
    pub fn with_notice(notice: impl Into<String>) -> Self {
        Self {
            notice: Some(notice.into()),
            ..Self::default()
        }
    }

    pub fn topic(&self) -> Topic {
        self.topic
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    pub fn select_topic(&mut self, topic: Topic) {
        self.topic = topic;
        self.notice = None;
    }

    pub fn select_difficulty(&mut self, difficulty: Difficulty) {
        self.difficulty = difficulty;
        self.notice = None;
    }

    pub fn select_next_topic(&mut self) {
        let next = (self.topic.position() + 1) % Topic::ALL.len();
        self.select_topic(Topic::ALL[next]);
    }

    pub fn select_previous_topic(&mut self) {
        let len = Topic::ALL.len();
        let previous = (self.topic.position() + len - 1) % len;
        self.select_topic(Topic::ALL[previous]);
    }

    pub fn select_next_difficulty(&mut self) {
        let next = (self.difficulty.position() + 1) % Difficulty::ALL.len();
        self.select_difficulty(Difficulty::ALL[next]);
    }

    pub fn select_previous_difficulty(&mut self) {
        let len = Difficulty::ALL.len();
        let previous = (self.difficulty.position() + len - 1) % len;
        self.select_difficulty(Difficulty::ALL[previous]);
    }

    /// Settings to hand to `onStart`. Always available.
    pub fn confirm(&self) -> QuizSettings {
        QuizSettings::new(self.topic, self.difficulty)
    }
}
