//! Answering a single problem.

use crate::models::{MathProblem, ProblemId};

/// Answer state for the problem currently on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AnswerState {
    #[default]
    Unanswered,
    /// An option is picked but can still be changed.
    Selected(usize),
    /// Answer locked in. Terminal for this problem.
    Submitted(usize),
}

impl AnswerState {
    pub fn selected_option(self) -> Option<usize> {
        match self {
            AnswerState::Unanswered => None,
            AnswerState::Selected(index) | AnswerState::Submitted(index) => Some(index),
        }
    }

    pub fn is_submitted(self) -> bool {
        matches!(self, AnswerState::Submitted(_))
    }
}

/// Visual category of one option.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionStyle {
    Neutral,
    Picked,
    Correct,
    IncorrectPicked,
    Dimmed,
}

/// Inputs the quiz screen reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizMessage {
    PressOption(usize),
    Submit,
    Next,
    Back,
}

/// Navigation requests for whoever owns the quiz screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizEvent {
    /// The user wants another problem.
    Next,
    /// The user wants to leave the quiz.
    Back,
}

#[derive(Debug, Clone)]
pub struct QuizScreen {
    problem: MathProblem,
    state: AnswerState,
}

impl QuizScreen {
    pub fn new(problem: MathProblem) -> Self {
        Self {
            problem,
            state: AnswerState::Unanswered,
        }
    }

    /// Display `problem`, starting over if it is a different problem.
    ///
    /// Re-showing the problem already on screen keeps the answer state.
    pub fn show(&mut self, problem: MathProblem) {
        if problem.id() != self.problem.id() {
            self.state = AnswerState::Unanswered;
        }
        self.problem = problem;
    }

    pub fn problem(&self) -> &MathProblem {
        &self.problem
    }

    pub fn problem_id(&self) -> ProblemId {
        self.problem.id()
    }

    pub fn state(&self) -> AnswerState {
        self.state
    }

    pub fn selected_option(&self) -> Option<usize> {
        self.state.selected_option()
    }

    pub fn is_submitted(&self) -> bool {
        self.state.is_submitted()
    }

    /// Whether the picked option is the right one. Only meaningful once submitted.
    pub fn is_correct(&self) -> bool {
        self.selected_option() == Some(self.problem.correct_answer_index)
    }

    pub fn can_submit(&self) -> bool {
        matches!(self.state, AnswerState::Selected(_))
    }

    /// Returns `true` if the press changed the state.
    pub fn press_option(&mut self, index: usize) -> bool {
        if self.state.is_submitted() || index >= self.problem.option_count() {
            return false;
        }

        let changed = self.state != AnswerState::Selected(index);
        self.state = AnswerState::Selected(index);
        changed
    }

    /// Returns `true` if the answer was locked in.
    pub fn submit(&mut self) -> bool {
        let AnswerState::Selected(index) = self.state else {
            return false;
        };

        self.state = AnswerState::Submitted(index);
        tracing::info!(
            problem = %self.problem.id(),
            selected = index,
            correct = self.is_correct(),
            "answer submitted"
        );
        true
    }

    pub fn update(&mut self, message: QuizMessage) -> Option<QuizEvent> {
        match message {
            QuizMessage::PressOption(index) => {
                self.press_option(index);
                None
            }
            QuizMessage::Submit => {
                self.submit();
                None
            }
            QuizMessage::Next => self.is_submitted().then_some(QuizEvent::Next),
            QuizMessage::Back => Some(QuizEvent::Back),
        }
    }

    pub fn option_style(&self, index: usize) -> OptionStyle {
        let correct = self.problem.correct_answer_index;

        match self.state {
            AnswerState::Unanswered => OptionStyle::Neutral,
            AnswerState::Selected(picked) if picked == index => OptionStyle::Picked,
            AnswerState::Selected(_) => OptionStyle::Neutral,
            AnswerState::Submitted(_) if index == correct => OptionStyle::Correct,
            AnswerState::Submitted(picked) if picked == index => OptionStyle::IncorrectPicked,
            AnswerState::Submitted(_) => OptionStyle::Dimmed,
        }
    }

    /// Option index for the option above the current selection.
    pub fn previous_option(&self) -> usize {
        let count = self.problem.option_count();
        match self.selected_option() {
            Some(index) => (index + count - 1) % count,
            None => count.saturating_sub(1),
        }
    }

    /// Option index for the option below the current selection.
    pub fn next_option(&self) -> usize {
        match self.selected_option() {
            Some(index) => (index + 1) % self.problem.option_count(),
            None => 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> MathProblem {
        MathProblem::new(
            "2+2=?",
            vec!["3".into(), "4".into(), "5".into(), "6".into()],
            1,
            "Basic addition",
        )
    }

    fn styles(screen: &QuizScreen) -> Vec<OptionStyle> {
        (0..screen.problem().option_count())
            .map(|i| screen.option_style(i))
            .collect()
    }

    #[test]
    fn test_starts_unanswered() {
        let screen = QuizScreen::new(sample());
        assert_eq!(screen.state(), AnswerState::Unanswered);
        assert!(!screen.can_submit());
        assert!(styles(&screen).iter().all(|s| *s == OptionStyle::Neutral));
    }

    #[test]
    fn test_press_selects_without_submitting() {
        for i in 0..4 {
            let mut screen = QuizScreen::new(sample());
            assert!(screen.press_option(i));
            assert_eq!(screen.state(), AnswerState::Selected(i));
            assert!(!screen.is_submitted());
        }
    }

    #[test]
    fn test_press_overwrites_selection() {
        let mut screen = QuizScreen::new(sample());
        screen.press_option(0);
        screen.press_option(3);
        assert_eq!(screen.selected_option(), Some(3));
        assert!(!screen.press_option(3));
    }

    #[test]
    fn test_press_out_of_range_is_ignored() {
        let mut screen = QuizScreen::new(sample());
        assert!(!screen.press_option(4));
        assert_eq!(screen.state(), AnswerState::Unanswered);
    }

    #[test]
    fn test_submit_without_selection_is_inert() {
        let mut screen = QuizScreen::new(sample());
        assert!(!screen.submit());
        assert_eq!(screen.state(), AnswerState::Unanswered);
    }

    #[test]
    fn test_submission_freezes_selection() {
        for i in 0..4 {
            let mut screen = QuizScreen::new(sample());
            screen.press_option(i);
            assert!(screen.submit());

            for j in 0..4 {
                assert!(!screen.press_option(j));
            }
            assert!(!screen.submit());
            assert_eq!(screen.state(), AnswerState::Submitted(i));
        }
    }

    #[test]
    fn test_is_correct_matches_selection() {
        for i in 0..4 {
            let mut screen = QuizScreen::new(sample());
            screen.press_option(i);
            screen.submit();
            assert_eq!(screen.is_correct(), i == 1);
        }
    }

    #[test]
    fn test_styles_before_submission() {
        let mut screen = QuizScreen::new(sample());
        screen.press_option(2);
        assert_eq!(
            styles(&screen),
            [
                OptionStyle::Neutral,
                OptionStyle::Neutral,
                OptionStyle::Picked,
                OptionStyle::Neutral
            ]
        );
    }

    #[test]
    fn test_styles_after_correct_answer() {
        let mut screen = QuizScreen::new(sample());
        screen.press_option(1);
        screen.submit();
        assert_eq!(
            styles(&screen),
            [
                OptionStyle::Dimmed,
                OptionStyle::Correct,
                OptionStyle::Dimmed,
                OptionStyle::Dimmed
            ]
        );
    }

    #[test]
    fn test_styles_after_wrong_answer() {
        let mut screen = QuizScreen::new(sample());
        screen.press_option(2);
        screen.submit();
        assert_eq!(
            styles(&screen),
            [
                OptionStyle::Dimmed,
                OptionStyle::Correct,
                OptionStyle::IncorrectPicked,
                OptionStyle::Dimmed
            ]
        );
    }

    #[test]
    fn test_next_only_after_submission() {
        let mut screen = QuizScreen::new(sample());
        assert_eq!(screen.update(QuizMessage::Next), None);

        screen.update(QuizMessage::PressOption(0));
        screen.update(QuizMessage::Submit);
        let before = screen.state();
        assert_eq!(screen.update(QuizMessage::Next), Some(QuizEvent::Next));
        assert_eq!(screen.state(), before);
    }

    #[test]
    fn test_back_is_always_available() {
        let mut screen = QuizScreen::new(sample());
        assert_eq!(screen.update(QuizMessage::Back), Some(QuizEvent::Back));
        screen.update(QuizMessage::PressOption(1));
        screen.update(QuizMessage::Submit);
        assert_eq!(screen.update(QuizMessage::Back), Some(QuizEvent::Back));
    }

    #[test]
    fn test_show_new_problem_resets() {
        let mut screen = QuizScreen::new(sample());
        screen.press_option(1);
        screen.submit();

        screen.show(sample());
        assert_eq!(screen.state(), AnswerState::Unanswered);
    }

    #[test]
    fn test_show_same_problem_keeps_state() {
        let problem = sample();
        let mut screen = QuizScreen::new(problem.clone());
        screen.press_option(2);

        screen.show(problem);
        assert_eq!(screen.state(), AnswerState::Selected(2));
    }

    #[test]
    fn test_relative_navigation() {
        let mut screen = QuizScreen::new(sample());
        assert_eq!(screen.next_option(), 0);
        assert_eq!(screen.previous_option(), 3);

        screen.press_option(3);
        assert_eq!(screen.next_option(), 0);
        assert_eq!(screen.previous_option(), 2);
    }
}
