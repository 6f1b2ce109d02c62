use crossterm::event::KeyCode;

use crate::data::ProblemSource;
use crate::models::{QuizSettings, Topic};
use crate::screens::{QuizEvent, QuizMessage, QuizScreen, SetupScreen};
use crate::ui::{self, setup::SetupMessage};

/// Screen currently on display.
pub enum Screen {
    Setup(SetupScreen),
    Quiz(QuizScreen),
}

/// Answers given under the current settings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Tally {
    pub answered: usize,
    pub correct: usize,
}

impl Tally {
    fn record(&mut self, correct: bool) {
        self.answered += 1;
        if correct {
            self.correct += 1;
        }
    }
}

/// Owns the screens and routes their requests to the problem source.
pub struct App {
    screen: Screen,
    source: Box<dyn ProblemSource>,
    settings: QuizSettings,
    tally: Tally,
}

impl App {
    pub fn new(source: impl ProblemSource + 'static) -> Self {
        Self {
            screen: Screen::Setup(SetupScreen::new()),
            source: Box::new(source),
            settings: QuizSettings::default(),
            tally: Tally::default(),
        }
    }

    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    pub fn quiz(&self) -> Option<&QuizScreen> {
        match &self.screen {
            Screen::Quiz(quiz) => Some(quiz),
            Screen::Setup(_) => None,
        }
    }

    pub fn setup(&self) -> Option<&SetupScreen> {
        match &self.screen {
            Screen::Setup(setup) => Some(setup),
            Screen::Quiz(_) => None,
        }
    }

    pub fn settings(&self) -> QuizSettings {
        self.settings
    }

    pub fn tally(&self) -> Tally {
        self.tally
    }

    /// Begin a quiz with `settings`.
    pub fn start(&mut self, settings: QuizSettings) {
        tracing::info!(%settings, "quiz started");
        self.settings = settings;
        self.tally = Tally::default();

        match self.source.next_problem(&settings) {
            Some(problem) => self.screen = Screen::Quiz(QuizScreen::new(problem)),
            None => self.no_problems(),
        }
    }

    fn next_problem(&mut self) {
        let Some(problem) = self.source.next_problem(&self.settings) else {
            self.no_problems();
            return;
        };

        match &mut self.screen {
            Screen::Quiz(quiz) => quiz.show(problem),
            Screen::Setup(_) => self.screen = Screen::Quiz(QuizScreen::new(problem)),
        }
    }

    fn no_problems(&mut self) {
        tracing::warn!(settings = %self.settings, "no problems available");
        self.screen = Screen::Setup(SetupScreen::with_notice(format!(
            "No problems available for {}",
            self.settings
        )));
    }

    fn back(&mut self) {
        tracing::info!(
            answered = self.tally.answered,
            correct = self.tally.correct,
            "left quiz"
        );
        self.screen = Screen::Setup(SetupScreen::new());
    }

    pub fn dispatch_quiz(&mut self, message: QuizMessage) {
        let Screen::Quiz(quiz) = &mut self.screen else {
            return;
        };

        let was_submitted = quiz.is_submitted();
        let event = quiz.update(message);
        if !was_submitted && quiz.is_submitted() {
            self.tally.record(quiz.is_correct());
        }

        match event {
            Some(QuizEvent::Next) => self.next_problem(),
            Some(QuizEvent::Back) => self.back(),
            None => {}
        }
    }

    /// Returns true if the app should exit.
    pub fn handle_key(&mut self, key: KeyCode) -> bool {
        match self.screen {
            Screen::Setup(_) => self.handle_setup_input(key),
            Screen::Quiz(_) => self.handle_quiz_input(key),
        }
    }

    fn handle_setup_input(&mut self, key: KeyCode) -> bool {
        let Screen::Setup(setup) = &mut self.screen else {
            return false;
        };

        match key {
            KeyCode::Up | KeyCode::Char('k') => setup.select_previous_topic(),
            KeyCode::Down | KeyCode::Char('j') => setup.select_next_topic(),
            KeyCode::Left | KeyCode::Char('h') => setup.select_previous_difficulty(),
            KeyCode::Right | KeyCode::Char('l') => setup.select_next_difficulty(),
            KeyCode::Char(c @ '1'..='9') => {
                let index = c as usize - '1' as usize;
                if let Some(topic) = Topic::ALL.get(index) {
                    setup.select_topic(*topic);
                }
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                if let Some(SetupMessage::Start) = ui::setup::start_button().press() {
                    let settings = setup.confirm();
                    self.start(settings);
                }
            }
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => return true,
            _ => {}
        }

        false
    }

    fn handle_quiz_input(&mut self, key: KeyCode) -> bool {
        let Screen::Quiz(quiz) = &self.screen else {
            return false;
        };

        let message = match key {
            KeyCode::Char(c) if ui::quiz::option_for_key(quiz, c).is_some() => {
                ui::quiz::option_for_key(quiz, c).map(QuizMessage::PressOption)
            }
            KeyCode::Up | KeyCode::Char('k') => {
                Some(QuizMessage::PressOption(quiz.previous_option()))
            }
            KeyCode::Down | KeyCode::Char('j') => Some(QuizMessage::PressOption(quiz.next_option())),
            KeyCode::Enter | KeyCode::Char(' ') => ui::quiz::action_button(quiz).press(),
            KeyCode::Esc | KeyCode::Backspace => ui::quiz::back_button().press(),
            KeyCode::Char('q') | KeyCode::Char('Q') => return true,
            _ => None,
        };

        if let Some(message) = message {
            self.dispatch_quiz(message);
        }

        false
    }
}
