//! Quiz screen rendering.

use ratatui::{
    prelude::*,
    widgets::{Block, BorderType, Borders, Padding, Paragraph, Wrap},
};

use crate::app::App;
use crate::screens::{OptionStyle, QuizMessage, QuizScreen};

use super::{ACCENT, Button, ButtonVariant};

const CORRECT_MARK: &str = "✓";
const INCORRECT_MARK: &str = "✗";

/// Letter shown next to option `index`: A, B, C, ...
pub fn option_label(index: usize) -> char {
    u8::try_from(index)
        .ok()
        .filter(|i| *i < 26)
        .map_or('?', |i| char::from(b'A' + i))
}

/// Key range naming every offered option, e.g. `a-d`.
fn option_keys(count: usize) -> String {
    let last = option_label(count.saturating_sub(1)).to_ascii_lowercase();
    if count > 1 {
        format!("a-{}", last)
    } else {
        last.to_string()
    }
}

/// Option index for a pressed letter or digit key, if the problem offers it.
pub fn option_for_key(screen: &QuizScreen, key: char) -> Option<usize> {
    let index = match key {
        'a'..='z' => key as usize - 'a' as usize,
        'A'..='Z' => key as usize - 'A' as usize,
        '1'..='9' => key as usize - '1' as usize,
        _ => return None,
    };
    (index < screen.problem().option_count()).then_some(index)
}

/// Confirm button before submission, "next" button after.
pub fn action_button(screen: &QuizScreen) -> Button<'static, QuizMessage> {
    if screen.is_submitted() {
        Button::new("Next question →")
            .full_width(true)
            .key_hint("Enter")
            .on_press(QuizMessage::Next)
    } else {
        Button::new("Check answer")
            .full_width(true)
            .key_hint("Enter")
            .disabled(!screen.can_submit())
            .on_press(QuizMessage::Submit)
    }
}

pub fn back_button() -> Button<'static, QuizMessage> {
    Button::new("← Back")
        .variant(ButtonVariant::Ghost)
        .key_hint("Esc")
        .on_press(QuizMessage::Back)
}

/// Rows the feedback panel needs to show its headline and the start of the explanation.
const FEEDBACK_MIN_HEIGHT: u16 = 7;

pub fn render(frame: &mut Frame, area: Rect, app: &App, screen: &QuizScreen) {
    let problem = screen.problem();
    let count = problem.option_count() as u16;

    // Options and buttons keep their full height; on short terminals the
    // question box and the gaps between options shrink to leave the
    // feedback panel room, and whatever is still missing is clipped there.
    let fixed = 2 + 1 + 3 + 1; // margin, header, action button, controls
    let feedback_min = if screen.is_submitted() { FEEDBACK_MIN_HEIGHT } else { 0 };
    let spaced_height = (count * 2).saturating_sub(1) + 2;
    let spacious = fixed + 5 + spaced_height + feedback_min <= area.height;
    let (question_height, options_height, spaced) = if spacious {
        (5, spaced_height, true)
    } else {
        (3, count + 2, false)
    };

    let chunks = Layout::vertical([
        Constraint::Length(1),               // Header
        Constraint::Length(question_height), // Question text
        Constraint::Length(options_height),  // Options
        Constraint::Fill(1),                 // Feedback panel
        Constraint::Length(3),               // Action button
        Constraint::Length(1),               // Controls
    ])
    .margin(1)
    .split(area);

    render_header(frame, chunks[0], app);
    render_question_text(frame, chunks[1], &problem.question);
    render_options(frame, chunks[2], screen, spaced);

    if screen.is_submitted() {
        render_feedback(frame, chunks[3], screen);
    }

    frame.render_widget(action_button(screen), chunks[4]);
    render_controls(frame, chunks[5], screen);
}

fn render_header(frame: &mut Frame, area: Rect, app: &App) {
    let back = back_button();
    let [back_area, badge_area] =
        Layout::horizontal([Constraint::Length(back.natural_width()), Constraint::Fill(1)])
            .areas(area);

    frame.render_widget(back, back_area);

    let tally = app.tally();
    let badge = Line::from(vec![
        Span::styled(
            format!(" Practice question · {} ", app.settings()),
            Style::default().fg(Color::Black).bg(ACCENT).bold(),
        ),
        Span::styled(
            format!("  {} / {} correct", tally.correct, tally.answered),
            Style::default().fg(Color::DarkGray),
        ),
    ])
    .alignment(Alignment::Right);

    frame.render_widget(Paragraph::new(badge), badge_area);
}

fn render_question_text(frame: &mut Frame, area: Rect, text: &str) {
    let widget = Paragraph::new(text)
        .wrap(Wrap { trim: true })
        .style(Style::default().fg(Color::White).bold())
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(Color::DarkGray))
                .padding(Padding::horizontal(1)),
        );

    frame.render_widget(widget, area);
}

fn option_style(style: OptionStyle) -> (Style, &'static str, &'static str) {
    match style {
        OptionStyle::Neutral => (Style::default().fg(Color::White), "  ", ""),
        OptionStyle::Picked => (Style::default().fg(ACCENT).bold(), "> ", ""),
        OptionStyle::Correct => (
            Style::default().fg(Color::Green).bold(),
            "  ",
            CORRECT_MARK,
        ),
        OptionStyle::IncorrectPicked => (
            Style::default().fg(Color::Red).bold(),
            "> ",
            INCORRECT_MARK,
        ),
        OptionStyle::Dimmed => (
            Style::default().fg(Color::DarkGray).add_modifier(Modifier::DIM),
            "  ",
            "",
        ),
    }
}

fn render_options(frame: &mut Frame, area: Rect, screen: &QuizScreen, spaced: bool) {
    let options = &screen.problem().options;
    let mut lines: Vec<Line> = Vec::with_capacity(options.len() * 2);

    for (index, option) in options.iter().enumerate() {
        let (style, prefix, mark) = option_style(screen.option_style(index));

        let mut spans = vec![
            Span::styled(prefix, style),
            Span::styled(format!("{}. ", option_label(index)), style),
            Span::styled(option.as_str(), style),
        ];
        if !mark.is_empty() {
            spans.push(Span::styled(format!("  {}", mark), style));
        }

        if spaced && index > 0 {
            lines.push(Line::from(""));
        }
        lines.push(Line::from(spans));
    }

    let widget = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray))
            .title(" Options ")
            .title_style(Style::default().fg(ACCENT))
            .padding(Padding::horizontal(1)),
    );

    frame.render_widget(widget, area);
}

fn render_feedback(frame: &mut Frame, area: Rect, screen: &QuizScreen) {
    let (color, mark, headline, message) = if screen.is_correct() {
        (Color::Green, CORRECT_MARK, "Correct!", "Great job.")
    } else {
        (
            Color::Red,
            INCORRECT_MARK,
            "Not quite",
            "Don't worry, check the detailed explanation below.",
        )
    };

    let mut lines = vec![
        Line::from(Span::styled(
            format!("{} {}", mark, headline),
            Style::default().fg(color).bold(),
        )),
        Line::from(Span::styled(message, Style::default().fg(Color::Gray))),
        Line::from(""),
        Line::from(Span::styled(
            "DETAILED EXPLANATION",
            Style::default().fg(Color::DarkGray).bold(),
        )),
    ];
    lines.extend(
        screen
            .problem()
            .explanation
            .lines()
            .map(|line| Line::from(Span::styled(line, Style::default().fg(Color::White)))),
    );

    let widget = Paragraph::new(lines).wrap(Wrap { trim: false }).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(color))
            .padding(Padding::horizontal(1)),
    );

    frame.render_widget(widget, area);
}

fn render_controls(frame: &mut Frame, area: Rect, screen: &QuizScreen) {
    let hint = if screen.is_submitted() {
        "enter next question  ·  esc back  ·  q quit".to_string()
    } else {
        format!(
            "{} or j/k pick  ·  enter check  ·  esc back  ·  q quit",
            option_keys(screen.problem().option_count())
        )
    };

    let widget = Paragraph::new(hint)
        .alignment(Alignment::Center)
        .fg(Color::DarkGray);
    frame.render_widget(widget, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::App;
    use crate::data::ProblemBank;
    use crate::models::{MathProblem, QuizSettings};
    use crate::screens::QuizMessage;
    use crate::ui::testing::{draw, screen_text};

    fn sample() -> MathProblem {
        MathProblem::new(
            "2+2=?",
            vec!["3".into(), "4".into(), "5".into(), "6".into()],
            1,
            "Basic addition",
        )
    }

    fn quiz_app() -> App {
        let mut bank = ProblemBank::new();
        bank.insert(QuizSettings::default(), sample());
        let mut app = App::new(bank);
        app.start(QuizSettings::default());
        app
    }

    fn count(text: &str, needle: &str) -> usize {
        text.matches(needle).count()
    }

    #[test]
    fn test_option_labels() {
        assert_eq!(option_label(0), 'A');
        assert_eq!(option_label(3), 'D');
        assert_eq!(option_label(25), 'Z');
        assert_eq!(option_label(26), '?');
    }

    #[test]
    fn test_option_key_hint_follows_option_count() {
        assert_eq!(option_keys(4), "a-d");
        assert_eq!(option_keys(3), "a-c");
        assert_eq!(option_keys(1), "a");
    }

    #[test]
    fn test_controls_hint_names_offered_options() {
        let mut bank = ProblemBank::new();
        bank.insert(
            QuizSettings::default(),
            MathProblem::new("1+1=?", vec!["1".into(), "2".into(), "3".into()], 1, ""),
        );
        let mut app = App::new(bank);
        app.start(QuizSettings::default());

        let text = screen_text(&draw(&app, 80, 24));
        assert!(text.contains("a-c or j/k pick"));
    }

    #[test]
    fn test_option_keys_only_map_offered_options() {
        let screen = QuizScreen::new(sample());
        assert_eq!(option_for_key(&screen, 'a'), Some(0));
        assert_eq!(option_for_key(&screen, 'D'), Some(3));
        assert_eq!(option_for_key(&screen, '2'), Some(1));
        assert_eq!(option_for_key(&screen, 'e'), None);
        assert_eq!(option_for_key(&screen, '5'), None);
        assert_eq!(option_for_key(&screen, '-'), None);
    }

    #[test]
    fn test_action_button_tracks_state() {
        let mut screen = QuizScreen::new(sample());
        assert!(action_button(&screen).is_disabled());
        assert_eq!(action_button(&screen).press(), None);

        screen.press_option(0);
        assert_eq!(action_button(&screen).press(), Some(QuizMessage::Submit));

        screen.submit();
        assert_eq!(action_button(&screen).label(), "Next question →");
        assert_eq!(action_button(&screen).press(), Some(QuizMessage::Next));
        assert_eq!(back_button().press(), Some(QuizMessage::Back));
    }

    #[test]
    fn test_renders_every_option_without_marks() {
        let app = quiz_app();
        let text = screen_text(&draw(&app, 80, 40));

        assert!(text.contains("2+2=?"));
        for option in ["A. 3", "B. 4", "C. 5", "D. 6"] {
            assert!(text.contains(option), "missing option {option}");
        }
        assert_eq!(count(&text, CORRECT_MARK), 0);
        assert_eq!(count(&text, INCORRECT_MARK), 0);
        assert!(!text.contains("Basic addition"));
        assert!(text.contains("Check answer"));
    }

    #[test]
    fn test_renders_correct_feedback() {
        let mut app = quiz_app();
        app.dispatch_quiz(QuizMessage::PressOption(1));
        app.dispatch_quiz(QuizMessage::Submit);
        let text = screen_text(&draw(&app, 80, 40));

        assert!(text.contains("Correct!"));
        assert!(text.contains("Basic addition"));
        assert!(text.contains("Next question"));
        // one mark beside the option, one in the headline
        assert_eq!(count(&text, CORRECT_MARK), 2);
        assert_eq!(count(&text, INCORRECT_MARK), 0);
    }

    #[test]
    fn test_renders_incorrect_feedback() {
        let mut app = quiz_app();
        app.dispatch_quiz(QuizMessage::PressOption(2));
        app.dispatch_quiz(QuizMessage::Submit);
        let text = screen_text(&draw(&app, 80, 40));

        assert!(text.contains("Not quite"));
        assert!(text.contains("Basic addition"));
        assert_eq!(count(&text, CORRECT_MARK), 1);
        assert_eq!(count(&text, INCORRECT_MARK), 2);
        assert!(text.contains("0 / 1 correct"));
    }

    #[test]
    fn test_wrong_answer_keeps_every_option_on_short_terminal() {
        let mut app = quiz_app();
        let before = screen_text(&draw(&app, 80, 24));
        for option in ["A. 3", "B. 4", "C. 5", "D. 6"] {
            assert!(before.contains(option), "missing option {option} before submit");
        }

        app.dispatch_quiz(QuizMessage::PressOption(2));
        app.dispatch_quiz(QuizMessage::Submit);
        let after = screen_text(&draw(&app, 80, 24));

        for option in ["A. 3", "B. 4", "C. 5", "D. 6"] {
            assert!(after.contains(option), "missing option {option} after submit");
        }
        assert!(after.contains("B. 4  ✓"));
        assert!(after.contains("C. 5  ✗"));
        assert!(after.contains("Not quite"));
        assert!(after.contains("Basic addition"));
        assert!(after.contains("Next question"));
    }
}
