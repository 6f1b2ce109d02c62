//! Setup screen rendering.

use ratatui::{
    prelude::*,
    widgets::{Block, BorderType, Borders, Padding, Paragraph},
};

use crate::models::{Difficulty, Topic};
use crate::screens::SetupScreen;

use super::{ACCENT, Button};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SetupMessage {
    Start,
}

pub fn start_button() -> Button<'static, SetupMessage> {
    Button::new("Start practice")
        .full_width(true)
        .key_hint("Enter")
        .on_press(SetupMessage::Start)
}

fn difficulty_color(difficulty: Difficulty) -> Color {
    match difficulty {
        Difficulty::Easy => Color::Green,
        Difficulty::Medium => Color::Yellow,
        Difficulty::Hard => Color::Red,
    }
}

pub fn render(frame: &mut Frame, area: Rect, screen: &SetupScreen) {
    let [_, column, _] = Layout::horizontal([
        Constraint::Fill(1),
        Constraint::Max(64),
        Constraint::Fill(1),
    ])
    .areas(area);

    let chunks = Layout::vertical([
        Constraint::Length(4),                           // Title
        Constraint::Length(Topic::ALL.len() as u16 + 2), // Topics
        Constraint::Length(3),                           // Difficulty
        Constraint::Length(1),                           // Notice
        Constraint::Length(3),                           // Start button
        Constraint::Fill(1),
        Constraint::Length(1), // Controls
    ])
    .margin(1)
    .split(column);

    render_title(frame, chunks[0]);
    render_topics(frame, chunks[1], screen.topic());
    render_difficulties(frame, chunks[2], screen.difficulty());

    if let Some(notice) = screen.notice() {
        let widget = Paragraph::new(notice)
            .alignment(Alignment::Center)
            .fg(Color::Yellow);
        frame.render_widget(widget, chunks[3]);
    }

    frame.render_widget(start_button(), chunks[4]);
    render_controls(frame, chunks[6]);
}

fn render_title(frame: &mut Frame, area: Rect) {
    let content = vec![
        Line::from(Span::styled(
            "MATH PRACTICE",
            Style::default().fg(ACCENT).bold(),
        )),
        Line::from(""),
        Line::from("Pick a topic to start practicing".fg(Color::DarkGray)),
    ];

    let widget = Paragraph::new(content).alignment(Alignment::Center);
    frame.render_widget(widget, area);
}

fn render_topics(frame: &mut Frame, area: Rect, selected: Topic) {
    let lines: Vec<Line> = Topic::ALL
        .iter()
        .enumerate()
        .map(|(i, topic)| {
            let is_selected = *topic == selected;
            let style = if is_selected {
                Style::default().fg(ACCENT).bold()
            } else {
                Style::default().fg(Color::Gray)
            };
            let marker = if is_selected { ">" } else { " " };

            Line::from(vec![
                Span::styled(format!("{} ", marker), style),
                Span::styled(format!("{} ", i + 1), Style::default().fg(Color::DarkGray)),
                Span::styled(format!("{}  ", topic.glyph()), style),
                Span::styled(topic.label(), style),
            ])
        })
        .collect();

    let widget = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(Color::DarkGray))
            .title(" Topic ")
            .title_style(Style::default().fg(ACCENT))
            .padding(Padding::horizontal(1)),
    );

    frame.render_widget(widget, area);
}

fn render_difficulties(frame: &mut Frame, area: Rect, selected: Difficulty) {
    let mut spans = Vec::with_capacity(Difficulty::ALL.len() * 2);

    for difficulty in Difficulty::ALL {
        let color = difficulty_color(difficulty);
        let style = if difficulty == selected {
            Style::default().fg(Color::Black).bg(color).bold()
        } else {
            Style::default().fg(color)
        };
        spans.push(Span::styled(format!("  {}  ", difficulty.label()), style));
        spans.push(Span::raw("   "));
    }
    spans.pop();

    let widget = Paragraph::new(Line::from(spans))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(Color::DarkGray))
                .title(" Difficulty ")
                .title_style(Style::default().fg(ACCENT)),
        );

    frame.render_widget(widget, area);
}

fn render_controls(frame: &mut Frame, area: Rect) {
    let widget = Paragraph::new("j/k topic  ·  h/l difficulty  ·  enter start  ·  q quit")
        .alignment(Alignment::Center)
        .fg(Color::DarkGray);
    frame.render_widget(widget, area);
}
