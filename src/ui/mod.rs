mod button;
pub mod quiz;
pub mod setup;

use ratatui::{prelude::*, widgets::Block};

use crate::app::{App, Screen};

pub use button::{Button, ButtonVariant};

pub(crate) const ACCENT: Color = Color::Cyan;

pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();
    frame.render_widget(Block::default().bg(Color::Reset), area);

    match app.screen() {
        Screen::Setup(screen) => setup::render(frame, area, screen),
        Screen::Quiz(screen) => quiz::render(frame, area, app, screen),
    }
}
