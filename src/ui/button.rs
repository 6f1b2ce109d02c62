//! Styled pressable control.

use ratatui::{
    buffer::Buffer,
    prelude::*,
    widgets::{Block, BorderType, Paragraph, Widget},
};

use super::ACCENT;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Secondary,
    Outline,
    Ghost,
}

/// A button carries the message it emits when pressed.
///
/// Pressing is driven by the caller (a key binding); a disabled button, or one
/// without a message, emits nothing.
#[derive(Debug, Clone)]
pub struct Button<'a, M> {
    label: &'a str,
    key_hint: Option<&'a str>,
    variant: ButtonVariant,
    full_width: bool,
    disabled: bool,
    on_press: Option<M>,
}

impl<'a, M> Button<'a, M> {
    pub fn new(label: &'a str) -> Self {
        Self {
            label,
            key_hint: None,
            variant: ButtonVariant::default(),
            full_width: false,
            disabled: false,
            on_press: None,
        }
    }

    pub fn variant(mut self, variant: ButtonVariant) -> Self {
        self.variant = variant;
        self
    }

    pub fn full_width(mut self, full_width: bool) -> Self {
        self.full_width = full_width;
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn key_hint(mut self, hint: &'a str) -> Self {
        self.key_hint = Some(hint);
        self
    }

    pub fn on_press(mut self, message: M) -> Self {
        self.on_press = Some(message);
        self
    }

    pub fn label(&self) -> &str {
        self.label
    }

    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    pub fn kind(&self) -> ButtonVariant {
        self.variant
    }

    pub fn is_full_width(&self) -> bool {
        self.full_width
    }

    /// Message to dispatch for a press, if the button is live.
    pub fn press(&self) -> Option<M>
    where
        M: Clone,
    {
        if self.disabled {
            return None;
        }
        self.on_press.clone()
    }

    fn text(&self) -> String {
        match self.key_hint {
            Some(hint) => format!("{}  [{}]", self.label, hint),
            None => self.label.to_string(),
        }
    }

    fn style(&self) -> Style {
        let style = match self.variant {
            ButtonVariant::Primary => Style::default().fg(Color::Black).bg(ACCENT).bold(),
            ButtonVariant::Secondary => Style::default().fg(ACCENT).bg(Color::DarkGray).bold(),
            ButtonVariant::Outline | ButtonVariant::Ghost => Style::default().fg(ACCENT).bold(),
        };

        if self.disabled {
            style.add_modifier(Modifier::DIM).not_bold()
        } else {
            style
        }
    }

    fn block(&self) -> Option<Block<'static>> {
        let border = if self.disabled { Color::DarkGray } else { ACCENT };
        match self.variant {
            ButtonVariant::Primary | ButtonVariant::Secondary => Some(
                Block::bordered()
                    .border_type(BorderType::Rounded)
                    .border_style(Style::default().fg(border)),
            ),
            ButtonVariant::Outline => Some(
                Block::bordered()
                    .border_type(BorderType::Thick)
                    .border_style(Style::default().fg(border)),
            ),
            ButtonVariant::Ghost => None,
        }
    }

    /// Width the button needs when not stretched.
    pub fn natural_width(&self) -> u16 {
        let text = self.text().chars().count() as u16;
        let border = if self.block().is_some() { 2 } else { 0 };
        text + 4 + border
    }

    fn target_area(&self, area: Rect) -> Rect {
        if self.full_width {
            return area;
        }
        let width = self.natural_width().min(area.width);
        Rect {
            x: area.x + (area.width - width) / 2,
            width,
            ..area
        }
    }
}

impl<M> Widget for Button<'_, M> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let area = self.target_area(area);
        let style = self.style();
        let text = self.text();

        let paragraph = Paragraph::new(text).alignment(Alignment::Center).style(style);
        match self.block() {
            Some(block) if area.height >= 3 => {
                let inner = block.inner(area);
                let top_pad = inner.height.saturating_sub(1) / 2;
                buf.set_style(area, style);
                block.render(area, buf);
                let label_area = Rect {
                    y: inner.y + top_pad,
                    height: inner.height.min(1),
                    ..inner
                };
                paragraph.render(label_area, buf);
            }
            _ => paragraph.render(area, buf),
        }
    }
}
