//! # StatusPanel Component
//!
//! Right column: a summary of the build so far and the role it projects to.
//! Purely presentational; the parent decides whether there is room for it.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Padding, Paragraph, Wrap};

use crate::core::role::Role;
use crate::tui::component::Component;
use crate::tui::styles::Styles;

pub struct StatusPanel<'a> {
    pub class: &'a str,
    pub level: &'a str,
    pub role: Role,
    pub styles: &'a Styles,
}

impl<'a> StatusPanel<'a> {
    pub fn lines(&self) -> Vec<Line<'a>> {
        let header = |text: &'static str| Line::from(Span::styled(text, self.styles.status_header));

        let mut lines = vec![header("Current Build")];
        if self.class.is_empty() {
            lines.push(Line::raw("(None)"));
        } else {
            lines.push(Line::raw(format!("Class: {}", self.class)));
            if self.level.is_empty() {
                lines.push(Line::default());
            } else {
                lines.push(Line::raw(format!("Level: {}", self.level)));
            }
        }

        if !self.level.is_empty() {
            lines.extend([
                Line::default(),
                header("Projected Role"),
                Line::raw(self.role.title),
                Line::default(),
                header("Duties"),
                Line::raw(self.role.description),
            ]);
        }
        lines
    }
}

impl Component for StatusPanel<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(self.styles.status)
            .padding(Padding::left(1));
        let paragraph = Paragraph::new(self.lines())
            .block(block)
            .wrap(Wrap { trim: false });
        frame.render_widget(paragraph, area);
    }
}
