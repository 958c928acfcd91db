//! # CompletionCard Component
//!
//! Shown in place of the form once the application is submitted.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Padding, Paragraph, Wrap};

use crate::core::role::Role;
use crate::tui::component::Component;
use crate::tui::styles::Styles;

pub const CARD_WIDTH: u16 = 48;
const PADDING: Padding = Padding::new(2, 2, 1, 1);
/// Borders plus padding, per axis.
const CHROME_X: u16 = 2 + 4;
const CHROME_Y: u16 = 2 + 2;

pub struct CompletionCard<'a> {
    pub role: Role,
    pub styles: &'a Styles,
}

impl<'a> CompletionCard<'a> {
    pub fn lines(&self) -> Vec<Line<'a>> {
        vec![
            Line::raw("Congratulations, you're Charm's newest"),
            Line::from(vec![
                Span::styled(self.role.title, self.styles.highlight),
                Span::raw("!"),
            ]),
            Line::default(),
            Line::raw("Your job description is as follows:"),
            Line::default(),
            Line::raw(self.role.description),
            Line::default(),
            Line::raw("Please proceed to HR immediately."),
        ]
    }

    fn paragraph(&self) -> Paragraph<'a> {
        Paragraph::new(self.lines()).wrap(Wrap { trim: false })
    }

    /// Outer height of the card at `width` columns.
    pub fn height(&self, width: u16) -> u16 {
        let inner = width.saturating_sub(CHROME_X).max(1);
        self.paragraph().line_count(inner) as u16 + CHROME_Y
    }
}

impl Component for CompletionCard<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(self.styles.status)
            .padding(PADDING);
        frame.render_widget(self.paragraph().block(block), area);
    }
}
