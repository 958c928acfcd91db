//! # BoundaryBar Component
//!
//! A one-line bar used for the header and both footer lines: the text in its
//! style, then `/` characters in the same colour out to the full width.
//!
//! ```text
//!   Charm Employment Application ///////////////////////////////////////
//! ```

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use unicode_width::UnicodeWidthStr;

use crate::tui::component::Component;
use crate::tui::styles::{HEADER_PADDING_LEFT, HEADER_PADDING_RIGHT};

const FILL: &str = "/";

pub struct BoundaryBar {
    pub text: String,
    pub style: Style,
}

impl BoundaryBar {
    pub fn new(text: impl Into<String>, style: Style) -> Self {
        Self {
            text: text.into(),
            style,
        }
    }

    /// The bar as a line exactly `width` columns wide (or the padded text, if wider).
    pub fn line(&self, width: u16) -> Line<'static> {
        let padded = format!(
            "{}{}{}",
            " ".repeat(HEADER_PADDING_LEFT as usize),
            self.text,
            " ".repeat(HEADER_PADDING_RIGHT as usize)
        );
        let fill_width = (width as usize).saturating_sub(padded.width());
        let fill_style = match self.style.fg {
            Some(color) => Style::default().fg(color),
            None => Style::default(),
        };

        Line::from(vec![
            Span::styled(padded, self.style),
            Span::styled(FILL.repeat(fill_width), fill_style),
        ])
    }
}

impl Component for BoundaryBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        frame.render_widget(self.line(area.width), area);
    }
}
