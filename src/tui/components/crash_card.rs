//! # CrashCard Component
//!
//! The only thing the panic host draws.
//!
//! ```text
//! ──────────── Application Panic Detected ────────────
//! │                                                  │
//! │ The application encountered a critical error    │
//! │ and needs to close.                              │
//! │                                                  │
//! │  Error  index out of bounds                      │
//! │                                                  │
//! │ A log file has been created at:                  │
//! │ file:///tmp/midas-2024-03-05T14-07-09.log        │
//! │                                                  │
//! └──────────────────────────────────────────────────┘
//! ```
//!
//! Long fault messages and log paths wrap inside the box instead of running
//! off the edge, so the line count is computed up front with `textwrap`.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Padding, Paragraph};
use unicode_width::UnicodeWidthStr;

use crate::tui::component::Component;
use crate::tui::styles::Styles;

pub const CARD_WIDTH: u16 = 60;
const TITLE: &str = "─ Application Panic Detected ─";
const DESCRIPTION: &str = "The application encountered a critical error and needs to close.";
const DESCRIPTION_WIDTH: usize = 40;
const BADGE: &str = " Error ";
/// Side borders plus padding on both sides.
const INNER_FRAME: u16 = 4;

pub struct CrashCard<'a> {
    pub fault: &'a str,
    pub log_location: &'a str,
    pub styles: &'a Styles,
}

/// `───── title ─────` filling `width` columns, title centred.
pub fn title_rule(title: &str, width: u16, style: Style) -> Line<'static> {
    let width = width as usize;
    let title_width = title.width();
    let rest = width.saturating_sub(title_width + 2);
    let left = rest / 2;
    let right = rest - left;
    Line::from(vec![
        Span::styled("─".repeat(left), style),
        Span::styled(format!(" {title} "), style),
        Span::styled("─".repeat(right), style),
    ])
}

fn wrapped(text: &str, width: usize) -> Vec<String> {
    textwrap::wrap(text, width.max(1))
        .into_iter()
        .map(|line| line.into_owned())
        .collect()
}

impl<'a> CrashCard<'a> {
    fn inner_width(width: u16) -> usize {
        width.saturating_sub(INNER_FRAME) as usize
    }

    /// Body lines, already wrapped to the card's inner width.
    pub fn body(&self, width: u16) -> Vec<Line<'a>> {
        let styles = self.styles;
        let inner = Self::inner_width(width);
        let mut lines: Vec<Line> = wrapped(DESCRIPTION, DESCRIPTION_WIDTH.min(inner))
            .into_iter()
            .map(Line::raw)
            .collect();
        lines.push(Line::default());

        let fault_width = inner.saturating_sub(BADGE.width() + 1);
        for (i, part) in wrapped(self.fault, fault_width).into_iter().enumerate() {
            let lead = if i == 0 {
                Span::styled(BADGE, styles.panic_badge)
            } else {
                Span::raw(" ".repeat(BADGE.width()))
            };
            lines.push(Line::from(vec![
                lead,
                Span::raw(" "),
                Span::styled(part, styles.panic_message),
            ]));
        }
        lines.push(Line::default());

        lines.push(Line::raw("A log file has been created at:"));
        // Paths have no spaces to break on; split by columns instead.
        let chars: Vec<char> = self.log_location.chars().collect();
        for chunk in chars.chunks(inner.max(1)) {
            lines.push(Line::styled(chunk.iter().collect::<String>(), styles.link));
        }
        lines
    }

    /// Outer height: title rule, padded body, bottom border.
    pub fn height(&self, width: u16) -> u16 {
        self.body(width).len() as u16 + 4
    }
}

impl Component for CrashCard<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        if area.height == 0 {
            return;
        }
        let rule = title_rule(TITLE, area.width, self.styles.panic_accent);
        frame.render_widget(rule, Rect { height: 1, ..area });

        let block = Block::default()
            .borders(Borders::LEFT | Borders::RIGHT | Borders::BOTTOM)
            .border_style(self.styles.panic_accent)
            .padding(Padding::uniform(1));
        let body = Rect {
            y: area.y + 1,
            height: area.height - 1,
            ..area
        };
        frame.render_widget(Paragraph::new(self.body(area.width)).block(block), body);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{terminal_text, test_terminal};

    const LOCATION: &str = "file:///tmp/midas-2024-03-05T14-07-09.log";

    fn render(fault: &str) -> String {
        let styles = Styles::default();
        let mut card = CrashCard {
            fault,
            log_location: LOCATION,
            styles: &styles,
        };
        let height = card.height(CARD_WIDTH);
        let mut terminal = test_terminal(CARD_WIDTH, height);
        terminal
            .draw(|f| {
                let area = f.area();
                card.render(f, area)
            })
            .unwrap();
        terminal_text(&terminal)
    }

    #[test]
    fn test_title_rule_centres_title() {
        let line = title_rule("─ Boom ─", 20, Style::default());
        let text = line.to_string();
        assert_eq!(text.width(), 20);
        assert_eq!(text, "───── ─ Boom ─ ─────");
    }

    #[test]
    fn test_card_contents() {
        let text = render("index out of bounds");
        let first = text.lines().next().unwrap();
        assert!(first.contains("Application Panic Detected"));
        assert!(text.contains(" Error  index out of bounds"));
        assert!(text.contains("needs to close."));
        assert!(text.contains("A log file has been created at:"));
        assert!(text.contains(LOCATION));
        assert!(text.lines().last().unwrap().starts_with('└'));
    }

    #[test]
    fn test_description_wraps_at_forty() {
        let styles = Styles::default();
        let card = CrashCard {
            fault: "x",
            log_location: LOCATION,
            styles: &styles,
        };
        let body = card.body(CARD_WIDTH);
        assert_eq!(body[0].to_string(), "The application encountered a critical");
        assert_eq!(body[1].to_string(), "error and needs to close.");
    }

    #[test]
    fn test_long_fault_wraps_inside_box() {
        let fault = "called `Option::unwrap()` on a `None` value while resolving the projected role";
        let text = render(fault);
        assert!(text.contains("projected role"));
        for line in text.lines() {
            assert_eq!(line.width(), CARD_WIDTH as usize);
        }
    }
}
