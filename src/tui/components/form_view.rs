//! # FormView Component
//!
//! Left column of the wizard: every prompt stacked, the focused one marked
//! with a bar.
//!
//! ```text
//! ┃ Choose your class
//! ┃ This will determine your department
//! ┃ > Warrior
//! ┃   Mage
//! ┃   Rogue
//!
//!   Choose your level
//!   ...
//! ```
//!
//! Built from scratch each frame. When the prompts don't fit the area, the
//! view scrolls so the focused prompt stays visible.

use std::ops::Range;

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::core::form::Form;
use crate::core::prompt::{Answer, Prompt, PromptKind};
use crate::tui::component::Component;
use crate::tui::styles::Styles;

const FOCUS_BAR: &str = "┃ ";
const NO_BAR: &str = "  ";

pub struct FormView<'a> {
    form: &'a Form,
    styles: &'a Styles,
}

impl<'a> FormView<'a> {
    pub fn new(form: &'a Form, styles: &'a Styles) -> Self {
        Self { form, styles }
    }

    /// Height of all prompts, unclipped.
    pub fn natural_height(&self) -> u16 {
        self.lines().0.len() as u16
    }

    /// All lines, plus the line range of the focused prompt.
    fn lines(&self) -> (Vec<Line<'a>>, Range<usize>) {
        let mut lines = Vec::new();
        let mut focused = 0..0;

        for (index, prompt) in self.form.prompts().enumerate() {
            if index > 0 {
                lines.push(Line::default());
            }
            let start = lines.len();
            lines.extend(self.prompt_lines(index, prompt));
            if index == self.form.focus() {
                focused = start..lines.len();
            }
        }
        (lines, focused)
    }

    fn prompt_lines(&self, index: usize, prompt: &'a Prompt) -> Vec<Line<'a>> {
        let styles = self.styles;
        let focused = index == self.form.focus() && !self.form.is_completed();
        let bar = if !focused {
            Span::raw(NO_BAR)
        } else if self.form.error(index).is_some() {
            Span::styled(FOCUS_BAR, styles.error_text)
        } else {
            Span::styled(FOCUS_BAR, styles.focus_bar)
        };
        let row = |spans: Vec<Span<'a>>| {
            let mut line = vec![bar.clone()];
            line.extend(spans);
            Line::from(line)
        };

        let title_style = if focused {
            styles.focused_title
        } else {
            styles.title
        };
        let mut lines = vec![row(vec![Span::styled(prompt.title, title_style)])];
        if let Some(description) = prompt.description {
            lines.push(row(vec![Span::styled(description, styles.description)]));
        }

        let answer = self.form.answer(prompt.key);
        let highlight = self.form.highlight(index);

        match &prompt.kind {
            PromptKind::Select { options } => {
                let chosen = answer.and_then(Answer::as_choice);
                for (i, option) in options.iter().enumerate() {
                    let is_cursor = focused && i == highlight;
                    let (cursor, style) = if is_cursor {
                        (Span::styled("> ", styles.selector), styles.selected_option)
                    } else if !focused && chosen == Some(*option) {
                        (Span::raw("  "), styles.selected_option)
                    } else {
                        (Span::raw("  "), styles.option)
                    };
                    lines.push(row(vec![cursor, Span::styled(*option, style)]));
                }
            }
            PromptKind::MultiSelect { options } => {
                let chosen = answer.and_then(Answer::as_choices);
                for (i, option) in options.iter().enumerate() {
                    let cursor = if focused && i == highlight {
                        Span::styled("> ", styles.selector)
                    } else {
                        Span::raw("  ")
                    };
                    let is_chosen = chosen.is_some_and(|set| set.contains(*option));
                    let (mark, style) = if is_chosen {
                        ("[•] ", styles.selected_option)
                    } else {
                        ("[ ] ", styles.option)
                    };
                    lines.push(row(vec![
                        cursor,
                        Span::styled(mark, style),
                        Span::styled(*option, style),
                    ]));
                }
            }
            PromptKind::Confirm {
                affirmative,
                negative,
            } => {
                let value = answer.and_then(Answer::as_confirmed).unwrap_or(false);
                let button = |label: &'a str, active: bool| {
                    let style = if active {
                        styles.button_active
                    } else {
                        styles.button_inactive
                    };
                    Span::styled(format!("  {label}  "), style)
                };
                lines.push(row(vec![
                    button(*affirmative, value),
                    Span::raw(" "),
                    button(*negative, !value),
                ]));
            }
        }
        lines
    }
}

/// First visible line so that `focused` is shown, preferring its top.
fn scroll_offset(focused: &Range<usize>, height: usize) -> usize {
    focused.end.saturating_sub(height).min(focused.start)
}

impl Component for FormView<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let (lines, focused) = self.lines();
        let offset = scroll_offset(&focused, area.height as usize);
        let paragraph = Paragraph::new(lines).scroll((offset as u16, 0));
        frame.render_widget(paragraph, area);
    }
}
