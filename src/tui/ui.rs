//! # View Renderer
//!
//! Draws the whole wizard from `App` alone: same state, same viewport, same
//! frame. Nothing here mutates the app.
//!
//! ```text
//!  ┌ base padding (top 1, left 1, right 4) ───────────────────────────┐
//!  │   Charm Employment Application ////////////////////////////////  │ header
//!  │                                                                  │
//!  │ ┃ Choose your class              ╭──────────────────────╮        │
//!  │ ┃ > Warrior                      │ Current Build        │        │ body
//!  │   ...                            ╰──────────────────────╯        │
//!  │                                                                  │
//!  │   ↑ up • ↓ down • enter select ////////////////////////////////  │ footer
//!  │   f toggle fullscreen • q quit /////////////////////////////////  │
//!  └──────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The status panel sits to the right of the form and is dropped entirely
//! when the viewport is too narrow to give it [`MIN_STATUS_WIDTH`] columns.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};

use crate::core::keymap::short_help;
use crate::core::state::{App, Phase};
use crate::tui::component::Component;
use crate::tui::components::{BoundaryBar, CompletionCard, FormView, StatusPanel};
use crate::tui::components::completion_card::CARD_WIDTH;
use crate::tui::styles::{BASE_PADDING, Styles};

pub const HEADER_TEXT: &str = "Charm Employment Application";
pub const FORM_WIDTH: u16 = 45;
pub const MIN_STATUS_WIDTH: u16 = 20;
pub const MAX_STATUS_WIDTH: u16 = 30;
/// Columns kept free to the right of the status panel.
const STATUS_MARGIN_RIGHT: u16 = 2;
const FOOTER_HEIGHT: u16 = 2;
/// Rows that are not form: base top padding, header, a blank row on either
/// side of the body, a spacer, and the footer.
pub const CHROME_HEIGHT: u16 = 1 + 1 + 2 + 1 + FOOTER_HEIGHT;

/// Width and left margin of the status panel, or `None` when it doesn't fit.
///
/// The margin is whatever is left after the form, the panel and the right
/// margin; at least one column separates the panel from the form.
pub fn status_layout(content_width: u16, form_width: u16) -> Option<(u16, u16)> {
    let available = content_width.checked_sub(form_width + STATUS_MARGIN_RIGHT + 1)?;
    let width = available.min(MAX_STATUS_WIDTH);
    if width < MIN_STATUS_WIDTH {
        return None;
    }
    let margin_left = content_width - width - form_width - STATUS_MARGIN_RIGHT;
    Some((width, margin_left))
}

/// Rows given to the form: everything but the chrome when fullscreen,
/// otherwise the form's own height capped to the same limit.
pub fn form_height(natural: u16, viewport_height: u16, fullscreen: bool) -> u16 {
    let limit = viewport_height.saturating_sub(CHROME_HEIGHT);
    if fullscreen {
        limit
    } else {
        natural.min(limit)
    }
}

pub fn draw_ui(frame: &mut Frame, app: &App, styles: &Styles) {
    let full = frame.area();
    let area = Rect {
        width: full.width.min(app.viewport.width),
        height: full.height.min(app.viewport.height),
        ..full
    };

    match app.phase() {
        Phase::Quit => {}
        Phase::Completed => draw_completed(frame, app, styles, area),
        Phase::Active(_) => draw_wizard(frame, app, styles, area),
    }
}

fn inner(area: Rect) -> Rect {
    let x = area.x + BASE_PADDING.left.min(area.width);
    let y = area.y + BASE_PADDING.top.min(area.height);
    Rect {
        x,
        y,
        width: area.width.saturating_sub(Styles::base_horizontal_frame()),
        height: area.height.saturating_sub(BASE_PADDING.top),
    }
}

fn draw_wizard(frame: &mut Frame, app: &App, styles: &Styles, area: Rect) {
    use Constraint::Length;

    let content = inner(area);
    let mut form = FormView::new(&app.form, styles);
    let body_height = form_height(form.natural_height(), app.viewport.height, app.fullscreen);

    let [header_area, _, body_area, _, _, footer_area] = Layout::vertical([
        Length(1),
        Length(1),
        Length(body_height),
        Length(1),
        Length(1),
        Length(FOOTER_HEIGHT),
    ])
    .areas(content);

    let errors = app.form.errors();
    let has_errors = !errors.is_empty();

    // Header
    let mut header = if has_errors {
        let text: String = errors.iter().map(|e| e.message.as_str()).collect();
        BoundaryBar::new(text, styles.error_header_text)
    } else {
        BoundaryBar::new(HEADER_TEXT, styles.header_text)
    };
    header.render(frame, header_area);

    // Body
    let form_width = FORM_WIDTH.min(body_area.width);
    let form_area = Rect {
        width: form_width,
        ..body_area
    };
    form.render(frame, form_area);

    if let Some((width, margin_left)) = status_layout(body_area.width, FORM_WIDTH) {
        let status_area = Rect {
            x: body_area.x + FORM_WIDTH + margin_left,
            width,
            ..body_area
        };
        let role = app.role();
        StatusPanel {
            class: app.class(),
            level: app.level(),
            role,
            styles,
        }
        .render(frame, status_area);
    }

    // Footer
    let footer_style = if has_errors {
        styles.error_header_text
    } else {
        styles.help
    };
    let help_lines = [
        short_help(&app.form.help()),
        short_help(&app.keys.short_help()),
    ];
    let rows = Layout::vertical([Length(1); FOOTER_HEIGHT as usize]).split(footer_area);
    for (text, row) in help_lines.into_iter().zip(rows.iter()) {
        BoundaryBar::new(text, footer_style).render(frame, *row);
    }
}

fn draw_completed(frame: &mut Frame, app: &App, styles: &Styles, area: Rect) {
    let content = inner(area);
    let mut card = CompletionCard {
        role: app.role(),
        styles,
    };
    let width = CARD_WIDTH.min(content.width + BASE_PADDING.right);
    let card_area = Rect {
        width,
        height: card.height(width).min(content.height),
        ..content
    };
    card.render(frame, card_area);
}
