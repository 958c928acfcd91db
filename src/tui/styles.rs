//! # Style Registry
//!
//! Every named style the views use, built once from the rendering context.
//! The context is the terminal's background: the brand colours have a light
//! and a dark variant, picked by [`Background`].

use std::env;

use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::Padding;

/// Padding around the whole wizard frame: top 1, left 1, right 4.
pub const BASE_PADDING: Padding = Padding::new(1, 4, 1, 0);
/// Padding of header/footer text inside its boundary line: left 2, right 1.
pub const HEADER_PADDING_LEFT: u16 = 2;
pub const HEADER_PADDING_RIGHT: u16 = 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Background {
    Dark,
    Light,
}

impl Background {
    /// Read `COLORFGBG` (`"15;0"` style); dark when unset or unparsable.
    pub fn detect() -> Self {
        Self::from_colorfgbg(env::var("COLORFGBG").ok().as_deref())
    }

    pub fn from_colorfgbg(value: Option<&str>) -> Self {
        let bg = value
            .and_then(|v| v.rsplit(';').next())
            .and_then(|bg| bg.trim().parse::<u8>().ok());
        match bg {
            Some(7) | Some(9..=15) => Background::Light,
            _ => Background::Dark,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub indigo: Color,
    pub green: Color,
    pub red: Color,
}

impl Palette {
    pub fn for_background(background: Background) -> Self {
        match background {
            Background::Light => Self {
                indigo: Color::Rgb(0x5A, 0x56, 0xE0),
                green: Color::Rgb(0x02, 0xBA, 0x84),
                red: Color::Rgb(0xFE, 0x5F, 0x86),
            },
            Background::Dark => Self {
                indigo: Color::Rgb(0x75, 0x71, 0xF9),
                green: Color::Rgb(0x02, 0xBF, 0x87),
                red: Color::Rgb(0xFE, 0x5F, 0x86),
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Styles {
    pub palette: Palette,
    pub header_text: Style,
    pub error_header_text: Style,
    /// Border of the status panel and the completion card.
    pub status: Style,
    pub status_header: Style,
    pub highlight: Style,
    pub help: Style,

    // Form fields
    pub focus_bar: Style,
    pub title: Style,
    pub focused_title: Style,
    pub description: Style,
    pub selector: Style,
    pub selected_option: Style,
    pub option: Style,
    pub error_text: Style,
    pub button_active: Style,
    pub button_inactive: Style,

    // Crash card
    pub panic_accent: Style,
    pub panic_badge: Style,
    pub panic_message: Style,
    pub link: Style,
}

impl Styles {
    pub fn new(background: Background) -> Self {
        let palette = Palette::for_background(background);
        let header_text = Style::default()
            .fg(palette.indigo)
            .add_modifier(Modifier::BOLD);

        Self {
            palette,
            header_text,
            error_header_text: header_text.fg(palette.red),
            status: Style::default().fg(palette.indigo),
            status_header: Style::default()
                .fg(palette.green)
                .add_modifier(Modifier::BOLD),
            highlight: Style::default().fg(Color::Indexed(212)),
            help: Style::default().fg(Color::Indexed(240)),

            focus_bar: Style::default().fg(palette.indigo),
            title: Style::default().add_modifier(Modifier::BOLD),
            focused_title: Style::default()
                .fg(palette.indigo)
                .add_modifier(Modifier::BOLD),
            description: Style::default().fg(Color::Indexed(243)),
            selector: Style::default().fg(Color::Indexed(212)),
            selected_option: Style::default().fg(palette.green),
            option: Style::default(),
            error_text: Style::default().fg(palette.red),
            button_active: Style::default()
                .fg(Color::Indexed(230))
                .bg(palette.indigo)
                .add_modifier(Modifier::BOLD),
            button_inactive: Style::default()
                .fg(Color::Indexed(250))
                .bg(Color::Indexed(237)),

            panic_accent: Style::default()
                .fg(Color::LightRed)
                .add_modifier(Modifier::BOLD),
            panic_badge: Style::default()
                .fg(Color::Black)
                .bg(Color::LightRed)
                .add_modifier(Modifier::BOLD),
            panic_message: Style::default().add_modifier(Modifier::BOLD),
            link: Style::default().fg(Color::Blue),
        }
    }

    /// Columns the base padding takes away from the viewport width.
    pub fn base_horizontal_frame() -> u16 {
        BASE_PADDING.left + BASE_PADDING.right
    }
}

impl Default for Styles {
    fn default() -> Self {
        Self::new(Background::Dark)
    }
}
