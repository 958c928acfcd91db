//! # TUI Adapter
//!
//! The ratatui-specific layer. Owns the terminal, renders `App` through
//! `ui::draw_ui`, and feeds `core::action::Msg` values into `update`.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Loop
//!
//! ```text
//! size ─► Msg::Resize ─► update ─► draw ─► next_msg ─► update ─► draw? ─► ...
//!                                              │
//!                                   None / Effect::Quit ─► return App
//! ```
//!
//! There is no animation, so the loop blocks on input and only redraws after
//! an update asked for it.
//!
//! Both halves are generic: any [`Screen`] (a real terminal, or a
//! `TestBackend` one) and any [`EventSource`]. Tests drive whole sessions
//! with `ScriptedEvents`.

pub mod component;
pub mod components;
pub mod event;
pub mod panic_host;
pub mod styles;
pub mod ui;

use std::io;

use log::{debug, info};
use ratatui::{DefaultTerminal, Frame, Terminal};
use ratatui::backend::Backend;

use crate::core::action::{Effect, Msg, update};
use crate::core::state::App;
use crate::tui::event::{CrosstermEvents, EventSource};
use crate::tui::styles::{Background, Styles};

/// Something a view can be drawn on.
pub trait Screen {
    fn draw_frame<F: FnOnce(&mut Frame)>(&mut self, render: F) -> io::Result<()>;

    /// Current size as `(width, height)`.
    fn dimensions(&self) -> io::Result<(u16, u16)>;
}

impl<B: Backend> Screen for Terminal<B> {
    fn draw_frame<F: FnOnce(&mut Frame)>(&mut self, render: F) -> io::Result<()> {
        self.draw(render)
            .map(|_| ())
            .map_err(|e| io::Error::other(e.to_string()))
    }

    fn dimensions(&self) -> io::Result<(u16, u16)> {
        self.size()
            .map(|size| (size.width, size.height))
            .map_err(|e| io::Error::other(e.to_string()))
    }
}

impl<S: Screen + ?Sized> Screen for &mut S {
    fn draw_frame<F: FnOnce(&mut Frame)>(&mut self, render: F) -> io::Result<()> {
        (**self).draw_frame(render)
    }

    fn dimensions(&self) -> io::Result<(u16, u16)> {
        (**self).dimensions()
    }
}

/// The real terminal in raw mode on the alternate screen. Restored on drop,
/// even if the session unwinds.
pub struct TerminalSession {
    terminal: DefaultTerminal,
}

impl TerminalSession {
    pub fn open() -> io::Result<Self> {
        Ok(Self {
            terminal: ratatui::try_init()?,
        })
    }
}

impl Screen for TerminalSession {
    fn draw_frame<F: FnOnce(&mut Frame)>(&mut self, render: F) -> io::Result<()> {
        self.terminal.draw_frame(render)
    }

    fn dimensions(&self) -> io::Result<(u16, u16)> {
        self.terminal.dimensions()
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        ratatui::restore();
        debug!("Terminal restored");
    }
}

/// Run the wizard on the real terminal until it quits.
pub fn run(app: App) -> io::Result<App> {
    let styles = Styles::new(Background::detect());
    let mut terminal = TerminalSession::open()?;
    run_session(&mut terminal, &mut CrosstermEvents, app, &styles)
}

/// The event loop. Returns the final app once the user quits or input ends.
pub fn run_session<S: Screen, E: EventSource>(
    screen: &mut S,
    events: &mut E,
    mut app: App,
    styles: &Styles,
) -> io::Result<App> {
    let (width, height) = screen.dimensions()?;
    update(&mut app, Msg::Resize { width, height });
    info!(width = width, height = height; "Wizard started");

    let mut needs_redraw = true; // Force first frame

    loop {
        if needs_redraw {
            screen.draw_frame(|f| ui::draw_ui(f, &app, styles))?;
            needs_redraw = false;
        }

        let Some(msg) = events.next_msg()? else {
            debug!("Input ended");
            break;
        };
        match update(&mut app, msg) {
            Effect::None => {}
            Effect::Redraw => needs_redraw = true,
            Effect::Quit => {
                screen.draw_frame(|f| ui::draw_ui(f, &app, styles))?;
                break;
            }
        }
    }

    Ok(app)
}
