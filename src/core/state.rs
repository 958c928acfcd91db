//! # Application State
//!
//! Core wizard state. No terminal types here; presentation lives in `tui`.
//!
//! ```text
//! App
//! ├── form: Form            // prompts, focus, answers, completion
//! ├── viewport: Viewport    // terminal size, width clamped to MAX_WIDTH
//! ├── fullscreen: bool      // display flag, read by the renderer only
//! ├── quitting: bool        // terminal state, set by the quit binding
//! └── keys: AppKeyMap       // global bindings
//! ```
//!
//! State changes only happen through `update(app, msg)` in action.rs.

use crate::core::form::{Form, FormStatus};
use crate::core::keymap::AppKeyMap;
use crate::core::prompt::Prompt;
use crate::core::questionnaire::{CLASS_KEY, LEVEL_KEY, application_prompts};
use crate::core::role::{self, Role};

/// Widest layout the renderer will use, regardless of terminal width.
pub const MAX_WIDTH: u16 = 90;

const DEFAULT_HEIGHT: u16 = 24;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            width: MAX_WIDTH,
            height: DEFAULT_HEIGHT,
        }
    }
}

impl Viewport {
    pub fn resize(&mut self, width: u16, height: u16) {
        self.width = width.min(MAX_WIDTH);
        self.height = height;
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Answering the prompt at this index.
    Active(usize),
    Completed,
    Quit,
}

pub struct App {
    pub form: Form,
    pub viewport: Viewport,
    pub fullscreen: bool,
    pub quitting: bool,
    pub keys: AppKeyMap,
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

impl App {
    pub fn new() -> Self {
        Self::with_prompts(application_prompts())
    }

    pub fn with_prompts(prompts: Vec<Prompt>) -> Self {
        Self {
            form: Form::new(prompts),
            viewport: Viewport::default(),
            fullscreen: false,
            quitting: false,
            keys: AppKeyMap::default(),
        }
    }

    pub fn phase(&self) -> Phase {
        if self.quitting {
            return Phase::Quit;
        }
        match self.form.status() {
            FormStatus::Active => Phase::Active(self.form.focus()),
            FormStatus::Completed => Phase::Completed,
        }
    }

    pub fn class(&self) -> &str {
        self.form.get_string(CLASS_KEY)
    }

    pub fn level(&self) -> &str {
        self.form.get_string(LEVEL_KEY)
    }

    pub fn role(&self) -> Role {
        role::resolve_answers(self.class(), self.level())
    }
}
