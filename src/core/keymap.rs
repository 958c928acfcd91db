//! # Key Bindings
//!
//! Framework-agnostic key representation plus the two binding tables the
//! wizard understands:
//!
//! - [`AppKeyMap`]: global actions (toggle fullscreen, quit), checked first.
//! - [`FormKeyMap`]: keys consumed by the active prompt.
//!
//! A [`KeyBinding`] pairs the keys that trigger it with the help text shown in
//! the footer, so the help line can never drift from what is actually bound.

use crate::core::prompt::PromptKind;

/// A single key press, stripped of terminal-library specifics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Char(char),
    Ctrl(char),
    Up,
    Down,
    Left,
    Right,
    Enter,
    Tab,
    BackTab,
    Esc,
}

/// Help entry for a binding: the key label and what it does.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Help {
    pub key: &'static str,
    pub desc: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyBinding {
    keys: &'static [Key],
    help: Help,
}

impl KeyBinding {
    pub const fn new(keys: &'static [Key], key: &'static str, desc: &'static str) -> Self {
        Self {
            keys,
            help: Help { key, desc },
        }
    }

    pub fn matches(&self, key: &Key) -> bool {
        self.keys.contains(key)
    }

    pub fn help(&self) -> Help {
        self.help
    }
}

/// Joins bindings into the one-line help format: `f toggle fullscreen • q quit`.
pub fn short_help(bindings: &[KeyBinding]) -> String {
    bindings
        .iter()
        .map(|binding| {
            let help = binding.help();
            format!("{} {}", help.key, help.desc)
        })
        .collect::<Vec<_>>()
        .join(" • ")
}

/// Global bindings, matched before anything reaches the form.
#[derive(Debug, Clone, Copy)]
pub struct AppKeyMap {
    pub toggle_fullscreen: KeyBinding,
    pub quit: KeyBinding,
}

impl Default for AppKeyMap {
    fn default() -> Self {
        Self {
            toggle_fullscreen: KeyBinding::new(&[Key::Char('f')], "f", "toggle fullscreen"),
            quit: KeyBinding::new(&[Key::Char('q'), Key::Ctrl('c')], "q", "quit"),
        }
    }
}

impl AppKeyMap {
    pub fn short_help(&self) -> Vec<KeyBinding> {
        vec![self.toggle_fullscreen, self.quit]
    }
}

/// Keys consumed by the active prompt. Which ones apply depends on the
/// prompt's kind; see [`FormKeyMap::bindings_for`].
#[derive(Debug, Clone, Copy)]
pub struct FormKeyMap {
    pub up: KeyBinding,
    pub down: KeyBinding,
    pub toggle_option: KeyBinding,
    pub toggle_confirm: KeyBinding,
    pub accept: KeyBinding,
    pub reject: KeyBinding,
    pub select: KeyBinding,
    pub confirm: KeyBinding,
    pub submit: KeyBinding,
    pub prev: KeyBinding,
}

impl Default for FormKeyMap {
    fn default() -> Self {
        Self {
            up: KeyBinding::new(&[Key::Up, Key::Char('k')], "↑", "up"),
            down: KeyBinding::new(&[Key::Down, Key::Char('j')], "↓", "down"),
            toggle_option: KeyBinding::new(&[Key::Char(' '), Key::Char('x')], "x", "toggle"),
            toggle_confirm: KeyBinding::new(
                &[Key::Left, Key::Right, Key::Char('h'), Key::Char('l')],
                "←/→",
                "toggle",
            ),
            accept: KeyBinding::new(&[Key::Char('y'), Key::Char('Y')], "y", "yes"),
            reject: KeyBinding::new(&[Key::Char('n'), Key::Char('N')], "n", "no"),
            select: KeyBinding::new(&[Key::Enter, Key::Tab], "enter", "select"),
            confirm: KeyBinding::new(&[Key::Enter, Key::Tab], "enter", "confirm"),
            submit: KeyBinding::new(&[Key::Enter, Key::Tab], "enter", "submit"),
            prev: KeyBinding::new(&[Key::BackTab], "shift+tab", "back"),
        }
    }
}

impl FormKeyMap {
    /// Bindings shown in the footer for a prompt of this kind.
    pub fn bindings_for(&self, kind: &PromptKind, can_go_back: bool) -> Vec<KeyBinding> {
        let mut bindings = match kind {
            PromptKind::Select { .. } => vec![self.up, self.down, self.select],
            PromptKind::MultiSelect { .. } => {
                vec![self.up, self.down, self.toggle_option, self.confirm]
            }
            PromptKind::Confirm { .. } => vec![self.toggle_confirm, self.submit],
        };
        if can_go_back {
            bindings.insert(0, self.prev);
        }
        bindings
    }
}
