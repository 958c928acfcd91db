use std::collections::VecDeque;
use std::io;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::core::action::Msg;
use crate::core::keymap::Key;

/// Where the event loops get their input from.
pub trait EventSource {
    /// Block until the next relevant message. `None` means the input has ended.
    fn next_msg(&mut self) -> io::Result<Option<Msg>>;
}

impl<E: EventSource + ?Sized> EventSource for &mut E {
    fn next_msg(&mut self) -> io::Result<Option<Msg>> {
        (**self).next_msg()
    }
}

/// Reads from the real terminal.
pub struct CrosstermEvents;

impl EventSource for CrosstermEvents {
    fn next_msg(&mut self) -> io::Result<Option<Msg>> {
        loop {
            if let Some(msg) = translate(event::read()?) {
                return Ok(Some(msg));
            }
        }
    }
}

/// A fixed sequence of messages, replayed in order.
#[derive(Debug, Default)]
pub struct ScriptedEvents {
    queue: VecDeque<Msg>,
}

impl ScriptedEvents {
    pub fn new(msgs: impl IntoIterator<Item = Msg>) -> Self {
        Self {
            queue: msgs.into_iter().collect(),
        }
    }

    pub fn keys(keys: impl IntoIterator<Item = Key>) -> Self {
        Self::new(keys.into_iter().map(Msg::Key))
    }

    pub fn remaining(&self) -> usize {
        self.queue.len()
    }
}

impl EventSource for ScriptedEvents {
    fn next_msg(&mut self) -> io::Result<Option<Msg>> {
        Ok(self.queue.pop_front())
    }
}

/// Map a crossterm event onto a wizard message. Releases and repeats are dropped.
pub fn translate(event: Event) -> Option<Msg> {
    match event {
        Event::Key(key_event) if key_event.kind == KeyEventKind::Press => {
            log::debug!(
                "Key event: {:?} with modifiers {:?}",
                key_event.code,
                key_event.modifiers
            );
            translate_key(key_event).map(Msg::Key)
        }
        Event::Resize(width, height) => Some(Msg::Resize { width, height }),
        _ => None,
    }
}

fn translate_key(key_event: KeyEvent) -> Option<Key> {
    match (key_event.modifiers, key_event.code) {
        (KeyModifiers::CONTROL, KeyCode::Char(c)) => Some(Key::Ctrl(c)),
        (_, KeyCode::Char(c)) => Some(Key::Char(c)),
        (_, KeyCode::Up) => Some(Key::Up),
        (_, KeyCode::Down) => Some(Key::Down),
        (_, KeyCode::Left) => Some(Key::Left),
        (_, KeyCode::Right) => Some(Key::Right),
        (_, KeyCode::Enter) => Some(Key::Enter),
        (_, KeyCode::Tab) => Some(Key::Tab),
        (_, KeyCode::BackTab) => Some(Key::BackTab),
        (_, KeyCode::Esc) => Some(Key::Esc),
        _ => None,
    }
}
