//! # Messages
//!
//! Everything that can happen to the wizard becomes a `Msg`.
//! Key pressed? That's `Msg::Key`. Terminal resized? `Msg::Resize`.
//!
//! The `update()` function takes the current state and a message, mutates the
//! state, and returns an `Effect` telling the event loop what to do next.
//! No I/O happens here.
//!
//! ```text
//! App + Msg  →  update()  →  App' + Effect
//! ```

use log::{debug, info};

use crate::core::form::FormAction;
use crate::core::keymap::Key;
use crate::core::state::App;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Msg {
    Key(Key),
    Resize { width: u16, height: u16 },
    Form(FormAction),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// Nothing changed.
    None,
    /// State changed; draw a new frame.
    Redraw,
    /// Leave the event loop.
    Quit,
}

pub fn update(app: &mut App, msg: Msg) -> Effect {
    if app.quitting {
        return Effect::Quit;
    }

    match msg {
        Msg::Resize { width, height } => {
            app.viewport.resize(width, height);
            Effect::Redraw
        }
        Msg::Key(key) if app.keys.quit.matches(&key) => {
            info!("Quit requested");
            app.quitting = true;
            Effect::Quit
        }
        Msg::Key(key) if app.keys.toggle_fullscreen.matches(&key) => {
            app.fullscreen = !app.fullscreen;
            debug!("Fullscreen: {}", app.fullscreen);
            Effect::Redraw
        }
        Msg::Key(key) => match app.form.action_for(&key) {
            Some(action) => apply_form_action(app, action),
            None => Effect::None,
        },
        Msg::Form(action) => apply_form_action(app, action),
    }
}

fn apply_form_action(app: &mut App, action: FormAction) -> Effect {
    let was_completed = app.form.is_completed();
    if !app.form.apply(action) {
        return Effect::None;
    }
    if !was_completed && app.form.is_completed() {
        let role = app.role();
        info!(class = app.class(), level = app.level(), title = role.title; "Application completed");
    }
    Effect::Redraw
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::prompt::Answer;
    use crate::core::state::{MAX_WIDTH, Phase};

    fn press(app: &mut App, keys: &[Key]) {
        for key in keys {
            update(app, Msg::Key(*key));
        }
    }

    fn at_confirmation() -> App {
        let mut app = App::new();
        press(&mut app, &[Key::Enter, Key::Enter, Key::Enter]);
        assert_eq!(app.phase(), Phase::Active(3));
        app
    }

    #[test]
    fn test_negative_confirmation_stays_active_with_error() {
        let mut app = at_confirmation();
        let effect = update(&mut app, Msg::Key(Key::Enter));
        assert_eq!(effect, Effect::Redraw);
        assert_eq!(app.phase(), Phase::Active(3));
        assert!(!app.form.errors().is_empty());
    }

    #[test]
    fn test_affirmative_confirmation_completes() {
        let mut app = at_confirmation();
        press(&mut app, &[Key::Char('y'), Key::Enter]);
        assert_eq!(app.phase(), Phase::Completed);
        assert!(app.form.errors().is_empty());
    }

    #[test]
    fn test_quit_from_any_phase() {
        for steps in 0..=4 {
            let mut app = App::new();
            for _ in 0..steps.min(3) {
                update(&mut app, Msg::Key(Key::Enter));
            }
            if steps == 4 {
                press(&mut app, &[Key::Char('y'), Key::Enter]);
                assert_eq!(app.phase(), Phase::Completed);
            }

            assert_eq!(update(&mut app, Msg::Key(Key::Char('q'))), Effect::Quit);
            assert_eq!(app.phase(), Phase::Quit);
        }
    }

    #[test]
    fn test_no_mutation_after_quit() {
        let mut app = App::new();
        update(&mut app, Msg::Key(Key::Ctrl('c')));
        assert_eq!(app.phase(), Phase::Quit);

        assert_eq!(update(&mut app, Msg::Key(Key::Down)), Effect::Quit);
        assert_eq!(update(&mut app, Msg::Key(Key::Char('f'))), Effect::Quit);
        assert_eq!(update(&mut app, Msg::Form(FormAction::Submit)), Effect::Quit);
        update(&mut app, Msg::Resize { width: 10, height: 5 });

        assert_eq!(app.class(), "Warrior");
        assert!(!app.fullscreen);
        assert_eq!(app.viewport.width, MAX_WIDTH);
        assert_eq!(app.form.focus(), 0);
    }

    #[test]
    fn test_fullscreen_toggle_round_trip_keeps_answers() {
        let mut app = App::new();
        press(&mut app, &[Key::Down, Key::Enter]);
        let before = app.form.answer("class").cloned();

        press(&mut app, &[Key::Char('f')]);
        assert!(app.fullscreen);
        press(&mut app, &[Key::Char('f')]);
        assert!(!app.fullscreen);

        assert_eq!(app.form.answer("class").cloned(), before);
        assert_eq!(before, Some(Answer::Choice("Mage".to_string())));
        assert_eq!(app.phase(), Phase::Active(1));
    }

    #[test]
    fn test_unbound_key_is_ignored() {
        let mut app = App::new();
        assert_eq!(update(&mut app, Msg::Key(Key::Char('z'))), Effect::None);
        assert_eq!(update(&mut app, Msg::Key(Key::Esc)), Effect::None);
    }

    #[test]
    fn test_resize_updates_viewport() {
        let mut app = App::new();
        assert_eq!(update(&mut app, Msg::Resize { width: 60, height: 20 }), Effect::Redraw);
        assert_eq!(app.viewport.width, 60);
        assert_eq!(app.viewport.height, 20);
    }

    #[test]
    fn test_form_messages_drive_the_form() {
        let mut app = App::new();
        update(&mut app, Msg::Form(FormAction::Down));
        update(&mut app, Msg::Form(FormAction::Down));
        assert_eq!(app.class(), "Rogue");
    }

    #[test]
    fn test_input_after_completion_is_ignored() {
        let mut app = at_confirmation();
        press(&mut app, &[Key::Char('y'), Key::Enter]);
        assert_eq!(update(&mut app, Msg::Form(FormAction::Prev)), Effect::None);
        assert_eq!(app.phase(), Phase::Completed);
    }
}
