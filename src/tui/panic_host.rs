//! # Panic Host
//!
//! A second, independent view used after the wizard has died. It shows one
//! crash card (the fault, and where the log file is) and leaves on the first
//! input of any kind, a resize included.
//!
//! ## No Recursion
//!
//! [`handle_panic`] runs after the harness has already caught the fault and
//! outside its `catch_unwind` boundary. If the crash UI itself can't start,
//! the failure is logged and printed to stderr, and control goes back to the
//! harness. Nothing here ever hands a fault back to the recovery path.

use std::io;

use log::{debug, error};
use ratatui::layout::Rect;

use crate::harness::Fault;
use crate::logging::LogHandle;
use crate::tui::{Screen, TerminalSession};
use crate::tui::component::Component;
use crate::tui::components::CrashCard;
use crate::tui::components::crash_card::CARD_WIDTH;
use crate::tui::event::{CrosstermEvents, EventSource};
use crate::tui::styles::{Background, Styles};

pub struct PanicHost {
    fault: Fault,
    log_location: String,
    styles: Styles,
}

impl PanicHost {
    pub fn new(fault: Fault, log: &LogHandle) -> Self {
        Self {
            fault,
            log_location: log.location(),
            styles: Styles::new(Background::detect()),
        }
    }

    pub fn fault(&self) -> &Fault {
        &self.fault
    }

    /// Record the fault at ERROR. Always happens before anything is drawn.
    pub fn report(&self) {
        error!(error = self.fault.message(); "Application panicked");
    }

    fn draw<S: Screen>(&self, screen: &mut S) -> io::Result<()> {
        screen.draw_frame(|frame| {
            let area = frame.area();
            let mut card = CrashCard {
                fault: self.fault.message(),
                log_location: &self.log_location,
                styles: &self.styles,
            };
            let width = CARD_WIDTH.min(area.width);
            let height = card.height(width).min(area.height);
            card.render(
                frame,
                Rect {
                    width,
                    height,
                    ..area
                },
            );
        })
    }

    /// Draw the card and wait for one message. Any input, a resize
    /// included, or the end of input returns.
    pub fn run<S: Screen, E: EventSource>(&mut self, screen: &mut S, events: &mut E) -> io::Result<()> {
        self.draw(screen)?;
        if let Some(msg) = events.next_msg()? {
            debug!("Panic host input: {msg:?}");
        }
        debug!("Panic host dismissed");
        Ok(())
    }
}

/// Show `fault` on a fresh terminal, then return. The caller exits non-zero.
pub fn handle_panic(fault: Fault, log: &LogHandle) {
    handle_panic_with(fault, log, || {
        Ok((TerminalSession::open()?, CrosstermEvents))
    });
}

/// [`handle_panic`] with the screen and input supplied by `open`.
///
/// The fault is logged before `open` runs. If `open` fails, the error is
/// logged and printed to stderr and the function returns; a panic inside
/// `open` is not caught here.
pub fn handle_panic_with<S, E>(fault: Fault, log: &LogHandle, open: impl FnOnce() -> io::Result<(S, E)>)
where
    S: Screen,
    E: EventSource,
{
    let mut host = PanicHost::new(fault, log);
    host.report();

    let (mut screen, mut events) = match open() {
        Ok(opened) => opened,
        Err(e) => {
            error!(error = e.to_string().as_str(); "Failed to start panic UI");
            eprintln!("Failed to start panic UI: {e}");
            return;
        }
    };

    if let Err(e) = host.run(&mut screen, &mut events) {
        error!(error = e.to_string().as_str(); "Panic UI failed");
        eprintln!("Failed to run panic UI: {e}");
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;
    use crate::core::action::Msg;
    use crate::core::keymap::Key;
    use crate::harness::guarded;
    use crate::test_support::{capture_logs, terminal_text, test_terminal};
    use crate::tui::event::ScriptedEvents;
    use log::Level;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn host(message: &str) -> PanicHost {
        let log = LogHandle::at(PathBuf::from("/tmp/midas-2024-03-05T14-07-09.log"));
        PanicHost::new(Fault::new(message), &log)
    }

    #[test]
    fn test_report_logs_fault_at_error() {
        let logs = capture_logs();
        host("panic host report test fault").report();

        let record = logs
            .find(|r| r.field("error") == Some("panic host report test fault"))
            .expect("fault should be logged");
        assert_eq!(record.level, Level::Error);
        assert_eq!(record.message, "Application panicked");
    }

    #[test]
    fn test_quits_on_first_key() {
        let mut host = host("index out of bounds");
        let mut terminal = test_terminal(80, 20);
        let mut events = ScriptedEvents::keys([Key::Char('q'), Key::Enter]);

        host.run(&mut terminal, &mut events).unwrap();

        assert_eq!(events.remaining(), 1);
        let text = terminal_text(&terminal);
        assert!(text.contains("Application Panic Detected"));
        assert!(text.contains("index out of bounds"));
        assert!(text.contains("file:///tmp/midas-2024-03-05T14-07-09.log"));
    }

    #[test]
    fn test_resize_also_dismisses() {
        let mut host = host("boom");
        let mut terminal = test_terminal(80, 20);
        let mut events = ScriptedEvents::new([
            Msg::Resize {
                width: 70,
                height: 20,
            },
            Msg::Key(Key::Enter),
        ]);

        host.run(&mut terminal, &mut events).unwrap();
        assert_eq!(events.remaining(), 1);
    }

    #[test]
    fn test_returns_when_input_ends() {
        let mut host = host("boom");
        let mut terminal = test_terminal(60, 20);
        host.run(&mut terminal, &mut ScriptedEvents::default()).unwrap();
        assert!(terminal_text(&terminal).contains(" Error  boom"));
        assert_eq!(host.fault().message(), "boom");
    }

    #[test]
    fn test_card_fits_small_terminal() {
        let mut host = host("boom");
        let mut terminal = test_terminal(30, 5);
        host.run(&mut terminal, &mut ScriptedEvents::default()).unwrap();
        assert!(terminal_text(&terminal).contains("Panic"));
    }

    #[test]
    fn test_start_failure_is_logged_and_returns() {
        let logs = capture_logs();
        let log = LogHandle::disabled();

        handle_panic_with(Fault::new("start failure test fault"), &log, || {
            Err::<(Terminal<TestBackend>, ScriptedEvents), _>(io::Error::other(
                "start failure test: no tty",
            ))
        });

        let reported = logs
            .find(|r| r.field("error") == Some("start failure test fault"))
            .expect("fault should be logged");
        assert_eq!(reported.message, "Application panicked");
        let failure = logs
            .find(|r| r.field("error") == Some("start failure test: no tty"))
            .expect("start failure should be logged");
        assert_eq!(failure.level, Level::Error);
        assert_eq!(failure.message, "Failed to start panic UI");
    }

    #[test]
    fn test_fault_is_logged_then_drawn() {
        let logs = capture_logs();
        let log = LogHandle::at(PathBuf::from("/tmp/midas-drawn-test.log"));
        let mut terminal = test_terminal(80, 20);
        let mut events = ScriptedEvents::keys([Key::Char('q'), Key::Enter]);
        let screen = &mut terminal;
        let input = &mut events;

        handle_panic_with(Fault::new("drawn test fault"), &log, move || {
            let reported = logs
                .find(|r| r.field("error") == Some("drawn test fault"))
                .map(|r| r.message);
            assert_eq!(reported.as_deref(), Some("Application panicked"));
            Ok((screen, input))
        });

        assert_eq!(events.remaining(), 1);
        let text = terminal_text(&terminal);
        assert!(text.contains("drawn test fault"));
        assert!(text.contains("file:///tmp/midas-drawn-test.log"));
    }

    #[test]
    fn test_panic_while_opening_is_not_recovered() {
        let log = LogHandle::disabled();
        let outcome = guarded(|| {
            handle_panic_with(
                Fault::new("first fault"),
                &log,
                || -> io::Result<(Terminal<TestBackend>, ScriptedEvents)> {
                    panic!("second fault while opening")
                },
            )
        });

        let fault = outcome.unwrap_err();
        assert_eq!(fault.message(), "second fault while opening");
    }
}
