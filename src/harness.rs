//! # Process Harness
//!
//! Wires one run of the program together:
//!
//! 1. Start logging (a missing log file is not fatal).
//! 2. Install the panic hook.
//! 3. Run the wizard inside a `catch_unwind` boundary.
//! 4. On a fault, hand it to the panic host, outside the boundary.
//! 5. Flush the log and map the outcome to an exit code.
//!
//! Expected failures travel as `io::Result`; only genuine bugs unwind.

use std::any::Any;
use std::fmt;
use std::io;
use std::panic::{self, UnwindSafe};
use std::process;

use log::{error, info};

use crate::core::config::LoggerConfig;
use crate::core::state::App;
use crate::logging::{self, LogHandle};
use crate::tui;
use crate::tui::panic_host;

/// Process exit codes. Only `Success` and `Error` are produced today; the
/// rest are reserved so their numbers never get reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    Success = 0,
    Error = 1,
    InvalidArgs = 2,
    ConfigError = 3,
    NotFound = 4,
    Permission = 5,
    Unavailable = 6,
    Timeout = 7,
    DependencyFailure = 8,
}

impl From<ExitCode> for process::ExitCode {
    fn from(code: ExitCode) -> Self {
        process::ExitCode::from(code as u8)
    }
}

const UNKNOWN_FAULT: &str = "unknown fault";

/// A panic that reached the boundary, reduced to its message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fault {
    message: String,
}

impl Fault {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn from_payload(payload: Box<dyn Any + Send>) -> Self {
        Self::new(payload_message(payload.as_ref()))
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for Fault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

/// `panic!("...")` payloads are `&str` or `String`; anything else is opaque.
fn payload_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        s.to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        UNKNOWN_FAULT.to_string()
    }
}

/// Log panics where they happen, and keep the default report off the screen.
pub fn install_panic_hook() {
    panic::set_hook(Box::new(|info| {
        let location = info
            .location()
            .map(|l| format!("{}:{}", l.file(), l.line()))
            .unwrap_or_default();
        let message = payload_message(info.payload());
        error!(error = message.as_str(), location = location.as_str(); "Panic raised");
    }));
}

/// Run `f`, turning an unwind into a [`Fault`].
pub fn guarded<T>(f: impl FnOnce() -> T + UnwindSafe) -> Result<T, Fault> {
    panic::catch_unwind(f).map_err(Fault::from_payload)
}

/// Exit code for a finished session.
pub fn exit_code(outcome: &Result<io::Result<App>, Fault>) -> ExitCode {
    match outcome {
        Ok(Ok(_)) => ExitCode::Success,
        Ok(Err(_)) | Err(_) => ExitCode::Error,
    }
}

pub fn run() -> ExitCode {
    let config = LoggerConfig::from_env();
    let log = match logging::init(&config) {
        Ok(handle) => handle,
        Err(e) => {
            eprintln!("Failed to open log file: {e}");
            LogHandle::disabled()
        }
    };
    install_panic_hook();

    run_with(&log, || tui::run(App::new()), panic_host::handle_panic)
}

/// Run `session` behind the unwind boundary and hand a fault to `host`.
///
/// `host` is called outside the boundary, at most once.
pub fn run_with(
    log: &LogHandle,
    session: impl FnOnce() -> io::Result<App> + UnwindSafe,
    host: impl FnOnce(Fault, &LogHandle),
) -> ExitCode {
    let outcome = guarded(session);
    let code = exit_code(&outcome);

    match outcome {
        Ok(Ok(app)) => {
            info!(completed = app.form.is_completed(); "Session ended");
        }
        Ok(Err(e)) => {
            error!(error = e.to_string().as_str(); "Event loop failed");
            println!("Oh no: {e}");
        }
        Err(fault) => host(fault, log),
    }

    let status = code as u8;
    info!(status = status; "Exiting");
    log.flush();
    code
}
