//! # Logging
//!
//! Records go through the `log` facade. `init` installs a
//! `simplelog::CombinedLogger` made of:
//!
//! - a JSON-lines file sink at INFO and above, one object per record:
//!   `{"level":"error","ts":"...","caller":"src/x.rs:12","msg":"...", <fields>}`
//! - optionally, a `TermLogger` at DEBUG on stderr (`DEBUG=true`)
//!
//! The log file path is returned inside a [`LogHandle`] rather than stored in
//! a global; whoever needs to show it (the panic host) receives the handle.

use std::fmt;
use std::fs::{File, OpenOptions};
use std::io::{self, LineWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use chrono::{DateTime, Local, SecondsFormat};
use log::kv::{self, VisitSource};
use log::{Log, Metadata, Record, SetLoggerError, info};
use serde_json::{Map, Value};
use simplelog::{
    ColorChoice, CombinedLogger, Config, ConfigBuilder, LevelFilter, SharedLogger, TermLogger,
    TerminalMode,
};

use crate::core::config::LoggerConfig;

const FILE_LEVEL: LevelFilter = LevelFilter::Info;
const CONSOLE_LEVEL: LevelFilter = LevelFilter::Debug;

// ============================================================================
// Handle
// ============================================================================

/// Where this run's log file lives. Created once by [`init`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LogHandle {
    path: Option<PathBuf>,
}

impl LogHandle {
    /// A handle for a run without a log file.
    pub fn disabled() -> Self {
        Self { path: None }
    }

    /// A handle for an already-open log file at `path`.
    pub fn at(path: PathBuf) -> Self {
        Self { path: Some(path) }
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// `file://` URL of the log file, for display.
    pub fn location(&self) -> String {
        match &self.path {
            Some(path) => format!("file://{}", path.display()),
            None => "(unavailable)".to_string(),
        }
    }

    pub fn flush(&self) {
        log::logger().flush();
    }
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum LogError {
    Io(io::Error),
    Install(SetLoggerError),
}

impl fmt::Display for LogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogError::Io(e) => write!(f, "{e}"),
            LogError::Install(e) => write!(f, "logger already installed: {e}"),
        }
    }
}

impl std::error::Error for LogError {}

// ============================================================================
// Initialization
// ============================================================================

/// `midas-2024-03-05T14-07-09.log`
pub fn log_file_name(now: DateTime<Local>) -> String {
    format!("midas-{}.log", now.format("%Y-%m-%dT%H-%M-%S"))
}

pub fn init(config: &LoggerConfig) -> Result<LogHandle, LogError> {
    let path = config.directory.join(log_file_name(Local::now()));
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .map_err(LogError::Io)?;

    let mut loggers: Vec<Box<dyn SharedLogger>> = vec![JsonFileLogger::new(FILE_LEVEL, file)];
    if config.console_output {
        loggers.push(TermLogger::new(
            CONSOLE_LEVEL,
            ConfigBuilder::new().set_time_format_rfc3339().build(),
            TerminalMode::Stderr,
            ColorChoice::Auto,
        ));
    }
    CombinedLogger::init(loggers).map_err(LogError::Install)?;

    let handle = LogHandle::at(path);
    announce(&handle, config);
    Ok(handle)
}

/// First record of every run: where the file is and how logging was set up.
fn announce(handle: &LogHandle, config: &LoggerConfig) {
    let file = handle
        .path()
        .map(|path| path.display().to_string())
        .unwrap_or_default();
    let directory = config.directory.display().to_string();
    info!(
        file = file.as_str(),
        console_output = config.console_output,
        directory = directory.as_str();
        "Logging initialized"
    );
}

// ============================================================================
// JSON File Sink
// ============================================================================

pub struct JsonFileLogger {
    level: LevelFilter,
    writer: Mutex<LineWriter<File>>,
}

impl JsonFileLogger {
    pub fn new(level: LevelFilter, file: File) -> Box<Self> {
        Box::new(Self {
            level,
            writer: Mutex::new(LineWriter::new(file)),
        })
    }
}

impl Log for JsonFileLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line = encode_record(record, Local::now());
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writeln!(writer, "{line}");
        }
    }

    fn flush(&self) {
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writer.flush();
        }
    }
}

impl SharedLogger for JsonFileLogger {
    fn level(&self) -> LevelFilter {
        self.level
    }

    fn config(&self) -> Option<&Config> {
        None
    }

    fn as_log(self: Box<Self>) -> Box<dyn Log> {
        self
    }
}

/// Encode one record as a single-line JSON object.
pub fn encode_record(record: &Record, timestamp: DateTime<Local>) -> String {
    let mut entry = Map::new();
    entry.insert(
        "level".to_string(),
        Value::String(record.level().as_str().to_lowercase()),
    );
    entry.insert(
        "ts".to_string(),
        Value::String(timestamp.to_rfc3339_opts(SecondsFormat::Millis, false)),
    );
    if let (Some(file), Some(line)) = (record.file(), record.line()) {
        entry.insert("caller".to_string(), Value::String(format!("{file}:{line}")));
    }
    entry.insert("msg".to_string(), Value::String(record.args().to_string()));

    let _ = record.key_values().visit(&mut Fields(&mut entry));
    Value::Object(entry).to_string()
}

struct Fields<'a>(&'a mut Map<String, Value>);

impl<'kvs> VisitSource<'kvs> for Fields<'_> {
    fn visit_pair(&mut self, key: kv::Key<'kvs>, value: kv::Value<'kvs>) -> Result<(), kv::Error> {
        let json = if let Some(flag) = value.to_bool() {
            Value::Bool(flag)
        } else if let Some(n) = value.to_i64() {
            Value::from(n)
        } else if let Some(n) = value.to_u64() {
            Value::from(n)
        } else if let Some(n) = value.to_f64() {
            Value::from(n)
        } else {
            Value::String(value.to_string())
        };
        self.0.insert(key.as_str().to_string(), json);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::capture_logs;
    use chrono::TimeZone;
    use log::Level;
    use std::fs;

    fn fixed_time() -> DateTime<Local> {
        Local.with_ymd_and_hms(2024, 3, 5, 14, 7, 9).unwrap()
    }

    #[test]
    fn test_log_file_name_has_second_granularity() {
        assert_eq!(log_file_name(fixed_time()), "midas-2024-03-05T14-07-09.log");
    }

    #[test]
    fn test_encode_record_with_fields() {
        let fields: &[(&str, &str)] = &[("error", "boom")];
        let line = encode_record(
            &Record::builder()
                .args(format_args!("Application panicked"))
                .level(Level::Error)
                .file(Some("src/tui/panic_host.rs"))
                .line(Some(42))
                .key_values(&fields)
                .build(),
            fixed_time(),
        );

        assert!(!line.contains('\n'));
        let json: Value = serde_json::from_str(&line).unwrap();
        assert_eq!(json["level"], "error");
        assert_eq!(json["msg"], "Application panicked");
        assert_eq!(json["caller"], "src/tui/panic_host.rs:42");
        assert_eq!(json["error"], "boom");
        assert!(json["ts"].as_str().unwrap().starts_with("2024-03-05T14:07:09.000"));
    }

    #[test]
    fn test_encode_record_keeps_scalar_types() {
        let fields: &[(&str, bool)] = &[("console_output", true)];
        let line = encode_record(
            &Record::builder()
                .args(format_args!("Logging initialized"))
                .level(Level::Info)
                .key_values(&fields)
                .build(),
            fixed_time(),
        );

        let json: Value = serde_json::from_str(&line).unwrap();
        assert_eq!(json["console_output"], true);
        assert!(json.get("caller").is_none());
    }

    #[test]
    fn test_file_logger_filters_below_info() {
        let dir = std::env::temp_dir().join(format!("midas-log-test-{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join(log_file_name(fixed_time()));
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .unwrap();
        let logger = JsonFileLogger::new(LevelFilter::Info, file);

        logger.log(
            &Record::builder()
                .args(format_args!("kept"))
                .level(Level::Warn)
                .build(),
        );
        logger.log(
            &Record::builder()
                .args(format_args!("dropped"))
                .level(Level::Debug)
                .build(),
        );
        logger.flush();

        let contents = fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = contents.lines().collect();
        assert_eq!(lines.len(), 1);
        let json: Value = serde_json::from_str(lines[0]).unwrap();
        assert_eq!(json["msg"], "kept");
        assert_eq!(json["level"], "warn");

        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_handle_location() {
        let handle = LogHandle {
            path: Some(PathBuf::from("/tmp/midas-2024-03-05T14-07-09.log")),
        };
        assert_eq!(
            handle.location(),
            "file:///tmp/midas-2024-03-05T14-07-09.log"
        );
        assert_eq!(LogHandle::disabled().location(), "(unavailable)");
        assert!(LogHandle::disabled().path().is_none());
    }

    #[test]
    fn test_announce_logs_plain_path_and_config_fields() {
        let logs = capture_logs();
        let handle = LogHandle::at(PathBuf::from("/tmp/midas-announce-test.log"));
        let config = LoggerConfig::resolve(Some("true"), Some(PathBuf::from("/var/log/midas")));

        announce(&handle, &config);

        let record = logs
            .find(|r| r.field("file") == Some("/tmp/midas-announce-test.log"))
            .expect("init record should be logged");
        assert_eq!(record.message, "Logging initialized");
        assert_eq!(record.level, Level::Info);
        assert_eq!(record.field("console_output"), Some("true"));
        assert_eq!(record.field("directory"), Some("/var/log/midas"));
        assert_eq!(record.field("config"), None);
    }

    #[test]
    fn test_log_error_display() {
        let err = LogError::Io(io::Error::new(io::ErrorKind::PermissionDenied, "denied"));
        assert_eq!(err.to_string(), "denied");
    }
}
