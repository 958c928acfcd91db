//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use std::sync::{Mutex, OnceLock};

use log::kv::{self, VisitSource};
use log::{Level, LevelFilter, Log, Metadata, Record};
use ratatui::Terminal;
use ratatui::backend::TestBackend;
use ratatui::buffer::Buffer;

/// Flatten a buffer to text, one line per row.
pub fn buffer_text(buffer: &Buffer) -> String {
    buffer
        .content()
        .chunks(buffer.area.width.max(1) as usize)
        .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn test_terminal(width: u16, height: u16) -> Terminal<TestBackend> {
    Terminal::new(TestBackend::new(width, height)).unwrap()
}

pub fn terminal_text(terminal: &Terminal<TestBackend>) -> String {
    buffer_text(terminal.backend().buffer())
}

#[derive(Debug, Clone)]
pub struct CapturedRecord {
    pub level: Level,
    pub message: String,
    pub fields: Vec<(String, String)>,
}

impl CapturedRecord {
    pub fn field(&self, key: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }
}

/// In-memory logger. Installed process-wide on first use; tests running in
/// parallel share it, so assertions should look for values unique to the test.
#[derive(Default)]
pub struct CaptureLogger {
    records: Mutex<Vec<CapturedRecord>>,
}

impl CaptureLogger {
    pub fn records(&self) -> Vec<CapturedRecord> {
        self.records.lock().map(|r| r.clone()).unwrap_or_default()
    }

    pub fn find(&self, predicate: impl Fn(&CapturedRecord) -> bool) -> Option<CapturedRecord> {
        self.records().into_iter().find(|record| predicate(record))
    }
}

struct FieldCollector<'a>(&'a mut Vec<(String, String)>);

impl<'kvs> VisitSource<'kvs> for FieldCollector<'_> {
    fn visit_pair(&mut self, key: kv::Key<'kvs>, value: kv::Value<'kvs>) -> Result<(), kv::Error> {
        self.0.push((key.as_str().to_string(), value.to_string()));
        Ok(())
    }
}

impl Log for CaptureLogger {
    fn enabled(&self, _metadata: &Metadata) -> bool {
        true
    }

    fn log(&self, record: &Record) {
        let mut fields = Vec::new();
        let _ = record.key_values().visit(&mut FieldCollector(&mut fields));
        if let Ok(mut records) = self.records.lock() {
            records.push(CapturedRecord {
                level: record.level(),
                message: record.args().to_string(),
                fields,
            });
        }
    }

    fn flush(&self) {}
}

pub fn capture_logs() -> &'static CaptureLogger {
    static LOGGER: OnceLock<&'static CaptureLogger> = OnceLock::new();
    LOGGER.get_or_init(|| {
        let logger: &'static CaptureLogger = Box::leak(Box::new(CaptureLogger::default()));
        let _ = log::set_logger(logger);
        log::set_max_level(LevelFilter::Trace);
        logger
    })
}
