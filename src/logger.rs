//! Custom logging module.
//!
//! This module provides a custom logger implementation that forwards log
//! entries over a channel; the UI loop drains them into application state
//! for display in the in-TUI log view.

use log::{Level, Log, Metadata, Record};
use std::sync::mpsc::Sender;

/// Format a log record into a string for display
///
pub fn format_log(record: &Record) -> String {
    let timestamp = chrono::Utc::now().format("%Y-%m-%d %H:%M:%S%.3f");
    let level_str = match record.level() {
        Level::Error => "ERROR",
        Level::Warn => "WARN",
        Level::Info => "INFO",
        Level::Debug => "DEBUG",
        Level::Trace => "TRACE",
    };
    format!("{} {} {}", timestamp, level_str, record.args())
}

/// Custom logger that forwards records to the UI over a channel.
///
pub struct CustomLogger {
    sender: Sender<String>,
}

impl CustomLogger {
    pub fn new(sender: Sender<String>) -> Self {
        CustomLogger { sender }
    }
}

impl Log for CustomLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        // Keep the log view on this crate's records; dependency chatter at
        // trace level would drown it out.
        metadata.target().starts_with(env!("CARGO_CRATE_NAME")) && metadata.level() <= Level::Debug
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            // The receiver disappears on shutdown; dropped entries are fine.
            let _ = self.sender.send(format_log(record));
        }
    }

    fn flush(&self) {
        // No-op
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_log_includes_level_and_message() {
        let formatted = format_log(
            &Record::builder()
                .args(format_args!("Fetching horses..."))
                .level(Level::Info)
                .target("stajnia_tui")
                .build(),
        );
        assert!(formatted.contains("INFO"));
        assert!(formatted.contains("Fetching horses..."));
    }

    #[test]
    fn logger_forwards_own_records_only() {
        let (tx, rx) = std::sync::mpsc::channel();
        let logger = CustomLogger::new(tx);

        logger.log(
            &Record::builder()
                .args(format_args!("own"))
                .level(Level::Error)
                .target(concat!(env!("CARGO_CRATE_NAME"), "::events::network"))
                .build(),
        );
        assert!(rx.try_recv().unwrap().contains("own"));

        logger.log(
            &Record::builder()
                .args(format_args!("foreign"))
                .level(Level::Error)
                .target("hyper::client")
                .build(),
        );
        assert!(rx.try_recv().is_err());
    }
}
