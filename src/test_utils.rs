//! Shared test utilities for TextFixer.
//!
//! Builders for the activation events the platform delivers, and an
//! in-memory logger.

#![cfg(test)]

use crate::constants::{ACTION_PROCESS_TEXT, ACTION_SEND, EXTRA_PROCESS_TEXT, EXTRA_TEXT};
use crate::models::{ActivationEvent, Extra};
use log::{Level, LevelFilter, Log, Metadata, Record};
use std::sync::{Mutex, PoisonError};

/// A PROCESS_TEXT activation carrying `text` as a char sequence.
pub fn process_text_event(text: &str) -> ActivationEvent {
    ActivationEvent::new(Some(ACTION_PROCESS_TEXT))
        .with_extra(EXTRA_PROCESS_TEXT, Extra::CharSequence(text.to_string()))
}

/// A SEND activation carrying `text` as a plain string.
pub fn send_event(text: &str) -> ActivationEvent {
    ActivationEvent::new(Some(ACTION_SEND)).with_extra(EXTRA_TEXT, Extra::String(text.to_string()))
}

/// A launcher-style activation with no recognized action.
pub fn main_event() -> ActivationEvent {
    ActivationEvent::new(Some("android.intent.action.MAIN"))
}

struct CaptureLogger;

static CAPTURED: Mutex<Vec<(Level, String)>> = Mutex::new(Vec::new());
static LOGGER: CaptureLogger = CaptureLogger;

impl Log for CaptureLogger {
    fn enabled(&self, _metadata: &Metadata) -> bool {
        true
    }

    fn log(&self, record: &Record) {
        let mut captured = CAPTURED.lock().unwrap_or_else(PoisonError::into_inner);
        captured.push((record.level(), record.args().to_string()));
    }

    fn flush(&self) {}
}

/// Route `log` records into memory for the rest of the test run.
pub fn install_capture_logger() {
    let _ = log::set_logger(&LOGGER);
    log::set_max_level(LevelFilter::Trace);
}

/// Records captured so far whose message contains `needle`
pub fn captured_logs(needle: &str) -> Vec<(Level, String)> {
    let captured = CAPTURED.lock().unwrap_or_else(PoisonError::into_inner);
    captured
        .iter()
        .filter(|(_, message)| message.contains(needle))
        .cloned()
        .collect()
}
