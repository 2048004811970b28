//! Log-based event sink adapter.
//!
//! Implements [`EventSink`] by writing structured application events to
//! the ESP-IDF logger (UART / USB-CDC console in production).

use log::{debug, info, warn};

use crate::app::events::AppEvent;
use crate::app::ports::EventSink;

/// Adapter that logs every [`AppEvent`] to the serial console.
pub struct LogEventSink;

impl Default for LogEventSink {
    fn default() -> Self {
        Self::new()
    }
}

impl LogEventSink {
    pub fn new() -> Self {
        Self
    }
}

impl EventSink for LogEventSink {
    fn emit(&mut self, event: &AppEvent) {
        match event {
            AppEvent::Started => {
                info!("START | outputs off, awaiting status");
            }
            AppEvent::StatusApplied { from, to } => {
                info!("STATUS | {:?} -> {:?}", from, to);
            }
            AppEvent::AlarmStarted { hz, duration_ms } => {
                warn!("ALARM | {} Hz for {} ms", hz, duration_ms);
            }
            AppEvent::AlarmStopped { cancelled } => {
                info!("ALARM | stopped{}", if *cancelled { " (cancelled)" } else { "" });
            }
            AppEvent::LineIgnored { len } => {
                debug!("LINE | ignored ({} bytes)", len);
            }
            AppEvent::LineOverflowed => {
                debug!("LINE | over-long, dropped");
            }
        }
    }
}
