//! Responder configuration parameters
//!
//! All tunable parameters for the SafeVision status responder.
//! Values are compiled in; there is no persisted configuration.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Audible-range bounds accepted for the alarm tone.
const MIN_TONE_HZ: u32 = 20;
const MAX_TONE_HZ: u32 = 20_000;

/// Task watchdog timeout.  A blocking alarm must finish well inside it.
pub const WATCHDOG_TIMEOUT_MS: u32 = 10_000;

/// How a `VIOLATION` alarm occupies the control loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AlarmMode {
    /// Sound the tone and block the whole cycle for the alarm duration.
    Blocking,
    /// Sound the tone, arm a deadline, and keep polling; the tone is
    /// silenced by the first poll after the deadline.
    Deadline,
}

/// Core responder configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResponderConfig {
    // --- Serial ---
    /// UART baud rate
    pub baud_rate: u32,
    /// Treat a partial line as complete after this many ms of silence
    /// (0 = wait for the terminator forever)
    pub line_timeout_ms: u32,

    // --- Alarm ---
    /// Buzzer tone frequency (Hz)
    pub tone_hz: u32,
    /// How long the tone sounds per `VIOLATION` (ms)
    pub alarm_duration_ms: u32,
    /// Blocking or deadline-driven alarm
    pub alarm_mode: AlarmMode,

    // --- Timing ---
    /// Main-loop yield between cycles (ms), lets the RTOS idle task run
    pub loop_yield_ms: u32,
}

impl Default for ResponderConfig {
    fn default() -> Self {
        Self {
            // Serial
            baud_rate: 9600,
            line_timeout_ms: 1000,

            // Alarm
            tone_hz: 1000,           // 1 kHz
            alarm_duration_ms: 1000, // 1 s
            alarm_mode: AlarmMode::Blocking,

            // Timing
            loop_yield_ms: 1,
        }
    }
}

impl ResponderConfig {
    /// Range-check every field.  Rejects rather than clamps.
    pub fn validate(&self) -> Result<()> {
        if self.baud_rate == 0 {
            return Err(Error::Config("baud_rate must be non-zero"));
        }
        if !(MIN_TONE_HZ..=MAX_TONE_HZ).contains(&self.tone_hz) {
            return Err(Error::Config("tone_hz outside audible range"));
        }
        if self.alarm_duration_ms == 0 {
            return Err(Error::Config("alarm_duration_ms must be non-zero"));
        }
        if self.worst_cycle_ms() >= WATCHDOG_TIMEOUT_MS {
            return Err(Error::Config("responder cycle would starve the watchdog"));
        }
        Ok(())
    }

    /// Longest gap between two watchdog feeds: the loop yield, plus the
    /// whole tone when the alarm blocks.
    pub fn worst_cycle_ms(&self) -> u32 {
        match self.alarm_mode {
            AlarmMode::Blocking => self.alarm_duration_ms.saturating_add(self.loop_yield_ms),
            AlarmMode::Deadline => self.loop_yield_ms,
        }
    }
}
