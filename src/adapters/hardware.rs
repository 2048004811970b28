//! Hardware adapter: bridges real peripherals to the output port.
//!
//! Owns both indicator drivers and the buzzer, exposing them through
//! [`OutputPort`].  This is the only module that drives the output pins.
//! On non-espidf targets, the underlying drivers use cfg-gated simulation
//! stubs.

use crate::app::ports::OutputPort;
use crate::app::state::{BuzzerState, PeripheralState};
use crate::drivers::buzzer::{Buzzer, BuzzerOutput};
use crate::drivers::indicator::IndicatorLed;

/// Concrete adapter that combines all outputs behind the port trait.
pub struct HardwareAdapter {
    green: IndicatorLed,
    red: IndicatorLed,
    buzzer: Buzzer,
}

impl HardwareAdapter {
    pub fn new(green: IndicatorLed, red: IndicatorLed, buzzer: Buzzer) -> Self {
        Self { green, red, buzzer }
    }

    /// What the drivers report they are doing right now.
    pub fn state(&self) -> PeripheralState {
        PeripheralState {
            green: self.green.is_on(),
            red: self.red.is_on(),
            buzzer: match self.buzzer.state() {
                BuzzerOutput::Silent => BuzzerState::Silent,
                BuzzerOutput::Tone { hz } => BuzzerState::Tone { hz },
            },
        }
    }
}

// ── OutputPort implementation ─────────────────────────────────

impl OutputPort for HardwareAdapter {
    fn set_green(&mut self, on: bool) {
        self.green.set(on);
    }

    fn set_red(&mut self, on: bool) {
        self.red.set(on);
    }

    fn start_tone(&mut self, hz: u32) {
        self.buzzer.tone(hz);
    }

    fn stop_tone(&mut self) {
        self.buzzer.silence();
    }
}
