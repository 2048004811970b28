//! Passive piezo buzzer driver.
//!
//! A tone is a 50 % duty square wave from the LEDC channel routed to the
//! buzzer pin; silence is duty 0, which holds the pin LOW.
//!
//! ## Dual-target design
//!
//! On ESP-IDF: retunes the LEDC timer via hw_init.
//! On host/test: tracks state in-memory only.

use log::debug;

use crate::drivers::hw_init;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuzzerOutput {
    Silent,
    Tone { hz: u32 },
}

pub struct Buzzer {
    state: BuzzerOutput,
}

impl Default for Buzzer {
    fn default() -> Self {
        Self::new()
    }
}

impl Buzzer {
    pub fn new() -> Self {
        Self {
            state: BuzzerOutput::Silent,
        }
    }

    pub fn tone(&mut self, hz: u32) {
        if hz == 0 {
            self.silence();
            return;
        }
        hw_init::tone_start(hz);
        self.state = BuzzerOutput::Tone { hz };
        debug!("buzzer: {} Hz", hz);
    }

    pub fn silence(&mut self) {
        hw_init::tone_stop();
        self.state = BuzzerOutput::Silent;
    }

    pub fn state(&self) -> BuzzerOutput {
        self.state
    }

    pub fn is_sounding(&self) -> bool {
        matches!(self.state, BuzzerOutput::Tone { .. })
    }
}
