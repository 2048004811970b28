//! Responder status and the mirrored output state.
//!
//! The physical pins are the only real state.  [`PeripheralState`] is the
//! responder's record of what it last drove them to.

use crate::protocol::message::StatusMessage;

/// Last status applied to the outputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Status {
    /// Nothing recognised since boot.
    #[default]
    Unknown,
    Safe,
    Violation,
}

impl From<StatusMessage> for Status {
    fn from(msg: StatusMessage) -> Self {
        match msg {
            StatusMessage::Safe => Self::Safe,
            StatusMessage::Violation => Self::Violation,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BuzzerState {
    #[default]
    Silent,
    Tone { hz: u32 },
}

/// Mirror of the three outputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PeripheralState {
    pub green: bool,
    pub red: bool,
    pub buzzer: BuzzerState,
}

impl PeripheralState {
    /// Everything off: the boot state.
    pub const OFF: Self = Self {
        green: false,
        red: false,
        buzzer: BuzzerState::Silent,
    };

    /// Outputs after a `SAFE` line.
    pub const SAFE: Self = Self {
        green: true,
        red: false,
        buzzer: BuzzerState::Silent,
    };

    pub fn is_sounding(&self) -> bool {
        matches!(self.buzzer, BuzzerState::Tone { .. })
    }
}
