//! Outbound application events.
//!
//! The [`StatusResponder`](super::service::StatusResponder) emits these
//! through the [`EventSink`](super::ports::EventSink) port.  None of them
//! travel back to the detection host; the link is one-way.

use super::state::Status;

/// Structured events emitted by the application core.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppEvent {
    /// Outputs initialised, responder ready.
    Started,

    /// A recognised status line was applied.
    StatusApplied { from: Status, to: Status },

    /// The buzzer started sounding.
    AlarmStarted { hz: u32, duration_ms: u32 },

    /// The buzzer went quiet, either because its time ran out or
    /// (`cancelled`) because a `SAFE` line arrived first.
    AlarmStopped { cancelled: bool },

    /// A complete line matched no status word.
    LineIgnored { len: usize },

    /// A line outgrew the decoder buffer and was dropped.
    LineOverflowed,
}

/// Local bookkeeping counters.  Never reported to the sender.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ResponderStats {
    /// Complete lines seen (including ignored and overflowed ones).
    pub lines_received: u32,
    /// Lines that changed or re-drove the outputs.
    pub lines_applied: u32,
    /// Lines that matched no status word.
    pub lines_ignored: u32,
    /// Lines dropped for length.
    pub lines_overflowed: u32,
}
