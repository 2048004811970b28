//! Status responder: the hexagonal core.
//!
//! [`StatusResponder`] owns the line decoder, the mirrored output state and
//! the alarm timer.  All I/O flows through port traits injected at call
//! sites, making the whole responder testable with mock adapters.
//!
//! ```text
//!  Transport ──▶ ┌────────────────────────┐ ──▶ EventSink
//!                │    StatusResponder      │
//! OutputPort ◀──│ decode · classify · act │◀── DelayNs
//!                └────────────────────────┘
//! ```

use embedded_hal::delay::DelayNs;
use log::{debug, info};

use crate::config::{AlarmMode, ResponderConfig};
use crate::protocol::line::{DecodedLine, LineDecoder};
use crate::protocol::message::StatusMessage;
use crate::protocol::transport::Transport;

use super::alarm::AlarmTimer;
use super::events::{AppEvent, ResponderStats};
use super::ports::{EventSink, OutputPort};
use super::state::{BuzzerState, PeripheralState, Status};

/// What a single [`StatusResponder::poll`] cycle did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PollOutcome {
    /// No input was available.
    Idle,
    /// Input was consumed but no line is complete yet.
    Pending,
    /// A status line was applied to the outputs.
    Applied(Status),
    /// A complete line matched nothing; outputs untouched.
    Ignored,
    /// An over-long line was dropped; outputs untouched.
    Overflowed,
}

// ───────────────────────────────────────────────────────────────
// StatusResponder
// ───────────────────────────────────────────────────────────────

/// Reads status lines and drives the indicators and alarm.
pub struct StatusResponder {
    config: ResponderConfig,
    decoder: LineDecoder,
    status: Status,
    outputs: PeripheralState,
    alarm: AlarmTimer,
    /// Uptime of the last byte received, for the partial-line timeout.
    last_byte_ms: u64,
    stats: ResponderStats,
}

impl StatusResponder {
    /// Construct the responder.  Does **not** touch outputs; call
    /// [`start`](Self::start) next.
    pub fn new(config: ResponderConfig) -> Self {
        Self {
            config,
            decoder: LineDecoder::new(),
            status: Status::Unknown,
            outputs: PeripheralState::OFF,
            alarm: AlarmTimer::new(),
            last_byte_ms: 0,
            stats: ResponderStats::default(),
        }
    }

    // ── Lifecycle ─────────────────────────────────────────────

    /// Drive every output off and announce readiness.
    pub fn start(&mut self, out: &mut impl OutputPort, sink: &mut impl EventSink) {
        out.all_off();
        self.outputs = PeripheralState::OFF;
        self.status = Status::Unknown;
        sink.emit(&AppEvent::Started);
        info!(
            "StatusResponder started ({} baud, {} Hz alarm, {:?})",
            self.config.baud_rate, self.config.tone_hz, self.config.alarm_mode
        );
    }

    // ── Per-cycle orchestration ───────────────────────────────

    /// Run one cycle: expire the alarm, close a partial line that has sat
    /// for `line_timeout_ms`, then consume input until one line completes
    /// or the link runs dry.
    ///
    /// Returns immediately when no input is available.  In
    /// [`AlarmMode::Blocking`] a `VIOLATION` line holds this call for the
    /// full alarm duration.  Bytes after a completed line stay in the link
    /// for the next cycle.
    pub fn poll<T: Transport>(
        &mut self,
        link: &mut T,
        out: &mut impl OutputPort,
        delay: &mut impl DelayNs,
        now_ms: u64,
        sink: &mut impl EventSink,
    ) -> Result<PollOutcome, T::Error> {
        self.expire_alarm(now_ms, out, sink);

        // A stale partial line is closed before any newer byte can extend it.
        if self.partial_line_timed_out(now_ms) {
            if let Some(line) = self.decoder.take_partial() {
                debug!("partial line timed out, classifying as-is");
                return Ok(self.handle_line(line, out, delay, now_ms, sink));
            }
        }

        if !link.available() {
            return Ok(PollOutcome::Idle);
        }

        let mut byte = [0u8; 1];
        while link.available() {
            if link.read(&mut byte)? == 0 {
                break;
            }
            self.last_byte_ms = now_ms;
            if let Some(line) = self.decoder.push(byte[0]) {
                return Ok(self.handle_line(line, out, delay, now_ms, sink));
            }
        }
        Ok(PollOutcome::Pending)
    }

    // ── Queries ───────────────────────────────────────────────

    /// Last applied status.
    pub fn status(&self) -> Status {
        self.status
    }

    /// What the outputs were last driven to.
    pub fn outputs(&self) -> PeripheralState {
        self.outputs
    }

    /// Whether a deadline-mode alarm is still sounding.
    pub fn alarm_active(&self) -> bool {
        self.alarm.is_armed()
    }

    /// Milliseconds left on a deadline-mode alarm.
    pub fn alarm_remaining_ms(&self, now_ms: u64) -> Option<u64> {
        self.alarm.remaining_ms(now_ms)
    }

    pub fn stats(&self) -> ResponderStats {
        self.stats
    }

    pub fn config(&self) -> &ResponderConfig {
        &self.config
    }

    // ── Internal ──────────────────────────────────────────────

    fn partial_line_timed_out(&self, now_ms: u64) -> bool {
        let timeout = self.config.line_timeout_ms;
        timeout > 0
            && self.decoder.has_partial()
            && now_ms.saturating_sub(self.last_byte_ms) >= timeout as u64
    }

    fn handle_line(
        &mut self,
        line: DecodedLine,
        out: &mut impl OutputPort,
        delay: &mut impl DelayNs,
        now_ms: u64,
        sink: &mut impl EventSink,
    ) -> PollOutcome {
        self.stats.lines_received = self.stats.lines_received.wrapping_add(1);

        let line = match line {
            DecodedLine::Complete(line) => line,
            DecodedLine::Overflowed => {
                self.stats.lines_overflowed = self.stats.lines_overflowed.wrapping_add(1);
                debug!("dropped over-long line");
                sink.emit(&AppEvent::LineOverflowed);
                return PollOutcome::Overflowed;
            }
        };

        match StatusMessage::parse(&line) {
            Some(msg) => {
                self.apply(msg, out, delay, now_ms, sink);
                PollOutcome::Applied(self.status)
            }
            None => {
                self.stats.lines_ignored = self.stats.lines_ignored.wrapping_add(1);
                debug!("ignored unrecognised line ({} bytes)", line.len());
                sink.emit(&AppEvent::LineIgnored { len: line.len() });
                PollOutcome::Ignored
            }
        }
    }

    /// Translate a status message into port calls.
    fn apply(
        &mut self,
        msg: StatusMessage,
        out: &mut impl OutputPort,
        delay: &mut impl DelayNs,
        now_ms: u64,
        sink: &mut impl EventSink,
    ) {
        let prev = self.status;
        self.status = msg.into();
        self.stats.lines_applied = self.stats.lines_applied.wrapping_add(1);

        match msg {
            StatusMessage::Safe => {
                out.set_green(true);
                out.set_red(false);
                out.stop_tone();
                self.outputs = PeripheralState::SAFE;
                sink.emit(&AppEvent::StatusApplied { from: prev, to: self.status });
                if self.alarm.cancel() {
                    sink.emit(&AppEvent::AlarmStopped { cancelled: true });
                }
            }
            StatusMessage::Violation => {
                out.set_green(false);
                out.set_red(true);
                self.outputs.green = false;
                self.outputs.red = true;
                sink.emit(&AppEvent::StatusApplied { from: prev, to: self.status });
                self.sound_alarm(out, delay, now_ms, sink);
            }
        }
    }

    fn sound_alarm(
        &mut self,
        out: &mut impl OutputPort,
        delay: &mut impl DelayNs,
        now_ms: u64,
        sink: &mut impl EventSink,
    ) {
        let hz = self.config.tone_hz;
        let duration_ms = self.config.alarm_duration_ms;

        out.start_tone(hz);
        self.outputs.buzzer = BuzzerState::Tone { hz };
        sink.emit(&AppEvent::AlarmStarted { hz, duration_ms });

        match self.config.alarm_mode {
            AlarmMode::Blocking => {
                delay.delay_ms(duration_ms);
                self.silence(out);
                sink.emit(&AppEvent::AlarmStopped { cancelled: false });
            }
            AlarmMode::Deadline => self.alarm.arm(now_ms, duration_ms),
        }
    }

    fn expire_alarm(&mut self, now_ms: u64, out: &mut impl OutputPort, sink: &mut impl EventSink) {
        if self.alarm.expired(now_ms) {
            self.alarm.cancel();
            self.silence(out);
            sink.emit(&AppEvent::AlarmStopped { cancelled: false });
        }
    }

    fn silence(&mut self, out: &mut impl OutputPort) {
        out.stop_tone();
        self.outputs.buzzer = BuzzerState::Silent;
    }
}
