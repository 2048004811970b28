//! Port traits: the hexagonal boundary between domain logic and the outside world.
//!
//! ```text
//!   Adapter ──▶ Port trait ──▶ StatusResponder (domain)
//! ```
//!
//! Driven adapters (indicators, buzzer, event sinks) implement these
//! traits.  The [`StatusResponder`](super::service::StatusResponder)
//! consumes them via generics, so the domain core never touches hardware
//! directly.  The serial input side uses
//! [`Transport`](crate::protocol::transport::Transport); blocking waits
//! use `embedded_hal::delay::DelayNs`.

// ───────────────────────────────────────────────────────────────
// Output port (driven adapter: domain → hardware)
// ───────────────────────────────────────────────────────────────

/// Write-side port: the domain calls this to drive the outputs.
pub trait OutputPort {
    /// Switch the green indicator.
    fn set_green(&mut self, on: bool);

    /// Switch the red indicator.
    fn set_red(&mut self, on: bool);

    /// Start a continuous tone on the buzzer at `hz`.
    fn start_tone(&mut self, hz: u32);

    /// Silence the buzzer immediately.
    fn stop_tone(&mut self);

    /// Kill every output: boot / shutdown state.
    fn all_off(&mut self) {
        self.set_green(false);
        self.set_red(false);
        self.stop_tone();
    }
}

// ───────────────────────────────────────────────────────────────
// Event sink port (driven adapter: domain → logging)
// ───────────────────────────────────────────────────────────────

/// The domain emits structured [`AppEvent`](super::events::AppEvent)s
/// through this port.  Adapters decide where they go.
pub trait EventSink {
    fn emit(&mut self, event: &super::events::AppEvent);
}
