//! Alarm deadline timer.
//!
//! Used by [`AlarmMode::Deadline`](crate::config::AlarmMode::Deadline):
//! instead of sleeping through the tone, the responder arms a deadline and
//! checks it on every poll.  Times are milliseconds since boot.

#[derive(Debug, Clone, Copy, Default)]
pub struct AlarmTimer {
    deadline_ms: Option<u64>,
}

impl AlarmTimer {
    pub const fn new() -> Self {
        Self { deadline_ms: None }
    }

    /// Arm (or re-arm) the alarm to expire `duration_ms` after `now_ms`.
    pub fn arm(&mut self, now_ms: u64, duration_ms: u32) {
        self.deadline_ms = Some(now_ms.saturating_add(duration_ms as u64));
    }

    /// Disarm.  Returns `true` if the alarm was armed.
    pub fn cancel(&mut self) -> bool {
        self.deadline_ms.take().is_some()
    }

    pub fn is_armed(&self) -> bool {
        self.deadline_ms.is_some()
    }

    /// Whether an armed alarm has reached its deadline.
    pub fn expired(&self, now_ms: u64) -> bool {
        self.deadline_ms.is_some_and(|d| now_ms >= d)
    }

    /// Milliseconds left, `None` when disarmed.
    pub fn remaining_ms(&self, now_ms: u64) -> Option<u64> {
        self.deadline_ms.map(|d| d.saturating_sub(now_ms))
    }
}
