//! Unified error types for the SafeVision responder firmware.
//!
//! A single `Error` enum that every subsystem converts into, keeping the
//! top-level loop's error handling uniform.  All variants are `Copy` so
//! they pass through the responder without allocation.
//!
//! Unrecognised status lines are *not* errors: the protocol ignores them.

use core::fmt;

// ---------------------------------------------------------------------------
// Top-level firmware error
// ---------------------------------------------------------------------------

/// Every fallible operation in the firmware funnels into this type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// The serial link failed.
    Serial(SerialError),
    /// Peripheral initialisation failed.
    Init(&'static str),
    /// Configuration is invalid.
    Config(&'static str),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Serial(e) => write!(f, "serial: {e}"),
            Self::Init(msg) => write!(f, "init: {msg}"),
            Self::Config(msg) => write!(f, "config: {msg}"),
        }
    }
}

impl std::error::Error for Error {}

// ---------------------------------------------------------------------------
// Serial errors
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SerialError {
    /// UART driver read returned an error code.
    ReadFailed(i32),
    /// UART driver write returned an error code.
    WriteFailed(i32),
    /// Fewer bytes were accepted than requested.
    ShortWrite,
    /// Host-side loopback buffer is full.
    BufferFull,
}

impl fmt::Display for SerialError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ReadFailed(rc) => write!(f, "UART read failed (rc={rc})"),
            Self::WriteFailed(rc) => write!(f, "UART write failed (rc={rc})"),
            Self::ShortWrite => write!(f, "short write"),
            Self::BufferFull => write!(f, "buffer full"),
        }
    }
}

impl From<SerialError> for Error {
    fn from(e: SerialError) -> Self {
        Self::Serial(e)
    }
}

impl From<crate::drivers::hw_init::HwInitError> for Error {
    fn from(e: crate::drivers::hw_init::HwInitError) -> Self {
        use crate::drivers::hw_init::HwInitError;
        Self::Init(match e {
            HwInitError::GpioConfigFailed(_) => "GPIO config failed",
            HwInitError::LedcInitFailed(_) => "LEDC tone timer config failed",
            HwInitError::UartInitFailed(_) => "UART driver install failed",
        })
    }
}

// ---------------------------------------------------------------------------
// Convenience Result alias
// ---------------------------------------------------------------------------

/// Firmware-wide `Result` alias.
pub type Result<T> = core::result::Result<T, Error>;
