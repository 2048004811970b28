//! Serial status protocol.
//!
//! Wire format: one ASCII status word per line, terminated by `\n`.
//!
//! ```text
//! detection host ──"SAFE\n" / "VIOLATION\n"──▶ UART ──▶ LineDecoder ──▶ StatusMessage
//! ```
//!
//! No framing beyond the terminator, no checksum, no acknowledgement.

pub mod line;
pub mod message;
pub mod sender;
pub mod transport;
