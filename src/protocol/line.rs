//! Streaming line decoder.
//!
//! Bytes arrive one at a time from the UART; the decoder accumulates them
//! into a fixed buffer and yields a line when the `\n` terminator shows up.
//! The terminator itself is not part of the yielded line.
//!
//! A line that outgrows the buffer is discarded in full: the decoder keeps
//! swallowing bytes until the terminator, then reports
//! [`DecodedLine::Overflowed`] once.  The next line starts clean.

use heapless::Vec;

/// Longest accepted line, excluding the terminator.
pub const MAX_LINE_LEN: usize = 64;

/// Line terminator.
pub const TERMINATOR: u8 = b'\n';

/// A fixed-capacity line buffer.
pub type LineBuf = Vec<u8, MAX_LINE_LEN>;

/// Result of feeding a terminator into the decoder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DecodedLine {
    /// A complete line (untrimmed, terminator stripped).
    Complete(LineBuf),
    /// The line exceeded [`MAX_LINE_LEN`] and was dropped.
    Overflowed,
}

/// Byte-at-a-time line decoder.
pub struct LineDecoder {
    buf: LineBuf,
    overflowed: bool,
}

impl Default for LineDecoder {
    fn default() -> Self {
        Self::new()
    }
}

impl LineDecoder {
    pub const fn new() -> Self {
        Self {
            buf: Vec::new(),
            overflowed: false,
        }
    }

    /// Feed one byte.  Returns `Some` only when `byte` is the terminator.
    pub fn push(&mut self, byte: u8) -> Option<DecodedLine> {
        if byte == TERMINATOR {
            let line = if self.overflowed {
                DecodedLine::Overflowed
            } else {
                DecodedLine::Complete(core::mem::take(&mut self.buf))
            };
            self.reset();
            return Some(line);
        }

        if !self.overflowed && self.buf.push(byte).is_err() {
            self.overflowed = true;
            self.buf.clear();
        }
        None
    }

    /// Whether any bytes of an unterminated line are buffered.
    pub fn has_partial(&self) -> bool {
        self.overflowed || !self.buf.is_empty()
    }

    /// Hand out the unterminated line as if the terminator had arrived.
    ///
    /// Returns `None` when nothing is pending.
    pub fn take_partial(&mut self) -> Option<DecodedLine> {
        if !self.has_partial() {
            return None;
        }
        self.push(TERMINATOR)
    }

    /// Drop any partial line.
    pub fn reset(&mut self) {
        self.buf.clear();
        self.overflowed = false;
    }
}
