//! Status words carried on the serial link.

use core::fmt;

/// A recognised status message.
///
/// Matching is exact and case-sensitive after trimming surrounding ASCII
/// whitespace.  Anything else is not a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatusMessage {
    /// Every detected worker wears the required equipment.
    Safe,
    /// At least one worker is missing required equipment.
    Violation,
}

impl StatusMessage {
    /// Classify a raw line.  Returns `None` for unrecognised input,
    /// including the empty line.
    pub fn parse(line: &[u8]) -> Option<Self> {
        match line.trim_ascii() {
            b"SAFE" => Some(Self::Safe),
            b"VIOLATION" => Some(Self::Violation),
            _ => None,
        }
    }

    /// The wire word, without terminator.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Safe => "SAFE",
            Self::Violation => "VIOLATION",
        }
    }

    /// Write `<word>\n` into `out`.  Returns the number of bytes written,
    /// or `None` if `out` is too small.
    pub fn encode_line(self, out: &mut [u8]) -> Option<usize> {
        let word = self.as_str().as_bytes();
        let total = word.len() + 1;
        if out.len() < total {
            return None;
        }
        out[..word.len()].copy_from_slice(word);
        out[word.len()] = super::line::TERMINATOR;
        Some(total)
    }
}

impl fmt::Display for StatusMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
