//! Fuzz target: `LineDecoder::push` + `StatusMessage::parse`
//!
//! Drives arbitrary byte sequences through the line decoder and the
//! classifier, asserting that nothing panics and no yielded line exceeds
//! the fixed buffer.
//!
//! cargo fuzz run fuzz_line_decoder

#![no_main]

use libfuzzer_sys::fuzz_target;
use safevision::protocol::line::{DecodedLine, LineDecoder, MAX_LINE_LEN};
use safevision::protocol::message::StatusMessage;

fuzz_target!(|data: &[u8]| {
    let mut decoder = LineDecoder::new();

    for &b in data {
        if let Some(DecodedLine::Complete(line)) = decoder.push(b) {
            assert!(line.len() <= MAX_LINE_LEN, "line exceeds MAX_LINE_LEN");
            let _ = StatusMessage::parse(&line);
        }
    }

    // Whatever is left must flush cleanly and leave the decoder empty.
    let _ = decoder.take_partial();
    assert!(!decoder.has_partial());
});
