#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use wirecodec::{ByteBuffer, CodecOptions, DoubleMode, TextMode};

#[derive(Debug, Arbitrary)]
enum Read {
    Bit,
    Bits(u8),
    Align,
    Byte,
    Short,
    Int,
    Double,
    Text,
    V2,
    V3,
}

#[derive(Debug, Arbitrary)]
struct Input {
    prefixed_text: bool,
    reads: Vec<Read>,
    wire: Vec<u8>,
}

// Arbitrary peer bytes must never panic or break the cursor, whatever is
// read from them.
fuzz_target!(|input: Input| {
    let options = CodecOptions {
        double_mode: DoubleMode::Legacy,
        text_mode: if input.prefixed_text { TextMode::Prefixed } else { TextMode::PerChar },
    };
    let mut buf = ByteBuffer::from_bytes(input.wire, options);

    for read in &input.reads {
        let before = buf.remaining();
        let consumed = match read {
            Read::Bit => buf.read_bit().is_some(),
            Read::Bits(count) => matches!(buf.read_bits(*count), Ok(Some(_))),
            Read::Align => {
                buf.align();
                true
            }
            Read::Byte => buf.read_byte().is_some(),
            Read::Short => buf.read_short().is_some(),
            Read::Int => buf.read_int().is_some(),
            Read::Double => buf.read_double().is_some(),
            Read::Text => buf.read_string().is_ok(),
            Read::V2 => buf.read_vector2().is_some(),
            Read::V3 => buf.read_vector3().is_some(),
        };
        buf.assert_invariants();
        if !consumed {
            assert_eq!(buf.remaining(), before);
        }
    }
});
