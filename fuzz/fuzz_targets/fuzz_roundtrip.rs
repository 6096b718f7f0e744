#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use wirecodec::{ByteBuffer, CodecOptions, DoubleMode, TextMode, Vector2, Vector3};

#[derive(Debug, Arbitrary)]
enum Op {
    Bit(bool),
    Bits(u32, u8),
    Align,
    Byte(u8),
    Bool(bool),
    Short(i16),
    Int(i32),
    Double(f64),
    Text(String),
    V2(f64, f64),
    V3(f64, f64, f64),
}

#[derive(Debug, Arbitrary)]
struct Input {
    exact_doubles: bool,
    prefixed_text: bool,
    ops: Vec<Op>,
}

fn write(buf: &mut ByteBuffer, op: &Op) -> bool {
    match op {
        Op::Bit(bit) => buf.write_bit(*bit),
        Op::Bits(value, count) => return buf.write_bits(*value, *count).is_ok(),
        Op::Align => buf.align(),
        Op::Byte(v) => buf.write_byte(*v),
        Op::Bool(v) => buf.write_bool(*v),
        Op::Short(v) => buf.write_short(*v),
        Op::Int(v) => buf.write_int(*v),
        Op::Double(v) => buf.write_double(*v),
        Op::Text(s) => return buf.write_string(s).is_ok(),
        Op::V2(x, y) => buf.write_vector2(Vector2::new(*x, *y)),
        Op::V3(x, y, z) => buf.write_vector3(Vector3::new(*x, *y, *z)),
    }
    true
}

fn same_double(written: f64, read: f64, mode: DoubleMode) -> bool {
    let collapsed = mode == DoubleMode::Legacy && (written.abs() < 0.01 || written.to_bits() & (0x7FF << 52) == 0);
    if collapsed {
        read == 0.0
    } else {
        written.to_bits() == read.to_bits()
    }
}

fn check(buf: &mut ByteBuffer, op: &Op, mode: DoubleMode) {
    match op {
        Op::Bit(bit) => assert_eq!(buf.read_bit(), Some(*bit)),
        Op::Bits(value, count) => {
            let mask = if *count >= 32 { u32::MAX } else { (1 << count) - 1 };
            assert_eq!(buf.read_bits(*count).unwrap(), Some(value & mask));
        }
        Op::Align => buf.align(),
        Op::Byte(v) => assert_eq!(buf.read_byte(), Some(*v)),
        Op::Bool(v) => assert_eq!(buf.read_bool(), Some(*v)),
        Op::Short(v) => assert_eq!(buf.read_short(), Some(*v)),
        Op::Int(v) => assert_eq!(buf.read_int(), Some(*v)),
        Op::Double(v) => assert!(same_double(*v, buf.read_double().unwrap(), mode)),
        Op::Text(s) => assert_eq!(&buf.read_string().unwrap(), s),
        Op::V2(x, y) => {
            let v = buf.read_vector2().unwrap();
            assert!(same_double(*x, v.x, mode) && same_double(*y, v.y, mode));
        }
        Op::V3(x, y, z) => {
            let v = buf.read_vector3().unwrap();
            assert!(
                same_double(*x, v.x, mode) && same_double(*y, v.y, mode) && same_double(*z, v.z, mode)
            );
        }
    }
}

fuzz_target!(|input: Input| {
    let options = CodecOptions {
        double_mode: if input.exact_doubles { DoubleMode::Exact } else { DoubleMode::Legacy },
        text_mode: if input.prefixed_text { TextMode::Prefixed } else { TextMode::PerChar },
    };

    let mut buf = ByteBuffer::with_options(options);
    let mut written = Vec::with_capacity(input.ops.len());
    for op in &input.ops {
        if write(&mut buf, op) {
            written.push(op);
        }
        buf.assert_invariants();
    }

    buf.flip();
    for op in written {
        check(&mut buf, op, options.double_mode);
        buf.assert_invariants();
    }
});
