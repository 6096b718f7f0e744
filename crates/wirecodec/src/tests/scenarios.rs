#![allow(clippy::float_cmp)]

use alloc::{string::String, vec, vec::Vec};

use rstest::rstest;

use crate::{ByteBuffer, CodecOptions, DoubleMode, TextMode, Vector2, Vector3};

fn all_options() -> Vec<CodecOptions> {
    let mut out = vec![];
    for double_mode in [DoubleMode::Legacy, DoubleMode::Exact] {
        for text_mode in [TextMode::PerChar, TextMode::Prefixed] {
            out.push(CodecOptions {
                double_mode,
                text_mode,
            });
        }
    }
    out
}

#[test]
fn bytes_255_0_128() {
    let mut buf = ByteBuffer::new();
    buf.write_byte(255);
    buf.write_byte(0);
    buf.write_byte(128);
    buf.flip();
    assert_eq!(buf.read_byte(), Some(255));
    assert_eq!(buf.read_byte(), Some(0));
    assert_eq!(buf.read_byte(), Some(128));
    assert_eq!(buf.read_byte(), None);
}

#[test]
fn int_minus_one_is_all_ones() {
    let mut buf = ByteBuffer::new();
    buf.write_int(-1);
    assert_eq!(buf.as_bytes(), &[255, 255, 255, 255]);
}

#[test]
fn double_one_and_a_half_is_exact() {
    let mut buf = ByteBuffer::new();
    buf.write_double(1.5);
    buf.flip();
    assert_eq!(buf.read_double(), Some(1.5));
}

#[test]
fn string_ab_layout() {
    let mut buf = ByteBuffer::new();
    buf.write_string("AB").unwrap();
    assert_eq!(buf.as_bytes(), &[1, 65, 1, 66, 0]);
}

#[test]
fn vector3_one_two_three() {
    let mut buf = ByteBuffer::new();
    buf.write_vector3(Vector3::new(1.0, 2.0, 3.0));
    buf.flip();
    let v = buf.read_vector3().unwrap();
    assert_eq!((v.x, v.y, v.z), (1.0, 2.0, 3.0));
}

/// Every kind of value, written and read back in order under every option
/// combination.
#[rstest]
fn mixed_stream_reads_back_in_order(#[values(0, 1, 2, 3)] which: usize) {
    let options = all_options()[which];
    let mut buf = ByteBuffer::with_options(options);

    buf.write_bool(true);
    buf.write_bits(0b110, 3).unwrap();
    buf.align();
    buf.write_byte(-2);
    buf.write_short(-300);
    buf.write_int(2_000_000_000);
    buf.write_double(-6.25);
    buf.write_string("héllo wörld ✓").unwrap();
    buf.write_vector2(Vector2::new(0.5, -0.75));
    buf.write_vector3(Vector3::new(10.0, 20.0, 30.0));
    buf.write_bit(true);

    buf.flip();
    assert_eq!(buf.read_bool(), Some(true));
    assert_eq!(buf.read_bits(3).unwrap(), Some(0b110));
    buf.align();
    assert_eq!(buf.read_byte(), Some(254));
    assert_eq!(buf.read_short(), Some(-300));
    assert_eq!(buf.read_int(), Some(2_000_000_000));
    assert_eq!(buf.read_double(), Some(-6.25));
    assert_eq!(buf.read_string().unwrap(), "héllo wörld ✓");
    assert_eq!(buf.read_vector2(), Some(Vector2::new(0.5, -0.75)));
    assert_eq!(buf.read_vector3(), Some(Vector3::new(10.0, 20.0, 30.0)));
    assert_eq!(buf.read_bit(), Some(true));
    buf.align();
    assert_eq!(buf.remaining(), 0);
}

#[test]
fn flip_after_reading_replays_everything() {
    let mut buf = ByteBuffer::new();
    let words = ["alpha", "beta", "gamma"];
    for word in words {
        buf.write_string(word).unwrap();
    }

    for _ in 0..2 {
        buf.flip();
        let read: Vec<String> = words.iter().map(|_| buf.read_string().unwrap()).collect();
        assert_eq!(read, words);
        assert_eq!(buf.remaining(), 0);
    }
}

#[test]
fn remaining_is_zero_exactly_when_reads_stop() {
    let mut buf = ByteBuffer::new();
    buf.write_short(1);
    buf.write_double(3.0);
    buf.flip();

    let mut seen = 0;
    while buf.remaining() > 0 {
        let before = buf.remaining();
        assert!(buf.read_byte().is_some());
        assert_eq!(buf.remaining(), before - 1);
        seen += 1;
    }
    assert_eq!(seen, 10);
    assert_eq!(buf.read_byte(), None);
}
