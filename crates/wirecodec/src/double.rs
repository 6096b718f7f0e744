//! IEEE-754 binary64 on the wire.
//!
//! A double occupies eight big-endian bytes:
//!
//! ```text
//! byte 0      byte 1      bytes 2..8
//! S EEEEEEE   EEEE MMMM   MMMMMMMM x 6
//! ```
//!
//! `S` is the sign, `E` the 11-bit exponent biased by 1023 and `M` the 52-bit
//! fraction. This is exactly the in-memory bit pattern of an `f64`, so
//! packing is a bit reinterpretation rather than mantissa arithmetic.
//!
//! [`DoubleMode::Legacy`] adds the near-zero rule existing peers rely on:
//! magnitudes below [`LEGACY_ZERO_THRESHOLD`] are written as zero, and a
//! zero exponent field reads back as `0.0`.

use crate::{buffer::ByteBuffer, options::DoubleMode};

/// Magnitude below which [`DoubleMode::Legacy`] writes a double as `0.0`.
pub const LEGACY_ZERO_THRESHOLD: f64 = 0.01;

const EXPONENT_MASK: u64 = 0x7FF << 52;

/// Packs `value` into its eight wire bytes.
///
/// ```rust
/// use wirecodec::{DoubleMode, encode_f64};
///
/// assert_eq!(encode_f64(1.5, DoubleMode::Legacy), [0x3F, 0xF8, 0, 0, 0, 0, 0, 0]);
/// assert_eq!(encode_f64(0.005, DoubleMode::Legacy), [0; 8]);
/// assert_ne!(encode_f64(0.005, DoubleMode::Exact), [0; 8]);
/// ```
#[must_use]
pub fn encode_f64(value: f64, mode: DoubleMode) -> [u8; 8] {
    if mode == DoubleMode::Legacy && is_near_zero(value) {
        if value > 0.0 || value < 0.0 {
            tracing::trace!(value, "near-zero double written as 0.0");
        }
        return [0; 8];
    }
    value.to_bits().to_be_bytes()
}

/// Unpacks eight wire bytes written by [`encode_f64`].
#[must_use]
pub fn decode_f64(bytes: [u8; 8], mode: DoubleMode) -> f64 {
    let bits = u64::from_be_bytes(bytes);
    if mode == DoubleMode::Legacy && bits & EXPONENT_MASK == 0 {
        return 0.0;
    }
    f64::from_bits(bits)
}

fn is_near_zero(value: f64) -> bool {
    -LEGACY_ZERO_THRESHOLD < value && value < LEGACY_ZERO_THRESHOLD
}

impl ByteBuffer {
    /// Writes a double using this buffer's [`DoubleMode`].
    pub fn write_double(&mut self, value: f64) {
        let bytes = encode_f64(value, self.options().double_mode);
        self.write_bytes(&bytes);
    }

    /// Reads a double using this buffer's [`DoubleMode`], or `None` if fewer
    /// than eight bytes remain.
    pub fn read_double(&mut self) -> Option<f64> {
        let mode = self.options().double_mode;
        self.read_array().map(|bytes| decode_f64(bytes, mode))
    }
}
