//! Big-endian fixed-width integers.
//!
//! Writers take any integer that widens to `i64` and keep only the low 16 or
//! 32 bits. Readers are all-or-nothing: a short read returns `None` and
//! leaves the cursor where it was.

#![allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]

use crate::buffer::ByteBuffer;

impl ByteBuffer {
    /// Writes the low 16 bits of `value`, most significant byte first.
    pub fn write_short(&mut self, value: impl Into<i64>) {
        let value = value.into();
        self.put_u8((value >> 8) as u8);
        self.put_u8(value as u8);
    }

    /// Reads a big-endian `i16`.
    pub fn read_short(&mut self) -> Option<i16> {
        self.read_array().map(i16::from_be_bytes)
    }

    /// Reads a big-endian `u16`.
    pub fn read_ushort(&mut self) -> Option<u16> {
        self.read_array().map(u16::from_be_bytes)
    }

    /// Writes the low 32 bits of `value`, most significant byte first.
    pub fn write_int(&mut self, value: impl Into<i64>) {
        let value = value.into();
        for shift in [24, 16, 8, 0] {
            self.put_u8((value >> shift) as u8);
        }
    }

    /// Reads a big-endian `i32`.
    pub fn read_int(&mut self) -> Option<i32> {
        self.read_array().map(i32::from_be_bytes)
    }

    /// Reads a big-endian `u32`.
    pub fn read_uint(&mut self) -> Option<u32> {
        self.read_array().map(u32::from_be_bytes)
    }
}
