//! Sub-byte packing.
//!
//! Bits fill the byte at the cursor from the most significant bit down. The
//! writer and the reader share the `bit_offset` counter, so any sequence of
//! bit and byte operations reads back with the same sequence of calls.

use crate::{buffer::ByteBuffer, error::CodecError};

const MAX_FIELD_BITS: u8 = 32;

impl ByteBuffer {
    /// Appends one bit, most significant bit first.
    ///
    /// The first bit of a byte starts from a zeroed byte; once eight bits
    /// have been written the cursor moves to the next byte.
    pub fn write_bit(&mut self, bit: bool) {
        if self.bit_offset == 0 {
            match self.bytes.get_mut(self.position) {
                Some(slot) => *slot = 0,
                None => self.bytes.push(0),
            }
        }

        let mask = 0x80 >> self.bit_offset;
        if let Some(slot) = self.bytes.get_mut(self.position) {
            if bit {
                *slot |= mask;
            } else {
                *slot &= !mask;
            }
        }
        self.advance_bit();
    }

    /// Reads one bit, most significant bit first.
    ///
    /// Returns `None` when there is no byte under the cursor.
    pub fn read_bit(&mut self) -> Option<bool> {
        let byte = *self.bytes.get(self.position)?;
        let bit = byte & (0x80 >> self.bit_offset) != 0;
        self.advance_bit();
        Some(bit)
    }

    /// Writes the low `count` bits of `value`, most significant first.
    ///
    /// Bits of `value` above `count` are ignored.
    ///
    /// # Errors
    ///
    /// [`CodecError::InvalidArgument`] if `count` is not in `1..=32`.
    pub fn write_bits(&mut self, value: u32, count: u8) -> Result<(), CodecError> {
        check_field_width(count)?;
        for shift in (0..count).rev() {
            self.write_bit((value >> shift) & 1 != 0);
        }
        Ok(())
    }

    /// Reads a `count`-bit field written by [`write_bits`](Self::write_bits).
    ///
    /// Returns `Ok(None)` without consuming anything if fewer than `count`
    /// bits remain.
    ///
    /// # Errors
    ///
    /// [`CodecError::InvalidArgument`] if `count` is not in `1..=32`.
    pub fn read_bits(&mut self, count: u8) -> Result<Option<u32>, CodecError> {
        check_field_width(count)?;
        if self.remaining_bits() < usize::from(count) {
            return Ok(None);
        }
        let saved = self.checkpoint();
        let mut value = 0u32;
        for _ in 0..count {
            let Some(bit) = self.read_bit() else {
                self.rewind(saved);
                return Ok(None);
            };
            value = (value << 1) | u32::from(bit);
        }
        Ok(Some(value))
    }

    /// Ends a run of bits by moving the cursor to the next byte boundary.
    ///
    /// On the write side the unused low bits of the partial byte stay zero;
    /// on the read side they are skipped. A byte-aligned value that follows a
    /// bit run must be preceded by `align` on both sides, or on neither: without
    /// it, later bytes are bit-packed across byte boundaries and still read
    /// back, just not at byte-aligned offsets.
    ///
    /// Does nothing when the cursor is already aligned.
    ///
    /// ```rust
    /// use wirecodec::ByteBuffer;
    ///
    /// let mut buf = ByteBuffer::new();
    /// buf.write_bit(true);
    /// buf.write_bit(false);
    /// buf.write_bit(true);
    /// buf.align();
    /// buf.write_byte(0x7F);
    /// assert_eq!(buf.as_bytes(), &[0b1010_0000, 0x7F]);
    ///
    /// buf.flip();
    /// assert_eq!(buf.read_bit(), Some(true));
    /// assert_eq!(buf.read_bit(), Some(false));
    /// assert_eq!(buf.read_bit(), Some(true));
    /// buf.align();
    /// assert_eq!(buf.read_byte(), Some(0x7F));
    /// ```
    pub fn align(&mut self) {
        if self.bit_offset == 0 {
            return;
        }
        tracing::trace!(
            position = self.position,
            padding = 8 - self.bit_offset,
            "align to byte boundary"
        );
        self.bit_offset = 0;
        self.position += 1;
    }

    fn advance_bit(&mut self) {
        self.bit_offset += 1;
        if self.bit_offset == 8 {
            self.bit_offset = 0;
            self.position += 1;
        }
    }
}

fn check_field_width(count: u8) -> Result<(), CodecError> {
    if count == 0 || count > MAX_FIELD_BITS {
        return Err(CodecError::InvalidArgument("bit field width must be 1..=32"));
    }
    Ok(())
}
