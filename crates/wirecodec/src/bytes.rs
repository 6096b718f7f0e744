#![allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]

use alloc::vec::Vec;

use crate::buffer::ByteBuffer;

impl ByteBuffer {
    /// Writes one byte.
    ///
    /// Any integer is accepted and wrapped to its low eight bits, so `-1`
    /// writes `255` and `256` writes `0`.
    pub fn write_byte(&mut self, value: impl Into<i64>) {
        self.put_u8(value.into() as u8);
    }

    /// Reads one byte, or `None` at the end of the buffer.
    ///
    /// When a partial byte is in progress the next eight bits are read across
    /// the byte boundary. If fewer than eight bits are left nothing is
    /// consumed.
    pub fn read_byte(&mut self) -> Option<u8> {
        if self.remaining_bits() < 8 {
            return None;
        }
        if self.bit_offset == 0 {
            let byte = self.bytes.get(self.position).copied()?;
            self.position += 1;
            return Some(byte);
        }

        let saved = self.checkpoint();
        let mut byte = 0u8;
        for _ in 0..8 {
            let Some(bit) = self.read_bit() else {
                self.rewind(saved);
                return None;
            };
            byte = (byte << 1) | u8::from(bit);
        }
        Some(byte)
    }

    /// Writes `true` as `1` and `false` as `0`.
    pub fn write_bool(&mut self, value: bool) {
        self.put_u8(u8::from(value));
    }

    /// Reads a byte as a boolean; any non-zero byte is `true`.
    pub fn read_bool(&mut self) -> Option<bool> {
        self.read_byte().map(|byte| byte != 0)
    }

    /// Writes a run of raw bytes with no length prefix.
    pub fn write_bytes(&mut self, bytes: &[u8]) {
        if self.bit_offset == 0 && self.position == self.bytes.len() {
            self.bytes.extend_from_slice(bytes);
            self.position += bytes.len();
            return;
        }
        for &byte in bytes {
            self.put_u8(byte);
        }
    }

    /// Reads `count` raw bytes, or `None` without consuming anything if fewer
    /// are left.
    ///
    /// Nothing is allocated unless the buffer holds enough bits, so a length
    /// taken from the wire cannot force an oversized allocation.
    pub fn read_bytes(&mut self, count: usize) -> Option<Vec<u8>> {
        if !self.has_bytes(count) {
            return None;
        }
        let mut out = alloc::vec![0; count];
        self.read_into(&mut out).then_some(out)
    }

    pub(crate) fn put_u8(&mut self, byte: u8) {
        if self.bit_offset != 0 {
            for shift in (0..8).rev() {
                self.write_bit((byte >> shift) & 1 != 0);
            }
            return;
        }
        match self.bytes.get_mut(self.position) {
            Some(slot) => *slot = byte,
            None => self.bytes.push(byte),
        }
        self.position += 1;
    }

    /// Fills `dst` from the cursor; on a short read restores the cursor and
    /// returns `false`.
    pub(crate) fn read_into(&mut self, dst: &mut [u8]) -> bool {
        if !self.has_bytes(dst.len()) {
            return false;
        }
        if self.bit_offset == 0 {
            let Some(src) = self.bytes.get(self.position..self.position + dst.len()) else {
                return false;
            };
            dst.copy_from_slice(src);
            self.position += dst.len();
            return true;
        }

        let saved = self.checkpoint();
        for slot in dst.iter_mut() {
            let Some(byte) = self.read_byte() else {
                self.rewind(saved);
                return false;
            };
            *slot = byte;
        }
        true
    }

    fn has_bytes(&self, count: usize) -> bool {
        count
            .checked_mul(8)
            .is_some_and(|bits| bits <= self.remaining_bits())
    }

    pub(crate) fn read_array<const N: usize>(&mut self) -> Option<[u8; N]> {
        let mut out = [0u8; N];
        self.read_into(&mut out).then_some(out)
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec;

    use rstest::rstest;

    use crate::ByteBuffer;

    #[test]
    fn write_flip_read_three_bytes() {
        let mut buf = ByteBuffer::new();
        for byte in [255, 0, 128] {
            buf.write_byte(byte);
        }
        buf.flip();
        let read: vec::Vec<_> = core::iter::from_fn(|| buf.read_byte()).collect();
        assert_eq!(read, vec![255, 0, 128]);
    }

    #[rstest]
    #[case(-1, 255)]
    #[case(256, 0)]
    #[case(257, 1)]
    #[case(-128, 128)]
    #[case(-129, 127)]
    #[case(i64::MAX, 255)]
    fn write_byte_wraps(#[case] input: i64, #[case] expected: u8) {
        let mut buf = ByteBuffer::new();
        buf.write_byte(input);
        assert_eq!(buf.as_bytes(), &[expected]);
    }

    #[test]
    fn remaining_tracks_each_read() {
        let mut buf = ByteBuffer::from(vec![1, 2, 3, 4]);
        for expected in (0..4).rev() {
            assert!(buf.read_byte().is_some());
            assert_eq!(buf.remaining(), expected);
        }
        assert_eq!(buf.read_byte(), None);
        assert_eq!(buf.remaining(), 0);
    }

    #[test]
    fn bools_are_single_bytes() {
        let mut buf = ByteBuffer::new();
        buf.write_bool(true);
        buf.write_bool(false);
        assert_eq!(buf.as_bytes(), &[1, 0]);

        let mut buf = ByteBuffer::from(vec![7, 0]);
        assert_eq!(buf.read_bool(), Some(true));
        assert_eq!(buf.read_bool(), Some(false));
        assert_eq!(buf.read_bool(), None);
    }

    #[test]
    fn raw_runs_are_atomic() {
        let mut buf = ByteBuffer::new();
        buf.write_bytes(b"abc");
        buf.flip();
        assert_eq!(buf.read_bytes(4), None);
        assert_eq!(buf.position(), 0);
        assert_eq!(buf.read_bytes(3).as_deref(), Some(&b"abc"[..]));
        assert_eq!(buf.read_bytes(0), Some(vec![]));
    }

    #[test]
    fn raw_runs_after_bits_stay_bit_packed() {
        let mut buf = ByteBuffer::new();
        buf.write_bit(false);
        buf.write_bytes(&[0xFF, 0x01]);
        assert_eq!(buf.as_bytes(), &[0x7F, 0x80, 0x80]);

        buf.flip();
        assert_eq!(buf.read_bit(), Some(false));
        assert_eq!(buf.read_bytes(2), Some(vec![0xFF, 0x01]));
    }

    #[test]
    fn unaligned_read_past_end_consumes_nothing() {
        let mut buf = ByteBuffer::from(vec![0xF0]);
        assert_eq!(buf.read_bit(), Some(true));
        assert_eq!(buf.remaining(), 1);
        assert_eq!(buf.read_byte(), None);
        assert_eq!(buf.bit_offset(), 1);
    }

    #[rstest]
    #[case(usize::MAX)]
    #[case(usize::MAX / 2)]
    #[case(usize::MAX / 8 + 1)]
    #[case(u32::MAX as usize)]
    fn oversized_count_is_refused_up_front(#[case] count: usize) {
        let mut buf = ByteBuffer::from(vec![1, 2, 3]);
        assert_eq!(buf.read_bytes(count), None);
        assert_eq!(buf.position(), 0);

        let _ = buf.read_bit();
        assert_eq!(buf.read_bytes(count), None);
        assert_eq!((buf.position(), buf.bit_offset()), (0, 1));
    }

    #[test]
    fn unaligned_run_needs_every_bit() {
        let mut buf = ByteBuffer::from(vec![0x80, 0x00, 0x7F]);
        assert_eq!(buf.read_bit(), Some(true));
        assert_eq!(buf.remaining_bits(), 23);
        assert_eq!(buf.read_bytes(3), None);
        assert_eq!(buf.read_bytes(2), Some(vec![0, 0]));
        assert_eq!(buf.remaining_bits(), 7);
        assert_eq!(buf.remaining(), 1);
        assert_eq!(buf.read_byte(), None);
    }
}
