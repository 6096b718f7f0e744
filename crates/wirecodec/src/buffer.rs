//! Byte storage and the shared read/write cursor.
//!
//! A [`ByteBuffer`] is either being filled or being drained. Both phases move
//! the same cursor: `position` is the index of the byte the next operation
//! touches and `bit_offset` counts the bits already used inside that byte.
//! [`ByteBuffer::flip`] rewinds the cursor between the two phases.

use alloc::vec::Vec;

use crate::options::CodecOptions;

/// A growable byte sequence with a read/write cursor.
///
/// # Examples
///
/// ```rust
/// use wirecodec::ByteBuffer;
///
/// let mut buf = ByteBuffer::new();
/// buf.write_byte(255);
/// buf.write_byte(0);
/// buf.write_byte(128);
/// assert_eq!(buf.as_bytes(), &[255, 0, 128]);
///
/// buf.flip();
/// assert_eq!(buf.remaining(), 3);
/// assert_eq!(buf.read_byte(), Some(255));
/// assert_eq!(buf.remaining(), 2);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ByteBuffer {
    pub(crate) bytes: Vec<u8>,
    pub(crate) position: usize,
    pub(crate) bit_offset: u8,
    options: CodecOptions,
}

/// Saved cursor used to undo a read that ran out of input.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Cursor {
    position: usize,
    bit_offset: u8,
}

impl ByteBuffer {
    /// Creates an empty buffer with default options.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty buffer with the given options.
    #[must_use]
    pub fn with_options(options: CodecOptions) -> Self {
        Self {
            options,
            ..Self::default()
        }
    }

    /// Creates an empty buffer that can hold `capacity` bytes without
    /// reallocating.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            bytes: Vec::with_capacity(capacity),
            ..Self::default()
        }
    }

    /// Wraps bytes received from a peer, ready to be read from the start.
    #[must_use]
    pub fn from_bytes(bytes: impl Into<Vec<u8>>, options: CodecOptions) -> Self {
        Self {
            bytes: bytes.into(),
            position: 0,
            bit_offset: 0,
            options,
        }
    }

    /// Options this buffer encodes and decodes with.
    #[must_use]
    pub fn options(&self) -> CodecOptions {
        self.options
    }

    /// Rewinds the cursor to the first byte and clears any partial-bit state.
    ///
    /// Call this between writing a buffer and reading it back. Bytes are left
    /// untouched.
    pub fn flip(&mut self) {
        tracing::trace!(
            len = self.bytes.len(),
            position = self.position,
            bit_offset = self.bit_offset,
            "flip"
        );
        self.position = 0;
        self.bit_offset = 0;
    }

    /// Number of bytes between the cursor and the end of the buffer.
    ///
    /// A byte that is partially consumed by bit reads still counts as
    /// remaining, so after a bit read `read_byte` can return `None` while this
    /// is 1. Use [`remaining_bits`](Self::remaining_bits) for an exact count
    /// in that case. When aligned, zero means every read returns `None`.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.bytes.len().saturating_sub(self.position)
    }

    /// Number of unread bits between the cursor and the end of the buffer.
    ///
    /// A read of `n` bytes succeeds exactly when this is at least `8 * n`.
    ///
    /// ```rust
    /// use wirecodec::ByteBuffer;
    ///
    /// let mut buf = ByteBuffer::from(vec![0xF0]);
    /// assert_eq!(buf.remaining_bits(), 8);
    /// let _ = buf.read_bit();
    /// assert_eq!((buf.remaining(), buf.remaining_bits()), (1, 7));
    /// assert_eq!(buf.read_byte(), None);
    /// ```
    #[must_use]
    pub fn remaining_bits(&self) -> usize {
        self.remaining()
            .saturating_mul(8)
            .saturating_sub(usize::from(self.bit_offset))
    }

    /// Total number of bytes stored.
    #[must_use]
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Whether no bytes have been stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Index of the byte the next operation touches.
    #[must_use]
    pub fn position(&self) -> usize {
        self.position
    }

    /// Bits already written or read inside the byte at [`position`](Self::position).
    #[must_use]
    pub fn bit_offset(&self) -> u8 {
        self.bit_offset
    }

    /// Whether the cursor sits on a byte boundary.
    #[must_use]
    pub fn is_aligned(&self) -> bool {
        self.bit_offset == 0
    }

    /// The stored bytes, including any partially written trailing byte.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Consumes the buffer and returns the stored bytes.
    #[must_use]
    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }

    /// Drops all bytes and rewinds the cursor, keeping the allocation and
    /// options.
    pub fn clear(&mut self) {
        self.bytes.clear();
        self.position = 0;
        self.bit_offset = 0;
    }

    pub(crate) fn checkpoint(&self) -> Cursor {
        Cursor {
            position: self.position,
            bit_offset: self.bit_offset,
        }
    }

    pub(crate) fn rewind(&mut self, cursor: Cursor) {
        self.position = cursor.position;
        self.bit_offset = cursor.bit_offset;
    }

    /// Panics if the cursor is in a state no sequence of operations can
    /// produce.
    #[cfg(any(test, feature = "fuzzing"))]
    pub fn assert_invariants(&self) {
        assert!(self.bit_offset < 8, "bit offset {} out of range", self.bit_offset);
        assert!(
            self.position <= self.bytes.len(),
            "cursor {} past end {}",
            self.position,
            self.bytes.len()
        );
        if self.bit_offset != 0 {
            assert!(
                self.position < self.bytes.len(),
                "partial byte at {} is missing",
                self.position
            );
        }
    }
}

impl AsRef<[u8]> for ByteBuffer {
    fn as_ref(&self) -> &[u8] {
        &self.bytes
    }
}

impl From<Vec<u8>> for ByteBuffer {
    fn from(bytes: Vec<u8>) -> Self {
        Self::from_bytes(bytes, CodecOptions::default())
    }
}

impl From<&[u8]> for ByteBuffer {
    fn from(bytes: &[u8]) -> Self {
        Self::from_bytes(bytes, CodecOptions::default())
    }
}
