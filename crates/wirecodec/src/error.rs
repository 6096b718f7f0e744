use thiserror::Error;

/// Errors raised by codec operations.
///
/// Running out of bytes while reading a fixed-width value is not an error:
/// those reads return `None` instead. `CodecError` covers arguments that can
/// never be encoded and input that cannot be decoded.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum CodecError {
    /// An argument was rejected before anything was written.
    #[error("invalid argument: {0}")]
    InvalidArgument(&'static str),
    /// Decoded text bytes do not form valid UTF-8, or a per-character length
    /// prefix is out of range.
    #[error("invalid text encoding")]
    InvalidText,
    /// A length-prefixed body runs past the end of the buffer.
    #[error("truncated input: needed {needed} bytes, {remaining} remaining")]
    Truncated {
        /// Bytes the body declared.
        needed: usize,
        /// Bytes that were left in the buffer.
        remaining: usize,
    },
}
