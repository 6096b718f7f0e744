/// Configuration options for a [`ByteBuffer`](crate::ByteBuffer).
///
/// Both options select between the encoding existing peers expect and an
/// exact alternative. A writer and its reader must agree on the options; they
/// are not recorded on the wire.
///
/// # Examples
///
/// ```rust
/// use wirecodec::{ByteBuffer, CodecOptions, DoubleMode, TextMode};
///
/// let options = CodecOptions {
///     double_mode: DoubleMode::Exact,
///     ..Default::default()
/// };
/// let mut buf = ByteBuffer::with_options(options);
/// buf.write_double(0.005);
/// buf.flip();
/// assert_eq!(buf.read_double(), Some(0.005));
/// assert_eq!(buf.options().text_mode, TextMode::PerChar);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CodecOptions {
    /// How doubles close to zero are written and how a zero exponent is read.
    ///
    /// # Default
    ///
    /// [`DoubleMode::Legacy`]
    pub double_mode: DoubleMode,

    /// How strings are laid out.
    ///
    /// # Default
    ///
    /// [`TextMode::PerChar`]
    pub text_mode: TextMode,
}

/// Zero handling for the binary64 codec.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DoubleMode {
    /// Any value with magnitude below
    /// [`LEGACY_ZERO_THRESHOLD`](crate::LEGACY_ZERO_THRESHOLD) is written as
    /// eight zero bytes, and any value whose exponent field is zero reads as
    /// `0.0`. Lossy, but what existing peers produce and expect.
    #[default]
    Legacy,
    /// The raw bit pattern is written and read unchanged.
    Exact,
}

/// Layout used for strings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TextMode {
    /// Every character is written as a length byte (1 to 4) followed by its
    /// UTF-8 bytes, and a length byte of `0` ends the string.
    ///
    /// `U+0000` cannot be written in this mode.
    #[default]
    PerChar,
    /// A big-endian `u32` byte count followed by the UTF-8 bytes.
    Prefixed,
}
