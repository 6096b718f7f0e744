//! String codec.
//!
//! [`TextMode::PerChar`] is the layout existing peers speak: one length byte
//! per character followed by that character's UTF-8 bytes, and a `0` length
//! byte after the last character. UTF-8 never produces a zero byte except
//! for `U+0000`, so the zero-byte dropping done by older decoders only ever
//! affects that one character. Writing it is refused instead of silently
//! ending the string early.
//!
//! [`TextMode::Prefixed`] is a plain `u32` byte count followed by the UTF-8
//! bytes and can carry any string.

#![allow(clippy::cast_possible_truncation)]

use alloc::{string::String, vec::Vec};

use crate::{buffer::ByteBuffer, error::CodecError, options::TextMode};

/// Largest number of bytes a single character occupies in
/// [`TextMode::PerChar`].
pub const MAX_CHAR_LEN: usize = 4;

impl ByteBuffer {
    /// Writes `text` in this buffer's [`TextMode`].
    ///
    /// ```rust
    /// use wirecodec::ByteBuffer;
    ///
    /// let mut buf = ByteBuffer::new();
    /// buf.write_string("AB").unwrap();
    /// assert_eq!(buf.as_bytes(), &[1, 65, 1, 66, 0]);
    /// ```
    ///
    /// # Errors
    ///
    /// [`CodecError::InvalidArgument`] if `text` contains `U+0000` in
    /// [`TextMode::PerChar`], or is longer than `u32::MAX` bytes in
    /// [`TextMode::Prefixed`]. Nothing is written in either case.
    pub fn write_string(&mut self, text: &str) -> Result<(), CodecError> {
        match self.options().text_mode {
            TextMode::PerChar => self.write_per_char(text),
            TextMode::Prefixed => self.write_prefixed(text),
        }
    }

    /// Reads a string written by [`write_string`](Self::write_string).
    ///
    /// In [`TextMode::PerChar`] the end of the buffer ends the string just
    /// like a `0` length byte, so reading an exhausted buffer yields `""`.
    ///
    /// # Errors
    ///
    /// - [`CodecError::InvalidText`] for bytes that are not UTF-8 or a
    ///   per-character length above [`MAX_CHAR_LEN`].
    /// - [`CodecError::Truncated`] when a character or a prefixed body runs
    ///   past the end of the buffer.
    ///
    /// On error the cursor is restored to where the string started.
    pub fn read_string(&mut self) -> Result<String, CodecError> {
        let saved = self.checkpoint();
        let result = match self.options().text_mode {
            TextMode::PerChar => self.read_per_char(),
            TextMode::Prefixed => self.read_prefixed(),
        };
        if let Err(err) = &result {
            tracing::debug!(%err, position = self.position, "string decode failed");
            self.rewind(saved);
        }
        result
    }

    fn write_per_char(&mut self, text: &str) -> Result<(), CodecError> {
        if text.contains('\0') {
            return Err(CodecError::InvalidArgument(
                "U+0000 cannot be written per character",
            ));
        }

        let mut scratch = [0u8; MAX_CHAR_LEN];
        for ch in text.chars() {
            let encoded = ch.encode_utf8(&mut scratch);
            self.put_u8(encoded.len() as u8);
            self.write_bytes(encoded.as_bytes());
        }
        self.put_u8(0);
        Ok(())
    }

    fn read_per_char(&mut self) -> Result<String, CodecError> {
        let mut out = String::new();
        let mut scratch = [0u8; MAX_CHAR_LEN];
        loop {
            let len = match self.read_byte() {
                None | Some(0) => return Ok(out),
                Some(len) => usize::from(len),
            };
            if len > MAX_CHAR_LEN {
                return Err(CodecError::InvalidText);
            }

            let body = &mut scratch[..len];
            if !self.read_into(body) {
                return Err(CodecError::Truncated {
                    needed: len,
                    remaining: self.remaining(),
                });
            }

            // Zero bytes are padding left by older writers, never UTF-8.
            let mut packed = [0u8; MAX_CHAR_LEN];
            let mut kept = 0;
            for &byte in body.iter().filter(|&&byte| byte != 0) {
                packed[kept] = byte;
                kept += 1;
            }
            if kept == 0 {
                continue;
            }

            let (ch, size) = bstr::decode_utf8(&packed[..kept]);
            match ch {
                Some(ch) if size == kept => out.push(ch),
                _ => return Err(CodecError::InvalidText),
            }
        }
    }

    fn write_prefixed(&mut self, text: &str) -> Result<(), CodecError> {
        let len = u32::try_from(text.len())
            .map_err(|_| CodecError::InvalidArgument("string longer than u32::MAX bytes"))?;
        self.write_int(len);
        self.write_bytes(text.as_bytes());
        Ok(())
    }

    fn read_prefixed(&mut self) -> Result<String, CodecError> {
        let Some(len) = self.read_uint() else {
            return Err(CodecError::Truncated {
                needed: 4,
                remaining: self.remaining(),
            });
        };
        let len = len as usize;
        let Some(body) = self.read_bytes(len) else {
            return Err(CodecError::Truncated {
                needed: len,
                remaining: self.remaining(),
            });
        };
        decode_utf8_body(body)
    }
}

fn decode_utf8_body(body: Vec<u8>) -> Result<String, CodecError> {
    String::from_utf8(body).map_err(|_| CodecError::InvalidText)
}
