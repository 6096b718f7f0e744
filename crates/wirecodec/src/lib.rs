//! A cursor-based binary codec for flat streams of typed values.
//!
//! Values are appended to a [`ByteBuffer`] in the order they are written and
//! read back in the same order after a [`ByteBuffer::flip`]. The wire format is
//! fixed and big-endian:
//!
//! | value            | bytes | layout                                        |
//! |------------------|-------|-----------------------------------------------|
//! | byte / bool      | 1     | raw byte, `bool` as `1`/`0`                   |
//! | short            | 2     | big-endian two's complement                   |
//! | int              | 4     | big-endian two's complement                   |
//! | double           | 8     | big-endian IEEE-754 binary64                  |
//! | string           | var   | see [`TextMode`]                              |
//! | [`Vector2`]      | 16    | two doubles, `x` then `y`                     |
//! | [`Vector3`]      | 24    | three doubles, `x`, `y`, then `z`             |
//!
//! Single bits can be packed MSB-first with [`ByteBuffer::write_bit`]; see
//! [`ByteBuffer::align`] for how bit runs and byte-aligned values interleave.
//!
//! The codec adds no framing of its own. Callers are expected to know the
//! order of the values they wrote.
//!
//! ```rust
//! use wirecodec::{ByteBuffer, Vector3};
//!
//! let mut buf = ByteBuffer::new();
//! buf.write_short(7);
//! buf.write_double(1.5);
//! buf.write_string("AB").unwrap();
//! buf.write_vector3(Vector3::new(1.0, 2.0, 3.0));
//!
//! buf.flip();
//! assert_eq!(buf.read_short(), Some(7));
//! assert_eq!(buf.read_double(), Some(1.5));
//! assert_eq!(buf.read_string().unwrap(), "AB");
//! assert_eq!(buf.read_vector3(), Some(Vector3::new(1.0, 2.0, 3.0)));
//! assert_eq!(buf.remaining(), 0);
//! ```

#![no_std]
#![forbid(unsafe_code)]
extern crate alloc;

#[cfg(test)]
extern crate std;

mod bits;
mod buffer;
mod bytes;
mod codec;
mod double;
mod error;
mod options;
mod primitives;
mod text;
mod vector;

#[cfg(test)]
mod tests;

pub use buffer::ByteBuffer;
pub use codec::{Decode, Encode};
pub use double::{LEGACY_ZERO_THRESHOLD, decode_f64, encode_f64};
pub use error::CodecError;
pub use options::{CodecOptions, DoubleMode, TextMode};
pub use text::MAX_CHAR_LEN;
pub use vector::{Vector2, Vector3};
