//! Generic entry points over every value the codec knows how to lay out.

use alloc::string::String;

use crate::{
    buffer::ByteBuffer,
    error::CodecError,
    vector::{Vector2, Vector3},
};

/// A value that can be appended to a [`ByteBuffer`].
pub trait Encode {
    /// Appends `self` at the buffer's cursor.
    ///
    /// # Errors
    ///
    /// Whatever the underlying writer rejects; only text can fail.
    fn encode(&self, buf: &mut ByteBuffer) -> Result<(), CodecError>;
}

/// A value that can be read back from a [`ByteBuffer`].
pub trait Decode: Sized {
    /// Reads a value at the buffer's cursor.
    ///
    /// Returns `Ok(None)` at the end of the buffer.
    ///
    /// # Errors
    ///
    /// Whatever the underlying reader reports for malformed input.
    fn decode(buf: &mut ByteBuffer) -> Result<Option<Self>, CodecError>;
}

macro_rules! fixed_width {
    ($($ty:ty => $write:ident, $read:ident;)*) => {$(
        impl Encode for $ty {
            fn encode(&self, buf: &mut ByteBuffer) -> Result<(), CodecError> {
                buf.$write(*self);
                Ok(())
            }
        }

        impl Decode for $ty {
            fn decode(buf: &mut ByteBuffer) -> Result<Option<Self>, CodecError> {
                Ok(buf.$read())
            }
        }
    )*};
}

fixed_width! {
    u8 => write_byte, read_byte;
    bool => write_bool, read_bool;
    i16 => write_short, read_short;
    u16 => write_short, read_ushort;
    i32 => write_int, read_int;
    u32 => write_int, read_uint;
    f64 => write_double, read_double;
    Vector2 => write_vector2, read_vector2;
    Vector3 => write_vector3, read_vector3;
}

impl Encode for str {
    fn encode(&self, buf: &mut ByteBuffer) -> Result<(), CodecError> {
        buf.write_string(self)
    }
}

impl Encode for String {
    fn encode(&self, buf: &mut ByteBuffer) -> Result<(), CodecError> {
        buf.write_string(self)
    }
}

impl Decode for String {
    fn decode(buf: &mut ByteBuffer) -> Result<Option<Self>, CodecError> {
        if buf.remaining() == 0 {
            return Ok(None);
        }
        buf.read_string().map(Some)
    }
}

impl<T: Encode + ?Sized> Encode for &T {
    fn encode(&self, buf: &mut ByteBuffer) -> Result<(), CodecError> {
        (**self).encode(buf)
    }
}

macro_rules! tuple {
    ($($name:ident)+) => {
        impl<$($name: Encode),+> Encode for ($($name,)+) {
            #[allow(non_snake_case)]
            fn encode(&self, buf: &mut ByteBuffer) -> Result<(), CodecError> {
                let ($($name,)+) = self;
                $($name.encode(buf)?;)+
                Ok(())
            }
        }

        impl<$($name: Decode),+> Decode for ($($name,)+) {
            #[allow(clippy::redundant_closure_call)]
            fn decode(buf: &mut ByteBuffer) -> Result<Option<Self>, CodecError> {
                let saved = buf.checkpoint();
                let decoded = (|| -> Result<Option<Self>, CodecError> {
                    Ok(Some(($(match $name::decode(buf)? {
                        Some(value) => value,
                        None => return Ok(None),
                    },)+)))
                })();
                if !matches!(decoded, Ok(Some(_))) {
                    buf.rewind(saved);
                }
                decoded
            }
        }
    };
}

tuple!(A B);
tuple!(A B C);
tuple!(A B C D);

impl ByteBuffer {
    /// Appends any [`Encode`] value.
    ///
    /// # Errors
    ///
    /// See [`Encode::encode`].
    pub fn write<T: Encode + ?Sized>(&mut self, value: &T) -> Result<(), CodecError> {
        value.encode(self)
    }

    /// Reads any [`Decode`] value.
    ///
    /// Tuples are all-or-nothing: if any element is missing or malformed the
    /// cursor is restored.
    ///
    /// ```rust
    /// use wirecodec::{ByteBuffer, Vector2};
    ///
    /// let mut buf = ByteBuffer::new();
    /// buf.write(&(7u16, "id", Vector2::new(1.0, 2.0))).unwrap();
    /// buf.flip();
    /// let (kind, name, at) = buf.read::<(u16, String, Vector2)>().unwrap().unwrap();
    /// assert_eq!((kind, name.as_str(), at), (7, "id", Vector2::new(1.0, 2.0)));
    /// ```
    ///
    /// # Errors
    ///
    /// See [`Decode::decode`].
    pub fn read<T: Decode>(&mut self) -> Result<Option<T>, CodecError> {
        T::decode(self)
    }
}
