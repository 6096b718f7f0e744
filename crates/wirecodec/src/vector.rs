//! 2D and 3D coordinates, each component written as a double.

use crate::{buffer::ByteBuffer, error::CodecError};

/// A 2D coordinate. Encodes as 16 bytes: `x` then `y`.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(any(test, feature = "serde"), derive(serde::Serialize, serde::Deserialize))]
pub struct Vector2 {
    /// Horizontal component.
    pub x: f64,
    /// Vertical component.
    pub y: f64,
}

/// A 3D coordinate. Encodes as 24 bytes: `x`, `y`, then `z`.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(any(test, feature = "serde"), derive(serde::Serialize, serde::Deserialize))]
pub struct Vector3 {
    /// First component.
    pub x: f64,
    /// Second component.
    pub y: f64,
    /// Third component.
    pub z: f64,
}

impl Vector2 {
    /// Creates a vector from its components.
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl Vector3 {
    /// Creates a vector from its components.
    #[must_use]
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }
}

impl From<(f64, f64)> for Vector2 {
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}

impl From<[f64; 2]> for Vector2 {
    fn from([x, y]: [f64; 2]) -> Self {
        Self { x, y }
    }
}

impl From<Vector2> for [f64; 2] {
    fn from(v: Vector2) -> Self {
        [v.x, v.y]
    }
}

impl From<(f64, f64, f64)> for Vector3 {
    fn from((x, y, z): (f64, f64, f64)) -> Self {
        Self { x, y, z }
    }
}

impl From<[f64; 3]> for Vector3 {
    fn from([x, y, z]: [f64; 3]) -> Self {
        Self { x, y, z }
    }
}

impl From<Vector3> for [f64; 3] {
    fn from(v: Vector3) -> Self {
        [v.x, v.y, v.z]
    }
}

/// Builds a vector from untyped components, e.g. a slice handed over from a
/// scripting layer.
impl TryFrom<&[f64]> for Vector2 {
    type Error = CodecError;

    fn try_from(components: &[f64]) -> Result<Self, Self::Error> {
        match *components {
            [x, y] => Ok(Self { x, y }),
            _ => Err(CodecError::InvalidArgument(
                "Vector2 needs exactly two components",
            )),
        }
    }
}

impl TryFrom<&[f64]> for Vector3 {
    type Error = CodecError;

    fn try_from(components: &[f64]) -> Result<Self, Self::Error> {
        match *components {
            [x, y, z] => Ok(Self { x, y, z }),
            _ => Err(CodecError::InvalidArgument(
                "Vector3 needs exactly three components",
            )),
        }
    }
}

impl ByteBuffer {
    /// Writes `x` then `y` as doubles.
    pub fn write_vector2(&mut self, v: Vector2) {
        self.write_double(v.x);
        self.write_double(v.y);
    }

    /// Reads a [`Vector2`], or `None` without consuming anything if fewer
    /// than 16 bytes remain.
    pub fn read_vector2(&mut self) -> Option<Vector2> {
        self.read_doubles().map(Vector2::from)
    }

    /// Writes `x`, `y`, then `z` as doubles.
    pub fn write_vector3(&mut self, v: Vector3) {
        self.write_double(v.x);
        self.write_double(v.y);
        self.write_double(v.z);
    }

    /// Reads a [`Vector3`], or `None` without consuming anything if fewer
    /// than 24 bytes remain.
    pub fn read_vector3(&mut self) -> Option<Vector3> {
        self.read_doubles().map(Vector3::from)
    }

    fn read_doubles<const N: usize>(&mut self) -> Option<[f64; N]> {
        let saved = self.checkpoint();
        let mut out = [0.0; N];
        for slot in &mut out {
            let Some(value) = self.read_double() else {
                self.rewind(saved);
                return None;
            };
            *slot = value;
        }
        Some(out)
    }
}
