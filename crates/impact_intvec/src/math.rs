//! Free functions in the style of shading-language math.

use crate::{
    byte::{Byte2, Byte3, Byte4},
    hash::VectorHash,
    short::{Short2, Short3, Short4},
};
use half::f16;

#[inline]
pub const fn byte2(x: u8, y: u8) -> Byte2 {
    Byte2::new(x, y)
}

#[inline]
pub const fn byte3(x: u8, y: u8, z: u8) -> Byte3 {
    Byte3::new(x, y, z)
}

#[inline]
pub const fn byte4(x: u8, y: u8, z: u8, w: u8) -> Byte4 {
    Byte4::new(x, y, z, w)
}

#[inline]
pub const fn short2(x: i16, y: i16) -> Short2 {
    Short2::new(x, y)
}

#[inline]
pub const fn short3(x: i16, y: i16, z: i16) -> Short3 {
    Short3::new(x, y, z)
}

#[inline]
pub const fn short4(x: i16, y: i16, z: i16, w: i16) -> Short4 {
    Short4::new(x, y, z, w)
}

/// Computes the 32-bit hash of the given vector. See
/// [`VectorHash::compute_hash`].
#[inline]
pub fn hash<V: VectorHash>(vector: V) -> u32 {
    vector.compute_hash()
}

/// Computes one 32-bit hash per component of the given vector. See
/// [`VectorHash::compute_hash_wide`].
#[inline]
pub fn hashwide<V: VectorHash>(vector: V) -> V::Wide {
    vector.compute_hash_wide()
}

#[inline]
pub fn dot(a: Short3, b: Short3) -> i64 {
    a.dot(&b)
}

#[inline]
pub fn lengthsq(vector: Short3) -> i64 {
    vector.length_squared()
}

#[inline]
pub fn length(vector: Short3) -> f32 {
    vector.length()
}

/// Computes the square root of a half-precision float in single precision.
#[inline]
pub fn sqrt(value: f16) -> f16 {
    f16::from_f32(value.to_f32().sqrt())
}
