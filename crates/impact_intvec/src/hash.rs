//! Hashing of vectors.

use crate::{
    byte::{Byte2, Byte3, Byte4},
    short::{Short2, Short3, Short4},
};
use glam::{UVec2, UVec3, UVec4};

/// Deterministic hashing of a vector's components.
///
/// Both hashes are computed with wrapping `u32` arithmetic from each
/// component widened to 32 bits (sign-extended for signed elements), so
/// they are bit-reproducible across platforms and releases.
pub trait VectorHash {
    /// Vector holding one 32-bit hash per component.
    type Wide;

    /// Multiplies each widened component by an odd constant specific to its
    /// position, sums the products and adds a final constant.
    fn compute_hash(&self) -> u32;

    /// Multiplies each widened component by its own odd constant and adds a
    /// shared offset, without combining the components. The constants are
    /// distinct from the ones used by [`Self::compute_hash`].
    fn compute_hash_wide(&self) -> Self::Wide;
}

macro_rules! impl_vector_hash {
    (
        $V:ty => $Wide:ident, [$($c:ident),+],
        hash: [$($hm:literal),+] + $ha:literal,
        wide: [$($wm:literal),+] + $wa:literal
    ) => {
        impl VectorHash for $V {
            type Wide = $Wide;

            #[inline]
            fn compute_hash(&self) -> u32 {
                csum([$(widened(self.$c).wrapping_mul($hm)),+]).wrapping_add($ha)
            }

            #[inline]
            fn compute_hash_wide(&self) -> $Wide {
                $Wide::new($(widened(self.$c).wrapping_mul($wm).wrapping_add($wa)),+)
            }
        }
    };
}

impl_vector_hash!(
    Byte2 => UVec2, [x, y],
    hash: [0x96c194bf, 0x529ed281] + 0xf6c8d93b,
    wide: [0xb92f5e7d, 0xf3fe8045] + 0x1ecb363f
);

impl_vector_hash!(
    Byte3 => UVec3, [x, y, z],
    hash: [0x364210a1, 0x7856cb89, 0x8a0e5fe1] + 0x4ae957c1,
    wide: [0x444db03d, 0xb76ebd73, 0x0716a049] + 0x5946f6d1
);

impl_vector_hash!(
    Byte4 => UVec4, [x, y, z, w],
    hash: [0x2345c1f3, 0x016b1625, 0xb9cea9d7, 0x8b99d641] + 0x4b48845f,
    wide: [0x70b153ab, 0xa48e2e61, 0xf4086205, 0x4576fdcf] + 0x8e7ee439
);

impl_vector_hash!(
    Short2 => UVec2, [x, y],
    hash: [0x50d92073, 0x13c0b723] + 0x142dd61d,
    wide: [0x628c83f7, 0xa4988a35] + 0x40e3b449
);

impl_vector_hash!(
    Short3 => UVec3, [x, y, z],
    hash: [0x3aced0e1, 0x739f5d2f, 0x148f93b9] + 0x2fd63477,
    wide: [0x6738e963, 0xea9b8813, 0xd858cf9f] + 0x56dcea6b
);

impl_vector_hash!(
    Short4 => UVec4, [x, y, z, w],
    hash: [0x050022d1, 0xd93ba347, 0x8dd9d6b9, 0xdd2b901f] + 0xaa3d90ff,
    wide: [0xe901e8fd, 0x55f3102f, 0x44cf2889, 0xd09ae085] + 0x2f57e38b
);

#[inline]
fn widened(component: impl Into<i32>) -> u32 {
    component.into() as u32
}

/// Wrapping horizontal sum.
#[inline]
fn csum<const N: usize>(values: [u32; N]) -> u32 {
    values.into_iter().fold(0, u32::wrapping_add)
}
