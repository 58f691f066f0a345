//! Vectors of bytes.

use crate::short::{Short2, Short3, Short4};
use glam::{
    BVec2, BVec3, BVec4, DVec2, DVec3, DVec4, IVec2, IVec3, IVec4, UVec2, UVec3, UVec4, Vec2,
    Vec3, Vec4,
};
use half::f16;
use impact_intvec_macros::swizzles;

define_vector! {
    /// A 2-dimensional vector of unsigned bytes.
    Byte2(u8; 2) { x, y } => BVec2
}

define_vector! {
    /// A 3-dimensional vector of unsigned bytes.
    Byte3(u8; 3) { x, y, z } => BVec3
}

define_vector! {
    /// A 4-dimensional vector of unsigned bytes.
    Byte4(u8; 4) { x, y, z, w } => BVec4
}

impl_composite_constructors!(3, Byte3, u8, Byte2);
impl_composite_constructors!(4, Byte4, u8, Byte2, Byte3);

swizzles!(Byte2, [x, y], [Byte2, Byte3, Byte4]);
swizzles!(Byte3, [x, y, z], [Byte2, Byte3, Byte4]);
swizzles!(Byte4, [x, y, z, w], [Byte2, Byte3, Byte4]);

impl_wrapping_splat!(Byte2, u8; i8, i16, u16, i32, u32, i64, u64, i128, u128, isize, usize, f32, f64, f16);
impl_wrapping_splat!(Byte3, u8; i8, i16, u16, i32, u32, i64, u64, i128, u128, isize, usize, f32, f64, f16);
impl_wrapping_splat!(Byte4, u8; i8, i16, u16, i32, u32, i64, u64, i128, u128, isize, usize, f32, f64, f16);

impl_wrapping_from_vector!(Byte2, u8, [x, y]; IVec2, UVec2, Vec2, DVec2, Short2);
impl_wrapping_from_vector!(Byte3, u8, [x, y, z]; IVec3, UVec3, Vec3, DVec3, Short3);
impl_wrapping_from_vector!(Byte4, u8, [x, y, z, w]; IVec4, UVec4, Vec4, DVec4, Short4);

impl_from_vector_into!(Byte2, [x, y]; IVec2 => i32, UVec2 => u32, Vec2 => f32, DVec2 => f64);
impl_from_vector_into!(Byte3, [x, y, z]; IVec3 => i32, UVec3 => u32, Vec3 => f32, DVec3 => f64);
impl_from_vector_into!(Byte4, [x, y, z, w]; IVec4 => i32, UVec4 => u32, Vec4 => f32, DVec4 => f64);
