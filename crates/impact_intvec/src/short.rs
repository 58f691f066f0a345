//! Vectors of shorts.

use crate::{
    byte::{Byte2, Byte3, Byte4},
    convert::WrappingFrom,
};
use glam::{
    BVec2, BVec3, BVec4, DVec2, DVec3, DVec4, IVec2, IVec3, IVec4, UVec2, UVec3, UVec4, Vec2,
    Vec3, Vec4,
};
use half::f16;
use impact_intvec_macros::swizzles;

define_vector! {
    /// A 2-dimensional vector of signed 16-bit integers.
    Short2(i16; 2) { x, y } => BVec2
}

define_vector! {
    /// A 3-dimensional vector of signed 16-bit integers.
    Short3(i16; 3) { x, y, z } => BVec3
}

define_vector! {
    /// A 4-dimensional vector of signed 16-bit integers.
    Short4(i16; 4) { x, y, z, w } => BVec4
}

impl_composite_constructors!(3, Short3, i16, Short2);
impl_composite_constructors!(4, Short4, i16, Short2, Short3);

swizzles!(Short2, [x, y], [Short2, Short3, Short4]);
swizzles!(Short3, [x, y, z], [Short2, Short3, Short4]);
swizzles!(Short4, [x, y, z, w], [Short2, Short3, Short4]);

impl_scalar_cmp!(@eq Short2, u8, BVec2, |scalar| Short2::same(i16::from(scalar)));
impl_scalar_cmp!(@eq Short3, u8, BVec3, |scalar| Short3::same(i16::from(scalar)));
impl_scalar_cmp!(@eq Short4, u8, BVec4, |scalar| Short4::same(i16::from(scalar)));

impl_wrapping_splat!(Short2, i16; i8, u8, u16, i32, u32, i64, u64, i128, u128, isize, usize, f32, f64, f16);
impl_wrapping_splat!(Short3, i16; i8, u8, u16, i32, u32, i64, u64, i128, u128, isize, usize, f32, f64, f16);
impl_wrapping_splat!(Short4, i16; i8, u8, u16, i32, u32, i64, u64, i128, u128, isize, usize, f32, f64, f16);

impl_wrapping_from_vector!(Short2, i16, [x, y]; IVec2, UVec2, Vec2, DVec2);
impl_wrapping_from_vector!(Short3, i16, [x, y, z]; IVec3, UVec3, Vec3, DVec3);
impl_wrapping_from_vector!(Short4, i16, [x, y, z, w]; IVec4, UVec4, Vec4, DVec4);

impl_from_vector_into!(Short2, [x, y]; IVec2 => i32, Vec2 => f32, DVec2 => f64);
impl_from_vector_into!(Short3, [x, y, z]; IVec3 => i32, Vec3 => f32, DVec3 => f64);
impl_from_vector_into!(Short4, [x, y, z, w]; IVec4 => i32, Vec4 => f32, DVec4 => f64);

impl_from_vector_into!(Byte2, [x, y]; Short2 => i16);
impl_from_vector_into!(Byte3, [x, y, z]; Short3 => i16);
impl_from_vector_into!(Byte4, [x, y, z, w]; Short4 => i16);

impl Short3 {
    /// Computes the dot product of this and another vector. The products
    /// are accumulated in 64 bits, so the result is exact.
    #[inline]
    pub fn dot(&self, other: &Self) -> i64 {
        i64::from(self.x) * i64::from(other.x)
            + i64::from(self.y) * i64::from(other.y)
            + i64::from(self.z) * i64::from(other.z)
    }

    /// Computes the squared length of the vector.
    #[inline]
    pub fn length_squared(&self) -> i64 {
        self.dot(self)
    }

    /// Computes the length of the vector.
    #[inline]
    pub fn length(&self) -> f32 {
        (self.length_squared() as f64).sqrt() as f32
    }

    /// Converts the vector to half-precision floats. Components with a
    /// magnitude above 2048 are rounded to the nearest representable value.
    #[inline]
    pub fn to_half3(&self) -> [f16; 3] {
        [
            f16::from_f32(f32::from(self.x)),
            f16::from_f32(f32::from(self.y)),
            f16::from_f32(f32::from(self.z)),
        ]
    }
}

impl From<Short3> for [f16; 3] {
    #[inline]
    fn from(vector: Short3) -> Self {
        vector.to_half3()
    }
}

impl WrappingFrom<[f16; 3]> for Short3 {
    #[inline]
    fn wrapping_from([x, y, z]: [f16; 3]) -> Self {
        Self::new(
            i16::wrapping_from(x),
            i16::wrapping_from(y),
            i16::wrapping_from(z),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        cmp::{ComponentwiseEq, ComponentwiseOrd},
        error::ParseVectorError,
        hash::VectorHash,
    };
    use approx::assert_abs_diff_eq;
    use proptest::prelude::*;
    use std::{
        collections::hash_map::DefaultHasher,
        hash::{Hash, Hasher},
    };

    prop_compose! {
        fn short3_strategy()(x in any::<i16>(), y in any::<i16>(), z in any::<i16>()) -> Short3 {
            Short3::new(x, y, z)
        }
    }

    prop_compose! {
        fn short4_strategy()(x in any::<i16>(), y in any::<i16>(), z in any::<i16>(), w in any::<i16>()) -> Short4 {
            Short4::new(x, y, z, w)
        }
    }

    fn std_hash(vector: &impl Hash) -> u64 {
        let mut hasher = DefaultHasher::new();
        vector.hash(&mut hasher);
        hasher.finish()
    }

    #[test]
    fn short_arithmetic_wraps_at_sixteen_bits() {
        assert_eq!(
            Short2::new(i16::MAX, i16::MIN) + 1,
            Short2::new(i16::MIN, i16::MIN + 1)
        );
        assert_eq!(Short2::new(300, -300) * 300, Short2::new(24_464, -24_464));
        assert_eq!(
            Short2::new(i16::MIN, 4) / Short2::new(-1, 2),
            Short2::new(i16::MIN, 2)
        );
    }

    #[test]
    fn dividing_shorts_truncates_toward_zero() {
        assert_eq!(Short2::new(-7, 7) / 2, Short2::new(-3, 3));
        assert_eq!(Short2::new(-7, 7) % 2, Short2::new(-1, 1));
    }

    #[test]
    #[should_panic]
    fn dividing_short3_by_zero_panics() {
        let _ = 5 / Short3::new(1, 0, 1);
    }

    #[test]
    fn negating_shorts_wraps() {
        assert_eq!(-Short2::new(i16::MIN, 5), Short2::new(i16::MIN, -5));
    }

    #[test]
    fn decrementing_shorts_wraps() {
        assert_eq!(
            Short2::new(i16::MIN, 0).decremented(),
            Short2::new(i16::MAX, -1)
        );
        assert_eq!(Short2::new(i16::MAX, 0).incremented(), Short2::new(i16::MIN, 1));
    }

    #[test]
    fn shifting_shorts_right_is_arithmetic() {
        assert_eq!(Short2::new(-8, 8) >> 1, Short2::new(-4, 4));
        assert_eq!(Short2::new(-1, 1) >> 20, Short2::new(-1, 0));
    }

    #[test]
    fn shifting_shorts_left_truncates() {
        assert_eq!(Short2::new(-1, 0x4000) << 1, Short2::new(-2, i16::MIN));
        let mut v = Short3::new(1, 2, 3);
        v <<= 16;
        assert_eq!(v, Short3::zeros());
    }

    #[test]
    fn comparing_short3_gives_componentwise_masks() {
        let a = Short3::new(1, 2, 3);
        let b = Short3::new(2, 2, 4);
        assert_eq!(a.cmplt(b), BVec3::new(true, false, true));
        assert_eq!(a.cmpge(b), BVec3::new(false, true, false));
        assert_eq!(a.cmpeq(2_i16), BVec3::new(false, true, false));
        assert_eq!((-1_i16).cmpgt(a), BVec3::new(false, false, false));
    }

    #[test]
    fn comparing_shorts_with_byte_scalar_widens() {
        let v = Short3::new(1, 255, -1);
        assert_eq!(v.cmpeq(255_u8), BVec3::new(false, true, false));
        assert_eq!(255_u8.cmpne(v), BVec3::new(true, false, true));
    }

    #[test]
    fn converting_byte3_to_short3_is_lossless() {
        assert_eq!(Short3::from(Byte3::new(10, 20, 30)), Short3::new(10, 20, 30));
        assert_eq!(Short4::from(Byte4::same(255)), Short4::same(255));
        assert_eq!(Short2::from(Byte2::new(0, 200)), Short2::new(0, 200));
    }

    #[test]
    fn creating_short_vectors_from_narrower_components_works() {
        assert_eq!(
            Short3::from_components(10_u8, 20_u8, 30_u8),
            Short3::new(10, 20, 30)
        );
        assert_eq!(Short2::from_components(-3_i8, 255_u8), Short2::new(-3, 255));
        assert_eq!(
            Short4::from_components(1_u8, -2_i8, 3_i16, i16::MIN),
            Short4::new(1, -2, 3, i16::MIN)
        );
    }

    #[test]
    fn converting_ints_and_floats_to_shorts_wraps() {
        assert_eq!(
            Short2::wrapping_from(IVec2::new(40_000, -40_000)),
            Short2::new(-25_536, 25_536)
        );
        assert_eq!(
            Short3::wrapping_from(Vec3::new(-1.9, 2.9, 32_768.0)),
            Short3::new(-1, 2, i16::MIN)
        );
        assert_eq!(Short4::wrapping_from(65_535_u32), Short4::same(-1));
        assert_eq!(Short2::wrapping_from(-3_i8), Short2::same(-3));
    }

    #[test]
    fn converting_shorts_to_glam_vectors_is_lossless() {
        let v = Short3::new(i16::MIN, 0, i16::MAX);
        assert_eq!(IVec3::from(v), IVec3::new(-32_768, 0, 32_767));
        assert_eq!(Vec3::from(v), Vec3::new(-32_768.0, 0.0, 32_767.0));
        assert_eq!(DVec3::from(v), DVec3::new(-32_768.0, 0.0, 32_767.0));
    }

    #[test]
    fn converting_bool_mask_to_short4_gives_zeros_and_ones() {
        assert_eq!(
            Short4::from(BVec4::new(false, true, true, false)),
            Short4::new(0, 1, 1, 0)
        );
    }

    #[test]
    fn computing_short3_dot_product_works() {
        assert_eq!(Short3::new(1, 2, 3).dot(&Short3::new(4, 5, 6)), 32);
        assert_eq!(Short3::new(-1, 0, 1).dot(&Short3::new(1, 9, 1)), 0);
    }

    #[test]
    fn computing_short3_squared_length_does_not_overflow() {
        assert_eq!(Short3::same(i16::MIN).length_squared(), 3 * (1 << 30));
    }

    #[test]
    fn computing_short3_length_works() {
        assert_abs_diff_eq!(Short3::new(3, 4, 0).length(), 5.0);
        assert_abs_diff_eq!(Short3::new(-2, 3, 6).length(), 7.0);
    }

    #[test]
    fn converting_short3_to_half3_rounds_large_components() {
        let half3 = Short3::new(1, -2, 2049).to_half3();
        assert_eq!(half3[0].to_f32(), 1.0);
        assert_eq!(half3[1].to_f32(), -2.0);
        assert_eq!(half3[2].to_f32(), 2048.0);
        assert_eq!(<[f16; 3]>::from(Short3::new(1, -2, 2049)), half3);
    }

    #[test]
    fn converting_half3_to_short3_wraps() {
        let half3 = [
            f16::from_f32(1.5),
            f16::from_f32(-2.5),
            f16::from_f32(65_504.0),
        ];
        assert_eq!(Short3::wrapping_from(half3), Short3::new(1, -2, -32));
    }

    #[test]
    fn swizzling_short3_works() {
        let v = Short3::new(1, 2, 3);
        assert_eq!(v.zyx(), Short3::new(3, 2, 1));
        assert_eq!(v.yz(), Short2::new(2, 3));
        assert_eq!(v.zzzx(), Short4::new(3, 3, 3, 1));
    }

    #[test]
    fn assigning_short3_swizzle_writes_selected_fields() {
        let mut v = Short3::new(1, 2, 3);
        v.set_zyx(Short3::new(7, 8, 9));
        assert_eq!(v, Short3::new(9, 8, 7));
        v.set_zx(Short2::new(-1, -2));
        assert_eq!(v, Short3::new(-2, 8, -1));
    }

    #[test]
    fn formatting_short2_applies_flags_to_each_component() {
        assert_eq!(Short2::new(3, -4).to_string(), "Short2(3, -4)");
        assert_eq!(format!("{:+}", Short2::new(3, -4)), "Short2(+3, -4)");
        assert_eq!(format!("{:>3}", Short2::new(3, -4)), "Short2(  3,  -4)");
        assert_eq!(format!("{:x}", Short2::new(-1, 255)), "Short2(ffff, ff)");
    }

    #[test]
    fn parsing_short3_works() {
        assert_eq!("Short3(-1, 2, 3)".parse::<Short3>(), Ok(Short3::new(-1, 2, 3)));
        assert_eq!("-1,2,3".parse::<Short3>(), Ok(Short3::new(-1, 2, 3)));
    }

    #[test]
    fn parsing_short3_with_invalid_component_fails() {
        assert!(matches!(
            "Short3(1, x, 3)".parse::<Short3>(),
            Err(ParseVectorError::InvalidComponent { index: 1, .. })
        ));
        assert!(matches!(
            "Short3(1, 2, 3".parse::<Short3>(),
            Err(ParseVectorError::UnclosedParenthesis)
        ));
    }

    proptest! {
        #[test]
        fn short4_arithmetic_is_componentwise(a in short4_strategy(), b in short4_strategy()) {
            let sum = a + b;
            let difference = a - b;
            let product = a * b;
            let xor = a ^ b;
            for idx in 0..4 {
                prop_assert_eq!(sum[idx], a[idx].wrapping_add(b[idx]));
                prop_assert_eq!(difference[idx], a[idx].wrapping_sub(b[idx]));
                prop_assert_eq!(product[idx], a[idx].wrapping_mul(b[idx]));
                prop_assert_eq!(xor[idx], a[idx] ^ b[idx]);
            }
        }

        #[test]
        fn short3_equals_itself_with_stable_hash(v in short3_strategy()) {
            prop_assert!(v.cmpeq(v).all());
            prop_assert_eq!(v, v);
            prop_assert_eq!(v.compute_hash(), v.compute_hash());
            prop_assert_eq!(v.compute_hash_wide(), v.compute_hash_wide());
            prop_assert_eq!(std_hash(&v), std_hash(&Short3::new(v.x, v.y, v.z)));
        }

        #[test]
        fn short3_inequality_is_true_only_at_changed_component(
            a in short3_strategy(),
            idx in 0..3_usize,
            offset in 1..=u16::MAX,
        ) {
            let mut b = a;
            b[idx] = b[idx].wrapping_add(offset as i16);
            let mask = a.cmpne(b);
            for other in 0..3 {
                prop_assert_eq!(mask.test(other), other == idx);
            }
            prop_assert_ne!(a, b);
        }

        #[test]
        fn short3_indexing_agrees_with_fields(v in short3_strategy()) {
            prop_assert_eq!(v[0], v.x);
            prop_assert_eq!(v[1], v.y);
            prop_assert_eq!(v[2], v.z);
        }

        #[test]
        fn assigning_short3_swizzle_to_itself_changes_nothing(v in short3_strategy()) {
            let mut swizzled = v;
            swizzled.set_zyx(v.zyx());
            prop_assert_eq!(swizzled, v);
        }

        #[test]
        fn reading_assigned_short3_swizzle_gives_assigned_value(v in short3_strategy(), w in short3_strategy()) {
            let mut v = v;
            v.set_zyx(w);
            prop_assert_eq!(v.zyx(), w);
        }

        #[test]
        fn widening_bytes_then_wrapping_back_gives_original(x in any::<u8>(), y in any::<u8>(), z in any::<u8>()) {
            let bytes = Byte3::new(x, y, z);
            prop_assert_eq!(Byte3::wrapping_from(Short3::from(bytes)), bytes);
        }

        #[test]
        fn short3_dot_product_matches_float_computation(a in short3_strategy(), b in short3_strategy()) {
            let expected = DVec3::from(a).dot(DVec3::from(b));
            prop_assert_eq!(a.dot(&b) as f64, expected);
        }
    }
}
