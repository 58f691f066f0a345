//! Explicit conversions that may lose range or precision.

use half::f16;

/// Conversion that is defined for every input value but may change it.
///
/// Integers are reduced modulo 2^bits of the target. Floating-point values
/// are truncated toward zero into a 64-bit integer (saturating at its bounds,
/// with NaN becoming zero) and the result is then reduced the same way, so
/// an out-of-range float wraps rather than saturating to the target range.
pub trait WrappingFrom<T>: Sized {
    fn wrapping_from(value: T) -> Self;
}

/// Reciprocal of [`WrappingFrom`], implemented for every type that some type
/// can be wrapped from.
pub trait WrappingInto<T> {
    fn wrapping_into(self) -> T;
}

impl<T, U: WrappingFrom<T>> WrappingInto<U> for T {
    #[inline]
    fn wrapping_into(self) -> U {
        U::wrapping_from(self)
    }
}

macro_rules! impl_wrapping_from_scalar {
    (lossy $target:ty; $($source:ty),+) => {
        $(
            impl WrappingFrom<$source> for $target {
                #[inline]
                fn wrapping_from(value: $source) -> Self {
                    value as $target
                }
            }
        )+
    };
    (lossless $target:ty; $($source:ty),+) => {
        $(
            impl WrappingFrom<$source> for $target {
                #[inline]
                fn wrapping_from(value: $source) -> Self {
                    Self::from(value)
                }
            }
        )+
    };
    (float $target:ty; $($source:ty),+) => {
        $(
            impl WrappingFrom<$source> for $target {
                #[inline]
                fn wrapping_from(value: $source) -> Self {
                    (value as i64) as $target
                }
            }
        )+
    };
}

impl_wrapping_from_scalar!(lossy u8; i8, i16, u16, i32, u32, i64, u64, i128, u128, isize, usize);
impl_wrapping_from_scalar!(float u8; f32, f64);

impl_wrapping_from_scalar!(lossless i16; i8, u8);
impl_wrapping_from_scalar!(lossy i16; u16, i32, u32, i64, u64, i128, u128, isize, usize);
impl_wrapping_from_scalar!(float i16; f32, f64);

impl WrappingFrom<f16> for u8 {
    #[inline]
    fn wrapping_from(value: f16) -> Self {
        Self::wrapping_from(value.to_f32())
    }
}

impl WrappingFrom<f16> for i16 {
    #[inline]
    fn wrapping_from(value: f16) -> Self {
        Self::wrapping_from(value.to_f32())
    }
}
