//! Small fixed-size vectors of bytes and shorts.
//!
//! The crate provides the concrete types [`Byte2`], [`Byte3`] and [`Byte4`]
//! holding `u8` components, and [`Short2`], [`Short3`] and [`Short4`]
//! holding `i16` components. They complement the floating-point and 32-bit
//! integer vectors of [`glam`] with componentwise wrapping arithmetic,
//! comparisons producing [`glam::BVec2`]-style masks, swizzles, indexing,
//! hashing, formatting and parsing.

#[macro_use]
mod macros;

pub mod byte;
pub mod cmp;
pub mod convert;
pub mod error;
pub mod hash;
pub mod math;
pub mod short;

mod parse;

pub use byte::{Byte2, Byte3, Byte4};
pub use cmp::{ComponentwiseEq, ComponentwiseOrd};
pub use convert::{WrappingFrom, WrappingInto};
pub use error::{ComponentCountError, ParseVectorError};
pub use hash::VectorHash;
pub use short::{Short2, Short3, Short4};
