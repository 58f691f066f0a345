//! Utility macros.

macro_rules! impl_binop {
    ($op:ident, $method:ident, $tl:ty, $tr:ty, $to:ty, |$lhs:ident, $rhs:ident| $body:block) => {
        impl<'a> ::std::ops::$op<&'a $tr> for &'a $tl {
            type Output = $to;

            #[inline]
            fn $method(self, rhs: &'a $tr) -> Self::Output {
                let $lhs = self;
                let $rhs = rhs;
                $body
            }
        }

        impl ::std::ops::$op<$tr> for &$tl {
            type Output = $to;

            #[inline]
            fn $method(self, rhs: $tr) -> Self::Output {
                ::std::ops::$op::$method(self, &rhs)
            }
        }

        impl<'a> ::std::ops::$op<&'a $tr> for $tl {
            type Output = $to;

            #[inline]
            fn $method(self, rhs: &'a $tr) -> Self::Output {
                ::std::ops::$op::$method(&self, rhs)
            }
        }

        impl ::std::ops::$op<$tr> for $tl {
            type Output = $to;

            #[inline]
            fn $method(self, rhs: $tr) -> Self::Output {
                ::std::ops::$op::$method(&self, &rhs)
            }
        }
    };
}

macro_rules! impl_unary_op {
    ($op:ident, $method:ident, $t:ty, $to:ty, |$this:ident| $body:block) => {
        impl ::std::ops::$op for &$t {
            type Output = $to;

            #[inline]
            fn $method(self) -> Self::Output {
                let $this = self;
                $body
            }
        }

        impl ::std::ops::$op for $t {
            type Output = $to;

            #[inline]
            fn $method(self) -> Self::Output {
                ::std::ops::$op::$method(&self)
            }
        }
    };
}

macro_rules! impl_binop_assign {
    ($op:ident, $method:ident, $tl:ty, $tr:ty, |$lhs:ident, $rhs:ident| $body:block) => {
        impl ::std::ops::$op<&$tr> for $tl {
            #[inline]
            fn $method(&mut self, rhs: &$tr) {
                let $lhs = self;
                let $rhs = rhs;
                $body
            }
        }

        impl ::std::ops::$op<$tr> for $tl {
            #[inline]
            fn $method(&mut self, rhs: $tr) {
                ::std::ops::$op::$method(self, &rhs);
            }
        }
    };
}

/// Implements a binary operator applying `$expr` to each pair of components,
/// for vector-vector, vector-scalar and scalar-vector operands, together with
/// the corresponding compound assignment operator.
macro_rules! impl_componentwise_binop {
    (
        $op:ident, $method:ident, $op_assign:ident, $method_assign:ident,
        $V:ident, $E:ty, [$($c:ident),+], |$p:ident, $q:ident| $expr:expr
    ) => {
        impl_binop!($op, $method, $V, $V, $V, |a, b| {
            $V::new($({
                let $p = a.$c;
                let $q = b.$c;
                $expr
            }),+)
        });

        impl_binop!($op, $method, $V, $E, $V, |a, b| {
            $V::new($({
                let $p = a.$c;
                let $q = *b;
                $expr
            }),+)
        });

        impl_binop!($op, $method, $E, $V, $V, |a, b| {
            $V::new($({
                let $p = *a;
                let $q = b.$c;
                $expr
            }),+)
        });

        impl_binop_assign!($op_assign, $method_assign, $V, $V, |a, b| {
            *a = ::std::ops::$op::$method(*a, b);
        });

        impl_binop_assign!($op_assign, $method_assign, $V, $E, |a, b| {
            *a = ::std::ops::$op::$method(*a, b);
        });
    };
}

/// Implements a shift operator taking an `i32` shift count. Each component is
/// promoted to `i32`, shifted by the count modulo 32 and truncated back.
macro_rules! impl_promoted_shift {
    (
        $op:ident, $method:ident, $op_assign:ident, $method_assign:ident,
        $V:ident, $E:ty, [$($c:ident),+], $shift:tt
    ) => {
        impl_binop!($op, $method, $V, i32, $V, |a, count| {
            let count = *count & 31;
            $V::new($((i32::from(a.$c) $shift count) as $E),+)
        });

        impl_binop_assign!($op_assign, $method_assign, $V, i32, |a, count| {
            *a = ::std::ops::$op::$method(*a, count);
        });
    };
}

/// Implements formatting traits that write `TypeName(c0, c1, ...)`, passing
/// the formatter and its flags on to every component.
macro_rules! impl_componentwise_fmt {
    ($V:ident; $($fmt:ident),+) => {
        $(
            impl ::std::fmt::$fmt for $V {
                fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                    f.write_str(concat!(stringify!($V), "("))?;
                    for (idx, component) in self.as_array().iter().enumerate() {
                        if idx > 0 {
                            f.write_str(", ")?;
                        }
                        ::std::fmt::$fmt::fmt(component, f)?;
                    }
                    f.write_str(")")
                }
            }
        )+
    };
}

macro_rules! impl_componentwise_cmp {
    ($V:ident, $E:ty, $Mask:ty, [$($c:ident),+]) => {
        impl $crate::cmp::ComponentwiseEq for $V {
            type Mask = $Mask;

            #[inline]
            fn cmpeq(self, rhs: Self) -> $Mask {
                <$Mask>::new($(self.$c == rhs.$c),+)
            }

            #[inline]
            fn cmpne(self, rhs: Self) -> $Mask {
                <$Mask>::new($(self.$c != rhs.$c),+)
            }
        }

        impl $crate::cmp::ComponentwiseOrd for $V {
            #[inline]
            fn cmplt(self, rhs: Self) -> $Mask {
                <$Mask>::new($(self.$c < rhs.$c),+)
            }

            #[inline]
            fn cmple(self, rhs: Self) -> $Mask {
                <$Mask>::new($(self.$c <= rhs.$c),+)
            }

            #[inline]
            fn cmpgt(self, rhs: Self) -> $Mask {
                <$Mask>::new($(self.$c > rhs.$c),+)
            }

            #[inline]
            fn cmpge(self, rhs: Self) -> $Mask {
                <$Mask>::new($(self.$c >= rhs.$c),+)
            }
        }

        impl_scalar_cmp!($V, $E, $Mask, |scalar| $V::same(scalar));
    };
}

/// Implements componentwise comparison between the vector and a scalar, in
/// both operand orders, by broadcasting the scalar with `$splat`.
macro_rules! impl_scalar_cmp {
    ($V:ident, $S:ty, $Mask:ty, |$s:ident| $splat:expr) => {
        impl_scalar_cmp!(@eq $V, $S, $Mask, |$s| $splat);

        impl $crate::cmp::ComponentwiseOrd<$S> for $V {
            #[inline]
            fn cmplt(self, rhs: $S) -> $Mask {
                let $s = rhs;
                $crate::cmp::ComponentwiseOrd::cmplt(self, $splat)
            }

            #[inline]
            fn cmple(self, rhs: $S) -> $Mask {
                let $s = rhs;
                $crate::cmp::ComponentwiseOrd::cmple(self, $splat)
            }

            #[inline]
            fn cmpgt(self, rhs: $S) -> $Mask {
                let $s = rhs;
                $crate::cmp::ComponentwiseOrd::cmpgt(self, $splat)
            }

            #[inline]
            fn cmpge(self, rhs: $S) -> $Mask {
                let $s = rhs;
                $crate::cmp::ComponentwiseOrd::cmpge(self, $splat)
            }
        }

        impl $crate::cmp::ComponentwiseOrd<$V> for $S {
            #[inline]
            fn cmplt(self, rhs: $V) -> $Mask {
                let $s = self;
                $crate::cmp::ComponentwiseOrd::cmplt($splat, rhs)
            }

            #[inline]
            fn cmple(self, rhs: $V) -> $Mask {
                let $s = self;
                $crate::cmp::ComponentwiseOrd::cmple($splat, rhs)
            }

            #[inline]
            fn cmpgt(self, rhs: $V) -> $Mask {
                let $s = self;
                $crate::cmp::ComponentwiseOrd::cmpgt($splat, rhs)
            }

            #[inline]
            fn cmpge(self, rhs: $V) -> $Mask {
                let $s = self;
                $crate::cmp::ComponentwiseOrd::cmpge($splat, rhs)
            }
        }
    };
    (@eq $V:ident, $S:ty, $Mask:ty, |$s:ident| $splat:expr) => {
        impl $crate::cmp::ComponentwiseEq<$S> for $V {
            type Mask = $Mask;

            #[inline]
            fn cmpeq(self, rhs: $S) -> $Mask {
                let $s = rhs;
                $crate::cmp::ComponentwiseEq::cmpeq(self, $splat)
            }

            #[inline]
            fn cmpne(self, rhs: $S) -> $Mask {
                let $s = rhs;
                $crate::cmp::ComponentwiseEq::cmpne(self, $splat)
            }
        }

        impl $crate::cmp::ComponentwiseEq<$V> for $S {
            type Mask = $Mask;

            #[inline]
            fn cmpeq(self, rhs: $V) -> $Mask {
                let $s = self;
                $crate::cmp::ComponentwiseEq::cmpeq($splat, rhs)
            }

            #[inline]
            fn cmpne(self, rhs: $V) -> $Mask {
                let $s = self;
                $crate::cmp::ComponentwiseEq::cmpne($splat, rhs)
            }
        }
    };
}

/// Defines a vector type with the given element type, dimension, component
/// fields and boolean mask type, along with its constructors, accessors,
/// operators, conversions to and from arrays and scalars, indexing,
/// formatting, parsing and componentwise comparisons.
///
/// Hashing is implemented separately in [`crate::hash`], and swizzles are
/// generated with [`impact_intvec_macros::swizzles`].
macro_rules! define_vector {
    (
        $(#[$attributes:meta])*
        $V:ident($E:ty; $N:literal) { $($c:ident),+ } => $Mask:ty
    ) => {
        $(#[$attributes])*
        #[repr(C)]
        #[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
        #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, bytemuck::Zeroable, bytemuck::Pod)]
        pub struct $V {
            $(
                #[doc = concat!("The ", stringify!($c), "-component.")]
                pub $c: $E,
            )+
        }

        impl $V {
            /// The number of components in the vector.
            pub const N_COMPONENTS: usize = $N;

            /// Creates a new vector with the given components.
            #[inline]
            pub const fn new($($c: $E),+) -> Self {
                Self { $($c),+ }
            }

            /// Creates a new vector from components of any integer type that
            /// converts losslessly into the element type.
            #[inline]
            pub fn from_components($($c: impl Into<$E>),+) -> Self {
                Self::new($($c.into()),+)
            }

            /// Creates a new vector with all zeros.
            #[inline]
            pub const fn zeros() -> Self {
                Self::same(0)
            }

            /// Creates a new vector with the same value for all components.
            #[inline]
            pub const fn same(value: $E) -> Self {
                Self { $($c: value),+ }
            }

            /// Creates a new vector from an array of components in index
            /// order.
            #[inline]
            pub const fn from_array(array: [$E; $N]) -> Self {
                let [$($c),+] = array;
                Self::new($($c),+)
            }

            /// Copies the components into an array in index order.
            #[inline]
            pub const fn to_array(&self) -> [$E; $N] {
                [$(self.$c),+]
            }

            /// Views the components as an array. Element `i` is the same
            /// memory as the component with index `i`.
            #[inline]
            pub fn as_array(&self) -> &[$E; $N] {
                bytemuck::cast_ref(self)
            }

            /// Views the components as a mutable array.
            #[inline]
            pub fn as_array_mut(&mut self) -> &mut [$E; $N] {
                bytemuck::cast_mut(self)
            }

            /// Returns the component with the given index, or [`None`] if
            /// the index is out of bounds.
            #[inline]
            pub fn get(&self, index: usize) -> Option<$E> {
                self.as_array().get(index).copied()
            }

            /// Returns a mutable reference to the component with the given
            /// index, or [`None`] if the index is out of bounds.
            #[inline]
            pub fn get_mut(&mut self, index: usize) -> Option<&mut $E> {
                self.as_array_mut().get_mut(index)
            }

            /// Returns the component with the given index without checking
            /// the index in release builds.
            ///
            /// # Safety
            /// The index must be smaller than [`Self::N_COMPONENTS`].
            #[inline]
            pub unsafe fn get_unchecked(&self, index: usize) -> $E {
                debug_assert!(index < $N, "component index out of bounds");
                // SAFETY: The caller guarantees that the index is in bounds
                unsafe { *self.as_array().get_unchecked(index) }
            }

            /// Returns the vector with each component increased by one,
            /// wrapping around at the upper bound of the element type.
            #[inline]
            pub const fn incremented(&self) -> Self {
                Self::new($(self.$c.wrapping_add(1)),+)
            }

            /// Returns the vector with each component decreased by one,
            /// wrapping around at the lower bound of the element type.
            #[inline]
            pub const fn decremented(&self) -> Self {
                Self::new($(self.$c.wrapping_sub(1)),+)
            }

            /// Returns a vector with the given closure applied to each
            /// component.
            #[inline]
            pub fn mapped(&self, mut f: impl FnMut($E) -> $E) -> Self {
                Self::new($(f(self.$c)),+)
            }

            /// Returns a vector where each component is the minimum of the
            /// corresponding component in this and another vector.
            #[inline]
            pub fn component_min(&self, other: &Self) -> Self {
                Self::new($(self.$c.min(other.$c)),+)
            }

            /// Returns a vector where each component is the maximum of the
            /// corresponding component in this and another vector.
            #[inline]
            pub fn component_max(&self, other: &Self) -> Self {
                Self::new($(self.$c.max(other.$c)),+)
            }

            /// Returns the smallest component in the vector.
            #[inline]
            pub fn min_component(&self) -> $E {
                self.to_array().into_iter().fold(<$E>::MAX, <$E>::min)
            }

            /// Returns the largest component in the vector.
            #[inline]
            pub fn max_component(&self) -> $E {
                self.to_array().into_iter().fold(<$E>::MIN, <$E>::max)
            }
        }

        impl From<$E> for $V {
            #[inline]
            fn from(value: $E) -> Self {
                Self::same(value)
            }
        }

        impl From<bool> for $V {
            #[inline]
            fn from(value: bool) -> Self {
                Self::same(<$E>::from(value))
            }
        }

        impl From<$Mask> for $V {
            #[inline]
            fn from(mask: $Mask) -> Self {
                Self::new($(<$E>::from(mask.$c)),+)
            }
        }

        impl From<[$E; $N]> for $V {
            #[inline]
            fn from(array: [$E; $N]) -> Self {
                Self::from_array(array)
            }
        }

        impl From<$V> for [$E; $N] {
            #[inline]
            fn from(vector: $V) -> Self {
                vector.to_array()
            }
        }

        impl TryFrom<&[$E]> for $V {
            type Error = $crate::error::ComponentCountError;

            fn try_from(slice: &[$E]) -> Result<Self, Self::Error> {
                match <[$E; $N]>::try_from(slice) {
                    Ok(array) => Ok(Self::from_array(array)),
                    Err(_) => Err($crate::error::ComponentCountError {
                        expected: $N,
                        found: slice.len(),
                    }),
                }
            }
        }

        impl AsRef<[$E]> for $V {
            #[inline]
            fn as_ref(&self) -> &[$E] {
                self.as_array()
            }
        }

        impl ::std::ops::Index<usize> for $V {
            type Output = $E;

            #[inline]
            fn index(&self, index: usize) -> &Self::Output {
                &self.as_array()[index]
            }
        }

        impl ::std::ops::IndexMut<usize> for $V {
            #[inline]
            fn index_mut(&mut self, index: usize) -> &mut Self::Output {
                &mut self.as_array_mut()[index]
            }
        }

        impl_componentwise_binop!(Add, add, AddAssign, add_assign, $V, $E, [$($c),+], |p, q| {
            p.wrapping_add(q)
        });

        impl_componentwise_binop!(Sub, sub, SubAssign, sub_assign, $V, $E, [$($c),+], |p, q| {
            p.wrapping_sub(q)
        });

        impl_componentwise_binop!(Mul, mul, MulAssign, mul_assign, $V, $E, [$($c),+], |p, q| {
            p.wrapping_mul(q)
        });

        impl_componentwise_binop!(Div, div, DivAssign, div_assign, $V, $E, [$($c),+], |p, q| {
            p.wrapping_div(q)
        });

        impl_componentwise_binop!(Rem, rem, RemAssign, rem_assign, $V, $E, [$($c),+], |p, q| {
            p.wrapping_rem(q)
        });

        impl_componentwise_binop!(BitAnd, bitand, BitAndAssign, bitand_assign, $V, $E, [$($c),+], |p, q| {
            p & q
        });

        impl_componentwise_binop!(BitOr, bitor, BitOrAssign, bitor_assign, $V, $E, [$($c),+], |p, q| {
            p | q
        });

        impl_componentwise_binop!(BitXor, bitxor, BitXorAssign, bitxor_assign, $V, $E, [$($c),+], |p, q| {
            p ^ q
        });

        impl_promoted_shift!(Shl, shl, ShlAssign, shl_assign, $V, $E, [$($c),+], <<);

        impl_promoted_shift!(Shr, shr, ShrAssign, shr_assign, $V, $E, [$($c),+], >>);

        impl_unary_op!(Neg, neg, $V, $V, |val| {
            $V::new($(val.$c.wrapping_neg()),+)
        });

        impl_unary_op!(Not, not, $V, $V, |val| {
            $V::new($(!val.$c),+)
        });

        impl_componentwise_cmp!($V, $E, $Mask, [$($c),+]);

        impl_componentwise_fmt!($V; Display, LowerHex, UpperHex, Octal, Binary);

        impl ::std::str::FromStr for $V {
            type Err = $crate::error::ParseVectorError;

            fn from_str(string: &str) -> Result<Self, Self::Err> {
                $crate::parse::parse_components(string, stringify!($V)).map(Self::from_array)
            }
        }

        impl ::std::hash::Hash for $V {
            fn hash<H: ::std::hash::Hasher>(&self, state: &mut H) {
                state.write_u32($crate::hash::VectorHash::compute_hash(self));
            }
        }

        #[cfg(feature = "serde")]
        impl ::serde::Serialize for $V {
            fn serialize<S: ::serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                ::serde::Serialize::serialize(&self.to_array(), serializer)
            }
        }

        #[cfg(feature = "serde")]
        impl<'de> ::serde::Deserialize<'de> for $V {
            fn deserialize<D: ::serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                <[$E; $N] as ::serde::Deserialize<'de>>::deserialize(deserializer).map(Self::from_array)
            }
        }
    };
}

/// Implements constructors assembling a 3- or 4-dimensional vector from
/// smaller vectors and scalars.
macro_rules! impl_composite_constructors {
    (3, $V:ident, $E:ty, $V2:ident) => {
        impl $V {
            /// Creates a vector from the given x-component and a 2D vector
            /// holding the y- and z-components.
            #[inline]
            pub const fn from_x_yz(x: $E, yz: $V2) -> Self {
                Self::new(x, yz.x, yz.y)
            }

            /// Creates a vector from a 2D vector holding the x- and
            /// y-components and the given z-component.
            #[inline]
            pub const fn from_xy_z(xy: $V2, z: $E) -> Self {
                Self::new(xy.x, xy.y, z)
            }
        }
    };
    (4, $V:ident, $E:ty, $V2:ident, $V3:ident) => {
        impl $V {
            /// Creates a vector from the given x-component and a 3D vector
            /// holding the y-, z- and w-components.
            #[inline]
            pub const fn from_x_yzw(x: $E, yzw: $V3) -> Self {
                Self::new(x, yzw.x, yzw.y, yzw.z)
            }

            /// Creates a vector from a 3D vector holding the x-, y- and
            /// z-components and the given w-component.
            #[inline]
            pub const fn from_xyz_w(xyz: $V3, w: $E) -> Self {
                Self::new(xyz.x, xyz.y, xyz.z, w)
            }

            /// Creates a vector from two 2D vectors holding the x- and
            /// y-components and the z- and w-components.
            #[inline]
            pub const fn from_xy_zw(xy: $V2, zw: $V2) -> Self {
                Self::new(xy.x, xy.y, zw.x, zw.y)
            }

            #[inline]
            pub const fn from_x_y_zw(x: $E, y: $E, zw: $V2) -> Self {
                Self::new(x, y, zw.x, zw.y)
            }

            #[inline]
            pub const fn from_x_yz_w(x: $E, yz: $V2, w: $E) -> Self {
                Self::new(x, yz.x, yz.y, w)
            }

            #[inline]
            pub const fn from_xy_z_w(xy: $V2, z: $E, w: $E) -> Self {
                Self::new(xy.x, xy.y, z, w)
            }
        }
    };
}

/// Implements [`WrappingFrom`](crate::convert::WrappingFrom) for broadcasting
/// each of the given scalar types to all components.
macro_rules! impl_wrapping_splat {
    ($V:ident, $E:ty; $($source:ty),+) => {
        $(
            impl $crate::convert::WrappingFrom<$source> for $V {
                #[inline]
                fn wrapping_from(value: $source) -> Self {
                    Self::same(<$E as $crate::convert::WrappingFrom<$source>>::wrapping_from(value))
                }
            }
        )+
    };
}

/// Implements [`WrappingFrom`](crate::convert::WrappingFrom) for converting
/// each of the given vector types componentwise.
macro_rules! impl_wrapping_from_vector {
    ($V:ident, $E:ty, $components:tt; $($source:ty),+) => {
        $(impl_wrapping_from_vector!(@single $V, $E, $components, $source);)+
    };
    (@single $V:ident, $E:ty, [$($c:ident),+], $source:ty) => {
        impl $crate::convert::WrappingFrom<$source> for $V {
            #[inline]
            fn wrapping_from(vector: $source) -> Self {
                Self::new($(<$E as $crate::convert::WrappingFrom<_>>::wrapping_from(vector.$c)),+)
            }
        }
    };
}

/// Implements lossless [`From`] conversions from the vector into each of the
/// given vector types, whose components have the paired scalar type.
macro_rules! impl_from_vector_into {
    ($V:ident, $components:tt; $($target:ty => $scalar:ty),+) => {
        $(impl_from_vector_into!(@single $V, $components, $target, $scalar);)+
    };
    (@single $V:ident, [$($c:ident),+], $target:ty, $scalar:ty) => {
        impl From<$V> for $target {
            #[inline]
            fn from(vector: $V) -> Self {
                <$target>::new($(<$scalar>::from(vector.$c)),+)
            }
        }
    };
}
