//! Componentwise comparisons producing boolean vectors.

/// Componentwise equality between a vector and a vector or scalar.
///
/// Unlike [`PartialEq`], which tells whether two vectors are equal as a
/// whole, the result holds one boolean per component.
pub trait ComponentwiseEq<Rhs = Self> {
    /// Boolean vector with one lane per component.
    type Mask;

    /// Tests each component for equality.
    fn cmpeq(self, rhs: Rhs) -> Self::Mask;

    /// Tests each component for inequality.
    fn cmpne(self, rhs: Rhs) -> Self::Mask;
}

/// Componentwise ordering between a vector and a vector or scalar.
pub trait ComponentwiseOrd<Rhs = Self>: ComponentwiseEq<Rhs> {
    fn cmplt(self, rhs: Rhs) -> Self::Mask;

    fn cmple(self, rhs: Rhs) -> Self::Mask;

    fn cmpgt(self, rhs: Rhs) -> Self::Mask;

    fn cmpge(self, rhs: Rhs) -> Self::Mask;
}
