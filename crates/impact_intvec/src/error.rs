//! Errors for building vectors from strings and slices.

use std::num::ParseIntError;
use thiserror::Error;

/// Error returned when parsing a vector from a string fails.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ParseVectorError {
    #[error("expected a `{expected}` but found a `{found}`")]
    UnexpectedTypeName {
        expected: &'static str,
        found: String,
    },
    #[error("missing closing parenthesis")]
    UnclosedParenthesis,
    #[error(transparent)]
    ComponentCount(#[from] ComponentCountError),
    #[error("invalid component at index {index}")]
    InvalidComponent {
        index: usize,
        #[source]
        source: ParseIntError,
    },
}

/// Error returned when the number of given components does not match the
/// dimension of the vector.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
#[error("expected {expected} components but found {found}")]
pub struct ComponentCountError {
    pub expected: usize,
    pub found: usize,
}
