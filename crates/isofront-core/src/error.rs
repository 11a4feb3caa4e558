//! Error types for field construction and collaborator failures.

use std::error::Error;
use std::fmt;

/// Errors arising from field construction or per-field computation.
///
/// Returned by [`ScalarField`](crate::ScalarField) constructors and by
/// [`DerivativeProvider`](crate::DerivativeProvider) /
/// [`NormalGradient`](crate::NormalGradient) implementations.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FieldError {
    /// Attempted to construct a field with zero cells.
    EmptyField,
    /// A grid dimension exceeds the addressable maximum.
    DimensionTooLarge {
        /// Which dimension (`"rows"` or `"cols"`).
        name: &'static str,
        /// The offending value.
        value: u32,
        /// The maximum allowed.
        max: u32,
    },
    /// Backing data length does not match `rows * cols`.
    LengthMismatch {
        /// Expected element count.
        expected: usize,
        /// Provided element count.
        got: usize,
    },
    /// Two grids that must share a shape do not.
    ShapeMismatch {
        /// What was being compared (e.g., `"velocity x-component"`).
        what: &'static str,
        /// The reference shape as `(rows, cols)`.
        expected: (u32, u32),
        /// The mismatched shape as `(rows, cols)`.
        got: (u32, u32),
    },
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyField => write!(f, "field must have at least one cell"),
            Self::DimensionTooLarge { name, value, max } => {
                write!(f, "{name} = {value} exceeds maximum {max}")
            }
            Self::LengthMismatch { expected, got } => {
                write!(f, "data length {got} does not match grid size {expected}")
            }
            Self::ShapeMismatch {
                what,
                expected,
                got,
            } => {
                write!(
                    f,
                    "{what} has shape {}x{}, expected {}x{}",
                    got.0, got.1, expected.0, expected.1
                )
            }
        }
    }
}

impl Error for FieldError {}
