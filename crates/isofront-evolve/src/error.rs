//! Error types for the evolution core.

use isofront_core::FieldError;
use std::error::Error;
use std::fmt;

/// Errors from one evolution step.
///
/// All detected errors are reported synchronously; on error no field is
/// returned and no partial computation is observable.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EvolveError {
    /// An input grid does not share the level-set field's shape.
    ShapeMismatch {
        /// Which input (e.g., `"velocity x-component"`).
        what: &'static str,
        /// The field's shape as `(rows, cols)`.
        expected: (u32, u32),
        /// The mismatched shape as `(rows, cols)`.
        got: (u32, u32),
    },
    /// A collaborator (derivative provider or gradient engine) failed.
    Collaborator {
        /// Which collaborator failed.
        name: &'static str,
        /// The underlying field error.
        source: FieldError,
    },
}

impl fmt::Display for EvolveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
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
            Self::Collaborator { name, source } => {
                write!(f, "{name} failed: {source}")
            }
        }
    }
}

impl Error for EvolveError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Collaborator { source, .. } => Some(source),
            _ => None,
        }
    }
}
