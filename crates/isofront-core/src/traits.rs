//! Collaborator traits consumed by the evolution core.
//!
//! The core takes both as `&dyn` trait objects: the seam stays narrow, and
//! tests can substitute the mock implementations from `isofront-test-utils`
//! without touching the real stencils.

use crate::bundle::DerivativeBundle;
use crate::error::FieldError;
use crate::field::ScalarField;

/// Supplies one-sided, centered, and second finite differences of a field.
///
/// Boundary handling, stencil width, and grid spacing are the provider's
/// responsibility; the evolution core only consumes the resulting grids.
///
/// # Contract
///
/// - Every grid in the returned bundle has `field`'s shape.
/// - Deterministic: identical input fields produce identical bundles.
pub trait DerivativeProvider {
    /// Compute the full derivative bundle of `field`.
    fn derivatives(&self, field: &ScalarField) -> Result<DerivativeBundle, FieldError>;
}

/// Supplies an upwind gradient magnitude for normal-direction motion.
///
/// The engine receives the per-point speed coefficient so it can select its
/// own upwind side per point — the switching logic here is independent of
/// the one the advective term uses.
///
/// # Contract
///
/// - The returned grid has `field`'s shape and is everywhere ≥ 0.
/// - `speed` must share `field`'s shape; implementations reject a mismatch
///   with [`FieldError::ShapeMismatch`].
pub trait NormalGradient {
    /// Compute the Godunov-consistent `|∇φ|` for motion at speed `speed`.
    fn normal_gradient(
        &self,
        field: &ScalarField,
        speed: &ScalarField,
    ) -> Result<ScalarField, FieldError>;
}
