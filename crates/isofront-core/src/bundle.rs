//! The per-step [`DerivativeBundle`] produced by a derivative provider.

use crate::field::ScalarField;

/// Finite-difference derivatives of one field, evaluated at every grid point.
///
/// Produced once per step by a [`DerivativeProvider`](crate::DerivativeProvider)
/// and consumed within that step only; nothing here persists across steps.
/// All nine grids share the source field's shape. The x axis runs along
/// columns, the y axis along rows.
#[derive(Clone, Debug)]
pub struct DerivativeBundle {
    /// Forward difference in x: `(φ[r, c+1] − φ[r, c]) / h`.
    pub dx_forward: ScalarField,
    /// Backward difference in x: `(φ[r, c] − φ[r, c−1]) / h`.
    pub dx_backward: ScalarField,
    /// Centered difference in x: `(φ[r, c+1] − φ[r, c−1]) / 2h`.
    pub dx_centered: ScalarField,
    /// Forward difference in y.
    pub dy_forward: ScalarField,
    /// Backward difference in y.
    pub dy_backward: ScalarField,
    /// Centered difference in y.
    pub dy_centered: ScalarField,
    /// Second derivative in x: `(φ[r, c+1] − 2φ[r, c] + φ[r, c−1]) / h²`.
    pub dxx: ScalarField,
    /// Mixed second derivative: 4-diagonal cross stencil over `4h²`.
    pub dxy: ScalarField,
    /// Second derivative in y.
    pub dyy: ScalarField,
}

impl DerivativeBundle {
    /// Shape shared by every grid in the bundle, as `(rows, cols)`.
    pub fn shape(&self) -> (u32, u32) {
        self.dx_forward.shape()
    }
}
