//! First-order finite-difference derivative provider.

use crate::edge::{resolve_axis, EdgeBehavior};
use isofront_core::{DerivativeBundle, DerivativeProvider, FieldError, ScalarField};

/// Finite-difference [`DerivativeProvider`] over a uniform grid spacing.
///
/// Per point, computes the one-sided first differences both ways on both
/// axes, the centered first differences, and the three second derivatives:
///
/// ```text
/// Dx⁺ = (φ_east  − φ) / h          Dx⁻ = (φ − φ_west) / h
/// Dx⁰ = (φ_east  − φ_west) / 2h
/// dxx = (φ_east  − 2φ + φ_west) / h²
/// dxy = (φ_se − φ_sw − φ_ne + φ_nw) / 4h²
/// ```
///
/// and symmetrically in y. Out-of-bounds neighbours resolve per the
/// configured [`EdgeBehavior`]; under `Clamp` the one-sided difference at
/// the edge is zero and the centered difference becomes one-sided.
///
/// # Examples
///
/// ```
/// use isofront_core::{DerivativeProvider, ScalarField};
/// use isofront_stencil::{CentralDifference, EdgeBehavior};
///
/// let provider = CentralDifference::new(1.0, EdgeBehavior::Clamp).unwrap();
/// let ramp = ScalarField::from_fn(5, 5, |_r, c| c as f64).unwrap();
/// let d = provider.derivatives(&ramp).unwrap();
/// // Interior of a unit ramp: every x-derivative is exactly 1.
/// assert_eq!(d.dx_centered.get(2, 2), 1.0);
/// ```
#[derive(Clone, Copy, Debug)]
pub struct CentralDifference {
    spacing: f64,
    edge: EdgeBehavior,
}

impl CentralDifference {
    /// Create a provider over a grid with uniform `spacing` between points.
    ///
    /// # Errors
    ///
    /// Returns `Err` if `spacing` is not finite and strictly positive.
    pub fn new(spacing: f64, edge: EdgeBehavior) -> Result<Self, String> {
        if !(spacing > 0.0) || !spacing.is_finite() {
            return Err(format!(
                "spacing must be finite and > 0, got {spacing}"
            ));
        }
        Ok(Self { spacing, edge })
    }

    /// Grid spacing.
    pub fn spacing(&self) -> f64 {
        self.spacing
    }

    /// Boundary rule.
    pub fn edge_behavior(&self) -> EdgeBehavior {
        self.edge
    }
}

impl DerivativeProvider for CentralDifference {
    fn derivatives(&self, field: &ScalarField) -> Result<DerivativeBundle, FieldError> {
        let (rows, cols) = field.shape();
        let rows_i = rows as i32;
        let cols_i = cols as i32;
        let h = self.spacing;
        let h2 = h * h;
        let phi = field.as_slice();
        let at = |r: i32, c: i32| {
            let rr = resolve_axis(r, rows_i, self.edge) as usize;
            let cc = resolve_axis(c, cols_i, self.edge) as usize;
            phi[rr * cols as usize + cc]
        };

        let n = field.len();
        let mut dx_forward = vec![0.0; n];
        let mut dx_backward = vec![0.0; n];
        let mut dx_centered = vec![0.0; n];
        let mut dy_forward = vec![0.0; n];
        let mut dy_backward = vec![0.0; n];
        let mut dy_centered = vec![0.0; n];
        let mut dxx = vec![0.0; n];
        let mut dxy = vec![0.0; n];
        let mut dyy = vec![0.0; n];

        for r in 0..rows_i {
            for c in 0..cols_i {
                let i = r as usize * cols as usize + c as usize;
                let center = phi[i];

                let east = at(r, c + 1);
                let west = at(r, c - 1);
                let south = at(r + 1, c);
                let north = at(r - 1, c);

                dx_forward[i] = (east - center) / h;
                dx_backward[i] = (center - west) / h;
                dx_centered[i] = (east - west) / (2.0 * h);
                dy_forward[i] = (south - center) / h;
                dy_backward[i] = (center - north) / h;
                dy_centered[i] = (south - north) / (2.0 * h);

                dxx[i] = (east - 2.0 * center + west) / h2;
                dyy[i] = (south - 2.0 * center + north) / h2;
                dxy[i] = (at(r + 1, c + 1) - at(r + 1, c - 1) - at(r - 1, c + 1)
                    + at(r - 1, c - 1))
                    / (4.0 * h2);
            }
        }

        Ok(DerivativeBundle {
            dx_forward: ScalarField::from_vec(rows, cols, dx_forward)?,
            dx_backward: ScalarField::from_vec(rows, cols, dx_backward)?,
            dx_centered: ScalarField::from_vec(rows, cols, dx_centered)?,
            dy_forward: ScalarField::from_vec(rows, cols, dy_forward)?,
            dy_backward: ScalarField::from_vec(rows, cols, dy_backward)?,
            dy_centered: ScalarField::from_vec(rows, cols, dy_centered)?,
            dxx: ScalarField::from_vec(rows, cols, dxx)?,
            dxy: ScalarField::from_vec(rows, cols, dxy)?,
            dyy: ScalarField::from_vec(rows, cols, dyy)?,
        })
    }
}
