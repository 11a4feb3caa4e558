//! The gradient-scaled mean-curvature term κ·|∇φ|.

use isofront_core::{DerivativeBundle, ScalarField};

/// Below this squared-gradient magnitude a point is treated as flat and
/// contributes zero curvature. The raw formula is 0/0 there; propagating it
/// would poison the step's max reduction with NaN.
pub const FLAT_GRADIENT_EPS: f64 = 1e-12;

/// Compute the κ·|∇φ| term at every point:
///
/// ```text
/// k = (φx²·φyy − 2·φx·φy·φxy + φy²·φxx) / (φx² + φy²)
/// ```
///
/// using the centered first derivatives and the full second derivatives —
/// never the upwind-split ones; the curvature operator is parabolic and
/// wants the symmetric stencil.
///
/// Where `φx² + φy² < `[`FLAT_GRADIENT_EPS`] the term is defined as zero.
pub fn curvature_term(derivs: &DerivativeBundle) -> ScalarField {
    let px = derivs.dx_centered.as_slice();
    let py = derivs.dy_centered.as_slice();
    let pxx = derivs.dxx.as_slice();
    let pxy = derivs.dxy.as_slice();
    let pyy = derivs.dyy.as_slice();

    let mut out = derivs.dx_centered.clone();
    let k = out.as_mut_slice();
    for i in 0..k.len() {
        let gx2 = px[i] * px[i];
        let gy2 = py[i] * py[i];
        let denom = gx2 + gy2;
        k[i] = if denom < FLAT_GRADIENT_EPS {
            0.0
        } else {
            (gx2 * pyy[i] - 2.0 * px[i] * py[i] * pxy[i] + gy2 * pxx[i]) / denom
        };
    }
    out
}
