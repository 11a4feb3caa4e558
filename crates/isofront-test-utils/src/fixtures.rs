//! Field fixtures shared by tests across the workspace.

use isofront_core::{DerivativeBundle, ScalarField, VelocityField};

/// A planar ramp `φ(x, y) = x` (x along columns).
///
/// Its zero level set is the left grid edge, its curvature is identically
/// zero, and every x-derivative is exactly 1 in the interior.
pub fn linear_ramp_x(rows: u32, cols: u32) -> ScalarField {
    ScalarField::from_fn(rows, cols, |_r, c| c as f64).unwrap()
}

/// Signed-distance field of a circle of `radius` centered on the grid:
/// `φ = sqrt(x² + y²) − radius` with the origin at the grid center.
pub fn circle_interface(rows: u32, cols: u32, radius: f64) -> ScalarField {
    let cr = (rows - 1) as f64 / 2.0;
    let cc = (cols - 1) as f64 / 2.0;
    ScalarField::from_fn(rows, cols, |r, c| {
        let dy = r as f64 - cr;
        let dx = c as f64 - cc;
        (dx * dx + dy * dy).sqrt() - radius
    })
    .unwrap()
}

/// A field with every cell set to `value`.
pub fn uniform(rows: u32, cols: u32, value: f64) -> ScalarField {
    ScalarField::filled(rows, cols, value).unwrap()
}

/// A spatially constant velocity field `(vx, vy)`.
pub fn constant_velocity(rows: u32, cols: u32, vx: f64, vy: f64) -> VelocityField {
    VelocityField::new(
        ScalarField::filled(rows, cols, vx).unwrap(),
        ScalarField::filled(rows, cols, vy).unwrap(),
    )
    .unwrap()
}

/// A derivative bundle with every grid set to a constant, for pinning the
/// evolution core's inputs in isolation tests.
pub fn uniform_bundle(rows: u32, cols: u32, value: f64) -> DerivativeBundle {
    let g = || ScalarField::filled(rows, cols, value).unwrap();
    DerivativeBundle {
        dx_forward: g(),
        dx_backward: g(),
        dx_centered: g(),
        dy_forward: g(),
        dy_backward: g(),
        dy_centered: g(),
        dxx: g(),
        dxy: g(),
        dyy: g(),
    }
}
