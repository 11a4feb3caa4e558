//! CFL-limited timestep selection for the explicit Euler update.

use isofront_core::{ScalarField, VelocityField};

/// Pick the largest stable timestep for one explicit step.
///
/// The advective wave speed at a point is `|vx| + |vy|`; the normal-motion
/// speed is the magnitude of the assembled normal term. The curvature term
/// is parabolic, so its stability bound is independent of the field and
/// enters as a constant `4·b` penalty on the denominator:
///
/// ```text
/// dt = cfl / (max_speed + 4·b)
/// ```
///
/// With a strictly positive curvature coefficient the denominator never
/// vanishes, so the returned step is finite and strictly positive even for
/// a motionless field.
pub fn stable_dt(
    velocity: &VelocityField,
    normal_term: &ScalarField,
    curvature_coeff: f64,
    cfl_coeff: f64,
) -> f64 {
    let vx = velocity.x().as_slice();
    let vy = velocity.y().as_slice();
    let mut max_speed = normal_term.max_abs();
    for i in 0..vx.len() {
        let s = vx[i].abs() + vy[i].abs();
        if s > max_speed {
            max_speed = s;
        }
    }
    cfl_coeff / (max_speed + 4.0 * curvature_coeff)
}
