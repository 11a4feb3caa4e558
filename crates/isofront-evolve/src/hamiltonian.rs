//! Assembly of the level-set Hamiltonian's two motion terms.
//!
//! The advective term upwinds per axis on the sign of the velocity
//! component; the normal-motion term pairs the speed coefficient with the
//! gradient engine's output, whose own upwind switch the engine drives from
//! that same coefficient.

use crate::error::EvolveError;
use isofront_core::{DerivativeBundle, NormalGradient, ScalarField, VelocityField};

/// The two assembled right-hand-side terms, each the field's shape.
#[derive(Clone, Debug)]
pub struct HamiltonianTerms {
    /// `vx · Dx(upwind) + vy · Dy(upwind)` per point.
    pub advective: ScalarField,
    /// `F · |∇φ|_godunov` per point.
    pub normal: ScalarField,
}

/// Assemble the advective and normal-motion terms.
///
/// Per point and per axis, the advective term selects the backward
/// difference where the velocity component is non-negative and the forward
/// difference where it is negative — the derivative always looks into the
/// flow the information is coming from. The normal term multiplies the
/// speed coefficient by the engine's upwind gradient magnitude.
///
/// Pure function of its inputs; no side effects.
///
/// # Errors
///
/// Returns [`EvolveError::ShapeMismatch`] if the bundle, velocity, or speed
/// grids do not share `field`'s shape, and [`EvolveError::Collaborator`] if
/// the gradient engine fails.
pub fn assemble(
    field: &ScalarField,
    derivs: &DerivativeBundle,
    velocity: &VelocityField,
    normal_speed: &ScalarField,
    engine: &dyn NormalGradient,
) -> Result<HamiltonianTerms, EvolveError> {
    let shape = field.shape();
    if derivs.shape() != shape {
        return Err(EvolveError::ShapeMismatch {
            what: "derivative bundle",
            expected: shape,
            got: derivs.shape(),
        });
    }
    if velocity.shape() != shape {
        return Err(EvolveError::ShapeMismatch {
            what: "velocity field",
            expected: shape,
            got: velocity.shape(),
        });
    }
    if normal_speed.shape() != shape {
        return Err(EvolveError::ShapeMismatch {
            what: "normal-speed coefficient",
            expected: shape,
            got: normal_speed.shape(),
        });
    }

    let vx = velocity.x().as_slice();
    let vy = velocity.y().as_slice();
    let dxf = derivs.dx_forward.as_slice();
    let dxb = derivs.dx_backward.as_slice();
    let dyf = derivs.dy_forward.as_slice();
    let dyb = derivs.dy_backward.as_slice();

    let mut advective = field.clone();
    let adv = advective.as_mut_slice();
    for i in 0..adv.len() {
        let dx = if vx[i] >= 0.0 { dxb[i] } else { dxf[i] };
        let dy = if vy[i] >= 0.0 { dyb[i] } else { dyf[i] };
        adv[i] = vx[i] * dx + vy[i] * dy;
    }

    let gradient = engine
        .normal_gradient(field, normal_speed)
        .map_err(|source| EvolveError::Collaborator {
            name: "normal-speed gradient engine",
            source,
        })?;
    if gradient.shape() != shape {
        return Err(EvolveError::ShapeMismatch {
            what: "gradient engine output",
            expected: shape,
            got: gradient.shape(),
        });
    }

    let mut normal = gradient;
    let speed = normal_speed.as_slice();
    for (n, &f) in normal.as_mut_slice().iter_mut().zip(speed) {
        *n *= f;
    }

    Ok(HamiltonianTerms { advective, normal })
}

#[cfg(test)]
mod tests {
    use super::*;
    use isofront_core::FieldError;
    use isofront_test_utils::fixtures;
    use isofront_test_utils::MockNormalGradient;

    fn bundle_with_distinct_sides(rows: u32, cols: u32) -> DerivativeBundle {
        // Forward and backward differences get different constants so the
        // upwind selection is observable.
        let mut b = fixtures::uniform_bundle(rows, cols, 0.0);
        b.dx_forward = fixtures::uniform(rows, cols, 2.0);
        b.dx_backward = fixtures::uniform(rows, cols, 3.0);
        b.dy_forward = fixtures::uniform(rows, cols, 5.0);
        b.dy_backward = fixtures::uniform(rows, cols, 7.0);
        b
    }

    #[test]
    fn positive_velocity_selects_backward() {
        let field = fixtures::uniform(3, 3, 0.0);
        let b = bundle_with_distinct_sides(3, 3);
        let vel = fixtures::constant_velocity(3, 3, 1.0, 1.0);
        let speed = fixtures::uniform(3, 3, 0.0);
        let engine = MockNormalGradient::returning(fixtures::uniform(3, 3, 0.0));

        let terms = assemble(&field, &b, &vel, &speed, &engine).unwrap();
        // 1·dx_backward + 1·dy_backward = 3 + 7
        assert!(terms.advective.as_slice().iter().all(|&v| v == 10.0));
    }

    #[test]
    fn negative_velocity_selects_forward() {
        let field = fixtures::uniform(3, 3, 0.0);
        let b = bundle_with_distinct_sides(3, 3);
        let vel = fixtures::constant_velocity(3, 3, -1.0, -1.0);
        let speed = fixtures::uniform(3, 3, 0.0);
        let engine = MockNormalGradient::returning(fixtures::uniform(3, 3, 0.0));

        let terms = assemble(&field, &b, &vel, &speed, &engine).unwrap();
        // (−1)·dx_forward + (−1)·dy_forward = −2 − 5
        assert!(terms.advective.as_slice().iter().all(|&v| v == -7.0));
    }

    #[test]
    fn zero_velocity_counts_as_non_negative() {
        let field = fixtures::uniform(2, 2, 0.0);
        let b = bundle_with_distinct_sides(2, 2);
        let vel = fixtures::constant_velocity(2, 2, 0.0, 0.0);
        let speed = fixtures::uniform(2, 2, 0.0);
        let engine = MockNormalGradient::returning(fixtures::uniform(2, 2, 0.0));

        let terms = assemble(&field, &b, &vel, &speed, &engine).unwrap();
        // Backward side selected, but multiplied by zero velocity.
        assert!(terms.advective.as_slice().iter().all(|&v| v == 0.0));
    }

    #[test]
    fn mixed_sign_velocity_per_axis() {
        let field = fixtures::uniform(2, 2, 0.0);
        let b = bundle_with_distinct_sides(2, 2);
        let vel = fixtures::constant_velocity(2, 2, 2.0, -3.0);
        let speed = fixtures::uniform(2, 2, 0.0);
        let engine = MockNormalGradient::returning(fixtures::uniform(2, 2, 0.0));

        let terms = assemble(&field, &b, &vel, &speed, &engine).unwrap();
        // 2·dx_backward + (−3)·dy_forward = 6 − 15
        assert!(terms.advective.as_slice().iter().all(|&v| v == -9.0));
    }

    #[test]
    fn normal_term_scales_engine_output_by_speed() {
        let field = fixtures::uniform(2, 3, 0.0);
        let b = fixtures::uniform_bundle(2, 3, 0.0);
        let vel = fixtures::constant_velocity(2, 3, 0.0, 0.0);
        let speed = ScalarField::from_vec(2, 3, vec![1.0, -2.0, 0.5, 0.0, 3.0, -1.0]).unwrap();
        let engine = MockNormalGradient::returning(fixtures::uniform(2, 3, 4.0));

        let terms = assemble(&field, &b, &vel, &speed, &engine).unwrap();
        assert_eq!(
            terms.normal.as_slice(),
            &[4.0, -8.0, 2.0, 0.0, 12.0, -4.0]
        );
    }

    #[test]
    fn velocity_shape_mismatch_rejected() {
        let field = fixtures::uniform(3, 3, 0.0);
        let b = fixtures::uniform_bundle(3, 3, 0.0);
        let vel = fixtures::constant_velocity(3, 4, 0.0, 0.0);
        let speed = fixtures::uniform(3, 3, 0.0);
        let engine = MockNormalGradient::returning(fixtures::uniform(3, 3, 0.0));

        let err = assemble(&field, &b, &vel, &speed, &engine).unwrap_err();
        assert!(matches!(
            err,
            EvolveError::ShapeMismatch {
                what: "velocity field",
                ..
            }
        ));
    }

    #[test]
    fn engine_failure_surfaces_with_context() {
        let field = fixtures::uniform(3, 3, 0.0);
        let b = fixtures::uniform_bundle(3, 3, 0.0);
        let vel = fixtures::constant_velocity(3, 3, 0.0, 0.0);
        let speed = fixtures::uniform(3, 3, 0.0);
        let engine = MockNormalGradient::failing(FieldError::EmptyField);

        let err = assemble(&field, &b, &vel, &speed, &engine).unwrap_err();
        assert!(matches!(
            err,
            EvolveError::Collaborator {
                name: "normal-speed gradient engine",
                ..
            }
        ));
    }
}
