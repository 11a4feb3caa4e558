//! The step orchestrator: derivative bundle, Hamiltonian terms, curvature,
//! stable dt, explicit Euler update.

use crate::curvature::curvature_term;
use crate::error::EvolveError;
use crate::hamiltonian;
use crate::timestep::stable_dt;
use isofront_core::{DerivativeProvider, NormalGradient, ScalarField, VelocityField};

/// Default CFL safety coefficient when the builder is given none.
pub const DEFAULT_CFL: f64 = 0.9;

/// One completed evolution step.
#[derive(Clone, Debug)]
pub struct StepOutcome {
    /// The advanced level-set field.
    pub field: ScalarField,
    /// The timestep the CFL bound selected for this step.
    pub dt: f64,
}

/// Advances a level-set field one explicit Euler step at a time.
///
/// Holds only the two scalar knobs of the motion law; all per-step inputs
/// (field, velocity, speed coefficient, collaborators) are passed to
/// [`step`](InterfaceEvolver::step), so one evolver can drive any number of
/// independent fields.
#[derive(Clone, Debug)]
pub struct InterfaceEvolver {
    curvature_coeff: f64,
    cfl_coeff: f64,
}

impl InterfaceEvolver {
    /// Start building an evolver.
    pub fn builder() -> InterfaceEvolverBuilder {
        InterfaceEvolverBuilder::new()
    }

    /// The curvature smoothing weight `b`.
    pub fn curvature_coeff(&self) -> f64 {
        self.curvature_coeff
    }

    /// The CFL safety coefficient.
    pub fn cfl_coeff(&self) -> f64 {
        self.cfl_coeff
    }

    /// Advance `field` by one stable explicit step.
    ///
    /// Computes the derivative bundle through `derivs`, assembles the
    /// advective and normal-motion terms, the curvature term, and the CFL
    /// timestep, then applies
    ///
    /// ```text
    /// φ' = φ − dt·((advective + normal) − b·κ|∇φ|)
    /// ```
    ///
    /// The inputs are untouched; the advanced field is returned in the
    /// [`StepOutcome`] together with the dt that produced it.
    ///
    /// # Errors
    ///
    /// Returns [`EvolveError::ShapeMismatch`] when any input grid disagrees
    /// with `field`'s shape and [`EvolveError::Collaborator`] when the
    /// derivative provider or gradient engine fails. On error no partial
    /// result is observable.
    pub fn step(
        &self,
        field: &ScalarField,
        velocity: &VelocityField,
        normal_speed: &ScalarField,
        derivs: &dyn DerivativeProvider,
        engine: &dyn NormalGradient,
    ) -> Result<StepOutcome, EvolveError> {
        let bundle = derivs
            .derivatives(field)
            .map_err(|source| EvolveError::Collaborator {
                name: "derivative provider",
                source,
            })?;
        if bundle.shape() != field.shape() {
            return Err(EvolveError::ShapeMismatch {
                what: "derivative provider output",
                expected: field.shape(),
                got: bundle.shape(),
            });
        }

        let terms = hamiltonian::assemble(field, &bundle, velocity, normal_speed, engine)?;
        let curvature = curvature_term(&bundle);
        let dt = stable_dt(velocity, &terms.normal, self.curvature_coeff, self.cfl_coeff);

        let adv = terms.advective.as_slice();
        let nrm = terms.normal.as_slice();
        let krv = curvature.as_slice();
        let b = self.curvature_coeff;

        let mut next = field.clone();
        let out = next.as_mut_slice();
        for i in 0..out.len() {
            out[i] -= dt * ((adv[i] + nrm[i]) - b * krv[i]);
        }

        Ok(StepOutcome { field: next, dt })
    }
}

/// Builder for [`InterfaceEvolver`].
#[derive(Clone, Debug, Default)]
pub struct InterfaceEvolverBuilder {
    curvature_coeff: Option<f64>,
    cfl_coeff: Option<f64>,
}

impl InterfaceEvolverBuilder {
    /// Create an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the curvature smoothing weight `b`. Required; must be finite
    /// and strictly positive.
    pub fn curvature_coeff(mut self, b: f64) -> Self {
        self.curvature_coeff = Some(b);
        self
    }

    /// Set the CFL safety coefficient. Defaults to [`DEFAULT_CFL`].
    pub fn cfl_coeff(mut self, cfl: f64) -> Self {
        self.cfl_coeff = Some(cfl);
        self
    }

    /// Validate the configuration and build the evolver.
    ///
    /// # Errors
    ///
    /// Returns a message if the curvature coefficient is missing, not
    /// strictly positive, or non-finite, or if the CFL coefficient falls
    /// outside `(0, 1)`. A zero curvature coefficient is rejected rather
    /// than treated as "no smoothing": the explicit scheme's stability
    /// contract requires it strictly positive. Arbitrarily small values
    /// are accepted to approach the inviscid limit.
    pub fn build(self) -> Result<InterfaceEvolver, String> {
        let curvature_coeff = self
            .curvature_coeff
            .ok_or_else(|| "curvature coefficient is required".to_string())?;
        if !curvature_coeff.is_finite() || curvature_coeff <= 0.0 {
            return Err(format!(
                "curvature coefficient must be finite and strictly positive, got {curvature_coeff}"
            ));
        }
        let cfl_coeff = self.cfl_coeff.unwrap_or(DEFAULT_CFL);
        if !cfl_coeff.is_finite() || cfl_coeff <= 0.0 || cfl_coeff >= 1.0 {
            return Err(format!(
                "CFL coefficient must lie strictly inside (0, 1), got {cfl_coeff}"
            ));
        }
        Ok(InterfaceEvolver {
            curvature_coeff,
            cfl_coeff,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use isofront_core::FieldError;
    use isofront_test_utils::fixtures;
    use isofront_test_utils::{MockDerivativeProvider, MockNormalGradient};

    #[test]
    fn builder_requires_curvature_coeff() {
        let err = InterfaceEvolver::builder().build().unwrap_err();
        assert!(err.contains("curvature coefficient"));
    }

    #[test]
    fn builder_rejects_non_positive_curvature() {
        for bad in [0.0, -0.1, f64::NAN, f64::INFINITY] {
            let result = InterfaceEvolver::builder().curvature_coeff(bad).build();
            assert!(result.is_err(), "curvature coefficient {bad} should be rejected");
        }
    }

    #[test]
    fn builder_rejects_cfl_outside_unit_interval() {
        for bad in [0.0, 1.0, 1.5, -0.2, f64::NAN] {
            let result = InterfaceEvolver::builder()
                .curvature_coeff(0.1)
                .cfl_coeff(bad)
                .build();
            assert!(result.is_err(), "cfl {bad} should be rejected");
        }
    }

    #[test]
    fn builder_defaults_cfl() {
        let evolver = InterfaceEvolver::builder()
            .curvature_coeff(0.2)
            .build()
            .unwrap();
        assert_eq!(evolver.cfl_coeff(), DEFAULT_CFL);
        assert_eq!(evolver.curvature_coeff(), 0.2);
    }

    #[test]
    fn step_applies_euler_update() {
        // All terms constant: adv+normal = 10·1 = 10 via the mock engine's
        // gradient 10 and speed 1; curvature from a zero bundle is 0.
        let field = fixtures::uniform(2, 2, 5.0);
        let vel = fixtures::constant_velocity(2, 2, 0.0, 0.0);
        let speed = fixtures::uniform(2, 2, 1.0);
        let provider = MockDerivativeProvider::returning(fixtures::uniform_bundle(2, 2, 0.0));
        let engine = MockNormalGradient::returning(fixtures::uniform(2, 2, 10.0));

        let evolver = InterfaceEvolver::builder()
            .curvature_coeff(0.25)
            .cfl_coeff(0.5)
            .build()
            .unwrap();
        let outcome = evolver.step(&field, &vel, &speed, &provider, &engine).unwrap();

        // max speed 10, dt = 0.5/(10 + 4·0.25) = 0.5/11.
        let dt = 0.5 / 11.0;
        assert_eq!(outcome.dt, dt);
        for &v in outcome.field.as_slice() {
            assert_eq!(v, 5.0 - dt * 10.0);
        }
    }

    #[test]
    fn step_leaves_inputs_untouched() {
        let field = fixtures::uniform(2, 2, 1.0);
        let vel = fixtures::constant_velocity(2, 2, 0.0, 0.0);
        let speed = fixtures::uniform(2, 2, 1.0);
        let provider = MockDerivativeProvider::returning(fixtures::uniform_bundle(2, 2, 0.0));
        let engine = MockNormalGradient::returning(fixtures::uniform(2, 2, 1.0));

        let evolver = InterfaceEvolver::builder().curvature_coeff(0.1).build().unwrap();
        evolver.step(&field, &vel, &speed, &provider, &engine).unwrap();
        assert!(field.as_slice().iter().all(|&v| v == 1.0));
    }

    #[test]
    fn provider_failure_is_attributed() {
        let field = fixtures::uniform(2, 2, 0.0);
        let vel = fixtures::constant_velocity(2, 2, 0.0, 0.0);
        let speed = fixtures::uniform(2, 2, 0.0);
        let provider = MockDerivativeProvider::failing(FieldError::EmptyField);
        let engine = MockNormalGradient::returning(fixtures::uniform(2, 2, 0.0));

        let evolver = InterfaceEvolver::builder().curvature_coeff(0.1).build().unwrap();
        let err = evolver.step(&field, &vel, &speed, &provider, &engine).unwrap_err();
        assert!(matches!(
            err,
            EvolveError::Collaborator {
                name: "derivative provider",
                ..
            }
        ));
    }

    #[test]
    fn provider_shape_drift_is_rejected() {
        let field = fixtures::uniform(2, 2, 0.0);
        let vel = fixtures::constant_velocity(2, 2, 0.0, 0.0);
        let speed = fixtures::uniform(2, 2, 0.0);
        let provider = MockDerivativeProvider::returning(fixtures::uniform_bundle(3, 3, 0.0));
        let engine = MockNormalGradient::returning(fixtures::uniform(2, 2, 0.0));

        let evolver = InterfaceEvolver::builder().curvature_coeff(0.1).build().unwrap();
        let err = evolver.step(&field, &vel, &speed, &provider, &engine).unwrap_err();
        assert!(matches!(
            err,
            EvolveError::ShapeMismatch {
                what: "derivative provider output",
                ..
            }
        ));
    }
}
