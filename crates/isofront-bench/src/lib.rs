//! Benchmark profiles and input builders for the Isofront evolution core.
//!
//! Provides deterministic, seeded inputs at two reference sizes:
//!
//! - [`reference_inputs`]: 64x64 grid (4K cells)
//! - [`stress_inputs`]: 256x256 grid (64K cells)

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use isofront_core::{ScalarField, VelocityField};
use rand::{RngExt, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// One step's worth of inputs: the level-set field, the velocity field, and
/// the normal-speed coefficient.
pub struct StepInputs {
    /// Signed-distance-like level-set field.
    pub field: ScalarField,
    /// External velocity field.
    pub velocity: VelocityField,
    /// Normal-speed coefficient grid.
    pub speed: ScalarField,
}

/// Build seeded step inputs at an arbitrary grid size.
///
/// The field is the signed distance to a centered circle with a small
/// seeded perturbation so the upwind switches do not all resolve the
/// same way; velocity and speed are bounded seeded noise.
pub fn seeded_inputs(rows: u32, cols: u32, seed: u64) -> StepInputs {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let cr = (rows - 1) as f64 / 2.0;
    let cc = (cols - 1) as f64 / 2.0;
    let radius = rows.min(cols) as f64 / 4.0;

    let field = ScalarField::from_fn(rows, cols, |r, c| {
        let dy = r as f64 - cr;
        let dx = c as f64 - cc;
        (dx * dx + dy * dy).sqrt() - radius + rng.random_range(-0.05..0.05)
    })
    .unwrap();

    let vx = ScalarField::from_fn(rows, cols, |_, _| rng.random_range(-1.0..1.0)).unwrap();
    let vy = ScalarField::from_fn(rows, cols, |_, _| rng.random_range(-1.0..1.0)).unwrap();
    let speed = ScalarField::from_fn(rows, cols, |_, _| rng.random_range(-1.0..1.0)).unwrap();
    let velocity = VelocityField::new(vx, vy).unwrap();

    StepInputs {
        field,
        velocity,
        speed,
    }
}

/// Reference inputs: 64x64 grid (4K cells).
pub fn reference_inputs(seed: u64) -> StepInputs {
    seeded_inputs(64, 64, seed)
}

/// Stress inputs: 256x256 grid (64K cells).
pub fn stress_inputs(seed: u64) -> StepInputs {
    seeded_inputs(256, 256, seed)
}
