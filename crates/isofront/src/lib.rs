//! Isofront: two-dimensional level-set interface evolution.
//!
//! This is the top-level facade crate that re-exports the public API from
//! the Isofront sub-crates. For most users, adding `isofront` as a single
//! dependency is sufficient.
//!
//! An interface is represented implicitly as the zero level set of a scalar
//! field φ over a uniform grid. Each call to
//! [`InterfaceEvolver::step`](evolve::InterfaceEvolver::step) advances φ one
//! stable explicit Euler step under three combined motion laws:
//!
//! * advection by an external velocity field (upwind per axis),
//! * motion along the local surface normal at a given speed, and
//! * curvature-driven smoothing.
//!
//! # Quick start
//!
//! ```rust
//! use isofront::prelude::*;
//!
//! // Signed distance to a circle of radius 6 on a 32×32 grid.
//! let field = ScalarField::from_fn(32, 32, |r, c| {
//!     let dy = r as f64 - 15.5;
//!     let dx = c as f64 - 15.5;
//!     (dx * dx + dy * dy).sqrt() - 6.0
//! })
//! .unwrap();
//!
//! // Grow the interface outward at unit normal speed, lightly smoothed.
//! let velocity = VelocityField::zero(32, 32).unwrap();
//! let normal_speed = ScalarField::filled(32, 32, 1.0).unwrap();
//!
//! let stencil = CentralDifference::new(1.0, EdgeBehavior::Clamp).unwrap();
//! let godunov = GodunovGradient::new(1.0, EdgeBehavior::Clamp).unwrap();
//! let evolver = InterfaceEvolver::builder()
//!     .curvature_coeff(0.1)
//!     .build()
//!     .unwrap();
//!
//! let outcome = evolver
//!     .step(&field, &velocity, &normal_speed, &stencil, &godunov)
//!     .unwrap();
//! assert_eq!(outcome.field.shape(), (32, 32));
//! assert!(outcome.dt > 0.0);
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate. Use them for types not in the
//! prelude:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `isofront-core` | Fields, derivative bundles, collaborator traits, errors |
//! | [`stencil`] | `isofront-stencil` | Finite-difference collaborators and edge handling |
//! | [`evolve`] | `isofront-evolve` | Hamiltonian assembly, curvature, CFL timestep, the evolver |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Fields, derivative bundles, and collaborator traits (`isofront-core`).
///
/// Contains [`types::ScalarField`], [`types::VelocityField`],
/// [`types::DerivativeBundle`], the [`types::DerivativeProvider`] and
/// [`types::NormalGradient`] traits, and [`types::FieldError`].
pub use isofront_core as types;

/// Finite-difference collaborators (`isofront-stencil`).
///
/// Provides [`stencil::CentralDifference`] (the full derivative bundle),
/// [`stencil::GodunovGradient`] (the upwind gradient magnitude for normal
/// motion), and [`stencil::EdgeBehavior`].
pub use isofront_stencil as stencil;

/// The evolution core (`isofront-evolve`).
///
/// [`evolve::InterfaceEvolver`] orchestrates one step; the underlying
/// pieces ([`evolve::hamiltonian`], [`evolve::curvature`],
/// [`evolve::timestep`]) are public for callers that assemble their own
/// pipelines.
pub use isofront_evolve as evolve;

/// Common imports for typical Isofront usage.
///
/// ```rust
/// use isofront::prelude::*;
/// ```
pub mod prelude {
    // Fields and traits
    pub use isofront_core::{
        DerivativeBundle, DerivativeProvider, FieldError, NormalGradient, ScalarField,
        VelocityField,
    };

    // Finite-difference collaborators
    pub use isofront_stencil::{CentralDifference, EdgeBehavior, GodunovGradient};

    // Evolution
    pub use isofront_evolve::{EvolveError, InterfaceEvolver, StepOutcome, DEFAULT_CFL};
}
