//! Explicit time stepping for two-dimensional level-set evolution.
//!
//! Advances an implicit-surface field one stable step under three combined
//! motion laws: advection by an external velocity field, motion along the
//! local surface normal, and curvature-driven smoothing. The per-step
//! pipeline is:
//!
//! 1. Derivative bundle from a [`DerivativeProvider`](isofront_core::DerivativeProvider).
//! 2. [`hamiltonian::assemble`] — upwind advective term + normal-motion term.
//! 3. [`curvature::curvature_term`] — the κ·|∇φ| smoothing term.
//! 4. [`timestep::stable_dt`] — CFL-bounded step from the max wave speed.
//! 5. The explicit Euler update, all orchestrated by [`InterfaceEvolver`].
//!
//! The whole core is a stateless pure transformation; no component retains
//! state between calls.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod curvature;
pub mod hamiltonian;
pub mod timestep;

mod error;
mod evolver;

pub use error::EvolveError;
pub use evolver::{InterfaceEvolver, InterfaceEvolverBuilder, StepOutcome, DEFAULT_CFL};
pub use hamiltonian::HamiltonianTerms;
