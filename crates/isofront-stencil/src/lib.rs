//! Concrete stencil collaborators for the isofront evolution core.
//!
//! Provides the two implementations the core consumes through traits:
//!
//! 1. [`CentralDifference`] — first-order one-sided, centered, and second
//!    finite differences of a scalar field.
//! 2. [`GodunovGradient`] — the upwind gradient magnitude for
//!    normal-direction motion, with per-point sign switching driven by the
//!    speed coefficient.
//!
//! Both own the grid spacing and the boundary rule ([`EdgeBehavior`]).

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

mod central;
mod edge;
mod godunov;

pub use central::CentralDifference;
pub use edge::EdgeBehavior;
pub use godunov::GodunovGradient;
