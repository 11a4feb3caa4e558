//! Core types and traits for the isofront level-set library.
//!
//! This is the leaf crate with zero internal dependencies. It defines the
//! grid containers the evolution core operates on, the per-step derivative
//! bundle, the two collaborator traits the core consumes, and the error
//! types shared across the workspace.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

mod bundle;
mod error;
mod field;
mod traits;

pub use bundle::DerivativeBundle;
pub use error::FieldError;
pub use field::{ScalarField, VelocityField};
pub use traits::{DerivativeProvider, NormalGradient};
