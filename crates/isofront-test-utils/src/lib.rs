//! Test utilities and mock collaborators for isofront development.
//!
//! Provides mock implementations of the core traits
//! ([`DerivativeProvider`], [`NormalGradient`]) that return preset outputs,
//! plus field fixtures used across the workspace's tests.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

use isofront_core::{
    DerivativeBundle, DerivativeProvider, FieldError, NormalGradient, ScalarField,
};

/// Mock [`DerivativeProvider`] returning a preset bundle (or a preset error).
///
/// Lets evolution-core tests pin the derivative inputs exactly instead of
/// going through a real stencil.
pub struct MockDerivativeProvider {
    result: Result<DerivativeBundle, FieldError>,
}

impl MockDerivativeProvider {
    /// A provider that always returns a clone of `bundle`.
    pub fn returning(bundle: DerivativeBundle) -> Self {
        Self { result: Ok(bundle) }
    }

    /// A provider that always fails with `err`.
    pub fn failing(err: FieldError) -> Self {
        Self { result: Err(err) }
    }
}

impl DerivativeProvider for MockDerivativeProvider {
    fn derivatives(&self, _field: &ScalarField) -> Result<DerivativeBundle, FieldError> {
        self.result.clone()
    }
}

/// Mock [`NormalGradient`] returning a preset grid (or a preset error).
pub struct MockNormalGradient {
    result: Result<ScalarField, FieldError>,
}

impl MockNormalGradient {
    /// An engine that always returns a clone of `gradient`.
    pub fn returning(gradient: ScalarField) -> Self {
        Self {
            result: Ok(gradient),
        }
    }

    /// An engine that always fails with `err`.
    pub fn failing(err: FieldError) -> Self {
        Self { result: Err(err) }
    }
}

impl NormalGradient for MockNormalGradient {
    fn normal_gradient(
        &self,
        _field: &ScalarField,
        _speed: &ScalarField,
    ) -> Result<ScalarField, FieldError> {
        self.result.clone()
    }
}
