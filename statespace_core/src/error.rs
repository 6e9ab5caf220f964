// statespace_core/src/error.rs

use thiserror::Error;

/// Errors about the dimension descriptor itself.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DimensionsError {
    /// The descriptor does not carry a capability the model requires
    /// (e.g. a controllable model validated against a state-only context).
    #[error("dimensions do not carry a `{capability}` size")]
    InvalidType { capability: &'static str },

    /// The descriptor carries the capability, but with an incompatible value.
    #[error("expected {context} of {expected}, found {found}")]
    InvalidValue {
        context: &'static str,
        expected: usize,
        found: usize,
    },
}

/// Errors about a vector whose length disagrees with the declared dimensions.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VectorError {
    #[error("expected vector of {expected} dimensions in `{context}`, found {found}")]
    InvalidDimensionCount {
        context: &'static str,
        expected: usize,
        found: usize,
    },
}

/// Errors about a coefficient matrix whose shape disagrees with the declared dimensions.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MatrixError {
    #[error("expected {expected} columns in `{context}`, found {found}")]
    InvalidColumnCount {
        context: &'static str,
        expected: usize,
        found: usize,
    },
    #[error("expected {expected} rows in `{context}`, found {found}")]
    InvalidRowCount {
        context: &'static str,
        expected: usize,
        found: usize,
    },
}

/// Umbrella error returned by [`Validate::validate`](crate::models::Validate::validate),
/// the single checked boundary of the library. All failures are structural
/// configuration errors detected at validation time; `apply` and `jacobian`
/// never return errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error(transparent)]
    Dimensions(#[from] DimensionsError),
    #[error(transparent)]
    Vector(#[from] VectorError),
    #[error(transparent)]
    Matrix(#[from] MatrixError),
}
