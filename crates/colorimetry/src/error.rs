//! Utility module with colorimetry's errors.

#[cfg(feature = "pyffi")]
use pyo3::{exceptions::PyValueError, prelude::*};
use thiserror::Error;

/// An error in a spectral or colorimetric computation.
///
/// Every variant names the operation that failed. Domain errors additionally
/// describe the domains involved, so that a message like
/// `align: shape 900..=1000 nm lies outside domain 380..=780 nm` can be traced
/// back to its inputs without a debugger.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum SpectralError {
    /// A wavelength or shape falls outside a distribution's domain when the
    /// extrapolation policy forbids it, two distributions share no common
    /// wavelengths, or the operands of a product integral are not aligned.
    #[error("{operation}: {detail}")]
    Domain {
        operation: &'static str,
        detail: String,
    },

    /// A reduction divides by a quantity that is exactly zero, e.g., the
    /// integral of an all-zero distribution.
    #[error("{operation}: {label} integrates to zero")]
    DegenerateInput {
        operation: &'static str,
        label: String,
    },

    /// A colourspace model name that has no conversion.
    #[error("colourspace model \"{0}\" is not supported")]
    UnsupportedModel(String),

    /// A distribution with mismatched lengths, no samples, non-finite
    /// wavelengths, or wavelengths that are not strictly increasing.
    #[error("invalid spectral distribution: {0}")]
    InvalidDistribution(String),

    /// A spectral shape with a non-positive interval or an end before its
    /// start.
    #[error("invalid spectral shape: {0}")]
    InvalidShape(String),
}

impl SpectralError {
    /// Create a new domain error.
    pub fn domain(operation: &'static str, detail: impl Into<String>) -> Self {
        Self::Domain {
            operation,
            detail: detail.into(),
        }
    }

    /// Create a new degenerate input error.
    pub fn degenerate(operation: &'static str, label: impl Into<String>) -> Self {
        Self::DegenerateInput {
            operation,
            label: label.into(),
        }
    }
}

#[cfg(feature = "pyffi")]
impl From<SpectralError> for PyErr {
    fn from(value: SpectralError) -> Self {
        PyValueError::new_err(value.to_string())
    }
}

/// The result type for fallible spectral computations.
pub type Result<T> = std::result::Result<T, SpectralError>;
