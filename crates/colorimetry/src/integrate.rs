//! Discrete integration of spectral distributions.
//!
//! Two quadrature rules are available. [`Quadrature::Rectangular`] weighs
//! every sample with the width of its cell, which is the sampling interval for
//! uniformly spaced data. That is the CIE's summation for tristimulus values.
//! [`Quadrature::Trapezoidal`] applies the trapezoidal rule between adjacent
//! samples, which is the customary choice for photometric quantities.
//!
//! All sums are compensated, so results do not depend on summation order to
//! any practical degree.

use crate::core::Sum;
use crate::error::{Result, SpectralError};
use crate::{Float, SpectralDistribution};

/// A quadrature rule.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Quadrature {
    /// Sum of values times cell widths.
    #[default]
    Rectangular,
    /// The trapezoidal rule.
    Trapezoidal,
}

/// Compute the rectangular rule's cell widths.
///
/// Each sample's cell extends half way to its neighbors. The outermost cells
/// are mirrored, so that uniformly spaced data has cells of exactly the
/// sampling interval. A single sample has a cell width of 1nm.
fn cell_widths(wavelengths: &[Float]) -> Vec<Float> {
    let n = wavelengths.len();
    if n < 2 {
        return vec![1.0; n];
    }

    (0..n)
        .map(|index| {
            if index == 0 {
                wavelengths[1] - wavelengths[0]
            } else if index == n - 1 {
                wavelengths[n - 1] - wavelengths[n - 2]
            } else {
                (wavelengths[index + 1] - wavelengths[index - 1]) / 2.0
            }
        })
        .collect()
}

/// Integrate sampled values with the given rule.
fn integrate_samples(wavelengths: &[Float], values: &[Float], quadrature: Quadrature) -> Float {
    let mut sum = Sum::new();

    match quadrature {
        Quadrature::Rectangular => {
            for (value, width) in values.iter().zip(cell_widths(wavelengths)) {
                sum += value * width;
            }
        }
        Quadrature::Trapezoidal => {
            for index in 1..wavelengths.len() {
                let width = wavelengths[index] - wavelengths[index - 1];
                sum += width * (values[index - 1] + values[index]) / 2.0;
            }
        }
    }

    sum.value()
}

/// Integrate the spectral distribution.
pub fn integrate(distribution: &SpectralDistribution, quadrature: Quadrature) -> Float {
    integrate_samples(distribution.wavelengths(), distribution.values(), quadrature)
}

/// Integrate the sample-by-sample product of the spectral distributions.
///
/// All operands must have exactly the same wavelengths, which
/// [`align_all`](crate::align::align_all) establishes. Misaligned operands
/// result in a domain error.
pub fn integrate_product(
    operands: &[&SpectralDistribution],
    quadrature: Quadrature,
) -> Result<Float> {
    let Some((first, rest)) = operands.split_first() else {
        return Err(SpectralError::domain(
            "integrate_product",
            "there are no operands",
        ));
    };

    if let Some(other) = rest
        .iter()
        .find(|other| other.wavelengths() != first.wavelengths())
    {
        return Err(SpectralError::domain(
            "integrate_product",
            format!(
                "{} with shape {} is not aligned with {} with shape {}",
                other.label(),
                other.shape(),
                first.label(),
                first.shape()
            ),
        ));
    }

    let product: Vec<Float> = (0..first.len())
        .map(|index| {
            rest.iter()
                .fold(first.values()[index], |acc, other| acc * other.values()[index])
        })
        .collect();

    Ok(integrate_samples(first.wavelengths(), &product, quadrature))
}
