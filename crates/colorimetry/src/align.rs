//! Alignment of several spectral distributions onto one common grid.
//!
//! Spectral reductions multiply distributions sample by sample, which requires
//! that all operands share the very same wavelengths. The functions in this
//! module establish that precondition. They never fabricate data for
//! distributions that do not overlap; such inputs result in a domain error.

use crate::error::{Result, SpectralError};
use crate::shape::SpectralShape;
use crate::{Float, SpectralDistribution};

/// Determine the common domain of the given distributions.
///
/// The common domain is the intersection of all domains. This function fails
/// if there are no distributions or the intersection is empty.
pub fn common_domain(distributions: &[&SpectralDistribution]) -> Result<(Float, Float)> {
    let Some((first, rest)) = distributions.split_first() else {
        return Err(SpectralError::domain(
            "common_domain",
            "there are no distributions",
        ));
    };

    let (mut start, mut end) = first.domain();
    for distribution in rest {
        let (other_start, other_end) = distribution.domain();
        start = start.max(other_start);
        end = end.min(other_end);
    }

    if end < start {
        let domains = distributions
            .iter()
            .map(|d| {
                let (start, end) = d.domain();
                format!("{} ({}..={} nm)", d.label(), start, end)
            })
            .collect::<Vec<_>>()
            .join(", ");
        return Err(SpectralError::domain(
            "common_domain",
            format!("domains do not overlap: {}", domains),
        ));
    }

    Ok((start, end))
}

/// Align all distributions with the given shape.
///
/// Each distribution is resampled with its own interpolation method and
/// extrapolation policy.
pub fn align_all(
    shape: &SpectralShape,
    distributions: &[&SpectralDistribution],
) -> Result<Vec<SpectralDistribution>> {
    distributions.iter().map(|d| d.align(shape)).collect()
}

/// Determine whether all distributions have exactly the same wavelengths.
pub fn is_aligned(distributions: &[&SpectralDistribution]) -> bool {
    match distributions.split_first() {
        Some((first, rest)) => rest
            .iter()
            .all(|d| d.wavelengths() == first.wavelengths()),
        None => true,
    }
}
