//! Reduction of spectral distributions to CIE XYZ tristimulus values.

use crate::error::{Result, SpectralError};
use crate::integrate::{integrate_product, Quadrature};
use crate::spectrum::{ColourMatchingFunctions, SpectralDistribution};
use crate::Float;

/// Compute the CIE XYZ tristimulus values of a spectral distribution.
///
/// The distribution and illuminant are aligned with the colour matching
/// functions' shape. Without an illuminant, this function uses an
/// equal-energy illuminant with value one everywhere. Tristimulus values are
/// scaled so that the illuminant itself has a Y of 100:
///
/// X = k Σ S(λ) I(λ) x̄(λ) Δλ with k = 100 / Σ I(λ) ȳ(λ) Δλ
///
/// and likewise for Y and Z. Summation follows the CIE's rectangular rule.
/// Since the interval appears in both numerator and denominator, it cancels.
pub fn spectral_to_xyz(
    spd: &SpectralDistribution,
    cmfs: &ColourMatchingFunctions,
    illuminant: Option<&SpectralDistribution>,
) -> Result<[Float; 3]> {
    let shape = cmfs.shape();
    let spd = spd.align(&shape)?;
    let illuminant = match illuminant {
        Some(illuminant) => illuminant.align(&shape)?,
        None => SpectralDistribution::ones(&shape),
    };

    let rule = Quadrature::Rectangular;
    let normalization = integrate_product(&[&illuminant, cmfs.y_bar()], rule)?;
    if normalization == 0.0 {
        return Err(SpectralError::degenerate(
            "spectral_to_xyz",
            format!("{} weighted by ȳ", illuminant.label()),
        ));
    }
    let k = 100.0 / normalization;
    log::trace!("{}: k = {}", illuminant.label(), k);

    let x = integrate_product(&[&spd, &illuminant, cmfs.x_bar()], rule)?;
    let y = integrate_product(&[&spd, &illuminant, cmfs.y_bar()], rule)?;
    let z = integrate_product(&[&spd, &illuminant, cmfs.z_bar()], rule)?;

    Ok([k * x, k * y, k * z])
}

/// Compute the CIE XYZ tristimulus values of a monochromatic stimulus.
///
/// The result is the colour matching functions' value at the given
/// wavelength, interpolated if need be. Wavelengths outside the functions'
/// domain are an error.
pub fn wavelength_to_xyz(wavelength: Float, cmfs: &ColourMatchingFunctions) -> Result<[Float; 3]> {
    let (start, end) = cmfs.x_bar().domain();
    if wavelength < start || end < wavelength {
        return Err(SpectralError::domain(
            "wavelength_to_xyz",
            format!(
                "{} nm lies outside domain {}..={} nm of {}",
                wavelength,
                start,
                end,
                cmfs.label()
            ),
        ));
    }

    cmfs.value(wavelength)
}
