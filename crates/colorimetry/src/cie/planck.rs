use crate::shape::SpectralShape;
use crate::spectrum::SpectralDistribution;
use crate::Float;

/// The first radiation constant 2πhc² in W·m².
pub const PLANCK_C1: Float = 3.741771e-16;

/// The second radiation constant hc/k in m·K.
pub const PLANCK_C2: Float = 1.4388e-2;

/// Compute Planck's law for the given wavelength in meters and temperature in
/// Kelvin.
///
/// The result is the spectral radiant exitance of a black body in W·m⁻³, i.e.,
/// per square meter of surface and meter of wavelength.
pub fn planck_law(wavelength: Float, temperature: Float) -> Float {
    PLANCK_C1 / wavelength.powi(5) / (PLANCK_C2 / (wavelength * temperature)).exp_m1()
}

/// Compute the spectral distribution of a black body at the given temperature
/// in Kelvin.
pub fn blackbody_spd(temperature: Float, shape: &SpectralShape) -> SpectralDistribution {
    SpectralDistribution::from_fn(format!("{}K Blackbody", temperature), shape, |wavelength| {
        planck_law(wavelength * 1e-9, temperature)
    })
}
