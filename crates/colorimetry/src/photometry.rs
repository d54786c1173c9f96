//! Photometric quantities of spectral distributions.
//!
//! Photometry weighs radiant power by the sensitivity of the human eye, i.e.,
//! a luminous efficiency function such as the CIE 1924 photopic V(λ). This
//! module computes three quantities:
//!
//!   * __Luminous flux__ Φ = K_m ∫ S(λ) V(λ) dλ in lumen, for a spectral
//!     distribution S in watts per nanometer.
//!   * __Luminous efficiency__ η = ∫ S(λ) V(λ) dλ / ∫ S(λ) dλ, which is
//!     dimensionless and lies between zero and one for non-negative S.
//!   * __Luminous efficacy__ η K_m in lm/W.
//!
//! The free functions use the default [`Options`]. [`Photometer`] bundles a
//! luminous efficiency function with custom options.
//!
//! ```
//! # use colorimetry::cie::CIE_ILLUMINANT_F2;
//! # use colorimetry::{luminous_efficacy, luminous_efficiency};
//! # fn main() -> colorimetry::error::Result<()> {
//! let mut f2 = CIE_ILLUMINANT_F2.to_distribution();
//! f2.normalise(None)?;
//!
//! let efficiency = luminous_efficiency(&f2, None)?;
//! assert!((efficiency - 0.493176239758).abs() < 5e-8);
//!
//! let efficacy = luminous_efficacy(&f2, None)?;
//! assert!((efficacy - 336.83937175510914).abs() < 5e-8);
//! # Ok(())
//! # }
//! ```

use crate::cie::CIE_1924_PHOTOPIC_LEF;
use crate::error::{Result, SpectralError};
use crate::integrate::{integrate, integrate_product};
use crate::opt::{Grid, Options};
use crate::{Float, SpectralDistribution};

/// The maximum luminous efficacy of photopic vision in lm/W, as customarily
/// rounded.
pub const K_M: Float = 683.0;

/// The maximum luminous efficacy of photopic vision in lm/W, as derived from
/// the SI definition of the candela at 540 THz.
pub const K_M_SI: Float = 683.002;

/// A photometer measuring spectral distributions against a luminous
/// efficiency function.
#[derive(Clone, Debug)]
pub struct Photometer {
    lef: SpectralDistribution,
    options: Options,
}

impl Default for Photometer {
    fn default() -> Self {
        Self::photopic(Options::default())
    }
}

impl Photometer {
    /// Create a new photometer.
    pub fn new(lef: SpectralDistribution, options: Options) -> Self {
        Self { lef, options }
    }

    /// Create a new photometer with the CIE 1924 photopic luminous efficiency
    /// function.
    pub fn photopic(options: Options) -> Self {
        Self::new(CIE_1924_PHOTOPIC_LEF.to_distribution(), options)
    }

    /// Get the luminous efficiency function.
    pub fn lef(&self) -> &SpectralDistribution {
        &self.lef
    }

    /// Get the options.
    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Resample the measured distribution and the luminous efficiency function
    /// onto the configured grid.
    fn align(
        &self,
        spd: &SpectralDistribution,
    ) -> Result<(SpectralDistribution, SpectralDistribution)> {
        let extrapolation = self.options.extrapolation();

        match self.options.grid() {
            Grid::Distribution => {
                let lef = self
                    .lef
                    .clone()
                    .with_extrapolation(extrapolation)
                    .align_with(spd)?;
                Ok((spd.clone(), lef))
            }
            Grid::EfficiencyFunction => {
                let spd = spd
                    .clone()
                    .with_extrapolation(extrapolation)
                    .align_with(&self.lef)?;
                Ok((spd, self.lef.clone()))
            }
        }
    }

    /// Compute the integral of the measured distribution weighted by the
    /// luminous efficiency function, together with the aligned distribution.
    fn weighted_integral(
        &self,
        spd: &SpectralDistribution,
    ) -> Result<(Float, SpectralDistribution)> {
        let (spd, lef) = self.align(spd)?;
        let weighted = integrate_product(&[&spd, &lef], self.options.quadrature())?;
        log::trace!("{}: ∫ S V dλ = {}", spd.label(), weighted);
        Ok((weighted, spd))
    }

    /// Compute the luminous flux in lumen.
    pub fn luminous_flux(&self, spd: &SpectralDistribution) -> Result<Float> {
        let (weighted, _) = self.weighted_integral(spd)?;
        Ok(self.options.k_m() * weighted)
    }

    /// Compute the luminous efficiency.
    ///
    /// This method fails with a degenerate input error if the distribution
    /// integrates to zero.
    pub fn luminous_efficiency(&self, spd: &SpectralDistribution) -> Result<Float> {
        let (weighted, aligned) = self.weighted_integral(spd)?;
        let total = integrate(&aligned, self.options.quadrature());
        log::trace!("{}: ∫ S dλ = {}", aligned.label(), total);

        if total == 0.0 {
            return Err(SpectralError::degenerate(
                "luminous_efficiency",
                aligned.label().to_string(),
            ));
        }

        Ok(weighted / total)
    }

    /// Compute the luminous efficacy in lm/W.
    pub fn luminous_efficacy(&self, spd: &SpectralDistribution) -> Result<Float> {
        Ok(self.luminous_efficiency(spd)? * self.options.k_m())
    }
}

// --------------------------------------------------------------------------------------------------------------------

fn photometer(lef: Option<&SpectralDistribution>, options: Options) -> Photometer {
    match lef {
        Some(lef) => Photometer::new(lef.clone(), options),
        None => Photometer::photopic(options),
    }
}

/// Compute the luminous flux in lumen.
///
/// Without a luminous efficiency function, this function uses the CIE 1924
/// photopic one.
pub fn luminous_flux(
    spd: &SpectralDistribution,
    lef: Option<&SpectralDistribution>,
    k_m: Float,
) -> Result<Float> {
    photometer(lef, Options::builder().k_m(k_m).build()).luminous_flux(spd)
}

/// Compute the luminous efficiency.
///
/// Without a luminous efficiency function, this function uses the CIE 1924
/// photopic one.
pub fn luminous_efficiency(
    spd: &SpectralDistribution,
    lef: Option<&SpectralDistribution>,
) -> Result<Float> {
    photometer(lef, Options::default()).luminous_efficiency(spd)
}

/// Compute the luminous efficacy in lm/W.
///
/// Without a luminous efficiency function, this function uses the CIE 1924
/// photopic one.
pub fn luminous_efficacy(
    spd: &SpectralDistribution,
    lef: Option<&SpectralDistribution>,
) -> Result<Float> {
    photometer(lef, Options::default()).luminous_efficacy(spd)
}

// --------------------------------------------------------------------------------------------------------------------

#[cfg(feature = "pyffi")]
pub(crate) mod python {
    use pyo3::prelude::*;

    use crate::{Float, SpectralDistribution};

    /// Compute the luminous flux in lumen. <i class=python-only>Python only!</i>
    #[pyfunction]
    #[pyo3(name = "luminous_flux", signature = (spd, lef=None, k_m=super::K_M))]
    pub fn py_luminous_flux(
        spd: PyRef<'_, SpectralDistribution>,
        lef: Option<PyRef<'_, SpectralDistribution>>,
        k_m: Float,
    ) -> PyResult<Float> {
        Ok(super::luminous_flux(&spd, lef.as_deref(), k_m)?)
    }

    /// Compute the luminous efficiency. <i class=python-only>Python only!</i>
    #[pyfunction]
    #[pyo3(name = "luminous_efficiency", signature = (spd, lef=None))]
    pub fn py_luminous_efficiency(
        spd: PyRef<'_, SpectralDistribution>,
        lef: Option<PyRef<'_, SpectralDistribution>>,
    ) -> PyResult<Float> {
        Ok(super::luminous_efficiency(&spd, lef.as_deref())?)
    }

    /// Compute the luminous efficacy in lm/W. <i class=python-only>Python only!</i>
    #[pyfunction]
    #[pyo3(name = "luminous_efficacy", signature = (spd, lef=None))]
    pub fn py_luminous_efficacy(
        spd: PyRef<'_, SpectralDistribution>,
        lef: Option<PyRef<'_, SpectralDistribution>>,
    ) -> PyResult<Float> {
        Ok(super::luminous_efficacy(&spd, lef.as_deref())?)
    }
}

// --------------------------------------------------------------------------------------------------------------------

#[cfg(test)]
mod test {
    use super::{luminous_efficacy, luminous_efficiency, luminous_flux, Photometer, K_M};
    use crate::cie::{CIE_1924_PHOTOPIC_LEF, CIE_ILLUMINANT_D65, CIE_ILLUMINANT_F2};
    use crate::error::SpectralError;
    use crate::opt::{Grid, Options};
    use crate::shape::SpectralShape;
    use crate::{Quadrature, SpectralDistribution};
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    fn normalised_f2() -> SpectralDistribution {
        let mut f2 = CIE_ILLUMINANT_F2.to_distribution();
        f2.normalise(None).unwrap();
        f2
    }

    #[test]
    fn test_f2() {
        let f2 = normalised_f2();

        assert_abs_diff_eq!(
            luminous_flux(&f2, None, K_M).unwrap(),
            28588.736129772711,
            epsilon = 5e-8
        );
        assert_abs_diff_eq!(
            luminous_efficiency(&f2, None).unwrap(),
            0.493176239758,
            epsilon = 5e-8
        );
        assert_abs_diff_eq!(
            luminous_efficacy(&f2, None).unwrap(),
            336.83937175510914,
            epsilon = 5e-8
        );

        // The dataset entry itself remains untouched.
        assert_eq!(CIE_ILLUMINANT_F2.data()[11], 34.98);
    }

    #[test]
    fn test_monochromatic_spike() {
        let mut spike = SpectralDistribution::zeros_spd();
        spike.set(555.0, 1.0);

        assert_relative_eq!(luminous_efficiency(&spike, None).unwrap(), 1.0);
        assert_relative_eq!(
            luminous_efficacy(&spike, None).unwrap(),
            682.99999999999989,
            max_relative = 1e-12
        );
    }

    #[test]
    fn test_efficacy_is_scaled_efficiency() {
        let d65 = CIE_ILLUMINANT_D65.to_distribution();
        let efficiency = luminous_efficiency(&d65, None).unwrap();
        let efficacy = luminous_efficacy(&d65, None).unwrap();

        assert!(0.0 < efficiency && efficiency < 1.0);
        assert_relative_eq!(efficacy, efficiency * K_M);
    }

    #[test]
    fn test_degenerate() {
        let zeros = SpectralDistribution::zeros_spd();
        assert!(matches!(
            luminous_efficiency(&zeros, None),
            Err(SpectralError::DegenerateInput {
                operation: "luminous_efficiency",
                ..
            })
        ));
        assert_eq!(luminous_flux(&zeros, None, K_M), Ok(0.0));
    }

    #[test]
    fn test_disjoint() {
        let infrared = SpectralDistribution::ones(&SpectralShape::new(900.0, 1000.0, 10.0).unwrap());
        assert!(matches!(
            luminous_flux(&infrared, None, K_M),
            Err(SpectralError::Domain { .. })
        ));
    }

    #[test]
    fn test_custom_lef() {
        // A box-shaped efficiency function selecting 500nm to 600nm, with
        // half-width trapezoids on both edges
        let shape = SpectralShape::new(400.0, 700.0, 1.0).unwrap();
        let lef = SpectralDistribution::from_fn("box", &shape, |w| {
            if (500.0..=600.0).contains(&w) {
                1.0
            } else {
                0.0
            }
        });
        let flat = SpectralDistribution::ones(&shape);

        let efficiency = luminous_efficiency(&flat, Some(&lef)).unwrap();
        assert_relative_eq!(efficiency, 101.0 / 300.0, max_relative = 1e-12);
    }

    #[test]
    fn test_photometer_grids() {
        let f2 = normalised_f2();

        let default = Photometer::default();
        assert_eq!(default.lef().label(), CIE_1924_PHOTOPIC_LEF.label());

        // F2's samples are a subset of V(λ)'s. The efficiency function's grid
        // only adds zero-valued samples and two more trapezoids at either end.
        let on_lef = Photometer::photopic(
            Options::builder().grid(Grid::EfficiencyFunction).build(),
        );
        assert_relative_eq!(
            on_lef.luminous_flux(&f2).unwrap(),
            default.luminous_flux(&f2).unwrap(),
            max_relative = 1e-6
        );

        let rectangular = Photometer::photopic(
            Options::builder().quadrature(Quadrature::Rectangular).build(),
        );
        let efficiency = rectangular.luminous_efficiency(&f2).unwrap();
        assert!((efficiency - 0.493176239758).abs() > 1e-4);
        assert!(0.49 < efficiency && efficiency < 0.50);

        let si = Photometer::photopic(Options::with_si_efficacy());
        assert_relative_eq!(
            si.luminous_efficacy(&f2).unwrap(),
            default.luminous_efficiency(&f2).unwrap() * 683.002,
            max_relative = 1e-12
        );
    }
}
