//! Helper module with the options for photometric reductions.
//!
//! This module provides the options for a [`Photometer`](crate::Photometer)
//! and the corresponding builder.
//!
//!
//! # Example
//!
//! ```
//! # use colorimetry::opt::{Grid, Options};
//! # use colorimetry::{Quadrature, K_M_SI};
//! let options = Options::builder()
//!     .grid(Grid::EfficiencyFunction)
//!     .quadrature(Quadrature::Rectangular)
//!     .k_m(K_M_SI)
//!     .build();
//!
//! assert_eq!(options.grid(), Grid::EfficiencyFunction);
//! assert_eq!(options.k_m(), 683.002);
//! ```

use crate::photometry::{K_M, K_M_SI};
use crate::{Extrapolation, Float, Quadrature};

/// The grid on which photometric integrals are evaluated.
///
///   * __Distribution__ integrates on the sampled wavelengths of the spectral
///     distribution being measured. The luminous efficiency function is
///     resampled onto those wavelengths and treated as zero outside its own
///     domain. This is the default.
///
///   * __Efficiency function__ integrates on the luminous efficiency
///     function's wavelengths. The spectral distribution being measured is
///     resampled onto those wavelengths.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Grid {
    #[default]
    Distribution,
    EfficiencyFunction,
}

#[derive(Clone, Debug)]
struct OptionData {
    grid: Grid,
    extrapolation: Extrapolation,
    quadrature: Quadrature,
    k_m: Float,
}

impl OptionData {
    pub const fn new() -> Self {
        Self {
            grid: Grid::Distribution,
            extrapolation: Extrapolation::Fill(0.0, 0.0),
            quadrature: Quadrature::Trapezoidal,
            k_m: K_M,
        }
    }
}

/// A builder of options objects.
#[derive(Debug)]
pub struct OptionBuilder(OptionData);

impl OptionBuilder {
    /// Set the integration grid.
    pub fn grid(&mut self, grid: Grid) -> &mut Self {
        self.0.grid = grid;
        self
    }

    /// Set the extrapolation policy for the resampled operand.
    pub fn extrapolation(&mut self, extrapolation: Extrapolation) -> &mut Self {
        self.0.extrapolation = extrapolation;
        self
    }

    /// Set the quadrature rule.
    pub fn quadrature(&mut self, quadrature: Quadrature) -> &mut Self {
        self.0.quadrature = quadrature;
        self
    }

    /// Set the maximum luminous efficacy in lm/W.
    pub fn k_m(&mut self, k_m: Float) -> &mut Self {
        self.0.k_m = k_m;
        self
    }

    /// Instantiate the options.
    pub fn build(&self) -> Options {
        Options(self.0.clone())
    }
}

/// An options object.
#[derive(Clone, Debug)]
pub struct Options(OptionData);

impl Default for Options {
    fn default() -> Self {
        Options(OptionData::new())
    }
}

impl Options {
    /// Create a new builder with the default option values.
    pub fn builder() -> OptionBuilder {
        OptionBuilder(OptionData::new())
    }

    /// Instantiate the default options but with the maximum luminous efficacy
    /// derived from the SI definition of the candela.
    pub fn with_si_efficacy() -> Options {
        Self::builder().k_m(K_M_SI).build()
    }

    /// Get the integration grid.
    pub fn grid(&self) -> Grid {
        self.0.grid
    }

    /// Get the extrapolation policy for the resampled operand.
    pub fn extrapolation(&self) -> Extrapolation {
        self.0.extrapolation
    }

    /// Get the quadrature rule.
    pub fn quadrature(&self) -> Quadrature {
        self.0.quadrature
    }

    /// Get the maximum luminous efficacy in lm/W.
    pub fn k_m(&self) -> Float {
        self.0.k_m
    }
}

#[cfg(test)]
mod test {
    use super::{Grid, Options};
    use crate::{Extrapolation, Quadrature};

    #[test]
    fn test_defaults() {
        let options = Options::default();
        assert_eq!(options.grid(), Grid::Distribution);
        assert_eq!(options.extrapolation(), Extrapolation::Fill(0.0, 0.0));
        assert_eq!(options.quadrature(), Quadrature::Trapezoidal);
        assert_eq!(options.k_m(), 683.0);

        assert_eq!(Options::with_si_efficacy().k_m(), 683.002);
    }

    #[test]
    fn test_builder() {
        let mut builder = Options::builder();
        builder.quadrature(Quadrature::Rectangular);
        let first = builder.build();
        builder.extrapolation(Extrapolation::Constant);
        let second = builder.build();

        assert_eq!(first.quadrature(), Quadrature::Rectangular);
        assert_eq!(first.extrapolation(), Extrapolation::Fill(0.0, 0.0));
        assert_eq!(second.quadrature(), Quadrature::Rectangular);
        assert_eq!(second.extrapolation(), Extrapolation::Constant);
    }
}
