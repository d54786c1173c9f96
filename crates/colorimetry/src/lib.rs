//! # Colorimetry
//!
//! Colorimetry turns sampled spectra into photometric and colorimetric
//! quantities.
#![cfg_attr(
    not(feature = "pyffi"),
    doc = " This version of the API documentation **covers native Rust interfaces
only**. Enable the `pyffi` feature for the Python integration."
)]
#![cfg_attr(
    feature = "pyffi",
    doc = " This version of the API documentation **covers both Rust and Python
interfaces**."
)]
//!
//!
//! ## 1. Overview
//!
//! Colorimetry's main abstractions are:
//!
//!   * [`SpectralDistribution`] is an owned mapping from wavelengths to values,
//!     with an [`Interpolation`] method and an [`Extrapolation`] policy. It may
//!     be sampled irregularly. [`SpectralShape`] describes regular sampling.
//!   * The [`align`] and [`integrate`] modules **resample several
//!     distributions onto one grid** and **integrate their products**, with
//!     either [`Quadrature`] rule.
//!   * [`Photometer`] computes **luminous flux, efficiency, and efficacy**,
//!     configured through [`opt::Options`]. The free functions
//!     [`luminous_flux`], [`luminous_efficiency`], and [`luminous_efficacy`]
//!     use the CIE 1924 photopic luminous efficiency function.
//!   * [`spectral_to_xyz`] reduces spectra to **CIE XYZ tristimulus values**,
//!     which the [`models`] module projects into xyY, Lab, Luv, UCS, UVW, IPT,
//!     and their polar forms. The [`rgb`] module converts them to RGB.
//!   * The [`cie`] module contains the **reference datasets**, i.e., the
//!     photopic luminous efficiency function, the 1931 2º standard observer,
//!     illuminants D65, F2, and A, and common whitepoints.
//!
//!
//! ## 2. Example
//!
//! ```
//! # use colorimetry::cie::{CIE_1931_2DEG_OBSERVER, CIE_ILLUMINANT_F2};
//! # use colorimetry::{luminous_efficacy, spectral_to_xyz, SpectralDistribution};
//! # fn main() -> colorimetry::error::Result<()> {
//! let mut f2 = CIE_ILLUMINANT_F2.to_distribution();
//! f2.normalise(None)?;
//! let efficacy = luminous_efficacy(&f2, None)?;
//! assert!(336.8 < efficacy && efficacy < 336.9);
//!
//! let cmfs = CIE_1931_2DEG_OBSERVER.to_cmfs();
//! let reflector = SpectralDistribution::ones(&cmfs.shape());
//! let [_, y, _] = spectral_to_xyz(&reflector, &cmfs, Some(&f2))?;
//! assert!((y - 100.0).abs() < 1e-9);
//! # Ok(())
//! # }
//! ```
//!
//! The CIE 1924 photopic luminous efficiency function is defined from 360nm
//! to 830nm, whereas F2 is tabulated from 380nm to 780nm only. By default,
//! photometric integrals use the measured distribution's own wavelengths and
//! treat the efficiency function as zero outside its domain.
//! [`opt::Grid`] selects the efficiency function's wavelengths instead.
//!
//!
//! ## 3. Feature Flags
//!
//!   - **`f64`** (default) selects `f64` as [`Float`]. Without this feature,
//!     [`Float`] is `f32`.
//!   - **`pyffi`** enables the Python bindings through
//!     [PyO3](https://pyo3.rs/).
//!
//!
//! ## 4. Logging
//!
//! Colorimetry logs through the [`log`](https://docs.rs/log) facade but does
//! not install a logger. Interpolation downgrades and resampling are logged at
//! debug level, intermediate integrals at trace level.

#[cfg(feature = "pyffi")]
use pyo3::prelude::*;

/// The floating point type in use.
#[cfg(feature = "f64")]
pub type Float = f64;
/// The floating point type in use.
#[cfg(not(feature = "f64"))]
pub type Float = f32;

mod core;
pub mod align;
pub mod cie;
pub mod error;
pub mod integrate;
pub mod interpolation;
pub mod models;
pub mod opt;
mod photometry;
pub mod rgb;
mod shape;
mod spectrum;
mod tristimulus;

pub use core::Matrix;
pub use integrate::Quadrature;
pub use interpolation::{Extrapolation, Interpolation};
pub use models::ColourModel;
pub use photometry::{
    luminous_efficacy, luminous_efficiency, luminous_flux, Photometer, K_M, K_M_SI,
};
pub use shape::{SpectralShape, DEFAULT_SPECTRAL_SHAPE};
pub use spectrum::{
    ColourMatchingFunctions, SpectralDistribution, TabularDistribution, TabularObserver,
};
pub use tristimulus::{spectral_to_xyz, wavelength_to_xyz};

#[cfg(feature = "pyffi")]
#[pyfunction]
#[pyo3(name = "spectral_to_xyz", signature = (spd, illuminant=None))]
fn py_spectral_to_xyz(
    spd: PyRef<'_, SpectralDistribution>,
    illuminant: Option<PyRef<'_, SpectralDistribution>>,
) -> PyResult<[Float; 3]> {
    let cmfs = cie::CIE_1931_2DEG_OBSERVER.to_cmfs();
    Ok(spectral_to_xyz(&spd, &cmfs, illuminant.as_deref())?)
}

#[cfg(feature = "pyffi")]
#[pyfunction]
#[pyo3(name = "xyz_to_colourspace_model")]
fn py_xyz_to_colourspace_model(
    xyz: [Float; 3],
    illuminant: [Float; 2],
    model: &str,
) -> PyResult<Vec<Float>> {
    Ok(models::xyz_to_colourspace_model(&xyz, illuminant, model)?.into())
}

/// The Python extension module.
#[cfg(feature = "pyffi")]
#[pymodule]
pub fn colorimetry(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(photometry::python::py_luminous_flux, m)?)?;
    m.add_function(wrap_pyfunction!(photometry::python::py_luminous_efficiency, m)?)?;
    m.add_function(wrap_pyfunction!(photometry::python::py_luminous_efficacy, m)?)?;
    m.add_function(wrap_pyfunction!(py_spectral_to_xyz, m)?)?;
    m.add_function(wrap_pyfunction!(py_xyz_to_colourspace_model, m)?)?;

    m.add_class::<ColourModel>()?;
    m.add_class::<SpectralDistribution>()?;
    m.add_class::<SpectralShape>()?;

    // ---------------------------------------------------------------------- datasets
    m.add(
        "CIE_1924_PHOTOPIC_LEF",
        cie::CIE_1924_PHOTOPIC_LEF.to_distribution(),
    )?;
    m.add("CIE_ILLUMINANT_D65", cie::CIE_ILLUMINANT_D65.to_distribution())?;
    m.add("CIE_ILLUMINANT_F2", cie::CIE_ILLUMINANT_F2.to_distribution())?;
    m.add("DEFAULT_SPECTRAL_SHAPE", DEFAULT_SPECTRAL_SHAPE)?;
    m.add("K_M", K_M)?;
    m.add("K_M_SI", K_M_SI)?;

    Ok(())
}
