//! Regular wavelength grids.

#[cfg(feature = "pyffi")]
use pyo3::prelude::*;

use crate::error::{Result, SpectralError};
use crate::Float;

/// Tolerance for deciding whether a grid's end lies on an interval boundary.
const GRID_TOLERANCE: Float = 1e-9;

/// A regular wavelength grid in nanometers.
///
/// A shape describes the wavelengths `start`, `start + interval`, `start + 2 *
/// interval`, and so on up to and including `end`. If `end` does not fall
/// exactly on an interval boundary, the grid still ends with `end`, which
/// makes the last interval shorter. Either way, the grid covers exactly
/// `start..=end`.
#[cfg_attr(feature = "pyffi", pyclass(frozen, eq, module = "colorimetry"))]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpectralShape {
    start: Float,
    end: Float,
    interval: Float,
}

/// The default shape covering the visible spectrum at 1nm resolution.
pub const DEFAULT_SPECTRAL_SHAPE: SpectralShape = SpectralShape {
    start: 360.0,
    end: 780.0,
    interval: 1.0,
};

impl SpectralShape {
    /// Create a new spectral shape.
    ///
    /// This function validates that all three parameters are finite, that the
    /// interval is positive, and that the end does not precede the start.
    pub fn new(start: Float, end: Float, interval: Float) -> Result<Self> {
        if !start.is_finite() || !end.is_finite() || !interval.is_finite() {
            return Err(SpectralError::InvalidShape(format!(
                "{}..={} nm @ {} nm has non-finite parameters",
                start, end, interval
            )));
        } else if interval <= 0.0 {
            return Err(SpectralError::InvalidShape(format!(
                "interval {} nm is not positive",
                interval
            )));
        } else if end < start {
            return Err(SpectralError::InvalidShape(format!(
                "end {} nm precedes start {} nm",
                end, start
            )));
        }

        Ok(Self {
            start,
            end,
            interval,
        })
    }

    /// Get an iterator over this shape's wavelengths.
    pub fn iter(&self) -> impl Iterator<Item = Float> + '_ {
        (0..self.len()).map(|index| self.wavelength(index))
    }

    /// Get this shape's wavelengths.
    pub fn wavelengths(&self) -> Vec<Float> {
        self.iter().collect()
    }

    /// Get the number of whole intervals between start and end.
    fn steps(&self) -> usize {
        ((self.end - self.start) / self.interval + GRID_TOLERANCE).floor() as usize
    }
}

#[cfg_attr(feature = "pyffi", pymethods)]
impl SpectralShape {
    /// Create a new spectral shape. <i class=python-only>Python only!</i>
    #[cfg(feature = "pyffi")]
    #[new]
    pub fn py_new(start: Float, end: Float, interval: Float) -> PyResult<Self> {
        Ok(Self::new(start, end, interval)?)
    }

    /// Get the first wavelength.
    #[inline]
    pub fn start(&self) -> Float {
        self.start
    }

    /// Get the last wavelength.
    #[inline]
    pub fn end(&self) -> Float {
        self.end
    }

    /// Get the distance between adjacent wavelengths.
    #[inline]
    pub fn interval(&self) -> Float {
        self.interval
    }

    /// Get the number of wavelengths in this shape.
    pub fn len(&self) -> usize {
        let steps = self.steps();
        let last = (steps as Float).mul_add(self.interval, self.start);
        if self.end - last <= GRID_TOLERANCE * self.interval {
            steps + 1
        } else {
            steps + 2
        }
    }

    /// Determine whether this shape is empty, which it never is.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Get the wavelength with the given index.
    ///
    /// Wavelengths are computed by multiplication, not repeated addition, so
    /// that grids with fractional intervals do not drift. The last wavelength
    /// is `end` itself.
    #[inline]
    pub fn wavelength(&self, index: usize) -> Float {
        if index + 1 == self.len() {
            self.end
        } else {
            (index as Float).mul_add(self.interval, self.start)
        }
    }

    /// Determine whether the given wavelength lies within `start..=end`.
    pub fn contains(&self, wavelength: Float) -> bool {
        self.start <= wavelength && wavelength <= self.end
    }

    /// Get a debug representation. <i class=python-only>Python only!</i>
    #[cfg(feature = "pyffi")]
    pub fn __repr__(&self) -> String {
        format!("{:?}", self)
    }
}

impl Default for SpectralShape {
    fn default() -> Self {
        DEFAULT_SPECTRAL_SHAPE
    }
}

impl std::fmt::Display for SpectralShape {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}..={} nm @ {} nm",
            self.start, self.end, self.interval
        )
    }
}

// --------------------------------------------------------------------------------------------------------------------
