//! Interpolation and extrapolation of sampled spectral data.
//!
//! Spectral data is usually tabulated at 5nm or 10nm intervals, but
//! computations frequently need values in between. This module provides two
//! interpolators:
//!
//!   * [`SpragueInterpolator`] implements Sprague's (1880) fifth-order
//!     polynomial interpolation, as recommended by the CIE for uniformly
//!     spaced spectral data. It requires at least six samples.
//!   * [`LinearInterpolator`] implements piecewise linear interpolation. It
//!     works for any spacing and any number of samples.
//!
//! [`Interpolator`] selects between the two based on the requested
//! [`Interpolation`] and the data at hand. If Sprague interpolation is
//! requested but the data is not uniformly spaced or has fewer than six
//! samples, it falls back onto linear interpolation and logs the downgrade at
//! debug level.
//!
//! Outside the sampled domain, [`Extrapolation`] determines the result.

use crate::error::{Result, SpectralError};
use crate::Float;

/// The minimum number of samples for Sprague interpolation.
pub const SPRAGUE_MINIMUM_SAMPLES: usize = 6;

/// Relative tolerance when comparing sample spacings.
const UNIFORMITY_TOLERANCE: Float = 1e-9;

/// An interpolation method.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Interpolation {
    /// Sprague's fifth-order polynomial interpolation.
    #[default]
    Sprague,
    /// Piecewise linear interpolation.
    Linear,
}

impl Interpolation {
    /// Get a human-readable name.
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Sprague => "Sprague",
            Self::Linear => "linear",
        }
    }
}

/// An extrapolation policy for wavelengths outside a distribution's domain.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum Extrapolation {
    /// Repeat the value at the nearest boundary.
    #[default]
    Constant,
    /// Extend the line through the two samples nearest the boundary.
    Linear,
    /// Use the given left and right values.
    Fill(Float, Float),
    /// Treat queries outside the domain as errors.
    Forbid,
}

/// Determine whether the wavelengths are uniformly spaced.
///
/// Zero or one wavelengths count as uniform.
pub fn is_uniform(wavelengths: &[Float]) -> bool {
    if wavelengths.len() < 3 {
        return true;
    }

    let step = wavelengths[1] - wavelengths[0];
    let tolerance = step.abs() * UNIFORMITY_TOLERANCE;
    wavelengths
        .windows(2)
        .all(|pair| ((pair[1] - pair[0]) - step).abs() <= tolerance)
}

/// Find the index of the interval containing the given wavelength.
///
/// The result `i` satisfies `wavelengths[i] <= wavelength <
/// wavelengths[i + 1]`, except that wavelengths at or beyond the last sample
/// map onto the last interval. The wavelengths must have at least two entries.
fn find_interval(wavelengths: &[Float], wavelength: Float) -> usize {
    let after = wavelengths.partition_point(|w| *w <= wavelength);
    after.saturating_sub(1).min(wavelengths.len() - 2)
}

// --------------------------------------------------------------------------------------------------------------------

/// A piecewise linear interpolator.
#[derive(Clone, Debug)]
pub struct LinearInterpolator<'a> {
    wavelengths: &'a [Float],
    values: &'a [Float],
}

impl<'a> LinearInterpolator<'a> {
    /// Create a new linear interpolator.
    ///
    /// Both slices must have the same, non-zero length and the wavelengths must
    /// be strictly increasing. [`SpectralDistribution`](crate::SpectralDistribution)
    /// guarantees as much.
    pub fn new(wavelengths: &'a [Float], values: &'a [Float]) -> Self {
        Self {
            wavelengths,
            values,
        }
    }

    /// Evaluate the interpolator at the given wavelength.
    pub fn evaluate(&self, wavelength: Float) -> Float {
        if self.wavelengths.len() == 1 {
            return self.values[0];
        }

        let index = find_interval(self.wavelengths, wavelength);
        let (x0, x1) = (self.wavelengths[index], self.wavelengths[index + 1]);
        let (y0, y1) = (self.values[index], self.values[index + 1]);
        let t = (wavelength - x0) / (x1 - x0);
        t.mul_add(y1 - y0, y0)
    }
}

// --------------------------------------------------------------------------------------------------------------------

/// The coefficients for extending the data by two samples on either side.
///
/// Rows one and two compute the two values before the first sample from the
/// first six samples. Rows three and four compute the two values after the
/// last sample from the last six samples. All coefficients are divided by 209.
const SPRAGUE_PADDING: [[Float; 6]; 4] = [
    [884.0, -1960.0, 3033.0, -2648.0, 1080.0, -180.0],
    [508.0, -540.0, 488.0, -367.0, 144.0, -24.0],
    [-24.0, 144.0, -367.0, 488.0, -540.0, 508.0],
    [-180.0, 1080.0, -2648.0, 3033.0, -1960.0, 884.0],
];

/// Sprague's fifth-order polynomial interpolator.
///
/// The interpolator extends the data by two values on either side, which
/// gives every interval the six surrounding samples needed for computing the
/// polynomial's coefficients.
#[derive(Clone, Debug)]
pub struct SpragueInterpolator<'a> {
    wavelengths: &'a [Float],
    padded: Vec<Float>,
}

impl<'a> SpragueInterpolator<'a> {
    /// Create a new Sprague interpolator.
    ///
    /// This function returns `None` if there are fewer than six samples or the
    /// samples are not uniformly spaced.
    pub fn new(wavelengths: &'a [Float], values: &[Float]) -> Option<Self> {
        let count = values.len();
        if count < SPRAGUE_MINIMUM_SAMPLES
            || wavelengths.len() != count
            || !is_uniform(wavelengths)
        {
            return None;
        }

        let pad = |row: &[Float; 6], samples: &[Float]| -> Float {
            row.iter()
                .zip(samples.iter())
                .map(|(c, v)| c * v)
                .sum::<Float>()
                / 209.0
        };

        let head = &values[..6];
        let tail = &values[count - 6..];

        let mut padded = Vec::with_capacity(count + 4);
        padded.push(pad(&SPRAGUE_PADDING[0], head));
        padded.push(pad(&SPRAGUE_PADDING[1], head));
        padded.extend_from_slice(values);
        padded.push(pad(&SPRAGUE_PADDING[2], tail));
        padded.push(pad(&SPRAGUE_PADDING[3], tail));

        Some(Self {
            wavelengths,
            padded,
        })
    }

    /// Evaluate the interpolator at the given wavelength.
    pub fn evaluate(&self, wavelength: Float) -> Float {
        let index = find_interval(self.wavelengths, wavelength);
        let (x0, x1) = (self.wavelengths[index], self.wavelengths[index + 1]);
        let x = (wavelength - x0) / (x1 - x0);

        // The padded data is offset by two.
        let r = &self.padded[index..index + 6];

        let a0 = r[2];
        let a1 = (2.0 * r[0] - 16.0 * r[1] + 16.0 * r[3] - 2.0 * r[4]) / 24.0;
        let a2 = (-r[0] + 16.0 * r[1] - 30.0 * r[2] + 16.0 * r[3] - r[4]) / 24.0;
        let a3 = (-9.0 * r[0] + 39.0 * r[1] - 70.0 * r[2] + 66.0 * r[3] - 33.0 * r[4]
            + 7.0 * r[5])
            / 24.0;
        let a4 = (13.0 * r[0] - 64.0 * r[1] + 126.0 * r[2] - 124.0 * r[3] + 61.0 * r[4]
            - 12.0 * r[5])
            / 24.0;
        let a5 = (-5.0 * r[0] + 25.0 * r[1] - 50.0 * r[2] + 50.0 * r[3] - 25.0 * r[4]
            + 5.0 * r[5])
            / 24.0;

        // Horner's scheme
        a5.mul_add(x, a4)
            .mul_add(x, a3)
            .mul_add(x, a2)
            .mul_add(x, a1)
            .mul_add(x, a0)
    }
}

// --------------------------------------------------------------------------------------------------------------------

/// An interpolator with the method resolved for the data at hand.
#[derive(Clone, Debug)]
pub enum Interpolator<'a> {
    Sprague(SpragueInterpolator<'a>),
    Linear(LinearInterpolator<'a>),
}

impl<'a> Interpolator<'a> {
    /// Create a new interpolator.
    ///
    /// If Sprague interpolation is requested but not applicable to the data,
    /// this function falls back onto linear interpolation. The label is only
    /// used for the log message reporting the downgrade.
    pub fn new(
        method: Interpolation,
        label: &str,
        wavelengths: &'a [Float],
        values: &'a [Float],
    ) -> Self {
        match method {
            Interpolation::Linear => Self::Linear(LinearInterpolator::new(wavelengths, values)),
            Interpolation::Sprague => match SpragueInterpolator::new(wavelengths, values) {
                Some(sprague) => Self::Sprague(sprague),
                None => {
                    log::debug!(
                        "{}: Sprague interpolation needs at least {} uniformly spaced samples \
                         but got {}{}; falling back onto linear interpolation",
                        label,
                        SPRAGUE_MINIMUM_SAMPLES,
                        values.len(),
                        if is_uniform(wavelengths) {
                            ""
                        } else {
                            " non-uniformly spaced ones"
                        }
                    );
                    Self::Linear(LinearInterpolator::new(wavelengths, values))
                }
            },
        }
    }

    /// Get the method actually used by this interpolator.
    pub fn method(&self) -> Interpolation {
        match self {
            Self::Sprague(_) => Interpolation::Sprague,
            Self::Linear(_) => Interpolation::Linear,
        }
    }

    /// Evaluate the interpolator at the given wavelength.
    pub fn evaluate(&self, wavelength: Float) -> Float {
        match self {
            Self::Sprague(sprague) => sprague.evaluate(wavelength),
            Self::Linear(linear) => linear.evaluate(wavelength),
        }
    }
}

/// Determine the interpolation method effectively used for the given
/// wavelengths.
pub fn effective_interpolation(method: Interpolation, wavelengths: &[Float]) -> Interpolation {
    match method {
        Interpolation::Sprague
            if wavelengths.len() >= SPRAGUE_MINIMUM_SAMPLES && is_uniform(wavelengths) =>
        {
            Interpolation::Sprague
        }
        _ => Interpolation::Linear,
    }
}

// --------------------------------------------------------------------------------------------------------------------

/// Extrapolate a value for a wavelength outside the domain.
///
/// The wavelengths must be strictly increasing and non-empty. The label and
/// operation only serve the error message.
pub(crate) fn extrapolate(
    policy: Extrapolation,
    operation: &'static str,
    label: &str,
    wavelengths: &[Float],
    values: &[Float],
    wavelength: Float,
) -> Result<Float> {
    let last = wavelengths.len() - 1;
    let is_left = wavelength < wavelengths[0];

    match policy {
        Extrapolation::Constant => Ok(if is_left { values[0] } else { values[last] }),
        Extrapolation::Linear => {
            if last == 0 {
                return Ok(values[0]);
            }

            let (i, j) = if is_left { (0, 1) } else { (last - 1, last) };
            let slope = (values[j] - values[i]) / (wavelengths[j] - wavelengths[i]);
            Ok(slope.mul_add(wavelength - wavelengths[i], values[i]))
        }
        Extrapolation::Fill(left, right) => Ok(if is_left { left } else { right }),
        Extrapolation::Forbid => Err(SpectralError::domain(
            operation,
            format!(
                "{} nm lies outside domain {}..={} nm of {}",
                wavelength, wavelengths[0], wavelengths[last], label
            ),
        )),
    }
}

// --------------------------------------------------------------------------------------------------------------------
