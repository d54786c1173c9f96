//! Spectral distributions.
//!
//! [`SpectralDistribution`] is an owned, ordered mapping from wavelengths in
//! nanometers to values. Its wavelengths are strictly increasing, but they need
//! not be uniformly spaced. Each distribution carries an [`Interpolation`]
//! method and an [`Extrapolation`] policy, which determine the values for
//! wavelengths that are not sampled. A distribution's domain is the closed
//! range from its smallest to its largest wavelength.
//!
//! The reference datasets in this crate are `'static` tables, i.e.,
//! [`TabularDistribution`] and [`TabularObserver`]. Both materialize into
//! freshly allocated, owned values, which may then be normalized or otherwise
//! updated without ever affecting the shared table.
//!
//! [`ColourMatchingFunctions`] bundles three distributions with the same
//! wavelengths, namely the x̄, ȳ, and z̄ functions of a standard observer.

#[cfg(feature = "pyffi")]
use pyo3::prelude::*;

use crate::error::{Result, SpectralError};
use crate::interpolation::{effective_interpolation, extrapolate, is_uniform, Interpolator};
use crate::shape::{SpectralShape, DEFAULT_SPECTRAL_SHAPE};
use crate::{Extrapolation, Float, Interpolation};

/// A sampled spectral distribution.
#[cfg_attr(feature = "pyffi", pyclass(module = "colorimetry"))]
#[derive(Clone, Debug, PartialEq)]
pub struct SpectralDistribution {
    label: String,
    wavelengths: Vec<Float>,
    values: Vec<Float>,
    interpolation: Interpolation,
    extrapolation: Extrapolation,
}

impl SpectralDistribution {
    /// Create a new spectral distribution.
    ///
    /// This function validates that wavelengths and values have the same,
    /// non-zero length, that all wavelengths are finite, and that they are
    /// strictly increasing.
    pub fn new(
        label: impl Into<String>,
        wavelengths: Vec<Float>,
        values: Vec<Float>,
    ) -> Result<Self> {
        let label = label.into();

        if wavelengths.len() != values.len() {
            return Err(SpectralError::InvalidDistribution(format!(
                "{} has {} wavelengths but {} values",
                label,
                wavelengths.len(),
                values.len()
            )));
        } else if wavelengths.is_empty() {
            return Err(SpectralError::InvalidDistribution(format!(
                "{} has no samples",
                label
            )));
        } else if let Some(wavelength) = wavelengths.iter().find(|w| !w.is_finite()) {
            return Err(SpectralError::InvalidDistribution(format!(
                "{} has non-finite wavelength {}",
                label, wavelength
            )));
        } else if let Some(pair) = wavelengths.windows(2).find(|pair| pair[1] <= pair[0]) {
            return Err(SpectralError::InvalidDistribution(format!(
                "{} has wavelength {} nm after {} nm",
                label, pair[1], pair[0]
            )));
        }

        Ok(Self::from_raw_parts(label, wavelengths, values))
    }

    /// Create a new spectral distribution from unordered wavelength, value
    /// pairs.
    ///
    /// The pairs are sorted by wavelength. Duplicate wavelengths are an error.
    pub fn from_pairs(
        label: impl Into<String>,
        pairs: impl IntoIterator<Item = (Float, Float)>,
    ) -> Result<Self> {
        let mut pairs: Vec<(Float, Float)> = pairs.into_iter().collect();
        pairs.sort_by(|a, b| a.0.total_cmp(&b.0));
        let (wavelengths, values) = pairs.into_iter().unzip();
        Self::new(label, wavelengths, values)
    }

    /// Create a new spectral distribution with the given shape and values.
    pub fn from_shape(
        label: impl Into<String>,
        shape: &SpectralShape,
        values: Vec<Float>,
    ) -> Result<Self> {
        Self::new(label, shape.wavelengths(), values)
    }

    /// Create a new spectral distribution with the given shape and all values
    /// computed by the given function of wavelength.
    pub fn from_fn(
        label: impl Into<String>,
        shape: &SpectralShape,
        f: impl Fn(Float) -> Float,
    ) -> Self {
        let wavelengths = shape.wavelengths();
        let values = wavelengths.iter().map(|w| f(*w)).collect();
        Self::from_raw_parts(label.into(), wavelengths, values)
    }

    /// Create a new spectral distribution with the given shape and all values
    /// zero.
    pub fn zeros(shape: &SpectralShape) -> Self {
        Self::from_fn("zeros", shape, |_| 0.0)
    }

    /// Create a new spectral distribution with the given shape and all values
    /// one.
    pub fn ones(shape: &SpectralShape) -> Self {
        Self::from_fn("ones", shape, |_| 1.0)
    }

    /// Create a new all-zero spectral distribution covering the visible
    /// spectrum from 360nm to 780nm at 1nm resolution.
    ///
    /// Setting a single wavelength to a non-zero value results in a
    /// monochromatic stimulus:
    ///
    /// ```
    /// # use colorimetry::SpectralDistribution;
    /// let mut spike = SpectralDistribution::zeros_spd();
    /// spike.set(555.0, 1.0);
    /// assert_eq!(spike.get(555.0), Some(1.0));
    /// assert_eq!(spike.get(556.0), Some(0.0));
    /// ```
    pub fn zeros_spd() -> Self {
        Self::zeros(&DEFAULT_SPECTRAL_SHAPE)
    }

    /// Create a new spectral distribution without validation.
    pub(crate) fn from_raw_parts(label: String, wavelengths: Vec<Float>, values: Vec<Float>) -> Self {
        Self {
            label,
            wavelengths,
            values,
            interpolation: Interpolation::default(),
            extrapolation: Extrapolation::default(),
        }
    }

    /// Update the label.
    #[must_use]
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    /// Update the interpolation method.
    #[must_use]
    pub fn with_interpolation(mut self, interpolation: Interpolation) -> Self {
        self.interpolation = interpolation;
        self
    }

    /// Update the extrapolation policy.
    #[must_use]
    pub fn with_extrapolation(mut self, extrapolation: Extrapolation) -> Self {
        self.extrapolation = extrapolation;
        self
    }

    /// Get this distribution's descriptive label.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Get the requested interpolation method.
    pub fn interpolation(&self) -> Interpolation {
        self.interpolation
    }

    /// Get the interpolation method actually used for this distribution.
    ///
    /// Sprague interpolation requires at least six uniformly spaced samples.
    /// If the distribution does not meet these requirements, queries fall back
    /// onto linear interpolation.
    pub fn effective_interpolation(&self) -> Interpolation {
        effective_interpolation(self.interpolation, &self.wavelengths)
    }

    /// Get the extrapolation policy.
    pub fn extrapolation(&self) -> Extrapolation {
        self.extrapolation
    }

    /// Get the number of samples.
    pub fn len(&self) -> usize {
        self.wavelengths.len()
    }

    /// Determine whether this distribution is empty, which it never is.
    pub fn is_empty(&self) -> bool {
        self.wavelengths.is_empty()
    }

    /// Get the sampled wavelengths.
    pub fn wavelengths(&self) -> &[Float] {
        &self.wavelengths
    }

    /// Get the sampled values.
    pub fn values(&self) -> &[Float] {
        &self.values
    }

    /// Get an iterator over the wavelength, value pairs.
    pub fn iter(&self) -> impl Iterator<Item = (Float, Float)> + '_ {
        self.wavelengths
            .iter()
            .copied()
            .zip(self.values.iter().copied())
    }

    /// Get the smallest and largest wavelengths.
    pub fn domain(&self) -> (Float, Float) {
        (self.wavelengths[0], self.wavelengths[self.wavelengths.len() - 1])
    }

    /// Determine whether the samples are uniformly spaced.
    pub fn is_uniform(&self) -> bool {
        is_uniform(&self.wavelengths)
    }

    /// Get this distribution's shape.
    ///
    /// For non-uniformly spaced samples, the interval is the largest one that
    /// evenly divides the distances between adjacent wavelengths, so that the
    /// shape's grid includes every sample. If that interval would be smaller
    /// than a thousandth of the smallest distance, the smallest distance is
    /// used instead. For a single sample, the interval is 1nm.
    pub fn shape(&self) -> SpectralShape {
        let (start, end) = self.domain();
        let mut gaps = self.wavelengths.windows(2).map(|pair| pair[1] - pair[0]);
        let interval = match gaps.clone().reduce(Float::min) {
            Some(smallest) => gaps
                .try_fold(smallest, |common, gap| {
                    let common = common_divisor(common, gap, smallest * 1e-6);
                    (smallest * 1e-3 <= common).then_some(common)
                })
                .unwrap_or(smallest),
            None => 1.0,
        };

        // Strictly increasing wavelengths make for a valid shape.
        SpectralShape::new(start, end, interval).unwrap_or(DEFAULT_SPECTRAL_SHAPE)
    }

    fn find(&self, wavelength: Float) -> std::result::Result<usize, usize> {
        self.wavelengths
            .binary_search_by(|sampled| sampled.total_cmp(&wavelength))
    }

    /// Get the value for the given wavelength without interpolation.
    ///
    /// This method returns `None` if the wavelength is not sampled.
    pub fn get(&self, wavelength: Float) -> Option<Float> {
        self.find(wavelength).ok().map(|index| self.values[index])
    }

    /// Get the value for the given wavelength.
    ///
    /// If the wavelength is sampled, this method returns the sampled value. If
    /// it lies within the domain, this method interpolates. Otherwise, it
    /// extrapolates, which fails only if the extrapolation policy is
    /// [`Extrapolation::Forbid`].
    pub fn value(&self, wavelength: Float) -> Result<Float> {
        if let Some(value) = self.get(wavelength) {
            return Ok(value);
        }

        let (start, end) = self.domain();
        if start < wavelength && wavelength < end {
            Ok(self.interpolator().evaluate(wavelength))
        } else {
            extrapolate(
                self.extrapolation,
                "value",
                &self.label,
                &self.wavelengths,
                &self.values,
                wavelength,
            )
        }
    }

    /// Get the values for the given wavelengths.
    ///
    /// This method is equivalent to calling [`SpectralDistribution::value`]
    /// for each wavelength, but prepares the interpolator only once.
    pub fn values_at(&self, wavelengths: &[Float]) -> Result<Vec<Float>> {
        self.resample("values_at", wavelengths)
    }

    fn interpolator(&self) -> Interpolator<'_> {
        Interpolator::new(
            self.interpolation,
            &self.label,
            &self.wavelengths,
            &self.values,
        )
    }

    fn resample(&self, operation: &'static str, wavelengths: &[Float]) -> Result<Vec<Float>> {
        let interpolator = self.interpolator();
        let (start, end) = self.domain();

        wavelengths
            .iter()
            .map(|&wavelength| {
                if let Some(value) = self.get(wavelength) {
                    Ok(value)
                } else if start < wavelength && wavelength < end {
                    Ok(interpolator.evaluate(wavelength))
                } else {
                    extrapolate(
                        self.extrapolation,
                        operation,
                        &self.label,
                        &self.wavelengths,
                        &self.values,
                        wavelength,
                    )
                }
            })
            .collect()
    }

    /// Set the value for the given wavelength.
    ///
    /// If the wavelength is not yet sampled, this method inserts a new sample
    /// while preserving the order of wavelengths. Non-finite wavelengths are
    /// ignored.
    pub fn set(&mut self, wavelength: Float, value: Float) -> &mut Self {
        if !wavelength.is_finite() {
            log::warn!(
                "{}: ignoring value for non-finite wavelength {}",
                self.label,
                wavelength
            );
            return self;
        }

        match self.find(wavelength) {
            Ok(index) => self.values[index] = value,
            Err(index) => {
                self.wavelengths.insert(index, wavelength);
                self.values.insert(index, value);
            }
        }
        self
    }

    /// Get the largest value.
    pub fn maximum(&self) -> Float {
        self.values.iter().copied().fold(Float::NEG_INFINITY, Float::max)
    }

    /// Get the smallest value.
    pub fn minimum(&self) -> Float {
        self.values.iter().copied().fold(Float::INFINITY, Float::min)
    }

    /// Normalize this distribution.
    ///
    /// This method divides all values by the given factor or, if there is
    /// none, by the largest value, so that the largest value becomes one. It
    /// updates this distribution in place and returns it for method chaining.
    /// A zero or non-finite factor leaves the distribution unchanged and
    /// results in an error.
    pub fn normalise(&mut self, factor: Option<Float>) -> Result<&mut Self> {
        let factor = factor.unwrap_or_else(|| self.maximum());
        if factor == 0.0 || !factor.is_finite() {
            return Err(SpectralError::degenerate("normalise", self.label.clone()));
        }

        for value in self.values.iter_mut() {
            *value /= factor;
        }
        Ok(self)
    }

    /// Align this distribution with the given shape.
    ///
    /// This method returns a new distribution, whose wavelengths are exactly
    /// those of the shape. Sampled wavelengths keep their values, wavelengths
    /// within the domain are interpolated, and wavelengths outside the domain
    /// are extrapolated. If the shape does not overlap with this distribution's
    /// domain at all, this method fails with a domain error instead of
    /// fabricating values.
    pub fn align(&self, shape: &SpectralShape) -> Result<Self> {
        self.align_onto("align", &shape.to_string(), shape.wavelengths())
    }

    /// Align this distribution with the wavelengths of another distribution.
    ///
    /// Unlike [`SpectralDistribution::align`], this method also supports
    /// non-uniformly spaced targets.
    pub fn align_with(&self, other: &SpectralDistribution) -> Result<Self> {
        let (start, end) = other.domain();
        self.align_onto(
            "align_with",
            &format!("{} ({}..={} nm)", other.label, start, end),
            other.wavelengths.clone(),
        )
    }

    fn align_onto(
        &self,
        operation: &'static str,
        target: &str,
        wavelengths: Vec<Float>,
    ) -> Result<Self> {
        let (start, end) = self.domain();
        let (first, last) = match (wavelengths.first(), wavelengths.last()) {
            (Some(first), Some(last)) => (*first, *last),
            _ => {
                return Err(SpectralError::domain(
                    operation,
                    format!("{} has no wavelengths", target),
                ))
            }
        };

        if last < start || end < first {
            return Err(SpectralError::domain(
                operation,
                format!(
                    "{} does not overlap domain {}..={} nm of {}",
                    target, start, end, self.label
                ),
            ));
        }

        log::debug!(
            "{}: aligning {}..={} nm onto {} with {} interpolation",
            self.label,
            start,
            end,
            target,
            self.effective_interpolation().name()
        );

        let values = self.resample(operation, &wavelengths)?;
        Ok(Self {
            label: self.label.clone(),
            wavelengths,
            values,
            interpolation: self.interpolation,
            extrapolation: self.extrapolation,
        })
    }
}

#[cfg(feature = "pyffi")]
#[pymethods]
impl SpectralDistribution {
    /// Create a new spectral distribution. <i class=python-only>Python only!</i>
    #[new]
    pub fn py_new(label: String, wavelengths: Vec<Float>, values: Vec<Float>) -> PyResult<Self> {
        Ok(Self::new(label, wavelengths, values)?)
    }

    /// Get the label. <i class=python-only>Python only!</i>
    #[pyo3(name = "label")]
    pub fn py_label(&self) -> String {
        self.label.clone()
    }

    /// Get the wavelengths. <i class=python-only>Python only!</i>
    #[pyo3(name = "wavelengths")]
    pub fn py_wavelengths(&self) -> Vec<Float> {
        self.wavelengths.clone()
    }

    /// Get the values. <i class=python-only>Python only!</i>
    #[pyo3(name = "values")]
    pub fn py_values(&self) -> Vec<Float> {
        self.values.clone()
    }

    /// Get the shape. <i class=python-only>Python only!</i>
    #[pyo3(name = "shape")]
    pub fn py_shape(&self) -> SpectralShape {
        self.shape()
    }

    /// Get the interpolated value. <i class=python-only>Python only!</i>
    #[pyo3(name = "value")]
    pub fn py_value(&self, wavelength: Float) -> PyResult<Float> {
        Ok(self.value(wavelength)?)
    }

    /// Set the value. <i class=python-only>Python only!</i>
    #[pyo3(name = "set")]
    pub fn py_set(&mut self, wavelength: Float, value: Float) {
        self.set(wavelength, value);
    }

    /// Normalize in place. <i class=python-only>Python only!</i>
    #[pyo3(name = "normalise", signature = (factor=None))]
    pub fn py_normalise(&mut self, factor: Option<Float>) -> PyResult<()> {
        self.normalise(factor)?;
        Ok(())
    }

    /// Align with the shape. <i class=python-only>Python only!</i>
    #[pyo3(name = "align")]
    pub fn py_align(&self, shape: &SpectralShape) -> PyResult<Self> {
        Ok(self.align(shape)?)
    }

    /// Get the number of samples. <i class=python-only>Python only!</i>
    pub fn __len__(&self) -> usize {
        self.len()
    }

    /// Get the sampled value. <i class=python-only>Python only!</i>
    pub fn __getitem__(&self, wavelength: Float) -> PyResult<Float> {
        self.get(wavelength).ok_or_else(|| {
            pyo3::exceptions::PyKeyError::new_err(format!(
                "{} has no sample at {} nm",
                self.label, wavelength
            ))
        })
    }

    /// Get a debug representation. <i class=python-only>Python only!</i>
    pub fn __repr__(&self) -> String {
        format!(
            "SpectralDistribution({:?}, {} samples, {})",
            self.label,
            self.len(),
            self.shape()
        )
    }
}

/// Find the largest interval that evenly divides both distances, treating
/// remainders within the tolerance of zero or the divisor as zero.
fn common_divisor(mut a: Float, mut b: Float, tolerance: Float) -> Float {
    while tolerance < b {
        let remainder = a % b;
        a = b;
        b = if a - remainder <= tolerance { 0.0 } else { remainder };
    }
    a
}

// --------------------------------------------------------------------------------------------------------------------

/// A table-driven spectral distribution with `'static` data.
#[derive(Clone, Debug)]
pub struct TabularDistribution {
    label: &'static str,
    start: usize,
    interval: usize,
    checksum: Float,
    data: &'static [Float],
}

impl TabularDistribution {
    /// Create a new tabular distribution.
    ///
    /// The checksum is the sum of all values. It must not be computed on the
    /// fly.
    ///
    /// # Panics
    ///
    /// This function panics if the data is empty or the interval is zero. For
    /// a table in a static, that is a compile-time error.
    pub const fn new(
        label: &'static str,
        start: usize,
        interval: usize,
        checksum: Float,
        data: &'static [Float],
    ) -> Self {
        assert!(!data.is_empty(), "tabular distribution has no data");
        assert!(0 < interval, "tabular distribution has zero interval");
        Self {
            label,
            start,
            interval,
            checksum,
            data,
        }
    }

    /// Get the label.
    pub const fn label(&self) -> &'static str {
        self.label
    }

    /// Get the first wavelength.
    pub const fn start(&self) -> usize {
        self.start
    }

    /// Get the distance between wavelengths.
    pub const fn interval(&self) -> usize {
        self.interval
    }

    /// Get the last wavelength.
    pub const fn end(&self) -> usize {
        self.start + (self.data.len() - 1) * self.interval
    }

    /// Get the number of entries.
    pub const fn len(&self) -> usize {
        self.data.len()
    }

    /// Determine whether the table is empty.
    pub const fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Get the checksum.
    pub const fn checksum(&self) -> Float {
        self.checksum
    }

    /// Get the raw data.
    pub const fn data(&self) -> &'static [Float] {
        self.data
    }

    /// Get the shape.
    pub fn shape(&self) -> SpectralShape {
        SpectralShape::new(
            self.start as Float,
            self.end() as Float,
            self.interval as Float,
        )
        .unwrap_or(DEFAULT_SPECTRAL_SHAPE)
    }

    /// Get the value for the given wavelength, if tabulated.
    pub fn at(&self, wavelength: usize) -> Option<Float> {
        if wavelength < self.start || (wavelength - self.start) % self.interval != 0 {
            return None;
        }
        self.data
            .get((wavelength - self.start) / self.interval)
            .copied()
    }

    /// Materialize this table as an owned spectral distribution.
    pub fn to_distribution(&self) -> SpectralDistribution {
        let wavelengths = (0..self.data.len())
            .map(|index| (self.start + index * self.interval) as Float)
            .collect();
        SpectralDistribution::from_raw_parts(self.label.to_string(), wavelengths, self.data.to_vec())
    }
}

impl From<&TabularDistribution> for SpectralDistribution {
    fn from(value: &TabularDistribution) -> Self {
        value.to_distribution()
    }
}

// --------------------------------------------------------------------------------------------------------------------

/// A table-driven standard observer with `'static` data.
///
/// The CIE's standard observers, or colour matching functions, model human
/// colour perception. Since humans are trichromatic, the per-wavelength values of
/// standard observers are triples of floating point numbers.
#[derive(Clone, Debug)]
pub struct TabularObserver {
    label: &'static str,
    start: usize,
    interval: usize,
    checksum: [Float; 3],
    data: &'static [[Float; 3]],
}

impl TabularObserver {
    /// Create a new tabular observer.
    ///
    /// # Panics
    ///
    /// This function panics if the data is empty or the interval is zero.
    pub const fn new(
        label: &'static str,
        start: usize,
        interval: usize,
        checksum: [Float; 3],
        data: &'static [[Float; 3]],
    ) -> Self {
        assert!(!data.is_empty(), "tabular observer has no data");
        assert!(0 < interval, "tabular observer has zero interval");
        Self {
            label,
            start,
            interval,
            checksum,
            data,
        }
    }

    /// Get the label.
    pub const fn label(&self) -> &'static str {
        self.label
    }

    /// Get the first wavelength.
    pub const fn start(&self) -> usize {
        self.start
    }

    /// Get the last wavelength.
    pub const fn end(&self) -> usize {
        self.start + (self.data.len() - 1) * self.interval
    }

    /// Get the number of entries.
    pub const fn len(&self) -> usize {
        self.data.len()
    }

    /// Determine whether the table is empty.
    pub const fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Get the checksum.
    pub const fn checksum(&self) -> [Float; 3] {
        self.checksum
    }

    /// Get the raw data.
    pub const fn data(&self) -> &'static [[Float; 3]] {
        self.data
    }

    /// Get the value for the given wavelength, if tabulated.
    pub fn at(&self, wavelength: usize) -> Option<[Float; 3]> {
        if wavelength < self.start || (wavelength - self.start) % self.interval != 0 {
            return None;
        }
        self.data
            .get((wavelength - self.start) / self.interval)
            .copied()
    }

    /// Materialize this table as owned colour matching functions.
    pub fn to_cmfs(&self) -> ColourMatchingFunctions {
        let wavelengths: Vec<Float> = (0..self.data.len())
            .map(|index| (self.start + index * self.interval) as Float)
            .collect();
        let component = |suffix: &str, index: usize| {
            SpectralDistribution::from_raw_parts(
                format!("{} {}", self.label, suffix),
                wavelengths.clone(),
                self.data.iter().map(|triple| triple[index]).collect(),
            )
        };

        ColourMatchingFunctions {
            label: self.label.to_string(),
            x_bar: component("x̄", 0),
            y_bar: component("ȳ", 1),
            z_bar: component("z̄", 2),
        }
    }
}

// --------------------------------------------------------------------------------------------------------------------

/// The x̄, ȳ, z̄ colour matching functions of a standard observer.
#[derive(Clone, Debug, PartialEq)]
pub struct ColourMatchingFunctions {
    label: String,
    x_bar: SpectralDistribution,
    y_bar: SpectralDistribution,
    z_bar: SpectralDistribution,
}

impl ColourMatchingFunctions {
    /// Create new colour matching functions.
    ///
    /// All three distributions must have the same wavelengths.
    pub fn new(
        label: impl Into<String>,
        x_bar: SpectralDistribution,
        y_bar: SpectralDistribution,
        z_bar: SpectralDistribution,
    ) -> Result<Self> {
        let label = label.into();
        if x_bar.wavelengths() != y_bar.wavelengths() || x_bar.wavelengths() != z_bar.wavelengths()
        {
            return Err(SpectralError::InvalidDistribution(format!(
                "colour matching functions {} have different wavelengths",
                label
            )));
        }

        Ok(Self {
            label,
            x_bar,
            y_bar,
            z_bar,
        })
    }

    /// Get the label.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Get the x̄ function.
    pub fn x_bar(&self) -> &SpectralDistribution {
        &self.x_bar
    }

    /// Get the ȳ function.
    pub fn y_bar(&self) -> &SpectralDistribution {
        &self.y_bar
    }

    /// Get the z̄ function.
    pub fn z_bar(&self) -> &SpectralDistribution {
        &self.z_bar
    }

    /// Get the shared shape.
    pub fn shape(&self) -> SpectralShape {
        self.x_bar.shape()
    }

    /// Get the shared wavelengths.
    pub fn wavelengths(&self) -> &[Float] {
        self.x_bar.wavelengths()
    }

    /// Get the sampled triple for the given wavelength.
    pub fn get(&self, wavelength: Float) -> Option<[Float; 3]> {
        Some([
            self.x_bar.get(wavelength)?,
            self.y_bar.get(wavelength)?,
            self.z_bar.get(wavelength)?,
        ])
    }

    /// Get the, possibly interpolated, triple for the given wavelength.
    pub fn value(&self, wavelength: Float) -> Result<[Float; 3]> {
        Ok([
            self.x_bar.value(wavelength)?,
            self.y_bar.value(wavelength)?,
            self.z_bar.value(wavelength)?,
        ])
    }

    /// Align all three functions with the given shape.
    pub fn align(&self, shape: &SpectralShape) -> Result<Self> {
        Ok(Self {
            label: self.label.clone(),
            x_bar: self.x_bar.align(shape)?,
            y_bar: self.y_bar.align(shape)?,
            z_bar: self.z_bar.align(shape)?,
        })
    }
}

impl From<&TabularObserver> for ColourMatchingFunctions {
    fn from(value: &TabularObserver) -> Self {
        value.to_cmfs()
    }
}

// --------------------------------------------------------------------------------------------------------------------

#[cfg(test)]
mod test {
    use super::{SpectralDistribution, TabularDistribution, TabularObserver};
    use crate::error::SpectralError;
    use crate::shape::SpectralShape;
    use crate::{Extrapolation, Float, Interpolation};
    use approx::assert_relative_eq;

    fn sample() -> SpectralDistribution {
        SpectralDistribution::from_pairs(
            "sample",
            [
                (500.0, 0.0651),
                (520.0, 0.0705),
                (540.0, 0.0772),
                (560.0, 0.0870),
                (580.0, 0.1128),
                (600.0, 0.1360),
            ],
        )
        .unwrap()
    }

    #[test]
    fn test_construction() {
        let spd = SpectralDistribution::from_pairs("unordered", [(520.0, 2.0), (510.0, 1.0)]).unwrap();
        assert_eq!(spd.wavelengths(), &[510.0, 520.0]);
        assert_eq!(spd.values(), &[1.0, 2.0]);

        for result in [
            SpectralDistribution::new("empty", vec![], vec![]),
            SpectralDistribution::new("mismatched", vec![500.0], vec![]),
            SpectralDistribution::new("decreasing", vec![510.0, 500.0], vec![1.0, 1.0]),
            SpectralDistribution::new("duplicate", vec![500.0, 500.0], vec![1.0, 1.0]),
            SpectralDistribution::new("nan", vec![Float::NAN], vec![1.0]),
            SpectralDistribution::from_pairs("duplicate", [(500.0, 1.0), (500.0, 2.0)]),
        ] {
            assert!(matches!(result, Err(SpectralError::InvalidDistribution(_))));
        }
    }

    #[test]
    fn test_exact_lookup() {
        let spd = sample();
        assert_eq!(spd.get(540.0), Some(0.0772));
        assert_eq!(spd.get(541.0), None);

        // Sampled wavelengths, including the boundaries, are never interpolated.
        for (wavelength, value) in spd.iter() {
            assert_eq!(spd.value(wavelength), Ok(value));
        }
    }

    #[test]
    fn test_interpolation() {
        let spd = sample();
        assert_eq!(spd.effective_interpolation(), Interpolation::Sprague);
        let sprague = spd.value(530.0).unwrap();
        assert!(0.0705 < sprague && sprague < 0.0772);

        let linear = spd.clone().with_interpolation(Interpolation::Linear);
        assert_relative_eq!(linear.value(530.0).unwrap(), (0.0705 + 0.0772) / 2.0);

        // Five samples are too few for Sprague.
        let full = sample();
        let few = SpectralDistribution::new(
            "few",
            full.wavelengths()[..5].to_vec(),
            full.values()[..5].to_vec(),
        )
        .unwrap();
        assert_eq!(few.interpolation(), Interpolation::Sprague);
        assert_eq!(few.effective_interpolation(), Interpolation::Linear);
        assert_relative_eq!(few.value(530.0).unwrap(), (0.0705 + 0.0772) / 2.0);

        // So are non-uniformly spaced ones.
        let mut uneven = sample();
        uneven.set(610.0, 0.15);
        assert!(!uneven.is_uniform());
        assert_eq!(uneven.effective_interpolation(), Interpolation::Linear);
    }

    #[test]
    fn test_extrapolation() {
        let spd = sample();
        assert_eq!(spd.value(400.0), Ok(0.0651));
        assert_eq!(spd.value(700.0), Ok(0.1360));

        let spd = spd.with_extrapolation(Extrapolation::Fill(0.0, 0.0));
        assert_eq!(spd.value(400.0), Ok(0.0));

        let spd = spd.with_extrapolation(Extrapolation::Forbid);
        assert!(matches!(
            spd.value(700.0),
            Err(SpectralError::Domain { operation: "value", .. })
        ));
    }

    #[test]
    fn test_clone_is_independent() {
        let original = sample();
        let mut copy = original.clone();
        copy.set(500.0, 42.0).normalise(None).unwrap();

        assert_eq!(original.get(500.0), Some(0.0651));
        assert_eq!(copy.get(500.0), Some(1.0));
    }

    #[test]
    fn test_normalise() {
        let mut spd = sample();
        spd.normalise(None).unwrap();
        assert_eq!(spd.maximum(), 1.0);
        assert_eq!(spd.wavelengths(), sample().wavelengths());

        spd.normalise(Some(0.5)).unwrap();
        assert_eq!(spd.maximum(), 2.0);

        let mut zeros = SpectralDistribution::zeros_spd();
        assert!(matches!(
            zeros.normalise(None),
            Err(SpectralError::DegenerateInput { .. })
        ));
    }

    #[test]
    fn test_set() {
        let mut spd = SpectralDistribution::zeros_spd();
        assert_eq!(spd.len(), 421);
        assert_eq!(spd.domain(), (360.0, 780.0));

        spd.set(555.0, 1.0);
        assert_eq!(spd.len(), 421);
        assert_eq!(spd.get(555.0), Some(1.0));
        assert_eq!(spd.maximum(), 1.0);

        spd.set(800.5, 3.0);
        assert_eq!(spd.len(), 422);
        assert_eq!(spd.domain(), (360.0, 800.5));
    }

    #[test]
    fn test_align_identity() {
        let spd = sample();
        let aligned = spd.align(&spd.shape()).unwrap();
        assert_eq!(aligned.wavelengths(), spd.wavelengths());
        assert_eq!(aligned.values(), spd.values());
    }

    #[test]
    fn test_align_identity_uneven() {
        let spd = SpectralDistribution::new("uneven", vec![0.0, 1.5, 4.0], vec![1.0, 2.0, 3.0])
            .unwrap();
        let shape = spd.shape();
        assert_eq!(shape, SpectralShape::new(0.0, 4.0, 0.5).unwrap());

        let aligned = spd.align(&shape).unwrap();
        assert_eq!(aligned.len(), 9);
        assert_eq!(aligned.domain(), (0.0, 4.0));
        for (wavelength, value) in spd.iter() {
            assert_eq!(aligned.get(wavelength), Some(value));
        }

        // Without a common interval, the shape still ends with the last sample.
        let spd = SpectralDistribution::new(
            "irrational",
            vec![0.0, 1.0, 1.0 + std::f64::consts::SQRT_2 as Float],
            vec![1.0, 2.0, 3.0],
        )
        .unwrap();
        let aligned = spd.align(&spd.shape()).unwrap();
        assert_eq!(aligned.domain(), spd.domain());
        assert_eq!(aligned.get(spd.domain().1), Some(3.0));
    }

    #[test]
    fn test_align() {
        let spd = sample();
        let shape = SpectralShape::new(490.0, 610.0, 5.0).unwrap();
        let aligned = spd.align(&shape).unwrap();

        assert_eq!(aligned.len(), 25);
        assert_eq!(aligned.get(490.0), Some(0.0651));
        assert_eq!(aligned.get(520.0), Some(0.0705));
        assert_eq!(aligned.get(610.0), Some(0.1360));
        assert_relative_eq!(aligned.get(530.0).unwrap(), spd.value(530.0).unwrap());

        // The source remains unchanged.
        assert_eq!(spd.len(), 6);

        let shape = SpectralShape::new(700.0, 800.0, 10.0).unwrap();
        assert!(matches!(
            spd.align(&shape),
            Err(SpectralError::Domain { operation: "align", .. })
        ));

        let shape = SpectralShape::new(490.0, 610.0, 5.0).unwrap();
        let forbidden = spd.with_extrapolation(Extrapolation::Forbid);
        assert!(matches!(
            forbidden.align(&shape),
            Err(SpectralError::Domain { operation: "align", .. })
        ));
    }

    #[test]
    fn test_align_with() {
        let spd = sample();
        let uneven =
            SpectralDistribution::new("uneven", vec![450.0, 530.0, 535.0, 700.0], vec![0.0; 4])
                .unwrap()
                .with_extrapolation(Extrapolation::Fill(0.0, 0.0));

        let aligned = spd
            .clone()
            .with_extrapolation(Extrapolation::Fill(0.0, 0.0))
            .align_with(&uneven)
            .unwrap();
        assert_eq!(aligned.wavelengths(), uneven.wavelengths());
        assert_eq!(aligned.get(450.0), Some(0.0));
        assert_eq!(aligned.get(700.0), Some(0.0));
        assert_eq!(aligned.get(530.0), Some(spd.value(530.0).unwrap()));

        let disjoint = SpectralDistribution::new("disjoint", vec![800.0, 900.0], vec![1.0, 1.0])
            .unwrap();
        assert!(matches!(
            spd.align_with(&disjoint),
            Err(SpectralError::Domain {
                operation: "align_with",
                ..
            })
        ));
    }

    #[test]
    fn test_shape() {
        let spd = sample();
        let shape = spd.shape();
        assert_eq!(shape, SpectralShape::new(500.0, 600.0, 20.0).unwrap());

        let single = SpectralDistribution::new("single", vec![555.0], vec![1.0]).unwrap();
        assert_eq!(single.shape(), SpectralShape::new(555.0, 555.0, 1.0).unwrap());
    }

    #[test]
    fn test_tabular_end() {
        static TABLE: TabularDistribution =
            TabularDistribution::new("table", 400, 10, 6.0, &[1.0, 2.0, 3.0]);
        assert_eq!(TABLE.end(), 420);
        assert_eq!(TABLE.at(410), Some(2.0));
        assert_eq!(TABLE.at(415), None);

        static SINGLE: TabularObserver =
            TabularObserver::new("single", 555, 5, [1.0, 2.0, 3.0], &[[1.0, 2.0, 3.0]]);
        assert_eq!(SINGLE.end(), 555);
        assert_eq!(SINGLE.to_cmfs().shape().len(), 1);
    }

    #[test]
    #[should_panic(expected = "tabular distribution has no data")]
    fn test_tabular_without_data() {
        let _ = TabularDistribution::new("empty", 400, 10, 0.0, &[]);
    }

    #[test]
    #[should_panic(expected = "tabular observer has zero interval")]
    fn test_tabular_without_interval() {
        let _ = TabularObserver::new("flat", 400, 0, [0.0; 3], &[[0.0; 3]]);
    }
}
