//! Projection of CIE XYZ tristimulus values into derived colour models.
//!
//! Every model is reached through a converter with the same signature, taking
//! the tristimulus values and the chromaticity of the reference illuminant.
//! [`ColourModel`] enumerates the supported models and maps each onto its
//! converter, and [`xyz_to_colourspace_model`] dispatches by model name.
//!
//! | Model        | Coordinates | Notes                                   |
//! | ------------ | :---------: | --------------------------------------- |
//! | CIE XYZ      | X, Y, Z     | identity                                |
//! | CIE xyY      | x, y, Y     | black maps onto the illuminant          |
//! | CIE xy       | x, y        |                                         |
//! | CIE Lab      | L\*, a\*, b\* |                                       |
//! | CIE LCHab    | L\*, C, hº  | hue in degrees `0..360`                 |
//! | CIE Luv      | L\*, u\*, v\* |                                       |
//! | CIE Luv uv   | u′, v′      |                                         |
//! | CIE LCHuv    | L\*, C, hº  | hue in degrees `0..360`                 |
//! | CIE UCS      | U, V, W     | CIE 1960                                |
//! | CIE UCS uv   | u, v        | CIE 1960                                |
//! | CIE UVW      | U\*, V\*, W\* | CIE 1964, on XYZ scaled to `0..=100`  |
//! | IPT          | I, P, T     | Ebner and Fairchild 1998, D65 only      |
//!
//! # Example
//!
//! ```
//! # use colorimetry::cie::WHITEPOINT_D50;
//! # use colorimetry::models::{xyz_to_colourspace_model, Coordinates};
//! # fn main() -> colorimetry::error::Result<()> {
//! let xyz = [0.07049534, 0.1008, 0.09558313];
//! let Coordinates::Three([l, _, _]) = xyz_to_colourspace_model(&xyz, WHITEPOINT_D50, "CIE Lab")? else {
//!     unreachable!()
//! };
//! assert!((l - 37.9856291).abs() < 1e-6);
//!
//! assert!(xyz_to_colourspace_model(&xyz, WHITEPOINT_D50, "CIE Nope").is_err());
//! # Ok(())
//! # }
//! ```

use std::str::FromStr;

#[cfg(feature = "pyffi")]
use pyo3::prelude::*;

use crate::core::{multiply, Matrix};
use crate::error::{Result, SpectralError};
use crate::Float;

/// The CIE's ε = 216/24389, the threshold between the linear and cube root
/// segments of Lab and Luv lightness.
pub const CIE_E: Float = 216.0 / 24389.0;

/// The CIE's κ = 24389/27, the slope of the linear segment of Lab and Luv
/// lightness.
pub const CIE_K: Float = 24389.0 / 27.0;

/// The coordinates of a colour model, which has either two or three of them.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Coordinates {
    Two([Float; 2]),
    Three([Float; 3]),
}

impl Coordinates {
    /// Get the coordinates as a slice.
    pub fn as_slice(&self) -> &[Float] {
        match self {
            Self::Two(coordinates) => coordinates,
            Self::Three(coordinates) => coordinates,
        }
    }

    /// Get the number of coordinates.
    pub fn len(&self) -> usize {
        self.as_slice().len()
    }

    /// Determine whether there are no coordinates, which is never the case.
    pub fn is_empty(&self) -> bool {
        false
    }
}

impl From<Coordinates> for Vec<Float> {
    fn from(value: Coordinates) -> Self {
        value.as_slice().to_vec()
    }
}

/// A converter from tristimulus values and illuminant chromaticity to a
/// colour model's coordinates.
pub type Converter = fn(&[Float; 3], [Float; 2]) -> Coordinates;

// --------------------------------------------------------------------------------------------------------------------

/// The enumeration of supported colour models.
#[cfg_attr(
    feature = "pyffi",
    pyclass(eq, eq_int, frozen, hash, module = "colorimetry")
)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ColourModel {
    Xyz,
    XyY,
    Xy,
    Lab,
    LchAb,
    Luv,
    LuvUv,
    LchUv,
    Ucs,
    UcsUv,
    Uvw,
    Ipt,
}

impl ColourModel {
    /// All colour models in canonical order, which also is the order of
    /// their converters.
    pub const ALL: [ColourModel; 12] = [
        Self::Xyz,
        Self::XyY,
        Self::Xy,
        Self::Lab,
        Self::LchAb,
        Self::Luv,
        Self::LuvUv,
        Self::LchUv,
        Self::Ucs,
        Self::UcsUv,
        Self::Uvw,
        Self::Ipt,
    ];

    /// Get the converter for this colour model.
    pub fn converter(&self) -> Converter {
        CONVERTERS[*self as usize]
    }

    /// Convert the tristimulus values to this colour model.
    pub fn convert(&self, xyz: &[Float; 3], illuminant: [Float; 2]) -> Coordinates {
        (self.converter())(xyz, illuminant)
    }

    /// Get the names of all colour models.
    pub fn labels() -> impl Iterator<Item = &'static str> {
        Self::ALL.iter().map(|model| model.name())
    }
}

#[cfg_attr(feature = "pyffi", pymethods)]
impl ColourModel {
    /// Get this colour model's name.
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Xyz => "CIE XYZ",
            Self::XyY => "CIE xyY",
            Self::Xy => "CIE xy",
            Self::Lab => "CIE Lab",
            Self::LchAb => "CIE LCHab",
            Self::Luv => "CIE Luv",
            Self::LuvUv => "CIE Luv uv",
            Self::LchUv => "CIE LCHuv",
            Self::Ucs => "CIE UCS",
            Self::UcsUv => "CIE UCS uv",
            Self::Uvw => "CIE UVW",
            Self::Ipt => "IPT",
        }
    }

    /// Get the number of coordinates of this colour model.
    pub const fn arity(&self) -> usize {
        match self {
            Self::Xy | Self::LuvUv | Self::UcsUv => 2,
            _ => 3,
        }
    }

    /// Parse the colour model name.
    #[cfg(feature = "pyffi")]
    #[staticmethod]
    pub fn parse(s: &str) -> std::result::Result<Self, SpectralError> {
        Self::from_str(s)
    }

    /// Convert the tristimulus values to this colour model.
    #[cfg(feature = "pyffi")]
    #[pyo3(name = "convert")]
    pub fn py_convert(&self, xyz: [Float; 3], illuminant: [Float; 2]) -> Vec<Float> {
        self.convert(&xyz, illuminant).into()
    }

    #[cfg(feature = "pyffi")]
    pub fn __str__(&self) -> String {
        self.name().to_string()
    }
}

impl std::fmt::Display for ColourModel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ColourModel {
    type Err = SpectralError;

    /// Parse a colour model name. Names are matched exactly.
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .find(|model| model.name() == s)
            .copied()
            .ok_or_else(|| SpectralError::UnsupportedModel(s.to_string()))
    }
}

/// Convert the tristimulus values to the named colour model.
///
/// An unknown name results in an unsupported model error.
pub fn xyz_to_colourspace_model(
    xyz: &[Float; 3],
    illuminant: [Float; 2],
    model: &str,
) -> Result<Coordinates> {
    let model = ColourModel::from_str(model)?;
    log::trace!("converting {:?} to {}", xyz, model);
    Ok(model.convert(xyz, illuminant))
}

// --------------------------------------------------------------------------------------------------------------------

/// The converters, indexed by colour model.
const CONVERTERS: [Converter; 12] = [
    |xyz, _| Coordinates::Three(*xyz),
    |xyz, illuminant| Coordinates::Three(xyz_to_xyy(xyz, illuminant)),
    |xyz, illuminant| Coordinates::Two(xyz_to_xy(xyz, illuminant)),
    |xyz, illuminant| Coordinates::Three(xyz_to_lab(xyz, illuminant)),
    |xyz, illuminant| Coordinates::Three(lab_to_lchab(&xyz_to_lab(xyz, illuminant))),
    |xyz, illuminant| Coordinates::Three(xyz_to_luv(xyz, illuminant)),
    |xyz, illuminant| Coordinates::Two(xyz_to_luv_uv(xyz, illuminant)),
    |xyz, illuminant| Coordinates::Three(luv_to_lchuv(&xyz_to_luv(xyz, illuminant))),
    |xyz, _| Coordinates::Three(xyz_to_ucs(xyz)),
    |xyz, illuminant| Coordinates::Two(xyz_to_ucs_uv(xyz, illuminant)),
    |xyz, illuminant| Coordinates::Three(xyz_to_uvw(&xyz.map(|c| 100.0 * c), illuminant)),
    |xyz, _| Coordinates::Three(xyz_to_ipt(xyz)),
];

// --------------------------------------------------------------------------------------------------------------------

/// Convert chromaticity coordinates to tristimulus values with Y = 1.
pub fn xy_to_xyz(xy: [Float; 2]) -> [Float; 3] {
    let [x, y] = xy;
    [x / y, 1.0, (1.0 - x - y) / y]
}

/// Convert xyY to tristimulus values.
///
/// A zero y denotes black.
pub fn xyy_to_xyz(xyy: &[Float; 3]) -> [Float; 3] {
    let [x, y, luminance] = *xyy;
    if y == 0.0 {
        return [0.0, 0.0, 0.0];
    }
    [x * luminance / y, luminance, (1.0 - x - y) * luminance / y]
}

/// Convert tristimulus values to xyY.
///
/// Black has no chromaticity of its own and takes on the illuminant's.
pub fn xyz_to_xyy(xyz: &[Float; 3], illuminant: [Float; 2]) -> [Float; 3] {
    let [x, y, z] = *xyz;
    let sum = x + y + z;
    if sum == 0.0 {
        return [illuminant[0], illuminant[1], 0.0];
    }
    [x / sum, y / sum, y]
}

/// Convert tristimulus values to chromaticity coordinates.
pub fn xyz_to_xy(xyz: &[Float; 3], illuminant: [Float; 2]) -> [Float; 2] {
    let [x, y, _] = xyz_to_xyy(xyz, illuminant);
    [x, y]
}

// --------------------------------------------------------------------------------------------------------------------

#[inline]
fn lab_f(t: Float) -> Float {
    if t > CIE_E {
        t.cbrt()
    } else {
        CIE_K.mul_add(t, 16.0) / 116.0
    }
}

#[inline]
fn lightness(relative_luminance: Float) -> Float {
    if relative_luminance > CIE_E {
        116.0 * relative_luminance.cbrt() - 16.0
    } else {
        CIE_K * relative_luminance
    }
}

/// Convert polar coordinates' Cartesian components into chroma and hue.
#[inline]
fn to_polar(lightness: Float, a: Float, b: Float) -> [Float; 3] {
    [lightness, a.hypot(b), b.atan2(a).to_degrees().rem_euclid(360.0)]
}

/// Convert tristimulus values to CIE L\*a\*b\*.
pub fn xyz_to_lab(xyz: &[Float; 3], illuminant: [Float; 2]) -> [Float; 3] {
    let reference = xy_to_xyz(illuminant);
    let fx = lab_f(xyz[0] / reference[0]);
    let fy = lab_f(xyz[1] / reference[1]);
    let fz = lab_f(xyz[2] / reference[2]);

    [116.0 * fy - 16.0, 500.0 * (fx - fy), 200.0 * (fy - fz)]
}

/// Convert CIE L\*a\*b\* to CIE LCHab.
pub fn lab_to_lchab(lab: &[Float; 3]) -> [Float; 3] {
    to_polar(lab[0], lab[1], lab[2])
}

/// Compute the CIE 1976 u′v′ chromaticity, if defined.
fn uv_prime(xyz: &[Float; 3]) -> Option<[Float; 2]> {
    let [x, y, z] = *xyz;
    let denominator = x + 15.0 * y + 3.0 * z;
    if denominator == 0.0 {
        None
    } else {
        Some([4.0 * x / denominator, 9.0 * y / denominator])
    }
}

/// Convert tristimulus values to CIE L\*u\*v\*.
pub fn xyz_to_luv(xyz: &[Float; 3], illuminant: [Float; 2]) -> [Float; 3] {
    let reference = xy_to_xyz(illuminant);
    let l = lightness(xyz[1] / reference[1]);
    let [ur, vr] = uv_prime(&reference).unwrap_or([0.0, 0.0]);
    let [u, v] = uv_prime(xyz).unwrap_or([ur, vr]);

    [l, 13.0 * l * (u - ur), 13.0 * l * (v - vr)]
}

/// Convert tristimulus values to CIE 1976 u′v′ chromaticity coordinates.
///
/// Black takes on the illuminant's chromaticity.
pub fn xyz_to_luv_uv(xyz: &[Float; 3], illuminant: [Float; 2]) -> [Float; 2] {
    uv_prime(xyz)
        .or_else(|| uv_prime(&xy_to_xyz(illuminant)))
        .unwrap_or([0.0, 0.0])
}

/// Convert CIE L\*u\*v\* to CIE LCHuv.
pub fn luv_to_lchuv(luv: &[Float; 3]) -> [Float; 3] {
    to_polar(luv[0], luv[1], luv[2])
}

// --------------------------------------------------------------------------------------------------------------------

/// Convert tristimulus values to CIE 1960 UCS.
pub fn xyz_to_ucs(xyz: &[Float; 3]) -> [Float; 3] {
    let [x, y, z] = *xyz;
    [2.0 * x / 3.0, y, 0.5 * (3.0 * y - x + z)]
}

/// Compute the CIE 1960 uv chromaticity, if defined.
fn ucs_uv(xyz: &[Float; 3]) -> Option<[Float; 2]> {
    let [u, v, w] = xyz_to_ucs(xyz);
    let sum = u + v + w;
    if sum == 0.0 {
        None
    } else {
        Some([u / sum, v / sum])
    }
}

/// Convert tristimulus values to CIE 1960 UCS uv chromaticity coordinates.
///
/// Black takes on the illuminant's chromaticity.
pub fn xyz_to_ucs_uv(xyz: &[Float; 3], illuminant: [Float; 2]) -> [Float; 2] {
    ucs_uv(xyz)
        .or_else(|| ucs_uv(&xy_to_xyz(illuminant)))
        .unwrap_or([0.0, 0.0])
}

/// Convert tristimulus values to CIE 1964 U\*V\*W\*.
///
/// Unlike the other models, U\*V\*W\* is defined for Y in `0..=100`.
/// [`ColourModel::Uvw`] scales tristimulus values in `0..=1` accordingly.
pub fn xyz_to_uvw(xyz: &[Float; 3], illuminant: [Float; 2]) -> [Float; 3] {
    let [u, v] = xyz_to_ucs_uv(xyz, illuminant);
    let [u0, v0] = xyz_to_ucs_uv(&xy_to_xyz(illuminant), illuminant);
    let w = 25.0 * xyz[1].cbrt() - 17.0;

    [13.0 * w * (u - u0), 13.0 * w * (v - v0), w]
}

// --------------------------------------------------------------------------------------------------------------------

const XYZ_TO_IPT_LMS: Matrix = [
    [0.4002, 0.7075, -0.0807],
    [-0.2280, 1.1500, 0.0612],
    [0.0, 0.0, 0.9184],
];

const IPT_LMS_TO_IPT: Matrix = [
    [0.4000, 0.4000, 0.2000],
    [4.4550, -4.8510, 0.3960],
    [0.8056, 0.3572, -1.1628],
];

/// Convert tristimulus values to IPT.
///
/// The tristimulus values should be relative to D65.
pub fn xyz_to_ipt(xyz: &[Float; 3]) -> [Float; 3] {
    let [l, m, s] = multiply(&XYZ_TO_IPT_LMS, xyz);
    let compress = |c: Float| c.abs().powf(0.43).copysign(c);
    multiply(&IPT_LMS_TO_IPT, &[compress(l), compress(m), compress(s)])
}

// ====================================================================================================================

#[cfg(test)]
mod test {
    use std::str::FromStr;

    use super::{
        xy_to_xyz, xyy_to_xyz, xyz_to_colourspace_model, xyz_to_ipt, xyz_to_xyy,
        ColourModel, Coordinates,
    };
    use crate::cie::{WHITEPOINT_D50, WHITEPOINT_D65};
    use crate::error::SpectralError;
    use crate::Float;
    use approx::assert_abs_diff_eq;

    const XYZ: [Float; 3] = [0.07049534, 0.1008, 0.09558313];

    fn assert_coordinates(actual: Coordinates, expected: &[Float]) {
        let actual = actual.as_slice();
        assert_eq!(actual.len(), expected.len());
        for (a, e) in actual.iter().zip(expected) {
            assert_abs_diff_eq!(a, e, epsilon = 1e-7);
        }
    }

    #[test]
    fn test_dispatch() {
        for (name, expected) in [
            ("CIE XYZ", &[0.07049534, 0.1008, 0.09558313][..]),
            ("CIE xyY", &[0.26414772, 0.37770001, 0.1008][..]),
            ("CIE xy", &[0.26414772, 0.37770001][..]),
            ("CIE Lab", &[37.98562910, -23.62302887, -4.41417036][..]),
            ("CIE LCHab", &[37.98562910, 24.03190365, 190.58415972][..]),
            ("CIE Luv", &[37.98562910, -28.79229446, -1.35581950][..]),
            ("CIE Luv uv", &[0.15085310, 0.48532971][..]),
            ("CIE LCHuv", &[37.98562910, 28.82419932, 182.69604747][..]),
            ("CIE UCS", &[0.04699689, 0.1008, 0.16374390][..]),
            ("CIE UCS uv", &[0.15085310, 0.32355314][..]),
            ("CIE UVW", &[-28.04832770, -0.88052424, 37.00411491][..]),
            ("IPT", &[0.36571124, -0.11114798, 0.01594746][..]),
        ] {
            let coordinates = xyz_to_colourspace_model(&XYZ, WHITEPOINT_D50, name).unwrap();
            assert_coordinates(coordinates, expected);
        }
    }

    #[test]
    fn test_names() {
        for model in ColourModel::ALL {
            assert_eq!(ColourModel::from_str(model.name()), Ok(model));
            assert_eq!(format!("{}", model), model.name());
            assert_eq!(
                model.convert(&XYZ, WHITEPOINT_D65).len(),
                model.arity()
            );
        }
        assert_eq!(ColourModel::labels().count(), 12);

        assert_eq!(
            ColourModel::from_str("cie lab"),
            Err(SpectralError::UnsupportedModel("cie lab".to_string()))
        );
        assert!(matches!(
            xyz_to_colourspace_model(&XYZ, WHITEPOINT_D50, "Hunter Lab"),
            Err(SpectralError::UnsupportedModel(_))
        ));
    }

    #[test]
    fn test_black() {
        let black = [0.0, 0.0, 0.0];
        assert_eq!(
            xyz_to_xyy(&black, WHITEPOINT_D50),
            [WHITEPOINT_D50[0], WHITEPOINT_D50[1], 0.0]
        );
        assert_coordinates(
            ColourModel::Lab.convert(&black, WHITEPOINT_D50),
            &[0.0, 0.0, 0.0],
        );
        assert_eq!(xyz_to_ipt(&black), [0.0, 0.0, 0.0]);
        assert_coordinates(
            ColourModel::Luv.convert(&black, WHITEPOINT_D50),
            &[0.0, 0.0, 0.0],
        );
    }

    #[test]
    fn test_whitepoint() {
        let white = xy_to_xyz(WHITEPOINT_D65);
        assert_coordinates(
            ColourModel::Lab.convert(&white, WHITEPOINT_D65),
            &[100.0, 0.0, 0.0],
        );
        assert_coordinates(
            ColourModel::Luv.convert(&white, WHITEPOINT_D65),
            &[100.0, 0.0, 0.0],
        );

        let xyy = xyz_to_xyy(&XYZ, WHITEPOINT_D65);
        let xyz = xyy_to_xyz(&xyy);
        for (actual, expected) in xyz.iter().zip(XYZ.iter()) {
            assert_abs_diff_eq!(actual, expected, epsilon = 1e-15);
        }
    }
}
