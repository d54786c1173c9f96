use crate::cie::{WHITEPOINT_D50, WHITEPOINT_D65};
use crate::core::{invert, multiply, Matrix};
use crate::error::{Result, SpectralError};
use crate::models::xy_to_xyz;
use crate::Float;

use super::transfer::{
    eotf_gamma_2_2, eotf_romm, eotf_srgb, oetf_gamma_2_2, oetf_romm, oetf_srgb,
};

/// A transfer function for individual component values.
pub type TransferFunction = fn(Float) -> Float;

/// An RGB colourspace.
///
/// An RGB colourspace is defined by the chromaticities of its three primaries,
/// the chromaticity of its whitepoint, and the pair of transfer functions that
/// encode and decode component values. Conversions between CIE XYZ and linear
/// RGB follow from primaries and whitepoint through the normalised primary
/// matrix. This type does not perform chromatic adaptation. Tristimulus values
/// must be relative to the colourspace's whitepoint already.
#[derive(Clone, Copy, Debug)]
pub struct RgbColourspace {
    name: &'static str,
    primaries: [[Float; 2]; 3],
    whitepoint: [Float; 2],
    illuminant: &'static str,
    oetf: TransferFunction,
    eotf: TransferFunction,
}

/// The sRGB colourspace.
pub const SRGB: RgbColourspace = RgbColourspace::new(
    "sRGB",
    [[0.6400, 0.3300], [0.3000, 0.6000], [0.1500, 0.0600]],
    WHITEPOINT_D65,
    "D65",
    oetf_srgb,
    eotf_srgb,
);

/// The ProPhoto RGB colourspace, which uses the ROMM RGB encoding.
pub const PROPHOTO_RGB: RgbColourspace = RgbColourspace::new(
    "ProPhoto RGB",
    [[0.7347, 0.2653], [0.1596, 0.8404], [0.0366, 0.0001]],
    WHITEPOINT_D50,
    "D50",
    oetf_romm,
    eotf_romm,
);

/// The Max RGB colourspace.
pub const MAX_RGB: RgbColourspace = RgbColourspace::new(
    "Max RGB",
    [
        [0.73413379, 0.26586621],
        [0.10039113, 0.89960887],
        [0.03621495, 0.00000000],
    ],
    WHITEPOINT_D50,
    "D50",
    oetf_gamma_2_2,
    eotf_gamma_2_2,
);

/// All RGB colourspaces.
pub const RGB_COLOURSPACES: [&RgbColourspace; 3] = [&SRGB, &PROPHOTO_RGB, &MAX_RGB];

/// Look up an RGB colourspace by name, ignoring case.
pub fn rgb_colourspace(name: &str) -> Option<&'static RgbColourspace> {
    RGB_COLOURSPACES
        .iter()
        .find(|colourspace| colourspace.name().eq_ignore_ascii_case(name.trim()))
        .copied()
}

impl RgbColourspace {
    /// Create a new RGB colourspace.
    pub const fn new(
        name: &'static str,
        primaries: [[Float; 2]; 3],
        whitepoint: [Float; 2],
        illuminant: &'static str,
        oetf: TransferFunction,
        eotf: TransferFunction,
    ) -> Self {
        Self {
            name,
            primaries,
            whitepoint,
            illuminant,
            oetf,
            eotf,
        }
    }

    /// Get the name.
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Get the chromaticities of the red, green, and blue primaries.
    pub const fn primaries(&self) -> &[[Float; 2]; 3] {
        &self.primaries
    }

    /// Get the whitepoint's chromaticity.
    pub const fn whitepoint(&self) -> [Float; 2] {
        self.whitepoint
    }

    /// Get the name of the illuminant providing the whitepoint.
    pub const fn illuminant(&self) -> &'static str {
        self.illuminant
    }

    /// Get the opto-electronic transfer function.
    pub fn oetf(&self) -> TransferFunction {
        self.oetf
    }

    /// Get the electro-optical transfer function.
    pub fn eotf(&self) -> TransferFunction {
        self.eotf
    }

    /// Get the matrix converting linear RGB to XYZ.
    pub fn to_xyz_matrix(&self) -> Result<Matrix> {
        normalised_primary_matrix(&self.primaries, self.whitepoint)
    }

    /// Get the matrix converting XYZ to linear RGB.
    pub fn to_rgb_matrix(&self) -> Result<Matrix> {
        let matrix = self.to_xyz_matrix()?;
        invert(&matrix).ok_or_else(|| singular(self.name))
    }

    /// Convert tristimulus values to RGB.
    ///
    /// If `encode` is true, this method applies the colourspace's OETF to the
    /// linear result.
    pub fn xyz_to_rgb(&self, xyz: &[Float; 3], encode: bool) -> Result<[Float; 3]> {
        let [r, g, b] = multiply(&self.to_rgb_matrix()?, xyz);
        if encode {
            Ok([(self.oetf)(r), (self.oetf)(g), (self.oetf)(b)])
        } else {
            Ok([r, g, b])
        }
    }

    /// Convert RGB to tristimulus values.
    ///
    /// If `decode` is true, this method first applies the colourspace's EOTF
    /// to the given values.
    pub fn rgb_to_xyz(&self, rgb: &[Float; 3], decode: bool) -> Result<[Float; 3]> {
        let linear = if decode {
            [(self.eotf)(rgb[0]), (self.eotf)(rgb[1]), (self.eotf)(rgb[2])]
        } else {
            *rgb
        };
        Ok(multiply(&self.to_xyz_matrix()?, &linear))
    }
}

impl std::fmt::Display for RgbColourspace {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name)
    }
}

fn singular(name: &str) -> SpectralError {
    SpectralError::domain(
        "normalised_primary_matrix",
        format!("primaries of {} are collinear", name),
    )
}

/// Compute the normalised primary matrix for the given primaries and
/// whitepoint.
///
/// The matrix converts linear RGB to XYZ, so that RGB (1, 1, 1) maps onto the
/// whitepoint with Y = 1. Primaries that do not span a triangle result in a
/// domain error.
pub fn normalised_primary_matrix(
    primaries: &[[Float; 2]; 3],
    whitepoint: [Float; 2],
) -> Result<Matrix> {
    let [[xr, yr], [xg, yg], [xb, yb]] = *primaries;
    let chromaticities = [
        [xr, xg, xb],
        [yr, yg, yb],
        [1.0 - xr - yr, 1.0 - xg - yg, 1.0 - xb - yb],
    ];

    let inverse = invert(&chromaticities).ok_or_else(|| singular("given colourspace"))?;
    let [sr, sg, sb] = multiply(&inverse, &xy_to_xyz(whitepoint));

    Ok(chromaticities.map(|[r, g, b]| [r * sr, g * sg, b * sb]))
}

// ====================================================================================================================

#[cfg(test)]
mod test {
    use super::{normalised_primary_matrix, rgb_colourspace, MAX_RGB, PROPHOTO_RGB, SRGB};
    use crate::error::SpectralError;
    use crate::models::xy_to_xyz;
    use crate::Float;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_normalised_primary_matrix() {
        let srgb = SRGB.to_xyz_matrix().unwrap();
        let expected = [
            [0.41238656, 0.35759149, 0.18045049],
            [0.21263682, 0.71518298, 0.07218020],
            [0.01933062, 0.11919716, 0.95037259],
        ];
        for (row, expected) in srgb.iter().zip(expected.iter()) {
            for (actual, expected) in row.iter().zip(expected.iter()) {
                assert_abs_diff_eq!(actual, expected, epsilon = 1e-8);
            }
        }

        let prophoto = PROPHOTO_RGB.to_xyz_matrix().unwrap();
        let expected = [
            [0.797667234791735, 0.13519223060072058, 0.03135252902874404],
            [0.2880374539134984, 0.7118768834388821, 8.566264761951924e-05],
            [0.0, 0.0, 0.8251882845188289],
        ];
        for (row, expected) in prophoto.iter().zip(expected.iter()) {
            for (actual, expected) in row.iter().zip(expected.iter()) {
                assert_abs_diff_eq!(actual, expected, epsilon = 1e-12);
            }
        }

        let collinear = [[0.2, 0.2], [0.3, 0.3], [0.4, 0.4]];
        assert!(matches!(
            normalised_primary_matrix(&collinear, [0.3127, 0.329]),
            Err(SpectralError::Domain { .. })
        ));
    }

    #[test]
    fn test_whitepoint_is_white() {
        for colourspace in [SRGB, PROPHOTO_RGB, MAX_RGB] {
            let white = xy_to_xyz(colourspace.whitepoint());
            for encode in [false, true] {
                let rgb = colourspace.xyz_to_rgb(&white, encode).unwrap();
                for c in rgb {
                    assert_abs_diff_eq!(c, 1.0, epsilon = 1e-9);
                }
            }
        }
    }

    #[test]
    fn test_round_trip() {
        let xyz: [Float; 3] = [0.5, 0.5, 0.5];
        for colourspace in [SRGB, PROPHOTO_RGB, MAX_RGB] {
            let rgb = colourspace.xyz_to_rgb(&xyz, false).unwrap();
            let back = colourspace.rgb_to_xyz(&rgb, false).unwrap();
            for (actual, expected) in back.iter().zip(xyz.iter()) {
                assert_abs_diff_eq!(actual, expected, epsilon = 1e-12);
            }
        }

        let rgb = [0.25, 0.5, 0.75];
        let xyz = SRGB.rgb_to_xyz(&rgb, true).unwrap();
        let back = SRGB.xyz_to_rgb(&xyz, true).unwrap();
        for (actual, expected) in back.iter().zip(rgb.iter()) {
            assert_abs_diff_eq!(actual, expected, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_lookup() {
        assert_eq!(rgb_colourspace("srgb").map(|c| c.name()), Some("sRGB"));
        assert_eq!(rgb_colourspace("ProPhoto RGB").map(|c| c.illuminant()), Some("D50"));
        assert!(rgb_colourspace("Adobe RGB (1998)").is_none());
    }
}
