use crate::shape::SpectralShape;
use crate::spectrum::{SpectralDistribution, TabularDistribution};
use crate::Float;

/// The CIE standard illuminant D65 from 380nm to 780nm at 5nm resolution.
///
/// D65 approximates average daylight around noon. It is normalized to 100 at
/// 560nm.
pub static CIE_ILLUMINANT_D65: TabularDistribution =
    TabularDistribution::new("D65", 380, 5, 7092.7234, &D65_DATA);

/// The CIE illuminant F2 from 380nm to 780nm at 5nm resolution.
///
/// F2 is a cool white fluorescent lamp with the mercury lines at 405nm, 435nm,
/// 545nm, and 575nm showing up as prominent spikes.
pub static CIE_ILLUMINANT_F2: TabularDistribution =
    TabularDistribution::new("F2", 380, 5, 594.5, &F2_DATA);

/// All tabulated illuminants.
pub static ILLUMINANTS: [&TabularDistribution; 2] = [&CIE_ILLUMINANT_D65, &CIE_ILLUMINANT_F2];

/// Look up a tabulated illuminant by name.
///
/// Names are compared case-insensitively, and an optional `Illuminant ` or
/// `CIE ` prefix is ignored. Hence `D65`, `d65`, and `CIE Illuminant D65` all
/// name the same illuminant.
pub fn illuminant(name: &str) -> Option<&'static TabularDistribution> {
    let name = name.trim();
    let name = strip_prefix_ignore_case(name, "CIE ");
    let name = strip_prefix_ignore_case(name, "Illuminant ");

    ILLUMINANTS
        .iter()
        .find(|illuminant| illuminant.label().eq_ignore_ascii_case(name))
        .copied()
}

fn strip_prefix_ignore_case<'a>(s: &'a str, prefix: &str) -> &'a str {
    match s.get(..prefix.len()) {
        Some(head) if head.eq_ignore_ascii_case(prefix) => &s[prefix.len()..],
        _ => s,
    }
}

// --------------------------------------------------------------------------------------------------------------------

/// The second radiation constant used by the CIE definition of illuminant A,
/// in nm·K.
const ILLUMINANT_A_C2: Float = 1.435e7;

/// The temperature of illuminant A in Kelvin.
const ILLUMINANT_A_TEMPERATURE: Float = 2848.0;

/// Compute the CIE standard illuminant A for the given shape.
///
/// Illuminant A represents typical tungsten-filament lighting. It is defined
/// analytically as a Planckian radiator, normalized to 100 at 560nm.
pub fn illuminant_a(shape: &SpectralShape) -> SpectralDistribution {
    let reference = (ILLUMINANT_A_C2 / (ILLUMINANT_A_TEMPERATURE * 560.0)).exp_m1();
    SpectralDistribution::from_fn("A", shape, |wavelength| {
        100.0
            * (560.0 / wavelength).powi(5)
            * (reference / (ILLUMINANT_A_C2 / (ILLUMINANT_A_TEMPERATURE * wavelength)).exp_m1())
    })
}

// --------------------------------------------------------------------------------------------------------------------

#[rustfmt::skip]
const D65_DATA: [Float; 81] = [
    49.9755, 52.3118, 54.6482, 68.7015, 82.7549, 87.1204, 91.486, 92.4589,
    93.4318, 90.057, 86.6823, 95.7736, 104.865, 110.936, 117.008, 117.41,
    117.812, 116.336, 114.861, 115.392, 115.923, 112.367, 108.811, 109.082,
    109.354, 108.578, 107.802, 106.296, 104.79, 106.239, 107.689, 106.047,
    104.405, 104.225, 104.046, 102.023, 100.0, 98.1671, 96.3342, 96.0611,
    95.788, 92.2368, 88.6856, 89.3459, 90.0062, 89.8026, 89.5991, 88.6489,
    87.6987, 85.4936, 83.2886, 83.4939, 83.6992, 81.863, 80.0268, 80.1207,
    80.2146, 81.2462, 82.2778, 80.281, 78.2842, 74.0027, 69.7213, 70.6652,
    71.6091, 72.979, 74.349, 67.9765, 61.604, 65.7448, 69.8856, 72.4863,
    75.087, 69.3398, 63.5927, 55.0054, 46.4182, 56.6118, 66.8054, 65.0941,
    63.3828,
];

#[rustfmt::skip]
const F2_DATA: [Float; 81] = [
    1.18, 1.48, 1.84, 2.15, 3.44, 15.69, 3.85, 3.74,
    4.19, 4.62, 5.06, 34.98, 11.81, 6.27, 6.63, 6.93,
    7.19, 7.4, 7.54, 7.62, 7.65, 7.62, 7.62, 7.45,
    7.28, 7.15, 7.05, 7.04, 7.16, 7.47, 8.04, 8.88,
    10.01, 24.88, 16.64, 14.59, 16.16, 17.56, 18.62, 21.47,
    22.79, 19.29, 18.66, 17.73, 16.54, 15.21, 13.8, 12.36,
    10.95, 9.65, 8.4, 7.32, 6.31, 5.43, 4.68, 4.02,
    3.45, 2.96, 2.55, 2.19, 1.89, 1.64, 1.53, 1.27,
    1.1, 0.99, 0.88, 0.76, 0.68, 0.61, 0.56, 0.54,
    0.51, 0.47, 0.47, 0.43, 0.46, 0.47, 0.4, 0.33,
    0.27,
];
