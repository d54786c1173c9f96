use crate::spectrum::TabularDistribution;
use crate::Float;

/// The CIE 1924 photopic luminous efficiency function V(λ) from 360nm to 830nm
/// at 5nm resolution.
///
/// The function describes the relative sensitivity of the light-adapted human
/// eye. It peaks at 555nm, where it is exactly one. The entries are every fifth
/// entry of the 1nm table, which carries seven significant digits at 535nm,
/// 550nm, and 780nm, where the 5nm table of the 2º standard observer rounds.
pub static CIE_1924_PHOTOPIC_LEF: TabularDistribution = TabularDistribution::new(
    "CIE 1924 Photopic Standard Observer",
    360,
    5,
    21.371407052,
    &PHOTOPIC_DATA,
);

#[rustfmt::skip]
const PHOTOPIC_DATA: [Float; 95] = [
    3.917e-6, 6.965e-6, 1.239e-5, 2.202e-5, 3.9e-5, 6.4e-5, 0.00012, 0.000217,
    0.000396, 0.00064, 0.00121, 0.00218, 0.004, 0.0073, 0.0116, 0.01684,
    0.023, 0.0298, 0.038, 0.048, 0.06, 0.0739, 0.09098, 0.1126,
    0.13902, 0.1693, 0.20802, 0.2586, 0.323, 0.4073, 0.503, 0.6082,
    0.71, 0.7932, 0.862, 0.9148501, 0.954, 0.9803, 0.9949501, 1.0,
    0.995, 0.9786, 0.952, 0.9154, 0.87, 0.8163, 0.757, 0.6949,
    0.631, 0.5668, 0.503, 0.4412, 0.381, 0.321, 0.265, 0.217,
    0.175, 0.1382, 0.107, 0.0816, 0.061, 0.04458, 0.032, 0.0232,
    0.017, 0.01192, 0.00821, 0.005723, 0.004102, 0.002929, 0.002091, 0.001484,
    0.001047, 0.00074, 0.00052, 0.0003611, 0.0002492, 0.0001719, 0.00012, 8.48e-5,
    6.0e-5, 4.24e-5, 3.0e-5, 2.12e-5, 1.499e-5, 1.05e-5, 7.4e-6, 5.2e-6,
    3.6e-6, 2.5e-6, 1.7e-6, 1.2e-6, 8.5e-7, 6.0e-7, 4.2e-7,
];
