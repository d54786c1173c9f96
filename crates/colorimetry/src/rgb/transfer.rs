//! Transfer functions between linear and encoded RGB component values.
//!
//! An opto-electronic transfer function (OETF) encodes a scene-linear value
//! for storage or transmission. The matching electro-optical transfer function
//! (EOTF) decodes it again. Each pair below round-trips to within floating
//! point precision over its encoding range.
//!
//! RIMM and ERIMM RGB encode into integer code values, with the maximum code
//! value a parameter. The functions without parameters use the 8-bit defaults
//! of the standard.

use crate::Float;

/// Encode a linear sRGB component value.
pub fn oetf_srgb(value: Float) -> Float {
    if value <= 0.0031308 {
        value * 12.92
    } else {
        value.powf(1.0 / 2.4).mul_add(1.055, -0.055)
    }
}

/// Decode an encoded sRGB component value.
pub fn eotf_srgb(value: Float) -> Float {
    if value <= oetf_srgb(0.0031308) {
        value / 12.92
    } else {
        ((value + 0.055) / 1.055).powf(2.4)
    }
}

// --------------------------------------------------------------------------------------------------------------------

const ROMM_THRESHOLD: Float = 0.001953;

/// Encode a linear ROMM RGB, i.e., ProPhoto RGB, component value.
pub fn oetf_romm(value: Float) -> Float {
    if value < ROMM_THRESHOLD {
        value * 16.0
    } else {
        value.powf(1.0 / 1.8)
    }
}

/// Decode an encoded ROMM RGB, i.e., ProPhoto RGB, component value.
pub fn eotf_romm(value: Float) -> Float {
    if value < oetf_romm(ROMM_THRESHOLD) {
        value / 16.0
    } else {
        value.powf(1.8)
    }
}

/// Encode a linear component value with a pure gamma of 2.2.
pub fn oetf_gamma_2_2(value: Float) -> Float {
    value.powf(1.0 / 2.2)
}

/// Decode a component value encoded with a pure gamma of 2.2.
pub fn eotf_gamma_2_2(value: Float) -> Float {
    value.powf(2.2)
}

// --------------------------------------------------------------------------------------------------------------------

/// The default maximum code value of RIMM and ERIMM RGB.
pub const RIMM_I_MAX: Float = 255.0;

/// The default clipping exposure of RIMM RGB.
pub const RIMM_E_CLIP: Float = 2.0;

/// The default minimum exposure of ERIMM RGB.
pub const ERIMM_E_MIN: Float = 0.001;

/// The default clipping exposure of ERIMM RGB.
pub const ERIMM_E_CLIP: Float = 316.2;

const RIMM_THRESHOLD: Float = 0.018;

#[inline]
fn rimm_curve(value: Float) -> Float {
    if value < RIMM_THRESHOLD {
        4.5 * value
    } else {
        value.powf(0.45).mul_add(1.099, -0.099)
    }
}

/// Encode a linear RIMM RGB component value with the given maximum code value
/// and clipping exposure.
///
/// Negative values encode as zero and values above the clipping exposure as
/// the maximum code value.
pub fn encode_rimm(value: Float, i_max: Float, e_clip: Float) -> Float {
    if e_clip < value {
        return i_max;
    } else if value < 0.0 {
        return 0.0;
    }

    let v_clip = rimm_curve(e_clip);
    i_max / v_clip * rimm_curve(value)
}

/// Decode a RIMM RGB code value with the given maximum code value and clipping
/// exposure.
pub fn decode_rimm(value: Float, i_max: Float, e_clip: Float) -> Float {
    let v_clip = rimm_curve(e_clip);
    let m = v_clip * value / i_max;

    if value < encode_rimm(RIMM_THRESHOLD, i_max, e_clip) {
        m / 4.5
    } else {
        ((m + 0.099) / 1.099).powf(1.0 / 0.45)
    }
}

/// Encode a linear RIMM RGB component value as an 8-bit code value.
pub fn oetf_rimm(value: Float) -> Float {
    encode_rimm(value, RIMM_I_MAX, RIMM_E_CLIP)
}

/// Decode an 8-bit RIMM RGB code value.
pub fn eotf_rimm(value: Float) -> Float {
    decode_rimm(value, RIMM_I_MAX, RIMM_E_CLIP)
}

// --------------------------------------------------------------------------------------------------------------------

/// The logarithmic ranges of ERIMM RGB: the full range from minimum to
/// clipping exposure and the linear toe from minimum exposure to e times that.
struct ErimmRanges {
    e_t: Float,
    full: Float,
    toe: Float,
}

impl ErimmRanges {
    fn new(e_min: Float, e_clip: Float) -> Self {
        let e_t = std::f64::consts::E as Float * e_min;
        Self {
            e_t,
            full: e_clip.ln() - e_min.ln(),
            toe: e_t.ln() - e_min.ln(),
        }
    }
}

/// Encode a linear ERIMM RGB component value with the given maximum code
/// value, minimum exposure, and clipping exposure.
///
/// Values at or below e times the minimum exposure fall onto a linear toe.
/// Negative values encode as zero and values above the clipping exposure as
/// the maximum code value.
pub fn log_encoding_erimm(value: Float, i_max: Float, e_min: Float, e_clip: Float) -> Float {
    if value < 0.0 {
        return 0.0;
    } else if e_clip < value {
        return i_max;
    }

    let ranges = ErimmRanges::new(e_min, e_clip);
    if value <= ranges.e_t {
        i_max * (ranges.toe / ranges.full) * (value / ranges.e_t)
    } else {
        i_max * (value.ln() - e_min.ln()) / ranges.full
    }
}

/// Decode an ERIMM RGB code value with the given maximum code value, minimum
/// exposure, and clipping exposure.
pub fn log_decoding_erimm(value: Float, i_max: Float, e_min: Float, e_clip: Float) -> Float {
    let ranges = ErimmRanges::new(e_min, e_clip);
    if value <= i_max * ranges.toe / ranges.full {
        (ranges.full / ranges.toe) * (value * ranges.e_t / i_max)
    } else {
        (value / i_max).mul_add(ranges.full, e_min.ln()).exp()
    }
}

/// Encode a linear ERIMM RGB component value as an 8-bit code value.
pub fn oetf_erimm(value: Float) -> Float {
    log_encoding_erimm(value, RIMM_I_MAX, ERIMM_E_MIN, ERIMM_E_CLIP)
}

/// Decode an 8-bit ERIMM RGB code value.
pub fn eotf_erimm(value: Float) -> Float {
    log_decoding_erimm(value, RIMM_I_MAX, ERIMM_E_MIN, ERIMM_E_CLIP)
}

// ====================================================================================================================

#[cfg(test)]
mod test {
    use super::*;
    use approx::assert_abs_diff_eq;

    type TransferPair = (&'static str, fn(Float) -> Float, fn(Float) -> Float);

    const PAIRS: [TransferPair; 5] = [
        ("sRGB", oetf_srgb, eotf_srgb),
        ("ROMM", oetf_romm, eotf_romm),
        ("gamma 2.2", oetf_gamma_2_2, eotf_gamma_2_2),
        ("RIMM", oetf_rimm, eotf_rimm),
        ("ERIMM", oetf_erimm, eotf_erimm),
    ];

    #[test]
    fn test_reference_values() {
        assert_abs_diff_eq!(oetf_srgb(0.18), 0.46135612950044164, epsilon = 1e-12);
        assert_abs_diff_eq!(oetf_romm(0.18), 0.3857114, epsilon = 1e-7);
        assert_abs_diff_eq!(oetf_rimm(0.18), 74.3768017, epsilon = 1e-7);
        assert_abs_diff_eq!(oetf_erimm(0.18), 104.5633593, epsilon = 1e-7);

        assert_abs_diff_eq!(eotf_romm(0.3857114247511376), 0.18, epsilon = 1e-12);
        assert_abs_diff_eq!(eotf_rimm(74.37680178131521), 0.18, epsilon = 1e-12);
        assert_abs_diff_eq!(eotf_erimm(104.56335932049294), 0.18, epsilon = 1e-12);
    }

    #[test]
    fn test_linear_segments() {
        assert_abs_diff_eq!(oetf_srgb(0.001), 0.01292, epsilon = 1e-15);
        assert_eq!(oetf_romm(0.001), 0.016);
        assert_abs_diff_eq!(oetf_rimm(0.01), 8.183112063564103, epsilon = 1e-9);
        assert_abs_diff_eq!(oetf_erimm(0.002), 14.814954677405975, epsilon = 1e-9);
    }

    #[test]
    fn test_clipping() {
        assert_eq!(oetf_rimm(-1.0), 0.0);
        assert_abs_diff_eq!(oetf_rimm(2.0), 255.0, epsilon = 1e-12);
        assert_eq!(oetf_rimm(3.0), 255.0);
        assert_eq!(encode_rimm(3.0, 4095.0, RIMM_E_CLIP), 4095.0);

        assert_eq!(oetf_erimm(-1.0), 0.0);
        assert_abs_diff_eq!(oetf_erimm(316.2), 255.0, epsilon = 1e-12);
        assert_eq!(oetf_erimm(400.0), 255.0);
    }

    #[test]
    fn test_round_trip() {
        for (name, oetf, eotf) in PAIRS {
            for index in 0..1000 {
                let value = index as Float / 999.0;
                let decoded = eotf(oetf(value));
                assert!(
                    (decoded - value).abs() < 1e-7,
                    "{} fails to round-trip {}",
                    name,
                    value
                );
            }
        }
    }
}
