use crate::Float;

/// The chromaticity of CIE illuminant A for the 2º observer.
pub const WHITEPOINT_A: [Float; 2] = [0.44757, 0.40745];

/// The chromaticity of CIE illuminant D50 for the 2º observer.
pub const WHITEPOINT_D50: [Float; 2] = [0.34567, 0.35850];

/// The chromaticity of CIE illuminant D65 for the 2º observer.
pub const WHITEPOINT_D65: [Float; 2] = [0.31271, 0.32902];

/// The chromaticity of the equal-energy illuminant E for the 2º observer.
pub const WHITEPOINT_E: [Float; 2] = [1.0 / 3.0, 1.0 / 3.0];

/// The chromaticity of CIE illuminant F2 for the 2º observer.
pub const WHITEPOINT_F2: [Float; 2] = [0.37208, 0.37529];

/// Look up a whitepoint by illuminant name, e.g., `D65`.
pub fn whitepoint(name: &str) -> Option<[Float; 2]> {
    let whitepoint = match name.trim().to_ascii_uppercase().as_str() {
        "A" => WHITEPOINT_A,
        "D50" => WHITEPOINT_D50,
        "D65" => WHITEPOINT_D65,
        "E" => WHITEPOINT_E,
        "F2" => WHITEPOINT_F2,
        _ => return None,
    };
    Some(whitepoint)
}
