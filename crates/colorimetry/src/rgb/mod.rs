//! RGB colourspaces and their transfer functions.

mod colourspace;
pub mod transfer;

pub use colourspace::{
    normalised_primary_matrix, rgb_colourspace, RgbColourspace, TransferFunction, MAX_RGB,
    PROPHOTO_RGB, RGB_COLOURSPACES, SRGB,
};
