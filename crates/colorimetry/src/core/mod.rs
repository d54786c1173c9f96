mod math;

// math
pub use math::Matrix;
pub(crate) use math::{invert, multiply, Sum};
#[cfg(test)]
pub(crate) use math::ThreeSum;
