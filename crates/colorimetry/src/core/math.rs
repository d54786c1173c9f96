use crate::Float;

/// A floating point accumulator.
///
/// Unlike plain summation with the `+` operator, this struct minimizes the
/// cumulative error by using [Kahan's algorithm with Neumaier's
/// improvements](https://en.wikipedia.org/wiki/Kahan_summation_algorithm).
/// Spectral integrals add up hundreds of products that differ by several orders
/// of magnitude, which is exactly the case compensated summation is made for.
#[derive(Clone, Copy, Debug, Default)]
pub(crate) struct Sum {
    sum: Float,
    compensation: Float,
}

impl Sum {
    /// Create a new, zero accumulator.
    #[inline]
    pub const fn new() -> Self {
        Self {
            sum: 0.0,
            compensation: 0.0,
        }
    }

    /// Get the accumulated total.
    #[inline]
    pub fn value(&self) -> Float {
        self.sum + self.compensation
    }
}

impl std::ops::AddAssign<Float> for Sum {
    fn add_assign(&mut self, rhs: Float) {
        let t = self.sum + rhs;
        if rhs.abs() < self.sum.abs() {
            self.compensation += (self.sum - t) + rhs;
        } else {
            self.compensation += (rhs - t) + self.sum;
        }
        self.sum = t;
    }
}

impl std::iter::Sum<Float> for Sum {
    fn sum<I: Iterator<Item = Float>>(iter: I) -> Self {
        let mut total = Sum::new();
        for value in iter {
            total += value;
        }
        total
    }
}

/// A three-way floating point accumulator.
#[cfg(test)]
#[derive(Clone, Copy, Debug, Default)]
pub(crate) struct ThreeSum {
    sums: [Sum; 3],
}

#[cfg(test)]
impl ThreeSum {
    /// Create a new, zero accumulator.
    pub const fn new() -> Self {
        Self {
            sums: [Sum::new(), Sum::new(), Sum::new()],
        }
    }

    /// Get the accumulated totals.
    pub fn value(&self) -> [Float; 3] {
        [
            self.sums[0].value(),
            self.sums[1].value(),
            self.sums[2].value(),
        ]
    }
}

#[cfg(test)]
impl std::ops::AddAssign<[Float; 3]> for ThreeSum {
    fn add_assign(&mut self, rhs: [Float; 3]) {
        self.sums[0] += rhs[0];
        self.sums[1] += rhs[1];
        self.sums[2] += rhs[2];
    }
}

// --------------------------------------------------------------------------------------------------------------------

/// A 3 by 3 matrix in row-major order.
pub type Matrix = [[Float; 3]; 3];

/// Multiply the 3 by 3 matrix and 3-element vector with each other, producing a
/// new 3-element vector.
#[inline]
pub(crate) fn multiply(matrix: &Matrix, vector: &[Float; 3]) -> [Float; 3] {
    let [row1, row2, row3] = matrix;

    [
        row1[0].mul_add(vector[0], row1[1].mul_add(vector[1], row1[2] * vector[2])),
        row2[0].mul_add(vector[0], row2[1].mul_add(vector[1], row2[2] * vector[2])),
        row3[0].mul_add(vector[0], row3[1].mul_add(vector[1], row3[2] * vector[2])),
    ]
}

/// Invert the 3 by 3 matrix via its adjugate.
///
/// This function returns `None` if the matrix is singular.
pub(crate) fn invert(matrix: &Matrix) -> Option<Matrix> {
    let [[a, b, c], [d, e, f], [g, h, i]] = *matrix;

    let cofactor00 = e * i - f * h;
    let cofactor01 = f * g - d * i;
    let cofactor02 = d * h - e * g;
    let determinant = a * cofactor00 + b * cofactor01 + c * cofactor02;
    if determinant == 0.0 || !determinant.is_finite() {
        return None;
    }

    let inverse = [
        [cofactor00, c * h - b * i, b * f - c * e],
        [cofactor01, a * i - c * g, c * d - a * f],
        [cofactor02, b * g - a * h, a * e - b * d],
    ];

    Some(inverse.map(|row| row.map(|value| value / determinant)))
}

// --------------------------------------------------------------------------------------------------------------------

#[cfg(test)]
mod test {
    use super::{invert, multiply, Sum, ThreeSum};
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_sum() {
        let mut sum = Sum::new();
        sum += 1.0;
        sum += 10e100;
        sum += 1.0;
        sum += -10e100;
        assert_eq!(sum.value(), 2.0);
        assert_eq!(1.0 + 10e100 + 1.0 - 10e100, 0.0);

        let total: Sum = [0.1, 0.2, 0.3].into_iter().sum();
        assert_eq!(total.value(), 0.6);
    }

    #[test]
    fn test_three_sum() {
        let mut sum = ThreeSum::new();
        sum += [1.0, 2.0, 3.0];
        sum += [1.0, -2.0, 0.5];
        assert_eq!(sum.value(), [2.0, 0.0, 3.5]);
    }

    #[test]
    fn test_invert() {
        let matrix = [[2.0, 0.0, 1.0], [1.0, 3.0, 0.0], [0.0, 1.0, 4.0]];
        let inverse = invert(&matrix).unwrap();
        let vector = [0.3, -1.2, 7.0];
        let roundtrip = multiply(&inverse, &multiply(&matrix, &vector));
        for (actual, expected) in roundtrip.iter().zip(vector.iter()) {
            assert_abs_diff_eq!(actual, expected, epsilon = 1e-12);
        }

        assert_eq!(invert(&[[1.0, 2.0, 3.0], [2.0, 4.0, 6.0], [0.0, 0.0, 1.0]]), None);
    }
}
