use crate::error::{Result, WinnowError};

/// Inner product of two equal-length slices.
///
/// Returns `WinnowError::DimensionMismatch` (with `lhs.len()` as the expected
/// length) when the slices differ in length.
pub fn dot(lhs: &[f64], rhs: &[f64]) -> Result<f64> {
    if lhs.len() != rhs.len() {
        return Err(WinnowError::DimensionMismatch {
            expected: lhs.len(),
            got: rhs.len(),
        });
    }
    Ok(dot_unchecked(lhs, rhs))
}

fn dot_unchecked(lhs: &[f64], rhs: &[f64]) -> f64 {
    lhs.iter().zip(rhs.iter()).map(|(a, b)| a * b).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dot_sums_elementwise_products() {
        let a = [1.0, 2.0, 3.0];
        let b = [4.0, -5.0, 0.5];
        assert_eq!(dot(&a, &b).unwrap(), 4.0 - 10.0 + 1.5);
    }

    #[test]
    fn dot_of_empty_slices_is_zero() {
        assert_eq!(dot(&[], &[]).unwrap(), 0.0);
    }

    #[test]
    fn dot_rejects_unequal_lengths() {
        let err = dot(&[1.0, 2.0], &[1.0]).unwrap_err();
        assert_eq!(err, WinnowError::DimensionMismatch { expected: 2, got: 1 });
    }

    #[test]
    fn handles_odd_lengths() {
        let a = [1.0, 1.0, 1.0, 1.0, 1.0];
        let b = [1.0, 2.0, 3.0, 4.0, 5.0];
        assert_eq!(dot_unchecked(&a, &b), 15.0);
        assert_eq!(dot(&a, &b).unwrap(), 15.0);
    }
}
