//! Elementwise vector algebra on equal-length slices.
//!
//! Every operation allocates a fresh output vector and checks operand
//! lengths up front, surfacing [`StepError::DimensionMismatch`] instead of
//! indexing out of range.

use crate::error::{StepError, StepResult};
use crate::traits::Scalar;

/// Elementwise sum of two equal-length vectors.
pub fn add<T: Scalar>(a: &[T], b: &[T]) -> StepResult<Vec<T>> {
    if a.len() != b.len() {
        return Err(StepError::DimensionMismatch {
            expected: a.len(),
            actual: b.len(),
        });
    }
    Ok(a.iter().zip(b.iter()).map(|(&x, &y)| x + y).collect())
}

/// Scales every entry of `v` by `k`.
pub fn scale<T: Scalar>(v: &[T], k: T) -> Vec<T> {
    v.iter().map(|&x| x * k).collect()
}

/// Weighted linear combination of `(vector, coefficient)` terms.
///
/// The result's `i`-th entry is `sum(coef_j * vec_j[i])`. The length is
/// taken from the first term; requires at least one term, and every term's
/// vector must have that length.
pub fn combine<T: Scalar>(terms: &[(&[T], T)]) -> StepResult<Vec<T>> {
    let (first, _) = terms.first().copied().ok_or(StepError::EmptyCombination)?;
    let dim = first.len();

    let mut out = vec![T::zero(); dim];
    for &(vec, coef) in terms {
        if vec.len() != dim {
            return Err(StepError::DimensionMismatch {
                expected: dim,
                actual: vec.len(),
            });
        }
        for i in 0..dim {
            out[i] = out[i] + coef * vec[i];
        }
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::{add, combine, scale};
    use crate::error::StepError;

    #[test]
    fn add_sums_elementwise() {
        let sum = add(&[1.0, 2.0], &[3.0, 4.0]).expect("lengths match");
        assert_eq!(sum, vec![4.0, 6.0]);
    }

    #[test]
    fn add_rejects_unequal_lengths() {
        let err = add(&[1.0, 2.0], &[3.0]).expect_err("expected error");
        assert_eq!(
            err,
            StepError::DimensionMismatch {
                expected: 2,
                actual: 1
            }
        );
    }

    #[test]
    fn scale_preserves_length() {
        let scaled = scale(&[1.0, -2.0, 0.5], 2.0);
        assert_eq!(scaled, vec![2.0, -4.0, 1.0]);
    }

    #[test]
    fn combine_with_unit_coefficient_is_identity() {
        let v = vec![3.0, -1.0, 2.5];
        let combined = combine(&[(v.as_slice(), 1.0)]).expect("single term");
        assert_eq!(combined, v);
    }

    #[test]
    fn combine_weights_each_term() {
        let combined = combine(&[
            ([1.0, 0.0].as_slice(), 2.0),
            ([0.0, 1.0].as_slice(), 3.0),
        ])
        .expect("lengths match");
        assert_eq!(combined, vec![2.0, 3.0]);
    }

    #[test]
    fn combine_rejects_mismatched_terms() {
        let err = combine(&[
            ([1.0, 2.0].as_slice(), 1.0),
            ([3.0].as_slice(), 1.0),
        ])
        .expect_err("expected error");
        assert_eq!(
            err,
            StepError::DimensionMismatch {
                expected: 2,
                actual: 1
            }
        );
    }

    #[test]
    fn combine_rejects_zero_terms() {
        let err = combine::<f64>(&[]).expect_err("expected error");
        assert_eq!(err, StepError::EmptyCombination);
    }
}
