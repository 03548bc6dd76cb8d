use std::ops::{Add, Div, Index, IndexMut, Mul, Sub};

use nalgebra::SVector;

use crate::error::{ParamError, Result};
use crate::parameters::{PARAM_COUNT, ParamId};

/// Dense fixed-length vector with one slot per parameter.
///
/// The length is part of the type, so arithmetic between mismatched
/// lengths does not compile; runtime slices go through [`ParamArray::try_from_slice`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParamArray<const N: usize>(SVector<f32, N>);

pub type ParameterVector = ParamArray<PARAM_COUNT>;

impl<const N: usize> ParamArray<N> {
    pub fn from_element(value: f32) -> Self {
        Self(SVector::from_element(value))
    }

    pub fn zeros() -> Self {
        Self::from_element(0.0)
    }

    pub fn from_fn(mut f: impl FnMut(usize) -> f32) -> Self {
        Self(SVector::from_fn(|i, _| f(i)))
    }

    pub fn try_from_slice(values: &[f32]) -> Result<Self> {
        if values.len() != N {
            return Err(ParamError::LengthMismatch {
                expected: N,
                actual: values.len(),
            });
        }
        Ok(Self(SVector::from_column_slice(values)))
    }

    pub const fn len(&self) -> usize {
        N
    }

    pub const fn is_empty(&self) -> bool {
        N == 0
    }

    pub fn multiply_element(&self, other: &Self) -> Self {
        Self(self.0.component_mul(&other.0))
    }

    /// Elementwise quotient; zero divisors yield inf/NaN.
    pub fn divide_element(&self, other: &Self) -> Self {
        Self(self.0.component_div(&other.0))
    }

    pub fn map(&self, f: impl FnMut(f32) -> f32) -> Self {
        Self(self.0.map(f))
    }

    pub fn iter(&self) -> impl Iterator<Item = &f32> {
        self.0.iter()
    }

    pub fn as_slice(&self) -> &[f32] {
        self.0.as_slice()
    }
}

impl<const N: usize> Default for ParamArray<N> {
    fn default() -> Self {
        Self::zeros()
    }
}

impl<const N: usize> Add for ParamArray<N> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self(self.0 + rhs.0)
    }
}

impl<const N: usize> Sub for ParamArray<N> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self(self.0 - rhs.0)
    }
}

impl<const N: usize> Mul<f32> for ParamArray<N> {
    type Output = Self;

    fn mul(self, rhs: f32) -> Self {
        Self(self.0 * rhs)
    }
}

impl<const N: usize> Div<f32> for ParamArray<N> {
    type Output = Self;

    fn div(self, rhs: f32) -> Self {
        Self(self.0 / rhs)
    }
}

impl<const N: usize> Index<usize> for ParamArray<N> {
    type Output = f32;

    fn index(&self, index: usize) -> &f32 {
        &self.0[index]
    }
}

impl<const N: usize> IndexMut<usize> for ParamArray<N> {
    fn index_mut(&mut self, index: usize) -> &mut f32 {
        &mut self.0[index]
    }
}

impl Index<ParamId> for ParameterVector {
    type Output = f32;

    fn index(&self, id: ParamId) -> &f32 {
        &self.0[id.index()]
    }
}

impl IndexMut<ParamId> for ParameterVector {
    fn index_mut(&mut self, id: ParamId) -> &mut f32 {
        &mut self.0[id.index()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn count_vec() -> ParameterVector {
        ParameterVector::from_fn(|i| i as f32)
    }

    #[test]
    fn adding_zeros_and_ones_gets_ones() {
        let sum = ParameterVector::zeros() + ParameterVector::from_element(1.0);
        assert!(sum.iter().all(|&v| v == 1.0));
    }

    #[test]
    fn adding_count_to_itself_doubles() {
        let sum = count_vec() + count_vec();
        for i in 0..PARAM_COUNT {
            assert_eq!(sum[i], i as f32 * 2.0);
        }
    }

    #[test]
    fn subtracting_ones_from_count_starts_at_minus_one() {
        let diff = count_vec() - ParameterVector::from_element(1.0);
        for i in 0..PARAM_COUNT {
            assert_eq!(diff[i], i as f32 - 1.0);
        }
    }

    #[test]
    fn elementwise_identity_and_zero_absorption() {
        let count = count_vec();
        let identity = count.multiply_element(&ParameterVector::from_element(1.0));
        let absorbed = count.multiply_element(&ParameterVector::zeros());
        for i in 0..PARAM_COUNT {
            assert_eq!(identity[i], i as f32);
            assert_eq!(absorbed[i], 0.0);
        }
    }

    #[test]
    fn scalar_multiply_and_divide() {
        let doubled = count_vec() * 2.0;
        let halved = count_vec() / 2.0;
        for i in 0..PARAM_COUNT {
            assert_eq!(doubled[i], i as f32 * 2.0);
            assert_eq!(halved[i], i as f32 / 2.0);
        }
    }

    #[test]
    fn divide_element_propagates_zero_division() {
        let quotient = count_vec().divide_element(&ParameterVector::zeros());
        assert!(quotient[0].is_nan());
        assert!(quotient[1].is_infinite());

        let twos = ParameterVector::from_element(2.0);
        assert_eq!(count_vec().divide_element(&twos)[5], 2.5);
    }

    #[test]
    fn indexing_by_param_id() {
        let mut v = ParameterVector::zeros();
        v[ParamId::Depth] = 3.0;
        assert_eq!(v[4], 3.0);
        assert_eq!(v[ParamId::Depth], 3.0);
    }

    #[test]
    fn slice_length_is_checked() {
        let err = ParameterVector::try_from_slice(&[1.0, 2.0]).unwrap_err();
        assert!(matches!(err, ParamError::LengthMismatch { expected: 16, actual: 2 }));

        let values: Vec<f32> = (0..PARAM_COUNT).map(|i| i as f32).collect();
        let v = ParameterVector::try_from_slice(&values).expect("length matches");
        assert_eq!(v, count_vec());
        assert_eq!(v.as_slice(), values.as_slice());
    }
}
