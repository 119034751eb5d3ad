//! Generic rank-R Lorentz tensors over an element type.
//!
//! The rank is a const generic, so contracting tensors of different rank is
//! rejected at compile time rather than at runtime.

use std::ops::{Add, Index, Mul};

use num_complex::Complex64;

use crate::metric::{permutations, LorentzIndex};

/// Dense rank-R tensor mapping index tuples to elements of type `T`.
#[derive(Debug, Clone, PartialEq)]
pub struct LorentzTensor<T, const R: usize> {
    components: Vec<T>,
}

impl<T, const R: usize> LorentzTensor<T, R> {
    /// Builds a tensor by evaluating `f` on every index tuple.
    pub fn from_fn(mut f: impl FnMut([LorentzIndex; R]) -> T) -> Self {
        let components = permutations::<R>().into_iter().map(&mut f).collect();
        Self { components }
    }

    /// Component at the given index tuple.
    pub fn get(&self, indices: [LorentzIndex; R]) -> &T {
        &self.components[Self::flat(indices)]
    }

    fn flat(indices: [LorentzIndex; R]) -> usize {
        indices
            .iter()
            .fold(0, |acc, idx| acc * 4 + idx.as_usize())
    }
}

impl<T, const R: usize> Index<[LorentzIndex; R]> for LorentzTensor<T, R> {
    type Output = T;

    fn index(&self, indices: [LorentzIndex; R]) -> &T {
        self.get(indices)
    }
}

impl<T: Clone + Add<Output = T>, const R: usize> Add for LorentzTensor<T, R> {
    type Output = LorentzTensor<T, R>;

    fn add(self, rhs: Self) -> Self {
        let components = self
            .components
            .into_iter()
            .zip(rhs.components)
            .map(|(a, b)| a + b)
            .collect();
        Self { components }
    }
}

impl<T: Clone + Mul<Complex64, Output = T>, const R: usize> Mul<Complex64>
    for LorentzTensor<T, R>
{
    type Output = LorentzTensor<T, R>;

    fn mul(self, rhs: Complex64) -> Self {
        let components = self.components.into_iter().map(|c| c * rhs).collect();
        Self { components }
    }
}

/// Rank-1 tensor (four-vector) from components ordered (t, x, y, z).
pub fn four_vector<T: Clone>(components: [T; 4]) -> LorentzTensor<T, 1> {
    LorentzTensor::from_fn(|[mu]| components[mu.as_usize()].clone())
}

/// Rank-2 tensor from row-major components, first index slowest.
pub fn rank_two<T: Clone>(components: [[T; 4]; 4]) -> LorentzTensor<T, 2> {
    LorentzTensor::from_fn(|[mu, nu]| components[mu.as_usize()][nu.as_usize()].clone())
}
