//! Dirac spinors and gamma matrices in the Dirac representation.

use std::iter::Sum;
use std::ops::{Add, Mul, Neg};

use num_complex::Complex64;
use serde::{Deserialize, Serialize};

use crate::metric::LorentzIndex;

/// Four-component Dirac spinor.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DiracSpinor {
    components: [Complex64; 4],
}

impl DiracSpinor {
    /// Spinor from explicit components.
    pub fn new(components: [Complex64; 4]) -> Self {
        Self { components }
    }

    /// The all-zero spinor.
    pub fn zero() -> Self {
        Self::new([Complex64::new(0.0, 0.0); 4])
    }

    /// Component access, 0..4.
    pub fn component(&self, i: usize) -> Complex64 {
        self.components[i]
    }

    /// Helicity eigenstate u(p, λ) for a spin-1/2 particle of mass `m`,
    /// energy `e`, momentum polar angle cosine `cos_theta` in the x-z
    /// plane, and doubled helicity `lambda` = ±1. Below threshold the
    /// lower components continue to imaginary values through the
    /// principal-branch square root.
    pub fn helicity_state(m: f64, e: f64, cos_theta: f64, lambda: i32) -> Self {
        let half_cos = ((1.0 + cos_theta) / 2.0).sqrt();
        let half_sin = ((1.0 - cos_theta) / 2.0).sqrt();
        let chi = if lambda > 0 {
            [half_cos, half_sin]
        } else {
            [-half_sin, half_cos]
        };
        let upper = Complex64::new(e + m, 0.0).sqrt();
        let lower = Complex64::new(e - m, 0.0).sqrt() * f64::from(lambda);
        Self::new([
            upper * chi[0],
            upper * chi[1],
            lower * chi[0],
            lower * chi[1],
        ])
    }

    /// Dirac adjoint ū = u†γ⁰.
    pub fn adjoint(&self) -> Self {
        let c = &self.components;
        Self::new([c[0].conj(), c[1].conj(), -c[2].conj(), -c[3].conj()])
    }
}

impl Add for DiracSpinor {
    type Output = DiracSpinor;

    fn add(self, rhs: Self) -> Self {
        Self::new(std::array::from_fn(|i| {
            self.components[i] + rhs.components[i]
        }))
    }
}

impl Neg for DiracSpinor {
    type Output = DiracSpinor;

    fn neg(self) -> Self {
        Self::new(self.components.map(|c| -c))
    }
}

impl Mul<Complex64> for DiracSpinor {
    type Output = DiracSpinor;

    fn mul(self, rhs: Complex64) -> Self {
        Self::new(self.components.map(|c| c * rhs))
    }
}

impl Mul<DiracSpinor> for Complex64 {
    type Output = DiracSpinor;

    fn mul(self, rhs: DiracSpinor) -> DiracSpinor {
        rhs * self
    }
}

impl Sum for DiracSpinor {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::zero(), Add::add)
    }
}

/// 4×4 complex matrix acting on Dirac spinors.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DiracMatrix {
    entries: [[Complex64; 4]; 4],
}

const ZERO: Complex64 = Complex64::new(0.0, 0.0);
const ONE: Complex64 = Complex64::new(1.0, 0.0);
const I: Complex64 = Complex64::new(0.0, 1.0);
const M_ONE: Complex64 = Complex64::new(-1.0, 0.0);
const M_I: Complex64 = Complex64::new(0.0, -1.0);

impl DiracMatrix {
    /// Matrix from explicit row-major entries.
    pub fn new(entries: [[Complex64; 4]; 4]) -> Self {
        Self { entries }
    }

    /// The zero matrix.
    pub fn zero() -> Self {
        Self::new([[ZERO; 4]; 4])
    }

    /// The identity matrix.
    pub fn identity() -> Self {
        let mut entries = [[ZERO; 4]; 4];
        for (i, row) in entries.iter_mut().enumerate() {
            row[i] = ONE;
        }
        Self::new(entries)
    }

    /// Entry access.
    pub fn entry(&self, row: usize, col: usize) -> Complex64 {
        self.entries[row][col]
    }

    /// Gamma matrix γ^μ in the Dirac representation.
    pub fn gamma(mu: LorentzIndex) -> Self {
        match mu {
            LorentzIndex::T => Self::new([
                [ONE, ZERO, ZERO, ZERO],
                [ZERO, ONE, ZERO, ZERO],
                [ZERO, ZERO, M_ONE, ZERO],
                [ZERO, ZERO, ZERO, M_ONE],
            ]),
            LorentzIndex::X => Self::new([
                [ZERO, ZERO, ZERO, ONE],
                [ZERO, ZERO, ONE, ZERO],
                [ZERO, M_ONE, ZERO, ZERO],
                [M_ONE, ZERO, ZERO, ZERO],
            ]),
            LorentzIndex::Y => Self::new([
                [ZERO, ZERO, ZERO, M_I],
                [ZERO, ZERO, I, ZERO],
                [ZERO, I, ZERO, ZERO],
                [M_I, ZERO, ZERO, ZERO],
            ]),
            LorentzIndex::Z => Self::new([
                [ZERO, ZERO, ONE, ZERO],
                [ZERO, ZERO, ZERO, M_ONE],
                [M_ONE, ZERO, ZERO, ZERO],
                [ZERO, ONE, ZERO, ZERO],
            ]),
        }
    }
}

impl Add for DiracMatrix {
    type Output = DiracMatrix;

    fn add(self, rhs: Self) -> Self {
        let mut entries = [[ZERO; 4]; 4];
        for i in 0..4 {
            for j in 0..4 {
                entries[i][j] = self.entries[i][j] + rhs.entries[i][j];
            }
        }
        Self::new(entries)
    }
}

impl Neg for DiracMatrix {
    type Output = DiracMatrix;

    fn neg(self) -> Self {
        let mut entries = self.entries;
        for row in entries.iter_mut() {
            for entry in row.iter_mut() {
                *entry = -*entry;
            }
        }
        Self::new(entries)
    }
}

impl Mul for DiracMatrix {
    type Output = DiracMatrix;

    fn mul(self, rhs: Self) -> Self {
        let mut entries = [[ZERO; 4]; 4];
        for i in 0..4 {
            for j in 0..4 {
                let mut acc = ZERO;
                for k in 0..4 {
                    acc += self.entries[i][k] * rhs.entries[k][j];
                }
                entries[i][j] = acc;
            }
        }
        Self::new(entries)
    }
}

impl Mul<Complex64> for DiracMatrix {
    type Output = DiracMatrix;

    fn mul(self, rhs: Complex64) -> Self {
        let mut entries = self.entries;
        for row in entries.iter_mut() {
            for entry in row.iter_mut() {
                *entry *= rhs;
            }
        }
        Self::new(entries)
    }
}

impl Mul<DiracMatrix> for Complex64 {
    type Output = DiracMatrix;

    fn mul(self, rhs: DiracMatrix) -> DiracMatrix {
        rhs * self
    }
}

impl Mul<DiracSpinor> for DiracMatrix {
    type Output = DiracSpinor;

    fn mul(self, rhs: DiracSpinor) -> DiracSpinor {
        DiracSpinor::new(std::array::from_fn(|i| {
            (0..4).map(|j| self.entries[i][j] * rhs.component(j)).sum()
        }))
    }
}

impl Sum for DiracMatrix {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::zero(), Add::add)
    }
}
