//! Metric-weighted tensor contraction with type-dispatched element rules.
//!
//! The rank-enumeration driver depends only on [`ElementContract`], never on
//! concrete element types. One implementation exists per element pair: plain
//! products for scalars and matrices, the Dirac bilinear for spinor pairs.

use std::iter::Sum;
use std::ops::Neg;

use num_complex::Complex64;

use crate::dirac::{DiracMatrix, DiracSpinor};
use crate::metric::{metric_product, permutations};
use crate::tensor::LorentzTensor;

/// Element-level contraction rule between two tensor element types.
pub trait ElementContract<Rhs = Self> {
    /// Result of contracting one element pair.
    type Output;

    /// Contracts a single pair of components.
    fn contract_elements(self, rhs: Rhs) -> Self::Output;
}

impl ElementContract for Complex64 {
    type Output = Complex64;

    fn contract_elements(self, rhs: Complex64) -> Complex64 {
        self * rhs
    }
}

impl ElementContract for DiracMatrix {
    type Output = DiracMatrix;

    fn contract_elements(self, rhs: DiracMatrix) -> DiracMatrix {
        self * rhs
    }
}

// The one special case: spinor pairs contract to a scalar (the Dirac
// bilinear), not to a componentwise product.
impl ElementContract for DiracSpinor {
    type Output = Complex64;

    fn contract_elements(self, rhs: DiracSpinor) -> Complex64 {
        (0..4).map(|i| self.component(i) * rhs.component(i)).sum()
    }
}

impl ElementContract<DiracMatrix> for Complex64 {
    type Output = DiracMatrix;

    fn contract_elements(self, rhs: DiracMatrix) -> DiracMatrix {
        self * rhs
    }
}

impl ElementContract<Complex64> for DiracMatrix {
    type Output = DiracMatrix;

    fn contract_elements(self, rhs: Complex64) -> DiracMatrix {
        self * rhs
    }
}

impl ElementContract<DiracSpinor> for Complex64 {
    type Output = DiracSpinor;

    fn contract_elements(self, rhs: DiracSpinor) -> DiracSpinor {
        self * rhs
    }
}

impl ElementContract<Complex64> for DiracSpinor {
    type Output = DiracSpinor;

    fn contract_elements(self, rhs: Complex64) -> DiracSpinor {
        self * rhs
    }
}

/// Full contraction of two rank-R tensors: for every index tuple, the
/// element contraction weighted by the product of metric signs, summed over
/// all 4^R tuples. Tensors of different rank cannot reach this function;
/// the rank is part of the type.
pub fn contract<L, Rhs, const R: usize>(
    left: &LorentzTensor<L, R>,
    right: &LorentzTensor<Rhs, R>,
) -> L::Output
where
    L: ElementContract<Rhs> + Clone,
    Rhs: Clone,
    L::Output: Neg<Output = L::Output> + Sum,
{
    permutations::<R>()
        .into_iter()
        .map(|tuple| {
            let term = left
                .get(tuple)
                .clone()
                .contract_elements(right.get(tuple).clone());
            if metric_product(&tuple) < 0 {
                -term
            } else {
                term
            }
        })
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metric::LorentzIndex;
    use crate::tensor::four_vector;

    fn c(re: f64) -> Complex64 {
        Complex64::new(re, 0.0)
    }

    #[test]
    fn minkowski_dot_product() {
        let p = four_vector([c(5.0), c(1.0), c(2.0), c(3.0)]);
        let q = four_vector([c(4.0), c(0.5), c(1.5), c(2.5)]);
        let dot = contract(&p, &q);
        let expected = 5.0 * 4.0 - 1.0 * 0.5 - 2.0 * 1.5 - 3.0 * 2.5;
        assert!((dot.re - expected).abs() < 1e-12);
    }

    #[test]
    fn slash_from_gamma_contraction() {
        // Contract γ^μ against p_μ and check p-slash entries.
        let gammas = LorentzTensor::from_fn(|[mu]| DiracMatrix::gamma(mu));
        let p = four_vector([c(2.0), c(0.0), c(0.0), c(1.0)]);
        let pslash = contract(&gammas, &p);
        let direct = DiracMatrix::gamma(LorentzIndex::T) * c(2.0)
            + -(DiracMatrix::gamma(LorentzIndex::Z) * c(1.0));
        assert_eq!(pslash, direct);
    }
}
