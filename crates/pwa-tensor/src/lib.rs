#![deny(missing_docs)]
#![doc = "Lorentz tensor algebra for helicity amplitudes: metric signs, \
generic rank-R tensors, Dirac spinor and matrix elements, and the \
type-dispatching metric-weighted contraction."]

pub mod contract;
pub mod dirac;
pub mod metric;
pub mod tensor;

pub use contract::{contract, ElementContract};
pub use dirac::{DiracMatrix, DiracSpinor};
pub use metric::{metric, metric_product, permutations, LorentzIndex, LORENTZ_INDICES};
pub use tensor::{four_vector, rank_two, LorentzTensor};
