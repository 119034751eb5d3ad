//! Minkowski metric signs and index-tuple enumeration.
//!
//! Mostly-minus convention: g = diag(+1, −1, −1, −1).

use serde::{Deserialize, Serialize};

/// One symbolic Lorentz index value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum LorentzIndex {
    /// Time component (index 0).
    T,
    /// Spatial x component (index 1).
    X,
    /// Spatial y component (index 2).
    Y,
    /// Spatial z component (index 3).
    Z,
}

/// The four index values in canonical order.
pub const LORENTZ_INDICES: [LorentzIndex; 4] = [
    LorentzIndex::T,
    LorentzIndex::X,
    LorentzIndex::Y,
    LorentzIndex::Z,
];

impl LorentzIndex {
    /// Position of the index in the canonical ordering.
    pub fn as_usize(self) -> usize {
        match self {
            LorentzIndex::T => 0,
            LorentzIndex::X => 1,
            LorentzIndex::Y => 2,
            LorentzIndex::Z => 3,
        }
    }
}

/// Diagonal metric sign for a single index: +1 for time, −1 for space.
pub fn metric(mu: LorentzIndex) -> i32 {
    match mu {
        LorentzIndex::T => 1,
        _ => -1,
    }
}

/// Product of metric signs over an index tuple, weighting one term of a
/// full contraction sum.
pub fn metric_product(indices: &[LorentzIndex]) -> i32 {
    indices.iter().map(|&mu| metric(mu)).product()
}

/// All 4^R index tuples of rank R in a deterministic order. Every tuple
/// appears exactly once; a contraction iterates this with no omissions.
pub fn permutations<const R: usize>() -> Vec<[LorentzIndex; R]> {
    let total = 4usize.pow(R as u32);
    let mut out = Vec::with_capacity(total);
    for mut counter in 0..total {
        let mut tuple = [LorentzIndex::T; R];
        for slot in tuple.iter_mut().rev() {
            *slot = LORENTZ_INDICES[counter % 4];
            counter /= 4;
        }
        out.push(tuple);
    }
    out
}
