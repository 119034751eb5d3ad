//! Total hadronic cross-section parameterizations for the bottom vertex.

use serde::{Deserialize, Serialize};

/// Total cross-section of the unmeasured subsystem, evaluated at its
/// invariant mass squared. Results are in mb. Implementations are swappable
/// at runtime through
/// [`TripleRegge::set_sigma_total`](crate::TripleRegge::set_sigma_total).
pub trait TotalCrossSection: Send {
    /// σ_tot at invariant mass squared `s` of the subsystem.
    fn eval(&self, s: f64) -> f64;
}

/// The identically-zero cross-section, installed when no parameterization
/// applies to the exchange at hand.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ZeroCrossSection;

impl TotalCrossSection for ZeroCrossSection {
    fn eval(&self, _s: f64) -> f64 {
        0.0
    }
}

// Universal constants of the PDG 2016 Regge-pole fit to total hadronic
// cross-sections: σ = H ln²(s/s_M) + P + R1 (s/s_M)^−η1 − ι R2 (s/s_M)^−η2,
// with s_M = (m1 + m2 + M)².
const PDG_H: f64 = 0.2838;
const PDG_M: f64 = 2.076;
const PDG_ETA1: f64 = 0.412;
const PDG_ETA2: f64 = 0.5482;

/// PDG Regge-pole parameterization of a two-hadron total cross-section.
///
/// The parameter vector keeps the conventional order
/// `{ι, δ, R1, R2, P}`: isospin sign of the crossing-odd term, an overall
/// scale, the two Regge residues, and the Pomeron constant (mb).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PdgParameterization {
    m1: f64,
    m2: f64,
    iso: f64,
    delta: f64,
    r1: f64,
    r2: f64,
    pomeron: f64,
}

impl PdgParameterization {
    /// Builds the fit for a channel with hadron masses `(m1, m2)` and the
    /// 5 fitted constants in the order `{ι, δ, R1, R2, P}`.
    pub fn new(m1: f64, m2: f64, params: [f64; 5]) -> Self {
        Self {
            m1,
            m2,
            iso: params[0],
            delta: params[1],
            r1: params[2],
            r2: params[3],
            pomeron: params[4],
        }
    }

    /// The default π⁻p fit used for pion exchange (no resonances).
    pub fn pimp() -> Self {
        Self::new(
            pwa_core::constants::M_PION,
            pwa_core::constants::M_PROTON,
            [-1.0, 1.0, 9.56, 1.767, 18.75],
        )
    }
}

impl TotalCrossSection for PdgParameterization {
    fn eval(&self, s: f64) -> f64 {
        let s_m = (self.m1 + self.m2 + PDG_M) * (self.m1 + self.m2 + PDG_M);
        let ratio = s / s_m;
        let log2 = ratio.ln() * ratio.ln();
        self.delta
            * (PDG_H * log2 + self.pomeron + self.r1 * ratio.powf(-PDG_ETA1)
                - self.iso * self.r2 * ratio.powf(-PDG_ETA2))
    }
}
