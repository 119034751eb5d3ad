//! Phase-space bounds for single-particle inclusive photoproduction
//! `γ p → X + anything`.
//!
//! Two variable schemes coexist: (t, M²) with M² the invariant mass squared
//! of the unobserved system, and (t, x) with x the Feynman momentum
//! fraction tied to M² = s(1−x) in the high-energy approximation.

use serde::{Deserialize, Serialize};

use pwa_core::constants::{M_PION, M_PROTON};
use pwa_core::kinematics::kallen;

/// Inclusive kinematics for a produced particle of mass `m_x`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct InclusiveKinematics {
    /// Mass of the observed produced particle.
    pub m_x: f64,
}

impl InclusiveKinematics {
    /// Kinematics for an observed particle of mass `m_x`.
    pub fn new(m_x: f64) -> Self {
        Self { m_x }
    }

    /// Squared mass of the observed particle.
    pub fn m_x2(&self) -> f64 {
        self.m_x * self.m_x
    }

    /// Lightest unobserved system: one nucleon and one pion.
    pub fn min_m2(&self) -> f64 {
        (M_PROTON + M_PION) * (M_PROTON + M_PION)
    }

    /// Largest missing mass squared at total energy squared `s`.
    pub fn max_m2(&self, s: f64) -> f64 {
        (s.sqrt() - self.m_x) * (s.sqrt() - self.m_x)
    }

    fn beam_energy(&self, s: f64) -> f64 {
        (s - M_PROTON * M_PROTON) / (2.0 * s.sqrt())
    }

    fn produced_energy(&self, s: f64, m2: f64) -> f64 {
        (s + self.m_x2() - m2) / (2.0 * s.sqrt())
    }

    fn produced_momentum(&self, s: f64, m2: f64) -> f64 {
        kallen(s, self.m_x2(), m2).max(0.0).sqrt() / (2.0 * s.sqrt())
    }

    /// Momentum transfer to the observed particle at missing mass squared
    /// `m2` and scattering-angle cosine `z`.
    pub fn t_from_m2(&self, s: f64, m2: f64, z: f64) -> f64 {
        let e_beam = self.beam_energy(s);
        self.m_x2() - 2.0 * e_beam * (self.produced_energy(s, m2) - self.produced_momentum(s, m2) * z)
    }

    /// Forward limit of t (cos θ = +1) at missing mass squared `m2`.
    pub fn t_min_from_m2(&self, s: f64, m2: f64) -> f64 {
        self.t_from_m2(s, m2, 1.0)
    }

    /// Backward limit of t (cos θ = −1) at missing mass squared `m2`.
    pub fn t_max_from_m2(&self, s: f64, m2: f64) -> f64 {
        self.t_from_m2(s, m2, -1.0)
    }

    /// Largest missing mass squared reachable at fixed `t`, found by
    /// bisecting the forward limit (|t_min| grows monotonically with M²).
    pub fn m2_max_from_t(&self, s: f64, t: f64) -> f64 {
        let mut lo = self.min_m2();
        let mut hi = self.max_m2(s);
        if t >= self.t_min_from_m2(s, lo) {
            return lo;
        }
        if t <= self.t_min_from_m2(s, hi) {
            return hi;
        }
        for _ in 0..80 {
            let mid = 0.5 * (lo + hi);
            if t < self.t_min_from_m2(s, mid) {
                lo = mid;
            } else {
                hi = mid;
            }
        }
        0.5 * (lo + hi)
    }

    /// Missing mass squared for Feynman fraction `x` in the high-energy
    /// approximation M² = s(1−x), clamped to the physical region.
    pub fn m2_from_x(&self, s: f64, x: f64) -> f64 {
        (s * (1.0 - x)).max(0.0)
    }

    /// Physical range of the Feynman fraction at energy squared `s`.
    pub fn x_bounds(&self, s: f64) -> (f64, f64) {
        (1.0 - self.max_m2(s) / s, 1.0 - self.min_m2() / s)
    }
}
