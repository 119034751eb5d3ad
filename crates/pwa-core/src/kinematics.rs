//! Two-body reaction kinematics for `beam target -> meson baryon`.
//!
//! All invariants are in GeV². Center-of-mass momenta are complex so that
//! models stay evaluable below threshold, where the Källén function turns
//! negative and the momentum becomes purely imaginary.

use num_complex::Complex64;
use serde::{Deserialize, Serialize};

use crate::constants::M_PROTON;

/// Spin-parity pair. For baryons the spin is stored doubled (2J) so that
/// half-integer spins stay integral.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct JP {
    /// Spin (doubled for half-integer values).
    pub j: i32,
    /// Intrinsic parity, ±1.
    pub p: i32,
}

impl JP {
    /// Creates a spin-parity pair.
    pub fn new(j: i32, p: i32) -> Self {
        Self { j, p }
    }
}

impl std::fmt::Display for JP {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let sign = if self.p >= 0 { '+' } else { '-' };
        write!(f, "{}{}", self.j, sign)
    }
}

/// Pseudoscalar meson quantum numbers, 0⁻.
pub const PSEUDOSCALAR: JP = JP { j: 0, p: -1 };
/// Vector meson quantum numbers, 1⁻.
pub const VECTOR: JP = JP { j: 1, p: -1 };
/// Axial-vector meson quantum numbers, 1⁺.
pub const AXIALVECTOR: JP = JP { j: 1, p: 1 };
/// Spin-1/2 baryon with positive parity (2J = 1).
pub const HALFPLUS: JP = JP { j: 1, p: 1 };
/// Spin-1/2 baryon with negative parity (2J = 1).
pub const HALFMINUS: JP = JP { j: 1, p: -1 };

/// Källén triangle function λ(a, b, c) = a² + b² + c² − 2(ab + bc + ca).
pub fn kallen(a: f64, b: f64, c: f64) -> f64 {
    a * a + b * b + c * c - 2.0 * (a * b + b * c + c * a)
}

/// Kinematics of a fixed 2→2 reaction, shared by all amplitudes of a model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReactionKinematics {
    /// Beam mass (0 for a photon).
    pub m_beam: f64,
    /// Target mass.
    pub m_target: f64,
    /// Produced meson mass.
    pub m_meson: f64,
    /// Recoil baryon mass.
    pub m_recoil: f64,
    /// Spin-parity of the produced meson.
    pub meson_jp: JP,
    /// Spin-parity of the recoil baryon (doubled spin).
    pub baryon_jp: JP,
}

impl ReactionKinematics {
    /// General 2→2 kinematics with explicit masses for all four legs.
    pub fn new(m_beam: f64, m_target: f64, m_meson: f64, m_recoil: f64) -> Self {
        Self {
            m_beam,
            m_target,
            m_meson,
            m_recoil,
            meson_jp: PSEUDOSCALAR,
            baryon_jp: HALFPLUS,
        }
    }

    /// Photoproduction off a proton: massless beam, proton target.
    pub fn photoproduction(m_meson: f64, m_recoil: f64) -> Self {
        Self::new(0.0, M_PROTON, m_meson, m_recoil)
    }

    /// Sets the spin-parity of the produced meson.
    pub fn set_meson_jp(&mut self, jp: JP) {
        self.meson_jp = jp;
    }

    /// Sets the spin-parity of the recoil baryon (doubled spin).
    pub fn set_baryon_jp(&mut self, jp: JP) {
        self.baryon_jp = jp;
    }

    /// Squared mass of the produced meson.
    pub fn m_meson2(&self) -> f64 {
        self.m_meson * self.m_meson
    }

    /// Final-state threshold (m_meson + m_recoil)².
    pub fn threshold(&self) -> f64 {
        (self.m_meson + self.m_recoil) * (self.m_meson + self.m_recoil)
    }

    /// Initial-state center-of-mass momentum at energy squared `s`.
    pub fn initial_momentum(&self, s: f64) -> Complex64 {
        let lambda = kallen(s, self.m_beam * self.m_beam, self.m_target * self.m_target);
        Complex64::new(lambda, 0.0).sqrt() / Complex64::new(4.0 * s, 0.0).sqrt()
    }

    /// Final-state center-of-mass momentum at energy squared `s`.
    pub fn final_momentum(&self, s: f64) -> Complex64 {
        let lambda = kallen(s, self.m_meson2(), self.m_recoil * self.m_recoil);
        Complex64::new(lambda, 0.0).sqrt() / Complex64::new(4.0 * s, 0.0).sqrt()
    }

    /// Center-of-mass energy of the beam at energy squared `s`.
    fn beam_energy(&self, s: f64) -> f64 {
        (s + self.m_beam * self.m_beam - self.m_target * self.m_target) / (2.0 * s.sqrt())
    }

    /// Center-of-mass energy of the produced meson at energy squared `s`.
    fn meson_energy(&self, s: f64) -> f64 {
        (s + self.m_meson2() - self.m_recoil * self.m_recoil) / (2.0 * s.sqrt())
    }

    /// Scattering-angle cosine from the invariants `s` and `t`.
    pub fn cos_theta(&self, s: f64, t: f64) -> f64 {
        let pi = self.initial_momentum(s).re;
        let pf = self.final_momentum(s).re;
        let e_beam = self.beam_energy(s);
        let e_meson = self.meson_energy(s);
        (t - self.m_beam * self.m_beam - self.m_meson2() + 2.0 * e_beam * e_meson)
            / (2.0 * pi * pf)
    }

    /// Momentum transfer at scattering-angle cosine `z`.
    pub fn t_man(&self, s: f64, z: f64) -> f64 {
        let pi = self.initial_momentum(s).re;
        let pf = self.final_momentum(s).re;
        let e_beam = self.beam_energy(s);
        let e_meson = self.meson_energy(s);
        self.m_beam * self.m_beam + self.m_meson2() - 2.0 * e_beam * e_meson
            + 2.0 * pi * pf * z
    }

    /// Forward limit of the momentum transfer (cos θ = +1).
    pub fn t_min(&self, s: f64) -> f64 {
        self.t_man(s, 1.0)
    }

    /// Backward limit of the momentum transfer (cos θ = −1).
    pub fn t_max(&self, s: f64) -> f64 {
        self.t_man(s, -1.0)
    }

    /// Ordered list of external helicity combinations
    /// `[λ_beam, 2λ_target, λ_meson, 2λ_recoil]` for the configured meson
    /// spin. The first entry is the canonical combination partial-wave
    /// models latch onto.
    pub fn helicities(&self) -> Vec<[i32; 4]> {
        let j = self.meson_jp.j;
        let mut out = Vec::new();
        for beam in [1, -1] {
            for target in [1, -1] {
                for meson in (-j..=j).rev() {
                    for recoil in [1, -1] {
                        out.push([beam, target, meson, recoil]);
                    }
                }
            }
        }
        out
    }
}
