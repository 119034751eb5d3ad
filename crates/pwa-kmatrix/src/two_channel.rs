//! Two-channel scattering-length partial wave with K-matrix unitarization.

use std::sync::Arc;

use num_complex::Complex64;

use pwa_core::amplitude::{check_parameter_count, check_quantum_numbers, AmplitudeCache};
use pwa_core::kinematics::{
    ReactionKinematics, AXIALVECTOR, HALFMINUS, HALFPLUS, JP, PSEUDOSCALAR, VECTOR,
};
use pwa_core::math::legendre;
use pwa_core::{Amplitude, PwaError};

use crate::chew_mandelstam::{channel_momentum, chew_mandelstam};

/// Partial-wave amplitude in the scattering-length approximation with two
/// coupled channels: the production channel of the reaction kinematics and
/// a rescattering channel with masses `(m1, m2)`.
///
/// The K-matrix is symmetric by construction: a single off-diagonal
/// coupling `a01` feeds both K01 and K10, and nothing else can set them.
/// A zero of the unitarized denominator is a dynamically generated
/// resonance pole, not an error.
#[derive(Debug)]
pub struct TwoChannel {
    id: String,
    kinematics: Arc<ReactionKinematics>,
    cache: AmplitudeCache,
    j: u32,
    m1: f64,
    m2: f64,
    // K-matrix couplings.
    a00: f64,
    a01: f64,
    a11: f64,
    // Production normalizations.
    b0: f64,
    b1: f64,
}

impl TwoChannel {
    /// Builds the partial wave for spin `j` and rescattering-channel masses
    /// `[m1, m2]`. Fails fast when the kinematics carries a spin-parity
    /// combination outside the supported set.
    pub fn new(
        kinematics: Arc<ReactionKinematics>,
        j: u32,
        masses: [f64; 2],
        id: impl Into<String>,
    ) -> Result<Self, PwaError> {
        let id = id.into();
        check_quantum_numbers(
            &id,
            &kinematics,
            &[PSEUDOSCALAR, VECTOR, AXIALVECTOR],
            &[HALFPLUS, HALFMINUS],
        )?;
        Ok(Self {
            id,
            kinematics,
            cache: AmplitudeCache::empty(),
            j,
            m1: masses[0],
            m2: masses[1],
            a00: 0.0,
            a01: 0.0,
            a11: 0.0,
            b0: 0.0,
            b1: 0.0,
        })
    }

    /// Product of the initial-state momentum with channel momentum `q`.
    fn pq(&self, s: f64, q: Complex64) -> Complex64 {
        self.kinematics.initial_momentum(s) * q
    }
}

impl Amplitude for TwoChannel {
    fn id(&self) -> &str {
        &self.id
    }

    fn kinematics(&self) -> &Arc<ReactionKinematics> {
        &self.kinematics
    }

    fn n_parameters(&self) -> usize {
        5
    }

    fn parameter_labels(&self) -> Vec<String> {
        let j = self.j;
        vec![
            format!("a00[{j}]"),
            format!("a01[{j}]"),
            format!("a11[{j}]"),
            format!("b0[{j}]"),
            format!("b1[{j}]"),
        ]
    }

    fn set_parameters(&mut self, values: &[f64]) -> Result<(), PwaError> {
        check_parameter_count(&self.id, self.n_parameters(), values.len())?;
        self.a00 = values[0];
        self.a01 = values[1];
        self.a11 = values[2];
        self.b0 = values[3];
        self.b1 = values[4];
        Ok(())
    }

    /// Projection onto orbital angular momentum: helicity independent, so
    /// the canonical combination and its parity mirror carry the full
    /// partial wave and every other returns exactly zero.
    fn helicity_amplitude(&mut self, helicities: [i32; 4], s: f64, t: f64) -> Complex64 {
        let canonical = self.kinematics.helicities()[0];
        let mirrored = canonical.map(|h| -h);
        if helicities != canonical && helicities != mirrored {
            return Complex64::new(0.0, 0.0);
        }
        let theta = self.kinematics.cos_theta(s, t).clamp(-1.0, 1.0).acos();
        self.cache.store(helicities, s, t, theta);

        // sqrt(2) cancels the 1/4 initial-helicity average together with
        // the parity doubling above; (2J+1) P_J is the angular projection.
        let projection = 2.0_f64.sqrt() * (2.0 * f64::from(self.j) + 1.0)
            * legendre(self.j, theta.cos());
        projection * self.evaluate()
    }

    /// Unitarized K-matrix form, recomputed from scratch at the cached `s`.
    fn evaluate(&mut self) -> Complex64 {
        let s = self.cache.s;
        let k = &self.kinematics;

        // Channel momenta for the production and rescattering channels.
        let q0 = k.final_momentum(s);
        let q1 = channel_momentum(s, self.m1, self.m2);

        // Loop functions.
        let g0 = chew_mandelstam(s, k.m_meson, k.m_recoil);
        let g1 = chew_mandelstam(s, self.m1, self.m2);

        // Production amplitude legs.
        let b_leg0 = self.pq(s, q0).powu(self.j) * self.b0;
        let b_leg1 = self.pq(s, q1).powu(self.j) * self.b1;

        // K-matrix entries; K01 doubles as K10.
        let k00 = (q0 * q0).powu(self.j) * self.a00;
        let k01 = (q0 * q1).powu(self.j) * self.a01;
        let k11 = (q1 * q1).powu(self.j) * self.a11;

        // Shared denominator and K-matrix determinant.
        let d = (1.0 - g0 * k00) * (1.0 - g1 * k11) - g0 * g1 * k01 * k01;
        let del_k = k00 * k11 - k01 * k01;

        // Unitarized numerators.
        let a_mat00 = (k00 - g1 * del_k) / d;
        let a_mat01 = k01 / d;

        b_leg0 * (1.0 + g0 * a_mat00) + b_leg1 * g1 * a_mat01
    }

    fn allowed_meson_jp(&self) -> Vec<JP> {
        vec![PSEUDOSCALAR, VECTOR, AXIALVECTOR]
    }

    fn allowed_baryon_jp(&self) -> Vec<JP> {
        vec![HALFPLUS, HALFMINUS]
    }
}
