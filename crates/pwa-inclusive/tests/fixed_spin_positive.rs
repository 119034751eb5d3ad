use std::sync::Arc;

use pwa_core::amplitude::{check_parameter_count, Amplitude, AmplitudeCache};
use pwa_core::constants::{M_B1, M_PROTON};
use pwa_core::kinematics::{ReactionKinematics, AXIALVECTOR, HALFMINUS, HALFPLUS, JP};
use pwa_core::{Complex, ExchangeKind, PwaError};
use pwa_inclusive::{Propagator, TripleRegge, VariableMode, ZeroCrossSection};

/// Stand-in for the exclusive b1 production amplitude: the integrator only
/// reads its id, kinematics, and declared exchange at configuration time.
struct B1Production {
    kinematics: Arc<ReactionKinematics>,
    cache: AmplitudeCache,
    g: f64,
}

impl B1Production {
    fn new() -> Self {
        let mut k = ReactionKinematics::photoproduction(M_B1, M_PROTON);
        k.set_meson_jp(AXIALVECTOR);
        Self {
            kinematics: Arc::new(k),
            cache: AmplitudeCache::empty(),
            g: 0.24,
        }
    }
}

impl Amplitude for B1Production {
    fn id(&self) -> &str {
        "pseudoscalar_exchange"
    }

    fn kinematics(&self) -> &Arc<ReactionKinematics> {
        &self.kinematics
    }

    fn n_parameters(&self) -> usize {
        1
    }

    fn parameter_labels(&self) -> Vec<String> {
        vec!["g".to_string()]
    }

    fn set_parameters(&mut self, values: &[f64]) -> Result<(), PwaError> {
        check_parameter_count(self.id(), 1, values.len())?;
        self.g = values[0];
        Ok(())
    }

    fn helicity_amplitude(&mut self, helicities: [i32; 4], s: f64, t: f64) -> Complex {
        let theta = self.kinematics.cos_theta(s, t).clamp(-1.0, 1.0).acos();
        self.cache.store(helicities, s, t, theta);
        self.evaluate()
    }

    fn evaluate(&mut self) -> Complex {
        Complex::new(self.g, 0.0)
    }

    fn allowed_meson_jp(&self) -> Vec<JP> {
        vec![AXIALVECTOR]
    }

    fn allowed_baryon_jp(&self) -> Vec<JP> {
        vec![HALFPLUS, HALFMINUS]
    }

    fn exchange_kind(&self) -> ExchangeKind {
        ExchangeKind::Pseudoscalar { g: self.g }
    }
}

/// Exclusive model without a declared exchange: the integrator falls back to
/// a zero coupling and a zero bottom-vertex cross-section.
struct OpaqueProduction {
    inner: B1Production,
}

impl Amplitude for OpaqueProduction {
    fn id(&self) -> &str {
        "opaque_model"
    }

    fn kinematics(&self) -> &Arc<ReactionKinematics> {
        self.inner.kinematics()
    }

    fn n_parameters(&self) -> usize {
        self.inner.n_parameters()
    }

    fn parameter_labels(&self) -> Vec<String> {
        self.inner.parameter_labels()
    }

    fn set_parameters(&mut self, values: &[f64]) -> Result<(), PwaError> {
        self.inner.set_parameters(values)
    }

    fn helicity_amplitude(&mut self, helicities: [i32; 4], s: f64, t: f64) -> Complex {
        self.inner.helicity_amplitude(helicities, s, t)
    }

    fn evaluate(&mut self) -> Complex {
        self.inner.evaluate()
    }

    fn allowed_meson_jp(&self) -> Vec<JP> {
        self.inner.allowed_meson_jp()
    }

    fn allowed_baryon_jp(&self) -> Vec<JP> {
        self.inner.allowed_baryon_jp()
    }
}

fn fixed_spin_integrator() -> TripleRegge {
    let exclusive = B1Production::new();
    // 900 MeV form-factor cutoff.
    let b = 1.0 / (0.9 * 0.9);
    TripleRegge::new(
        &exclusive,
        Propagator::FixedSpin {
            exchange_mass2: 0.02,
            min_j: 0,
        },
        b,
        VariableMode::FeynmanX,
    )
}

#[test]
fn invariant_xsection_is_positive_and_finite() {
    let inc = fixed_spin_integrator();
    let s = 75.9421;
    let t = -0.3;
    let value = inc.d3sigma_d3p(s, t, 0.8);
    assert!(value.is_finite());
    assert!(value > 0.0);
}

#[test]
fn x_near_one_is_guarded_to_zero() {
    let inc = fixed_spin_integrator();
    let s = 75.9421;
    assert_eq!(inc.d3sigma_d3p(s, -0.3, 1.0), 0.0);
    assert_eq!(inc.d3sigma_d3p(s, -0.3, 0.9995), 0.0);
}

#[test]
fn dsigma_dx_integrates_to_positive_value() {
    let inc = fixed_spin_integrator();
    let s = 75.9421;
    let value = inc.dsigma_dx(s, 0.8).unwrap();
    assert!(value.is_finite());
    assert!(value > 0.0);
}

#[test]
fn integrated_xsection_converges() {
    let inc = fixed_spin_integrator();
    let s = 75.9421;
    let total = inc.integrated_xsection(s).unwrap();
    assert!(total.is_finite());
    assert!(total > 0.0);
}

#[test]
fn swapping_sigma_total_replaces_the_bottom_vertex() {
    let mut inc = fixed_spin_integrator();
    let s = 75.9421;
    let before = inc.d3sigma_d3p(s, -0.3, 0.8);
    assert!(before > 0.0);

    inc.set_sigma_total(Box::new(ZeroCrossSection));
    assert_eq!(inc.d3sigma_d3p(s, -0.3, 0.8), 0.0);
}

#[test]
fn undeclared_exchange_yields_zero() {
    let exclusive = OpaqueProduction {
        inner: B1Production::new(),
    };
    assert_eq!(exclusive.exchange_kind(), ExchangeKind::Other);
    let inc = TripleRegge::new(
        &exclusive,
        Propagator::FixedSpin {
            exchange_mass2: 0.02,
            min_j: 0,
        },
        1.0,
        VariableMode::FeynmanX,
    );
    assert_eq!(inc.d3sigma_d3p(75.9421, -0.3, 0.8), 0.0);
}

/// In Feynman-x mode dσ/dM² converts its argument to x = 1 - M²/s, so the
/// two distribution accessors agree at matching points.
#[test]
fn dsigma_dm2_matches_dsigma_dx_in_x_mode() {
    let inc = fixed_spin_integrator();
    let s = 75.9421;
    let x = 0.8;
    let m2 = s * (1.0 - x);
    let via_x = inc.dsigma_dx(s, x).unwrap();
    let via_m2 = inc.dsigma_dm2(s, m2).unwrap();
    assert!(via_x > 0.0);
    assert!((via_m2 - via_x).abs() < 1e-12 * via_x.abs());
}

#[test]
fn integrator_keeps_the_exclusive_id() {
    let inc = fixed_spin_integrator();
    assert_eq!(inc.id(), "pseudoscalar_exchange");
}
