//! Triple-Regge inclusive cross-sections built on an exclusive amplitude.
//!
//! The t dependence comes from properly normalized Regge propagators (or a
//! fixed-spin pole), the M² dependence from the total hadronic
//! cross-section of the bottom vertex.

use std::cell::RefCell;
use std::f64::consts::PI;
use std::sync::Arc;

use pwa_core::math::cgamma;
use pwa_core::quadrature::integrate;
use pwa_core::{Amplitude, Complex, ExchangeKind, PwaError};

use crate::kinematics::InclusiveKinematics;
use crate::sigma_tot::{PdgParameterization, TotalCrossSection, ZeroCrossSection};
use crate::trajectory::Trajectory;

/// Squared exchange propagator model.
pub enum Propagator {
    /// High-energy Regge behavior driven by a trajectory.
    Regge(Arc<dyn Trajectory>),
    /// Fixed-spin simple pole at the exchange mass squared.
    FixedSpin {
        /// Squared mass of the exchanged particle.
        exchange_mass2: f64,
        /// Spin of the exchanged particle.
        min_j: i32,
    },
}

/// Interpretation of the third argument of
/// [`TripleRegge::d3sigma_d3p`], fixed at configuration time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VariableMode {
    /// Independent variables are (t, M²).
    MassSquared,
    /// Independent variables are (t, x) with M² = s(1−x).
    FeynmanX,
}

/// Inclusive cross-section in the factorized triple-Regge form.
///
/// Configuration snapshots everything needed from the exclusive amplitude
/// (produced mass, exchange kind, coupling), so evaluation never re-enters
/// the exclusive model. The total-cross-section function is exclusively
/// owned and replaced wholesale by
/// [`set_sigma_total`](TripleRegge::set_sigma_total).
pub struct TripleRegge {
    id: String,
    kinematics: InclusiveKinematics,
    coupling: Box<dyn Fn(f64) -> f64 + Send>,
    sigma_tot: Box<dyn TotalCrossSection>,
    propagator: Propagator,
    b: f64,
    mode: VariableMode,
}

impl TripleRegge {
    /// Configures the integrator from an exclusive amplitude. The
    /// exchange declared by the amplitude itself ([`Amplitude::exchange_kind`])
    /// selects the top-vertex coupling function and the default
    /// bottom-vertex total cross-section; `b` is the exponential
    /// form-factor slope and `mode` fixes the variable interpretation.
    /// An amplitude without a known exchange yields an identically zero
    /// inclusive cross-section until a σ_tot is installed by hand.
    pub fn new(
        exclusive: &dyn Amplitude,
        propagator: Propagator,
        b: f64,
        mode: VariableMode,
    ) -> Self {
        let m_x = exclusive.kinematics().m_meson;
        let m_x2 = exclusive.kinematics().m_meson2();
        let (coupling, sigma_tot) = match exclusive.exchange_kind() {
            ExchangeKind::Pseudoscalar { g } => {
                let coupling: Box<dyn Fn(f64) -> f64 + Send> =
                    Box::new(move |t| (g / m_x) * (t - m_x2));
                let sigma: Box<dyn TotalCrossSection> = Box::new(PdgParameterization::pimp());
                (coupling, sigma)
            }
            ExchangeKind::Other => {
                let coupling: Box<dyn Fn(f64) -> f64 + Send> = Box::new(|_| 0.0);
                let sigma: Box<dyn TotalCrossSection> = Box::new(ZeroCrossSection);
                (coupling, sigma)
            }
        };
        Self {
            id: exclusive.id().to_string(),
            kinematics: InclusiveKinematics::new(m_x),
            coupling,
            sigma_tot,
            propagator,
            b,
            mode,
        }
    }

    /// Identifier inherited from the exclusive amplitude.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// The inclusive phase-space bounds in use.
    pub fn kinematics(&self) -> &InclusiveKinematics {
        &self.kinematics
    }

    /// Installs a new bottom-vertex total cross-section, dropping the
    /// previous one.
    pub fn set_sigma_total(&mut self, sigma: Box<dyn TotalCrossSection>) {
        self.sigma_tot = sigma;
    }

    fn use_x(&self) -> bool {
        self.mode == VariableMode::FeynmanX
    }

    /// Invariant inclusive cross-section E d³σ/d³p at fixed `s`, momentum
    /// transfer `t`, and third variable `mm` (M² or x per the configured
    /// mode). Singularity guards return exactly zero; everything else is
    /// the factorized product σ_tot × coupling² × formfactor² ×
    /// propagator² × s_piece / (4π)³.
    pub fn d3sigma_d3p(&self, s: f64, t: f64, mm: f64) -> f64 {
        // Things blow up at exactly x = 1.
        if self.use_x() && (mm - 1.0).abs() < 1.0e-3 {
            return 0.0;
        }

        let coupling2 = (self.coupling)(t) * (self.coupling)(t);

        // Form factor with t′ at the exclusive limit.
        let t_exclusive = self.kinematics.t_min_from_m2(s, self.kinematics.min_m2());
        let formfactor2 = (2.0 * self.b * (t - t_exclusive)).exp();

        let s_piece = if self.use_x() { 1.0 - mm } else { mm / s };

        let exchange_propagator2 = match &self.propagator {
            Propagator::Regge(trajectory) => {
                let alpha = trajectory.eval(t).re;
                let alpha_prime = trajectory.slope();

                // Keep the gamma-function argument in domain at large |t|.
                if self.b + alpha_prime - alpha_prime * (-alpha_prime * t).ln() < 0.0 {
                    return 0.0;
                }

                let signature_factor = (1.0
                    + f64::from(trajectory.signature()) * (-Complex::i() * PI * alpha).exp())
                    / 2.0;
                let t_piece = (alpha_prime
                    * signature_factor
                    * cgamma(Complex::new(f64::from(trajectory.min_j()) - alpha, 0.0)))
                .norm_sqr();
                t_piece * s_piece.powf(-2.0 * alpha)
            }
            Propagator::FixedSpin {
                exchange_mass2,
                min_j,
            } => {
                let pole = 1.0 / (exchange_mass2 - t);
                pole * pole * s_piece.powf(-2.0 * f64::from(*min_j))
            }
        };

        let sigma_tot = if self.use_x() {
            self.sigma_tot.eval(s * (1.0 - mm))
        } else {
            self.sigma_tot.eval(mm)
        };

        sigma_tot * coupling2 * formfactor2 * exchange_propagator2 * s_piece
            / (4.0 * PI).powi(3)
    }

    fn mm_bounds(&self, s: f64) -> (f64, f64) {
        if self.use_x() {
            self.kinematics.x_bounds(s)
        } else {
            (self.kinematics.min_m2(), self.kinematics.max_m2(s))
        }
    }

    fn t_integral(&self, s: f64, mm: f64) -> Result<f64, PwaError> {
        let m2 = if self.use_x() {
            self.kinematics.m2_from_x(s, mm)
        } else {
            mm
        };
        let lo = self.kinematics.t_max_from_m2(s, m2);
        let hi = self.kinematics.t_min_from_m2(s, m2);
        integrate(|t| self.d3sigma_d3p(s, t, mm), lo, hi)
    }

    /// dσ/dt, integrated over the missing-mass variable at fixed `t`.
    pub fn dsigma_dt(&self, s: f64, t: f64) -> Result<f64, PwaError> {
        if self.use_x() {
            let (lo, hi) = self.kinematics.x_bounds(s);
            integrate(|x| self.d3sigma_d3p(s, t, x), lo, hi)
        } else {
            let hi = self.kinematics.m2_max_from_t(s, t);
            integrate(|m2| self.d3sigma_d3p(s, t, m2), self.kinematics.min_m2(), hi)
        }
    }

    /// dσ/dy², the t-like distribution of the (t, x) scheme.
    pub fn dsigma_dy2(&self, s: f64, y2: f64) -> Result<f64, PwaError> {
        self.dsigma_dt(s, y2)
    }

    /// dσ/dM², integrated over t at fixed missing mass squared. In
    /// Feynman-x mode the fixed point is converted to x = 1 − M²/s before
    /// evaluation, so either variable scheme accepts either observable.
    pub fn dsigma_dm2(&self, s: f64, m2: f64) -> Result<f64, PwaError> {
        let mm = if self.use_x() { 1.0 - m2 / s } else { m2 };
        self.t_integral(s, mm)
    }

    /// dσ/dx, integrated over t at fixed Feynman fraction. In M² mode the
    /// fixed point is converted to M² = s(1−x) before evaluation.
    pub fn dsigma_dx(&self, s: f64, x: f64) -> Result<f64, PwaError> {
        let mm = if self.use_x() {
            x
        } else {
            self.kinematics.m2_from_x(s, x)
        };
        self.t_integral(s, mm)
    }

    /// Fully integrated inclusive cross-section at energy squared `s`.
    /// Inner-integral non-convergence is surfaced, never swallowed.
    pub fn integrated_xsection(&self, s: f64) -> Result<f64, PwaError> {
        let (lo, hi) = self.mm_bounds(s);
        let inner_failure = RefCell::new(None);
        let outer = integrate(
            |mm| match self.t_integral(s, mm) {
                Ok(value) => value,
                Err(err) => {
                    *inner_failure.borrow_mut() = Some(err);
                    0.0
                }
            },
            lo,
            hi,
        )?;
        match inner_failure.into_inner() {
            Some(err) => Err(err),
            None => Ok(outer),
        }
    }
}
