//! The abstract contract every concrete amplitude satisfies, plus linear
//! superposition of amplitudes and the observables derived from them.

use std::fmt;
use std::sync::Arc;

use num_complex::Complex64;

use crate::constants::GEV2_TO_NB;
use crate::errors::{ErrorInfo, PwaError};
use crate::kinematics::{ReactionKinematics, JP};
use crate::quadrature::integrate;

/// Snapshot of the most recent evaluation inputs. Every
/// [`Amplitude::helicity_amplitude`] implementation stores this before any
/// dependent computation so helper routines observe a consistent state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AmplitudeCache {
    /// Center-of-mass energy squared.
    pub s: f64,
    /// Momentum transfer squared.
    pub t: f64,
    /// Scattering angle derived from (s, t).
    pub theta: f64,
    /// External helicities `[λ_beam, 2λ_target, λ_meson, 2λ_recoil]`.
    pub helicities: [i32; 4],
}

impl AmplitudeCache {
    /// A cache with no evaluation recorded yet.
    pub fn empty() -> Self {
        Self {
            s: 0.0,
            t: 0.0,
            theta: 0.0,
            helicities: [0; 4],
        }
    }

    /// Records the inputs of the evaluation about to run.
    pub fn store(&mut self, helicities: [i32; 4], s: f64, t: f64, theta: f64) {
        self.s = s;
        self.t = t;
        self.theta = theta;
        self.helicities = helicities;
    }
}

/// T-channel exchange a model declares about itself. Consumers that build
/// factorized observables on top of an exclusive amplitude (for example an
/// inclusive integrator) read this instead of trusting a caller-supplied
/// tag.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ExchangeKind {
    /// Pseudoscalar (pion-like) exchange with top-vertex coupling `g`.
    Pseudoscalar {
        /// Coupling constant of the top vertex.
        g: f64,
    },
    /// Any exchange without a known closed-form coupling.
    Other,
}

/// Validates a parameter vector length against a model's declared count.
pub fn check_parameter_count(id: &str, expected: usize, got: usize) -> Result<(), PwaError> {
    if expected == got {
        return Ok(());
    }
    let info = ErrorInfo::new("par-count", "parameter vector length mismatch")
        .with_context("amplitude", id)
        .with_context("expected", expected.to_string())
        .with_context("got", got.to_string());
    Err(PwaError::Parameters(info))
}

/// Validates the configured kinematics against a model's allowed
/// spin-parity sets. Called by constructors; failure aborts construction.
pub fn check_quantum_numbers(
    id: &str,
    kinematics: &ReactionKinematics,
    allowed_meson: &[JP],
    allowed_baryon: &[JP],
) -> Result<(), PwaError> {
    if !allowed_meson.contains(&kinematics.meson_jp) {
        let info = ErrorInfo::new("qn-meson", "meson spin-parity not supported by this model")
            .with_context("amplitude", id)
            .with_context("jp", kinematics.meson_jp.to_string());
        return Err(PwaError::QuantumNumbers(info));
    }
    if !allowed_baryon.contains(&kinematics.baryon_jp) {
        let info = ErrorInfo::new("qn-baryon", "baryon spin-parity not supported by this model")
            .with_context("amplitude", id)
            .with_context("jp", kinematics.baryon_jp.to_string());
        return Err(PwaError::QuantumNumbers(info));
    }
    Ok(())
}

/// Contract satisfied by every concrete reaction or partial-wave model.
///
/// Implementations are single-owner values: the cache-then-read protocol in
/// [`helicity_amplitude`](Amplitude::helicity_amplitude) makes sharing one
/// instance across threads unsafe, while distinct instances are independent.
pub trait Amplitude: Send {
    /// Identifying label for diagnostics and parameter error messages.
    fn id(&self) -> &str;

    /// The kinematics this model was assembled against.
    fn kinematics(&self) -> &Arc<ReactionKinematics>;

    /// Declared length of the parameter vector.
    fn n_parameters(&self) -> usize;

    /// Human readable parameter names, same count as the vector.
    fn parameter_labels(&self) -> Vec<String>;

    /// Stores the couplings used by [`evaluate`](Amplitude::evaluate).
    /// A length mismatch is a fatal configuration error: nothing is stored
    /// and a [`PwaError::Parameters`] is returned.
    fn set_parameters(&mut self, values: &[f64]) -> Result<(), PwaError>;

    /// Full helicity amplitude at invariants (s, t). Implementations record
    /// `(helicities, s, t, θ)` into their cache before any dependent
    /// computation. Helicity combinations the model does not support yield
    /// exactly zero.
    fn helicity_amplitude(&mut self, helicities: [i32; 4], s: f64, t: f64) -> Complex64;

    /// Model-specific value computed from the current cache. Undefined
    /// before the first `helicity_amplitude` call.
    fn evaluate(&mut self) -> Complex64;

    /// Meson spin-parity combinations this model supports.
    fn allowed_meson_jp(&self) -> Vec<JP>;

    /// Baryon spin-parity combinations this model supports (doubled spin).
    fn allowed_baryon_jp(&self) -> Vec<JP>;

    /// The t-channel exchange this model represents. Models that are not a
    /// single known exchange keep the default.
    fn exchange_kind(&self) -> ExchangeKind {
        ExchangeKind::Other
    }

    /// Sum over all external helicity combinations of |amplitude|².
    fn probability_distribution(&mut self, s: f64, t: f64) -> f64 {
        let combinations = self.kinematics().helicities();
        combinations
            .into_iter()
            .map(|h| self.helicity_amplitude(h, s, t).norm_sqr())
            .sum()
    }

    /// Differential cross-section dσ/dt in nb/GeV², averaged over initial
    /// helicities, with the standard 2→2 flux factor.
    fn differential_xsection(&mut self, s: f64, t: f64) -> f64 {
        let p_i2 = self.kinematics().initial_momentum(s).norm_sqr();
        let norm = 1.0 / (64.0 * std::f64::consts::PI * s * p_i2);
        self.probability_distribution(s, t) / 4.0 * norm * GEV2_TO_NB
    }

    /// Cross-section integrated over the physical t range at fixed `s`.
    /// Surfaces quadrature non-convergence instead of approximating.
    fn integrated_xsection(&mut self, s: f64) -> Result<f64, PwaError> {
        let (t_backward, t_forward) = {
            let k = self.kinematics();
            (k.t_max(s), k.t_min(s))
        };
        integrate(|t| self.differential_xsection(s, t), t_backward, t_forward)
    }
}

/// Linear superposition of amplitudes sharing one kinematics.
///
/// `sum.evaluate()` equals the sum of the parts' `evaluate()` at identical
/// cached state; the constituent parts maintain their own caches through
/// the forwarded `helicity_amplitude` calls.
pub struct AmplitudeSum {
    id: String,
    kinematics: Arc<ReactionKinematics>,
    terms: Vec<Box<dyn Amplitude>>,
}

impl fmt::Debug for AmplitudeSum {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AmplitudeSum")
            .field("id", &self.id)
            .field("kinematics", &self.kinematics)
            .field("terms", &self.terms.iter().map(|t| t.id()).collect::<Vec<_>>())
            .finish()
    }
}

impl AmplitudeSum {
    /// Assembles a sum from compatible constituents. Every term must have
    /// been built against kinematics equal to `kinematics`.
    pub fn new(
        kinematics: Arc<ReactionKinematics>,
        terms: Vec<Box<dyn Amplitude>>,
        id: impl Into<String>,
    ) -> Result<Self, PwaError> {
        let id = id.into();
        for term in &terms {
            if term.kinematics().as_ref() != kinematics.as_ref() {
                let info = ErrorInfo::new("sum-kinematics", "constituent kinematics differ")
                    .with_context("sum", id.clone())
                    .with_context("term", term.id());
                return Err(PwaError::Kinematics(info));
            }
        }
        Ok(Self {
            id,
            kinematics,
            terms,
        })
    }
}

impl Amplitude for AmplitudeSum {
    fn id(&self) -> &str {
        &self.id
    }

    fn kinematics(&self) -> &Arc<ReactionKinematics> {
        &self.kinematics
    }

    fn n_parameters(&self) -> usize {
        self.terms.iter().map(|t| t.n_parameters()).sum()
    }

    fn parameter_labels(&self) -> Vec<String> {
        self.terms
            .iter()
            .flat_map(|t| t.parameter_labels())
            .collect()
    }

    /// Splits the concatenated vector across constituents in order.
    fn set_parameters(&mut self, values: &[f64]) -> Result<(), PwaError> {
        check_parameter_count(&self.id, self.n_parameters(), values.len())?;
        let mut offset = 0;
        for term in &mut self.terms {
            let n = term.n_parameters();
            term.set_parameters(&values[offset..offset + n])?;
            offset += n;
        }
        Ok(())
    }

    fn helicity_amplitude(&mut self, helicities: [i32; 4], s: f64, t: f64) -> Complex64 {
        self.terms
            .iter_mut()
            .map(|term| term.helicity_amplitude(helicities, s, t))
            .sum()
    }

    fn evaluate(&mut self) -> Complex64 {
        self.terms.iter_mut().map(|term| term.evaluate()).sum()
    }

    fn allowed_meson_jp(&self) -> Vec<JP> {
        intersect_jp(self.terms.iter().map(|t| t.allowed_meson_jp()))
    }

    fn allowed_baryon_jp(&self) -> Vec<JP> {
        intersect_jp(self.terms.iter().map(|t| t.allowed_baryon_jp()))
    }
}

fn intersect_jp(sets: impl Iterator<Item = Vec<JP>>) -> Vec<JP> {
    let mut iter = sets;
    let mut common = match iter.next() {
        Some(first) => first,
        None => return Vec::new(),
    };
    for set in iter {
        common.retain(|jp| set.contains(jp));
    }
    common
}
