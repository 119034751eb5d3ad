//! Adaptive quadrature with surfaced non-convergence.
//!
//! Integrated observables never approximate silently: when the interval
//! subdivision budget is exhausted before the error estimate settles, the
//! caller gets a [`PwaError::Integration`] instead of a number.

use crate::errors::{ErrorInfo, PwaError};

/// Tuning knobs for [`integrate_with`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QuadratureOpts {
    /// Absolute tolerance on the Richardson error estimate.
    pub tolerance: f64,
    /// Maximum interval-halving depth before giving up.
    pub max_depth: u32,
}

impl Default for QuadratureOpts {
    fn default() -> Self {
        Self {
            tolerance: 1.0e-8,
            max_depth: 24,
        }
    }
}

/// Integrates `f` over `[a, b]` with default options.
pub fn integrate<F: FnMut(f64) -> f64>(f: F, a: f64, b: f64) -> Result<f64, PwaError> {
    integrate_with(f, a, b, QuadratureOpts::default())
}

/// Adaptive Simpson integration of `f` over `[a, b]`.
pub fn integrate_with<F: FnMut(f64) -> f64>(
    mut f: F,
    a: f64,
    b: f64,
    opts: QuadratureOpts,
) -> Result<f64, PwaError> {
    if !a.is_finite() || !b.is_finite() {
        let info = ErrorInfo::new("quad-bounds", "integration bounds must be finite")
            .with_context("a", a.to_string())
            .with_context("b", b.to_string());
        return Err(PwaError::Integration(info));
    }
    if a == b {
        return Ok(0.0);
    }

    let fa = f(a);
    let fb = f(b);
    let m = 0.5 * (a + b);
    let fm = f(m);
    let whole = simpson(a, b, fa, fm, fb);
    adaptive(
        &mut f,
        a,
        b,
        fa,
        fm,
        fb,
        whole,
        opts.tolerance,
        opts.max_depth,
    )
}

fn simpson(a: f64, b: f64, fa: f64, fm: f64, fb: f64) -> f64 {
    (b - a) / 6.0 * (fa + 4.0 * fm + fb)
}

#[allow(clippy::too_many_arguments)]
fn adaptive<F: FnMut(f64) -> f64>(
    f: &mut F,
    a: f64,
    b: f64,
    fa: f64,
    fm: f64,
    fb: f64,
    whole: f64,
    tolerance: f64,
    depth: u32,
) -> Result<f64, PwaError> {
    let m = 0.5 * (a + b);
    let lm = 0.5 * (a + m);
    let rm = 0.5 * (m + b);
    let flm = f(lm);
    let frm = f(rm);
    let left = simpson(a, m, fa, flm, fm);
    let right = simpson(m, b, fm, frm, fb);
    let delta = left + right - whole;

    if delta.abs() <= 15.0 * tolerance {
        return Ok(left + right + delta / 15.0);
    }
    if depth == 0 {
        let info = ErrorInfo::new("quad-nonconvergence", "adaptive subdivision budget exhausted")
            .with_context("interval", format!("[{a}, {b}]"))
            .with_context("residual", delta.abs().to_string())
            .with_hint("loosen the tolerance or raise max_depth");
        return Err(PwaError::Integration(info));
    }

    let half_tol = 0.5 * tolerance;
    let l = adaptive(f, a, m, fa, flm, fm, left, half_tol, depth - 1)?;
    let r = adaptive(f, m, b, fm, frm, fb, right, half_tol, depth - 1)?;
    Ok(l + r)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integrates_polynomial_exactly() {
        // ∫₀¹ x³ dx = 1/4
        let result = integrate(|x| x * x * x, 0.0, 1.0).unwrap();
        assert!((result - 0.25).abs() < 1e-10);
    }

    #[test]
    fn integrates_oscillatory() {
        // ∫₀^π sin x dx = 2
        let result = integrate(f64::sin, 0.0, std::f64::consts::PI).unwrap();
        assert!((result - 2.0).abs() < 1e-8);
    }

    #[test]
    fn empty_interval_is_zero() {
        let result = integrate(|x| x, 2.0, 2.0).unwrap();
        assert_eq!(result, 0.0);
    }

    #[test]
    fn exhausted_budget_is_an_error() {
        let opts = QuadratureOpts {
            tolerance: 1.0e-300,
            max_depth: 2,
        };
        let err = integrate_with(|x| (1.0 / (x + 1.0e-3)).sin(), 0.0, 1.0, opts).unwrap_err();
        assert_eq!(err.info().code, "quad-nonconvergence");
    }
}
