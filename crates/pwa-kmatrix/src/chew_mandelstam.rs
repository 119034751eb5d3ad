//! Chew-Mandelstam loop function for two-body channels.

use std::f64::consts::PI;

use num_complex::Complex64;

use pwa_core::kinematics::kallen;

/// Analytically continued two-body phase space for a channel with masses
/// `(ma, mb)` at energy squared `s`:
///
/// G = −(ρ ln((ξ+ρ)/(ξ−ρ)) − ξ (m_b−m_a)/(m_b+m_a) ln(m_b/m_a)) / π
///
/// with ρ = √λ(s, m_a², m_b²)/s and ξ = 1 − (m_a+m_b)²/s. All square roots
/// and logarithms use the principal branch, so ρ turns purely imaginary
/// below the (m_a+m_b)² threshold and G continues smoothly through it with
/// no sign special-casing.
pub fn chew_mandelstam(s: f64, ma: f64, mb: f64) -> Complex64 {
    let rho = Complex64::new(kallen(s, ma * ma, mb * mb), 0.0).sqrt() / s;
    let xi = Complex64::new(1.0 - (ma + mb) * (ma + mb) / s, 0.0);
    let mass_term = xi * ((mb - ma) / (mb + ma)) * (mb / ma).ln();
    -(rho * ((xi + rho) / (xi - rho)).ln() - mass_term) / PI
}

/// Center-of-mass breakup momentum of a channel with masses `(ma, mb)`,
/// complex below threshold.
pub fn channel_momentum(s: f64, ma: f64, mb: f64) -> Complex64 {
    Complex64::new(kallen(s, ma * ma, mb * mb), 0.0).sqrt()
        / Complex64::new(4.0 * s, 0.0).sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn real_below_threshold() {
        let g = chew_mandelstam(3.9, 1.0, 1.1);
        assert!(g.im.abs() < 1e-12);
    }

    #[test]
    fn imaginary_part_matches_phase_space_above_threshold() {
        let (ma, mb) = (1.0, 1.1);
        let s = (ma + mb) * (ma + mb) + 0.35;
        let g = chew_mandelstam(s, ma, mb);
        let rho = kallen(s, ma * ma, mb * mb).sqrt() / s;
        assert!((g.im - rho).abs() < 1e-10);
    }
}
