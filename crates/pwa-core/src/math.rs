//! Scalar special functions used by partial waves and Regge propagators.

use std::f64::consts::PI;

use num_complex::Complex64;

/// Legendre polynomial P_l(x) by the Bonnet recurrence.
pub fn legendre(l: u32, x: f64) -> f64 {
    match l {
        0 => 1.0,
        1 => x,
        _ => {
            let mut p_prev = 1.0;
            let mut p = x;
            for n in 1..l {
                let n = f64::from(n);
                let p_next = ((2.0 * n + 1.0) * x * p - n * p_prev) / (n + 1.0);
                p_prev = p;
                p = p_next;
            }
            p
        }
    }
}

// Lanczos coefficients for g = 7, n = 9.
const LANCZOS_G: f64 = 7.0;
const LANCZOS_COEFFS: [f64; 9] = [
    0.999_999_999_999_809_93,
    676.520_368_121_885_1,
    -1_259.139_216_722_402_8,
    771.323_428_777_653_13,
    -176.615_029_162_140_6,
    12.507_343_278_686_905,
    -0.138_571_095_265_720_12,
    9.984_369_578_019_571_6e-6,
    1.505_632_735_149_311_6e-7,
];

/// Gamma function for complex argument via the Lanczos approximation,
/// with the reflection formula covering Re z < 1/2.
pub fn cgamma(z: Complex64) -> Complex64 {
    if z.re < 0.5 {
        // Γ(z) Γ(1−z) = π / sin(πz)
        return PI / ((PI * z).sin() * cgamma(1.0 - z));
    }
    let z = z - 1.0;
    let mut x = Complex64::new(LANCZOS_COEFFS[0], 0.0);
    for (i, &c) in LANCZOS_COEFFS.iter().enumerate().skip(1) {
        x += c / (z + i as f64);
    }
    let t = z + LANCZOS_G + 0.5;
    (2.0 * PI).sqrt() * t.powc(z + 0.5) * (-t).exp() * x
}
