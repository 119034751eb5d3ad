use pwa_kmatrix::chew_mandelstam;

/// The loop function must continue smoothly through the two-body threshold
/// when evaluated with a consistent principal branch of the complex square
/// root.
#[test]
fn continuous_across_threshold() {
    let (ma, mb) = (1.0, 1.1);
    let s_threshold = (ma + mb) * (ma + mb);
    // G varies like √(s − s_th) at the branch point, so the straddle has
    // to be tight for the two sides to agree at the 1e-6 level.
    let eps = 1e-13;

    let below = chew_mandelstam(s_threshold - eps, ma, mb);
    let above = chew_mandelstam(s_threshold + eps, ma, mb);
    assert!((below - above).norm() < 1e-6);
}

#[test]
fn real_below_develops_imaginary_above() {
    let (ma, mb) = (1.0, 1.1);
    let s_threshold = (ma + mb) * (ma + mb);

    let below = chew_mandelstam(s_threshold - 0.2, ma, mb);
    assert!(below.im.abs() < 1e-12);

    let above = chew_mandelstam(s_threshold + 0.2, ma, mb);
    assert!(above.im > 0.0);
}

#[test]
fn equal_mass_channel_drops_mass_term() {
    // For m_a = m_b the ξ (m_b−m_a)/(m_b+m_a) ln(m_b/m_a) term vanishes
    // identically; the function must stay finite and smooth.
    let g = chew_mandelstam(5.0, 1.0, 1.0);
    assert!(g.re.is_finite());
    assert!(g.im.is_finite());
}
