use pwa_core::constants::{M_B1, M_PROTON};
use pwa_core::kinematics::{kallen, ReactionKinematics, AXIALVECTOR};

fn b1_kinematics() -> ReactionKinematics {
    let mut k = ReactionKinematics::photoproduction(M_B1, M_PROTON);
    k.set_meson_jp(AXIALVECTOR);
    k
}

#[test]
fn kallen_vanishes_at_threshold() {
    let s = (1.0_f64 + 1.1).powi(2);
    assert!(kallen(s, 1.0, 1.1 * 1.1).abs() < 1e-12);
}

#[test]
fn final_momentum_real_above_threshold_imaginary_below() {
    let k = b1_kinematics();
    let thr = k.threshold();

    let above = k.final_momentum(thr + 0.5);
    assert!(above.re > 0.0);
    assert!(above.im.abs() < 1e-12);

    let below = k.final_momentum(thr - 0.1);
    assert!(below.re.abs() < 1e-12);
    assert!(below.im > 0.0);
}

#[test]
fn cos_theta_hits_plus_one_at_t_min() {
    let k = b1_kinematics();
    let s = k.threshold() + 2.0;
    let z_fwd = k.cos_theta(s, k.t_min(s));
    let z_bwd = k.cos_theta(s, k.t_max(s));
    assert!((z_fwd - 1.0).abs() < 1e-9);
    assert!((z_bwd + 1.0).abs() < 1e-9);
}

#[test]
fn t_man_inverts_cos_theta() {
    let k = b1_kinematics();
    let s = k.threshold() + 3.0;
    for z in [-0.9, -0.3, 0.0, 0.4, 0.95] {
        let t = k.t_man(s, z);
        assert!((k.cos_theta(s, t) - z).abs() < 1e-9);
    }
}

#[test]
fn helicity_list_counts_meson_projections() {
    let k = b1_kinematics();
    // photon(2) x target(2) x axial-vector meson(3) x recoil(2)
    assert_eq!(k.helicities().len(), 24);
    assert_eq!(k.helicities()[0], [1, 1, 1, 1]);
}
