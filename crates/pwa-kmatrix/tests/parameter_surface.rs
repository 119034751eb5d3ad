use std::sync::Arc;

use pwa_core::constants::{M_D, M_LAMBDAC};
use pwa_core::kinematics::{ReactionKinematics, JP};
use pwa_core::Amplitude;
use pwa_kmatrix::TwoChannel;

fn kinematics() -> Arc<ReactionKinematics> {
    Arc::new(ReactionKinematics::photoproduction(M_D, M_LAMBDAC))
}

#[test]
fn exactly_five_parameters_in_fixed_order() {
    let mut amp = TwoChannel::new(kinematics(), 2, [1.0, 1.1], "pw").unwrap();
    assert_eq!(amp.n_parameters(), 5);
    assert_eq!(
        amp.parameter_labels(),
        vec!["a00[2]", "a01[2]", "a11[2]", "b0[2]", "b1[2]"]
    );
    amp.set_parameters(&[0.1, 0.2, 0.3, 1.0, 2.0]).unwrap();

    // Debug formatting exposes the identifier for diagnostics.
    let rendered = format!("{amp:?}");
    assert!(rendered.contains("TwoChannel"));
    assert!(rendered.contains("pw"));
}

#[test]
fn wrong_parameter_count_is_fatal() {
    let mut amp = TwoChannel::new(kinematics(), 0, [1.0, 1.1], "pw").unwrap();
    let err = amp.set_parameters(&[0.1, 0.2, 0.3, 1.0]).unwrap_err();
    assert_eq!(err.info().code, "par-count");

    let err = amp.set_parameters(&[0.1; 6]).unwrap_err();
    assert_eq!(err.info().code, "par-count");
}

#[test]
fn unsupported_meson_jp_aborts_construction() {
    let mut k = ReactionKinematics::photoproduction(M_D, M_LAMBDAC);
    k.set_meson_jp(JP::new(2, 1));
    let err = TwoChannel::new(Arc::new(k), 0, [1.0, 1.1], "pw").unwrap_err();
    assert_eq!(err.info().code, "qn-meson");
}

#[test]
fn unsupported_baryon_jp_aborts_construction() {
    let mut k = ReactionKinematics::photoproduction(M_D, M_LAMBDAC);
    k.set_baryon_jp(JP::new(3, 1));
    let err = TwoChannel::new(Arc::new(k), 0, [1.0, 1.1], "pw").unwrap_err();
    assert_eq!(err.info().code, "qn-baryon");
}
