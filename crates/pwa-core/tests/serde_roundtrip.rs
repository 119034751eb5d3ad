use pwa_core::errors::{ErrorInfo, PwaError};
use pwa_core::kinematics::{ReactionKinematics, JP, VECTOR};

#[test]
fn jp_round_trips_json() {
    let jp = JP::new(1, -1);
    assert_eq!(jp.to_string(), "1-");
    let json = serde_json::to_string(&jp).unwrap();
    let back: JP = serde_json::from_str(&json).unwrap();
    assert_eq!(jp, back);
}

#[test]
fn kinematics_round_trips_json() {
    let mut k = ReactionKinematics::photoproduction(3.0969, 0.938272);
    k.set_meson_jp(VECTOR);
    let json = serde_json::to_string(&k).unwrap();
    let back: ReactionKinematics = serde_json::from_str(&json).unwrap();
    assert_eq!(k, back);
}

#[test]
fn error_round_trips_json() {
    let err = PwaError::Parameters(
        ErrorInfo::new("par-count", "parameter vector length mismatch")
            .with_context("expected", "5")
            .with_context("got", "4")
            .with_hint("see parameter_labels()"),
    );
    let json = serde_json::to_string(&err).unwrap();
    let back: PwaError = serde_json::from_str(&json).unwrap();
    assert_eq!(err, back);
}
