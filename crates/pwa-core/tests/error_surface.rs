use pwa_core::errors::{ErrorInfo, PwaError};

fn sample_info(code: &str, message: &str) -> ErrorInfo {
    ErrorInfo::new(code, message)
        .with_context("amplitude", "test")
        .with_context("reason", "example")
}

#[test]
fn kinematics_error_surface() {
    let err = PwaError::Kinematics(sample_info("K001", "below threshold"));
    assert_eq!(err.info().code, "K001");
    assert!(err.info().context.contains_key("amplitude"));
}

#[test]
fn parameters_error_surface() {
    let err = PwaError::Parameters(sample_info("P001", "length mismatch"));
    assert_eq!(err.info().code, "P001");
    assert!(err.info().context.contains_key("reason"));
}

#[test]
fn quantum_numbers_error_surface() {
    let err = PwaError::QuantumNumbers(sample_info("Q001", "unsupported JP"));
    assert_eq!(err.info().code, "Q001");
}

#[test]
fn integration_error_surface() {
    let err = PwaError::Integration(sample_info("I001", "non-convergence"));
    assert_eq!(err.info().code, "I001");
}

#[test]
fn hint_shows_in_display() {
    let err = PwaError::Integration(
        ErrorInfo::new("I002", "budget exhausted").with_hint("loosen the tolerance"),
    );
    assert!(err.to_string().contains("loosen the tolerance"));
}
