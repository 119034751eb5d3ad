#![deny(missing_docs)]
#![doc = "Core contract and numerics for the partial-wave amplitude engine: \
the `Amplitude` trait with its cache protocol, reaction kinematics, shared \
error types, special functions, and adaptive quadrature."]

pub mod amplitude;
pub mod constants;
pub mod errors;
pub mod kinematics;
pub mod math;
pub mod quadrature;

pub use amplitude::{
    check_parameter_count, check_quantum_numbers, Amplitude, AmplitudeCache, AmplitudeSum,
    ExchangeKind,
};
pub use errors::{ErrorInfo, PwaError};
pub use kinematics::{
    kallen, ReactionKinematics, AXIALVECTOR, HALFMINUS, HALFPLUS, JP, PSEUDOSCALAR, VECTOR,
};
pub use math::{cgamma, legendre};
pub use quadrature::{integrate, integrate_with, QuadratureOpts};

/// Complex scalar used throughout the engine.
pub type Complex = num_complex::Complex64;
