//! Physical constants and hadron masses used throughout the engine.
//!
//! All masses are in GeV, squared masses in GeV². Values follow the PDG.

/// Charged pion mass.
pub const M_PION: f64 = 0.139_57;

/// Charged pion mass squared.
pub const M2_PION: f64 = M_PION * M_PION;

/// Proton mass.
pub const M_PROTON: f64 = 0.938_272;

/// b1(1235) axial-vector meson mass.
pub const M_B1: f64 = 1.229_5;

/// J/psi mass.
pub const M_JPSI: f64 = 3.096_9;

/// D meson mass.
pub const M_D: f64 = 1.864_84;

/// D* meson mass.
pub const M_DSTAR: f64 = 2.006_85;

/// Lambda_c baryon mass.
pub const M_LAMBDAC: f64 = 2.286_46;

/// Conversion factor from GeV⁻² to nanobarn.
pub const GEV2_TO_NB: f64 = 389_379.0;
