#![deny(missing_docs)]
#![doc = "Inclusive (triple-Regge) cross-sections: trajectory and total \
cross-section providers, inclusive phase-space bounds, and the integrator \
that turns an exclusive amplitude into inclusive observables."]

pub mod kinematics;
pub mod sigma_tot;
pub mod trajectory;
pub mod triple_regge;

pub use kinematics::InclusiveKinematics;
pub use sigma_tot::{PdgParameterization, TotalCrossSection, ZeroCrossSection};
pub use pwa_core::ExchangeKind;
pub use trajectory::{LinearTrajectory, Trajectory};
pub use triple_regge::{Propagator, TripleRegge, VariableMode};
