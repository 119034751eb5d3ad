//! Regge trajectory providers.

use num_complex::Complex64;
use serde::{Deserialize, Serialize};

/// Exchange trajectory consumed by the Regge propagator: a complex function
/// of the momentum transfer plus its slope, signature, and the lowest spin
/// on the trajectory.
pub trait Trajectory: Send + Sync {
    /// Trajectory value α(t).
    fn eval(&self, t: f64) -> Complex64;

    /// Slope α′ in GeV⁻².
    fn slope(&self) -> f64;

    /// Signature, ±1.
    fn signature(&self) -> i32;

    /// Minimum angular momentum on the trajectory.
    fn min_j(&self) -> i32;
}

/// Linear trajectory α(t) = α₀ + α′ t.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LinearTrajectory {
    signature: i32,
    intercept: f64,
    slope: f64,
    min_j: i32,
}

impl LinearTrajectory {
    /// Creates a linear trajectory with minimum spin 0.
    pub fn new(signature: i32, intercept: f64, slope: f64) -> Self {
        Self {
            signature,
            intercept,
            slope,
            min_j: 0,
        }
    }

    /// Sets the minimum angular momentum on the trajectory.
    pub fn with_min_j(mut self, min_j: i32) -> Self {
        self.min_j = min_j;
        self
    }
}

impl Trajectory for LinearTrajectory {
    fn eval(&self, t: f64) -> Complex64 {
        Complex64::new(self.intercept + self.slope * t, 0.0)
    }

    fn slope(&self) -> f64 {
        self.slope
    }

    fn signature(&self) -> i32 {
        self.signature
    }

    fn min_j(&self) -> i32 {
        self.min_j
    }
}
