//! Right-hand sides studied by the harnesses.

use serde::{Deserialize, Serialize};

use crate::fixed_shared::System;
use crate::Vector2;

/// Exponential growth `x' = rate * x`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ExponentialGrowth {
    pub rate: f64,
}

impl ExponentialGrowth {
    pub fn new(rate: f64) -> Self {
        ExponentialGrowth { rate }
    }

    /// Closed-form solution `x0 * exp(rate * (t - t0))`.
    pub fn solution(&self, x0: f64, t0: f64, t: f64) -> f64 {
        x0 * (self.rate * (t - t0)).exp()
    }
}

impl Default for ExponentialGrowth {
    fn default() -> Self {
        ExponentialGrowth::new(1.0)
    }
}

impl System<f64> for ExponentialGrowth {
    fn derivative(&self, _t: f64, x: &f64) -> f64 {
        self.rate * x
    }
}

/// Coupled growth and competition between two populations:
///
/// ```text
/// dx/dt =  k x - a x y
/// dy/dt = -l y + b x y
/// ```
///
/// Evaluated for any real state; negative populations are not clamped.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct CoupledGrowth {
    pub k: f64,
    pub l: f64,
    pub a: f64,
    pub b: f64,
}

impl CoupledGrowth {
    pub fn new(k: f64, l: f64, a: f64, b: f64) -> Self {
        CoupledGrowth { k, l, a, b }
    }

    /// Quantity `b x - l ln x + a y - k ln y`, constant along exact trajectories with
    /// positive populations.
    pub fn invariant(&self, state: &Vector2<f64>) -> f64 {
        let (x, y) = (state[0], state[1]);
        self.b * x - self.l * x.ln() + self.a * y - self.k * y.ln()
    }

    /// Non-trivial equilibrium `(l / b, k / a)`.
    pub fn equilibrium(&self) -> Vector2<f64> {
        Vector2::new(self.l / self.b, self.k / self.a)
    }
}

impl Default for CoupledGrowth {
    fn default() -> Self {
        CoupledGrowth::new(1.2, 1.0, 0.5, 0.4)
    }
}

impl System<Vector2<f64>> for CoupledGrowth {
    fn derivative(&self, _t: f64, state: &Vector2<f64>) -> Vector2<f64> {
        let (x, y) = (state[0], state[1]);
        Vector2::new(self.k * x - self.a * x * y, -self.l * y + self.b * x * y)
    }
}
