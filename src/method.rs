//! Update rules of the explicit fixed-step methods.

use crate::fixed_shared::{State, System};

use serde::{Deserialize, Serialize};

/// Enumeration of the available explicit methods.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Method {
    /// Explicit (forward) Euler, order 1.
    Euler,
    /// Explicit midpoint, order 2.
    Midpoint,
    /// Classical Runge-Kutta, order 4.
    Rk4,
}

impl Method {
    /// All methods, from lowest to highest order.
    pub const ALL: [Method; 3] = [Method::Euler, Method::Midpoint, Method::Rk4];

    /// Performs one step of size `h` from `(t, y)` and returns the new state.
    pub fn step<V, F>(&self, f: &F, t: f64, y: &V, h: f64) -> V
    where
        V: State,
        F: System<V>,
    {
        let y = *y;
        match self {
            Method::Euler => y + f.derivative(t, &y) * h,
            Method::Midpoint => {
                let half_step = h / 2.0;
                let k1 = f.derivative(t, &y);
                let k2 = f.derivative(t + half_step, &(y + k1 * half_step));
                y + k2 * h
            }
            Method::Rk4 => {
                let half_step = h / 2.0;
                let k1 = f.derivative(t, &y);
                let k2 = f.derivative(t + half_step, &(y + k1 * half_step));
                let k3 = f.derivative(t + half_step, &(y + k2 * half_step));
                let k4 = f.derivative(t + h, &(y + k3 * h));
                y + (k1 + k2 * 2.0 + k3 * 2.0 + k4) * (h / 6.0)
            }
        }
    }

    /// Number of derivative evaluations per step.
    pub fn evaluations(&self) -> u64 {
        match self {
            Method::Euler => 1,
            Method::Midpoint => 2,
            Method::Rk4 => 4,
        }
    }

    /// Order of the global error.
    pub fn order(&self) -> u32 {
        match self {
            Method::Euler => 1,
            Method::Midpoint => 2,
            Method::Rk4 => 4,
        }
    }

    /// Human readable name, used as convergence table caption.
    pub fn name(&self) -> &'static str {
        match self {
            Method::Euler => "Euler Method",
            Method::Midpoint => "Midpoint Method",
            Method::Rk4 => "Runge–Kutta 4",
        }
    }

    /// Title of the phase-plane panel drawn with this method.
    pub fn panel_title(&self) -> &'static str {
        match self {
            Method::Rk4 => "Runge–Kutta 4 Method",
            other => other.name(),
        }
    }

    /// Short identifier used in file names.
    pub fn slug(&self) -> &'static str {
        match self {
            Method::Euler => "euler",
            Method::Midpoint => "midpoint",
            Method::Rk4 => "rk4",
        }
    }

    /// Name of the CSV file a convergence table of this method is exported to.
    pub fn table_file_name(&self) -> String {
        format!("{}_table.csv", self.slug())
    }
}
