//! Convergence study of the fixed-step methods against a closed-form reference.
//!
//! The step count is sampled geometrically, `N = 2^k` and `h = 1 / N`, so a few trials span
//! several orders of magnitude of `h`. Rows are kept in increasing `k`, which shows the error
//! shrinking at the method's order until round-off takes over.

use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};

use crate::fixed_shared::{State, Stats, System};
use crate::fixed_step::FixedStep;
use crate::method::Method;

/// Names of the three columns of a convergence table, in order.
///
/// The labels are part of the exported schema and stay the same whatever problem, initial value
/// or terminal time the table was built for.
pub const COLUMNS: [&str; 3] = ["N = 2^k", "Numerical x(1)", "Error |x(1) - e|"];

/// One trial of the convergence study.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ConvergenceRow<V> {
    /// Exponent `k` of the step count `N = 2^k`.
    pub exponent: u32,
    /// Numerical value at the terminal time.
    pub value: V,
    /// Distance between `value` and the reference.
    pub error: f64,
}

impl<V> ConvergenceRow<V> {
    /// Step size `h = 2^-k` used for this row.
    pub fn step_size(&self) -> f64 {
        step_size(self.exponent)
    }
}

/// Rows of a convergence study for a single method.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ConvergenceTable<V> {
    method: Method,
    rows: Vec<ConvergenceRow<V>>,
    stats: Stats,
}

impl<V> ConvergenceTable<V> {
    /// Method the table was built with.
    pub fn method(&self) -> Method {
        self.method
    }

    /// Rows in increasing exponent order.
    pub fn rows(&self) -> &[ConvergenceRow<V>] {
        &self.rows
    }

    /// Statistics summed over every trial.
    pub fn stats(&self) -> Stats {
        self.stats
    }

    /// Estimated order between consecutive rows, `log2(err_k / err_{k+1})`.
    ///
    /// Values near the method's order indicate the asymptotic regime. Once round-off dominates
    /// the estimates become erratic and may be negative or non-finite.
    pub fn observed_orders(&self) -> Vec<f64> {
        self.rows
            .windows(2)
            .map(|pair| {
                let ratio = pair[0].error / pair[1].error;
                ratio.log2() / (pair[1].exponent - pair[0].exponent) as f64
            })
            .collect()
    }

    /// First exponent after which refining the step no longer decreases the error.
    ///
    /// Returns `None` if the error keeps decreasing over the whole table.
    pub fn noise_floor(&self) -> Option<u32> {
        self.rows
            .windows(2)
            .find(|pair| pair[1].error >= pair[0].error)
            .map(|pair| pair[0].exponent)
    }
}

/// Step size `2^-k`.
///
/// Underflows to `0.0` for `k >= 1075`; such a step would never reach the terminal time.
pub fn step_size(exponent: u32) -> f64 {
    (-f64::from(exponent)).exp2()
}

/// Runs `method` from `(t0, x0)` to `t_end` once per exponent in `exponents`, with `h = 2^-k`,
/// and compares every terminal value with `reference`.
pub fn build_convergence_table<V, F>(
    f: &F,
    method: Method,
    x0: V,
    t0: f64,
    t_end: f64,
    exponents: RangeInclusive<u32>,
    reference: V,
) -> ConvergenceTable<V>
where
    V: State,
    F: System<V>,
{
    let mut stats = Stats::default();
    let rows = exponents
        .map(|exponent| {
            let h = step_size(exponent);
            debug_assert!(h > 0.0, "step size 2^-{} underflows to zero", exponent);
            let mut stepper = FixedStep::new(
                |t: f64, y: &V| f.derivative(t, y),
                method,
                t0,
                x0,
                t_end,
                h,
            );
            stats = stats + stepper.integrate();
            let value = stepper.y();
            ConvergenceRow {
                exponent,
                value,
                error: value.distance(&reference),
            }
        })
        .collect();

    ConvergenceTable {
        method,
        rows,
        stats,
    }
}
