//! Explicit fixed-step integration up to a terminal time.

use crate::fixed_shared::{State, Stats, System};
use crate::method::Method;

/// Structure containing the parameters for the numerical integration.
///
/// Only the current time and state are kept. Time is advanced by repeatedly adding the step
/// size, so the number of steps taken may differ by one from `(x_end - x) / step_size` when the
/// step size is not exactly representable. The difference is visible in the returned [`Stats`].
pub struct FixedStep<V, F>
where
    F: System<V>,
{
    f: F,
    method: Method,
    x: f64,
    y: V,
    x_end: f64,
    step_size: f64,
    stats: Stats,
}

impl<V, F> FixedStep<V, F>
where
    V: State,
    F: System<V>,
{
    /// Default initializer for the structure
    ///
    /// # Arguments
    ///
    /// * `f`           - Structure implementing the System<V> trait
    /// * `method`      - Update rule applied at every step
    /// * `x`           - Initial value of the independent variable (usually time)
    /// * `y`           - Initial value of the dependent variable(s)
    /// * `x_end`       - Final value of the independent variable
    /// * `step_size`   - Step size used in the method
    ///
    pub fn new(f: F, method: Method, x: f64, y: V, x_end: f64, step_size: f64) -> Self {
        FixedStep {
            f,
            method,
            x,
            y,
            x_end,
            step_size,
            stats: Stats::new(),
        }
    }

    /// Core integration method.
    ///
    /// Steps while `x < x_end`. Nothing happens when `x >= x_end`. Non-finite values produced
    /// by the system are carried through unchanged.
    pub fn integrate(&mut self) -> Stats {
        advance(
            &self.f,
            self.method,
            &mut self.x,
            &mut self.y,
            self.x_end,
            self.step_size,
            &mut self.stats,
        );
        self.stats
    }

    /// Getter for the current value of the independent variable.
    pub fn x(&self) -> f64 {
        self.x
    }

    /// Getter for the current value of the dependent variable(s).
    pub fn y(&self) -> V {
        self.y
    }

    /// Getter for the integration statistics.
    pub fn stats(&self) -> Stats {
        self.stats
    }
}

/// Integrates `f` from `(t0, x0)` to `t_end` with `method` and step `h`, returning only the
/// final state.
pub fn step_to<V, F>(f: &F, method: Method, x0: V, t0: f64, t_end: f64, h: f64) -> V
where
    V: State,
    F: System<V>,
{
    let mut t = t0;
    let mut x = x0;
    let mut stats = Stats::new();
    advance(f, method, &mut t, &mut x, t_end, h, &mut stats);
    x
}

fn advance<V, F>(
    f: &F,
    method: Method,
    x: &mut f64,
    y: &mut V,
    x_end: f64,
    step_size: f64,
    stats: &mut Stats,
) where
    V: State,
    F: System<V>,
{
    while *x < x_end {
        *y = method.step(f, *x, y, step_size);
        *x += step_size;

        stats.num_eval += method.evaluations();
        stats.accepted_steps += 1;
    }
}
