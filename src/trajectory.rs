//! Full trajectories of a fixed-step method over a fixed horizon.

use serde::{Deserialize, Serialize};

use crate::fixed_shared::{State, Stats, System};
use crate::method::Method;

/// States sampled at `t = i * dt`, starting with the initial condition at index 0.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Trajectory<V> {
    x_out: Vec<f64>,
    y_out: Vec<V>,
    stats: Stats,
}

impl<V> Trajectory<V> {
    /// Getter for the sample times.
    pub fn x_out(&self) -> &Vec<f64> {
        &self.x_out
    }

    /// Getter for the sampled states.
    pub fn y_out(&self) -> &Vec<V> {
        &self.y_out
    }

    pub fn stats(&self) -> Stats {
        self.stats
    }

    pub fn len(&self) -> usize {
        self.y_out.len()
    }

    pub fn is_empty(&self) -> bool {
        self.y_out.is_empty()
    }
}

/// Number of samples `floor(t_end / dt)` of a trajectory. Zero when the ratio is not a
/// positive finite number.
pub fn sample_count(dt: f64, t_end: f64) -> usize {
    let n = (t_end / dt).floor();
    if n.is_finite() && n > 0.0 {
        n as usize
    } else {
        0
    }
}

/// Integrates `f` from `x0` at `t = 0` and keeps every state.
///
/// The trajectory holds `floor(t_end / dt)` samples; sample `i + 1` is one `method` step from
/// sample `i`.
pub fn simulate_trajectory<V, F>(
    f: &F,
    method: Method,
    x0: V,
    dt: f64,
    t_end: f64,
) -> Trajectory<V>
where
    V: State,
    F: System<V>,
{
    let n = sample_count(dt, t_end);
    let mut x_out = Vec::with_capacity(n);
    let mut y_out = Vec::with_capacity(n);
    let mut stats = Stats::new();

    if n > 0 {
        x_out.push(0.0);
        y_out.push(x0);
    }
    for i in 1..n {
        let t = (i - 1) as f64 * dt;
        let y_new = method.step(f, t, &y_out[i - 1], dt);
        x_out.push(i as f64 * dt);
        y_out.push(y_new);

        stats.num_eval += method.evaluations();
        stats.accepted_steps += 1;
    }

    Trajectory {
        x_out,
        y_out,
        stats,
    }
}

/// [`simulate_trajectory`] with the explicit Euler method.
pub fn euler_trajectory<V, F>(f: &F, x0: V, dt: f64, t_end: f64) -> Trajectory<V>
where
    V: State,
    F: System<V>,
{
    simulate_trajectory(f, Method::Euler, x0, dt, t_end)
}

/// [`simulate_trajectory`] with the classical Runge-Kutta method.
pub fn rk4_trajectory<V, F>(f: &F, x0: V, dt: f64, t_end: f64) -> Trajectory<V>
where
    V: State,
    F: System<V>,
{
    simulate_trajectory(f, Method::Rk4, x0, dt, t_end)
}

/// Trajectories of one method, one per initial condition. Titled by
/// [`Method::panel_title`], with axes `x` and `y`.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Panel<V> {
    pub method: Method,
    pub trajectories: Vec<Trajectory<V>>,
}

/// Side by side comparison of Euler and Runge-Kutta 4 trajectories from several initial
/// conditions.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PhasePortrait<V> {
    pub initials: Vec<V>,
    pub panels: Vec<Panel<V>>,
}

impl<V> PhasePortrait<V> {
    /// Statistics summed over every trajectory of every panel.
    pub fn stats(&self) -> Stats {
        self.panels
            .iter()
            .flat_map(|panel| panel.trajectories.iter())
            .fold(Stats::default(), |acc, trajectory| acc + trajectory.stats())
    }
}

/// Builds a [`PhasePortrait`] of `f`. Each initial condition is integrated independently, and
/// the trajectories of a panel follow the order of `initials`.
pub fn phase_portrait<V, F>(f: &F, initials: &[V], dt: f64, t_end: f64) -> PhasePortrait<V>
where
    V: State,
    F: System<V>,
{
    let panels = [Method::Euler, Method::Rk4]
        .iter()
        .map(|&method| Panel {
            method,
            trajectories: initials
                .iter()
                .map(|&x0| simulate_trajectory(f, method, x0, dt, t_end))
                .collect(),
        })
        .collect();

    PhasePortrait {
        initials: initials.to_vec(),
        panels,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::systems::CoupledGrowth;
    use crate::Vector2;
    use approx::assert_relative_eq;

    #[test]
    fn sample_count_truncates() {
        assert_eq!(sample_count(0.01, 10.0), 1000);
        assert_eq!(sample_count(0.3, 1.0), 3);
        assert_eq!(sample_count(0.5, 0.0), 0);
        assert_eq!(sample_count(0.5, -1.0), 0);
        assert_eq!(sample_count(0.0, 1.0), 0);
        assert_eq!(sample_count(f64::NAN, 1.0), 0);
    }

    #[test]
    fn first_sample_is_the_initial_condition() {
        let system = CoupledGrowth::default();
        let x0 = Vector2::new(3.0, 3.0);
        for method in Method::ALL {
            let trajectory = simulate_trajectory(&system, method, x0, 0.01, 10.0);
            assert_eq!(trajectory.len(), 1000);
            assert_eq!(trajectory.y_out()[0], x0);
            assert_eq!(trajectory.x_out()[0], 0.0);
            assert_eq!(trajectory.stats().accepted_steps, 999);
        }
    }

    #[test]
    fn samples_chain_single_steps() {
        let system = CoupledGrowth::default();
        let trajectory = euler_trajectory(&system, Vector2::new(3.0, 3.0), 0.01, 0.05);
        assert_eq!(trajectory.len(), 5);
        for i in 1..trajectory.len() {
            let expected = Method::Euler.step(&system, 0.0, &trajectory.y_out()[i - 1], 0.01);
            assert_eq!(trajectory.y_out()[i], expected);
        }
        assert_relative_eq!(trajectory.y_out()[1], Vector2::new(2.991, 3.006), epsilon = 1e-12);
        assert_relative_eq!(trajectory.x_out()[4], 0.04);
    }

    #[test]
    fn short_horizons_give_empty_trajectories() {
        let system = CoupledGrowth::default();
        let trajectory = rk4_trajectory(&system, Vector2::new(1.0, 1.0), 0.5, 0.25);
        assert!(trajectory.is_empty());
        assert_eq!(trajectory.stats(), Stats::default());
    }

    #[test]
    fn rk4_conserves_the_invariant_better_than_euler() {
        let system = CoupledGrowth::default();
        let x0 = Vector2::new(3.0, 3.0);
        let h0 = system.invariant(&x0);
        let drift = |trajectory: &Trajectory<Vector2<f64>>| {
            trajectory
                .y_out()
                .iter()
                .map(|state| (system.invariant(state) - h0).abs())
                .fold(0.0, f64::max)
        };

        let rk4 = drift(&rk4_trajectory(&system, x0, 0.01, 10.0));
        let euler = drift(&euler_trajectory(&system, x0, 0.01, 10.0));
        assert!(rk4 < 1e-6, "rk4 drift {}", rk4);
        assert!(euler > 100.0 * rk4, "euler drift {}", euler);
    }

    #[test]
    fn phase_portrait_has_one_panel_per_method() {
        let system = CoupledGrowth::default();
        let initials = [Vector2::new(3.0, 3.0), Vector2::new(5.0, 1.0)];
        let portrait = phase_portrait(&system, &initials, 0.1, 1.0);

        let methods: Vec<Method> = portrait.panels.iter().map(|p| p.method).collect();
        assert_eq!(methods, vec![Method::Euler, Method::Rk4]);
        let titles: Vec<&str> = portrait.panels.iter().map(|p| p.method.panel_title()).collect();
        assert_eq!(titles, vec!["Euler Method", "Runge–Kutta 4 Method"]);
        for panel in &portrait.panels {
            assert_eq!(panel.trajectories.len(), 2);
            assert_eq!(panel.trajectories[1].y_out()[0], initials[1]);
        }
        assert_eq!(portrait.stats().accepted_steps, 4 * 9);
        assert_eq!(portrait.stats().num_eval, 2 * 9 + 2 * 9 * 4);
    }
}
