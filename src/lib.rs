//! # Fixed-step ODE integration
//! `fixed_step_ode` advances ordinary differential equations with explicit fixed-step methods
//! (Euler, midpoint, classical Runge-Kutta) and measures how fast they converge.
//!
//! The [`convergence`] harness runs a method for step sizes `2^-k` and compares the terminal
//! value with a closed-form solution. The [`trajectory`] harness keeps every state of a run,
//! for phase-plane plots of vector systems.

// Re-export from external crate
use nalgebra as na;
pub use crate::na::{Vector1, Vector2, Vector3, Vector4, Vector5, Vector6};

// Declare modules
pub mod app;
pub mod config;
pub mod convergence;
pub mod export;
pub mod fixed_shared;
pub mod fixed_step;
pub mod method;
pub mod systems;
pub mod trajectory;

pub use convergence::{build_convergence_table, ConvergenceRow, ConvergenceTable};
pub use fixed_shared::{Error, State, Stats, System};
pub use fixed_step::{step_to, FixedStep};
pub use method::Method;
pub use trajectory::{euler_trajectory, rk4_trajectory, simulate_trajectory, Trajectory};
