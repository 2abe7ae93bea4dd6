//! Shared traits and structures for the fixed-step methods and their harnesses.

use std::fmt;
use std::ops::{Add, Mul};
use std::path::PathBuf;

use nalgebra::SVector;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Trait needed to be implemented by the user.
///
/// Any closure `Fn(f64, &V) -> V` already implements it.
pub trait System<V> {
    /// Right-hand side of the ordinary differential equation, evaluated at time `t` and state `y`.
    fn derivative(&self, t: f64, y: &V) -> V;
}

impl<V, F> System<V> for F
where
    F: Fn(f64, &V) -> V,
{
    fn derivative(&self, t: f64, y: &V) -> V {
        self(t, y)
    }
}

/// Value type advanced by the integrators: a scalar or a fixed-size vector.
pub trait State: Copy + Add<Output = Self> + Mul<f64, Output = Self> {
    /// Distance to `other`, used as the absolute error against a reference.
    fn distance(&self, other: &Self) -> f64;

    /// Components of the state, in order.
    fn components(&self) -> Vec<f64>;
}

impl State for f64 {
    fn distance(&self, other: &Self) -> f64 {
        (self - other).abs()
    }

    fn components(&self) -> Vec<f64> {
        vec![*self]
    }
}

impl<const D: usize> State for SVector<f64, D> {
    fn distance(&self, other: &Self) -> f64 {
        (self - other).norm()
    }

    fn components(&self) -> Vec<f64> {
        self.iter().copied().collect()
    }
}

/// Enumeration of the errors that may arise outside of the numerical core.
#[derive(Debug, Error)]
pub enum Error {
    #[error("Nothing to do: enable printing the tables or exporting them as CSV.")]
    NoOutputRequested,
    #[error("Could not write to the console: {0}")]
    Console(#[source] std::io::Error),
    #[error("Could not write {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Contains some statistics of the integration.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stats {
    pub num_eval: u64,
    pub accepted_steps: u64,
}

impl Stats {
    pub(crate) fn new() -> Stats {
        Stats {
            num_eval: 0,
            accepted_steps: 0,
        }
    }
}

impl Add for Stats {
    type Output = Stats;

    fn add(self, other: Stats) -> Stats {
        Stats {
            num_eval: self.num_eval + other.num_eval,
            accepted_steps: self.accepted_steps + other.accepted_steps,
        }
    }
}

impl fmt::Display for Stats {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "Number of function evaluations: {}", self.num_eval)?;
        write!(f, "Number of accepted steps: {}", self.accepted_steps)
    }
}
