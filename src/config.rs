//! Run and experiment configuration.

use std::ops::RangeInclusive;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::fixed_shared::Error;
use crate::Vector2;

/// Output sinks of a run. At least one of them must be enabled.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunConfig {
    print_tables: bool,
    export_csv: bool,
    output_dir: PathBuf,
}

impl RunConfig {
    /// Creates a configuration, failing with [`Error::NoOutputRequested`] when both sinks are
    /// disabled.
    pub fn new(
        print_tables: bool,
        export_csv: bool,
        output_dir: impl Into<PathBuf>,
    ) -> Result<Self, Error> {
        RunConfig {
            print_tables,
            export_csv,
            output_dir: output_dir.into(),
        }
        .validate()
    }

    /// Creates a configuration from the answers to the two yes/no prompts. Only `y` (in any
    /// case, surrounding whitespace ignored) counts as yes.
    pub fn from_answers(
        print_tables: &str,
        export_csv: &str,
        output_dir: impl Into<PathBuf>,
    ) -> Result<Self, Error> {
        RunConfig::new(is_yes(print_tables), is_yes(export_csv), output_dir)
    }

    /// Checks that at least one sink is enabled.
    pub fn validate(self) -> Result<Self, Error> {
        if self.print_tables || self.export_csv {
            Ok(self)
        } else {
            Err(Error::NoOutputRequested)
        }
    }

    pub fn print_tables(&self) -> bool {
        self.print_tables
    }

    pub fn export_csv(&self) -> bool {
        self.export_csv
    }

    /// Directory the CSV files and trajectory data are written to.
    pub fn output_dir(&self) -> &PathBuf {
        &self.output_dir
    }
}

fn is_yes(answer: &str) -> bool {
    answer.trim().eq_ignore_ascii_case("y")
}

/// Parameters of the convergence study of `x' = rate * x`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConvergenceConfig {
    pub rate: f64,
    pub x0: f64,
    pub t0: f64,
    pub t_end: f64,
    pub min_exponent: u32,
    pub max_exponent: u32,
}

impl ConvergenceConfig {
    pub fn exponents(&self) -> RangeInclusive<u32> {
        self.min_exponent..=self.max_exponent
    }
}

impl Default for ConvergenceConfig {
    fn default() -> Self {
        ConvergenceConfig {
            rate: 1.0,
            x0: 1.0,
            t0: 0.0,
            t_end: 1.0,
            min_exponent: 10,
            max_exponent: 20,
        }
    }
}

/// Parameters of the coupled-growth phase portrait.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PortraitConfig {
    pub k: f64,
    pub l: f64,
    pub a: f64,
    pub b: f64,
    pub dt: f64,
    pub t_end: f64,
    pub initials: Vec<Vector2<f64>>,
}

impl Default for PortraitConfig {
    fn default() -> Self {
        let initials = [
            (3., 3.),
            (3., 6.),
            (6., 9.),
            (6., 7.),
            (1., 2.),
            (2., 3.),
            (4., 5.),
            (4., 9.),
            (5., 1.),
        ]
        .iter()
        .map(|&(x, y)| Vector2::new(x, y))
        .collect();

        PortraitConfig {
            k: 1.2,
            l: 1.0,
            a: 0.5,
            b: 0.4,
            dt: 0.01,
            t_end: 10.0,
            initials,
        }
    }
}
