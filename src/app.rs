//! Entry points of the two studies, shared by the binaries.

use std::io::Write;
use std::path::{Path, PathBuf};

use crate::config::{ConvergenceConfig, PortraitConfig, RunConfig};
use crate::convergence::{build_convergence_table, ConvergenceTable};
use crate::export::{save, write_table_csv, write_table_text, write_trajectory};
use crate::fixed_shared::Error;
use crate::method::Method;
use crate::systems::{CoupledGrowth, ExponentialGrowth};
use crate::trajectory::{phase_portrait, PhasePortrait};
use crate::Vector2;

/// Result of a convergence study run.
#[derive(Debug)]
pub struct ConvergenceReport {
    /// One table per method, from lowest to highest order.
    pub tables: Vec<ConvergenceTable<f64>>,
    /// CSV files written, empty unless exporting was requested.
    pub written: Vec<PathBuf>,
}

/// Builds the convergence table of every method for `x' = rate * x`, against the closed-form
/// value at `t_end`.
pub fn convergence_tables(experiment: &ConvergenceConfig) -> Vec<ConvergenceTable<f64>> {
    let system = ExponentialGrowth::new(experiment.rate);
    let reference = system.solution(experiment.x0, experiment.t0, experiment.t_end);
    Method::ALL
        .iter()
        .map(|&method| {
            build_convergence_table(
                &system,
                method,
                experiment.x0,
                experiment.t0,
                experiment.t_end,
                experiment.exponents(),
                reference,
            )
        })
        .collect()
}

/// Runs the convergence study and sends the tables to the sinks enabled in `run`.
pub fn run_convergence_study<W: Write>(
    run: &RunConfig,
    experiment: &ConvergenceConfig,
    console: &mut W,
) -> Result<ConvergenceReport, Error> {
    let run = run.clone().validate()?;
    let tables = convergence_tables(experiment);

    if run.print_tables() {
        for (i, table) in tables.iter().enumerate() {
            if i > 0 {
                writeln!(console).map_err(Error::Console)?;
            }
            write_table_text(table, console).map_err(Error::Console)?;
        }
    }

    let mut written = Vec::new();
    if run.export_csv() {
        for table in &tables {
            let path = run.output_dir().join(table.method().table_file_name());
            written.push(save(&path, |buf| write_table_csv(table, buf))?);
        }
    }

    Ok(ConvergenceReport { tables, written })
}

/// Builds the coupled-growth phase portrait and writes one data file per method and initial
/// condition into `output_dir`.
pub fn run_phase_portrait(
    portrait: &PortraitConfig,
    output_dir: &Path,
) -> Result<(PhasePortrait<Vector2<f64>>, Vec<PathBuf>), Error> {
    let system = CoupledGrowth::new(portrait.k, portrait.l, portrait.a, portrait.b);
    let result = phase_portrait(&system, &portrait.initials, portrait.dt, portrait.t_end);

    let mut written = Vec::new();
    for panel in &result.panels {
        for (x0, trajectory) in result.initials.iter().zip(&panel.trajectories) {
            let name = format!("{}_{}_{}.dat", panel.method.slug(), x0[0], x0[1]);
            written.push(save(&output_dir.join(name), |buf| write_trajectory(trajectory, buf))?);
        }
    }

    Ok((result, written))
}
