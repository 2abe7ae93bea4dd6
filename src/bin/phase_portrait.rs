// Coupled-growth model dx/dt = k x - a x y, dy/dt = -l y + b x y, integrated with the Euler and
// Runge-Kutta 4 methods from nine initial conditions.
//
// Usage: phase_portrait [--out-dir DIR]
// Every trajectory is saved as "t, x, y" lines, ready for an x-y phase plot per method.

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use fixed_step_ode::app::run_phase_portrait;
use fixed_step_ode::config::PortraitConfig;

fn main() -> Result<()> {
    let mut output_dir = PathBuf::from("./outputs");

    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--out-dir" => {
                output_dir = args.next().map(PathBuf::from).context("--out-dir needs a directory")?;
            }
            other => bail!("Unknown argument: {}", other),
        }
    }

    let config = PortraitConfig::default();
    let (portrait, written) = run_phase_portrait(&config, &output_dir)?;

    for panel in &portrait.panels {
        println!("{}: {} trajectories", panel.method.panel_title(), panel.trajectories.len());
    }
    println!("{}", portrait.stats());
    println!("Results saved in: {:?}", output_dir);
    for path in &written {
        println!("  {:?}", path);
    }
    Ok(())
}
