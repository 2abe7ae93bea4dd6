// Convergence study of x' = x, x(0) = 1 on [0, 1] for the Euler, midpoint and Runge-Kutta 4
// methods.
//
// Usage: convergence [--print] [--csv] [--out-dir DIR]
// Without --print or --csv the two questions are asked on the terminal.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use fixed_step_ode::app::run_convergence_study;
use fixed_step_ode::config::{ConvergenceConfig, RunConfig};

fn main() -> Result<()> {
    let mut print_tables = false;
    let mut export_csv = false;
    let mut output_dir = PathBuf::from(".");

    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--print" => print_tables = true,
            "--csv" => export_csv = true,
            "--out-dir" => {
                output_dir = args.next().map(PathBuf::from).context("--out-dir needs a directory")?;
            }
            other => bail!("Unknown argument: {}", other),
        }
    }

    println!("Simulating x' = x, whose solution is x(t) = e^t");
    let run = if print_tables || export_csv {
        RunConfig::new(print_tables, export_csv, output_dir)?
    } else {
        let print_answer = ask("Do you want tables outputted in terminal (Y or N):   ")?;
        let csv_answer = ask(
            "Do you want export as CSV? The CSVs will be saved in this directory (Y or N):    ",
        )?;
        RunConfig::from_answers(&print_answer, &csv_answer, output_dir)?
    };

    let stdout = io::stdout();
    let mut console = stdout.lock();
    let report = run_convergence_study(&run, &ConvergenceConfig::default(), &mut console)?;

    for table in &report.tables {
        println!("\n{}\n{}", table.method().name(), table.stats());
    }
    if !report.written.is_empty() {
        println!("\nexporting tables as CSVs");
        for path in &report.written {
            println!("Results saved in: {:?}", path);
        }
    }
    Ok(())
}

fn ask(question: &str) -> Result<String> {
    print!("{}", question);
    io::stdout().flush()?;
    let mut answer = String::new();
    io::stdin().lock().read_line(&mut answer)?;
    Ok(answer)
}
