//! Text output of convergence tables and trajectories.

use std::fmt::LowerExp;
use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use num_traits::Float;

use crate::convergence::{ConvergenceTable, COLUMNS};
use crate::fixed_shared::{Error, State};
use crate::trajectory::Trajectory;

/// Digits after the decimal point of exported values.
pub const PRECISION: usize = 12;

/// Formats `value` like C's `%.{precision}e`: `2.718281828459e+00`, with at least two exponent
/// digits. Non-finite values become `nan`, `inf` and `-inf`.
pub fn format_scientific<T: Float + LowerExp>(value: T, precision: usize) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }
    if value.is_infinite() {
        let text = if value.is_sign_negative() { "-inf" } else { "inf" };
        return text.to_string();
    }

    let formatted = format!("{:.*e}", precision, value);
    match formatted.split_once('e') {
        Some((mantissa, exponent)) => {
            let (sign, digits) = match exponent.strip_prefix('-') {
                Some(digits) => ('-', digits),
                None => ('+', exponent),
            };
            format!("{}e{}{:0>2}", mantissa, sign, digits)
        }
        None => formatted,
    }
}

/// Writes `table` as CSV: a header with the three column names, then one line per row.
///
/// Vector values fill a single field, their components separated by spaces.
pub fn write_table_csv<V, W>(table: &ConvergenceTable<V>, writer: &mut W) -> io::Result<()>
where
    V: State,
    W: Write,
{
    writeln!(writer, "{}", COLUMNS.join(","))?;
    for row in table.rows() {
        writeln!(
            writer,
            "{},{},{}",
            row.exponent,
            format_value(&row.value),
            format_scientific(row.error, PRECISION)
        )?;
    }
    Ok(())
}

fn format_value<V: State>(value: &V) -> String {
    value
        .components()
        .into_iter()
        .map(|component| format_scientific(component, PRECISION))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Writes `table` as an aligned text table preceded by the method name.
pub fn write_table_text<V, W>(table: &ConvergenceTable<V>, writer: &mut W) -> io::Result<()>
where
    V: State,
    W: Write,
{
    writeln!(writer, "{}", table.method().name())?;
    writeln!(writer, "{:>8}  {:>20}  {:>20}", COLUMNS[0], COLUMNS[1], COLUMNS[2])?;
    for row in table.rows() {
        writeln!(
            writer,
            "{:>8}  {:>20}  {:>20}",
            row.exponent,
            format_value(&row.value),
            format_scientific(row.error, PRECISION)
        )?;
    }
    Ok(())
}

/// Writes the time and state of every sample of `trajectory`, one comma separated line each.
pub fn write_trajectory<V, W>(trajectory: &Trajectory<V>, writer: &mut W) -> io::Result<()>
where
    V: State,
    W: Write,
{
    for (time, state) in trajectory.x_out().iter().zip(trajectory.y_out()) {
        write!(writer, "{}", time)?;
        for val in state.components() {
            write!(writer, ", {}", val)?;
        }
        writeln!(writer)?;
    }
    Ok(())
}

/// Creates `path` and fills it with `write`, attaching the path to any I/O error.
pub fn save<F>(path: &Path, write: F) -> Result<PathBuf, Error>
where
    F: FnOnce(&mut BufWriter<File>) -> io::Result<()>,
{
    let io_error = |source: io::Error| Error::Io {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(io_error)?;
    }
    let file = File::create(path).map_err(io_error)?;
    let mut buf = BufWriter::new(file);
    write(&mut buf).map_err(io_error)?;
    buf.flush().map_err(io_error)?;
    Ok(path.to_path_buf())
}
