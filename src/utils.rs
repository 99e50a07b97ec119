//! Utility functions for file I/O operations in the current-density model.
//!
//! This module provides functions for writing the evaluated time series and
//! the run parameters to files, allowing for post-processing and analysis.

use ndarray::Array1;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::constants::PI;
use crate::types::{FieldWaveform, PhysicalConstants, Regime, SimulationParameters};

/// Writes the evaluated time series to a CSV file.
///
/// Each line holds one `t,j` pair in SI units. Both arrays must have the same
/// length; the time grid guarantees this by construction.
///
/// # Arguments
///
/// * `time` - The time grid in seconds.
/// * `current` - The current-density samples in A/m².
/// * `filename` - The name of the file to write the data to.
///
/// # Returns
///
/// A `Result` indicating success or an I/O error.
pub fn write_series(time: &Array1<f64>, current: &Array1<f64>, filename: &str) -> std::io::Result<()> {
    let file = File::create(filename)?;
    let mut writer = BufWriter::new(file);

    writeln!(writer, "t_s,j_A_per_m2")?;
    for (t, j) in time.iter().zip(current.iter()) {
        writeln!(writer, "{},{}", t, j)?;
    }

    Ok(())
}

/// Writes the run parameters to a file.
///
/// This saves everything needed to reproduce a run: the material constants,
/// the user inputs, and the derived regime coefficient.
///
/// # Arguments
///
/// * `params` - The evaluation inputs.
/// * `constants` - The material constants.
/// * `regime` - The regime derived from the temperature.
/// * `filename` - The name of the file to write the parameters to.
///
/// # Returns
///
/// A `Result` indicating success or an I/O error.
pub fn write_params(
    params: &SimulationParameters,
    constants: &PhysicalConstants,
    regime: &Regime,
    filename: &Path,
) -> std::io::Result<()> {
    let file = File::create(filename)?;
    let mut writer = BufWriter::new(file);

    writeln!(writer, "electron charge: {:.4e}", constants.electron_charge)?;
    writeln!(writer, "electron mass: {:.4e}", constants.electron_mass)?;
    writeln!(writer, "carrier density: {:.4e}", constants.carrier_density)?;
    writeln!(
        writer,
        "critical temperature: {:.4e}",
        constants.critical_temperature
    )?;
    writeln!(writer, "relaxation time: {:.4e}", constants.relaxation_time)?;

    writeln!(writer, "temperature: {:.4e}", params.temperature)?;
    writeln!(
        writer,
        "initial current density: {:.4e}",
        params.initial_current_density
    )?;

    match params.field {
        FieldWaveform::Constant { e0 } => {
            writeln!(writer, "field: constant")?;
            writeln!(writer, "field E0: {:.4e}", e0)?;
        }
        FieldWaveform::Linear { ramp_rate } => {
            writeln!(writer, "field: linear")?;
            writeln!(writer, "field ramp rate: {:.4e}", ramp_rate)?;
        }
        FieldWaveform::Sinusoidal { e0, omega } => {
            writeln!(writer, "field: sinusoidal")?;
            writeln!(writer, "field E0: {:.4e}", e0)?;
            writeln!(writer, "field frequency: {:.4e}", omega / (2.0 * PI))?;
        }
    }

    match regime {
        Regime::Superconducting { london_coefficient } => {
            writeln!(writer, "regime: superconducting")?;
            writeln!(writer, "london coefficient K: {:.4e}", london_coefficient)?;
        }
        Regime::Normal {
            conductivity,
            relaxation_time,
        } => {
            writeln!(writer, "regime: normal")?;
            writeln!(writer, "drude conductivity sigma: {:.4e}", conductivity)?;
            writeln!(writer, "relaxation time tau: {:.4e}", relaxation_time)?;
        }
    }

    writeln!(writer, "window t_end: {:.4e}", params.t_end)?;
    writeln!(writer, "samples: {}", params.samples)?;

    writeln!(writer, "EOF")?;

    Ok(())
}
