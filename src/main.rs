//! Main entry point for the current-density model.
//!
//! This binary models the time dependence of the current density j(t) in a
//! metal driven by an applied electric field. Below the critical temperature
//! the London equation applies:
//!
//! \[
//! \frac{dj}{dt} = K E(t), \qquad K = \frac{n_s e^2}{m_e}
//! \]
//!
//! and at or above it the Drude model:
//!
//! \[
//! \frac{dj}{dt} = -\frac{j}{\tau} + \frac{\sigma}{\tau} E(t), \qquad
//! \sigma = \frac{n_0 e^2 \tau}{m_e}
//! \]
//!
//! The run evaluates the matching closed-form solution over 1000 samples on
//! [0, 1 ns], prints summary metrics, and exports the chart, the series, and
//! the run parameters.

use std::env;
use std::path::PathBuf;

use jdyn::constants::PI;
use jdyn::current::{evaluate_current, formula_label, summarize};
use jdyn::plot::{render_chart, CHART_PATH};
use jdyn::regime::select_regime;
use jdyn::types::{FieldWaveform, PhysicalConstants, Regime, SimulationParameters};
use jdyn::utils::{write_params, write_series};

fn usage(program: &str) -> ! {
    eprintln!(
        "Usage: {} <temperature_K> <j0_A_per_m2> <field> [field params...]\n\
         \n\
         Fields:\n\
         \x20 constant <E0_V_per_m>\n\
         \x20 linear   <a_V_per_m_s>\n\
         \x20 sin      <E0_V_per_m> <f_Hz>",
        program
    );
    std::process::exit(1);
}

fn parse_float(arg: &str, name: &str) -> f64 {
    arg.parse::<f64>().unwrap_or_else(|_| {
        eprintln!("Invalid number for {}: {}", name, arg);
        std::process::exit(1);
    })
}

fn main() {
    let args: Vec<String> = env::args().collect();
    if args.len() < 5 {
        usage(&args[0]);
    }

    // Input surface: clamp every numeric input to the model's stated ranges
    // so the core never sees a domain error.
    let temperature = parse_float(&args[1], "temperature").clamp(0.1, 20.0);
    let j0 = parse_float(&args[2], "initial current density").clamp(0.0, 1e11);

    let field = match args[3].as_str() {
        "constant" => FieldWaveform::Constant {
            e0: parse_float(&args[4], "E0").clamp(0.0, 1e4),
        },
        "linear" => FieldWaveform::Linear {
            ramp_rate: parse_float(&args[4], "ramp rate").clamp(1e8, 1e12),
        },
        "sin" => {
            if args.len() < 6 {
                usage(&args[0]);
            }
            FieldWaveform::Sinusoidal {
                e0: parse_float(&args[4], "E0").clamp(0.0, 1e4),
                omega: 2.0 * PI * parse_float(&args[5], "frequency").clamp(1e6, 1e9),
            }
        }
        other => {
            eprintln!("Unknown field type: {}", other);
            usage(&args[0]);
        }
    };

    let constants = PhysicalConstants::niobium();
    let params = SimulationParameters::new(temperature, j0, field);
    let regime = select_regime(params.temperature, &constants);

    match regime {
        Regime::Superconducting { london_coefficient } => {
            println!(
                "Superconducting state: T = {} K < T_c = {} K",
                params.temperature, constants.critical_temperature
            );
            println!("London coefficient K = {:.2e}", london_coefficient);
        }
        Regime::Normal { conductivity, .. } => {
            println!(
                "Normal metal: T = {} K >= T_c = {} K",
                params.temperature, constants.critical_temperature
            );
            println!("Drude conductivity sigma = {:.2e} S/m", conductivity);
        }
    }

    let time = params.time_grid();
    let current = evaluate_current(regime, params.field, params.initial_current_density, &time);
    let summary = summarize(&current, params.t_end);

    println!("Field: {}", params.field.label());
    println!("Solution: {}", formula_label(regime, params.field));
    println!("Maximum current density: {:.2e} A/m^2", summary.max);
    println!("Minimum current density: {:.2e} A/m^2", summary.min);
    println!("Simulated window: {} ns", summary.duration * 1e9);

    let output_dir = std::path::Path::new("./output");
    if !output_dir.exists() {
        std::fs::create_dir_all(output_dir).expect("Failed to create output directory");
    }

    if let Err(e) = write_series(&time, &current, "./output/series.csv") {
        eprintln!("Error writing series to file: {}", e);
    }

    let params_path: PathBuf = ["./output", "params.txt"].iter().collect();
    if let Err(e) = write_params(&params, &constants, &regime, &params_path) {
        eprintln!("Error writing parameters to file: {}", e);
    }

    match render_chart(
        &time,
        &current,
        params.temperature,
        formula_label(regime, params.field),
        CHART_PATH,
    ) {
        Ok(()) => println!("Chart saved as '{}'", CHART_PATH),
        Err(e) => eprintln!("Error rendering chart: {}", e),
    }
}
