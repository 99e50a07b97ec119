//! Defines the types and structures used in the current-density model.

use super::constants::*;
use ndarray::Array1;

/// The applied electric-field waveform E(t).
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldWaveform {
    /// Constant field, E(t) = E₀.
    Constant { e0: f64 },
    /// Linearly ramped field, E(t) = a·t.
    Linear { ramp_rate: f64 },
    /// Sinusoidal field, E(t) = E₀ sin(ωt), with ω = 2πf.
    Sinusoidal { e0: f64, omega: f64 },
}

impl FieldWaveform {
    /// The field formula as displayed next to the chart.
    pub fn label(&self) -> &'static str {
        match self {
            FieldWaveform::Constant { .. } => "E(t) = E0",
            FieldWaveform::Linear { .. } => "E(t) = a t",
            FieldWaveform::Sinusoidal { .. } => "E(t) = E0 sin(wt)",
        }
    }
}

/// The conduction regime derived from the temperature, carrying the
/// coefficient(s) its current formulas need.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Regime {
    /// Below T_c: lossless London response with coefficient K = nₛe²/mₑ.
    Superconducting { london_coefficient: f64 },
    /// At or above T_c: Drude response with conductivity σ = n₀e²τ/mₑ.
    Normal { conductivity: f64, relaxation_time: f64 },
}

/// Material constants for the model. Passed explicitly into the regime
/// selection and current evaluation so both stay pure.
#[derive(Debug, Clone, Copy)]
pub struct PhysicalConstants {
    pub electron_charge: f64,
    pub electron_mass: f64,
    pub carrier_density: f64,
    pub critical_temperature: f64,
    pub relaxation_time: f64,
}

impl PhysicalConstants {
    /// Constants for niobium, the model's default material.
    pub fn niobium() -> Self {
        PhysicalConstants {
            electron_charge: ELECTRON_CHARGE,
            electron_mass: ELECTRON_MASS,
            carrier_density: CARRIER_DENSITY,
            critical_temperature: CRITICAL_TEMPERATURE,
            relaxation_time: RELAXATION_TIME,
        }
    }
}

impl Default for PhysicalConstants {
    fn default() -> Self {
        PhysicalConstants::niobium()
    }
}

/// One full evaluation's inputs. Immutable once built; the whole series is
/// recomputed from scratch on any change.
#[derive(Debug, Clone, Copy)]
pub struct SimulationParameters {
    /// Temperature in K.
    pub temperature: f64,
    /// Initial current density j₀ in A/m².
    pub initial_current_density: f64,
    pub field: FieldWaveform,
    /// Simulated window in s.
    pub t_end: f64,
    /// Number of samples on the uniform grid.
    pub samples: usize,
}

impl SimulationParameters {
    /// Default window: 1000 samples over [0, 1 ns].
    pub const T_END: f64 = 1e-9;
    pub const SAMPLES: usize = 1000;

    pub fn new(temperature: f64, initial_current_density: f64, field: FieldWaveform) -> Self {
        SimulationParameters {
            temperature,
            initial_current_density,
            field,
            t_end: Self::T_END,
            samples: Self::SAMPLES,
        }
    }

    /// The uniform time grid [0, t_end] the current is evaluated on.
    pub fn time_grid(&self) -> Array1<f64> {
        Array1::linspace(0.0, self.t_end, self.samples)
    }
}

/// Summary metrics reported alongside the chart.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Summary {
    /// Largest current density in the window, A/m².
    pub max: f64,
    /// Smallest current density in the window, A/m².
    pub min: f64,
    /// Length of the simulated window, s.
    pub duration: f64,
}
