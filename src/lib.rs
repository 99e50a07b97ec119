//! Closed-form modelling of current-density dynamics in superconducting
//! (London) and normal-metal (Drude) regimes.
//!
//! Below the critical temperature the current obeys the London equation and
//! grows without resistance; at or above it the Drude model relaxes the
//! current toward a driven steady state on the scale of the relaxation time.
//! Every (regime, waveform) combination has an analytic solution, so the
//! evaluation is a single elementwise pass over a fixed time grid.

pub mod constants;
pub mod current;
pub mod plot;
pub mod regime;
pub mod types;
pub mod utils;

pub use current::{evaluate_current, formula_label, summarize};
pub use regime::select_regime;
pub use types::{FieldWaveform, PhysicalConstants, Regime, SimulationParameters, Summary};
