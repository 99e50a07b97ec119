//! Physical constants used in the current-density model.
//!
//! Default values correspond to niobium (Nb).

/// Elementary charge in C
pub const ELECTRON_CHARGE: f64 = 1.6e-19;

/// Electron mass in kg
pub const ELECTRON_MASS: f64 = 9.1e-31;

/// Conduction carrier density in m⁻³
pub const CARRIER_DENSITY: f64 = 1.0e29;

/// Critical temperature in K
pub const CRITICAL_TEMPERATURE: f64 = 9.2;

/// Drude relaxation time in s
pub const RELAXATION_TIME: f64 = 2e-14;

pub use std::f64::consts::PI;
