//! Selects the conduction regime from the temperature.
//!
//! Below the critical temperature the superfluid carrier density follows the
//! empirical two-fluid approximation
//!
//! \[n_s = n_0\left(1 - (T/T_c)^4\right)\]
//!
//! and the current obeys the London equation with coefficient
//! \(K = n_s e^2 / m_e\). At or above \(T_c\) the metal is normal and carries
//! the Drude conductivity \(\sigma = n_0 e^2 \tau / m_e\), which in this model
//! has no temperature dependence (the relaxation time is held fixed, ignoring
//! phonon scattering).

use super::types::{PhysicalConstants, Regime};

/// Derives the regime and its coefficient(s) from the temperature.
///
/// Pure function of `temperature`; the caller keeps T within [0.1, 20.0] K so
/// no domain errors can arise here.
pub fn select_regime(temperature: f64, constants: &PhysicalConstants) -> Regime {
    if temperature < constants.critical_temperature {
        let superfluid_density = constants.carrier_density
            * (1.0 - (temperature / constants.critical_temperature).powi(4));

        Regime::Superconducting {
            london_coefficient: superfluid_density * constants.electron_charge.powi(2)
                / constants.electron_mass,
        }
    } else {
        Regime::Normal {
            conductivity: constants.carrier_density
                * constants.electron_charge.powi(2)
                * constants.relaxation_time
                / constants.electron_mass,
            relaxation_time: constants.relaxation_time,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_approx_eq::assert_approx_eq;

    #[test]
    fn below_critical_temperature_is_superconducting() {
        let constants = PhysicalConstants::niobium();

        match select_regime(4.0, &constants) {
            Regime::Superconducting { london_coefficient } => {
                let expected = constants.carrier_density
                    * (1.0 - (4.0_f64 / constants.critical_temperature).powi(4))
                    * constants.electron_charge.powi(2)
                    / constants.electron_mass;
                assert_eq!(london_coefficient, expected);
            }
            Regime::Normal { .. } => panic!("expected superconducting regime at 4 K"),
        }
    }

    #[test]
    fn at_and_above_critical_temperature_is_normal() {
        let constants = PhysicalConstants::niobium();

        let sigma_at_tc = match select_regime(constants.critical_temperature, &constants) {
            Regime::Normal { conductivity, .. } => conductivity,
            Regime::Superconducting { .. } => panic!("expected normal regime at T_c"),
        };
        let sigma_hot = match select_regime(20.0, &constants) {
            Regime::Normal { conductivity, .. } => conductivity,
            Regime::Superconducting { .. } => panic!("expected normal regime at 20 K"),
        };

        // Drude conductivity carries no temperature dependence in this model.
        assert_eq!(sigma_at_tc, sigma_hot);
        assert_approx_eq!(sigma_at_tc, 5.626e7, 1e4);
    }

    #[test]
    fn superfluid_fraction_vanishes_as_t_approaches_tc() {
        let constants = PhysicalConstants::niobium();

        match select_regime(9.199, &constants) {
            Regime::Superconducting { london_coefficient } => {
                let full = constants.carrier_density * constants.electron_charge.powi(2)
                    / constants.electron_mass;
                assert!(london_coefficient < 1e-3 * full);
            }
            Regime::Normal { .. } => panic!("9.199 K is still below T_c"),
        }
    }
}
