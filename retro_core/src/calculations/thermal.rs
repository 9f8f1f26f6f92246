//! # Thermal Calculator
//!
//! Converts thermal-resistance values into heat-loss and annual
//! energy-consumption figures.
//!
//! ## Unit pipeline
//!
//! One consistent pipeline is used throughout:
//!
//! - transmittance U = 1/RC, in W/(m²·K)
//! - U × area (m²) × ΔT (K) = heat flow in W
//! - heat flow × exposure hours per year = energy in Wh/year
//! - Wh / 1000 = kWh (via the [`units`](crate::units) conversion)
//!
//! ## Example
//!
//! ```rust
//! use retro_core::calculations::thermal::{annual_energy_loss, transmittance};
//! use retro_core::units::RcValue;
//!
//! let u = transmittance(RcValue(2.5));
//! assert_eq!(u.0, 0.4);
//!
//! let loss = annual_energy_loss(u, 50.0, 15.0, 4800.0);
//! assert_eq!(loss.0, 1440.0); // kWh/year
//! ```

use crate::units::{KilowattHours, RcValue, UValue, WattHours};

/// Invert a thermal resistance into a transmittance.
///
/// Transmittance approaches infinity as resistance approaches zero, so a
/// non-positive resistance yields the infinite-transmittance sentinel
/// rather than an error. Validated inputs never reach that branch.
pub fn transmittance(rc: RcValue) -> UValue {
    rc.u_value()
}

/// Annual energy lost through a building element, in kWh/year.
///
/// `u × area × delta_t` is the heat flow in watts; multiplying by the
/// exposure hours gives Wh/year, converted to kWh.
pub fn annual_energy_loss(
    u: UValue,
    area_m2: f64,
    delta_t_c: f64,
    hours_per_year: f64,
) -> KilowattHours {
    let watts = u.value() * area_m2 * delta_t_c;
    WattHours(watts * hours_per_year).into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transmittance() {
        assert_eq!(transmittance(RcValue(2.5)).0, 0.4);
        assert_eq!(transmittance(RcValue(4.0)).0, 0.25);
        assert_eq!(transmittance(RcValue(1.0)).0, 1.0);
    }

    #[test]
    fn test_transmittance_non_positive_resistance() {
        assert!(transmittance(RcValue(0.0)).0.is_infinite());
        assert!(transmittance(RcValue(-2.0)).0.is_infinite());
    }

    #[test]
    fn test_annual_energy_loss() {
        // 0.4 W/m²K * 50 m² * 15 K = 300 W; * 4800 h = 1,440,000 Wh = 1440 kWh
        let loss = annual_energy_loss(UValue(0.4), 50.0, 15.0, 4800.0);
        assert!((loss.0 - 1440.0).abs() < 1e-9);

        let loss = annual_energy_loss(UValue(0.25), 50.0, 15.0, 4800.0);
        assert!((loss.0 - 900.0).abs() < 1e-9);
    }

    #[test]
    fn test_annual_energy_loss_zero_area() {
        let loss = annual_energy_loss(UValue(0.4), 0.0, 15.0, 4800.0);
        assert_eq!(loss.0, 0.0);
    }

    #[test]
    fn test_full_year_exposure() {
        // The 8760-hour convention scales linearly with hours.
        let season = annual_energy_loss(UValue(0.5), 20.0, 10.0, 4800.0);
        let full_year = annual_energy_loss(UValue(0.5), 20.0, 10.0, 8760.0);
        assert!((full_year.0 / season.0 - 8760.0 / 4800.0).abs() < 1e-12);
    }
}
