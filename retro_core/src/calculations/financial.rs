//! # Financial Calculator
//!
//! Converts energy savings into monetary savings, applies the subsidy to
//! the retrofit cost, and computes the payback period and CO2 reduction.
//!
//! A retrofit that saves nothing (or costs energy) has a payback period of
//! positive infinity. The sentinel is an ordinary `f64::INFINITY` so it
//! orders and compares without special-casing call sites.

use serde::{Deserialize, Serialize};

/// Gross and subsidized cost of a retrofit measure.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RetrofitCost {
    /// Cost before subsidy: (material + installation) × area
    pub gross_eur: f64,

    /// Cost after the subsidy percentage is deducted
    pub net_eur: f64,
}

/// Annual energy saved by a retrofit, in kWh.
///
/// Plain difference; negative when the desired resistance is worse than the
/// current one. No clamping — downstream payback becomes infinite instead.
pub fn energy_savings(loss_before_kwh: f64, loss_after_kwh: f64) -> f64 {
    loss_before_kwh - loss_after_kwh
}

/// Annual monetary savings for a given energy saving and tariff.
pub fn monetary_savings(energy_saved_kwh: f64, energy_cost_per_kwh: f64) -> f64 {
    energy_saved_kwh * energy_cost_per_kwh
}

/// Total retrofit cost for an area, before and after subsidy.
pub fn retrofit_cost(
    area_m2: f64,
    material_cost_per_m2: f64,
    installation_cost_per_m2: f64,
    subsidy_pct: f64,
) -> RetrofitCost {
    let gross_eur = (material_cost_per_m2 + installation_cost_per_m2) * area_m2;
    let net_eur = gross_eur * (1.0 - subsidy_pct / 100.0);
    RetrofitCost { gross_eur, net_eur }
}

/// Annual CO2 reduction in kg for a given energy saving and emission factor.
pub fn co2_savings(energy_saved_kwh: f64, emission_factor_kg_per_kwh: f64) -> f64 {
    energy_saved_kwh * emission_factor_kg_per_kwh
}

/// Payback period in years: net cost divided by annual monetary savings.
///
/// Returns `f64::INFINITY` when the annual savings are zero or negative;
/// never divides by zero.
pub fn payback_period(net_cost_eur: f64, annual_savings_eur: f64) -> f64 {
    if annual_savings_eur > 0.0 {
        net_cost_eur / annual_savings_eur
    } else {
        f64::INFINITY
    }
}
