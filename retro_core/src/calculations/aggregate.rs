//! # Portfolio Aggregation
//!
//! Combines the per-category results into totals for the whole dwelling:
//! sums for cost, energy, CO2 and monetary savings, the worst-case payback
//! period, the area-weighted energy intensity, and the derived energy label.
//!
//! The total payback is deliberately the **maximum** of the per-category
//! payback periods, not an average: the report states the worst bottleneck.

use serde::{Deserialize, Serialize};

use crate::calculations::category::{CategoryInput, CategoryResult};
use crate::errors::{CalcError, CalcResult};
use crate::label::{classify, EnergyLabel};

/// Aggregated results across all envelope categories.
///
/// ## JSON Example
///
/// ```json
/// {
///   "total_cost_eur": 6000.0,
///   "total_energy_saved_kwh": 2160.0,
///   "total_co2_saved_kg": 397.44,
///   "total_payback_years": 3.7,
///   "total_savings_eur_per_year": 1296.0,
///   "intensity_kwh_per_m2_year": 18.0,
///   "label": "APlus4"
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PortfolioTotals {
    /// Sum of net (subsidized) retrofit costs
    pub total_cost_eur: f64,

    /// Sum of annual energy savings (kWh)
    pub total_energy_saved_kwh: f64,

    /// Sum of annual CO2 reductions (kg)
    pub total_co2_saved_kg: f64,

    /// Maximum of the per-category payback periods (years, may be infinite)
    pub total_payback_years: f64,

    /// Sum of annual monetary savings
    pub total_savings_eur_per_year: f64,

    /// Area-weighted post-retrofit energy intensity (kWh/m²/year)
    pub intensity_kwh_per_m2_year: f64,

    /// Energy label derived from the intensity
    pub label: EnergyLabel,
}

/// Aggregate the per-category results into portfolio totals.
///
/// `results` and `inputs` must be the same length and in the same order;
/// the inputs supply the areas for the intensity weighting.
///
/// # Returns
///
/// * `Ok(PortfolioTotals)` - Aggregated totals and label
/// * `Err(CalcError)` - If the slices are empty or inconsistent
pub fn aggregate(
    results: &[CategoryResult],
    inputs: &[CategoryInput],
) -> CalcResult<PortfolioTotals> {
    if results.is_empty() {
        return Err(CalcError::calculation_failed(
            "aggregate",
            "No category results to aggregate",
        ));
    }
    if results.len() != inputs.len() {
        return Err(CalcError::calculation_failed(
            "aggregate",
            format!(
                "{} results but {} inputs",
                results.len(),
                inputs.len()
            ),
        ));
    }

    let total_cost_eur = results.iter().map(|r| r.net_cost_eur).sum();
    let total_energy_saved_kwh = results.iter().map(|r| r.energy_saved_kwh).sum();
    let total_co2_saved_kg = results.iter().map(|r| r.co2_saved_kg).sum();
    let total_savings_eur_per_year = results.iter().map(|r| r.savings_eur_per_year).sum();

    // max over a set that may contain INFINITY is well-defined
    let total_payback_years = results
        .iter()
        .map(|r| r.payback_years)
        .fold(f64::NEG_INFINITY, f64::max);

    let total_area_m2: f64 = inputs.iter().map(|i| i.area_m2).sum();
    if total_area_m2 <= 0.0 {
        return Err(CalcError::invalid_input(
            "area_m2",
            total_area_m2.to_string(),
            "Total area must be positive",
        ));
    }

    let desired_energy_kwh: f64 = results.iter().map(|r| r.desired_energy_kwh).sum();
    let intensity_kwh_per_m2_year = desired_energy_kwh / total_area_m2;

    Ok(PortfolioTotals {
        total_cost_eur,
        total_energy_saved_kwh,
        total_co2_saved_kg,
        total_payback_years,
        total_savings_eur_per_year,
        intensity_kwh_per_m2_year,
        label: classify(intensity_kwh_per_m2_year),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculations::category::calculate;
    use crate::calculations::Category;
    use crate::environment::EnvironmentInput;

    fn default_portfolio() -> (Vec<CategoryInput>, Vec<CategoryResult>) {
        let env = EnvironmentInput::default();
        let inputs: Vec<CategoryInput> = Category::ALL
            .iter()
            .map(|&c| CategoryInput::defaults(c))
            .collect();
        let results: Vec<CategoryResult> = inputs
            .iter()
            .map(|i| calculate(i, &env).unwrap())
            .collect();
        (inputs, results)
    }

    #[test]
    fn test_totals_are_exact_sums() {
        let (inputs, results) = default_portfolio();
        let totals = aggregate(&results, &inputs).unwrap();

        let expected_cost: f64 = results.iter().map(|r| r.net_cost_eur).sum();
        let expected_energy: f64 = results.iter().map(|r| r.energy_saved_kwh).sum();
        let expected_co2: f64 = results.iter().map(|r| r.co2_saved_kg).sum();
        let expected_savings: f64 = results.iter().map(|r| r.savings_eur_per_year).sum();

        assert!((totals.total_cost_eur - expected_cost).abs() / expected_cost < 1e-9);
        assert!((totals.total_energy_saved_kwh - expected_energy).abs() / expected_energy < 1e-9);
        assert!((totals.total_co2_saved_kg - expected_co2).abs() / expected_co2 < 1e-9);
        assert!(
            (totals.total_savings_eur_per_year - expected_savings).abs() / expected_savings < 1e-9
        );
    }

    #[test]
    fn test_total_payback_is_maximum() {
        let env = EnvironmentInput::default();
        let mut inputs: Vec<CategoryInput> = Category::ALL
            .iter()
            .map(|&c| CategoryInput::defaults(c))
            .collect();
        // Make the roof much more expensive so its payback dominates.
        inputs[1].material_cost_per_m2 = 200.0;

        let results: Vec<CategoryResult> =
            inputs.iter().map(|i| calculate(i, &env).unwrap()).collect();
        let totals = aggregate(&results, &inputs).unwrap();

        let max_payback = results
            .iter()
            .map(|r| r.payback_years)
            .fold(f64::NEG_INFINITY, f64::max);
        assert_eq!(totals.total_payback_years, max_payback);
        assert_eq!(totals.total_payback_years, results[1].payback_years);
    }

    #[test]
    fn test_one_infinite_payback_dominates() {
        let env = EnvironmentInput::default();
        let mut inputs: Vec<CategoryInput> = Category::ALL
            .iter()
            .map(|&c| CategoryInput::defaults(c))
            .collect();
        inputs[3].desired_rc = inputs[3].current_rc; // windows never pay back

        let results: Vec<CategoryResult> =
            inputs.iter().map(|i| calculate(i, &env).unwrap()).collect();
        let totals = aggregate(&results, &inputs).unwrap();

        assert!(totals.total_payback_years.is_infinite());
    }

    #[test]
    fn test_area_weighted_intensity_and_label() {
        let (inputs, results) = default_portfolio();
        let totals = aggregate(&results, &inputs).unwrap();

        // Four identical categories: 900 kWh over 50 m² each.
        assert!((totals.intensity_kwh_per_m2_year - 18.0).abs() < 1e-9);
        assert_eq!(totals.label, EnergyLabel::APlus4);
    }

    #[test]
    fn test_empty_and_mismatched_slices() {
        let (inputs, results) = default_portfolio();

        assert!(aggregate(&[], &[]).is_err());
        assert!(aggregate(&results, &inputs[..2]).is_err());
    }

    #[test]
    fn test_serialization() {
        let (inputs, results) = default_portfolio();
        let totals = aggregate(&results, &inputs).unwrap();

        let json = serde_json::to_string(&totals).unwrap();
        let roundtrip: PortfolioTotals = serde_json::from_str(&json).unwrap();
        assert_eq!(totals, roundtrip);
    }
}
