//! # Per-Category Calculation
//!
//! Runs the full thermal + financial pipeline for one building envelope
//! category (floor, roof, walls or windows): heat loss before and after the
//! retrofit, annual energy and cost savings, CO2 reduction, subsidized
//! cost, and payback period.
//!
//! ## Example
//!
//! ```rust
//! use retro_core::calculations::category::{calculate, CategoryInput};
//! use retro_core::calculations::Category;
//! use retro_core::environment::EnvironmentInput;
//!
//! let input = CategoryInput {
//!     category: Category::Floor,
//!     area_m2: 50.0,
//!     current_rc: 2.5,
//!     desired_rc: 4.0,
//!     material_cost_per_m2: 20.0,
//!     installation_cost_per_m2: 10.0,
//!     subsidy_pct: 20.0,
//! };
//!
//! let result = calculate(&input, &EnvironmentInput::default()).unwrap();
//! assert!((result.energy_saved_kwh - 540.0).abs() < 1e-9);
//! assert!((result.payback_years - 1200.0 / 324.0).abs() < 1e-9);
//! ```

use serde::{Deserialize, Serialize};

use crate::calculations::{financial, thermal, Category};
use crate::environment::EnvironmentInput;
use crate::errors::{CalcError, CalcResult};
use crate::units::RcValue;

/// Input parameters for one envelope category.
///
/// ## JSON Example
///
/// ```json
/// {
///   "category": "Floor",
///   "area_m2": 50.0,
///   "current_rc": 2.5,
///   "desired_rc": 4.0,
///   "material_cost_per_m2": 20.0,
///   "installation_cost_per_m2": 10.0,
///   "subsidy_pct": 20.0
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CategoryInput {
    /// Which envelope category this measure applies to
    pub category: Category,

    /// Surface area in m²
    pub area_m2: f64,

    /// Current thermal resistance (RC-value, m²·K/W)
    pub current_rc: f64,

    /// Thermal resistance after the retrofit (m²·K/W)
    ///
    /// A desired resistance at or below the current one is allowed; it
    /// degrades to zero or negative savings and an infinite payback.
    pub desired_rc: f64,

    /// Material cost per m²
    pub material_cost_per_m2: f64,

    /// Installation cost per m²
    pub installation_cost_per_m2: f64,

    /// Subsidy as a percentage of the gross cost, in [0, 100]
    pub subsidy_pct: f64,
}

impl CategoryInput {
    /// Default parameter set for a category (the form's starting values).
    pub fn defaults(category: Category) -> Self {
        CategoryInput {
            category,
            area_m2: 50.0,
            current_rc: 2.5,
            desired_rc: 4.0,
            material_cost_per_m2: 20.0,
            installation_cost_per_m2: 10.0,
            subsidy_pct: 20.0,
        }
    }

    /// Validate input parameters.
    pub fn validate(&self) -> CalcResult<()> {
        if self.area_m2 <= 0.0 {
            return Err(CalcError::invalid_input(
                "area_m2",
                self.area_m2.to_string(),
                "Area must be positive",
            ));
        }
        if self.current_rc <= 0.0 {
            return Err(CalcError::invalid_input(
                "current_rc",
                self.current_rc.to_string(),
                "Thermal resistance must be positive",
            ));
        }
        if self.desired_rc <= 0.0 {
            return Err(CalcError::invalid_input(
                "desired_rc",
                self.desired_rc.to_string(),
                "Thermal resistance must be positive",
            ));
        }
        if self.material_cost_per_m2 < 0.0 {
            return Err(CalcError::invalid_input(
                "material_cost_per_m2",
                self.material_cost_per_m2.to_string(),
                "Cost cannot be negative",
            ));
        }
        if self.installation_cost_per_m2 < 0.0 {
            return Err(CalcError::invalid_input(
                "installation_cost_per_m2",
                self.installation_cost_per_m2.to_string(),
                "Cost cannot be negative",
            ));
        }
        if !(0.0..=100.0).contains(&self.subsidy_pct) {
            return Err(CalcError::invalid_input(
                "subsidy_pct",
                self.subsidy_pct.to_string(),
                "Subsidy must be in [0, 100]",
            ));
        }
        Ok(())
    }
}

/// Results for one envelope category.
///
/// Immutable snapshot, produced once per calculation pass.
///
/// ## JSON Example
///
/// ```json
/// {
///   "category": "Floor",
///   "gross_cost_eur": 1500.0,
///   "net_cost_eur": 1200.0,
///   "energy_saved_kwh": 540.0,
///   "co2_saved_kg": 99.36,
///   "payback_years": 3.7,
///   "savings_eur_per_year": 324.0,
///   "desired_energy_kwh": 900.0
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CategoryResult {
    /// Category this result belongs to
    pub category: Category,

    /// Retrofit cost before subsidy
    pub gross_cost_eur: f64,

    /// Retrofit cost after subsidy
    pub net_cost_eur: f64,

    /// Annual energy saved (kWh); negative if the desired RC is worse
    pub energy_saved_kwh: f64,

    /// Annual CO2 reduction (kg)
    pub co2_saved_kg: f64,

    /// Payback period in years; `f64::INFINITY` when savings are ≤ 0
    pub payback_years: f64,

    /// Annual monetary savings
    pub savings_eur_per_year: f64,

    /// Post-retrofit annual energy consumption (kWh)
    pub desired_energy_kwh: f64,
}

/// Run the full pipeline for one category.
///
/// # Arguments
///
/// * `input` - Category parameters (area, resistances, unit costs, subsidy)
/// * `environment` - Shared parameters (ΔT, exposure hours, tariff, heating)
///
/// # Returns
///
/// * `Ok(CategoryResult)` - Calculation results
/// * `Err(CalcError)` - If inputs are invalid
pub fn calculate(
    input: &CategoryInput,
    environment: &EnvironmentInput,
) -> CalcResult<CategoryResult> {
    input.validate()?;
    environment.validate()?;

    let u_before = thermal::transmittance(RcValue(input.current_rc));
    let u_after = thermal::transmittance(RcValue(input.desired_rc));

    let loss_before = thermal::annual_energy_loss(
        u_before,
        input.area_m2,
        environment.delta_t_c,
        environment.hours_per_year,
    );
    let loss_after = thermal::annual_energy_loss(
        u_after,
        input.area_m2,
        environment.delta_t_c,
        environment.hours_per_year,
    );

    let energy_saved_kwh = financial::energy_savings(loss_before.value(), loss_after.value());
    let savings_eur_per_year =
        financial::monetary_savings(energy_saved_kwh, environment.energy_cost_per_kwh);
    let co2_saved_kg = financial::co2_savings(energy_saved_kwh, environment.emission_factor());

    let cost = financial::retrofit_cost(
        input.area_m2,
        input.material_cost_per_m2,
        input.installation_cost_per_m2,
        input.subsidy_pct,
    );
    let payback_years = financial::payback_period(cost.net_eur, savings_eur_per_year);

    Ok(CategoryResult {
        category: input.category,
        gross_cost_eur: cost.gross_eur,
        net_cost_eur: cost.net_eur,
        energy_saved_kwh,
        co2_saved_kg,
        payback_years,
        savings_eur_per_year,
        desired_energy_kwh: loss_after.value(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_input() -> CategoryInput {
        CategoryInput::defaults(Category::Floor)
    }

    fn test_environment() -> EnvironmentInput {
        EnvironmentInput::default()
    }

    #[test]
    fn test_worked_example() {
        // area 50 m², RC 2.5 -> 4.0, ΔT 15, 4800 h, €0.60/kWh, gas,
        // material €20/m², installation €10/m², 20% subsidy
        let result = calculate(&test_input(), &test_environment()).unwrap();

        assert!((result.desired_energy_kwh - 900.0).abs() < 1e-9);
        assert!((result.energy_saved_kwh - 540.0).abs() < 1e-9);
        assert!((result.savings_eur_per_year - 324.0).abs() < 1e-9);
        assert!((result.gross_cost_eur - 1500.0).abs() < 1e-9);
        assert!((result.net_cost_eur - 1200.0).abs() < 1e-9);
        assert!((result.payback_years - 1200.0 / 324.0).abs() < 1e-9);
        assert!((result.co2_saved_kg - 540.0 * 0.184).abs() < 1e-9);
    }

    #[test]
    fn test_positive_savings_when_desired_exceeds_current() {
        let result = calculate(&test_input(), &test_environment()).unwrap();
        assert!(result.energy_saved_kwh > 0.0);
        assert!(result.savings_eur_per_year > 0.0);
        assert!(result.payback_years.is_finite());
        assert!(result.payback_years > 0.0);
    }

    #[test]
    fn test_equal_resistance_means_infinite_payback() {
        let mut input = test_input();
        input.desired_rc = input.current_rc;

        let result = calculate(&input, &test_environment()).unwrap();
        assert_eq!(result.energy_saved_kwh, 0.0);
        assert_eq!(result.savings_eur_per_year, 0.0);
        assert!(result.payback_years.is_infinite());
    }

    #[test]
    fn test_worse_desired_resistance_degrades_not_fails() {
        let mut input = test_input();
        input.desired_rc = 1.0; // worse than current 2.5

        let result = calculate(&input, &test_environment()).unwrap();
        assert!(result.energy_saved_kwh < 0.0);
        assert!(result.savings_eur_per_year < 0.0);
        assert!(result.payback_years.is_infinite());
    }

    #[test]
    fn test_idempotent() {
        // Identical inputs must produce bit-identical outputs.
        let first = calculate(&test_input(), &test_environment()).unwrap();
        let second = calculate(&test_input(), &test_environment()).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_invalid_inputs_rejected() {
        let mut input = test_input();
        input.area_m2 = 0.0;
        assert!(calculate(&input, &test_environment()).is_err());

        let mut input = test_input();
        input.current_rc = -2.5;
        assert!(calculate(&input, &test_environment()).is_err());

        let mut input = test_input();
        input.subsidy_pct = 120.0;
        assert!(calculate(&input, &test_environment()).is_err());
    }

    #[test]
    fn test_serialization() {
        let input = test_input();
        let json = serde_json::to_string_pretty(&input).unwrap();
        let roundtrip: CategoryInput = serde_json::from_str(&json).unwrap();
        assert_eq!(input, roundtrip);

        let result = calculate(&input, &test_environment()).unwrap();
        let json = serde_json::to_string_pretty(&result).unwrap();
        let roundtrip: CategoryResult = serde_json::from_str(&json).unwrap();
        assert_eq!(result, roundtrip);
    }
}
