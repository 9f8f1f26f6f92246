//! # Environment Input
//!
//! Parameters shared across all building categories: the indoor/outdoor
//! temperature difference, the annual exposure hours, the energy tariff
//! and the heating source (which fixes the CO2 emission factor).

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};

/// Default annual exposure hours.
///
/// The calculator assumes a heating season of 4800 hours per year rather
/// than the full 8760-hour year; heat loss through the envelope only costs
/// money while the heating actually runs.
pub const DEFAULT_HOURS_PER_YEAR: f64 = 4800.0;

/// Heating source, used to look up the CO2 emission factor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HeatingType {
    /// Natural gas boiler
    Gas,
    /// Grid-average electricity
    Electricity,
    /// District heating network
    DistrictHeating,
    /// Solar energy
    Solar,
    /// Unknown or mixed source
    Other,
}

impl HeatingType {
    /// All heating types, in display order
    pub const ALL: [HeatingType; 5] = [
        HeatingType::Gas,
        HeatingType::Electricity,
        HeatingType::DistrictHeating,
        HeatingType::Solar,
        HeatingType::Other,
    ];

    /// Human-readable name
    pub fn display_name(&self) -> &'static str {
        match self {
            HeatingType::Gas => "Gas",
            HeatingType::Electricity => "Electricity",
            HeatingType::DistrictHeating => "District heating",
            HeatingType::Solar => "Solar",
            HeatingType::Other => "Other",
        }
    }

    /// CO2 emission factor in kg CO2 per kWh of delivered heat
    pub fn emission_factor(&self) -> f64 {
        match self {
            HeatingType::Gas => 0.184,
            HeatingType::Electricity => 0.4,
            HeatingType::DistrictHeating => 0.18,
            HeatingType::Solar => 0.02,
            HeatingType::Other => 0.10,
        }
    }
}

impl std::fmt::Display for HeatingType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

impl Default for HeatingType {
    fn default() -> Self {
        HeatingType::Gas
    }
}

/// Shared environment parameters for a calculation pass.
///
/// ## JSON Example
///
/// ```json
/// {
///   "delta_t_c": 15.0,
///   "hours_per_year": 4800.0,
///   "energy_cost_per_kwh": 0.6,
///   "heating_type": "Gas"
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EnvironmentInput {
    /// Temperature difference ΔT between inside and outside (°C)
    pub delta_t_c: f64,

    /// Annual exposure hours (see [`DEFAULT_HOURS_PER_YEAR`])
    pub hours_per_year: f64,

    /// Energy price in currency per kWh
    pub energy_cost_per_kwh: f64,

    /// Heating source, mapped to an emission factor
    pub heating_type: HeatingType,
}

impl EnvironmentInput {
    /// Validate the environment parameters.
    pub fn validate(&self) -> CalcResult<()> {
        if self.delta_t_c <= 0.0 {
            return Err(CalcError::invalid_input(
                "delta_t_c",
                self.delta_t_c.to_string(),
                "Temperature difference must be positive",
            ));
        }
        if self.hours_per_year <= 0.0 {
            return Err(CalcError::invalid_input(
                "hours_per_year",
                self.hours_per_year.to_string(),
                "Exposure hours must be positive",
            ));
        }
        if self.energy_cost_per_kwh < 0.0 {
            return Err(CalcError::invalid_input(
                "energy_cost_per_kwh",
                self.energy_cost_per_kwh.to_string(),
                "Energy price cannot be negative",
            ));
        }
        Ok(())
    }

    /// CO2 emission factor of the selected heating source (kg CO2/kWh)
    pub fn emission_factor(&self) -> f64 {
        self.heating_type.emission_factor()
    }
}

impl Default for EnvironmentInput {
    fn default() -> Self {
        EnvironmentInput {
            delta_t_c: 15.0,
            hours_per_year: DEFAULT_HOURS_PER_YEAR,
            energy_cost_per_kwh: 0.6,
            heating_type: HeatingType::Gas,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_emission_factors() {
        assert_eq!(HeatingType::Gas.emission_factor(), 0.184);
        assert_eq!(HeatingType::Electricity.emission_factor(), 0.4);
        assert_eq!(HeatingType::DistrictHeating.emission_factor(), 0.18);
        assert_eq!(HeatingType::Solar.emission_factor(), 0.02);
        assert_eq!(HeatingType::Other.emission_factor(), 0.10);
    }

    #[test]
    fn test_display_names() {
        assert_eq!(HeatingType::Gas.display_name(), "Gas");
        assert_eq!(HeatingType::DistrictHeating.display_name(), "District heating");
        assert_eq!(HeatingType::ALL.len(), 5);
    }

    #[test]
    fn test_default_environment() {
        let env = EnvironmentInput::default();
        assert_eq!(env.delta_t_c, 15.0);
        assert_eq!(env.hours_per_year, DEFAULT_HOURS_PER_YEAR);
        assert_eq!(env.heating_type, HeatingType::Gas);
        assert!(env.validate().is_ok());
    }

    #[test]
    fn test_invalid_environment() {
        let mut env = EnvironmentInput::default();
        env.delta_t_c = 0.0;
        assert!(env.validate().is_err());

        let mut env = EnvironmentInput::default();
        env.energy_cost_per_kwh = -0.1;
        assert!(env.validate().is_err());
    }

    #[test]
    fn test_serialization() {
        let env = EnvironmentInput::default();
        let json = serde_json::to_string(&env).unwrap();
        assert!(json.contains("\"heating_type\":\"Gas\""));

        let roundtrip: EnvironmentInput = serde_json::from_str(&json).unwrap();
        assert_eq!(env, roundtrip);
    }
}
