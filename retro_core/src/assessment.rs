//! # Assessment Data Structures
//!
//! The `Assessment` struct is the root container for one calculation pass:
//! the shared environment plus one input per envelope category. It is the
//! single value a front end owns and re-runs on every edit.
//!
//! ## Structure
//!
//! ```text
//! Assessment
//! ├── environment: EnvironmentInput (ΔT, hours, tariff, heating type)
//! └── categories: Vec<CategoryInput> (floor, roof, walls, windows)
//! ```
//!
//! ## Example
//!
//! ```rust
//! use retro_core::assessment::Assessment;
//!
//! let assessment = Assessment::default();
//! let outcome = assessment.compute().unwrap();
//!
//! assert_eq!(outcome.category_results.len(), 4);
//! assert!(outcome.totals.total_energy_saved_kwh > 0.0);
//! ```

use serde::{Deserialize, Serialize};

use crate::advisory::{recommend, Recommendation};
use crate::calculations::aggregate::{aggregate, PortfolioTotals};
use crate::calculations::category::{calculate, CategoryInput, CategoryResult};
use crate::calculations::Category;
use crate::environment::EnvironmentInput;
use crate::errors::CalcResult;

/// Root container for one calculation pass.
///
/// Entirely transient: recomputed in full on every input change, never
/// mutated incrementally, never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Assessment {
    /// Parameters shared across all categories
    pub environment: EnvironmentInput,

    /// One input per envelope category, in [`Category::ALL`] order
    pub categories: Vec<CategoryInput>,
}

impl Assessment {
    /// Run the full pipeline: every category, then the portfolio totals
    /// and the recommendation.
    pub fn compute(&self) -> CalcResult<AssessmentOutcome> {
        let category_results: Vec<CategoryResult> = self
            .categories
            .iter()
            .map(|input| calculate(input, &self.environment))
            .collect::<CalcResult<_>>()?;

        let totals = aggregate(&category_results, &self.categories)?;
        let recommendation = recommend(&category_results);

        Ok(AssessmentOutcome {
            category_results,
            totals,
            recommendation,
        })
    }
}

impl Default for Assessment {
    fn default() -> Self {
        Assessment {
            environment: EnvironmentInput::default(),
            categories: Category::ALL
                .iter()
                .map(|&c| CategoryInput::defaults(c))
                .collect(),
        }
    }
}

/// Everything one calculation pass produces.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssessmentOutcome {
    /// Per-category results, in the same order as the inputs
    pub category_results: Vec<CategoryResult>,

    /// Aggregated totals and energy label
    pub totals: PortfolioTotals,

    /// Best-category recommendation, when any measure pays back
    pub recommendation: Option<Recommendation>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_assessment_computes() {
        let outcome = Assessment::default().compute().unwrap();

        assert_eq!(outcome.category_results.len(), 4);
        assert!(outcome.recommendation.is_some());

        // Four identical default categories: each saves 540 kWh.
        assert!((outcome.totals.total_energy_saved_kwh - 4.0 * 540.0).abs() < 1e-9);
        assert!((outcome.totals.total_cost_eur - 4.0 * 1200.0).abs() < 1e-9);
    }

    #[test]
    fn test_compute_is_idempotent() {
        let assessment = Assessment::default();
        let first = assessment.compute().unwrap();
        let second = assessment.compute().unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_invalid_category_surfaces_error() {
        let mut assessment = Assessment::default();
        assessment.categories[2].area_m2 = -10.0;
        assert!(assessment.compute().is_err());
    }

    #[test]
    fn test_serialization() {
        let assessment = Assessment::default();
        let json = serde_json::to_string_pretty(&assessment).unwrap();

        assert!(json.contains("\"heating_type\""));
        assert!(json.contains("\"Floor\""));

        let roundtrip: Assessment = serde_json::from_str(&json).unwrap();
        assert_eq!(assessment, roundtrip);
    }
}
