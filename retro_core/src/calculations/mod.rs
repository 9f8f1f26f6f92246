//! # Insulation Calculations
//!
//! This module contains the calculation pipeline for a retrofit estimate.
//! Each calculation follows the pattern:
//!
//! - `*Input` - Input parameters (JSON-serializable)
//! - `*Result` - Calculation results (JSON-serializable)
//! - `calculate(input) -> Result<*Result, CalcError>` - Pure calculation function
//!
//! The pipeline runs leaf-first: [`thermal`] turns resistance values into
//! annual energy figures, [`financial`] turns energy figures into money and
//! payback, [`category`] combines both for one envelope category, and
//! [`aggregate`] folds the four category results into portfolio totals with
//! an energy label.
//!
//! ## Available Calculations
//!
//! - [`thermal`] - Transmittance and annual heat-loss energy
//! - [`financial`] - Savings, retrofit cost, CO2 and payback period
//! - [`category`] - Full per-category calculation
//! - [`aggregate`] - Portfolio totals across all categories

pub mod aggregate;
pub mod category;
pub mod financial;
pub mod thermal;

use serde::{Deserialize, Serialize};

// Re-export commonly used types
pub use aggregate::PortfolioTotals;
pub use category::{CategoryInput, CategoryResult};
pub use financial::RetrofitCost;

/// Building envelope category.
///
/// The calculator always works on these four fixed categories; there is no
/// dynamic category collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Floor,
    Roof,
    Walls,
    Windows,
}

impl Category {
    /// All categories, in display order
    pub const ALL: [Category; 4] = [
        Category::Floor,
        Category::Roof,
        Category::Walls,
        Category::Windows,
    ];

    /// Human-readable name
    pub fn display_name(&self) -> &'static str {
        match self {
            Category::Floor => "Floor",
            Category::Roof => "Roof",
            Category::Walls => "Walls",
            Category::Windows => "Windows",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}
