//! # retro_core - Insulation Retrofit Calculation Engine
//!
//! `retro_core` is the computational heart of Retrofit, estimating the cost,
//! energy savings, CO2 reduction and payback period of insulating the four
//! building envelope categories (floor, roof, walls, windows), aggregating
//! the results into portfolio totals and an energy label.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: Pure functions that take input and return results
//! - **JSON-First**: All types implement Serialize/Deserialize
//! - **Degeneracies are values**: a retrofit that never pays back yields an
//!   infinite payback sentinel, not an error
//! - **Rich Errors**: Structured error types for invalid inputs, not strings
//!
//! ## Quick Start
//!
//! ```rust
//! use retro_core::assessment::Assessment;
//!
//! // Default assessment: four categories at their form defaults
//! let assessment = Assessment::default();
//! let outcome = assessment.compute().unwrap();
//!
//! println!("Energy label: {}", outcome.totals.label);
//! println!("Total savings: {:.2} kWh/year", outcome.totals.total_energy_saved_kwh);
//! ```
//!
//! ## Modules
//!
//! - [`assessment`] - Root container and full-pipeline entry point
//! - [`calculations`] - Thermal, financial, per-category and aggregate calculations
//! - [`environment`] - Shared environment input and heating types
//! - [`label`] - Energy label classifier and color table
//! - [`advisory`] - Best-category recommendation
//! - [`pdf`] - Typst-based PDF report rendering
//! - [`units`] - Type-safe unit wrappers
//! - [`errors`] - Structured error types

pub mod advisory;
pub mod assessment;
pub mod calculations;
pub mod environment;
pub mod errors;
pub mod label;
pub mod pdf;
pub mod units;

// Re-export commonly used types at crate root for convenience
pub use assessment::{Assessment, AssessmentOutcome};
pub use errors::{CalcError, CalcResult};
pub use label::EnergyLabel;
