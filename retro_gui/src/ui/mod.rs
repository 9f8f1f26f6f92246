//! UI module for the Retrofit GUI
//!
//! # Panel Structure
//! - `toolbar` - Header, Export PDF, theme toggle
//! - `input_panel` - Left panel: environment fields + the four category editors
//! - `results_panel` - Right panel: per-category results, totals, label badge,
//!   advisory text and bar charts
//! - `status_bar` - Bottom status messages
//!
//! # Shared Components
//! - `shared/charts` - Canvas drawing for the cost/savings and CO2 bar charts

// Top-level panels
pub mod input_panel;
pub mod results_panel;
pub mod status_bar;
pub mod toolbar;

// Input panel children
pub mod input_category;

// Shared components
pub mod shared;
