//! Shared UI components reusable across panels
//!
//! Contains:
//! - `charts` - Canvas drawing utilities for the result bar charts

pub mod charts;
