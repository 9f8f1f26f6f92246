//! # Unit Types
//!
//! Type-safe wrappers for building-physics units. These provide compile-time
//! safety against unit confusion while remaining lightweight (just f64 wrappers).
//!
//! ## Design Philosophy
//!
//! We use simple newtype wrappers rather than a full units library because:
//! - The calculator uses a small, fixed set of units
//! - We want JSON serialization to be clean (just numbers)
//! - Minimal runtime overhead
//!
//! ## SI Units (Primary)
//!
//! The calculator works in SI units throughout, matching Dutch building
//! practice:
//! - Area: square meters (m²)
//! - Thermal resistance: m²·K/W (RC-value; higher is better insulation)
//! - Thermal transmittance: W/(m²·K) (U-value; inverse of resistance)
//! - Energy: watt-hours (Wh), kilowatt-hours (kWh)
//!
//! The whole unit pipeline hangs together as: U × area × ΔT gives watts,
//! watts × hours per year gives Wh/year, and the `WattHours` →
//! [`KilowattHours`] conversion divides by 1000.
//!
//! ## Example
//!
//! ```rust
//! use retro_core::units::{RcValue, WattHours, KilowattHours};
//!
//! let rc = RcValue(2.5);
//! let u = rc.u_value();
//! assert_eq!(u.0, 0.4);
//!
//! let wh = WattHours(1_440_000.0);
//! let kwh: KilowattHours = wh.into();
//! assert_eq!(kwh.0, 1440.0);
//! ```

use serde::{Deserialize, Serialize};
use std::ops::{Add, Div, Mul, Sub};

// ============================================================================
// Area
// ============================================================================

/// Area in square meters
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SquareMeters(pub f64);

// ============================================================================
// Thermal Resistance / Transmittance
// ============================================================================

/// Thermal resistance (RC-value) in m²·K/W
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RcValue(pub f64);

/// Thermal transmittance (U-value) in W/(m²·K)
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UValue(pub f64);

impl RcValue {
    /// Invert the resistance into a transmittance.
    ///
    /// Transmittance approaches infinity as resistance approaches zero, so
    /// a non-positive resistance yields the infinite-transmittance sentinel
    /// rather than a panic or an error.
    pub fn u_value(self) -> UValue {
        if self.0 > 0.0 {
            UValue(1.0 / self.0)
        } else {
            UValue(f64::INFINITY)
        }
    }
}

// ============================================================================
// Energy
// ============================================================================

/// Energy in watt-hours
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WattHours(pub f64);

/// Energy in kilowatt-hours (1 kWh = 1000 Wh)
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KilowattHours(pub f64);

impl From<WattHours> for KilowattHours {
    fn from(wh: WattHours) -> Self {
        KilowattHours(wh.0 / 1000.0)
    }
}

impl From<KilowattHours> for WattHours {
    fn from(kwh: KilowattHours) -> Self {
        WattHours(kwh.0 * 1000.0)
    }
}

// ============================================================================
// Arithmetic Implementations (macro to reduce boilerplate)
// ============================================================================

macro_rules! impl_arithmetic {
    ($type:ty) => {
        impl Add for $type {
            type Output = Self;
            fn add(self, rhs: Self) -> Self::Output {
                Self(self.0 + rhs.0)
            }
        }

        impl Sub for $type {
            type Output = Self;
            fn sub(self, rhs: Self) -> Self::Output {
                Self(self.0 - rhs.0)
            }
        }

        impl Mul<f64> for $type {
            type Output = Self;
            fn mul(self, rhs: f64) -> Self::Output {
                Self(self.0 * rhs)
            }
        }

        impl Div<f64> for $type {
            type Output = Self;
            fn div(self, rhs: f64) -> Self::Output {
                Self(self.0 / rhs)
            }
        }

        impl $type {
            /// Get the raw f64 value
            pub fn value(self) -> f64 {
                self.0
            }

            /// Create from raw f64 value
            pub fn new(value: f64) -> Self {
                Self(value)
            }
        }
    };
}

impl_arithmetic!(SquareMeters);
impl_arithmetic!(RcValue);
impl_arithmetic!(UValue);
impl_arithmetic!(WattHours);
impl_arithmetic!(KilowattHours);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rc_to_u_value() {
        let rc = RcValue(2.5);
        assert_eq!(rc.u_value().0, 0.4);

        let rc = RcValue(4.0);
        assert_eq!(rc.u_value().0, 0.25);
    }

    #[test]
    fn test_non_positive_rc_is_infinite_transmittance() {
        assert!(RcValue(0.0).u_value().0.is_infinite());
        assert!(RcValue(-1.0).u_value().0.is_infinite());
    }

    #[test]
    fn test_watt_hours_to_kilowatt_hours() {
        let wh = WattHours(1500.0);
        let kwh: KilowattHours = wh.into();
        assert_eq!(kwh.0, 1.5);

        let back: WattHours = kwh.into();
        assert_eq!(back.0, 1500.0);
    }

    #[test]
    fn test_arithmetic() {
        let a = KilowattHours(10.0);
        let b = KilowattHours(4.0);
        assert_eq!((a + b).0, 14.0);
        assert_eq!((a - b).0, 6.0);
        assert_eq!((a * 2.0).0, 20.0);
        assert_eq!((a / 2.0).0, 5.0);
    }

    #[test]
    fn test_serialization() {
        let area = SquareMeters(50.0);
        let json = serde_json::to_string(&area).unwrap();
        assert_eq!(json, "50.0");

        let roundtrip: SquareMeters = serde_json::from_str(&json).unwrap();
        assert_eq!(area, roundtrip);
    }
}
