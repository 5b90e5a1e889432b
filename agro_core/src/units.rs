//! # Unit Types
//!
//! Type-safe wrappers for agronomic units. These provide compile-time
//! safety against unit confusion while remaining lightweight (just f64 wrappers).
//!
//! ## Design Philosophy
//!
//! We use simple newtype wrappers rather than a full units library because:
//! - Field agronomy uses a consistent metric set of units
//! - We want JSON serialization to be clean (just numbers)
//! - Minimal runtime overhead
//!
//! ## Metric Units (Primary)
//!
//! AgroCalc uses metric units internally, matching Brazilian field practice:
//! - Length: meters (m), centimeters (cm), kilometers (km)
//! - Area: square meters (m²), hectares (ha), square kilometers (km²), acres
//! - Volume: liters (L), cubic meters (m³)
//! - Mass: grams (g), kilograms (kg)
//! - Currency: Brazilian reais (R$)
//!
//! Percentages stay plain `f64` throughout the crate: 20 means 20%, not 0.20.
//!
//! ## Example
//!
//! ```rust
//! use agro_core::units::{SquareMeters, Hectares};
//!
//! let area = SquareMeters(25_000.0);
//! let ha: Hectares = area.into();
//! assert_eq!(ha.0, 2.5);
//! ```

use serde::{Deserialize, Serialize};
use std::ops::{Add, Div, Mul, Sub};

// ============================================================================
// Length Units
// ============================================================================

/// Length in meters
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Meters(pub f64);

/// Length in centimeters
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Centimeters(pub f64);

/// Length in kilometers
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Kilometers(pub f64);

/// Depth of water in millimeters (1 mm over 1 m² equals 1 liter)
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Millimeters(pub f64);

impl From<Centimeters> for Meters {
    fn from(cm: Centimeters) -> Self {
        Meters(cm.0 / 100.0)
    }
}

impl From<Meters> for Centimeters {
    fn from(m: Meters) -> Self {
        Centimeters(m.0 * 100.0)
    }
}

impl From<Meters> for Kilometers {
    fn from(m: Meters) -> Self {
        Kilometers(m.0 / 1000.0)
    }
}

impl From<Kilometers> for Meters {
    fn from(km: Kilometers) -> Self {
        Meters(km.0 * 1000.0)
    }
}

// ============================================================================
// Area Units
// ============================================================================

/// Area in square meters
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SquareMeters(pub f64);

/// Area in hectares (1 ha = 10,000 m²)
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Hectares(pub f64);

/// Area in square kilometers
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SquareKilometers(pub f64);

/// Area in acres (1 ha ≈ 2.47 acres)
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Acres(pub f64);

/// Acres per hectare conversion factor used throughout the engine
pub const ACRES_PER_HECTARE: f64 = 2.47;

impl From<SquareMeters> for Hectares {
    fn from(m2: SquareMeters) -> Self {
        Hectares(m2.0 / 10_000.0)
    }
}

impl From<Hectares> for SquareMeters {
    fn from(ha: Hectares) -> Self {
        SquareMeters(ha.0 * 10_000.0)
    }
}

impl From<SquareMeters> for SquareKilometers {
    fn from(m2: SquareMeters) -> Self {
        SquareKilometers(m2.0 / 1_000_000.0)
    }
}

impl From<SquareKilometers> for SquareMeters {
    fn from(km2: SquareKilometers) -> Self {
        SquareMeters(km2.0 * 1_000_000.0)
    }
}

impl From<Hectares> for Acres {
    fn from(ha: Hectares) -> Self {
        Acres(ha.0 * ACRES_PER_HECTARE)
    }
}

impl From<Acres> for Hectares {
    fn from(ac: Acres) -> Self {
        Hectares(ac.0 / ACRES_PER_HECTARE)
    }
}

// ============================================================================
// Volume Units
// ============================================================================

/// Volume in liters
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Liters(pub f64);

/// Volume in cubic meters
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CubicMeters(pub f64);

impl From<CubicMeters> for Liters {
    fn from(m3: CubicMeters) -> Self {
        Liters(m3.0 * 1000.0)
    }
}

impl From<Liters> for CubicMeters {
    fn from(l: Liters) -> Self {
        CubicMeters(l.0 / 1000.0)
    }
}

// ============================================================================
// Mass Units
// ============================================================================

/// Mass in grams
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Grams(pub f64);

/// Mass in kilograms
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Kilograms(pub f64);

impl From<Grams> for Kilograms {
    fn from(g: Grams) -> Self {
        Kilograms(g.0 / 1000.0)
    }
}

impl From<Kilograms> for Grams {
    fn from(kg: Kilograms) -> Self {
        Grams(kg.0 * 1000.0)
    }
}

// ============================================================================
// Currency
// ============================================================================

/// Monetary amount in Brazilian reais (R$)
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Reais(pub f64);

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

impl_arithmetic!(Meters);
impl_arithmetic!(Centimeters);
impl_arithmetic!(Kilometers);
impl_arithmetic!(Millimeters);
impl_arithmetic!(SquareMeters);
impl_arithmetic!(Hectares);
impl_arithmetic!(SquareKilometers);
impl_arithmetic!(Acres);
impl_arithmetic!(Liters);
impl_arithmetic!(CubicMeters);
impl_arithmetic!(Grams);
impl_arithmetic!(Kilograms);
impl_arithmetic!(Reais);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_square_meters_to_hectares() {
        let m2 = SquareMeters(25_000.0);
        let ha: Hectares = m2.into();
        assert_eq!(ha.0, 2.5);
    }

    #[test]
    fn test_square_meters_to_square_kilometers() {
        let m2 = SquareMeters(3_500_000.0);
        let km2: SquareKilometers = m2.into();
        assert_eq!(km2.0, 3.5);
    }

    #[test]
    fn test_hectares_to_acres() {
        let ha = Hectares(10.0);
        let ac: Acres = ha.into();
        assert_eq!(ac.0, 24.7);
    }

    #[test]
    fn test_centimeters_to_meters() {
        let cm = Centimeters(50.0);
        let m: Meters = cm.into();
        assert_eq!(m.0, 0.5);
    }

    #[test]
    fn test_grams_to_kilograms() {
        let g = Grams(300.0);
        let kg: Kilograms = g.into();
        assert_eq!(kg.0, 0.3);
    }

    #[test]
    fn test_cubic_meters_to_liters() {
        let m3 = CubicMeters(2.5);
        let l: Liters = m3.into();
        assert_eq!(l.0, 2500.0);
    }

    #[test]
    fn test_arithmetic() {
        let a = Hectares(10.0);
        let b = Hectares(4.0);
        assert_eq!((a + b).0, 14.0);
        assert_eq!((a - b).0, 6.0);
        assert_eq!((a * 2.0).0, 20.0);
        assert_eq!((a / 2.0).0, 5.0);
    }

    #[test]
    fn test_serialization() {
        let ha = Hectares(12.5);
        let json = serde_json::to_string(&ha).unwrap();
        assert_eq!(json, "12.5");

        let roundtrip: Hectares = serde_json::from_str(&json).unwrap();
        assert_eq!(ha, roundtrip);
    }
}
