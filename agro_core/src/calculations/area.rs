//! # Field Area Calculation
//!
//! Computes the planted area and an estimated perimeter for rectangular,
//! circular, and triangular plots, with conversions to hectares, acres,
//! and square kilometers.
//!
//! ## Assumptions
//!
//! - All dimensions are in meters and must be at least 0.1 m
//! - The triangular perimeter is an **equilateral approximation** derived
//!   from the area alone (side = √(4·area/√3)). The true perimeter of a
//!   base/height triangle is not computable without the third side, which
//!   is not collected as input. This is a known precision loss, kept for
//!   compatibility with legacy results.
//!
//! ## Example
//!
//! ```rust
//! use agro_core::calculations::area::{AreaInput, Shape, calculate};
//!
//! let input = AreaInput {
//!     label: "North field".to_string(),
//!     shape: Shape::Rectangular { length_m: 100.0, width_m: 50.0 },
//! };
//!
//! let result = calculate(&input).unwrap();
//! assert_eq!(result.area_m2, 5000.0);
//! assert_eq!(result.area_ha, 0.5);
//! assert_eq!(result.perimeter_m, 300.0);
//! ```

use std::f64::consts::PI;

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};
use crate::units::{Hectares, Meters, SquareMeters, ACRES_PER_HECTARE};
use crate::validate;

/// Minimum accepted plot dimension (m)
const MIN_DIMENSION_M: f64 = 0.1;

/// Plot geometry.
///
/// ## JSON Serialization
///
/// Shapes serialize with a "shape" discriminator:
///
/// ```json
/// { "shape": "Rectangular", "length_m": 100.0, "width_m": 50.0 }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "shape")]
pub enum Shape {
    /// Rectangular plot
    Rectangular { length_m: f64, width_m: f64 },
    /// Circular plot (e.g., center-pivot irrigation circle)
    Circular { radius_m: f64 },
    /// Triangular plot defined by base and height
    Triangular { base_m: f64, height_m: f64 },
}

impl Shape {
    /// Human-readable shape name for error messages
    pub fn name(&self) -> &'static str {
        match self {
            Shape::Rectangular { .. } => "rectangular",
            Shape::Circular { .. } => "circular",
            Shape::Triangular { .. } => "triangular",
        }
    }
}

/// Input parameters for a field area calculation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AreaInput {
    /// User label for this plot (e.g., "North field")
    pub label: String,

    /// Plot geometry and dimensions in meters
    pub shape: Shape,
}

impl AreaInput {
    /// Validate input parameters. Every dimension must be at least 0.1 m.
    pub fn validate(&self) -> CalcResult<()> {
        match self.shape {
            Shape::Rectangular { length_m, width_m } => {
                validate::in_range("length_m", length_m, Some(MIN_DIMENSION_M), None)?;
                validate::in_range("width_m", width_m, Some(MIN_DIMENSION_M), None)?;
            }
            Shape::Circular { radius_m } => {
                validate::in_range("radius_m", radius_m, Some(MIN_DIMENSION_M), None)?;
            }
            Shape::Triangular { base_m, height_m } => {
                validate::in_range("base_m", base_m, Some(MIN_DIMENSION_M), None)?;
                validate::in_range("height_m", height_m, Some(MIN_DIMENSION_M), None)?;
            }
        }
        Ok(())
    }
}

/// Results from a field area calculation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AreaResult {
    /// Area in square meters
    pub area_m2: f64,

    /// Area in hectares (m² / 10,000)
    pub area_ha: f64,

    /// Area in acres (ha × 2.47)
    pub area_acres: f64,

    /// Area in square kilometers (m² / 1,000,000)
    pub area_km2: f64,

    /// Estimated perimeter in meters.
    ///
    /// Exact for rectangular and circular plots. For triangular plots this
    /// is the equilateral approximation from area alone.
    pub perimeter_m: f64,
}

impl AreaResult {
    /// Get the area as a typed unit
    pub fn area(&self) -> SquareMeters {
        SquareMeters(self.area_m2)
    }

    /// Get the area in hectares as a typed unit
    pub fn hectares(&self) -> Hectares {
        Hectares(self.area_ha)
    }

    /// Get the perimeter as a typed unit
    pub fn perimeter(&self) -> Meters {
        Meters(self.perimeter_m)
    }
}

/// Calculate plot area and estimated perimeter.
///
/// This is a pure function: identical inputs produce identical results.
///
/// # Returns
///
/// * `Ok(AreaResult)` - Area in all supported units plus perimeter estimate
/// * `Err(CalcError)` - `InvalidInput` for out-of-range dimensions,
///   `CalculationFailed` if the computed area is not positive
///
/// # Example
///
/// ```rust
/// use agro_core::calculations::area::{AreaInput, Shape, calculate};
///
/// let circle = AreaInput {
///     label: "Pivot".to_string(),
///     shape: Shape::Circular { radius_m: 1.0 },
/// };
/// let result = calculate(&circle).unwrap();
/// assert!((result.area_m2 - std::f64::consts::PI).abs() < 1e-9);
/// ```
pub fn calculate(input: &AreaInput) -> CalcResult<AreaResult> {
    input.validate()?;

    let area_m2 = match input.shape {
        Shape::Rectangular { length_m, width_m } => length_m * width_m,
        Shape::Circular { radius_m } => PI * radius_m * radius_m,
        Shape::Triangular { base_m, height_m } => base_m * height_m / 2.0,
    };

    if area_m2 <= 0.0 {
        return Err(CalcError::calculation_failed(
            "area",
            format!("Computed {} area is not positive", input.shape.name()),
        ));
    }

    let perimeter_m = match input.shape {
        Shape::Rectangular { length_m, width_m } => 2.0 * (length_m + width_m),
        Shape::Circular { radius_m } => 2.0 * PI * radius_m,
        Shape::Triangular { .. } => {
            // Equilateral approximation from area alone
            let side = (area_m2 * 4.0 / 3.0_f64.sqrt()).sqrt();
            3.0 * side
        }
    };

    let area_ha = area_m2 / 10_000.0;

    Ok(AreaResult {
        area_m2,
        area_ha,
        area_acres: area_ha * ACRES_PER_HECTARE,
        area_km2: area_m2 / 1_000_000.0,
        perimeter_m,
    })
}
