//! # Agronomic Calculations
//!
//! This module contains all calculator types. Each calculation follows the
//! pattern:
//!
//! - `*Input` - Input parameters (JSON-serializable)
//! - `*Result` - Calculation results (JSON-serializable)
//! - `calculate(input) -> Result<*Result, CalcError>` - Pure calculation function
//!
//! Every calculator is stateless and reentrant: identical inputs produce
//! identical results, and nothing is shared across invocations beyond the
//! read-only crop and fertilizer lookup tables.
//!
//! ## Available Calculations
//!
//! - [`area`] - Field area and perimeter for rectangular, circular, and triangular plots
//! - [`seeds`] - Seed requirement from spacing, germination rate, and area
//! - [`fertilizer`] - NPK totals and formulation recommendations
//! - [`irrigation`] - Water volumes, frequency, and cost from the daily water balance
//! - [`productivity`] - Production, revenue, ROI, and break-even analysis

pub mod area;
pub mod fertilizer;
pub mod irrigation;
pub mod productivity;
pub mod seeds;

use serde::{Deserialize, Serialize};

// Re-export commonly used types
pub use area::{AreaInput, AreaResult, Shape};
pub use fertilizer::{FertilizerInput, FertilizerResult, Recommendation};
pub use irrigation::{IrrigationFrequency, IrrigationInput, IrrigationResult};
pub use productivity::{ProductivityInput, ProductivityResult};
pub use seeds::{SeedsInput, SeedsResult};

/// Enum wrapper for all calculation types.
///
/// This allows storing heterogeneous calculations in a single collection
/// while maintaining type safety and clean serialization.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum CalculationItem {
    /// Field area and perimeter calculation
    Area(AreaInput),
    /// Seed requirement calculation
    Seeds(SeedsInput),
    /// Fertilizer plan calculation
    Fertilizer(FertilizerInput),
    /// Irrigation volume calculation
    Irrigation(IrrigationInput),
    /// Productivity and economic analysis
    Productivity(ProductivityInput),
}

impl CalculationItem {
    /// Get the user-provided label for this calculation
    pub fn label(&self) -> &str {
        match self {
            CalculationItem::Area(a) => &a.label,
            CalculationItem::Seeds(s) => &s.label,
            CalculationItem::Fertilizer(f) => &f.label,
            CalculationItem::Irrigation(i) => &i.label,
            CalculationItem::Productivity(p) => &p.label,
        }
    }

    /// Get the calculation type as a string
    pub fn calc_type(&self) -> &'static str {
        match self {
            CalculationItem::Area(_) => "Area",
            CalculationItem::Seeds(_) => "Seeds",
            CalculationItem::Fertilizer(_) => "Fertilizer",
            CalculationItem::Irrigation(_) => "Irrigation",
            CalculationItem::Productivity(_) => "Productivity",
        }
    }
}
