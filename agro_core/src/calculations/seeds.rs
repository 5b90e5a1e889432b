//! # Seed Requirement Calculation
//!
//! Converts a planted area and planting grid (row spacing × plant spacing)
//! into the number of seeds to purchase, their weight, and their cost,
//! accounting for the crop's germination rate.
//!
//! All intermediate counts round **up** (never down) so the grower never
//! under-provisions seed stock.
//!
//! ## Example
//!
//! ```rust
//! use agro_core::calculations::seeds::{SeedsInput, calculate};
//! use agro_core::crops::CropKind;
//!
//! let input = SeedsInput {
//!     label: "Maize planting".to_string(),
//!     area_m2: 100.0,
//!     crop: CropKind::Maize,
//!     row_spacing_cm: 50.0,
//!     plant_spacing_cm: 20.0,
//! };
//!
//! let result = calculate(&input).unwrap();
//! assert_eq!(result.plants_per_m2, 10.0);
//! assert_eq!(result.total_plants, 1000);
//! assert_eq!(result.seeds_needed, 1177); // ceil(1000 / 0.85)
//! ```

use serde::{Deserialize, Serialize};

use crate::crops::{CropKind, CropProfile};
use crate::errors::CalcResult;
use crate::units::{Kilograms, Reais};
use crate::validate;

/// Input parameters for a seed requirement calculation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeedsInput {
    /// User label for this planting (e.g., "Maize, plot 3")
    pub label: String,

    /// Planted area in square meters (≥ 0.01)
    pub area_m2: f64,

    /// Crop to plant
    pub crop: CropKind,

    /// Distance between rows in centimeters (≥ 1)
    pub row_spacing_cm: f64,

    /// Distance between plants within a row in centimeters (≥ 1)
    pub plant_spacing_cm: f64,
}

impl SeedsInput {
    /// Validate input parameters.
    pub fn validate(&self) -> CalcResult<()> {
        validate::in_range("area_m2", self.area_m2, Some(0.01), None)?;
        validate::in_range("row_spacing_cm", self.row_spacing_cm, Some(1.0), None)?;
        validate::in_range("plant_spacing_cm", self.plant_spacing_cm, Some(1.0), None)?;
        Ok(())
    }
}

/// Results from a seed requirement calculation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeedsResult {
    /// Plant density from the planting grid (plants/m²)
    pub plants_per_m2: f64,

    /// Total plants for the area, rounded up
    pub total_plants: u64,

    /// Seeds to purchase after germination losses, rounded up
    pub seeds_needed: u64,

    /// Germination rate used (%, from the crop profile)
    pub germination_pct: f64,

    /// Unit seed weight used (g, from the crop profile)
    pub seed_weight_g: f64,

    /// Total seed weight (kg)
    pub weight_kg: f64,

    /// Estimated seed cost (R$)
    pub cost_brl: f64,
}

impl SeedsResult {
    /// Get the seed weight as a typed unit
    pub fn weight(&self) -> Kilograms {
        Kilograms(self.weight_kg)
    }

    /// Get the seed cost as a typed unit
    pub fn cost(&self) -> Reais {
        Reais(self.cost_brl)
    }
}

/// Calculate the seed requirement for a planting.
///
/// plantsPerM² = 1 / (rowSpacing · plantSpacing), spacings in meters;
/// totalPlants = ⌈plantsPerM² · area⌉;
/// seedsNeeded = ⌈totalPlants / (germination / 100)⌉.
///
/// The spacing lower bound of 1 cm guarantees the divisor is positive.
pub fn calculate(input: &SeedsInput) -> CalcResult<SeedsResult> {
    input.validate()?;

    let profile = CropProfile::lookup(input.crop);

    // Convert spacing from cm to m
    let row_spacing_m = input.row_spacing_cm / 100.0;
    let plant_spacing_m = input.plant_spacing_cm / 100.0;

    let plants_per_m2 = 1.0 / (row_spacing_m * plant_spacing_m);
    let total_plants = (plants_per_m2 * input.area_m2).ceil() as u64;

    let seeds_needed = (total_plants as f64 / (profile.germination_pct / 100.0)).ceil() as u64;

    let weight_kg = seeds_needed as f64 * profile.seed_weight_g / 1000.0;
    let cost_brl = weight_kg * profile.seed_price_brl_per_kg;

    Ok(SeedsResult {
        plants_per_m2,
        total_plants,
        seeds_needed,
        germination_pct: profile.germination_pct,
        seed_weight_g: profile.seed_weight_g,
        weight_kg,
        cost_brl,
    })
}
