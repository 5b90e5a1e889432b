//! # Irrigation Calculation
//!
//! Derives daily, weekly, and monthly water volumes from the daily water
//! balance (evapotranspiration minus precipitation), adjusted for system
//! efficiency, plus a suggested irrigation frequency and the water cost at
//! the reference tariff.
//!
//! ## Example
//!
//! ```rust
//! use agro_core::calculations::irrigation::{IrrigationInput, calculate};
//!
//! let input = IrrigationInput {
//!     label: "Pivot 1".to_string(),
//!     area_m2: 10_000.0,
//!     evapotranspiration_mm_day: 5.0,
//!     efficiency_pct: 80.0,
//!     precipitation_mm_day: 1.0,
//! };
//!
//! let result = calculate(&input).unwrap();
//! assert_eq!(result.net_mm_day, 4.0);
//! assert_eq!(result.gross_mm_day, 5.0);
//! assert_eq!(result.daily_liters, 50_000.0);
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::CalcResult;
use crate::units::{Liters, Reais};
use crate::validate;

/// Water tariff used for cost estimation (R$ per 1000 L)
const WATER_COST_BRL_PER_1000L: f64 = 3.50;

/// Input parameters for an irrigation calculation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IrrigationInput {
    /// User label for this system (e.g., "Pivot 1")
    pub label: String,

    /// Irrigated area in square meters (≥ 0.01)
    pub area_m2: f64,

    /// Reference evapotranspiration (mm/day, ≥ 0)
    pub evapotranspiration_mm_day: f64,

    /// Irrigation system efficiency (%, 1-100)
    pub efficiency_pct: f64,

    /// Effective precipitation (mm/day, ≥ 0)
    pub precipitation_mm_day: f64,
}

impl IrrigationInput {
    /// Validate input parameters.
    pub fn validate(&self) -> CalcResult<()> {
        validate::in_range("area_m2", self.area_m2, Some(0.01), None)?;
        validate::in_range(
            "evapotranspiration_mm_day",
            self.evapotranspiration_mm_day,
            Some(0.0),
            None,
        )?;
        validate::in_range("efficiency_pct", self.efficiency_pct, Some(1.0), Some(100.0))?;
        validate::in_range(
            "precipitation_mm_day",
            self.precipitation_mm_day,
            Some(0.0),
            None,
        )?;
        Ok(())
    }
}

/// Suggested irrigation frequency, a step function of the net daily depth.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum IrrigationFrequency {
    /// Net depth ≤ 2 mm/day
    Every3To4Days,
    /// Net depth ≤ 4 mm/day
    Every2To3Days,
    /// Net depth ≤ 6 mm/day
    Daily,
    /// Net depth > 6 mm/day
    TwiceDaily,
}

impl IrrigationFrequency {
    /// Classify a net irrigation depth.
    pub fn from_net_depth(net_mm_day: f64) -> Self {
        if net_mm_day <= 2.0 {
            IrrigationFrequency::Every3To4Days
        } else if net_mm_day <= 4.0 {
            IrrigationFrequency::Every2To3Days
        } else if net_mm_day <= 6.0 {
            IrrigationFrequency::Daily
        } else {
            IrrigationFrequency::TwiceDaily
        }
    }

    /// Get display label
    pub fn display_name(&self) -> &'static str {
        match self {
            IrrigationFrequency::Every3To4Days => "Every 3-4 days",
            IrrigationFrequency::Every2To3Days => "Every 2-3 days",
            IrrigationFrequency::Daily => "Daily",
            IrrigationFrequency::TwiceDaily => "Twice daily",
        }
    }
}

impl std::fmt::Display for IrrigationFrequency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Results from an irrigation calculation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IrrigationResult {
    /// Net irrigation depth: max(0, ET − precipitation) (mm/day)
    pub net_mm_day: f64,

    /// Gross irrigation depth after efficiency losses (mm/day)
    pub gross_mm_day: f64,

    /// Daily water volume (L)
    pub daily_liters: f64,

    /// Weekly water volume (L)
    pub weekly_liters: f64,

    /// Monthly water volume, 30-day month (L)
    pub monthly_liters: f64,

    /// Suggested irrigation frequency
    pub frequency: IrrigationFrequency,

    /// Daily water cost at R$ 3.50 per 1000 L
    pub daily_cost_brl: f64,

    /// Monthly water cost, 30-day month
    pub monthly_cost_brl: f64,
}

impl IrrigationResult {
    /// Get the daily volume as a typed unit
    pub fn daily_volume(&self) -> Liters {
        Liters(self.daily_liters)
    }

    /// Get the monthly cost as a typed unit
    pub fn monthly_cost(&self) -> Reais {
        Reais(self.monthly_cost_brl)
    }
}

/// Calculate irrigation volumes, frequency, and cost.
///
/// The daily volume converts the gross depth over the area to liters:
/// (gross/1000) m · area m² · 1000 L/m³. The /1000 and ×1000 cancel, so
/// the result equals gross(mm) × area(m²); the expression is kept in its
/// expanded form for numeric parity with legacy results.
pub fn calculate(input: &IrrigationInput) -> CalcResult<IrrigationResult> {
    input.validate()?;

    let net_mm_day = (input.evapotranspiration_mm_day - input.precipitation_mm_day).max(0.0);
    let gross_mm_day = net_mm_day / (input.efficiency_pct / 100.0);

    // mm depth to m, then m³ to liters
    let daily_liters = (gross_mm_day / 1000.0) * input.area_m2 * 1000.0;
    let weekly_liters = daily_liters * 7.0;
    let monthly_liters = daily_liters * 30.0;

    let frequency = IrrigationFrequency::from_net_depth(net_mm_day);

    let daily_cost_brl = daily_liters / 1000.0 * WATER_COST_BRL_PER_1000L;
    let monthly_cost_brl = daily_cost_brl * 30.0;

    Ok(IrrigationResult {
        net_mm_day,
        gross_mm_day,
        daily_liters,
        weekly_liters,
        monthly_liters,
        frequency,
        daily_cost_brl,
        monthly_cost_brl,
    })
}
