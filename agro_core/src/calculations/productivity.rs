//! # Productivity and Economic Analysis
//!
//! Projects production, revenue, return on investment, and break-even area
//! from the planted area, the crop's reference yield and market price, and
//! the grower's total input costs.
//!
//! Zero input costs make the ROI undefined; the calculation fails with
//! `DivisionByZero` instead of returning infinity.

use serde::{Deserialize, Serialize};

use crate::crops::{CropKind, CropProfile};
use crate::errors::{CalcError, CalcResult};
use crate::validate;

/// Input parameters for a productivity analysis.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductivityInput {
    /// User label for this analysis (e.g., "2026 maize season")
    pub label: String,

    /// Planted area in hectares (≥ 0.01)
    pub area_ha: f64,

    /// Crop grown
    pub crop: CropKind,

    /// Total input costs: seed, fertilizer, irrigation, labor (R$, > 0)
    pub input_costs_brl: f64,
}

impl ProductivityInput {
    /// Validate input parameters.
    pub fn validate(&self) -> CalcResult<()> {
        validate::in_range("area_ha", self.area_ha, Some(0.01), None)?;
        validate::in_range("input_costs_brl", self.input_costs_brl, Some(0.0), None)?;
        Ok(())
    }
}

/// Results from a productivity analysis.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductivityResult {
    /// Expected production (kg)
    pub production_kg: f64,

    /// Gross revenue at the reference market price (R$)
    pub gross_revenue_brl: f64,

    /// Net revenue after input costs (R$)
    pub net_revenue_brl: f64,

    /// Return on investment (%)
    pub roi_pct: f64,

    /// Production needed to recover input costs, expressed in kg
    /// (input costs / market price)
    pub break_even_kg: f64,

    /// Reference yield used (kg/ha)
    pub expected_yield_kg_per_ha: f64,

    /// Reference market price used (R$/kg)
    pub market_price_brl_per_kg: f64,
}

/// Calculate production, revenue, ROI, and break-even.
///
/// # Errors
///
/// `DivisionByZero` when `input_costs_brl` is zero — ROI has no defined
/// value without an investment to measure against.
pub fn calculate(input: &ProductivityInput) -> CalcResult<ProductivityResult> {
    input.validate()?;

    if input.input_costs_brl == 0.0 {
        return Err(CalcError::division_by_zero(
            "ROI is undefined with zero input costs",
        ));
    }

    let profile = CropProfile::lookup(input.crop);

    let production_kg = input.area_ha * profile.expected_yield_kg_per_ha;
    let gross_revenue_brl = production_kg * profile.market_price_brl_per_kg;
    let net_revenue_brl = gross_revenue_brl - input.input_costs_brl;
    let roi_pct = net_revenue_brl / input.input_costs_brl * 100.0;
    let break_even_kg = input.input_costs_brl / profile.market_price_brl_per_kg;

    Ok(ProductivityResult {
        production_kg,
        gross_revenue_brl,
        net_revenue_brl,
        roi_pct,
        break_even_kg,
        expected_yield_kg_per_ha: profile.expected_yield_kg_per_ha,
        market_price_brl_per_kg: profile.market_price_brl_per_kg,
    })
}
