//! # Fertilizer Plan Calculation
//!
//! Scales per-hectare N, P₂O₅, and K₂O application rates to the planted
//! area and recommends commercial formulations from the reference list:
//! the balanced 20-10-20 blend sized so its dominant nutrient covers the
//! largest total requirement, plus a urea supplement when any nitrogen is
//! required.
//!
//! The recommendation list is capped at three entries. The current
//! selection logic produces at most two; the cap is a fixed-size result
//! buffer, not a ranking.
//!
//! ## Example
//!
//! ```rust
//! use agro_core::calculations::fertilizer::{FertilizerInput, calculate};
//!
//! let input = FertilizerInput {
//!     label: "Maize base dressing".to_string(),
//!     area_ha: 10.0,
//!     n_rate_kg_per_ha: 120.0,
//!     p_rate_kg_per_ha: 60.0,
//!     k_rate_kg_per_ha: 80.0,
//! };
//!
//! let result = calculate(&input).unwrap();
//! assert_eq!(result.total_n_kg, 1200.0);
//! assert_eq!(result.recommendations.len(), 2);
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::CalcResult;
use crate::fertilizers::{balanced_blend, nitrogen_supplement};
use crate::validate;

/// Maximum number of recommendations returned
const MAX_RECOMMENDATIONS: usize = 3;

/// Input parameters for a fertilizer plan.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FertilizerInput {
    /// User label for this plan (e.g., "Maize base dressing")
    pub label: String,

    /// Planted area in hectares (≥ 0.01)
    pub area_ha: f64,

    /// Required nitrogen application rate (kg/ha, ≥ 0)
    pub n_rate_kg_per_ha: f64,

    /// Required phosphorus (P₂O₅) application rate (kg/ha, ≥ 0)
    pub p_rate_kg_per_ha: f64,

    /// Required potassium (K₂O) application rate (kg/ha, ≥ 0)
    pub k_rate_kg_per_ha: f64,
}

impl FertilizerInput {
    /// Validate input parameters. Zero rates are permitted.
    pub fn validate(&self) -> CalcResult<()> {
        validate::in_range("area_ha", self.area_ha, Some(0.01), None)?;
        validate::in_range("n_rate_kg_per_ha", self.n_rate_kg_per_ha, Some(0.0), None)?;
        validate::in_range("p_rate_kg_per_ha", self.p_rate_kg_per_ha, Some(0.0), None)?;
        validate::in_range("k_rate_kg_per_ha", self.k_rate_kg_per_ha, Some(0.0), None)?;
        Ok(())
    }
}

/// A single product recommendation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    /// Product name
    pub name: String,

    /// Quantity to purchase (kg)
    pub quantity_kg: f64,

    /// Cost at the reference unit price (R$)
    pub cost_brl: f64,
}

/// Results from a fertilizer plan calculation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FertilizerResult {
    /// Total nitrogen requirement (kg)
    pub total_n_kg: f64,

    /// Total phosphorus requirement as P₂O₅ (kg)
    pub total_p_kg: f64,

    /// Total potassium requirement as K₂O (kg)
    pub total_k_kg: f64,

    /// Product recommendations, balanced blend first (at most 3)
    pub recommendations: Vec<Recommendation>,

    /// Sum of recommendation costs (R$)
    pub total_cost_brl: f64,
}

/// Calculate total nutrient requirements and formulation recommendations.
///
/// The balanced blend quantity is sized so that its dominant nutrient
/// component covers the largest of the three totals:
/// quantity = maxNutrient / max(N%, P%, K%) × 100. When all rates are
/// zero, the recommendation degenerates to zero quantity and zero cost.
pub fn calculate(input: &FertilizerInput) -> CalcResult<FertilizerResult> {
    input.validate()?;

    let total_n_kg = input.n_rate_kg_per_ha * input.area_ha;
    let total_p_kg = input.p_rate_kg_per_ha * input.area_ha;
    let total_k_kg = input.k_rate_kg_per_ha * input.area_ha;

    let mut recommendations = Vec::new();

    // Balanced blend sized against the dominant nutrient requirement
    let max_nutrient = total_n_kg.max(total_p_kg).max(total_k_kg);
    let blend = balanced_blend();
    let quantity_kg = max_nutrient / blend.max_nutrient_pct() * 100.0;
    recommendations.push(Recommendation {
        name: blend.name.to_string(),
        quantity_kg,
        cost_brl: quantity_kg * blend.price_brl_per_kg,
    });

    // Nitrogen supplement when any N is required
    if total_n_kg > 0.0 {
        let urea = nitrogen_supplement();
        let urea_kg = total_n_kg / urea.n_pct * 100.0;
        recommendations.push(Recommendation {
            name: "Urea (N supplement)".to_string(),
            quantity_kg: urea_kg,
            cost_brl: urea_kg * urea.price_brl_per_kg,
        });
    }

    recommendations.truncate(MAX_RECOMMENDATIONS);

    let total_cost_brl = recommendations.iter().map(|r| r.cost_brl).sum();

    Ok(FertilizerResult {
        total_n_kg,
        total_p_kg,
        total_k_kg,
        recommendations,
        total_cost_brl,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_dressing() -> FertilizerInput {
        FertilizerInput {
            label: "Maize base dressing".to_string(),
            area_ha: 10.0,
            n_rate_kg_per_ha: 120.0,
            p_rate_kg_per_ha: 60.0,
            k_rate_kg_per_ha: 80.0,
        }
    }

    #[test]
    fn test_nutrient_totals_scale_with_area() {
        let result = calculate(&base_dressing()).unwrap();
        assert_eq!(result.total_n_kg, 1200.0);
        assert_eq!(result.total_p_kg, 600.0);
        assert_eq!(result.total_k_kg, 800.0);
    }

    #[test]
    fn test_balanced_blend_sized_by_dominant_nutrient() {
        let result = calculate(&base_dressing()).unwrap();

        // maxNutrient = 1200 kg N; 20-10-20 dominant component = 20%
        // quantity = 1200 / 20 * 100 = 6000 kg
        let blend = &result.recommendations[0];
        assert_eq!(blend.name, "NPK 20-10-20");
        assert!((blend.quantity_kg - 6000.0).abs() < 1e-9);
        assert!((blend.cost_brl - 6000.0 * 2.80).abs() < 1e-6);
    }

    #[test]
    fn test_urea_supplement_when_nitrogen_required() {
        let result = calculate(&base_dressing()).unwrap();
        assert_eq!(result.recommendations.len(), 2);

        // 1200 kg N / 45% * 100 = 2666.67 kg urea
        let urea = &result.recommendations[1];
        assert!((urea.quantity_kg - 1200.0 / 45.0 * 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_no_urea_without_nitrogen() {
        let input = FertilizerInput {
            label: "K only".to_string(),
            area_ha: 5.0,
            n_rate_kg_per_ha: 0.0,
            p_rate_kg_per_ha: 0.0,
            k_rate_kg_per_ha: 60.0,
        };
        let result = calculate(&input).unwrap();
        assert_eq!(result.recommendations.len(), 1);
        assert_eq!(result.recommendations[0].name, "NPK 20-10-20");
    }

    #[test]
    fn test_all_zero_rates_degenerate() {
        let input = FertilizerInput {
            label: "Nothing".to_string(),
            area_ha: 5.0,
            n_rate_kg_per_ha: 0.0,
            p_rate_kg_per_ha: 0.0,
            k_rate_kg_per_ha: 0.0,
        };
        let result = calculate(&input).unwrap();
        assert_eq!(result.total_n_kg, 0.0);
        assert_eq!(result.total_p_kg, 0.0);
        assert_eq!(result.total_k_kg, 0.0);
        assert_eq!(result.recommendations[0].quantity_kg, 0.0);
        assert_eq!(result.total_cost_brl, 0.0);
    }

    #[test]
    fn test_total_cost_is_sum_of_recommendations() {
        let result = calculate(&base_dressing()).unwrap();
        let sum: f64 = result.recommendations.iter().map(|r| r.cost_brl).sum();
        assert!((result.total_cost_brl - sum).abs() < 1e-9);
    }

    #[test]
    fn test_negative_rate_rejected() {
        let mut input = base_dressing();
        input.p_rate_kg_per_ha = -10.0;
        assert!(calculate(&input).is_err());
    }

    #[test]
    fn test_recommendation_cap() {
        let result = calculate(&base_dressing()).unwrap();
        assert!(result.recommendations.len() <= MAX_RECOMMENDATIONS);
    }
}
