//! # Fertilizer Formulation Reference
//!
//! Fixed list of five reference fertilizer products with their NPK
//! percentages and unit prices. The fertilizer calculator sizes its
//! recommendations against these entries; the list is an immutable
//! process-wide constant.

use serde::Serialize;

/// A commercial fertilizer formulation.
///
/// NPK percentages follow the standard N-P₂O₅-K₂O notation: a 20-10-20
/// blend contains 20% nitrogen, 10% phosphorus, 20% potassium by mass.
/// Entries are static constants, so the struct only serializes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Formulation {
    /// Product name
    pub name: &'static str,
    /// Nitrogen content (%)
    pub n_pct: f64,
    /// Phosphorus content as P₂O₅ (%)
    pub p_pct: f64,
    /// Potassium content as K₂O (%)
    pub k_pct: f64,
    /// Unit price (R$/kg)
    pub price_brl_per_kg: f64,
}

impl Formulation {
    /// The dominant nutrient percentage of this formulation.
    pub fn max_nutrient_pct(&self) -> f64 {
        self.n_pct.max(self.p_pct).max(self.k_pct)
    }
}

/// Reference formulation list. Index 0 is the balanced blend used as the
/// primary recommendation.
pub const FORMULATIONS: [Formulation; 5] = [
    Formulation {
        name: "NPK 20-10-20",
        n_pct: 20.0,
        p_pct: 10.0,
        k_pct: 20.0,
        price_brl_per_kg: 2.80,
    },
    Formulation {
        name: "NPK 10-10-10",
        n_pct: 10.0,
        p_pct: 10.0,
        k_pct: 10.0,
        price_brl_per_kg: 2.20,
    },
    Formulation {
        name: "Urea (45-00-00)",
        n_pct: 45.0,
        p_pct: 0.0,
        k_pct: 0.0,
        price_brl_per_kg: 2.50,
    },
    Formulation {
        name: "Superphosphate (00-18-00)",
        n_pct: 0.0,
        p_pct: 18.0,
        k_pct: 0.0,
        price_brl_per_kg: 1.80,
    },
    Formulation {
        name: "Potassium chloride (00-00-60)",
        n_pct: 0.0,
        p_pct: 0.0,
        k_pct: 60.0,
        price_brl_per_kg: 2.00,
    },
];

/// The balanced blend sized against the dominant nutrient requirement.
pub fn balanced_blend() -> &'static Formulation {
    &FORMULATIONS[0]
}

/// The nitrogen-only supplement (urea).
pub fn nitrogen_supplement() -> &'static Formulation {
    &FORMULATIONS[2]
}
