//! # Crop Profile Database
//!
//! Reference agronomic data for the supported crops: germination rate, unit
//! seed weight, seed price, expected yield, and market price. Values match
//! common Brazilian field references and are immutable process-wide.
//!
//! Unknown crop identifiers fall back to the maize profile rather than
//! failing, so a stale selector value still produces a usable estimate.
//!
//! ## Example
//!
//! ```rust
//! use agro_core::crops::{CropKind, CropProfile};
//!
//! let profile = CropProfile::lookup(CropKind::Soybean);
//! assert_eq!(profile.germination_pct, 80.0);
//! ```

use std::collections::HashMap;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};

/// Supported crops
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CropKind {
    /// Maize (corn)
    Maize,
    /// Soybean
    Soybean,
    /// Common bean
    Bean,
    /// Rice
    Rice,
    /// Wheat
    Wheat,
}

impl CropKind {
    /// All crop variants for UI selection
    pub const ALL: [CropKind; 5] = [
        CropKind::Maize,
        CropKind::Soybean,
        CropKind::Bean,
        CropKind::Rice,
        CropKind::Wheat,
    ];

    /// Get the identifier string used in serialized plans and selectors
    pub fn code(&self) -> &'static str {
        match self {
            CropKind::Maize => "maize",
            CropKind::Soybean => "soybean",
            CropKind::Bean => "bean",
            CropKind::Rice => "rice",
            CropKind::Wheat => "wheat",
        }
    }

    /// Parse from common string representations.
    ///
    /// Accepts both English identifiers and the Portuguese names used in
    /// legacy exports (milho, soja, feijao, arroz, trigo).
    pub fn from_str_flexible(s: &str) -> CalcResult<Self> {
        match s.trim().to_lowercase().as_str() {
            "maize" | "corn" | "milho" => Ok(CropKind::Maize),
            "soybean" | "soy" | "soja" => Ok(CropKind::Soybean),
            "bean" | "feijao" | "feijão" => Ok(CropKind::Bean),
            "rice" | "arroz" => Ok(CropKind::Rice),
            "wheat" | "trigo" => Ok(CropKind::Wheat),
            _ => Err(CalcError::invalid_input(
                "crop",
                s,
                "Unknown crop identifier",
            )),
        }
    }

    /// Parse a crop identifier, falling back to maize when unknown.
    ///
    /// This matches the legacy selector behavior where an unrecognized key
    /// resolved to the default (maize) entry.
    pub fn from_code_or_default(s: &str) -> Self {
        Self::from_str_flexible(s).unwrap_or(CropKind::Maize)
    }

    /// Get display name
    pub fn display_name(&self) -> &'static str {
        match self {
            CropKind::Maize => "Maize",
            CropKind::Soybean => "Soybean",
            CropKind::Bean => "Bean",
            CropKind::Rice => "Rice",
            CropKind::Wheat => "Wheat",
        }
    }
}

impl std::fmt::Display for CropKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Reference agronomic values for a crop.
///
/// All values are unadjusted reference figures before any field-specific
/// corrections.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CropProfile {
    /// Crop this profile belongs to
    pub kind: CropKind,
    /// Expected germination rate (%, 0-100)
    pub germination_pct: f64,
    /// Average weight of a single seed (g)
    pub seed_weight_g: f64,
    /// Seed price (R$/kg)
    pub seed_price_brl_per_kg: f64,
    /// Expected yield (kg/ha)
    pub expected_yield_kg_per_ha: f64,
    /// Market price of harvested product (R$/kg)
    pub market_price_brl_per_kg: f64,
}

static CROP_PROFILES: Lazy<HashMap<CropKind, CropProfile>> = Lazy::new(|| {
    let entries = [
        CropProfile {
            kind: CropKind::Maize,
            germination_pct: 85.0,
            seed_weight_g: 0.3,
            seed_price_brl_per_kg: 25.00,
            expected_yield_kg_per_ha: 8500.0,
            market_price_brl_per_kg: 0.65,
        },
        CropProfile {
            kind: CropKind::Soybean,
            germination_pct: 80.0,
            seed_weight_g: 0.15,
            seed_price_brl_per_kg: 18.00,
            expected_yield_kg_per_ha: 3200.0,
            market_price_brl_per_kg: 1.20,
        },
        CropProfile {
            kind: CropKind::Bean,
            germination_pct: 75.0,
            seed_weight_g: 0.4,
            seed_price_brl_per_kg: 12.00,
            expected_yield_kg_per_ha: 2800.0,
            market_price_brl_per_kg: 2.50,
        },
        CropProfile {
            kind: CropKind::Rice,
            germination_pct: 85.0,
            seed_weight_g: 0.025,
            seed_price_brl_per_kg: 8.00,
            expected_yield_kg_per_ha: 7500.0,
            market_price_brl_per_kg: 1.10,
        },
        CropProfile {
            kind: CropKind::Wheat,
            germination_pct: 90.0,
            seed_weight_g: 0.04,
            seed_price_brl_per_kg: 15.00,
            expected_yield_kg_per_ha: 3500.0,
            market_price_brl_per_kg: 0.85,
        },
    ];
    entries.into_iter().map(|p| (p.kind, p)).collect()
});

impl CropProfile {
    /// Look up the profile for a crop. Every [`CropKind`] has an entry, so
    /// this never fails.
    ///
    /// # Example
    ///
    /// ```rust
    /// use agro_core::crops::{CropKind, CropProfile};
    ///
    /// let maize = CropProfile::lookup(CropKind::Maize);
    /// assert_eq!(maize.seed_weight_g, 0.3);
    /// ```
    pub fn lookup(kind: CropKind) -> CropProfile {
        CROP_PROFILES[&kind]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_crop_has_profile() {
        for kind in CropKind::ALL {
            let profile = CropProfile::lookup(kind);
            assert_eq!(profile.kind, kind);
            assert!(profile.germination_pct > 0.0);
            assert!(profile.seed_weight_g > 0.0);
        }
    }

    #[test]
    fn test_maize_profile() {
        let maize = CropProfile::lookup(CropKind::Maize);
        assert_eq!(maize.germination_pct, 85.0);
        assert_eq!(maize.seed_price_brl_per_kg, 25.00);
        assert_eq!(maize.expected_yield_kg_per_ha, 8500.0);
    }

    #[test]
    fn test_crop_parsing() {
        assert_eq!(
            CropKind::from_str_flexible("soybean").unwrap(),
            CropKind::Soybean
        );
        assert_eq!(
            CropKind::from_str_flexible("Milho").unwrap(),
            CropKind::Maize
        );
        assert_eq!(
            CropKind::from_str_flexible("trigo").unwrap(),
            CropKind::Wheat
        );
        assert!(CropKind::from_str_flexible("banana").is_err());
    }

    #[test]
    fn test_unknown_crop_falls_back_to_maize() {
        assert_eq!(CropKind::from_code_or_default("banana"), CropKind::Maize);
        assert_eq!(CropKind::from_code_or_default("arroz"), CropKind::Rice);
    }

    #[test]
    fn test_serialization() {
        let profile = CropProfile::lookup(CropKind::Rice);
        let json = serde_json::to_string(&profile).unwrap();
        let roundtrip: CropProfile = serde_json::from_str(&json).unwrap();
        assert_eq!(profile, roundtrip);
    }

    #[test]
    fn test_crop_display() {
        assert_eq!(CropKind::Soybean.display_name(), "Soybean");
        assert_eq!(CropKind::Bean.code(), "bean");
    }
}
