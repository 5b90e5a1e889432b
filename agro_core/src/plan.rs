//! # Field Plan Data Structures
//!
//! The `FieldPlan` struct is the root container for a season's calculation
//! data. Plans serialize to human-readable JSON for exchange with front
//! ends; the engine itself never writes them to disk.
//!
//! ## Structure
//!
//! ```text
//! FieldPlan
//! ├── meta: PlanMetadata (version, agronomist, farm, timestamps)
//! └── items: HashMap<Uuid, CalculationItem> (all calculations)
//! ```
//!
//! ## Example
//!
//! ```rust
//! use agro_core::plan::FieldPlan;
//!
//! let plan = FieldPlan::new("Ana Souza", "Fazenda Boa Vista");
//!
//! // Serialize to JSON for transmission
//! let json = serde_json::to_string_pretty(&plan).unwrap();
//! ```

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::calculations::CalculationItem;

/// Current schema version for serialized plans
pub const SCHEMA_VERSION: &str = "0.1.0";

/// Root plan container.
///
/// Items are stored in a flat UUID-keyed map for O(1) lookups and stable
/// references when items are reordered in a front end.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FieldPlan {
    /// Plan metadata (version, agronomist, farm)
    pub meta: PlanMetadata,

    /// All calculation items, keyed by UUID
    pub items: HashMap<Uuid, CalculationItem>,
}

impl FieldPlan {
    /// Create a new empty plan.
    ///
    /// # Arguments
    ///
    /// * `agronomist` - Name of the responsible agronomist
    /// * `farm` - Farm or property name
    pub fn new(agronomist: impl Into<String>, farm: impl Into<String>) -> Self {
        let now = Utc::now();
        FieldPlan {
            meta: PlanMetadata {
                version: SCHEMA_VERSION.to_string(),
                agronomist: agronomist.into(),
                farm: farm.into(),
                created: now,
                modified: now,
            },
            items: HashMap::new(),
        }
    }

    /// Add a calculation item to the plan.
    ///
    /// Returns the UUID assigned to the item.
    pub fn add_item(&mut self, item: CalculationItem) -> Uuid {
        let id = Uuid::new_v4();
        self.items.insert(id, item);
        self.touch();
        id
    }

    /// Remove a calculation item by UUID.
    ///
    /// Returns the removed item if it existed.
    pub fn remove_item(&mut self, id: &Uuid) -> Option<CalculationItem> {
        let item = self.items.remove(id);
        if item.is_some() {
            self.touch();
        }
        item
    }

    /// Get a calculation item by UUID.
    pub fn get_item(&self, id: &Uuid) -> Option<&CalculationItem> {
        self.items.get(id)
    }

    /// Update the modified timestamp.
    pub fn touch(&mut self) {
        self.meta.modified = Utc::now();
    }

    /// Number of calculation items in the plan.
    pub fn item_count(&self) -> usize {
        self.items.len()
    }
}

impl Default for FieldPlan {
    fn default() -> Self {
        FieldPlan::new("", "")
    }
}

/// Plan metadata stored alongside the items.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlanMetadata {
    /// Schema version (for migration compatibility)
    pub version: String,

    /// Name of the responsible agronomist
    pub agronomist: String,

    /// Farm or property name
    pub farm: String,

    /// When the plan was created
    pub created: DateTime<Utc>,

    /// When the plan was last modified
    pub modified: DateTime<Utc>,
}
