//! # agro_core - Agronomic Calculation Engine
//!
//! `agro_core` is the computational heart of AgroCalc, providing unit-aware
//! agricultural calculations with a clean, JSON-first API. Every calculator is
//! a pure, stateless function over validated inputs, making the crate trivial
//! to embed in CLIs, services, or UI front ends.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: Pure functions that take input and return results
//! - **JSON-First**: All types implement Serialize/Deserialize
//! - **Rich Errors**: Structured error types, not just strings
//! - **Unit-Safe**: Metric newtype wrappers prevent unit confusion
//!
//! ## Quick Start
//!
//! ```rust
//! use agro_core::calculations::area::{AreaInput, Shape, calculate};
//!
//! let input = AreaInput {
//!     label: "North field".to_string(),
//!     shape: Shape::Rectangular { length_m: 120.0, width_m: 80.0 },
//! };
//!
//! let result = calculate(&input).unwrap();
//! assert_eq!(result.area_m2, 9600.0);
//! ```
//!
//! ## Modules
//!
//! - [`calculations`] - All calculator types (area, seeds, fertilizer, irrigation, productivity)
//! - [`crops`] - Crop profile database
//! - [`fertilizers`] - NPK formulation reference table
//! - [`geo`] - Geodesic polygon geometry, drawing session, GeoJSON export
//! - [`plan`] - Field plan container and metadata
//! - [`units`] - Type-safe metric unit wrappers
//! - [`validate`] - Numeric input validation
//! - [`errors`] - Structured error types

pub mod calculations;
pub mod crops;
pub mod errors;
pub mod fertilizers;
pub mod geo;
pub mod plan;
pub mod units;
pub mod validate;

// Re-export commonly used types at crate root for convenience
pub use errors::{CalcError, CalcResult};
pub use geo::{GeoPoint, Polygon, PolygonMetrics};
pub use plan::{FieldPlan, PlanMetadata};
