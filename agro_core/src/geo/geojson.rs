//! # GeoJSON Export
//!
//! Converts a delimited polygon to a GeoJSON `Feature` for use in GIS
//! tools, and reads one back. GeoJSON stores coordinates as `[lng, lat]`
//! pairs — the reverse of the `GeoPoint` lat/lng order — and this module
//! swaps consistently in both directions. The exported ring is implicitly
//! closed: the first vertex is not repeated at the end.
//!
//! ## Example
//!
//! ```rust
//! use agro_core::geo::{GeoPoint, Polygon};
//! use agro_core::geo::geojson::{export_polygon, polygon_from_feature};
//!
//! let polygon = Polygon::new(vec![
//!     GeoPoint::new(-15.794, -47.882),
//!     GeoPoint::new(-15.794, -47.880),
//!     GeoPoint::new(-15.792, -47.880),
//! ]);
//!
//! let feature = export_polygon(&polygon, "Test area").unwrap();
//! let roundtrip = polygon_from_feature(&feature).unwrap();
//! assert_eq!(polygon, roundtrip);
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};

use super::Polygon;
use super::GeoPoint;

/// A GeoJSON `Feature` with `Polygon` geometry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Feature {
    /// Always "Feature"
    #[serde(rename = "type")]
    pub feature_type: String,

    /// Polygon geometry
    pub geometry: Geometry,

    /// Descriptive properties
    pub properties: FeatureProperties,
}

/// GeoJSON `Polygon` geometry: one ring of `[lng, lat]` positions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Geometry {
    /// Always "Polygon"
    #[serde(rename = "type")]
    pub geometry_type: String,

    /// Rings of positions; the outer ring is the only one produced here
    pub coordinates: Vec<Vec<[f64; 2]>>,
}

/// Properties attached to an exported area.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureProperties {
    /// Display name of the delimited area
    pub name: String,

    /// Geodesic area in hectares, formatted to 4 decimal places
    pub area_hectares: String,

    /// Export timestamp (ISO-8601)
    pub created: DateTime<Utc>,

    /// Number of vertices in the ring
    pub coordinates_count: usize,
}

/// Export a polygon as a GeoJSON Feature.
///
/// The `area_hectares` property carries the geodesic area formatted to
/// four decimals; computing it fails with `InsufficientPoints` for rings
/// of fewer than three vertices.
pub fn export_polygon(polygon: &Polygon, name: &str) -> CalcResult<Feature> {
    let metrics = polygon.metrics()?;

    let ring: Vec<[f64; 2]> = polygon.points().iter().map(|p| [p.lng, p.lat]).collect();

    Ok(Feature {
        feature_type: "Feature".to_string(),
        geometry: Geometry {
            geometry_type: "Polygon".to_string(),
            coordinates: vec![ring],
        },
        properties: FeatureProperties {
            name: name.to_string(),
            area_hectares: format!("{:.4}", metrics.area_ha),
            created: Utc::now(),
            coordinates_count: polygon.len(),
        },
    })
}

/// Serialize an exported feature to pretty-printed GeoJSON text.
pub fn to_geojson_string(feature: &Feature) -> CalcResult<String> {
    Ok(serde_json::to_string_pretty(feature)?)
}

/// Read the polygon back out of a GeoJSON Feature, swapping `[lng, lat]`
/// positions back into lat/lng points.
///
/// # Errors
///
/// `InvalidInput` when the feature carries no ring.
pub fn polygon_from_feature(feature: &Feature) -> CalcResult<Polygon> {
    let ring = feature.geometry.coordinates.first().ok_or_else(|| {
        CalcError::invalid_input("geometry.coordinates", "[]", "Feature has no polygon ring")
    })?;

    let points = ring
        .iter()
        .map(|&[lng, lat]| GeoPoint::new(lat, lng))
        .collect();

    Ok(Polygon::new(points))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn brasilia_triangle() -> Polygon {
        Polygon::new(vec![
            GeoPoint::new(-15.794, -47.882),
            GeoPoint::new(-15.794, -47.880),
            GeoPoint::new(-15.792, -47.880),
        ])
    }

    #[test]
    fn test_export_structure() {
        let feature = export_polygon(&brasilia_triangle(), "Delimited area").unwrap();
        assert_eq!(feature.feature_type, "Feature");
        assert_eq!(feature.geometry.geometry_type, "Polygon");
        assert_eq!(feature.geometry.coordinates.len(), 1);
        assert_eq!(feature.properties.coordinates_count, 3);
        assert_eq!(feature.properties.name, "Delimited area");
    }

    #[test]
    fn test_coordinates_are_lng_lat() {
        let polygon = brasilia_triangle();
        let feature = export_polygon(&polygon, "Area").unwrap();

        let first = feature.geometry.coordinates[0][0];
        assert_eq!(first[0], polygon.points()[0].lng);
        assert_eq!(first[1], polygon.points()[0].lat);
    }

    #[test]
    fn test_area_hectares_four_decimals() {
        let feature = export_polygon(&brasilia_triangle(), "Area").unwrap();
        let parts: Vec<&str> = feature.properties.area_hectares.split('.').collect();
        assert_eq!(parts.len(), 2);
        assert_eq!(parts[1].len(), 4);

        let value: f64 = feature.properties.area_hectares.parse().unwrap();
        let metrics = brasilia_triangle().metrics().unwrap();
        assert!((value - metrics.area_ha).abs() < 0.0001);
    }

    #[test]
    fn test_ring_not_explicitly_closed() {
        let feature = export_polygon(&brasilia_triangle(), "Area").unwrap();
        let ring = &feature.geometry.coordinates[0];
        assert_eq!(ring.len(), 3);
        assert_ne!(ring.first(), ring.last());
    }

    #[test]
    fn test_roundtrip_preserves_points() {
        let polygon = brasilia_triangle();
        let feature = export_polygon(&polygon, "Area").unwrap();
        let roundtrip = polygon_from_feature(&feature).unwrap();
        assert_eq!(polygon, roundtrip);
    }

    #[test]
    fn test_json_roundtrip() {
        let feature = export_polygon(&brasilia_triangle(), "Area").unwrap();
        let json = to_geojson_string(&feature).unwrap();
        assert!(json.contains("\"type\": \"Feature\""));
        assert!(json.contains("area_hectares"));

        let parsed: Feature = serde_json::from_str(&json).unwrap();
        assert_eq!(feature, parsed);
    }

    #[test]
    fn test_export_rejects_degenerate_polygon() {
        let line = Polygon::new(vec![
            GeoPoint::new(0.0, 0.0),
            GeoPoint::new(0.0, 1.0),
        ]);
        let err = export_polygon(&line, "Line").unwrap_err();
        assert_eq!(err.error_code(), "INSUFFICIENT_POINTS");
    }

    #[test]
    fn test_empty_feature_rejected() {
        let feature = Feature {
            feature_type: "Feature".to_string(),
            geometry: Geometry {
                geometry_type: "Polygon".to_string(),
                coordinates: vec![],
            },
            properties: FeatureProperties {
                name: "Empty".to_string(),
                area_hectares: "0.0000".to_string(),
                created: Utc::now(),
                coordinates_count: 0,
            },
        };
        assert!(polygon_from_feature(&feature).is_err());
    }
}
