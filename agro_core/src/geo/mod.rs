//! # Geodesic Polygon Geometry
//!
//! Area and perimeter of polygons drawn on the Earth's surface, defined by
//! latitude/longitude vertices in decimal degrees.
//!
//! - **Area** uses the spherical polygon approximation of Chamberlain and
//!   Duquette ("Some algorithms for polygons on a sphere", JPL) with the
//!   WGS84 equatorial radius, the same formula mapping widgets use for
//!   their geodesic-area utilities, so hectare figures match those tools.
//! - **Perimeter** sums haversine great-circle distances over consecutive
//!   edges, including the implicit closing edge, with the mean Earth
//!   radius of 6,371,000 m.
//!
//! ## Example
//!
//! ```rust
//! use agro_core::geo::{GeoPoint, Polygon};
//!
//! let polygon = Polygon::new(vec![
//!     GeoPoint::new(0.0, 0.0),
//!     GeoPoint::new(0.0, 0.001),
//!     GeoPoint::new(0.001, 0.001),
//!     GeoPoint::new(0.001, 0.0),
//! ]);
//!
//! let metrics = polygon.metrics().unwrap();
//! assert!(metrics.area_m2 > 0.0);
//! ```

pub mod geojson;
pub mod session;

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};

pub use geojson::{Feature, FeatureProperties, Geometry};
pub use session::DrawingSession;

/// Mean Earth radius for great-circle distances (m)
const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// WGS84 equatorial radius for spherical area (m)
const EARTH_EQUATORIAL_RADIUS_M: f64 = 6_378_137.0;

/// Minimum number of vertices for a polygon
pub const MIN_POLYGON_POINTS: usize = 3;

/// A point on the Earth's surface in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    /// Latitude (degrees, positive north)
    pub lat: f64,
    /// Longitude (degrees, positive east)
    pub lng: f64,
}

impl GeoPoint {
    /// Create a point from latitude and longitude in decimal degrees.
    pub fn new(lat: f64, lng: f64) -> Self {
        GeoPoint { lat, lng }
    }
}

/// Great-circle distance between two points via the haversine formula (m).
///
/// # Example
///
/// ```rust
/// use agro_core::geo::{GeoPoint, haversine_distance};
///
/// // One degree of latitude is roughly 111.2 km
/// let d = haversine_distance(GeoPoint::new(0.0, 0.0), GeoPoint::new(1.0, 0.0));
/// assert!((d - 111_195.0).abs() < 100.0);
/// ```
pub fn haversine_distance(a: GeoPoint, b: GeoPoint) -> f64 {
    let d_lat = (b.lat - a.lat).to_radians();
    let d_lng = (b.lng - a.lng).to_radians();
    let h = (d_lat / 2.0).sin().powi(2)
        + a.lat.to_radians().cos() * b.lat.to_radians().cos() * (d_lng / 2.0).sin().powi(2);
    let c = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());
    EARTH_RADIUS_M * c
}

/// An ordered, implicitly closed ring of geographic points.
///
/// Edges connect consecutive points and wrap from the last point back to
/// the first; the closing vertex is not stored. Area and perimeter are
/// pure folds over the points — the polygon carries no other state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Polygon {
    points: Vec<GeoPoint>,
}

/// Area and perimeter of a geodesic polygon.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PolygonMetrics {
    /// Surface area (m²)
    pub area_m2: f64,
    /// Surface area (ha)
    pub area_ha: f64,
    /// Perimeter (m)
    pub perimeter_m: f64,
    /// Perimeter (km)
    pub perimeter_km: f64,
}

impl Polygon {
    /// Create a polygon from an ordered vertex list. The ring closes
    /// implicitly; do not repeat the first point at the end.
    pub fn new(points: Vec<GeoPoint>) -> Self {
        Polygon { points }
    }

    /// The ordered vertices.
    pub fn points(&self) -> &[GeoPoint] {
        &self.points
    }

    /// Number of vertices.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Whether the polygon has no vertices.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Spherical surface area (m²) per Chamberlain-Duquette.
    ///
    /// # Errors
    ///
    /// `InsufficientPoints` with fewer than 3 vertices.
    pub fn geodesic_area_m2(&self) -> CalcResult<f64> {
        if self.points.len() < MIN_POLYGON_POINTS {
            return Err(CalcError::insufficient_points(
                self.points.len(),
                MIN_POLYGON_POINTS,
            ));
        }

        let mut sum = 0.0;
        for i in 0..self.points.len() {
            let p1 = self.points[i];
            let p2 = self.points[(i + 1) % self.points.len()];
            sum += (p2.lng - p1.lng).to_radians()
                * (2.0 + p1.lat.to_radians().sin() + p2.lat.to_radians().sin());
        }

        Ok((sum * EARTH_EQUATORIAL_RADIUS_M * EARTH_EQUATORIAL_RADIUS_M / 2.0).abs())
    }

    /// Perimeter as the sum of haversine edge lengths, including the
    /// wrap-around edge (m).
    pub fn perimeter_m(&self) -> f64 {
        if self.points.len() < 2 {
            return 0.0;
        }
        let mut perimeter = 0.0;
        for i in 0..self.points.len() {
            let p1 = self.points[i];
            let p2 = self.points[(i + 1) % self.points.len()];
            perimeter += haversine_distance(p1, p2);
        }
        perimeter
    }

    /// Compute area and perimeter in all output units.
    ///
    /// # Errors
    ///
    /// `InsufficientPoints` with fewer than 3 vertices.
    pub fn metrics(&self) -> CalcResult<PolygonMetrics> {
        let area_m2 = self.geodesic_area_m2()?;
        let perimeter_m = self.perimeter_m();
        Ok(PolygonMetrics {
            area_m2,
            area_ha: area_m2 / 10_000.0,
            perimeter_m,
            perimeter_km: perimeter_m / 1000.0,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// A small square near the equator, 0.001° on each side.
    fn equatorial_square() -> Polygon {
        Polygon::new(vec![
            GeoPoint::new(0.0, 0.0),
            GeoPoint::new(0.0, 0.001),
            GeoPoint::new(0.001, 0.001),
            GeoPoint::new(0.001, 0.0),
        ])
    }

    #[test]
    fn test_haversine_one_degree_latitude() {
        let d = haversine_distance(GeoPoint::new(0.0, 0.0), GeoPoint::new(1.0, 0.0));
        let expected = 1.0_f64.to_radians() * EARTH_RADIUS_M;
        assert!((d - expected).abs() < 1.0);
    }

    #[test]
    fn test_haversine_symmetric() {
        let a = GeoPoint::new(-15.79, -47.88);
        let b = GeoPoint::new(-15.81, -47.90);
        assert!((haversine_distance(a, b) - haversine_distance(b, a)).abs() < 1e-9);
    }

    #[test]
    fn test_square_area_matches_planar_approximation() {
        let metrics = equatorial_square().metrics().unwrap();

        // For a near-equatorial square the spherical area should agree
        // with the planar side² approximation to better than 1%.
        let side = 0.001_f64.to_radians() * EARTH_EQUATORIAL_RADIUS_M;
        let planar = side * side;
        assert!((metrics.area_m2 - planar).abs() / planar < 0.01);
    }

    #[test]
    fn test_square_perimeter() {
        let metrics = equatorial_square().metrics().unwrap();

        // Four sides of ~111.2 m each (haversine radius)
        let side = 0.001_f64.to_radians() * EARTH_RADIUS_M;
        assert!((metrics.perimeter_m - 4.0 * side).abs() / (4.0 * side) < 0.01);
        assert_eq!(metrics.perimeter_km, metrics.perimeter_m / 1000.0);
    }

    #[test]
    fn test_hectare_conversion() {
        let metrics = equatorial_square().metrics().unwrap();
        assert_eq!(metrics.area_ha, metrics.area_m2 / 10_000.0);
    }

    #[test]
    fn test_winding_direction_does_not_change_area() {
        let forward = equatorial_square();
        let mut reversed_points = forward.points().to_vec();
        reversed_points.reverse();
        let reversed = Polygon::new(reversed_points);

        let a1 = forward.geodesic_area_m2().unwrap();
        let a2 = reversed.geodesic_area_m2().unwrap();
        assert!((a1 - a2).abs() < 1e-6);
    }

    #[test]
    fn test_too_few_points() {
        let line = Polygon::new(vec![GeoPoint::new(0.0, 0.0), GeoPoint::new(0.0, 1.0)]);
        let err = line.metrics().unwrap_err();
        assert_eq!(err, CalcError::insufficient_points(2, 3));
    }

    #[test]
    fn test_metrics_idempotent() {
        let polygon = equatorial_square();
        let m1 = polygon.metrics().unwrap();
        let m2 = polygon.metrics().unwrap();
        assert_eq!(m1, m2);
    }

    #[test]
    fn test_serialization_roundtrip() {
        let polygon = equatorial_square();
        let json = serde_json::to_string(&polygon).unwrap();
        let roundtrip: Polygon = serde_json::from_str(&json).unwrap();
        assert_eq!(polygon, roundtrip);
    }
}
