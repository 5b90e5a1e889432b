//! # Drawing Session
//!
//! Session-scoped state for interactively delimiting an area: a front end
//! starts a session, feeds it map-click points, and finishes it into an
//! immutable [`Polygon`] the engine can measure. The calculation engine
//! never touches session state directly.
//!
//! ## Example
//!
//! ```rust
//! use agro_core::geo::{DrawingSession, GeoPoint};
//!
//! let mut session = DrawingSession::new();
//! session.start();
//! session.add_point(GeoPoint::new(-15.794, -47.882));
//! session.add_point(GeoPoint::new(-15.794, -47.880));
//! session.add_point(GeoPoint::new(-15.792, -47.880));
//!
//! let polygon = session.finish().unwrap();
//! assert_eq!(polygon.len(), 3);
//! assert!(!session.is_drawing());
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};

use super::{GeoPoint, Polygon, MIN_POLYGON_POINTS};

/// Accumulates polygon vertices while the user is drawing.
///
/// Transitions: `start()` begins collecting, `add_point()` appends while
/// drawing (and is ignored otherwise), `finish()` ends the session and
/// yields the polygon, `clear()` resets everything.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DrawingSession {
    points: Vec<GeoPoint>,
    drawing: bool,
}

impl DrawingSession {
    /// Create an idle session with no points.
    pub fn new() -> Self {
        Self::default()
    }

    /// Begin a new drawing, discarding any previous points.
    pub fn start(&mut self) {
        self.points.clear();
        self.drawing = true;
    }

    /// Append a vertex. Ignored when no drawing is active.
    pub fn add_point(&mut self, point: GeoPoint) {
        if self.drawing {
            self.points.push(point);
        }
    }

    /// End the drawing and return the collected polygon.
    ///
    /// # Errors
    ///
    /// `InsufficientPoints` when fewer than 3 vertices were added; the
    /// session stays active so the user can keep adding points.
    pub fn finish(&mut self) -> CalcResult<Polygon> {
        if self.points.len() < MIN_POLYGON_POINTS {
            return Err(CalcError::insufficient_points(
                self.points.len(),
                MIN_POLYGON_POINTS,
            ));
        }
        self.drawing = false;
        Ok(Polygon::new(std::mem::take(&mut self.points)))
    }

    /// Reset to the idle state, discarding all points.
    pub fn clear(&mut self) {
        self.points.clear();
        self.drawing = false;
    }

    /// Whether a drawing is in progress.
    pub fn is_drawing(&self) -> bool {
        self.drawing
    }

    /// Number of vertices collected so far.
    pub fn point_count(&self) -> usize {
        self.points.len()
    }

    /// The vertices collected so far (for live preview rendering).
    pub fn points(&self) -> &[GeoPoint] {
        &self.points
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn triangle_points() -> [GeoPoint; 3] {
        [
            GeoPoint::new(-15.794, -47.882),
            GeoPoint::new(-15.794, -47.880),
            GeoPoint::new(-15.792, -47.880),
        ]
    }

    #[test]
    fn test_full_drawing_cycle() {
        let mut session = DrawingSession::new();
        assert!(!session.is_drawing());

        session.start();
        assert!(session.is_drawing());

        for p in triangle_points() {
            session.add_point(p);
        }
        assert_eq!(session.point_count(), 3);

        let polygon = session.finish().unwrap();
        assert_eq!(polygon.len(), 3);
        assert!(!session.is_drawing());
        assert_eq!(session.point_count(), 0);
    }

    #[test]
    fn test_points_ignored_when_idle() {
        let mut session = DrawingSession::new();
        session.add_point(GeoPoint::new(0.0, 0.0));
        assert_eq!(session.point_count(), 0);
    }

    #[test]
    fn test_finish_requires_three_points() {
        let mut session = DrawingSession::new();
        session.start();
        session.add_point(GeoPoint::new(0.0, 0.0));
        session.add_point(GeoPoint::new(0.0, 1.0));

        let err = session.finish().unwrap_err();
        assert_eq!(err, CalcError::insufficient_points(2, 3));

        // Session stays active; a third point lets finish succeed
        assert!(session.is_drawing());
        session.add_point(GeoPoint::new(1.0, 1.0));
        assert!(session.finish().is_ok());
    }

    #[test]
    fn test_start_discards_previous_points() {
        let mut session = DrawingSession::new();
        session.start();
        session.add_point(GeoPoint::new(0.0, 0.0));
        session.start();
        assert_eq!(session.point_count(), 0);
    }

    #[test]
    fn test_clear_resets_state() {
        let mut session = DrawingSession::new();
        session.start();
        session.add_point(GeoPoint::new(0.0, 0.0));
        session.clear();
        assert!(!session.is_drawing());
        assert_eq!(session.point_count(), 0);
    }

    #[test]
    fn test_finished_polygon_preserves_order() {
        let mut session = DrawingSession::new();
        session.start();
        let expected = triangle_points();
        for p in expected {
            session.add_point(p);
        }
        let polygon = session.finish().unwrap();
        assert_eq!(polygon.points(), &expected);
    }
}
