use std::sync::Arc;

use serde::Serialize;

use crate::error::AnnotationError;
use crate::models::{Point, Shape};

/// Immutable snapshot of the in-progress path.
///
/// Every mutation swaps in a fresh allocation, so a snapshot handed to the
/// renderer never changes underneath it.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct PathState {
    points: Arc<[Point]>,
}

impl Default for PathState {
    fn default() -> Self {
        PathState {
            points: Arc::from(Vec::new()),
        }
    }
}

impl PathState {
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// A single point has no line to draw.
    pub fn has_renderable_line(&self) -> bool {
        self.points.len() >= 2
    }
}

/// Owns the path being drawn and reduces tap, close and clear events into it.
#[derive(Debug, Default)]
pub struct PointPathController {
    state: PathState,
}

impl PointPathController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &PathState {
        &self.state
    }

    pub fn has_renderable_line(&self) -> bool {
        self.state.has_renderable_line()
    }

    /// Append `point` after every previously tapped point.
    pub fn handle_tap_at(&mut self, point: Point) -> PathState {
        let mut next = Vec::with_capacity(self.state.len() + 1);
        next.extend_from_slice(self.state.points());
        next.push(point);
        self.state = PathState {
            points: Arc::from(next),
        };
        self.state.clone()
    }

    /// Close the path at the selected vertex.
    ///
    /// The prefix ending at `index` becomes a new shape and the path starts
    /// over empty. An index past the end leaves the path untouched.
    pub fn handle_close_at_index(
        &mut self,
        index: usize,
    ) -> Result<(PathState, Shape), AnnotationError> {
        let len = self.state.len();
        if index >= len {
            return Err(AnnotationError::StaleIndex { index, len });
        }
        let shape = Shape::from_points(&self.state.points()[..=index]);
        self.state = PathState::default();
        Ok((self.state.clone(), shape))
    }

    pub fn handle_clear(&mut self) -> PathState {
        self.state = PathState::default();
        self.state.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tap_all(ctl: &mut PointPathController, coords: &[(f64, f64)]) {
        for &(lat, lon) in coords {
            ctl.handle_tap_at(Point::new(lat, lon));
        }
    }

    #[test]
    fn test_taps_append_in_order() {
        let mut ctl = PointPathController::new();
        let coords: Vec<(f64, f64)> = (0..25).map(|i| (i as f64, -(i as f64))).collect();
        tap_all(&mut ctl, &coords);
        assert_eq!(ctl.state().len(), coords.len());
        for (p, &(lat, lon)) in ctl.state().points().iter().zip(&coords) {
            assert_eq!(*p, Point::new(lat, lon));
        }
    }

    #[test]
    fn test_duplicate_points_are_kept() {
        let mut ctl = PointPathController::new();
        tap_all(&mut ctl, &[(1.0, 1.0), (1.0, 1.0)]);
        assert_eq!(ctl.state().len(), 2);
    }

    #[test]
    fn test_snapshot_unaffected_by_later_taps() {
        let mut ctl = PointPathController::new();
        let snapshot = ctl.handle_tap_at(Point::new(1.0, 2.0));
        ctl.handle_tap_at(Point::new(3.0, 4.0));
        assert_eq!(snapshot.len(), 1);
        assert_eq!(ctl.state().len(), 2);
    }

    #[test]
    fn test_renderable_line_threshold() {
        let mut ctl = PointPathController::new();
        assert!(!ctl.has_renderable_line());
        ctl.handle_tap_at(Point::new(0.0, 0.0));
        assert!(!ctl.has_renderable_line());
        ctl.handle_tap_at(Point::new(1.0, 1.0));
        assert!(ctl.has_renderable_line());
        ctl.handle_tap_at(Point::new(2.0, 0.0));
        assert!(ctl.has_renderable_line());
    }

    #[test]
    fn test_close_at_last_index_emits_whole_path() {
        let mut ctl = PointPathController::new();
        tap_all(&mut ctl, &[(10.0, 10.0), (20.0, 20.0), (30.0, 10.0)]);
        let (state, shape) = ctl.handle_close_at_index(2).unwrap();
        assert!(state.is_empty());
        assert!(ctl.state().is_empty());
        assert_eq!(
            shape.points(),
            &[
                Point::new(10.0, 10.0),
                Point::new(20.0, 20.0),
                Point::new(30.0, 10.0)
            ]
        );
    }

    #[test]
    fn test_close_at_inner_index_emits_prefix() {
        let mut ctl = PointPathController::new();
        tap_all(&mut ctl, &[(1.0, 1.0), (2.0, 2.0), (3.0, 3.0), (4.0, 4.0)]);
        let (_, shape) = ctl.handle_close_at_index(1).unwrap();
        assert_eq!(shape.points(), &[Point::new(1.0, 1.0), Point::new(2.0, 2.0)]);
        assert!(ctl.state().is_empty());
    }

    #[test]
    fn test_close_at_first_index_emits_single_point_shape() {
        let mut ctl = PointPathController::new();
        tap_all(&mut ctl, &[(5.0, 5.0), (6.0, 6.0)]);
        let (_, shape) = ctl.handle_close_at_index(0).unwrap();
        assert_eq!(shape.len(), 1);
    }

    #[test]
    fn test_close_with_stale_index_is_rejected() {
        let mut ctl = PointPathController::new();
        tap_all(&mut ctl, &[(1.0, 1.0), (2.0, 2.0)]);
        let err = ctl.handle_close_at_index(2).unwrap_err();
        assert_eq!(err, AnnotationError::StaleIndex { index: 2, len: 2 });
        assert_eq!(ctl.state().len(), 2);
    }

    #[test]
    fn test_close_on_empty_path_is_rejected() {
        let mut ctl = PointPathController::new();
        assert!(ctl.handle_close_at_index(0).is_err());
        assert!(ctl.state().is_empty());
    }

    #[test]
    fn test_clear_empties_path() {
        let mut ctl = PointPathController::new();
        tap_all(&mut ctl, &[(1.0, 1.0), (2.0, 2.0)]);
        assert!(ctl.handle_clear().is_empty());
        assert!(ctl.state().is_empty());
    }

    #[test]
    fn test_clear_on_empty_path() {
        let mut ctl = PointPathController::new();
        assert!(ctl.handle_clear().is_empty());
    }
}
