use crate::error::AnnotationError;
use crate::models::Viewport;

/// Span multiplier applied by one zoom step.
pub const ZOOM_FACTOR: f64 = 2.0;

/// Halve both spans, keeping the center.
pub fn zoom_in(current: &Viewport) -> Result<Viewport, AnnotationError> {
    scale_checked(current, 1.0 / ZOOM_FACTOR)
}

/// Double both spans, keeping the center.
pub fn zoom_out(current: &Viewport) -> Result<Viewport, AnnotationError> {
    scale_checked(current, ZOOM_FACTOR)
}

/// Accept an externally supplied region if its spans are usable.
pub fn validate(next: Viewport) -> Result<Viewport, AnnotationError> {
    if next.has_valid_spans() {
        Ok(next)
    } else {
        Err(AnnotationError::InvalidViewport {
            latitude_span: next.latitude_span,
            longitude_span: next.longitude_span,
        })
    }
}

// Zoom has no configured floor or ceiling; a step is only refused once the
// spans would underflow or overflow.
fn scale_checked(current: &Viewport, factor: f64) -> Result<Viewport, AnnotationError> {
    let next = current.scaled(factor);
    if next.has_valid_spans() {
        Ok(next)
    } else {
        Err(AnnotationError::ZoomLimit)
    }
}

/// Owns the visible region and the home region it resets to.
#[derive(Debug, Clone)]
pub struct ViewportController {
    current: Viewport,
    home: Viewport,
}

impl Default for ViewportController {
    fn default() -> Self {
        Self::new(Viewport::default())
    }
}

impl ViewportController {
    pub fn new(home: Viewport) -> Self {
        ViewportController {
            current: home,
            home,
        }
    }

    pub fn current(&self) -> Viewport {
        self.current
    }

    pub fn zoom_in(&mut self) -> Result<Viewport, AnnotationError> {
        self.current = zoom_in(&self.current)?;
        Ok(self.current)
    }

    pub fn zoom_out(&mut self) -> Result<Viewport, AnnotationError> {
        self.current = zoom_out(&self.current)?;
        Ok(self.current)
    }

    /// Replace the region with one reported by the map surface.
    /// A rejected region leaves the previous one in place.
    pub fn set_viewport(&mut self, next: Viewport) -> Result<Viewport, AnnotationError> {
        self.current = validate(next)?;
        Ok(self.current)
    }

    pub fn reset(&mut self) -> Viewport {
        self.current = self.home;
        self.current
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Point;

    const EPS: f64 = 1e-12;

    #[test]
    fn test_zoom_in_default_spans() {
        let vp = zoom_in(&Viewport::default()).unwrap();
        assert!((vp.latitude_span - 2.5).abs() < EPS);
        assert!((vp.longitude_span - 0.7105).abs() < EPS);
        assert_eq!(vp.center(), Viewport::default().center());
    }

    #[test]
    fn test_zoom_in_then_out_restores_spans() {
        let original = Viewport::default();
        let back = zoom_out(&zoom_in(&original).unwrap()).unwrap();
        assert!((back.latitude_span - 5.0).abs() < EPS);
        assert!((back.longitude_span - 1.421).abs() < EPS);
    }

    #[test]
    fn test_repeated_zoom_in_strictly_decreases() {
        let mut vp = Viewport::default();
        for _ in 0..200 {
            let next = zoom_in(&vp).unwrap();
            assert!(next.latitude_span < vp.latitude_span);
            assert!(next.longitude_span < vp.longitude_span);
            vp = next;
        }
    }

    #[test]
    fn test_zoom_in_refused_before_span_reaches_zero() {
        let mut ctl = ViewportController::default();
        let mut steps = 0;
        while ctl.zoom_in().is_ok() {
            steps += 1;
            assert!(steps < 2000, "zoom in never hit the representable floor");
        }
        let last = ctl.current();
        assert!(last.has_valid_spans());
        assert_eq!(ctl.zoom_in(), Err(AnnotationError::ZoomLimit));
        assert_eq!(ctl.current(), last);
    }

    #[test]
    fn test_zoom_out_refused_before_overflow() {
        let mut ctl = ViewportController::new(Viewport::new(Point::new(0.0, 0.0), 1.0, 1.0));
        let mut steps = 0;
        while ctl.zoom_out().is_ok() {
            steps += 1;
            assert!(steps < 2000, "zoom out never hit the representable ceiling");
        }
        assert!(ctl.current().longitude_span.is_finite());
    }

    #[test]
    fn test_set_viewport_accepts_valid_region() {
        let mut ctl = ViewportController::default();
        let next = Viewport::new(Point::new(48.85, 2.35), 0.1, 0.2);
        assert_eq!(ctl.set_viewport(next), Ok(next));
        assert_eq!(ctl.current(), next);
    }

    #[test]
    fn test_set_viewport_rejects_non_positive_spans() {
        let mut ctl = ViewportController::default();
        let before = ctl.current();
        let bad = Viewport::new(Point::new(0.0, 0.0), 0.0, 1.0);
        assert!(matches!(
            ctl.set_viewport(bad),
            Err(AnnotationError::InvalidViewport { .. })
        ));
        assert_eq!(ctl.current(), before);
    }

    #[test]
    fn test_reset_restores_home() {
        let mut ctl = ViewportController::default();
        ctl.zoom_in().unwrap();
        ctl.zoom_in().unwrap();
        assert_eq!(ctl.reset(), Viewport::default());
    }
}
