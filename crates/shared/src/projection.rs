//! Equirectangular projection between geographic points and map-surface pixels.
//!
//! The surface shows exactly the viewport: its top-left pixel is the
//! north-west corner and its bottom-right pixel the south-east corner.
use crate::models::{Point, Viewport};

/// Aim for roughly this many graticule lines across each axis.
const GRATICULE_TARGET_LINES: f64 = 6.0;

/// Spans near the float limits can produce degenerate line counts; skip those.
const GRATICULE_MAX_LINES: i64 = 64;

/// Rendered size of the map surface in pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Surface {
    pub width: f64,
    pub height: f64,
}

impl Surface {
    pub fn new(width: f64, height: f64) -> Self {
        Surface { width, height }
    }

    pub fn is_drawable(&self) -> bool {
        self.width > 0.0 && self.height > 0.0
    }
}

fn west_edge(vp: &Viewport) -> f64 {
    vp.center_longitude - vp.longitude_span / 2.0
}

fn north_edge(vp: &Viewport) -> f64 {
    vp.center_latitude + vp.latitude_span / 2.0
}

/// Convert a geographic point to surface pixel coordinates.
pub fn point_to_px(vp: &Viewport, surface: Surface, p: Point) -> (f64, f64) {
    (
        (p.longitude - west_edge(vp)) / vp.longitude_span * surface.width,
        (north_edge(vp) - p.latitude) / vp.latitude_span * surface.height,
    )
}

/// Convert surface pixel coordinates to a geographic point.
/// Returns `None` for a surface with no area.
pub fn px_to_point(vp: &Viewport, surface: Surface, px_x: f64, px_y: f64) -> Option<Point> {
    if !surface.is_drawable() {
        return None;
    }
    Some(Point::new(
        north_edge(vp) - px_y / surface.height * vp.latitude_span,
        west_edge(vp) + px_x / surface.width * vp.longitude_span,
    ))
}

/// The viewport after the content has been dragged by (`dx`, `dy`) pixels.
pub fn pan_by_px(vp: &Viewport, surface: Surface, dx: f64, dy: f64) -> Viewport {
    if !surface.is_drawable() {
        return *vp;
    }
    Viewport {
        center_latitude: vp.center_latitude + dy / surface.height * vp.latitude_span,
        center_longitude: vp.center_longitude - dx / surface.width * vp.longitude_span,
        ..*vp
    }
}

/// Index of the path vertex nearest to `click` (surface pixels) within `radius_px`.
pub fn find_nearest_vertex(
    points: &[Point],
    vp: &Viewport,
    surface: Surface,
    click: (f64, f64),
    radius_px: f64,
) -> Option<usize> {
    let mut best_idx = None;
    let mut best_dist = radius_px;
    for (i, p) in points.iter().enumerate() {
        let (x, y) = point_to_px(vp, surface, *p);
        let dx = x - click.0;
        let dy = y - click.1;
        let dist = (dx * dx + dy * dy).sqrt();
        if dist < best_dist {
            best_dist = dist;
            best_idx = Some(i);
        }
    }
    best_idx
}

/// A 1-2-5 step in degrees giving a handful of lines across `span`.
pub fn graticule_step(span: f64) -> f64 {
    let raw = span / GRATICULE_TARGET_LINES;
    let magnitude = 10f64.powf(raw.log10().floor());
    let normalized = raw / magnitude;
    let nice = if normalized < 1.5 {
        1.0
    } else if normalized < 3.5 {
        2.0
    } else if normalized < 7.5 {
        5.0
    } else {
        10.0
    };
    nice * magnitude
}

fn lines_between(low: f64, high: f64, step: f64) -> Vec<f64> {
    let first = (low / step).ceil() as i64;
    let last = (high / step).floor() as i64;
    if last.saturating_sub(first) > GRATICULE_MAX_LINES {
        return Vec::new();
    }
    (first..=last).map(|k| k as f64 * step).collect()
}

/// Latitudes of the horizontal graticule lines inside the viewport.
pub fn graticule_latitudes(vp: &Viewport) -> Vec<f64> {
    let north = north_edge(vp);
    lines_between(north - vp.latitude_span, north, graticule_step(vp.latitude_span))
}

/// Longitudes of the vertical graticule lines inside the viewport.
pub fn graticule_longitudes(vp: &Viewport) -> Vec<f64> {
    let west = west_edge(vp);
    lines_between(west, west + vp.longitude_span, graticule_step(vp.longitude_span))
}

/// Format a point as hemisphere-suffixed degrees (e.g. "37.50000° N, 122.25000° W").
pub fn format_coord(p: Point) -> String {
    let ns = if p.latitude < 0.0 { 'S' } else { 'N' };
    let ew = if p.longitude < 0.0 { 'W' } else { 'E' };
    format!(
        "{:.5}° {}, {:.5}° {}",
        p.latitude.abs(),
        ns,
        p.longitude.abs(),
        ew
    )
}
