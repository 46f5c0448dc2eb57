use std::sync::Arc;

use serde::{Deserialize, Serialize};

// Default region shown when a session starts
pub const DEFAULT_CENTER_LATITUDE: f64 = 37.78825;
pub const DEFAULT_CENTER_LONGITUDE: f64 = -122.4324;
pub const DEFAULT_LATITUDE_SPAN: f64 = 5.0;
pub const DEFAULT_LONGITUDE_SPAN: f64 = 1.421;

/// A geographic coordinate in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub latitude: f64,
    pub longitude: f64,
}

impl Point {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Point {
            latitude,
            longitude,
        }
    }
}

impl std::fmt::Display for Point {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.5}, {:.5})", self.latitude, self.longitude)
    }
}

/// A closed ring of points, frozen at the moment its path was closed.
///
/// The points live in their own allocation, so a shape never aliases the
/// live path it was cut from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Shape {
    points: Arc<[Point]>,
}

impl Shape {
    pub(crate) fn from_points(points: &[Point]) -> Self {
        Shape {
            points: Arc::from(points),
        }
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

/// The visible map region: a center plus the latitude/longitude extents.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Viewport {
    pub center_latitude: f64,
    pub center_longitude: f64,
    pub latitude_span: f64,
    pub longitude_span: f64,
}

impl Default for Viewport {
    fn default() -> Self {
        Viewport {
            center_latitude: DEFAULT_CENTER_LATITUDE,
            center_longitude: DEFAULT_CENTER_LONGITUDE,
            latitude_span: DEFAULT_LATITUDE_SPAN,
            longitude_span: DEFAULT_LONGITUDE_SPAN,
        }
    }
}

impl Viewport {
    pub fn new(center: Point, latitude_span: f64, longitude_span: f64) -> Self {
        Viewport {
            center_latitude: center.latitude,
            center_longitude: center.longitude,
            latitude_span,
            longitude_span,
        }
    }

    pub fn center(&self) -> Point {
        Point::new(self.center_latitude, self.center_longitude)
    }

    /// Both spans are positive, finite, normal floats.
    pub fn has_valid_spans(&self) -> bool {
        is_valid_span(self.latitude_span) && is_valid_span(self.longitude_span)
    }

    /// Same center, both spans multiplied by `factor`.
    pub fn scaled(&self, factor: f64) -> Viewport {
        Viewport {
            latitude_span: self.latitude_span * factor,
            longitude_span: self.longitude_span * factor,
            ..*self
        }
    }
}

pub(crate) fn is_valid_span(span: f64) -> bool {
    span.is_normal() && span > 0.0
}
