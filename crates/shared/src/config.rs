use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::AnnotationError;
use crate::models::Viewport;

/// Screen radius, in pixels, within which a tap selects an existing vertex.
pub const DEFAULT_VERTEX_HIT_RADIUS_PX: f64 = 24.0;

/// Session settings. Every field has a default, so `{}` is a valid config.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SessionConfig {
    pub initial_viewport: Viewport,
    pub vertex_hit_radius_px: f64,
}

impl Default for SessionConfig {
    fn default() -> Self {
        SessionConfig {
            initial_viewport: Viewport::default(),
            vertex_hit_radius_px: DEFAULT_VERTEX_HIT_RADIUS_PX,
        }
    }
}

impl SessionConfig {
    pub fn from_json(json: &str) -> Result<Self, AnnotationError> {
        let config: SessionConfig = serde_json::from_str(json)
            .map_err(|e| AnnotationError::Config(format!("failed to parse config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self, AnnotationError> {
        let data = std::fs::read_to_string(path).map_err(|e| {
            AnnotationError::Config(format!("failed to read {}: {}", path.display(), e))
        })?;
        let config = Self::from_json(&data)?;
        tracing::info!(
            path = %path.display(),
            latitude_span = config.initial_viewport.latitude_span,
            longitude_span = config.initial_viewport.longitude_span,
            "Loaded session config"
        );
        Ok(config)
    }

    fn validate(&self) -> Result<(), AnnotationError> {
        if !self.initial_viewport.has_valid_spans() {
            return Err(AnnotationError::InvalidViewport {
                latitude_span: self.initial_viewport.latitude_span,
                longitude_span: self.initial_viewport.longitude_span,
            });
        }
        if !(self.vertex_hit_radius_px.is_finite() && self.vertex_hit_radius_px > 0.0) {
            return Err(AnnotationError::Config(format!(
                "vertexHitRadiusPx must be positive, got {}",
                self.vertex_hit_radius_px
            )));
        }
        Ok(())
    }
}
