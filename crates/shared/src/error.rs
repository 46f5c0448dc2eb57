/// Reasons an annotation event or configuration can be refused.
///
/// None of these are fatal: the session drops the offending event and keeps
/// its previous state.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum AnnotationError {
    #[error("stale point index {index} for a path of {len} points")]
    StaleIndex { index: usize, len: usize },
    #[error("invalid viewport spans: latitude {latitude_span}, longitude {longitude_span}")]
    InvalidViewport {
        latitude_span: f64,
        longitude_span: f64,
    },
    #[error("zoom step would leave the representable span range")]
    ZoomLimit,
    #[error("configuration error: {0}")]
    Config(String),
}
