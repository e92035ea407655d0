use thiserror::Error;

pub type GraphResult<T> = Result<T, GraphError>;

#[derive(Debug, Error)]
pub enum GraphError {
    #[error("invalid cell size: x={x}, y={y} (both components must be finite and non-zero)")]
    InvalidCellSize { x: f64, y: f64 },

    #[error("color count mismatch: expected {expected} colors (one per bar), got {actual}")]
    ColorCountMismatch { expected: usize, actual: usize },

    #[error("value count mismatch: expected {expected} values per category, got {actual}")]
    ValueCountMismatch { expected: usize, actual: usize },

    #[error("invalid config: {0}")]
    InvalidConfig(String),
}
