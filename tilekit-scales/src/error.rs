#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
pub enum TilesScaleError {
    #[error("Axis range is empty or inverted: min {min} must be below max {max}")]
    InvalidRange { min: f64, max: f64 },

    #[error("Nice number range must be positive and finite, got {0}")]
    InvalidNiceRange(f64),

    #[error("Tick count must lie within [2, 1000], got {0}")]
    InvalidTickCount(usize),
}
