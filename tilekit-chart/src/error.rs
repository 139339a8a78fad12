use thiserror::Error;

#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum TilesChartError {
    #[error("Chart values sum to {sum}, arc geometry needs a positive total")]
    DegenerateInput { sum: f64 },

    #[error("Chart value at index {index} must be finite and non-negative, got {value}")]
    InvalidValue { index: usize, value: f64 },

    #[error("Canvas size must be positive and finite, got {0}")]
    InvalidCanvasSize(f64),
}
