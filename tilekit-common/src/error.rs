use thiserror::Error;

#[derive(Error, Debug)]
pub enum TilesCommonError {
    // ParseError doesn't implement std::Error, so #[from] doesn't work here
    #[error("Error parsing SVG path: {0:?}")]
    InvalidSvgPath(lyon_extra::parser::ParseError),

    #[error("Invalid color `{0}`")]
    InvalidColor(String),

    #[error("Opacity must lie within [0, 1], got {0}")]
    InvalidOpacity(f32),

    #[error("Invalid properties on line {line}: {message}")]
    InvalidProperties { line: usize, message: String },

    #[error("Unknown country `{0}`")]
    UnknownCountry(String),
}

impl From<lyon_extra::parser::ParseError> for TilesCommonError {
    fn from(value: lyon_extra::parser::ParseError) -> Self {
        Self::InvalidSvgPath(value)
    }
}
