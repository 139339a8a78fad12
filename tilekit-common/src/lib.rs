pub mod charset;
pub mod color;
pub mod error;
pub mod format;
pub mod lyon;
pub mod numeric;
pub mod properties;
pub mod section;
pub mod text;
pub mod types;
