pub mod axis;
pub mod error;
pub mod nice;
