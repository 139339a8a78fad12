pub mod donut;
pub mod error;
pub mod legend;
pub mod ring;
