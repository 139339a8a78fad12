use palette::Srgba;
use serde::{Deserialize, Serialize};

/// A value interval rendered with its own color, e.g. the warning band of a gauge
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Section {
    pub start: f64,
    pub stop: f64,
    pub color: Srgba,
}

impl Section {
    pub fn new(start: f64, stop: f64, color: Srgba) -> Self {
        Self { start, stop, color }
    }

    /// Whether `value` lies within the section, bounds included.
    /// Reversed sections (`start > stop`) are accepted.
    pub fn contains(&self, value: f64) -> bool {
        let (lo, hi) = if self.start <= self.stop {
            (self.start, self.stop)
        } else {
            (self.stop, self.start)
        };
        value >= lo && value <= hi
    }
}

/// Color of the first section containing `value`, or `default`
pub fn color_of_section(sections: &[Section], value: f64, default: Srgba) -> Srgba {
    sections
        .iter()
        .find(|section| section.contains(value))
        .map(|section| section.color)
        .unwrap_or(default)
}
