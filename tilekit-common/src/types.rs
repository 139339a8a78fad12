use serde::{Deserialize, Serialize};

/// A point in canvas coordinates, where y grows downward
#[derive(Debug, Default, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// The point at `radius` from `self` in direction `angle_deg`.
    ///
    /// Angles grow counter-clockwise on screen, so the y offset is negated to
    /// account for the downward canvas y axis.
    pub fn polar_offset(&self, radius: f64, angle_deg: f64) -> Point {
        let rad = angle_deg.to_radians();
        Point {
            x: self.x + radius * rad.cos(),
            y: self.y - radius * rad.sin(),
        }
    }
}

impl From<Point> for [f32; 2] {
    fn from(point: Point) -> Self {
        [point.x as f32, point.y as f32]
    }
}
