use crate::types::{Font, TextAlign, TextBaseline};

pub mod approximate;

/// Core trait for text measurement functionality.
///
/// Implemented by whatever text layout service the renderer uses.
pub trait TextMeasurer: Send + Sync {
    /// Measures the bounding dimensions of `text` rendered in `font`
    fn measure_text_bounds(&self, text: &str, font: &Font) -> TextBounds;
}

/// Results from text measurement
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextBounds {
    /// Total width of the text
    pub width: f32,
    /// Total height from top to bottom
    pub height: f32,
}

impl TextBounds {
    /// Calculate the origin (top-left) point of the text box based on alignment and baseline
    pub fn calculate_origin(
        &self,
        position: [f32; 2],
        align: &TextAlign,
        baseline: &TextBaseline,
    ) -> [f32; 2] {
        let x = match align {
            TextAlign::Left => position[0],
            TextAlign::Center => position[0] - self.width / 2.0,
            TextAlign::Right => position[0] - self.width,
        };

        let y = match baseline {
            TextBaseline::Top => position[1],
            TextBaseline::Middle => position[1] - self.height / 2.0,
            TextBaseline::Bottom => position[1] - self.height,
        };

        [x, y]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_bounds_calculate_origin() {
        let bounds = TextBounds {
            width: 100.0,
            height: 20.0,
        };

        let origin = bounds.calculate_origin([10.0, 10.0], &TextAlign::Left, &TextBaseline::Top);
        assert_eq!(origin, [10.0, 10.0]);

        // Ring chart labels are centered on their anchor point
        let origin =
            bounds.calculate_origin([10.0, 10.0], &TextAlign::Center, &TextBaseline::Middle);
        assert_eq!(origin, [-40.0, 0.0]);

        let origin =
            bounds.calculate_origin([10.0, 10.0], &TextAlign::Right, &TextBaseline::Bottom);
        assert_eq!(origin, [-90.0, -10.0]);
    }
}
