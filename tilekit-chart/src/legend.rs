use palette::Srgba;
use serde::Serialize;
use tilekit_common::types::Point;

use crate::ring::ChartDatum;

/// A colored dot followed by the datum name
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LegendEntry {
    pub name: String,
    pub color: Srgba,
    /// Top left corner of the dot's bounding square
    pub dot_origin: Point,
    pub dot_diameter: f64,
    /// Left edge of the name, vertically centred
    pub text_position: Point,
}

/// Vertical legend listing chart data in input order
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LegendLayout {
    pub font_size: f64,
    pub entries: Vec<LegendEntry>,
}

impl LegendLayout {
    /// Spreads the entries over 90% of `canvas_height`. `tile_size` is the
    /// smaller side of the enclosing tile, which sizes the dots and the gap
    /// between dot and text.
    pub fn compute(data: &[ChartDatum], canvas_height: f64, tile_size: f64) -> Self {
        let step = canvas_height * 0.9 / (data.len() + 1) as f64;
        let dot_diameter = tile_size * 0.0375;
        let text_x = tile_size * 0.05;
        let text_offset = canvas_height * 0.025;

        let entries = data
            .iter()
            .enumerate()
            .map(|(i, datum)| {
                let y = (i + 1) as f64 * step;
                LegendEntry {
                    name: datum.name.clone(),
                    color: datum.color,
                    dot_origin: Point::new(0.0, y),
                    dot_diameter,
                    text_position: Point::new(text_x, y + text_offset),
                }
            })
            .collect();

        Self {
            font_size: canvas_height * 0.05,
            entries,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use float_cmp::assert_approx_eq;

    #[test]
    fn test_legend_spacing() {
        let red = Srgba::new(1.0, 0.0, 0.0, 1.0);
        let green = Srgba::new(0.0, 1.0, 0.0, 1.0);
        let data = vec![
            ChartDatum::new("North", 3.0, red),
            ChartDatum::new("South", 1.0, green),
        ];
        let legend = LegendLayout::compute(&data, 300.0, 400.0);

        assert_approx_eq!(f64, legend.font_size, 15.0);
        assert_eq!(legend.entries.len(), 2);

        // 0.9 * 300 / 3 = 90
        let first = &legend.entries[0];
        assert_eq!(first.name, "North");
        assert_eq!(first.color, red);
        assert_approx_eq!(f64, first.dot_origin.y, 90.0);
        assert_approx_eq!(f64, first.dot_diameter, 15.0);
        assert_approx_eq!(f64, first.text_position.x, 20.0);
        assert_approx_eq!(f64, first.text_position.y, 97.5);

        let second = &legend.entries[1];
        assert_approx_eq!(f64, second.dot_origin.y, 180.0);
        assert_approx_eq!(f64, second.text_position.y, 187.5);
    }

    #[test]
    fn test_empty_legend() {
        let legend = LegendLayout::compute(&[], 300.0, 400.0);
        assert!(legend.entries.is_empty());
    }
}
