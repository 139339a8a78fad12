use unicode_segmentation::UnicodeSegmentation;

use super::{TextBounds, TextMeasurer};
use crate::types::{Font, FontWeight};

/// Estimates text extents from the grapheme count, without any font data.
///
/// Useful for headless layout and tests where no text layout service is
/// available.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ApproximateTextMeasurer {
    /// Average glyph advance as a fraction of the font size
    pub advance_ratio: f32,
    /// Extra advance for bold text, as a fraction of the regular advance
    pub bold_factor: f32,
    /// Line height as a fraction of the font size
    pub line_height_ratio: f32,
}

impl Default for ApproximateTextMeasurer {
    fn default() -> Self {
        Self {
            advance_ratio: 0.55,
            bold_factor: 0.1,
            line_height_ratio: 1.2,
        }
    }
}

impl TextMeasurer for ApproximateTextMeasurer {
    fn measure_text_bounds(&self, text: &str, font: &Font) -> TextBounds {
        let size = font.size.max(0.0);
        let graphemes = text.graphemes(true).count() as f32;
        let advance = match font.weight {
            FontWeight::Regular => self.advance_ratio,
            FontWeight::Bold => self.advance_ratio * (1.0 + self.bold_factor),
        };
        TextBounds {
            width: graphemes * size * advance,
            height: if text.is_empty() {
                0.0
            } else {
                size * self.line_height_ratio
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use float_cmp::assert_approx_eq;

    #[test]
    fn test_grapheme_width() {
        let measurer = ApproximateTextMeasurer {
            advance_ratio: 0.5,
            bold_factor: 0.0,
            line_height_ratio: 1.0,
        };
        let font = Font::new("Lato", 10.0);
        assert_approx_eq!(f32, measurer.measure_text_bounds("abcd", &font).width, 20.0);
        // "é" written as e + combining accent is one grapheme
        assert_approx_eq!(f32, measurer.measure_text_bounds("e\u{301}", &font).width, 5.0);
        assert_eq!(measurer.measure_text_bounds("", &font).height, 0.0);
    }

    #[test]
    fn test_bold_is_wider() {
        let measurer = ApproximateTextMeasurer::default();
        let regular = Font::new("Lato", 10.0);
        let bold = Font {
            weight: FontWeight::Bold,
            ..regular.clone()
        };
        assert!(
            measurer.measure_text_bounds("Tile", &bold).width
                > measurer.measure_text_bounds("Tile", &regular).width
        );
    }
}
