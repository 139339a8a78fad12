use crate::{measurement::TextMeasurer, types::Font};

/// Amount the font size shrinks per fitting step
pub const FONT_SIZE_STEP: f32 = 0.005;

/// Shrinks `font_size` until `text` fits within `max_width`.
///
/// Returns `font_size` unchanged when the text already fits. The size never
/// drops below zero, which is what text that fits at no size gets.
pub fn fit_font_size(
    measurer: &impl TextMeasurer,
    text: &str,
    font: &Font,
    max_width: f32,
    font_size: f32,
) -> f32 {
    let width = measurer.measure_text_bounds(text, &font.with_size(font_size)).width;
    if !(width > max_width) {
        return font_size;
    }

    // Text width grows roughly linearly with the font size, so start from the
    // proportional estimate and step down from there.
    let mut size = (max_width / width * font_size).min(font_size).max(0.0);
    if !size.is_finite() {
        size = 0.0;
    }
    let mut current = font.with_size(size);
    while size > 0.0 && measurer.measure_text_bounds(text, &current).width > max_width {
        // At large sizes a fixed step is below the f32 spacing, keep the step
        // at least a few ulps so every iteration makes progress
        let step = FONT_SIZE_STEP.max(size * f32::EPSILON * 4.0);
        size = (size - step).max(0.0);
        current.size = size;
    }
    log::trace!("fitted {text:?} into {max_width}px: font size {font_size} -> {size}");
    size
}

/// Fitted copy of `font`
pub fn fit_font(measurer: &impl TextMeasurer, text: &str, font: &Font, max_width: f32) -> Font {
    font.with_size(fit_font_size(measurer, text, font, max_width, font.size))
}
