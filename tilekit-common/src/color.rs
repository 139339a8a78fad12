use css_color_parser::Color;
use palette::{FromColor, Hsv, Srgba};

use crate::{error::TilesCommonError, numeric::clamp};

pub const BLACK: Srgba = Srgba::new(0.0, 0.0, 0.0, 1.0);
pub const WHITE: Srgba = Srgba::new(1.0, 1.0, 1.0, 1.0);

/// Whether all three color channels are equal
pub fn is_monochrome(color: &Srgba) -> bool {
    color.red == color.green && color.green == color.blue
}

/// Euclidean distance between two colors in RGB space, ignoring alpha
pub fn color_distance(color1: &Srgba, color2: &Srgba) -> f32 {
    let delta_r = color2.red - color1.red;
    let delta_g = color2.green - color1.green;
    let delta_b = color2.blue - color1.blue;
    (delta_r * delta_r + delta_g * delta_g + delta_b * delta_b).sqrt()
}

/// Whether the color lies closer to black than to white
pub fn is_dark(color: &Srgba) -> bool {
    color_distance(color, &BLACK) < color_distance(color, &WHITE)
}

pub fn is_bright(color: &Srgba) -> bool {
    !is_dark(color)
}

/// Black for colors with an HSB brightness above one half, white otherwise
pub fn contrast_color(color: &Srgba) -> Srgba {
    let hsv: Hsv = Hsv::from_color(color.color);
    if hsv.value > 0.5 {
        BLACK
    } else {
        WHITE
    }
}

/// Copy of `color` whose alpha is `factor` clamped to `[0, 1]`
pub fn translucent(color: &Srgba, factor: f32) -> Srgba {
    Srgba::new(color.red, color.green, color.blue, clamp(0.0, 1.0, factor))
}

/// Copy of `color` with the given alpha, which must lie within `[0, 1]`
pub fn with_opacity(color: &Srgba, opacity: f32) -> Result<Srgba, TilesCommonError> {
    if !(0.0..=1.0).contains(&opacity) {
        return Err(TilesCommonError::InvalidOpacity(opacity));
    }
    Ok(Srgba::new(color.red, color.green, color.blue, opacity))
}

/// Formats the color as a `#rrggbbaa` CSS hex string
pub fn to_css(color: &Srgba) -> String {
    let channel = |v: f32| (clamp(0.0, 1.0, v) * 255.0).round() as u8;
    format!(
        "#{:02x}{:02x}{:02x}{:02x}",
        channel(color.red),
        channel(color.green),
        channel(color.blue),
        channel(color.alpha)
    )
}

/// Parses any CSS color string (`#rgb`, `#rrggbb`, `rgba(...)`, named colors)
pub fn parse_color(s: &str) -> Result<Srgba, TilesCommonError> {
    let color = s
        .parse::<Color>()
        .map_err(|_| TilesCommonError::InvalidColor(s.to_string()))?;
    Ok(Srgba::new(
        color.r as f32 / 255.0,
        color.g as f32 / 255.0,
        color.b as f32 / 255.0,
        color.a,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use float_cmp::assert_approx_eq;

    #[test]
    fn test_monochrome() {
        assert!(is_monochrome(&Srgba::new(0.3, 0.3, 0.3, 1.0)));
        assert!(!is_monochrome(&Srgba::new(0.3, 0.3, 0.4, 1.0)));
    }

    #[test]
    fn test_distance_and_brightness() {
        assert_approx_eq!(f32, color_distance(&BLACK, &WHITE), 3.0_f32.sqrt());
        assert_approx_eq!(f32, color_distance(&WHITE, &WHITE), 0.0);

        assert!(is_dark(&Srgba::new(0.1, 0.2, 0.1, 1.0)));
        assert!(is_bright(&Srgba::new(0.9, 0.8, 0.95, 1.0)));
    }

    #[test]
    fn test_contrast_color() {
        assert_eq!(contrast_color(&Srgba::new(1.0, 1.0, 0.0, 1.0)), BLACK);
        assert_eq!(contrast_color(&Srgba::new(0.0, 0.0, 0.4, 1.0)), WHITE);
        // Brightness is the max channel, so saturated red still reads as bright
        assert_eq!(contrast_color(&Srgba::new(0.9, 0.0, 0.0, 1.0)), BLACK);
    }

    #[test]
    fn test_alpha_helpers() {
        let red = Srgba::new(1.0, 0.0, 0.0, 1.0);
        assert_eq!(translucent(&red, 0.25).alpha, 0.25);
        assert_eq!(translucent(&red, 3.0).alpha, 1.0);
        assert_eq!(translucent(&red, -1.0).alpha, 0.0);

        assert_eq!(with_opacity(&red, 0.5).unwrap().alpha, 0.5);
        assert!(matches!(
            with_opacity(&red, 1.5),
            Err(TilesCommonError::InvalidOpacity(_))
        ));
    }

    #[test]
    fn test_css_roundtrip() {
        let color = parse_color("#ff8000").unwrap();
        assert_approx_eq!(f32, color.red, 1.0);
        assert_approx_eq!(f32, color.green, 128.0 / 255.0);
        assert_approx_eq!(f32, color.blue, 0.0);
        assert_eq!(to_css(&color), "#ff8000ff");

        assert_eq!(to_css(&Srgba::new(0.0, 0.0, 1.0, 0.5)), "#0000ff80");
        assert!(parse_color("not-a-color").is_err());
    }
}
