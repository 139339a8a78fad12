use crate::error::TilesScaleError;

/// Returns a "nice" number approximately equal to `range`, of the form
/// `f × 10^e` with `f` one of 1, 2, 5 or 10.
///
/// With `round` the closest nice fraction is chosen, otherwise the smallest
/// one that is not below the fractional part of `range`.
pub fn calc_nice_number(range: f64, round: bool) -> Result<f64, TilesScaleError> {
    if !(range > 0.0) || !range.is_finite() {
        return Err(TilesScaleError::InvalidNiceRange(range));
    }

    let exponent = range.log10().floor();
    let magnitude = 10.0_f64.powf(exponent);
    // Subnormal ranges underflow the power of ten to zero
    if !(magnitude > 0.0) || !magnitude.is_finite() {
        return Err(TilesScaleError::InvalidNiceRange(range));
    }
    let fraction = range / magnitude;

    let nice_fraction = if round {
        if fraction < 1.5 {
            1.0
        } else if fraction < 3.0 {
            2.0
        } else if fraction < 7.0 {
            5.0
        } else {
            10.0
        }
    } else if fraction <= 1.0 {
        1.0
    } else if fraction <= 2.0 {
        2.0
    } else if fraction <= 5.0 {
        5.0
    } else {
        10.0
    };

    let nice = nice_fraction * magnitude;
    if !nice.is_finite() {
        return Err(TilesScaleError::InvalidNiceRange(range));
    }
    Ok(nice)
}
