/// Tolerance used by the approximate comparisons below
pub const EPSILON: f64 = 1e-6;

/// Restricts `value` to the `[min, max]` interval.
///
/// Works for any partially ordered type. Unordered values (e.g. `NaN`) are
/// returned unchanged.
pub fn clamp<T: PartialOrd>(min: T, max: T, value: T) -> T {
    if value < min {
        min
    } else if value > max {
        max
    } else {
        value
    }
}

/// Whether `a` and `b` are equal within [`EPSILON`]
pub fn equals(a: f64, b: f64) -> bool {
    a == b || (a - b).abs() < EPSILON
}

/// Whether `a` exceeds `b` by more than [`EPSILON`]
pub fn bigger_than(a: f64, b: f64) -> bool {
    (a - b) > EPSILON
}

/// Whether `a` is below `b` by more than [`EPSILON`]
pub fn less_than(a: f64, b: f64) -> bool {
    (b - a) > EPSILON
}
