//! Null-propagating arithmetic used by every calculator.
//!
//! Absence is explicit: any missing operand, zero denominator, or non-finite
//! intermediate comes back as `None`. Nothing in here produces NaN or
//! infinities.


/// Upper bound for `clamp_round` precision; beyond this `10^d` stops being
/// exactly representable.
pub const MAX_DECIMALS: u32 = 12;

/// `numerator / denominator`, or `None` if either is missing or the
/// denominator is zero.
pub fn safe_div(numerator: Option<f64>, denominator: Option<f64>) -> Option<f64> {
    let (n, d) = (numerator?, denominator?);
    if d == 0.0 {
        return None;
    }
    finite(Some(n / d))
}

/// Round half away from zero to `decimals` places (clamped to
/// [`MAX_DECIMALS`]).
pub fn clamp_round(value: Option<f64>, decimals: u32) -> Option<f64> {
    let v = finite(value)?;
    let factor = 10f64.powi(decimals.min(MAX_DECIMALS) as i32);
    let rounded = (v * factor).round() / factor;
    // -0.0 serializes as "-0.0"
    Some(if rounded == 0.0 { 0.0 } else { rounded })
}

/// Drop NaN and infinities.
pub fn finite(value: Option<f64>) -> Option<f64> {
    value.filter(|v| v.is_finite())
}

pub fn opt_add(a: Option<f64>, b: Option<f64>) -> Option<f64> {
    Some(a? + b?)
}

pub fn opt_sub(a: Option<f64>, b: Option<f64>) -> Option<f64> {
    Some(a? - b?)
}

pub fn opt_mul(a: Option<f64>, factor: f64) -> Option<f64> {
    finite(a.map(|v| v * factor))
}

/// Widen a nullable count for arithmetic.
pub fn count(value: Option<u32>) -> Option<f64> {
    value.map(f64::from)
}
