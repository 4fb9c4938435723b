/// Round a non-negative real to the nearest whole frame count, halves rounding up.
///
/// Negative and non-finite inputs collapse to zero.
pub(crate) fn round_frames(x: f64) -> u64 {
    if !x.is_finite() || x <= 0.0 {
        return 0;
    }
    (x + 0.5).floor() as u64
}

/// Floor of a non-negative frame quantity; negative and non-finite inputs collapse to zero.
pub(crate) fn floor_frames(x: f64) -> u64 {
    if !x.is_finite() || x <= 0.0 {
        return 0;
    }
    x.floor() as u64
}
