//! Power-law step size adaptation.
//!
//! All helpers are direction-aware: a negative step size is treated as a
//! magnitude with a sign, and the sign of the reference step is preserved.

use crate::Float;

/// Error exponent used when shrinking a rejected step.
const SHRINK_EXPONENT: Float = 0.2;
/// Error exponent used when proposing the next step after an accepted one.
const GROW_EXPONENT: Float = 0.25;

/// Whichever of `a`, `b` is smaller in the direction of `a`.
pub(crate) fn min_mag(a: Float, b: Float) -> Float {
    if a > 0.0 { a.min(b) } else { a.max(b) }
}

/// Whichever of `a`, `b` is larger in the direction of `a`.
pub(crate) fn max_mag(a: Float, b: Float) -> Float {
    if a > 0.0 { a.max(b) } else { a.min(b) }
}

/// Clip `h` so that a step from `t` does not pass `t_limit`.
pub(crate) fn clip_to_limit(h: Float, t: Float, t_limit: Float) -> Float {
    min_mag(h, t_limit - t)
}

/// Retry step size after a rejection, never smaller than `h / max_decrease`.
pub(crate) fn shrink(h: Float, error: Float, tol: Float, safety: Float, max_decrease: Float) -> Float {
    let proposed = safety * h * (tol / error).powf(SHRINK_EXPONENT);
    max_mag(h / max_decrease, proposed)
}

/// Step size for the next call after taking step `h` with `error`.
///
/// Growth and shrinkage are bounded relative to the previously stored `dt`.
pub(crate) fn next_step(
    dt: Float,
    h: Float,
    error: Float,
    tol: Float,
    safety: Float,
    max_increase: Float,
    max_decrease: Float,
) -> Float {
    let proposed = safety * h * (tol / error).powf(GROW_EXPONENT);
    max_mag(dt / max_decrease, min_mag(dt * max_increase, proposed))
}

/// Clamp the magnitude of `h` into `[min, max]`, keeping its sign.
///
/// Without an upper bound the magnitude is still capped at `Float::MAX`.
pub(crate) fn clamp_mag(h: Float, min: Float, max: Option<Float>) -> Float {
    let mag = h.abs().min(max.unwrap_or(Float::MAX));
    mag.max(min).copysign(h)
}
