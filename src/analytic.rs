//! Closed-form solution of the exponential growth model

use crate::Float;

/// Analytic solution `y(t) = y0 * e^(k*t)`, obtained by separation of
/// variables.
///
/// Exact up to the floating-point rounding of `exp`; in particular
/// `exact(k, y0, 0.0) == y0` bit-exactly for any finite `k`. Overflow to
/// infinity for large `k*t` is a valid result, not an error.
pub fn exact(k: Float, y0: Float, t: Float) -> Float {
    y0 * (k * t).exp()
}

/// Sample the solution of `dy/dt = k*y`, `y(t_start) = y0`, at `n` evenly
/// spaced points over `[t_start, t_end]`, endpoints included.
///
/// The closed form is evaluated at the elapsed time, so the first sample is
/// `(t_start, y0)` exactly. Used for the smooth reference curve in the
/// charts; `n < 2` collapses to that single initial sample.
pub fn curve(k: Float, y0: Float, t_start: Float, t_end: Float, n: usize) -> Vec<(Float, Float)> {
    if n < 2 {
        return vec![(t_start, y0)];
    }
    let dt = (t_end - t_start) / (n - 1) as Float;
    (0..n)
        .map(|i| {
            let elapsed = i as Float * dt;
            (t_start + elapsed, exact(k, y0, elapsed))
        })
        .collect()
}
