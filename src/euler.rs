//! Fixed-step explicit (forward) Euler stepper.

use crate::Float;

/// Integrate `dy/dt = k*y` from `t_start` to `t_end` with the explicit Euler
/// update `y_{n+1} = y_n + h * (k * y_n)`.
///
/// Produces exactly `N + 1` points where `N = trunc((t_end - t_start)/h)`.
/// If the interval is not an exact multiple of `h` the sequence truncates:
/// the last abscissa is the largest `t_start + n*h <= t_end` and no shortened
/// final step is taken. Abscissae are computed from the step index rather
/// than accumulated, so they are strictly increasing for any `h > 0`.
///
/// The caller is responsible for parameter validation (see
/// [`crate::SimulationParams::validate`]); [`crate::simulate`] performs it
/// before calling here. The update itself is a deterministic single pass with
/// no error control, so divergence or overflow to infinity simply propagates
/// through the remaining steps.
pub fn euler(k: Float, y0: Float, t_start: Float, t_end: Float, h: Float) -> Vec<(Float, Float)> {
    let n_steps = ((t_end - t_start) / h) as usize;

    let mut points = Vec::with_capacity(n_steps + 1);
    let mut y = y0;
    points.push((t_start, y));

    for n in 0..n_steps {
        // dy/dt = k*y evaluated at the left endpoint of the step
        y += h * (k * y);
        let t = t_start + (n + 1) as Float * h;
        points.push((t, y));
    }

    points
}
