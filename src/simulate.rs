//! Entry point assembling a full comparison run.

use crate::{
    analytic::exact,
    error::Error,
    euler::euler,
    params::SimulationParams,
    solution::{SimulationRun, StepRecord},
    stats::ErrorStats,
};

/// Run the full comparison pipeline for one parameter set.
///
/// Validates the parameters, generates the Euler sequence, evaluates the
/// closed form at every abscissa, derives per-step absolute and relative
/// errors, and aggregates the summary statistics. Fails fast on invalid
/// parameters; no partial sequence is ever returned.
///
/// The relative error is guarded at `y_exact == 0` and defined as 0 there,
/// so division by zero never surfaces to the caller.
pub fn simulate(params: &SimulationParams) -> Result<SimulationRun, Error> {
    params.validate()?;

    let approx = euler(params.k, params.y0, params.t_start, params.t_end, params.h);

    let steps: Vec<StepRecord> = approx
        .into_iter()
        .enumerate()
        .map(|(n, (t, y_euler))| {
            // The initial condition sits at t_start, so the closed form takes
            // the elapsed time. n = 0 gives exactly zero and hence y0.
            let y_exact = exact(params.k, params.y0, t - params.t_start);
            let abs_error = (y_exact - y_euler).abs();
            let rel_error = if y_exact == 0.0 { 0.0 } else { abs_error / y_exact.abs() };
            StepRecord { n, t, y_euler, y_exact, abs_error, rel_error }
        })
        .collect();

    let stats = ErrorStats::from_steps(&steps);

    Ok(SimulationRun { params: *params, steps, stats })
}
