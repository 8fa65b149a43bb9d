use eulercmp::prelude::*;

/// Reference configuration: k = 1.5, y0 = 100, t in [0, 1], h = 0.2.
pub fn reference_params() -> SimulationParams {
    SimulationParams::builder()
        .k(1.5)
        .y0(100.0)
        .t_start(0.0)
        .t_end(1.0)
        .h(0.2)
        .build()
}
