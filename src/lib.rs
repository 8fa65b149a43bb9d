//! A library for comparing the closed-form solution of the exponential growth
//! model `dy/dt = k*y`, `y(t_start) = y0`, against a fixed-step explicit
//! (forward) Euler approximation over a bounded interval.
//!
//! The pipeline is linear: [`SimulationParams`] are validated, the Euler
//! sequence is generated, each abscissa is paired with the analytic value,
//! per-step errors and summary [`ErrorStats`] are computed, and the resulting
//! [`SimulationRun`] is handed to the [`report`] and [`plot`] modules.
//!
//! ```ignore
//! use eulercmp::prelude::*;
//!
//! let params = SimulationParams::builder()
//!     .k(1.5)
//!     .y0(100.0)
//!     .t_end(1.0)
//!     .h(0.2)
//!     .build();
//! let run = simulate(&params)?;
//! println!("{}", eulercmp::report::table(&run));
//! ```

mod analytic;
mod error;
mod euler;
mod params;
mod simulate;
mod solution;
mod stats;

pub mod plot;
pub mod prelude;
pub mod report;

pub use analytic::{curve, exact};
pub use error::Error;
pub use euler::euler;
pub use params::SimulationParams;
pub use simulate::simulate;
pub use solution::{SimulationRun, StepRecord};
pub use stats::ErrorStats;

// Prevent selecting two incompatible float precision features at once.
#[cfg(all(feature = "f32", feature = "f64"))]
compile_error!(
    "features 'f32' and 'f64' cannot both be enabled; pick exactly one Float precision feature"
);

/// Change this to f64 or f32 as desired.
#[cfg(feature = "f32")]
pub type Float = f32;
#[cfg(feature = "f64")]
pub type Float = f64;
