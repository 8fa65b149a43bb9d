//! Convenient prelude: import the most commonly used types and functions.
//!
//! Bring this into scope with:
//!
//! ```rust
//! use eulercmp::prelude::*;
//! ```
//!
//! Re-exports included:
//! - Core types: `SimulationParams`, `SimulationRun`, `StepRecord`,
//!   `ErrorStats`, `Error`.
//! - Pipeline functions: `simulate`, `euler`, `exact`.
//! - Rendering: the `report` module and the two plot functions.

pub use crate::{
    Error, ErrorStats, Float, SimulationParams, SimulationRun, StepRecord,
    euler, exact, report, simulate,
};
pub use crate::plot::{plot_comparison, plot_error_steps};
