//! Errors for parameter validation and chart rendering

use crate::Float;

/// Validation and rendering errors returned by the crate's entry points.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    /// Step size must be positive and finite.
    #[error("step size h must be positive and finite (got {0})")]
    InvalidStepSize(Float),
    /// Interval bounds must be finite with `t_end >= t_start`.
    #[error("interval must satisfy t_end >= t_start with finite bounds (got [{0}, {1}])")]
    InvalidInterval(Float, Float),
    /// A scalar parameter was NaN or infinite.
    #[error("parameter {name} must be finite (got {value})")]
    NonFiniteParameter { name: &'static str, value: Float },
    /// The plotting backend failed while rendering a chart.
    #[error("failed to render chart: {0}")]
    Render(String),
}
