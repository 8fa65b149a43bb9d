//! Input parameters for a comparison run

use bon::Builder;

use crate::{Float, error::Error};

#[derive(Builder, Debug, Clone, Copy, PartialEq)]
/// Parameters of the exponential growth problem and its Euler discretization.
///
/// Built once per run; [`crate::simulate`] validates the whole set before any
/// stepping begins, so an invalid combination never produces a partial
/// sequence.
pub struct SimulationParams {
    /// Growth-rate constant of `dy/dt = k*y`. Negative values model decay.
    pub k: Float,
    /// Initial condition `y(t_start)`.
    pub y0: Float,
    /// Left end of the integration interval.
    #[builder(default = 0.0)]
    pub t_start: Float,
    /// Right end of the integration interval.
    pub t_end: Float,
    /// Step size for the Euler method. Must be positive.
    pub h: Float,
}

impl SimulationParams {
    /// Check every parameter and fail fast on the first violation.
    ///
    /// The step count itself is derived by [`crate::euler`], which truncates
    /// `(t_end - t_start)/h` toward zero.
    pub fn validate(&self) -> Result<(), Error> {
        if !self.k.is_finite() {
            return Err(Error::NonFiniteParameter { name: "k", value: self.k });
        }
        if !self.y0.is_finite() {
            return Err(Error::NonFiniteParameter { name: "y0", value: self.y0 });
        }
        if !self.t_start.is_finite() || !self.t_end.is_finite() || self.t_end < self.t_start {
            return Err(Error::InvalidInterval(self.t_start, self.t_end));
        }
        if !self.h.is_finite() || self.h <= 0.0 {
            return Err(Error::InvalidStepSize(self.h));
        }
        Ok(())
    }
}
