//! Immutable record types produced by a comparison run.

use crate::{Float, params::SimulationParams, stats::ErrorStats};

/// One row of the comparison: both solutions and their disagreement at a
/// single abscissa.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StepRecord {
    /// Step index, starting at 0.
    pub n: usize,
    /// Abscissa `t_start + n*h`.
    pub t: Float,
    /// Euler-approximated value at `t`.
    pub y_euler: Float,
    /// Analytic value at `t`.
    pub y_exact: Float,
    /// `|y_exact - y_euler|`.
    pub abs_error: Float,
    /// `abs_error / |y_exact|` as a fraction, 0 when `y_exact == 0`.
    pub rel_error: Float,
}

/// Full output of one comparison run: the input parameters, the ordered step
/// sequence, and the aggregated error statistics.
///
/// Constructed once by [`crate::simulate`] and never mutated afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct SimulationRun {
    pub params: SimulationParams,
    pub steps: Vec<StepRecord>,
    pub stats: ErrorStats,
}

impl SimulationRun {
    /// Number of records in the sequence (step count + 1).
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// The record at the final abscissa.
    ///
    /// The sequence always holds at least the initial record, so this only
    /// returns `None` for a run that was constructed by hand with no steps.
    pub fn final_step(&self) -> Option<&StepRecord> {
        self.steps.last()
    }

    /// Iterate over the stored records in abscissa order.
    pub fn iter(&self) -> std::slice::Iter<'_, StepRecord> {
        self.steps.iter()
    }
}

impl<'a> IntoIterator for &'a SimulationRun {
    type Item = &'a StepRecord;
    type IntoIter = std::slice::Iter<'a, StepRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.steps.iter()
    }
}
