//! Summary error statistics over a step sequence

use crate::{Float, solution::StepRecord};

/// Aggregate error metrics over a full step sequence, step 0 included.
///
/// Relative values are stored as fractions; callers that want percentages
/// (the report does) multiply by 100. When the solutions overflow, infinite
/// absolute errors and `inf/inf` relative errors (NaN) flow through: the
/// maxima accumulate with [`Float::max`], which drops NaN operands, while the
/// means let NaN propagate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ErrorStats {
    pub max_abs: Float,
    pub mean_abs: Float,
    pub max_rel: Float,
    pub mean_rel: Float,
}

impl ErrorStats {
    /// Compute the four summary metrics over `steps`.
    ///
    /// An empty slice yields all-zero statistics; `simulate` never produces
    /// one (the initial record is always present).
    pub fn from_steps(steps: &[StepRecord]) -> Self {
        if steps.is_empty() {
            return Self { max_abs: 0.0, mean_abs: 0.0, max_rel: 0.0, mean_rel: 0.0 };
        }

        let len = steps.len() as Float;
        let mut max_abs: Float = 0.0;
        let mut sum_abs: Float = 0.0;
        let mut max_rel: Float = 0.0;
        let mut sum_rel: Float = 0.0;

        for step in steps {
            max_abs = max_abs.max(step.abs_error);
            sum_abs += step.abs_error;
            max_rel = max_rel.max(step.rel_error);
            sum_rel += step.rel_error;
        }

        Self {
            max_abs,
            mean_abs: sum_abs / len,
            max_rel,
            mean_rel: sum_rel / len,
        }
    }
}
