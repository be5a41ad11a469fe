//! Error taxonomy for solver entry validation.
//!
//! Errors only surface before the search begins. Once an instance and a
//! configuration have been validated, every degenerate situation inside the
//! generation loop (short routes, zero objective ranges, a saturated archive)
//! is recovered locally.

use thiserror::Error;

/// Errors reported by [`SolverRunner::run`](crate::solver::SolverRunner::run),
/// [`Instance::validate`](crate::model::Instance::validate) and
/// [`SolverConfig::validate`](crate::solver::SolverConfig::validate).
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SolveError {
    /// The instance has no tasks to route.
    #[error("instance has no tasks")]
    EmptyInstance,

    /// A task violates `w_e <= w_a <= w_b <= w_l` or carries a non-finite bound.
    #[error("task {task} has an invalid time window: w_e={w_e}, w_a={w_a}, w_b={w_b}, w_l={w_l}")]
    InvalidTimeWindow {
        task: usize,
        w_e: f64,
        w_a: f64,
        w_b: f64,
        w_l: f64,
    },

    /// Two tasks share the same id.
    #[error("duplicate task id {0}")]
    DuplicateTask(usize),

    /// A configuration value is out of range.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        assert_eq!(SolveError::EmptyInstance.to_string(), "instance has no tasks");
        let err = SolveError::InvalidConfig("population_size must be positive".into());
        assert_eq!(
            err.to_string(),
            "invalid configuration: population_size must be positive"
        );
    }
}
