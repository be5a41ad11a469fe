//! Drone routes.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// One stop of a route.
///
/// `task` indexes into [`Instance::tasks`](super::Instance::tasks).
/// `arrival` is written by [`schedule::propagate`](crate::schedule::propagate)
/// and is stale after any reordering until the route is propagated again.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Visit {
    pub task: usize,
    /// Extra dwell time after service before departing (h).
    pub wait: f64,
    /// Arrival time at the task (h).
    pub arrival: f64,
}

impl Visit {
    pub fn new(task: usize) -> Self {
        Self {
            task,
            wait: 0.0,
            arrival: 0.0,
        }
    }
}

/// Ordered task sequence flown by one drone slot.
///
/// Routes are value types: cloning an [`Individual`](super::Individual)
/// deep-copies its routes, so two individuals never share one.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Route {
    pub visits: Vec<Visit>,
}

impl Route {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a route visiting `tasks` in order with no extra waiting.
    pub fn from_tasks<I: IntoIterator<Item = usize>>(tasks: I) -> Self {
        Self {
            visits: tasks.into_iter().map(Visit::new).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.visits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.visits.is_empty()
    }

    /// Task indices in visiting order.
    pub fn tasks(&self) -> impl Iterator<Item = usize> + '_ {
        self.visits.iter().map(|v| v.task)
    }
}
