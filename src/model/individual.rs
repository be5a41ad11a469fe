//! Candidate routing plans.

use super::route::Route;
use crate::pareto::dominates;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A complete routing plan: one [`Route`] per fleet slot.
///
/// # Objectives
///
/// Both entries of `obj` are minimized:
/// - `obj[0]` = f1, blended flight distance and active-drone count
/// - `obj[1]` = f2, **negated** total customer satisfaction
///
/// `obj` must be recomputed with [`objective::evaluate`](crate::objective::evaluate)
/// whenever `routes` change. `rank` and `crowding_distance` describe the
/// individual's position in the last sorted collection it took part in;
/// `rank == 0` means it has not been ranked yet and front 0 has rank 1.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Individual {
    pub routes: Vec<Route>,
    pub obj: [f64; 2],
    pub rank: usize,
    pub crowding_distance: f64,
}

impl Individual {
    /// Creates an unevaluated individual.
    pub fn new(routes: Vec<Route>) -> Self {
        Self {
            routes,
            obj: [f64::INFINITY, f64::INFINITY],
            rank: 0,
            crowding_distance: 0.0,
        }
    }

    /// Cost objective f1.
    pub fn cost(&self) -> f64 {
        self.obj[0]
    }

    /// Total satisfaction (`-obj[1]`).
    pub fn satisfaction(&self) -> f64 {
        -self.obj[1]
    }

    /// Number of non-empty routes.
    pub fn active_drones(&self) -> usize {
        self.routes.iter().filter(|r| !r.is_empty()).count()
    }

    /// Total number of visits across all routes.
    pub fn visit_count(&self) -> usize {
        self.routes.iter().map(Route::len).sum()
    }

    /// Returns `true` if this individual Pareto-dominates `other`.
    pub fn dominates(&self, other: &Individual) -> bool {
        dominates(&self.obj, &other.obj)
    }

    /// Returns `true` if every task index in `0..task_count` is visited
    /// exactly once across all routes.
    pub fn is_partition_of(&self, task_count: usize) -> bool {
        let mut seen = vec![false; task_count];
        for task in self.routes.iter().flat_map(Route::tasks) {
            match seen.get_mut(task) {
                Some(flag) if !*flag => *flag = true,
                _ => return false,
            }
        }
        seen.into_iter().all(|s| s)
    }

    /// Task indices of every route, in visiting order.
    pub fn task_sequences(&self) -> Vec<Vec<usize>> {
        self.routes.iter().map(|r| r.tasks().collect()).collect()
    }
}
