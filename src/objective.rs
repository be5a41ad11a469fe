//! Objective evaluation.
//!
//! - **f1** = `(sigma * distance + rho * active_drones) / cost_scale`
//! - **f2** = `-sum(satisfaction(arrival))`
//!
//! `distance` sums consecutive task-to-task legs inside each route. With
//! [`ObjectiveConfig::close_routes`] the depot-to-first and last-to-depot
//! legs are added as well. `cost_scale` only brings f1 to the magnitude of
//! f2 and carries no physical meaning.
//!
//! Arrival times are read from the visits as they are; run
//! [`schedule::propagate_all`](crate::schedule::propagate_all) first.

use crate::model::{Individual, Instance, Route};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Weights of the cost objective.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ObjectiveConfig {
    /// Weight of total flight distance (sigma).
    pub sigma: f64,
    /// Weight of the active drone count (rho).
    pub rho: f64,
    /// Divisor applied to the blended cost.
    pub cost_scale: f64,
    /// Count depot legs in the distance term.
    pub close_routes: bool,
}

impl Default for ObjectiveConfig {
    fn default() -> Self {
        Self {
            sigma: 0.5,
            rho: 0.5,
            cost_scale: 100.0,
            close_routes: false,
        }
    }
}

/// Flight distance of the route flown by `slot`.
pub fn route_distance(instance: &Instance, slot: usize, route: &Route, close_routes: bool) -> f64 {
    let location = |task: usize| instance.tasks[task].location;
    let inner: f64 = route
        .visits
        .windows(2)
        .map(|w| location(w[0].task).distance(&location(w[1].task)))
        .sum();

    if !close_routes || route.is_empty() {
        return inner;
    }
    match instance.depot_of(slot) {
        Some(depot) => {
            let first = location(route.visits[0].task);
            let last = location(route.visits[route.len() - 1].task);
            inner + depot.location.distance(&first) + last.distance(&depot.location)
        }
        None => inner,
    }
}

/// Unscaled cost: `sigma * distance + rho * active_drones`.
pub fn total_cost(instance: &Instance, config: &ObjectiveConfig, individual: &Individual) -> f64 {
    let distance: f64 = individual
        .routes
        .iter()
        .enumerate()
        .map(|(slot, route)| route_distance(instance, slot, route, config.close_routes))
        .sum();
    config.sigma * distance + config.rho * individual.active_drones() as f64
}

/// Satisfaction of a single route at its recorded arrival times.
pub fn route_satisfaction(instance: &Instance, route: &Route) -> f64 {
    route
        .visits
        .iter()
        .map(|v| instance.tasks[v.task].satisfaction(v.arrival))
        .sum()
}

/// Total satisfaction at the recorded arrival times.
pub fn total_satisfaction(instance: &Instance, individual: &Individual) -> f64 {
    individual
        .routes
        .iter()
        .map(|r| route_satisfaction(instance, r))
        .sum()
}

/// Writes `[f1, f2]` into `individual.obj`.
pub fn evaluate(instance: &Instance, config: &ObjectiveConfig, individual: &mut Individual) {
    let cost = total_cost(instance, config, individual);
    individual.obj = [
        cost / config.cost_scale,
        -total_satisfaction(instance, individual),
    ];
}
