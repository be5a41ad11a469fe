//! Adaptive Pareto local search (APLS) over archive members.
//!
//! Two passes run on each route of each member independently:
//!
//! 1. **Distance bottleneck**: the visit reached by the longest incoming
//!    leg (from the depot for the first visit) is moved to the front of the
//!    route.
//! 2. **Wait adjustment**: for each adjacent pair, if the successor arrives
//!    before its desired window opens, the predecessor waits just long
//!    enough for the successor to arrive exactly at `w_a`.
//!
//! A rewrite is kept only if the member's objectives are not dominated by
//! its previous objectives and the route's satisfaction does not drop, so
//! refinement never makes a member worse. Members are only rewritten,
//! never removed; see [`Archive::refine`](crate::pareto::Archive::refine).

use crate::model::{Individual, Instance, Route};
use crate::objective::{self, route_satisfaction, ObjectiveConfig};
use crate::pareto::dominates;
use crate::schedule;
use tracing::trace;

/// Waits shorter than this are not applied.
const MIN_WAIT: f64 = 1e-9;

/// Index of the visit with the longest incoming leg, if the route has at
/// least two visits.
pub fn distance_bottleneck(instance: &Instance, slot: usize, route: &Route) -> Option<usize> {
    if route.len() < 2 {
        return None;
    }
    let mut prev = instance.depot_of(slot).map(|d| d.location);
    let mut best: Option<(usize, f64)> = None;
    for (i, visit) in route.visits.iter().enumerate() {
        let here = instance.tasks[visit.task].location;
        let leg = prev.map_or(0.0, |p| p.distance(&here));
        if best.is_none_or(|(_, d)| leg > d) {
            best = Some((i, leg));
        }
        prev = Some(here);
    }
    best.map(|(i, _)| i)
}

/// Moves the bottleneck visit to the front of a copy of `route`.
pub fn relocate_bottleneck(instance: &Instance, slot: usize, route: &Route) -> Route {
    let mut out = route.clone();
    if let Some(i) = distance_bottleneck(instance, slot, route) {
        let visit = out.visits.remove(i);
        out.visits.insert(0, visit);
    }
    out
}

/// Adds waiting on predecessors of early arrivals. `route` must be
/// propagated; the result is propagated too.
pub fn adjust_waits(instance: &Instance, slot: usize, route: &Route) -> Route {
    let mut out = route.clone();
    for i in 0..out.len().saturating_sub(1) {
        let next = out.visits[i + 1];
        let window = instance.tasks[next.task].window;
        let shift = window.start - next.arrival;
        if shift <= MIN_WAIT {
            continue;
        }

        let mut candidate = out.clone();
        candidate.visits[i].wait += shift;
        schedule::propagate(instance, slot, &mut candidate);
        if route_satisfaction(instance, &candidate) >= route_satisfaction(instance, &out) {
            out = candidate;
        }
    }
    out
}

/// Refines one individual in place. Returns `true` if it changed.
pub fn refine(instance: &Instance, config: &ObjectiveConfig, individual: &mut Individual) -> bool {
    let mut changed = false;

    for slot in 0..individual.routes.len() {
        let mut trial = individual.clone();
        trial.routes[slot] = relocate_bottleneck(instance, slot, &individual.routes[slot]);
        schedule::propagate(instance, slot, &mut trial.routes[slot]);
        trial.routes[slot] = adjust_waits(instance, slot, &trial.routes[slot]);
        objective::evaluate(instance, config, &mut trial);

        let satisfaction_kept = route_satisfaction(instance, &trial.routes[slot])
            >= route_satisfaction(instance, &individual.routes[slot]);
        if trial.routes[slot] != individual.routes[slot]
            && satisfaction_kept
            && !dominates(&individual.obj, &trial.obj)
        {
            trace!(slot, before = ?individual.obj, after = ?trial.obj, "local search improved route");
            trial.rank = individual.rank;
            trial.crowding_distance = individual.crowding_distance;
            *individual = trial;
            changed = true;
        }
    }
    changed
}
