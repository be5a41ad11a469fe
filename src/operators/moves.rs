//! The six route moves.
//!
//! Every move takes its input routes by reference and returns fresh routes;
//! inputs are never modified. A route that is too short for a move comes
//! back unchanged.

use crate::model::{Instance, Route};
use rand::seq::index;
use rand::Rng;

/// o1: swaps two randomly chosen positions.
pub fn reorder<R: Rng>(route: &Route, rng: &mut R) -> Route {
    let mut out = route.clone();
    if out.len() < 2 {
        return out;
    }
    let picks = index::sample(rng, out.len(), 2);
    out.visits.swap(picks.index(0), picks.index(1));
    out
}

/// o2/o3: pops a random visit from `from` and inserts it at a random
/// position of `to`.
pub fn transfer<R: Rng>(from: &Route, to: &Route, rng: &mut R) -> (Route, Route) {
    let mut src = from.clone();
    let mut dst = to.clone();
    if src.is_empty() {
        return (src, dst);
    }
    let visit = src.visits.remove(rng.random_range(0..src.len()));
    let at = rng.random_range(0..=dst.len());
    dst.visits.insert(at, visit);
    (src, dst)
}

/// o4: appends every visit of `from` to `to`, leaving `from` empty.
pub fn consolidate(from: &Route, to: &Route) -> (Route, Route) {
    let mut dst = to.clone();
    dst.visits.extend(from.visits.iter().copied());
    (Route::new(), dst)
}

/// o5: orders visits by ascending desired-window end (`w_b`).
///
/// The sort is stable, so tasks with equal `w_b` keep their order.
pub fn window_greedy(instance: &Instance, route: &Route) -> Route {
    let mut out = route.clone();
    out.visits.sort_by(|a, b| {
        let wa = instance.tasks[a.task].window.end;
        let wb = instance.tasks[b.task].window.end;
        wa.total_cmp(&wb)
    });
    out
}

/// o6: removes a random visit and reinserts it where it adds the least
/// intra-route distance.
pub fn reposition<R: Rng>(instance: &Instance, route: &Route, rng: &mut R) -> Route {
    let mut out = route.clone();
    if out.len() < 2 {
        return out;
    }
    let visit = out.visits.remove(rng.random_range(0..out.len()));
    let at = cheapest_position(instance, &out, visit.task);
    out.visits.insert(at, visit);
    out
}

/// Insertion index in `route` minimizing the added distance for `task`.
pub(crate) fn cheapest_position(instance: &Instance, route: &Route, task: usize) -> usize {
    let loc = |t: usize| instance.tasks[t].location;
    let target = loc(task);
    let n = route.len();

    let mut best = 0;
    let mut best_delta = f64::INFINITY;
    for at in 0..=n {
        let prev = (at > 0).then(|| loc(route.visits[at - 1].task));
        let next = (at < n).then(|| loc(route.visits[at].task));
        let delta = match (prev, next) {
            (Some(p), Some(q)) => p.distance(&target) + target.distance(&q) - p.distance(&q),
            (Some(p), None) => p.distance(&target),
            (None, Some(q)) => target.distance(&q),
            (None, None) => 0.0,
        };
        if delta < best_delta {
            best_delta = delta;
            best = at;
        }
    }
    best
}
