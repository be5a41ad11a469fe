//! Route timing propagation.
//!
//! Walks each route from its depot, accumulating flight time under the
//! current payload, service time and any extra waiting, and stores the
//! resulting arrival time on every [`Visit`](crate::model::Visit).
//!
//! # Payload model
//!
//! - `DeliveryOnly` parcels are loaded at the depot and dropped at the task.
//! - `PickupOnly` parcels are collected at the task and carried onward.
//! - `IntraCityPickupDelivery` parcels change hands at the stop itself.

use crate::model::{DemandType, Individual, Instance, Route, Task};

/// Load carried out of the depot: the sum of delivery weights on the route.
pub fn initial_payload(instance: &Instance, route: &Route) -> f64 {
    route
        .tasks()
        .map(|t| &instance.tasks[t])
        .filter(|t| t.demand == DemandType::DeliveryOnly)
        .map(|t| t.weight)
        .sum()
}

fn payload_after(payload: f64, task: &Task) -> f64 {
    match task.demand {
        DemandType::DeliveryOnly => (payload - task.weight).max(0.0),
        DemandType::PickupOnly => payload + task.weight,
        DemandType::IntraCityPickupDelivery => payload,
    }
}

/// Largest load carried on any leg of the route.
pub fn peak_payload(instance: &Instance, route: &Route) -> f64 {
    let mut payload = initial_payload(instance, route);
    let mut peak = payload;
    for task in route.tasks() {
        payload = payload_after(payload, &instance.tasks[task]);
        peak = peak.max(payload);
    }
    peak
}

/// Returns `true` if the route carries more than the drone's max payload.
pub fn is_overloaded(instance: &Instance, route: &Route) -> bool {
    peak_payload(instance, route) > instance.drone.max_payload
}

/// Recomputes arrival times of the route flown by fleet slot `slot`.
pub fn propagate(instance: &Instance, slot: usize, route: &mut Route) {
    let drone = &instance.drone;
    let mut prev = instance.depot_of(slot).map(|d| d.location);
    let mut payload = initial_payload(instance, route);
    let mut clock = instance.departure_time;

    for visit in &mut route.visits {
        let task = &instance.tasks[visit.task];
        let leg = prev.map_or(0.0, |p| p.distance(&task.location));
        clock += drone.travel_time(leg, payload);
        visit.arrival = clock;

        payload = payload_after(payload, task);
        clock += drone.service_time + visit.wait;
        prev = Some(task.location);
    }
}

/// Recomputes arrival times on every route of `individual`.
pub fn propagate_all(instance: &Instance, individual: &mut Individual) {
    for (slot, route) in individual.routes.iter_mut().enumerate() {
        propagate(instance, slot, route);
    }
}
