//! Problem instances and fleet layout.

use super::drone::DroneModel;
use super::task::{Location, Task};
use crate::error::SolveError;
use std::collections::HashSet;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A launch and return point for drones.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Depot {
    pub id: usize,
    pub location: Location,
}

impl Depot {
    pub fn new(id: usize, location: Location) -> Self {
        Self { id, location }
    }
}

/// A routing instance: tasks, depots and the fleet.
///
/// # Fleet layout
///
/// Every depot launches `drones_per_depot` drones. Fleet slot `k` belongs to
/// depot group `k / drones_per_depot`. An instance without depots still has
/// one group of `drones_per_depot` slots, with no launch leg.
///
/// # Examples
///
/// ```
/// use u_dronepath::model::{DemandType, Depot, Instance, Location, Task, TimeWindow};
///
/// let tasks = vec![
///     Task::new(1, Location::new(1.0, 2.0), DemandType::DeliveryOnly, 1.0,
///               TimeWindow::with_tolerance(0.5, 2.0, 0.2)),
/// ];
/// let depots = vec![Depot::new(0, Location::new(0.0, 0.0))];
/// let instance = Instance::new(tasks, depots).with_drones_per_depot(3);
/// assert!(instance.validate().is_ok());
/// assert_eq!(instance.fleet_size(), 3);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Instance {
    pub tasks: Vec<Task>,
    pub depots: Vec<Depot>,
    pub drone: DroneModel,
    pub drones_per_depot: usize,
    /// Launch time of every drone (h).
    pub departure_time: f64,
}

impl Instance {
    pub fn new(tasks: Vec<Task>, depots: Vec<Depot>) -> Self {
        Self {
            tasks,
            depots,
            drone: DroneModel::default(),
            drones_per_depot: 2,
            departure_time: 0.0,
        }
    }

    pub fn with_drone(mut self, drone: DroneModel) -> Self {
        self.drone = drone;
        self
    }

    pub fn with_drones_per_depot(mut self, n: usize) -> Self {
        self.drones_per_depot = n;
        self
    }

    pub fn with_departure_time(mut self, hours: f64) -> Self {
        self.departure_time = hours;
        self
    }

    /// Checks that the instance can be searched.
    pub fn validate(&self) -> Result<(), SolveError> {
        if self.tasks.is_empty() {
            return Err(SolveError::EmptyInstance);
        }
        if self.drones_per_depot == 0 {
            return Err(SolveError::InvalidConfig(
                "drones_per_depot must be positive".into(),
            ));
        }
        let mut ids = HashSet::with_capacity(self.tasks.len());
        for task in &self.tasks {
            if !task.window.is_valid() {
                let w = task.window;
                return Err(SolveError::InvalidTimeWindow {
                    task: task.id,
                    w_e: w.earliest,
                    w_a: w.start,
                    w_b: w.end,
                    w_l: w.latest,
                });
            }
            if !ids.insert(task.id) {
                return Err(SolveError::DuplicateTask(task.id));
            }
        }
        Ok(())
    }

    /// Total number of drone slots (routes per individual).
    pub fn fleet_size(&self) -> usize {
        self.depots.len().max(1) * self.drones_per_depot
    }

    /// Depot group of fleet slot `slot`.
    pub fn group_of(&self, slot: usize) -> usize {
        slot / self.drones_per_depot.max(1)
    }

    /// Depot that fleet slot `slot` launches from, if any.
    pub fn depot_of(&self, slot: usize) -> Option<&Depot> {
        self.depots.get(self.group_of(slot))
    }

    /// Slots other than `slot` that are in the same depot group
    /// (`same_group == true`) or in a different one.
    pub fn partners(&self, slot: usize, same_group: bool) -> Vec<usize> {
        let group = self.group_of(slot);
        (0..self.fleet_size())
            .filter(|&s| s != slot && (self.group_of(s) == group) == same_group)
            .collect()
    }
}
