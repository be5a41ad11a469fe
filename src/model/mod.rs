//! Data model: tasks, depots, drones, routes and individuals.
//!
//! Routes reference tasks by index into [`Instance::tasks`], so the task
//! data itself is shared read-only while every [`Individual`] owns its own
//! routes and per-visit timing.

mod drone;
mod individual;
mod instance;
mod route;
mod task;

pub use drone::DroneModel;
pub use individual::Individual;
pub use instance::{Depot, Instance};
pub use route::{Route, Visit};
pub use task::{DemandType, Location, Task, TimeWindow};
