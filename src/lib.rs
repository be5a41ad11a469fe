//! Multi-objective drone routing with heterogeneous pickup and delivery.
//!
//! Searches for mutually non-dominated routing plans that assign tasks with
//! soft time windows to a multi-depot drone fleet, trading off:
//!
//! - **f1**: flight distance blended with the number of active drones
//!   (minimized)
//! - **f2**: total customer time-window satisfaction (maximized, stored
//!   negated)
//!
//! # Modules
//!
//! - [`model`]: tasks, depots, drones, routes and individuals
//! - [`schedule`]: arrival-time propagation along routes
//! - [`objective`]: f1/f2 evaluation
//! - [`operators`]: the six route moves
//! - [`alns`]: adaptive operator selection and offspring acceptance
//! - [`pareto`]: non-dominated sorting, crowding distance, elitism,
//!   external archive and hypervolume
//! - [`local_search`]: post-search refinement of archive members
//! - [`solver`]: configuration and the generation loop
//!
//! # Example
//!
//! ```
//! use u_dronepath::model::{DemandType, Depot, Instance, Location, Task, TimeWindow};
//! use u_dronepath::solver::{SolverConfig, SolverRunner};
//!
//! let tasks: Vec<Task> = (0..8)
//!     .map(|i| {
//!         let start = 0.1 * i as f64;
//!         Task::new(
//!             i,
//!             Location::new((i % 4) as f64 * 3.0, (i / 4) as f64 * 3.0),
//!             DemandType::DeliveryOnly,
//!             0.5,
//!             TimeWindow::with_tolerance(start, start + 0.5, 0.2),
//!         )
//!     })
//!     .collect();
//! let instance = Instance::new(tasks, vec![Depot::new(0, Location::new(4.5, 1.5))]);
//! let config = SolverConfig::default()
//!     .with_max_iterations(20)
//!     .with_population_size(10)
//!     .with_seed(1);
//!
//! let result = SolverRunner::run(&instance, &config).unwrap();
//! assert!(!result.archive.is_empty());
//! assert_eq!(result.hypervolume_history.len(), 20);
//! ```

pub mod alns;
pub mod error;
pub mod local_search;
pub mod model;
pub mod objective;
pub mod operators;
pub mod pareto;
pub mod schedule;
pub mod solver;

pub use error::SolveError;
