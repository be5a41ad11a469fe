//! Multi-objective ALNS solver.
//!
//! Each generation every parent yields one child through an adaptively
//! selected operator; parents and children are merged, truncated by
//! non-dominated rank and crowding distance, and fed to the external
//! archive whose hypervolume is recorded.
//!
//! # References
//!
//! - Ropke & Pisinger (2006), "An Adaptive Large Neighborhood Search Heuristic
//!   for the Pickup and Delivery Problem with Time Windows"
//! - Deb et al. (2002), "A Fast and Elitist Multiobjective Genetic Algorithm: NSGA-II"

mod config;
mod runner;

pub use config::SolverConfig;
pub use runner::{SolveResult, SolverRunner};
