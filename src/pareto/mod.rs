//! Multi-objective selection machinery.
//!
//! All objectives are **minimized**.
//!
//! - [`non_dominated_sort`]: Fast non-dominated sorting
//! - [`crowding_distance`]: Crowding distance within one front
//! - [`select_survivors`]: Elitist truncation of parents + offspring
//! - [`Archive`]: External deduplicated Pareto archive
//! - [`hypervolume_2d`]: Convergence/diversity indicator
//!
//! # References
//!
//! - Deb et al. (2002), "A Fast and Elitist Multiobjective Genetic Algorithm: NSGA-II"
//! - IEEE Transactions on Evolutionary Computation, 6(2), 182-197

mod archive;
mod crowding;
mod dominance;
mod elitism;
mod hypervolume;
mod sort;

pub use archive::Archive;
pub use crowding::{assign_crowding, crowding_distance, RANGE_EPSILON};
pub use dominance::{dominance_cmp, dominates, Dominance};
pub use elitism::select_survivors;
pub use hypervolume::{archive_hypervolume, hypervolume_2d, HypervolumeConfig};
pub use sort::{non_dominated_sort, rank_population, NondominatedSortResult};
