//! Solver configuration.

use crate::error::SolveError;
use crate::objective::ObjectiveConfig;
use crate::pareto::HypervolumeConfig;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Configuration for the multi-objective ALNS solver.
///
/// # Scoring
///
/// Each offspring is judged against its parent:
/// - `score_improved` (theta_1): better on at least one objective
/// - `score_explored` (theta_2): admitted by the exploration draw
///
/// Scores accumulate per operator over `weight_update_period` generations,
/// then weights are smoothed with `reaction_factor` (epsilon):
/// `w = (1 - eps) * w + eps * score / uses`.
///
/// # Examples
///
/// ```
/// use u_dronepath::solver::SolverConfig;
///
/// let config = SolverConfig::default()
///     .with_max_iterations(200)
///     .with_population_size(40)
///     .with_objective_weights(0.7, 0.3)
///     .with_close_routes(true)
///     .with_seed(42);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SolverConfig {
    /// Number of generations (ITER_MAX).
    pub max_iterations: usize,

    /// Individuals per generation (POP_SIZE).
    pub population_size: usize,

    /// Weight smoothing coefficient (epsilon), in [0, 1].
    pub reaction_factor: f64,

    /// Reward for an offspring that improves an objective (theta_1).
    pub score_improved: f64,

    /// Reward for an offspring admitted by exploration (theta_2).
    pub score_explored: f64,

    /// Lower bound applied to updated weights.
    pub min_weight: f64,

    /// Generations between weight updates.
    pub weight_update_period: usize,

    /// Probability of admitting an offspring that improves nothing.
    pub exploration_probability: f64,

    /// Cost objective weights and scaling.
    pub objective: ObjectiveConfig,

    /// Maximum number of archive members.
    pub archive_capacity: usize,

    /// Decimals used to detect duplicate archive members.
    pub archive_precision: u32,

    /// Hypervolume normalization.
    pub hypervolume: HypervolumeConfig,

    /// Run local search on the final archive.
    pub apply_local_search: bool,

    /// Generate offspring on the rayon thread pool.
    pub parallel: bool,

    /// Random seed for reproducibility.
    ///
    /// `None` uses a random seed.
    pub seed: Option<u64>,

    /// Optional wall-clock time limit in milliseconds.
    ///
    /// Checked at the start of each generation; the run returns the archive
    /// of the last completed generation.
    pub time_limit_ms: Option<u64>,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            max_iterations: 1000,
            population_size: 100,
            reaction_factor: 0.4,
            score_improved: 0.8,
            score_explored: 0.4,
            min_weight: 0.0,
            weight_update_period: 10,
            exploration_probability: 0.2,
            objective: ObjectiveConfig::default(),
            archive_capacity: 500,
            archive_precision: 2,
            hypervolume: HypervolumeConfig::default(),
            apply_local_search: true,
            parallel: true,
            seed: None,
            time_limit_ms: None,
        }
    }
}

impl SolverConfig {
    pub fn with_max_iterations(mut self, n: usize) -> Self {
        self.max_iterations = n;
        self
    }

    pub fn with_population_size(mut self, n: usize) -> Self {
        self.population_size = n;
        self
    }

    pub fn with_reaction_factor(mut self, epsilon: f64) -> Self {
        self.reaction_factor = epsilon;
        self
    }

    pub fn with_scores(mut self, improved: f64, explored: f64) -> Self {
        self.score_improved = improved;
        self.score_explored = explored;
        self
    }

    pub fn with_min_weight(mut self, w: f64) -> Self {
        self.min_weight = w.max(0.0);
        self
    }

    pub fn with_weight_update_period(mut self, n: usize) -> Self {
        self.weight_update_period = n.max(1);
        self
    }

    pub fn with_exploration_probability(mut self, p: f64) -> Self {
        self.exploration_probability = p;
        self
    }

    /// Sets sigma (distance) and rho (active drones) of the cost objective.
    pub fn with_objective_weights(mut self, sigma: f64, rho: f64) -> Self {
        self.objective.sigma = sigma;
        self.objective.rho = rho;
        self
    }

    pub fn with_cost_scale(mut self, scale: f64) -> Self {
        self.objective.cost_scale = scale;
        self
    }

    /// Counts depot-to-first and last-to-depot legs in the cost objective.
    pub fn with_close_routes(mut self, close: bool) -> Self {
        self.objective.close_routes = close;
        self
    }

    pub fn with_archive(mut self, capacity: usize, precision: u32) -> Self {
        self.archive_capacity = capacity;
        self.archive_precision = precision;
        self
    }

    pub fn with_hypervolume(mut self, hv: HypervolumeConfig) -> Self {
        self.hypervolume = hv;
        self
    }

    pub fn with_local_search(mut self, enabled: bool) -> Self {
        self.apply_local_search = enabled;
        self
    }

    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_time_limit_ms(mut self, ms: u64) -> Self {
        self.time_limit_ms = Some(ms);
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), SolveError> {
        let invalid = |msg: String| Err(SolveError::InvalidConfig(msg));

        if self.max_iterations == 0 {
            return invalid("max_iterations must be positive".into());
        }
        if self.population_size == 0 {
            return invalid("population_size must be positive".into());
        }
        if !(0.0..=1.0).contains(&self.reaction_factor) {
            return invalid(format!(
                "reaction_factor must be in [0, 1], got {}",
                self.reaction_factor
            ));
        }
        if !(0.0..=1.0).contains(&self.exploration_probability) {
            return invalid(format!(
                "exploration_probability must be in [0, 1], got {}",
                self.exploration_probability
            ));
        }
        if !is_non_negative(self.score_improved) || !is_non_negative(self.score_explored) {
            return invalid(format!(
                "operator scores must be finite and non-negative, got {} and {}",
                self.score_improved, self.score_explored
            ));
        }
        if !is_non_negative(self.min_weight) {
            return invalid(format!(
                "min_weight must be finite and non-negative, got {}",
                self.min_weight
            ));
        }
        if self.weight_update_period == 0 {
            return invalid("weight_update_period must be positive".into());
        }
        if !is_positive(self.objective.cost_scale) {
            return invalid("cost_scale must be positive".into());
        }
        if self.archive_capacity == 0 {
            return invalid("archive_capacity must be positive".into());
        }
        if !is_positive(self.hypervolume.cost_scale) || !is_positive(self.hypervolume.satisfaction_scale) {
            return invalid("hypervolume scales must be positive".into());
        }
        Ok(())
    }
}

fn is_positive(x: f64) -> bool {
    x.is_finite() && x > 0.0
}

fn is_non_negative(x: f64) -> bool {
    x.is_finite() && x >= 0.0
}
