//! Generation loop.
//!
//! [`SolverRunner`] orchestrates one solve:
//! initialize → (breed → merge → elitism → archive → reweight → hypervolume)
//! × generations → local search on the archive.

use super::config::SolverConfig;
use crate::alns::{judge, Acceptance, AdaptiveSelector};
use crate::error::SolveError;
use crate::local_search;
use crate::model::{Individual, Instance, Route, Visit};
use crate::objective;
use crate::operators::Operator;
use crate::pareto::{archive_hypervolume, select_survivors, Archive};
use crate::schedule;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, info, trace};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Result of a solve.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SolveResult {
    /// Non-dominated routing plans, in archive order.
    pub archive: Vec<Individual>,

    /// Archive hypervolume after each completed generation.
    pub hypervolume_history: Vec<f64>,

    /// Archive hypervolume after local search.
    pub final_hypervolume: f64,

    /// Number of completed generations.
    pub generations: usize,

    /// Whether the run stopped on cancellation or time limit.
    pub cancelled: bool,

    /// Final operator weights, in [`Operator::ALL`] order.
    pub operator_weights: Vec<f64>,

    /// Archive members rewritten by local search.
    pub refined: usize,
}

/// A child produced for one parent slot.
struct Offspring {
    individual: Individual,
    operator: usize,
    outcome: Acceptance,
}

/// Executes the multi-objective ALNS.
///
/// # Usage
///
/// ```ignore
/// let instance = Instance::new(tasks, depots);
/// let config = SolverConfig::default().with_seed(42);
/// let result = SolverRunner::run(&instance, &config)?;
/// for plan in &result.archive {
///     println!("f1={:.3} satisfaction={:.2}", plan.cost(), plan.satisfaction());
/// }
/// ```
pub struct SolverRunner;

impl SolverRunner {
    /// Runs the solver.
    ///
    /// Fails only if the instance or the configuration is invalid; a
    /// validated run always returns a non-empty archive.
    pub fn run(instance: &Instance, config: &SolverConfig) -> Result<SolveResult, SolveError> {
        Self::run_with_cancel(instance, config, None)
    }

    /// Runs the solver with an optional cancellation token.
    ///
    /// If `cancel` is `Some` and the flag is set to `true`, the solver
    /// stops before the next generation and returns the archive built so
    /// far.
    pub fn run_with_cancel(
        instance: &Instance,
        config: &SolverConfig,
        cancel: Option<Arc<AtomicBool>>,
    ) -> Result<SolveResult, SolveError> {
        config.validate()?;
        instance.validate()?;

        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::seed_from_u64(rand::random()),
        };
        let start = Instant::now();

        info!(
            tasks = instance.tasks.len(),
            depots = instance.depots.len(),
            fleet = instance.fleet_size(),
            population = config.population_size,
            iterations = config.max_iterations,
            "starting multi-objective ALNS"
        );

        // 1. Initialize
        let mut population: Vec<Individual> = (0..config.population_size)
            .map(|_| initial_individual(instance, config, &mut rng))
            .collect();

        let mut archive = Archive::new(config.archive_capacity, config.archive_precision);
        archive.update(&population);

        let mut selector = AdaptiveSelector::new(Operator::ALL.len());
        let mut hypervolume_history = Vec::with_capacity(config.max_iterations);
        let mut generations = 0usize;
        let mut cancelled = false;

        // 2. Generation loop
        for gen in 0..config.max_iterations {
            if let Some(ref flag) = cancel {
                if flag.load(Ordering::Relaxed) {
                    cancelled = true;
                    break;
                }
            }
            if let Some(limit) = config.time_limit_ms {
                if start.elapsed().as_millis() as u64 >= limit {
                    cancelled = true;
                    break;
                }
            }

            let offspring = breed_generation(instance, config, &selector, &population, &mut rng);

            let mut combined = population;
            combined.reserve(offspring.len());
            for child in offspring {
                let reward = match child.outcome {
                    Acceptance::Improved => config.score_improved,
                    Acceptance::Explored => config.score_explored,
                    Acceptance::Rejected => 0.0,
                };
                selector.record(child.operator, reward);
                combined.push(child.individual);
            }

            population = select_survivors(combined, config.population_size);
            archive.update(&population);

            if (gen + 1) % config.weight_update_period == 0 {
                selector.update_weights(config.reaction_factor, config.min_weight);
                debug!(generation = gen + 1, weights = ?selector.weights(), "operator weights updated");
            }

            let hv = archive_hypervolume(archive.members(), &config.hypervolume);
            hypervolume_history.push(hv);
            generations = gen + 1;

            debug!(
                generation = generations,
                archive = archive.len(),
                hypervolume = hv,
                "generation complete"
            );
        }

        // 3. Refine the archive
        let refined = if config.apply_local_search {
            archive.refine(|member| local_search::refine(instance, &config.objective, member))
        } else {
            0
        };
        let final_hypervolume = archive_hypervolume(archive.members(), &config.hypervolume);

        info!(
            generations,
            archive = archive.len(),
            refined,
            hypervolume = final_hypervolume,
            cancelled,
            "multi-objective ALNS finished"
        );

        Ok(SolveResult {
            archive: archive.into_members(),
            hypervolume_history,
            final_hypervolume,
            generations,
            cancelled,
            operator_weights: selector.weights(),
            refined,
        })
    }
}

/// Shuffles all tasks and deals them round-robin over the fleet slots.
fn initial_individual<R: Rng>(instance: &Instance, config: &SolverConfig, rng: &mut R) -> Individual {
    let mut tasks: Vec<usize> = (0..instance.tasks.len()).collect();
    tasks.shuffle(rng);

    let slots = instance.fleet_size();
    let mut routes = vec![Route::new(); slots];
    for (i, task) in tasks.into_iter().enumerate() {
        routes[i % slots].visits.push(Visit::new(task));
    }

    let mut individual = Individual::new(routes);
    schedule::propagate_all(instance, &mut individual);
    objective::evaluate(instance, &config.objective, &mut individual);
    individual
}

/// Produces one offspring per parent.
///
/// Each parent draws from its own RNG seeded from `rng` in parent order,
/// so the outcome does not depend on how the work is scheduled.
fn breed_generation<R: Rng>(
    instance: &Instance,
    config: &SolverConfig,
    selector: &AdaptiveSelector,
    population: &[Individual],
    rng: &mut R,
) -> Vec<Offspring> {
    let seeds: Vec<u64> = population.iter().map(|_| rng.random()).collect();

    #[cfg(feature = "parallel")]
    if config.parallel {
        return population
            .par_iter()
            .zip(seeds.par_iter())
            .map(|(parent, &seed)| {
                breed(instance, config, selector, parent, &mut StdRng::seed_from_u64(seed))
            })
            .collect();
    }

    population
        .iter()
        .zip(seeds)
        .map(|(parent, seed)| {
            breed(instance, config, selector, parent, &mut StdRng::seed_from_u64(seed))
        })
        .collect()
}

/// Selects an operator, mutates `parent` and judges the child.
fn breed<R: Rng>(
    instance: &Instance,
    config: &SolverConfig,
    selector: &AdaptiveSelector,
    parent: &Individual,
    rng: &mut R,
) -> Offspring {
    let operator = selector.select(rng);
    let mut child = Operator::ALL[operator].apply(instance, parent, rng);
    schedule::propagate_all(instance, &mut child);
    objective::evaluate(instance, &config.objective, &mut child);

    let outcome = judge(&child.obj, &parent.obj, config.exploration_probability, rng);
    trace!(
        operator = Operator::ALL[operator].name(),
        ?outcome,
        parent = ?parent.obj,
        child = ?child.obj,
        "offspring judged"
    );

    let individual = if outcome.is_accepted() {
        child
    } else {
        parent.clone()
    };
    Offspring {
        individual,
        operator,
        outcome,
    }
}

// ============================================================================
// Tests
// ============================================================================
