//! Criterion benchmarks for u-dronepath.
//!
//! Uses synthetic instances (uniform coordinates, windows with 20%
//! tolerance) to measure solver and Pareto-machinery overhead.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use u_dronepath::model::{DemandType, Depot, Instance, Location, Task, TimeWindow};
use u_dronepath::pareto::{crowding_distance, hypervolume_2d, non_dominated_sort};
use u_dronepath::solver::{SolverConfig, SolverRunner};

// ===========================================================================
// Synthetic instances
// ===========================================================================

fn synthetic_instance(n: usize, depots: usize, seed: u64) -> Instance {
    let mut rng = StdRng::seed_from_u64(seed);
    let tasks = (0..n)
        .map(|i| {
            let roll: f64 = rng.random_range(0.0..1.0);
            let demand = if roll < 0.6 {
                DemandType::DeliveryOnly
            } else if roll < 0.9 {
                DemandType::PickupOnly
            } else {
                DemandType::IntraCityPickupDelivery
            };
            let start = rng.random_range(0.0..10.0);
            let end = rng.random_range(10.0..20.0);
            Task::new(
                i + 1,
                Location::new(rng.random_range(0.0..20.0), rng.random_range(0.0..20.0)),
                demand,
                rng.random_range(0.0..3.0),
                TimeWindow::with_tolerance(start, end, 0.2),
            )
        })
        .collect();
    let depots = (0..depots)
        .map(|d| Depot::new(d, Location::new(5.0 + 10.0 * d as f64, 10.0)))
        .collect();
    Instance::new(tasks, depots)
}

fn random_objectives(n: usize, seed: u64) -> Vec<[f64; 2]> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..n)
        .map(|_| [rng.random_range(0.0..5.0), -rng.random_range(0.0..40.0)])
        .collect()
}

// ===========================================================================
// Benchmarks
// ===========================================================================

fn bench_solver(c: &mut Criterion) {
    let mut group = c.benchmark_group("solver");
    group.sample_size(10);

    for &(n, depots) in &[(20usize, 2usize), (40, 2), (100, 4)] {
        let instance = synthetic_instance(n, depots, 7);
        let config = SolverConfig::default()
            .with_max_iterations(50)
            .with_population_size(50)
            .with_seed(42);

        group.bench_with_input(
            BenchmarkId::new("n_tasks", n),
            &(instance, config),
            |b, (instance, config)| {
                b.iter(|| SolverRunner::run(black_box(instance), black_box(config)))
            },
        );
    }
    group.finish();
}

fn bench_pareto(c: &mut Criterion) {
    let mut group = c.benchmark_group("pareto");

    for &n in &[100usize, 200, 400] {
        let objs = random_objectives(n, 3);
        group.bench_with_input(BenchmarkId::new("non_dominated_sort", n), &objs, |b, objs| {
            b.iter(|| non_dominated_sort(black_box(objs)))
        });
        group.bench_with_input(BenchmarkId::new("crowding_distance", n), &objs, |b, objs| {
            b.iter(|| crowding_distance(black_box(objs)))
        });

        let normalized: Vec<[f64; 2]> = objs
            .iter()
            .map(|o| [o[0] / 5.0, 1.0 + o[1] / 40.0])
            .collect();
        group.bench_with_input(BenchmarkId::new("hypervolume_2d", n), &normalized, |b, pts| {
            b.iter(|| hypervolume_2d(black_box(pts), [1.1, 1.1]))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_solver, bench_pareto);
criterion_main!(benches);
