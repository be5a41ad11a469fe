//! Crowding distance assignment for diversity preservation.

use crate::model::Individual;

/// Objective ranges below this are treated as zero.
pub const RANGE_EPSILON: f64 = 1e-6;

/// Computes the crowding distance of each solution in one front.
///
/// Higher distance means the solution is more isolated. Boundary solutions
/// of each objective, and every member of a front with at most two
/// solutions, receive `f64::INFINITY`. An objective whose range across the
/// front is below [`RANGE_EPSILON`] contributes nothing.
///
/// # Algorithm (Deb et al., 2002)
///
/// For each objective:
/// 1. Sort solutions by objective value
/// 2. Assign infinity to boundary solutions
/// 3. For interior solutions, add normalized distance to neighbors
///
/// # Complexity
///
/// O(m * n * log n) where m = number of objectives, n = number of solutions
///
/// # Example
///
/// ```
/// use u_dronepath::pareto::crowding_distance;
///
/// let objectives = vec![[1.0, 5.0], [3.0, 3.0], [5.0, 1.0]];
/// let distances = crowding_distance(&objectives);
///
/// assert!(distances[0].is_infinite());
/// assert!(distances[2].is_infinite());
/// assert!((distances[1] - 2.0).abs() < 1e-12);
/// ```
pub fn crowding_distance<O: AsRef<[f64]>>(objectives: &[O]) -> Vec<f64> {
    let n = objectives.len();
    if n <= 2 {
        return vec![f64::INFINITY; n];
    }

    let m = objectives[0].as_ref().len();
    let value = |i: usize, k: usize| objectives[i].as_ref()[k];
    let mut distances = vec![0.0f64; n];

    for obj_idx in 0..m {
        let mut indices: Vec<usize> = (0..n).collect();
        indices.sort_by(|&a, &b| value(a, obj_idx).total_cmp(&value(b, obj_idx)));

        distances[indices[0]] = f64::INFINITY;
        distances[indices[n - 1]] = f64::INFINITY;

        let range = value(indices[n - 1], obj_idx) - value(indices[0], obj_idx);
        if range < RANGE_EPSILON {
            continue;
        }

        for i in 1..(n - 1) {
            let prev = value(indices[i - 1], obj_idx);
            let next = value(indices[i + 1], obj_idx);
            distances[indices[i]] += (next - prev) / range;
        }
    }

    distances
}

/// Writes crowding distances for the members of `front` (indices into
/// `population`).
pub fn assign_crowding(population: &mut [Individual], front: &[usize]) {
    let objectives: Vec<[f64; 2]> = front.iter().map(|&i| population[i].obj).collect();
    let distances = crowding_distance(&objectives);
    for (&i, d) in front.iter().zip(distances) {
        population[i].crowding_distance = d;
    }
}
