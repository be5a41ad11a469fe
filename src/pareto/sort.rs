//! Fast non-dominated sorting (Deb et al., 2002).

use super::dominance::{dominance_cmp, Dominance};
use crate::model::Individual;

/// Result of non-dominated sorting.
///
/// Each element of `ranks` corresponds to the Pareto rank of the solution
/// at the same index. Rank 0 is the Pareto front (non-dominated solutions).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NondominatedSortResult {
    /// Pareto rank for each solution (0 = front).
    pub ranks: Vec<usize>,

    /// Indices grouped by front: `fronts[0]` contains rank-0 indices, etc.
    pub fronts: Vec<Vec<usize>>,
}

/// Fast non-dominated sorting.
///
/// All objectives are **minimized**. Domination counts and dominated sets
/// live in lookup tables local to this call, so nothing carries over from
/// one sort to the next. Within each front, indices appear in input order.
///
/// An empty input yields an empty front list.
///
/// # Complexity
///
/// O(m * n²) where m = number of objectives, n = number of solutions
///
/// # Example
///
/// ```
/// use u_dronepath::pareto::non_dominated_sort;
///
/// let objectives = vec![
///     [1.0, -0.8], // A
///     [1.2, -0.9], // B
///     [1.0, -0.9], // C dominates A and B
///     [2.0, -0.1], // D dominated by A and B
/// ];
///
/// let result = non_dominated_sort(&objectives);
/// assert_eq!(result.fronts, vec![vec![2], vec![0, 1], vec![3]]);
/// ```
pub fn non_dominated_sort<O: AsRef<[f64]>>(objectives: &[O]) -> NondominatedSortResult {
    let n = objectives.len();
    if n == 0 {
        return NondominatedSortResult::default();
    }

    let mut domination_count = vec![0usize; n];
    let mut dominated_by: Vec<Vec<usize>> = vec![Vec::new(); n];
    let mut ranks = vec![0usize; n];
    let mut front_0 = Vec::new();

    for i in 0..n {
        for j in (i + 1)..n {
            match dominance_cmp(objectives[i].as_ref(), objectives[j].as_ref()) {
                Dominance::Left => {
                    dominated_by[i].push(j);
                    domination_count[j] += 1;
                }
                Dominance::Right => {
                    dominated_by[j].push(i);
                    domination_count[i] += 1;
                }
                Dominance::Neither => {}
            }
        }

        if domination_count[i] == 0 {
            front_0.push(i);
        }
    }

    let mut fronts = Vec::new();
    let mut current = front_0;
    while !current.is_empty() {
        let mut next_front = Vec::new();
        for &i in &current {
            for &j in &dominated_by[i] {
                domination_count[j] -= 1;
                if domination_count[j] == 0 {
                    ranks[j] = fronts.len() + 1;
                    next_front.push(j);
                }
            }
        }
        next_front.sort_unstable();
        fronts.push(std::mem::replace(&mut current, next_front));
    }

    NondominatedSortResult { ranks, fronts }
}

/// Sorts `population` into fronts and writes `rank = front index + 1` on
/// every member. Returns the fronts as index lists.
pub fn rank_population(population: &mut [Individual]) -> Vec<Vec<usize>> {
    let objectives: Vec<[f64; 2]> = population.iter().map(|ind| ind.obj).collect();
    let result = non_dominated_sort(&objectives);
    for (ind, rank) in population.iter_mut().zip(&result.ranks) {
        ind.rank = rank + 1;
    }
    result.fronts
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Route;
    use crate::pareto::dominates;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn prop_fronts_respect_dominance(
            raw in prop::collection::vec((0.0f64..5.0, -5.0f64..0.0), 0..40)
        ) {
            // coarse grid so ties are frequent
            let objs: Vec<[f64; 2]> = raw
                .into_iter()
                .map(|(a, b)| [(a * 2.0).round() / 2.0, (b * 2.0).round() / 2.0])
                .collect();
            let result = non_dominated_sort(&objs);

            let total: usize = result.fronts.iter().map(Vec::len).sum();
            prop_assert_eq!(total, objs.len());
            for (k, front) in result.fronts.iter().enumerate() {
                prop_assert!(!front.is_empty());
                for &i in front {
                    prop_assert_eq!(result.ranks[i], k);
                }
            }
            for p in 0..objs.len() {
                for q in 0..objs.len() {
                    if result.ranks[q] < result.ranks[p] {
                        prop_assert!(!dominates(&objs[p], &objs[q]));
                    }
                }
            }
        }
    }

    #[test]
    fn test_empty() {
        let objs: Vec<[f64; 2]> = vec![];
        let result = non_dominated_sort(&objs);
        assert!(result.fronts.is_empty());
        assert!(result.ranks.is_empty());
    }

    #[test]
    fn test_single_solution() {
        let result = non_dominated_sort(&[[1.0, 2.0]]);
        assert_eq!(result.ranks, vec![0]);
        assert_eq!(result.fronts, vec![vec![0]]);
    }

    #[test]
    fn test_clear_dominance() {
        let objs = vec![[1.0, 1.0], [2.0, 2.0], [3.0, 3.0]];
        let result = non_dominated_sort(&objs);
        assert_eq!(result.ranks, vec![0, 1, 2]);
        assert_eq!(result.fronts.len(), 3);
    }

    #[test]
    fn test_mixed_fronts() {
        let objs = vec![
            [1.0, 5.0], // front 0
            [3.0, 3.0], // front 0
            [5.0, 1.0], // front 0
            [4.0, 4.0], // dominated by [1]
            [6.0, 6.0], // dominated by [3]
        ];
        let result = non_dominated_sort(&objs);
        assert_eq!(result.ranks, vec![0, 0, 0, 1, 2]);
    }

    #[test]
    fn test_all_equal_share_front() {
        let objs = vec![[2.0, 2.0], [2.0, 2.0], [2.0, 2.0]];
        let result = non_dominated_sort(&objs);
        assert_eq!(result.fronts, vec![vec![0, 1, 2]]);
    }

    #[test]
    fn test_worked_example() {
        let objs = vec![[1.0, -0.8], [1.2, -0.9], [1.0, -0.9], [2.0, -0.1]];
        let result = non_dominated_sort(&objs);
        assert_eq!(result.fronts, vec![vec![2], vec![0, 1], vec![3]]);
    }

    #[test]
    fn test_sorting_twice_is_stable() {
        let objs = vec![[1.0, 5.0], [4.0, 4.0], [3.0, 3.0], [6.0, 6.0], [5.0, 1.0]];
        let first = non_dominated_sort(&objs);
        let second = non_dominated_sort(&objs);
        assert_eq!(first, second);
    }

    #[test]
    fn test_rank_population_is_one_based() {
        let mut pop: Vec<Individual> = [[1.0, -0.8], [1.0, -0.9]]
            .into_iter()
            .map(|obj| {
                let mut ind = Individual::new(vec![Route::new()]);
                ind.obj = obj;
                ind
            })
            .collect();
        let fronts = rank_population(&mut pop);
        assert_eq!(fronts, vec![vec![1], vec![0]]);
        assert_eq!(pop[1].rank, 1);
        assert_eq!(pop[0].rank, 2);
    }
}
