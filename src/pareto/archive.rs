//! External Pareto archive.

use super::crowding::crowding_distance;
use super::sort::non_dominated_sort;
use crate::model::Individual;
use std::collections::HashSet;

/// Capacity-bounded set of non-dominated individuals kept across
/// generations.
///
/// Two members never share the same objective pair after rounding to
/// `precision` decimals, so near-equal points collapse into one member.
///
/// # Examples
///
/// ```
/// use u_dronepath::model::{Individual, Route};
/// use u_dronepath::pareto::Archive;
///
/// let point = |f1: f64, f2: f64| {
///     let mut ind = Individual::new(vec![Route::new()]);
///     ind.obj = [f1, f2];
///     ind
/// };
///
/// let mut archive = Archive::new(10, 2);
/// // (1.001, -0.502) rounds onto (1.0, -0.5); (2.0, -0.1) is dominated
/// archive.update(&[point(1.0, -0.5), point(1.001, -0.502), point(0.5, -0.1), point(2.0, -0.1)]);
/// assert_eq!(archive.len(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct Archive {
    members: Vec<Individual>,
    capacity: usize,
    precision: u32,
}

impl Archive {
    pub fn new(capacity: usize, precision: u32) -> Self {
        Self {
            members: Vec::new(),
            capacity,
            precision,
        }
    }

    pub fn members(&self) -> &[Individual] {
        &self.members
    }

    pub fn members_mut(&mut self) -> &mut [Individual] {
        &mut self.members
    }

    pub fn into_members(self) -> Vec<Individual> {
        self.members
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Rounded objective pair used for duplicate detection.
    pub fn key(&self, obj: &[f64; 2]) -> (i64, i64) {
        let scale = 10f64.powi(self.precision as i32);
        ((obj[0] * scale).round() as i64, (obj[1] * scale).round() as i64)
    }

    /// Merges `population` into the archive.
    ///
    /// Keeps front 0 of archive + population, drops rounded duplicates
    /// (first encountered wins, current members before newcomers) and cuts
    /// the result to capacity in encounter order.
    pub fn update(&mut self, population: &[Individual]) {
        let mut combined = std::mem::take(&mut self.members);
        combined.extend(population.iter().cloned());

        let objectives: Vec<[f64; 2]> = combined.iter().map(|ind| ind.obj).collect();
        let sorted = non_dominated_sort(&objectives);
        let Some(front) = sorted.fronts.first() else {
            return;
        };

        let mut keep = vec![false; combined.len()];
        let mut seen = HashSet::with_capacity(front.len());
        let mut kept = 0usize;
        for &i in front {
            if kept >= self.capacity {
                break;
            }
            if seen.insert(self.key(&combined[i].obj)) {
                keep[i] = true;
                kept += 1;
            }
        }

        self.members = combined
            .into_iter()
            .zip(keep)
            .filter_map(|(ind, k)| k.then_some(ind))
            .collect();

        let objectives: Vec<[f64; 2]> = self.members.iter().map(|ind| ind.obj).collect();
        let distances = crowding_distance(&objectives);
        for (ind, d) in self.members.iter_mut().zip(distances) {
            ind.rank = 1;
            ind.crowding_distance = d;
        }
    }

    /// Rewrites members in place with `improve`, which returns `true` when
    /// it changed its argument.
    ///
    /// A rewrite whose rounded objectives collide with another member is
    /// discarded and the original member kept. Members are never removed.
    /// Returns the number of members rewritten.
    pub fn refine<F>(&mut self, mut improve: F) -> usize
    where
        F: FnMut(&mut Individual) -> bool,
    {
        let mut keys: Vec<(i64, i64)> = self.members.iter().map(|m| self.key(&m.obj)).collect();
        let mut rewritten = 0;
        for i in 0..self.members.len() {
            let mut candidate = self.members[i].clone();
            if !improve(&mut candidate) {
                continue;
            }
            let key = self.key(&candidate.obj);
            let collides = keys.iter().enumerate().any(|(j, k)| j != i && *k == key);
            if !collides {
                keys[i] = key;
                self.members[i] = candidate;
                rewritten += 1;
            }
        }
        rewritten
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Route;

    fn point(f1: f64, f2: f64) -> Individual {
        let mut ind = Individual::new(vec![Route::new()]);
        ind.obj = [f1, f2];
        ind
    }

    #[test]
    fn test_keeps_only_front() {
        let mut archive = Archive::new(10, 2);
        archive.update(&[point(1.0, -0.8), point(1.2, -0.9), point(1.0, -0.9), point(2.0, -0.1)]);
        assert_eq!(archive.len(), 1);
        assert_eq!(archive.members()[0].obj, [1.0, -0.9]);
        assert_eq!(archive.members()[0].rank, 1);
    }

    #[test]
    fn test_dedup_by_rounding() {
        let mut archive = Archive::new(10, 2);
        archive.update(&[point(1.0, -0.5), point(1.004, -0.503), point(0.5, -0.1)]);
        assert_eq!(archive.len(), 2);
        // first encountered is kept
        assert_eq!(archive.members()[0].obj, [1.0, -0.5]);

        let keys: HashSet<(i64, i64)> =
            archive.members().iter().map(|m| archive.key(&m.obj)).collect();
        assert_eq!(keys.len(), archive.len());
    }

    #[test]
    fn test_capacity_truncation_in_order() {
        let mut archive = Archive::new(3, 2);
        let pts: Vec<Individual> = (0..6).map(|i| point(i as f64, -(i as f64))).collect();
        archive.update(&pts);
        assert_eq!(archive.len(), 3);
        let costs: Vec<f64> = archive.members().iter().map(|m| m.obj[0]).collect();
        assert_eq!(costs, vec![0.0, 1.0, 2.0]);
    }

    #[test]
    fn test_existing_members_survive_equal_newcomers() {
        let mut archive = Archive::new(10, 2);
        let mut first = point(1.0, -1.0);
        first.routes = vec![Route::from_tasks([0])];
        archive.update(&[first]);
        archive.update(&[point(1.0, -1.0)]);
        assert_eq!(archive.len(), 1);
        assert_eq!(archive.members()[0].routes, vec![Route::from_tasks([0])]);
    }

    #[test]
    fn test_dominated_members_evicted() {
        let mut archive = Archive::new(10, 2);
        archive.update(&[point(2.0, -1.0)]);
        archive.update(&[point(1.0, -2.0)]);
        assert_eq!(archive.len(), 1);
        assert_eq!(archive.members()[0].obj, [1.0, -2.0]);
    }

    #[test]
    fn test_refine_rewrites_without_shrinking() {
        let mut archive = Archive::new(10, 2);
        archive.update(&[point(1.0, -2.0), point(2.0, -3.0)]);

        let rewritten = archive.refine(|m| {
            m.obj[1] -= 0.5;
            true
        });
        assert_eq!(rewritten, 2);
        assert_eq!(archive.len(), 2);
        assert_eq!(archive.members()[0].obj, [1.0, -2.5]);
    }

    #[test]
    fn test_refine_rejects_colliding_rewrite() {
        let mut archive = Archive::new(10, 2);
        archive.update(&[point(1.0, -2.0), point(2.0, -3.0)]);

        // move the first member onto the second one's rounded key
        let rewritten = archive.refine(|m| {
            if m.obj[0] == 1.0 {
                m.obj = [2.0, -3.0];
                true
            } else {
                false
            }
        });
        assert_eq!(rewritten, 0);
        assert_eq!(archive.members()[0].obj, [1.0, -2.0]);
    }

    #[test]
    fn test_empty_update() {
        let mut archive = Archive::new(10, 2);
        archive.update(&[]);
        assert!(archive.is_empty());
    }
}
