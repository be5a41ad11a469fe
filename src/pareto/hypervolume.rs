//! Two-objective hypervolume indicator.
//!
//! Objectives are mapped into a normalized minimization space before the
//! area is measured:
//!
//! - cost: `f1 / cost_scale`
//! - satisfaction: `1 - (-f2) / satisfaction_scale`
//!
//! The scales are fixed per instance family rather than derived from the
//! data, so values are comparable across runs on that family.

use crate::model::Individual;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Normalization and reference point for [`archive_hypervolume`].
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct HypervolumeConfig {
    /// Cost value mapped to 1.0.
    pub cost_scale: f64,
    /// Total satisfaction mapped to 0.0.
    pub satisfaction_scale: f64,
    /// Reference point in normalized space.
    pub reference: [f64; 2],
    /// Decimals kept in the reported value.
    pub precision: u32,
}

impl Default for HypervolumeConfig {
    fn default() -> Self {
        Self {
            cost_scale: 500.0,
            satisfaction_scale: 40.0,
            reference: [1.1, 1.1],
            precision: 4,
        }
    }
}

impl HypervolumeConfig {
    /// Maps an objective pair into normalized minimization space.
    pub fn normalize(&self, obj: &[f64; 2]) -> [f64; 2] {
        let satisfaction = -obj[1];
        [
            obj[0] / self.cost_scale,
            1.0 - satisfaction / self.satisfaction_scale,
        ]
    }
}

/// Area dominated by `points` and bounded by `reference` (both minimized).
///
/// Points that do not strictly dominate the reference on both axes are
/// ignored, as are points dominated by another point of the set.
///
/// # Example
///
/// ```
/// use u_dronepath::pareto::hypervolume_2d;
///
/// // (1.1 - 0.5) * (1.1 - 0.05) + (0.5 - 0.2) * (1.1 - 0.1)
/// let hv = hypervolume_2d(&[[0.2, 0.1], [0.5, 0.05]], [1.1, 1.1]);
/// assert!((hv - 0.93).abs() < 1e-12);
/// ```
pub fn hypervolume_2d(points: &[[f64; 2]], reference: [f64; 2]) -> f64 {
    let mut inside: Vec<[f64; 2]> = points
        .iter()
        .copied()
        .filter(|p| p[0] < reference[0] && p[1] < reference[1])
        .collect();
    inside.sort_by(|a, b| a[0].total_cmp(&b[0]).then(a[1].total_cmp(&b[1])));

    // Staircase: ascending cost, strictly descending second objective.
    let mut staircase: Vec<[f64; 2]> = Vec::with_capacity(inside.len());
    for p in inside {
        if staircase.last().is_none_or(|last| p[1] < last[1]) {
            staircase.push(p);
        }
    }

    let mut area = 0.0;
    let mut boundary = reference[0];
    for p in staircase.iter().rev() {
        area += (boundary - p[0]) * (reference[1] - p[1]);
        boundary = p[0];
    }
    area
}

/// Normalized hypervolume of `members`, rounded to `config.precision`.
pub fn archive_hypervolume(members: &[Individual], config: &HypervolumeConfig) -> f64 {
    let points: Vec<[f64; 2]> = members.iter().map(|m| config.normalize(&m.obj)).collect();
    let hv = hypervolume_2d(&points, config.reference);
    let scale = 10f64.powi(config.precision as i32);
    (hv * scale).round() / scale
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Route;
    use proptest::prelude::*;

    const REF: [f64; 2] = [1.1, 1.1];

    #[test]
    fn test_hand_computed_sweep() {
        let hv = hypervolume_2d(&[[0.2, 0.1], [0.5, 0.05]], REF);
        assert!((hv - 0.93).abs() < 1e-12);
    }

    #[test]
    fn test_empty_and_reference_point() {
        assert_eq!(hypervolume_2d(&[], REF), 0.0);
        assert_eq!(hypervolume_2d(&[REF], REF), 0.0);
        // on the boundary of one axis only
        assert_eq!(hypervolume_2d(&[[0.5, 1.1]], REF), 0.0);
    }

    #[test]
    fn test_single_point_rectangle() {
        let hv = hypervolume_2d(&[[0.1, 0.6]], REF);
        assert!((hv - 1.0 * 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_dominated_point_changes_nothing() {
        let base = hypervolume_2d(&[[0.2, 0.1], [0.5, 0.05]], REF);
        let more = hypervolume_2d(&[[0.2, 0.1], [0.5, 0.05], [0.6, 0.5]], REF);
        assert!((base - more).abs() < 1e-12);
    }

    #[test]
    fn test_duplicates_counted_once() {
        let one = hypervolume_2d(&[[0.3, 0.3]], REF);
        let two = hypervolume_2d(&[[0.3, 0.3], [0.3, 0.3]], REF);
        assert!((one - two).abs() < 1e-12);
    }

    #[test]
    fn test_non_dominated_point_never_decreases() {
        let mut points = vec![[0.4, 0.4]];
        let mut last = hypervolume_2d(&points, REF);
        for p in [[0.2, 0.8], [0.8, 0.1], [0.3, 0.5], [0.05, 1.0]] {
            points.push(p);
            let hv = hypervolume_2d(&points, REF);
            assert!(hv >= last);
            last = hv;
        }
    }

    proptest! {
        #[test]
        fn prop_adding_points_never_decreases(
            raw in prop::collection::vec((0.0f64..1.2, 0.0f64..1.2), 1..30)
        ) {
            let mut points = Vec::new();
            let mut last = 0.0;
            for (a, b) in raw {
                points.push([a, b]);
                let hv = hypervolume_2d(&points, REF);
                prop_assert!(hv >= last - 1e-12);
                last = hv;
            }
        }

        #[test]
        fn prop_dominated_point_is_ignored(
            raw in prop::collection::vec((0.0f64..1.0, 0.0f64..1.0), 1..20),
            pick in any::<prop::sample::Index>(),
            shift in (0.0f64..0.5, 0.0f64..0.5),
        ) {
            let points: Vec<[f64; 2]> = raw.into_iter().map(|(a, b)| [a, b]).collect();
            let base = points[pick.index(points.len())];
            let mut more = points.clone();
            more.push([base[0] + shift.0, base[1] + shift.1]);
            let before = hypervolume_2d(&points, REF);
            let after = hypervolume_2d(&more, REF);
            prop_assert!((before - after).abs() < 1e-12);
        }
    }

    #[test]
    fn test_archive_normalization_and_rounding() {
        let config = HypervolumeConfig::default();
        let mut ind = Individual::new(vec![Route::new()]);
        // cost 100 -> 0.2, satisfaction 36 -> 0.1
        ind.obj = [100.0, -36.0];
        let norm = config.normalize(&ind.obj);
        assert!((norm[0] - 0.2).abs() < 1e-12);
        assert!((norm[1] - 0.1).abs() < 1e-12);

        let hv = archive_hypervolume(&[ind], &config);
        assert_eq!(hv, 0.9);
    }
}
