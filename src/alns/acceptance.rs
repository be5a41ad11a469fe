//! Offspring acceptance.

use rand::Rng;

/// Outcome of comparing a child with its parent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Acceptance {
    /// The child is better than the parent on at least one objective.
    Improved,
    /// The child was admitted by the exploration draw.
    Explored,
    /// The parent keeps the slot.
    Rejected,
}

impl Acceptance {
    pub fn is_accepted(&self) -> bool {
        !matches!(self, Acceptance::Rejected)
    }
}

/// Accepts `child` unless it fails to improve either objective of
/// `parent`; rejected children still pass with `exploration_probability`.
pub fn judge<R: Rng>(
    child: &[f64; 2],
    parent: &[f64; 2],
    exploration_probability: f64,
    rng: &mut R,
) -> Acceptance {
    if child[0] < parent[0] || child[1] < parent[1] {
        Acceptance::Improved
    } else if rng.random_bool(exploration_probability.clamp(0.0, 1.0)) {
        Acceptance::Explored
    } else {
        Acceptance::Rejected
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_either_objective_improves() {
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(judge(&[1.0, -0.5], &[2.0, -0.9], 0.0, &mut rng), Acceptance::Improved);
        assert_eq!(judge(&[3.0, -1.0], &[2.0, -0.9], 0.0, &mut rng), Acceptance::Improved);
    }

    #[test]
    fn test_worse_rejected_without_exploration() {
        let mut rng = StdRng::seed_from_u64(2);
        for _ in 0..100 {
            assert_eq!(judge(&[3.0, -0.5], &[2.0, -0.9], 0.0, &mut rng), Acceptance::Rejected);
        }
        // equal objectives are not an improvement
        assert_eq!(judge(&[2.0, -0.9], &[2.0, -0.9], 0.0, &mut rng), Acceptance::Rejected);
    }

    #[test]
    fn test_exploration_always() {
        let mut rng = StdRng::seed_from_u64(3);
        let outcome = judge(&[3.0, -0.5], &[2.0, -0.9], 1.0, &mut rng);
        assert_eq!(outcome, Acceptance::Explored);
        assert!(outcome.is_accepted());
    }

    #[test]
    fn test_exploration_rate() {
        let mut rng = StdRng::seed_from_u64(4);
        let accepted = (0..10_000)
            .filter(|_| judge(&[3.0, 0.0], &[2.0, -1.0], 0.2, &mut rng).is_accepted())
            .count();
        assert!((1700..2300).contains(&accepted), "accepted = {accepted}");
    }
}
