//! Adaptive operator weights.

use rand::Rng;

/// Per-operator weight and segment statistics.
#[derive(Debug, Clone, PartialEq)]
pub struct OperatorStats {
    pub weight: f64,
    pub segment_score: f64,
    pub segment_uses: usize,
}

impl OperatorStats {
    fn new() -> Self {
        Self {
            weight: 1.0,
            segment_score: 0.0,
            segment_uses: 0,
        }
    }

    fn record(&mut self, score: f64) {
        self.segment_score += score;
        self.segment_uses += 1;
    }

    /// Update weight using exponential smoothing at end of segment.
    ///
    /// w_new = (1 - eps) * w + eps * (score / uses)
    ///
    /// Operators unused during the segment keep their weight.
    fn update_weight(&mut self, reaction_factor: f64, min_weight: f64) {
        if self.segment_uses > 0 {
            let avg_score = self.segment_score / self.segment_uses as f64;
            self.weight = self.weight * (1.0 - reaction_factor) + avg_score * reaction_factor;
            self.weight = self.weight.max(min_weight);
        }
        self.segment_score = 0.0;
        self.segment_uses = 0;
    }
}

/// Roulette-wheel operator selection with reward-driven reweighting.
///
/// Owned by one solver run and mutated explicitly: selection only reads the
/// weights, so it may be shared across worker threads during a generation,
/// while [`record`](Self::record) and [`update_weights`](Self::update_weights)
/// run after the generation's barrier.
#[derive(Debug, Clone, PartialEq)]
pub struct AdaptiveSelector {
    stats: Vec<OperatorStats>,
}

impl AdaptiveSelector {
    /// Creates a selector over `n` operators, all with weight 1.
    pub fn new(n: usize) -> Self {
        Self {
            stats: (0..n).map(|_| OperatorStats::new()).collect(),
        }
    }

    /// Picks an operator index with probability proportional to its weight.
    ///
    /// Falls back to a uniform pick when every weight is zero or the weights
    /// sum past `f64::MAX`. Zero-weight operators are never picked otherwise.
    pub fn select<R: Rng>(&self, rng: &mut R) -> usize {
        if self.stats.is_empty() {
            return 0;
        }
        let total: f64 = self.stats.iter().map(|s| s.weight).sum();
        if !total.is_finite() || total <= 0.0 {
            return rng.random_range(0..self.stats.len());
        }

        let mut roll = rng.random_range(0.0..total);
        let mut last = 0;
        for (i, stat) in self.stats.iter().enumerate() {
            if stat.weight <= 0.0 {
                continue;
            }
            last = i;
            roll -= stat.weight;
            if roll < 0.0 {
                return i;
            }
        }
        last
    }

    /// Records one invocation of operator `op` that earned `score`.
    pub fn record(&mut self, op: usize, score: f64) {
        if let Some(stat) = self.stats.get_mut(op) {
            stat.record(score);
        }
    }

    /// Applies the end-of-segment weight update and resets the segment.
    pub fn update_weights(&mut self, reaction_factor: f64, min_weight: f64) {
        for stat in &mut self.stats {
            stat.update_weight(reaction_factor, min_weight);
        }
    }

    pub fn weights(&self) -> Vec<f64> {
        self.stats.iter().map(|s| s.weight).collect()
    }

    pub fn stats(&self) -> &[OperatorStats] {
        &self.stats
    }
}
