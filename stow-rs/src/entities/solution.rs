use crate::entities::{Instance, Placement};
use crate::eval::Metrics;
use crate::util::FitnessWeights;

/// Outcome of a single evaluation: the placements in the order they were made and their aggregate metrics.
/// All metrics are derived from the placements when the solution is created.
#[derive(Clone, Debug, PartialEq)]
pub struct Solution {
    placements: Vec<Placement>,
    metrics: Metrics,
    fitness: f64,
}

impl Solution {
    /// Every placement must refer to an item type of `instance`, as produced by the simulator
    pub(crate) fn new(instance: &Instance, placements: Vec<Placement>, weights: &FitnessWeights) -> Self {
        let metrics = Metrics::compute(instance, &placements);
        let fitness = weights.score(&metrics, instance.dimensionality());
        Solution {
            placements,
            metrics,
            fitness,
        }
    }

    pub fn placements(&self) -> &[Placement] {
        &self.placements
    }

    pub fn metrics(&self) -> &Metrics {
        &self.metrics
    }

    /// Scalar score to be maximized by a search process
    pub fn fitness(&self) -> f64 {
        self.fitness
    }

    /// Container capacity not covered by the true measure of the placed items
    pub fn total_wastage(&self) -> f64 {
        self.metrics.unfilled
    }

    /// Summed value of all placed items
    pub fn total_cost(&self) -> f64 {
        self.metrics.total_value
    }

    pub fn n_placed(&self) -> usize {
        self.placements.len()
    }

    /// Number of placements per item type, indexed by item id
    pub fn placed_qtys(&self, instance: &Instance) -> Vec<usize> {
        let mut qtys = vec![0; instance.items.len()];
        for p in &self.placements {
            qtys[p.item_id] += 1;
        }
        qtys
    }
}
