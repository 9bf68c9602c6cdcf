use std::sync::Arc;

use crate::entities::{Instance, Solution};
use crate::error::Result;
use crate::eval::Encoding;
use crate::sim::simulate;
use crate::util::{EvalConfig, assertions};

/// Turns encodings into scored solutions for a single instance.
///
/// Holds no mutable state: every evaluation simulates on its own grid,
/// so one evaluator can be shared between threads.
#[derive(Clone, Debug)]
pub struct Evaluator {
    instance: Arc<Instance>,
    config: EvalConfig,
}

impl Evaluator {
    pub fn new(instance: Arc<Instance>, config: EvalConfig) -> Result<Self> {
        config.validate()?;
        Ok(Evaluator { instance, config })
    }

    /// Simulates the encoding and scores the resulting layout.
    /// Fails only if the strategy cannot be used for the container of the instance.
    pub fn evaluate(&self, encoding: &Encoding) -> Result<Solution> {
        let instance = self.instance.as_ref();
        encoding
            .strategy
            .check_compatible(instance.dimensionality(), &self.config)?;

        let placements = simulate(instance, &encoding.sequence, encoding.strategy, &self.config);
        let solution = Solution::new(instance, placements, &self.config.weights);

        debug_assert!(assertions::solution_is_feasible(instance, &solution));
        Ok(solution)
    }

    /// Shortcut for the fitness of the evaluated solution
    pub fn fitness(&self, encoding: &Encoding) -> Result<f64> {
        self.evaluate(encoding).map(|s| s.fitness())
    }

    pub fn instance(&self) -> &Arc<Instance> {
        &self.instance
    }

    pub fn config(&self) -> &EvalConfig {
        &self.config
    }
}
