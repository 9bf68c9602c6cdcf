use anyhow::{Result, ensure};
use serde::{Deserialize, Serialize};
use stow_rs::util::EvalConfig;

use crate::opt::chromosome::ChromosomeKind;

/// Configuration for the genetic search
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq)]
#[serde(default)]
pub struct GaConfig {
    /// Layout of the chromosomes being evolved
    pub chromosome: ChromosomeKind,
    pub population_size: usize,
    pub n_generations: usize,
    /// Probability for each gene of a child to be mutated
    pub mutation_rate: f64,
    /// Probability for a pair of parents to be recombined instead of copied
    pub crossover_rate: f64,
    /// Number of individuals competing in every selection
    pub tournament_size: usize,
    /// Number of best individuals carried over unchanged to the next generation
    pub elite_count: usize,
    /// Seed for the PRNG. If undefined, the search will run in non-deterministic mode using entropy
    pub prng_seed: Option<u64>,
    /// Configuration of the fitness evaluation
    pub eval: EvalConfig,
}

impl GaConfig {
    pub fn validate(&self) -> Result<()> {
        ensure!(
            self.population_size >= 2,
            "population_size must be at least 2, got {}",
            self.population_size
        );
        ensure!(
            self.tournament_size >= 1,
            "tournament_size must be at least 1"
        );
        ensure!(
            self.elite_count < self.population_size,
            "elite_count ({}) must be smaller than population_size ({})",
            self.elite_count,
            self.population_size
        );
        ensure!(
            (0.0..=1.0).contains(&self.mutation_rate),
            "mutation_rate must be within [0, 1], got {}",
            self.mutation_rate
        );
        ensure!(
            (0.0..=1.0).contains(&self.crossover_rate),
            "crossover_rate must be within [0, 1], got {}",
            self.crossover_rate
        );
        self.eval.validate()?;
        Ok(())
    }
}

impl Default for GaConfig {
    fn default() -> Self {
        Self {
            chromosome: ChromosomeKind::Priority,
            population_size: 150,
            n_generations: 100,
            mutation_rate: 0.2,
            crossover_rate: 0.65,
            tournament_size: 5,
            elite_count: 2,
            prng_seed: Some(0),
            eval: EvalConfig::default(),
        }
    }
}
