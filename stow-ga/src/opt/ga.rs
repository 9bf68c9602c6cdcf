use std::sync::Arc;
use std::time::Instant;

use anyhow::{Context, Result};
use itertools::Itertools;
use log::{debug, info};
use ordered_float::NotNan;
use rand::Rng;
use rand::prelude::SmallRng;
use rayon::prelude::*;
use stow_rs::entities::{Instance, Solution};
use stow_rs::eval::{Encoding, Evaluator};
use thousands::Separable;

use crate::config::GaConfig;
use crate::opt::chromosome::Chromosome;

/// A chromosome together with its evaluated fitness
#[derive(Clone, Debug)]
pub struct Individual {
    pub chromosome: Chromosome,
    pub fitness: NotNan<f64>,
}

/// Outcome of a genetic search
#[derive(Clone, Debug)]
pub struct GaResult {
    pub best: Chromosome,
    pub encoding: Encoding,
    pub solution: Solution,
    /// Best fitness after every generation, starting with the initial population
    pub history: Vec<f64>,
    pub n_evals: usize,
}

/// Generational genetic search over chromosomes, scored by the [`Evaluator`].
/// Each generation is evaluated in parallel.
pub struct GaOptimizer {
    pub evaluator: Evaluator,
    pub config: GaConfig,
    /// SmallRng is a fast, non-cryptographic PRNG <https://rust-random.github.io/book/guide-rngs.html>
    pub rng: SmallRng,
    pub n_evals: usize,
}

impl GaOptimizer {
    pub fn new(instance: Arc<Instance>, config: GaConfig, rng: SmallRng) -> Result<Self> {
        config.validate()?;
        let evaluator = Evaluator::new(instance, config.eval)?;
        Ok(Self {
            evaluator,
            config,
            rng,
            n_evals: 0,
        })
    }

    pub fn solve(&mut self) -> Result<GaResult> {
        let start = Instant::now();
        let instance = self.evaluator.instance().clone();
        let eval_config = *self.evaluator.config();

        let initial = (0..self.config.population_size)
            .map(|_| Chromosome::random(self.config.chromosome, &instance, &eval_config, &mut self.rng))
            .collect_vec();
        let mut population = self.evaluate_all(initial)?;
        let mut history = vec![population[0].fitness.into_inner()];

        for gen_idx in 1..=self.config.n_generations {
            let n_children = self.config.population_size - self.config.elite_count;
            let children = (0..n_children)
                .map(|_| self.breed(&population))
                .collect_vec();

            let mut next = population[..self.config.elite_count].to_vec();
            next.extend(self.evaluate_all(children)?);
            next.sort_by_key(|ind| std::cmp::Reverse(ind.fitness));
            population = next;

            let best = population[0].fitness.into_inner();
            history.push(best);

            if gen_idx % 10 == 0 || gen_idx == self.config.n_generations {
                let mean = population.iter().map(|ind| ind.fitness.into_inner()).sum::<f64>()
                    / population.len() as f64;
                info!(
                    "[GA] gen {gen_idx}/{}: best {best:.3}, mean {mean:.3}, evals {}",
                    self.config.n_generations,
                    self.n_evals.separate_with_commas()
                );
            }
        }

        let best = population.swap_remove(0).chromosome;
        let encoding = best.decode(&instance, &eval_config);
        let solution = self.evaluator.evaluate(&encoding)?;

        info!(
            "[GA] finished after {} evaluations in {:.3}s, best fitness {:.3} ({} items placed, {:.2}% utilization)",
            self.n_evals.separate_with_commas(),
            start.elapsed().as_secs_f64(),
            solution.fitness(),
            solution.n_placed(),
            solution.metrics().utilization()
        );

        Ok(GaResult {
            best,
            encoding,
            solution,
            history,
            n_evals: self.n_evals,
        })
    }

    /// Creates a child from two tournament winners
    fn breed(&mut self, population: &[Individual]) -> Chromosome {
        let size = self.config.tournament_size;
        let parent_1 = tournament_select(population, size, &mut self.rng);
        let parent_2 = tournament_select(population, size, &mut self.rng);

        let mut child = match self.rng.random_bool(self.config.crossover_rate) {
            true => parent_1.chromosome.crossover(&parent_2.chromosome, &mut self.rng),
            false => parent_1.chromosome.clone(),
        };
        child.mutate(self.config.mutation_rate, &mut self.rng);
        child
    }

    /// Evaluates all chromosomes in parallel and ranks them by descending fitness
    fn evaluate_all(&mut self, chromosomes: Vec<Chromosome>) -> Result<Vec<Individual>> {
        let evaluator = &self.evaluator;
        let instance = evaluator.instance().as_ref();
        let eval_config = evaluator.config();

        let mut individuals = chromosomes
            .into_par_iter()
            .map(|chromosome| -> Result<Individual> {
                let encoding = chromosome.decode(instance, eval_config);
                let fitness = evaluator.fitness(&encoding)?;
                let fitness = NotNan::new(fitness).context("fitness is NaN")?;
                Ok(Individual {
                    chromosome,
                    fitness,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        self.n_evals += individuals.len();
        individuals.sort_by_key(|ind| std::cmp::Reverse(ind.fitness));
        debug!(
            "[GA] evaluated {} chromosomes, best fitness {:.3}",
            individuals.len(),
            individuals.first().map_or(0.0, |ind| ind.fitness.into_inner())
        );
        Ok(individuals)
    }
}

/// Returns the fittest of `size` randomly drawn individuals
pub fn tournament_select<'a>(population: &'a [Individual], size: usize, rng: &mut impl Rng) -> &'a Individual {
    (0..size.max(1))
        .map(|_| &population[rng.random_range(0..population.len())])
        .max_by_key(|ind| ind.fitness)
        .unwrap_or(&population[0])
}
