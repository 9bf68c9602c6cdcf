use rand::Rng;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};
use stow_rs::entities::Instance;
use stow_rs::eval::Encoding;
use stow_rs::geometry::geo_enums::Dimensionality;
use stow_rs::sim::{catalog_sequence, priority_sequence};
use stow_rs::strategy::Strategy;
use stow_rs::util::EvalConfig;

/// Upper bound (inclusive) of a priority gene
pub const MAX_PRIORITY: u32 = 100;
/// Upper bound (inclusive) of the strategy and band genes
pub const MAX_STRATEGY_GENE: u32 = 10;

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum ChromosomeKind {
    /// Evolves the order of the catalog sequence, placed with a fixed strategy
    Permutation,
    /// Evolves a priority per item type together with the placement strategy
    #[default]
    Priority,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Chromosome {
    /// `order[i]` is the position in the catalog sequence of the `i`-th item to place
    Permutation { order: Vec<usize> },
    Priority {
        /// One gene per item type, in `0..=MAX_PRIORITY`
        priorities: Vec<u32>,
        /// Selects the strategy, in `0..=MAX_STRATEGY_GENE`
        strategy_gene: u32,
        /// Selects the preferred depth band, in `0..=MAX_STRATEGY_GENE`
        band_gene: u32,
    },
}

impl Chromosome {
    pub fn random(kind: ChromosomeKind, instance: &Instance, config: &EvalConfig, rng: &mut impl Rng) -> Self {
        match kind {
            ChromosomeKind::Permutation => {
                let n = catalog_sequence(instance, config.instance_cap).len();
                let mut order = (0..n).collect::<Vec<_>>();
                order.shuffle(rng);
                Chromosome::Permutation { order }
            }
            ChromosomeKind::Priority => Chromosome::Priority {
                priorities: (0..instance.items.len())
                    .map(|_| rng.random_range(0..=MAX_PRIORITY))
                    .collect(),
                strategy_gene: rng.random_range(0..=MAX_STRATEGY_GENE),
                band_gene: rng.random_range(0..=MAX_STRATEGY_GENE),
            },
        }
    }

    pub fn kind(&self) -> ChromosomeKind {
        match self {
            Chromosome::Permutation { .. } => ChromosomeKind::Permutation,
            Chromosome::Priority { .. } => ChromosomeKind::Priority,
        }
    }

    /// Translates the chromosome into an item sequence and a strategy.
    ///
    /// Permutations are placed with the hinted scan in 3D and bottom-left in 2D.
    pub fn decode(&self, instance: &Instance, config: &EvalConfig) -> Encoding {
        let dim = instance.dimensionality();
        match self {
            Chromosome::Permutation { order } => {
                let base = catalog_sequence(instance, config.instance_cap);
                let sequence = order.iter().filter_map(|&i| base.get(i).copied()).collect();
                let strategy = match dim {
                    Dimensionality::Three => Strategy::Hinted,
                    Dimensionality::Two => Strategy::BottomLeft,
                };
                Encoding::new(sequence, strategy)
            }
            Chromosome::Priority {
                priorities,
                strategy_gene,
                band_gene,
            } => {
                let sequence = priority_sequence(instance, priorities, config.instance_cap);
                let strategy = Strategy::from_genes(dim, *strategy_gene, *band_gene, config.n_bands);
                Encoding::new(sequence, strategy)
            }
        }
    }

    /// Recombines two parents of the same kind into a child.
    /// Permutations use partially matched crossover, priorities a single cut point.
    pub fn crossover(&self, other: &Chromosome, rng: &mut impl Rng) -> Chromosome {
        match (self, other) {
            (Chromosome::Permutation { order: a }, Chromosome::Permutation { order: b }) => {
                Chromosome::Permutation {
                    order: partially_matched_crossover(a, b, rng),
                }
            }
            (
                Chromosome::Priority {
                    priorities: p_a,
                    strategy_gene: s_a,
                    band_gene: b_a,
                },
                Chromosome::Priority {
                    priorities: p_b,
                    strategy_gene: s_b,
                    band_gene: b_b,
                },
            ) => {
                let cut = match p_a.len() {
                    0 => 0,
                    n => rng.random_range(0..=n),
                };
                let priorities = p_a[..cut].iter().chain(&p_b[cut..]).copied().collect();
                Chromosome::Priority {
                    priorities,
                    strategy_gene: if rng.random_bool(0.5) { *s_a } else { *s_b },
                    band_gene: if rng.random_bool(0.5) { *b_a } else { *b_b },
                }
            }
            _ => self.clone(),
        }
    }

    /// Mutates every gene independently with probability `rate`.
    /// A mutated permutation gene swaps position with a random other one,
    /// a mutated integer gene is reset to a random value within its range.
    pub fn mutate(&mut self, rate: f64, rng: &mut impl Rng) {
        match self {
            Chromosome::Permutation { order } => {
                let n = order.len();
                for i in 0..n {
                    if rng.random_bool(rate) {
                        let j = rng.random_range(0..n);
                        order.swap(i, j);
                    }
                }
            }
            Chromosome::Priority {
                priorities,
                strategy_gene,
                band_gene,
            } => {
                for p in priorities.iter_mut() {
                    if rng.random_bool(rate) {
                        *p = rng.random_range(0..=MAX_PRIORITY);
                    }
                }
                for g in [strategy_gene, band_gene] {
                    if rng.random_bool(rate) {
                        *g = rng.random_range(0..=MAX_STRATEGY_GENE);
                    }
                }
            }
        }
    }
}

/// The child takes a random segment from `a` and keeps the order of `b` elsewhere.
/// Values displaced by the segment are swapped to the positions the segment values held in `b`.
fn partially_matched_crossover(a: &[usize], b: &[usize], rng: &mut impl Rng) -> Vec<usize> {
    let n = a.len();
    if n < 2 || b.len() != n {
        return a.to_vec();
    }
    let (mut p1, mut p2) = (rng.random_range(0..n), rng.random_range(0..n));
    if p1 > p2 {
        std::mem::swap(&mut p1, &mut p2);
    }

    let mut child = b.to_vec();
    //position of every value within the child
    let mut pos = vec![0; n];
    for (i, &v) in child.iter().enumerate() {
        pos[v] = i;
    }
    for i in p1..=p2 {
        let (v, w) = (a[i], child[i]);
        let j = pos[v];
        child.swap(i, j);
        pos[v] = i;
        pos[w] = j;
    }
    child
}
