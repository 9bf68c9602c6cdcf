use serde::{Deserialize, Serialize};

use crate::strategy::Strategy;

/// Candidate solution as produced by a search process:
/// the order in which items are offered to the simulator and the strategy used to place them.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Encoding {
    /// Item type ids, one entry per item instance to place
    pub sequence: Vec<usize>,
    pub strategy: Strategy,
}

impl Encoding {
    pub fn new(sequence: Vec<usize>, strategy: Strategy) -> Self {
        Encoding { sequence, strategy }
    }
}
