use serde::{Deserialize, Serialize};
use stow_rs::eval::Encoding;
use stow_rs::io::ext_repr::{ExtInstance, ExtSolution};

use crate::config::GaConfig;

/// Contents of a solution file: the instance, the best solution found and how it was found
#[derive(Serialize, Deserialize, Clone)]
pub struct GaOutput {
    #[serde(flatten)]
    pub instance: ExtInstance,
    pub solution: ExtSolution,
    /// Decoded form of the best chromosome
    pub encoding: Encoding,
    pub config: GaConfig,
    /// Best fitness after every generation
    pub history: Vec<f64>,
    pub run_time_sec: u64,
}
