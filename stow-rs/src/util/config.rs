use serde::{Deserialize, Serialize};

use crate::error::{PackError, Result};

/// Configuration of a fitness evaluation
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
#[serde(default)]
pub struct EvalConfig {
    /// Weights of the fitness components
    pub weights: FitnessWeights,
    /// Step by which the hinted scan advances its layer hint once a row is full
    pub hint_layer_step: usize,
    /// Number of equal bands the depth axis is divided into by the layered strategy
    pub n_bands: usize,
    /// Maximum number of instances per item type in a generated item sequence
    pub instance_cap: usize,
}

impl EvalConfig {
    pub fn validate(&self) -> Result<()> {
        self.weights.validate()?;
        if self.hint_layer_step == 0 {
            return Err(PackError::InvalidConfig(
                "hint_layer_step must be at least 1".to_string(),
            ));
        }
        if self.n_bands == 0 {
            return Err(PackError::InvalidConfig(
                "n_bands must be at least 1".to_string(),
            ));
        }
        if self.instance_cap == 0 {
            return Err(PackError::InvalidConfig(
                "instance_cap must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for EvalConfig {
    fn default() -> Self {
        Self {
            weights: FitnessWeights::default(),
            hint_layer_step: 5,
            n_bands: 3,
            instance_cap: 50,
        }
    }
}

/// Weights combining the metrics of a solution into a single score:
///
/// `utilization_weight * used% + value / value_divisor - wastage_penalty * penalized%`
///
/// where the percentages are relative to the container capacity.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
#[serde(default)]
pub struct FitnessWeights {
    pub utilization_weight: f64,
    pub value_divisor: f64,
    pub wastage_penalty: f64,
}

impl FitnessWeights {
    pub fn validate(&self) -> Result<()> {
        let all_finite = [
            self.utilization_weight,
            self.value_divisor,
            self.wastage_penalty,
        ]
        .iter()
        .all(|w| w.is_finite());
        if !all_finite {
            return Err(PackError::InvalidConfig(format!(
                "fitness weights must be finite: {self:?}"
            )));
        }
        if self.value_divisor <= 0.0 {
            return Err(PackError::InvalidConfig(format!(
                "value_divisor must be positive, got {}",
                self.value_divisor
            )));
        }
        Ok(())
    }
}

impl Default for FitnessWeights {
    fn default() -> Self {
        Self {
            utilization_weight: 1.0,
            value_divisor: 10.0,
            wastage_penalty: 0.5,
        }
    }
}
