use crate::eval::Metrics;
use crate::geometry::geo_enums::Dimensionality;
use crate::util::FitnessWeights;

impl FitnessWeights {
    /// Combines the metrics of a solution into a single score to be maximized.
    ///
    /// In 3D the penalty applies to the unfilled volume and the score is clamped at zero,
    /// in 2D the penalty applies to the shape wastage and the score is left unclamped.
    pub fn score(&self, metrics: &Metrics, dim: Dimensionality) -> f64 {
        let capacity = metrics.capacity;
        let utilization = metrics.used / capacity * 100.0;
        let value = metrics.total_value / self.value_divisor;
        let penalized = match dim {
            Dimensionality::Three => metrics.unfilled,
            Dimensionality::Two => metrics.shape_wastage,
        };
        let penalty = penalized / capacity * 100.0;
        let fitness = self.utilization_weight * utilization + value - self.wastage_penalty * penalty;
        match dim {
            Dimensionality::Three => fitness.max(0.0),
            Dimensionality::Two => fitness,
        }
    }
}

#[cfg(test)]
mod tests {
    use float_cmp::approx_eq;

    use super::*;

    fn metrics(capacity: f64, used: f64, occupied: f64, total_value: f64) -> Metrics {
        Metrics {
            capacity,
            used,
            occupied,
            shape_wastage: occupied - used,
            unfilled: capacity - used,
            total_value,
            n_placed: 1,
        }
    }

    #[test]
    fn three_dimensional() {
        let w = FitnessWeights::default();
        //60% used, value 120, 40% unfilled
        let m = metrics(1000.0, 600.0, 600.0, 120.0);
        assert!(approx_eq!(f64, w.score(&m, Dimensionality::Three), 60.0 + 12.0 - 20.0, epsilon = 1e-9));
    }

    #[test]
    fn three_dimensional_clamped() {
        let w = FitnessWeights::default();
        let m = metrics(1000.0, 50.0, 50.0, 0.0);
        assert_eq!(w.score(&m, Dimensionality::Three), 0.0);
    }

    #[test]
    fn two_dimensional_penalizes_shape_wastage() {
        let w = FitnessWeights::default();
        //25% used, 5% shape wastage
        let m = metrics(400.0, 100.0, 120.0, 30.0);
        assert!(approx_eq!(f64, w.score(&m, Dimensionality::Two), 25.0 + 3.0 - 2.5, epsilon = 1e-9));
    }

    #[test]
    fn custom_weights() {
        let w = FitnessWeights {
            utilization_weight: 2.0,
            value_divisor: 1.0,
            wastage_penalty: 0.0,
        };
        let m = metrics(100.0, 10.0, 20.0, 4.0);
        assert!(approx_eq!(f64, w.score(&m, Dimensionality::Two), 24.0, epsilon = 1e-9));
        assert!(approx_eq!(f64, w.score(&m, Dimensionality::Three), 24.0, epsilon = 1e-9));
    }
}
