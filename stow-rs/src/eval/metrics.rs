use crate::entities::{Instance, Placement};

/// Aggregate measures of a set of placements.
/// `used`, `occupied` and `capacity` are areas for 2D instances and volumes for 3D instances.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Metrics {
    /// Area or volume of the container
    pub capacity: f64,
    /// Summed true measure of the placed items
    pub used: f64,
    /// Summed bounding measure of the placed items
    pub occupied: f64,
    /// Space inside the bounding boxes of placed items not covered by their shapes
    pub shape_wastage: f64,
    /// Capacity not covered by the true measure of placed items
    pub unfilled: f64,
    pub total_value: f64,
    pub n_placed: usize,
}

impl Metrics {
    pub fn compute(instance: &Instance, placements: &[Placement]) -> Self {
        let capacity = instance.container.capacity();
        let (used, occupied, total_value) = placements
            .iter()
            .map(|p| instance.item(p.item_id))
            .fold((0.0, 0.0, 0.0), |(u, o, v), item| {
                (u + item.measure(), o + item.bounding_measure(), v + item.value)
            });
        Metrics {
            capacity,
            used,
            occupied,
            shape_wastage: occupied - used,
            unfilled: capacity - used,
            total_value,
            n_placed: placements.len(),
        }
    }

    /// Percentage of the capacity covered by the true measure of the placed items
    pub fn utilization(&self) -> f64 {
        self.used / self.capacity * 100.0
    }
}
