use float_cmp::approx_eq;
use itertools::Itertools;
use log::error;

use crate::entities::{Instance, ItemType, Placement, Solution};
use crate::eval::Metrics;
//Various checks to verify correctness of the state of the system
//Used in debug_assert!() blocks and tests

pub fn instance_item_ids_correct(items: &[ItemType]) -> bool {
    items.iter().enumerate().all(|(i, item)| item.id == i)
}

/// No two placements share a cell (exhaustive pairwise check)
pub fn placements_are_disjoint(instance: &Instance, placements: &[Placement]) -> bool {
    for ((i, a), (j, b)) in placements.iter().enumerate().tuple_combinations() {
        if a.overlaps(b, instance) {
            error!("placement {i} ({a:?}) overlaps with placement {j} ({b:?})");
            return false;
        }
    }
    true
}

/// Every placement lies within the grid of the container
pub fn placements_in_bounds(instance: &Instance, placements: &[Placement]) -> bool {
    let dims = instance.container.grid_dims();
    placements.iter().all(|p| {
        let upper = p.upper(instance);
        let in_bounds = upper.x <= dims.x && upper.y <= dims.y && upper.z <= dims.z;
        if !in_bounds {
            error!("placement {p:?} exceeds grid {dims}");
        }
        in_bounds
    })
}

/// No item type is placed more often than its available quantity
pub fn quantities_respected(instance: &Instance, placements: &[Placement]) -> bool {
    let counts = placements.iter().counts_by(|p| p.item_id);
    counts
        .into_iter()
        .all(|(id, n)| id < instance.items.len() && n <= instance.item(id).quantity)
}

/// The metrics stored in the solution match a fresh computation from its placements
pub fn solution_metrics_consistent(instance: &Instance, solution: &Solution) -> bool {
    let fresh = Metrics::compute(instance, solution.placements());
    let stored = solution.metrics();
    approx_eq!(f64, fresh.used, stored.used)
        && approx_eq!(f64, fresh.occupied, stored.occupied)
        && approx_eq!(f64, fresh.total_value, stored.total_value)
        && fresh.n_placed == stored.n_placed
}

/// All layout invariants of a solution at once
pub fn solution_is_feasible(instance: &Instance, solution: &Solution) -> bool {
    let placements = solution.placements();
    placements_are_disjoint(instance, placements)
        && placements_in_bounds(instance, placements)
        && quantities_respected(instance, placements)
        && solution_metrics_consistent(instance, solution)
}
