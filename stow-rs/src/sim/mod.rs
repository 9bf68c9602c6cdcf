use log::{debug, trace, warn};

use crate::entities::{Instance, Placement};
use crate::geometry::Rotation;
use crate::occupancy::OccupancyGrid;
use crate::strategy::Strategy;
use crate::util::EvalConfig;

mod sequence;

pub use sequence::{catalog_sequence, priority_sequence};

/// Places the items of `sequence` one by one into an empty container, in a single pass.
///
/// Each entry is an item type id. Unknown ids and item types whose quantity is exhausted are skipped,
/// as are items for which the strategy finds no feasible position.
/// The result is fully determined by its inputs.
pub fn simulate(
    instance: &Instance,
    sequence: &[usize],
    strategy: Strategy,
    config: &EvalConfig,
) -> Vec<Placement> {
    let mut grid = OccupancyGrid::for_container(&instance.container);
    let mut searcher = strategy.searcher(config, grid.dims());
    let mut placed_qtys = vec![0; instance.items.len()];
    let mut placements = vec![];

    for (i, &item_id) in sequence.iter().enumerate() {
        let Some(item) = instance.items.get(item_id) else {
            warn!("[SIM] unknown item id {item_id} at sequence position {i}, skipping");
            continue;
        };
        if placed_qtys[item_id] >= item.quantity {
            trace!("[SIM] quantity of {} exhausted, skipping", item.name);
            continue;
        }
        let rotation = Rotation::default();
        let fp = rotation.apply(item.footprint());
        match searcher.find(fp, &grid) {
            Some(anchor) => {
                grid.mark_occupied(fp, anchor);
                searcher.register(fp, anchor);
                placed_qtys[item_id] += 1;
                placements.push(Placement::new(item_id, anchor, rotation));
                trace!("[SIM] placed {} at {anchor}", item.name);
            }
            None => debug!("[SIM] no position found for {} ({fp}), skipping", item.name),
        }
    }

    debug!(
        "[SIM] {} placed {}/{} items",
        strategy,
        placements.len(),
        sequence.len()
    );
    placements
}
