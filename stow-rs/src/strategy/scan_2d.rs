use ordered_float::NotNan;

use crate::geometry::primitives::{Anchor, Footprint};
use crate::occupancy::OccupancyGrid;
use crate::strategy::PositionSearch;
use crate::strategy::scan::{XYZ, YXZ, first_fit};

/// Lowest row first, leftmost position within the row
#[derive(Clone, Copy, Debug, Default)]
pub struct BottomLeftSearch;

impl PositionSearch for BottomLeftSearch {
    fn find(&mut self, fp: Footprint, grid: &OccupancyGrid) -> Option<Anchor> {
        first_fit(grid, fp, YXZ, Anchor::ORIGIN)
    }
}

/// Highest feasible row first, leftmost position within the row
#[derive(Clone, Copy, Debug, Default)]
pub struct TopLeftSearch;

impl PositionSearch for TopLeftSearch {
    fn find(&mut self, fp: Footprint, grid: &OccupancyGrid) -> Option<Anchor> {
        let max = grid.dims().max_anchor(&fp)?;
        (0..=max.y)
            .rev()
            .flat_map(|y| (0..=max.x).map(move |x| Anchor::new_2d(x, y)))
            .find(|&anchor| grid.can_place(fp, anchor))
    }
}

/// Leftmost column first, lowest position within the column
#[derive(Clone, Copy, Debug, Default)]
pub struct FirstFitSearch;

impl PositionSearch for FirstFitSearch {
    fn find(&mut self, fp: Footprint, grid: &OccupancyGrid) -> Option<Anchor> {
        first_fit(grid, fp, XYZ, Anchor::ORIGIN)
    }
}

/// The feasible position closest to the origin.
/// Ties go to the first position in bottom-left scan order.
#[derive(Clone, Copy, Debug, Default)]
pub struct BestFitSearch;

impl PositionSearch for BestFitSearch {
    fn find(&mut self, fp: Footprint, grid: &OccupancyGrid) -> Option<Anchor> {
        let max = grid.dims().max_anchor(&fp)?;
        let mut best: Option<(NotNan<f64>, Anchor)> = None;
        for y in 0..=max.y {
            //every anchor in row y lies at least y away from the origin
            if best.is_some_and(|(dist, _)| dist.into_inner() <= y as f64) {
                break;
            }
            //within a row the leftmost feasible anchor is the closest
            let Some(anchor) = (0..=max.x)
                .map(|x| Anchor::new_2d(x, y))
                .find(|&anchor| grid.can_place(fp, anchor))
            else {
                continue;
            };
            let dist = NotNan::new(anchor.distance_to_origin()).expect("distance to origin is never NaN");
            if best.is_none_or(|(best_dist, _)| dist < best_dist) {
                best = Some((dist, anchor));
            }
        }
        best.map(|(_, anchor)| anchor)
    }
}
