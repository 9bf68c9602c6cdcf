use itertools::iproduct;

use crate::geometry::geo_enums::Axis;
use crate::geometry::primitives::{Anchor, Footprint};
use crate::occupancy::OccupancyGrid;

/// Iteration order of the axes during a scan, outermost first
pub type AxisOrder = [Axis; 3];

pub const YXZ: AxisOrder = [Axis::Y, Axis::X, Axis::Z];
pub const YZX: AxisOrder = [Axis::Y, Axis::Z, Axis::X];
pub const ZYX: AxisOrder = [Axis::Z, Axis::Y, Axis::X];
pub const XYZ: AxisOrder = [Axis::X, Axis::Y, Axis::Z];

/// Returns the first anchor at which `fp` can be placed, iterating the axes in `order`.
/// Every axis runs from its coordinate in `from` up to the largest anchor still within the grid.
pub fn first_fit(
    grid: &OccupancyGrid,
    fp: Footprint,
    order: AxisOrder,
    from: Anchor,
) -> Option<Anchor> {
    let max = grid.dims().max_anchor(&fp)?;
    let [a0, a1, a2] = order;
    iproduct!(
        from.get(a0)..=max.get(a0),
        from.get(a1)..=max.get(a1),
        from.get(a2)..=max.get(a2)
    )
    .map(|(c0, c1, c2)| {
        let mut anchor = Anchor::ORIGIN;
        anchor.set(a0, c0);
        anchor.set(a1, c1);
        anchor.set(a2, c2);
        anchor
    })
    .find(|&anchor| grid.can_place(fp, anchor))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn order_determines_first_anchor() {
        let mut grid = OccupancyGrid::new(Footprint::new(4, 4, 4));
        let fp = Footprint::new(2, 2, 2);
        grid.mark_occupied(fp, Anchor::ORIGIN);

        assert_eq!(first_fit(&grid, fp, YXZ, Anchor::ORIGIN), Some(Anchor::new(0, 0, 2)));
        assert_eq!(first_fit(&grid, fp, ZYX, Anchor::ORIGIN), Some(Anchor::new(2, 0, 0)));
        assert_eq!(first_fit(&grid, fp, XYZ, Anchor::ORIGIN), Some(Anchor::new(0, 0, 2)));
        assert_eq!(first_fit(&grid, fp, YZX, Anchor::ORIGIN), Some(Anchor::new(2, 0, 0)));
    }

    #[test]
    fn lower_bounds_are_respected() {
        let grid = OccupancyGrid::new(Footprint::new(4, 4, 4));
        let fp = Footprint::new(1, 1, 1);
        let from = Anchor::new(0, 0, 3);
        assert_eq!(first_fit(&grid, fp, ZYX, from), Some(from));
    }

    #[test]
    fn oversized_footprint() {
        let grid = OccupancyGrid::new(Footprint::new(4, 4, 4));
        assert_eq!(first_fit(&grid, Footprint::new(5, 1, 1), YXZ, Anchor::ORIGIN), None);
    }
}
