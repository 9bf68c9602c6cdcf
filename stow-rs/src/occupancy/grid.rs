use ndarray::{Array3, s};

use crate::entities::{Container, ItemType};
use crate::geometry::Rotation;
use crate::geometry::primitives::{Anchor, Footprint};

/// Dense record of which unit cells of a container are filled, indexed as `[x, y, z]`.
/// 2D containers are represented with a depth of a single cell.
///
/// A grid belongs to exactly one simulation run and is discarded afterwards.
#[derive(Clone, Debug)]
pub struct OccupancyGrid {
    cells: Array3<bool>,
    dims: Footprint,
}

impl OccupancyGrid {
    pub fn new(dims: Footprint) -> Self {
        let cells = Array3::from_elem((dims.x, dims.y, dims.z), false);
        Self { cells, dims }
    }

    pub fn for_container(container: &Container) -> Self {
        Self::new(container.grid_dims())
    }

    pub fn dims(&self) -> Footprint {
        self.dims
    }

    /// Returns whether a footprint at `anchor` lies fully within the grid
    pub fn in_bounds(&self, fp: Footprint, anchor: Anchor) -> bool {
        anchor.x + fp.x <= self.dims.x
            && anchor.y + fp.y <= self.dims.y
            && anchor.z + fp.z <= self.dims.z
    }

    /// Returns whether a footprint at `anchor` lies within the grid and covers only free cells.
    /// Cost is proportional to the footprint, stopping at the first filled cell.
    pub fn can_place(&self, fp: Footprint, anchor: Anchor) -> bool {
        if !self.in_bounds(fp, anchor) {
            return false;
        }
        let Anchor { x, y, z } = anchor;
        !self
            .cells
            .slice(s![x..x + fp.x, y..y + fp.y, z..z + fp.z])
            .iter()
            .any(|&filled| filled)
    }

    /// [`OccupancyGrid::can_place`] for an item type in a given orientation
    pub fn can_place_item(&self, item: &ItemType, anchor: Anchor, rotation: Rotation) -> bool {
        self.can_place(rotation.apply(item.footprint()), anchor)
    }

    /// Marks the cells covered by a footprint at `anchor` as filled.
    /// Cells outside the grid are silently ignored.
    pub fn mark_occupied(&mut self, fp: Footprint, anchor: Anchor) {
        let Anchor { x, y, z } = anchor;
        let x_end = usize::min(x + fp.x, self.dims.x);
        let y_end = usize::min(y + fp.y, self.dims.y);
        let z_end = usize::min(z + fp.z, self.dims.z);
        if x >= x_end || y >= y_end || z >= z_end {
            return;
        }
        self.cells
            .slice_mut(s![x..x_end, y..y_end, z..z_end])
            .fill(true);
    }

    /// [`OccupancyGrid::mark_occupied`] for an item type in a given orientation
    pub fn mark_item(&mut self, item: &ItemType, anchor: Anchor, rotation: Rotation) {
        self.mark_occupied(rotation.apply(item.footprint()), anchor);
    }

    pub fn is_occupied(&self, cell: Anchor) -> bool {
        self.cells
            .get((cell.x, cell.y, cell.z))
            .copied()
            .unwrap_or(false)
    }

    /// Number of filled cells
    pub fn occupied_cells(&self) -> usize {
        self.cells.iter().filter(|&&filled| filled).count()
    }

    /// Empties every cell, keeping the allocation
    pub fn clear(&mut self) {
        self.cells.fill(false);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn place_and_mark() {
        let mut grid = OccupancyGrid::new(Footprint::new(10, 10, 10));
        let fp = Footprint::new(4, 3, 2);

        assert!(grid.can_place(fp, Anchor::ORIGIN));
        grid.mark_occupied(fp, Anchor::ORIGIN);
        assert_eq!(grid.occupied_cells(), 24);

        assert!(!grid.can_place(fp, Anchor::ORIGIN));
        assert!(!grid.can_place(fp, Anchor::new(3, 2, 1)));
        assert!(grid.can_place(fp, Anchor::new(4, 0, 0)));
        assert!(grid.can_place(fp, Anchor::new(0, 3, 0)));
        assert!(grid.can_place(fp, Anchor::new(0, 0, 2)));
    }

    #[test]
    fn bounds_are_enforced() {
        let grid = OccupancyGrid::new(Footprint::new(10, 8, 6));
        let fp = Footprint::new(4, 4, 4);
        assert!(grid.can_place(fp, Anchor::new(6, 4, 2)));
        assert!(!grid.can_place(fp, Anchor::new(7, 0, 0)));
        assert!(!grid.can_place(fp, Anchor::new(0, 5, 0)));
        assert!(!grid.can_place(fp, Anchor::new(0, 0, 3)));
        assert!(!grid.can_place(Footprint::new(11, 1, 1), Anchor::ORIGIN));
    }

    #[test]
    fn marking_clips_at_edges() {
        let mut grid = OccupancyGrid::new(Footprint::new(5, 5, 1));
        grid.mark_occupied(Footprint::new(3, 3, 1), Anchor::new(3, 3, 0));
        assert_eq!(grid.occupied_cells(), 4);
        assert!(grid.is_occupied(Anchor::new(4, 4, 0)));
        assert!(!grid.is_occupied(Anchor::new(5, 5, 0)));

        grid.mark_occupied(Footprint::new(2, 2, 1), Anchor::new(7, 7, 0));
        assert_eq!(grid.occupied_cells(), 4);
    }

    #[test]
    fn rotated_items() {
        let shape = crate::geometry::Shape::Box {
            width: 6.0,
            height: 2.0,
            depth: 1.0,
        };
        let item = ItemType::new(0, "plank", shape, 1, 0.0).unwrap();
        let mut grid = OccupancyGrid::new(Footprint::new(4, 6, 1));

        assert!(!grid.can_place_item(&item, Anchor::ORIGIN, Rotation::Xyz));
        assert!(grid.can_place_item(&item, Anchor::ORIGIN, Rotation::Yxz));

        grid.mark_item(&item, Anchor::ORIGIN, Rotation::Yxz);
        assert_eq!(grid.occupied_cells(), 12);
        grid.clear();
        assert_eq!(grid.occupied_cells(), 0);
    }
}
