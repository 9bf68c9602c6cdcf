use crate::geometry::primitives::{Anchor, Footprint};
use crate::occupancy::OccupancyGrid;
use crate::strategy::PositionSearch;
use crate::strategy::scan::{YXZ, ZYX, first_fit};

/// Scans layer by layer (y, then z, then x), resuming from a hint that trails the last placement.
/// Falls back to a scan from the origin when nothing fits beyond the hint.
#[derive(Clone, Debug)]
pub struct HintedSearch {
    hint: Anchor,
    layer_step: usize,
    dims: Footprint,
}

impl HintedSearch {
    pub fn new(dims: Footprint, layer_step: usize) -> Self {
        Self {
            hint: Anchor::ORIGIN,
            layer_step,
            dims,
        }
    }

    pub fn hint(&self) -> Anchor {
        self.hint
    }

    /// Only the first row and layer of the scan start at the hint, later ones start at 0
    fn scan_from(&self, fp: Footprint, grid: &OccupancyGrid, start: Anchor) -> Option<Anchor> {
        let max = grid.dims().max_anchor(&fp)?;
        for y in start.y..=max.y {
            let z_start = if y == start.y { start.z } else { 0 };
            for z in z_start..=max.z {
                let x_start = if y == start.y && z == start.z { start.x } else { 0 };
                for x in x_start..=max.x {
                    let anchor = Anchor::new(x, y, z);
                    if grid.can_place(fp, anchor) {
                        return Some(anchor);
                    }
                }
            }
        }
        None
    }
}

impl PositionSearch for HintedSearch {
    fn find(&mut self, fp: Footprint, grid: &OccupancyGrid) -> Option<Anchor> {
        self.scan_from(fp, grid, self.hint)
            .or_else(|| self.scan_from(fp, grid, Anchor::ORIGIN))
    }

    fn register(&mut self, fp: Footprint, anchor: Anchor) {
        self.hint.x = anchor.x + fp.x;
        if self.hint.x >= self.dims.x {
            self.hint.x = 0;
            self.hint.z += self.layer_step;
            if self.hint.z >= self.dims.z {
                self.hint.z = 0;
                self.hint.y += self.layer_step;
            }
        }
    }
}

/// Fills the container from the floor up: y, then x, then z
#[derive(Clone, Copy, Debug, Default)]
pub struct BottomUpSearch;

impl PositionSearch for BottomUpSearch {
    fn find(&mut self, fp: Footprint, grid: &OccupancyGrid) -> Option<Anchor> {
        first_fit(grid, fp, YXZ, Anchor::ORIGIN)
    }
}

/// Fills the container from the front to the back: z, then y, then x
#[derive(Clone, Copy, Debug, Default)]
pub struct FrontToBackSearch;

impl PositionSearch for FrontToBackSearch {
    fn find(&mut self, fp: Footprint, grid: &OccupancyGrid) -> Option<Anchor> {
        first_fit(grid, fp, ZYX, Anchor::ORIGIN)
    }
}

/// Front-to-back scan starting at the front of a preferred depth band.
/// Retries over the full depth when nothing fits from that band onwards.
#[derive(Clone, Copy, Debug)]
pub struct LayeredSearch {
    band_start: usize,
}

impl LayeredSearch {
    /// The depth axis is divided into `n_bands` bands of `depth / n_bands` cells
    pub fn new(dims: Footprint, band: usize, n_bands: usize) -> Self {
        let band_size = dims.z / n_bands;
        Self {
            band_start: band * band_size,
        }
    }

    pub fn band_start(&self) -> usize {
        self.band_start
    }
}

impl PositionSearch for LayeredSearch {
    fn find(&mut self, fp: Footprint, grid: &OccupancyGrid) -> Option<Anchor> {
        let from = Anchor::new(0, 0, self.band_start);
        first_fit(grid, fp, ZYX, from).or_else(|| first_fit(grid, fp, ZYX, Anchor::ORIGIN))
    }
}

/// Bottom-up for the first band, layered for any other one.
/// Front-to-back when the preferred search fails.
#[derive(Clone, Copy, Debug)]
pub struct MixedSearch {
    layered: Option<LayeredSearch>,
}

impl MixedSearch {
    pub fn new(dims: Footprint, band: usize, n_bands: usize) -> Self {
        let layered = match band {
            0 => None,
            _ => Some(LayeredSearch::new(dims, band, n_bands)),
        };
        Self { layered }
    }
}

impl PositionSearch for MixedSearch {
    fn find(&mut self, fp: Footprint, grid: &OccupancyGrid) -> Option<Anchor> {
        let preferred = match &mut self.layered {
            None => BottomUpSearch.find(fp, grid),
            Some(layered) => layered.find(fp, grid),
        };
        preferred.or_else(|| FrontToBackSearch.find(fp, grid))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn place(search: &mut impl PositionSearch, grid: &mut OccupancyGrid, fp: Footprint) -> Option<Anchor> {
        let anchor = search.find(fp, grid)?;
        grid.mark_occupied(fp, anchor);
        search.register(fp, anchor);
        Some(anchor)
    }

    #[test]
    fn hinted_advances_along_x() {
        let dims = Footprint::new(30, 20, 20);
        let mut grid = OccupancyGrid::new(dims);
        let mut search = HintedSearch::new(dims, 5);
        let fp = Footprint::new(10, 10, 10);

        assert_eq!(place(&mut search, &mut grid, fp), Some(Anchor::new(0, 0, 0)));
        assert_eq!(search.hint(), Anchor::new(10, 0, 0));
        assert_eq!(place(&mut search, &mut grid, fp), Some(Anchor::new(10, 0, 0)));
        assert_eq!(place(&mut search, &mut grid, fp), Some(Anchor::new(20, 0, 0)));
        //row is full, the hint moves one layer step back
        assert_eq!(search.hint(), Anchor::new(0, 0, 5));
        assert_eq!(place(&mut search, &mut grid, fp), Some(Anchor::new(0, 0, 10)));
    }

    #[test]
    fn hinted_wraps_depth_into_height() {
        let dims = Footprint::new(10, 20, 10);
        let mut search = HintedSearch::new(dims, 5);
        let fp = Footprint::new(10, 1, 1);

        search.register(fp, Anchor::ORIGIN);
        assert_eq!(search.hint(), Anchor::new(0, 0, 5));
        search.register(fp, Anchor::ORIGIN);
        assert_eq!(search.hint(), Anchor::new(0, 5, 0));
    }

    #[test]
    fn hinted_falls_back_to_origin() {
        let dims = Footprint::new(10, 10, 10);
        let mut grid = OccupancyGrid::new(dims);
        let mut search = HintedSearch::new(dims, 5);
        search.register(Footprint::new(5, 5, 5), Anchor::new(5, 5, 5));
        search.register(Footprint::new(5, 5, 5), Anchor::new(5, 5, 5));
        assert_eq!(search.hint(), Anchor::new(0, 5, 0));

        grid.mark_occupied(Footprint::new(10, 10, 10), Anchor::ORIGIN);
        assert_eq!(search.find(Footprint::new(2, 2, 2), &grid), None);

        //only the lower half is free, behind the hint
        let mut lower_free = OccupancyGrid::new(dims);
        lower_free.mark_occupied(Footprint::new(10, 5, 10), Anchor::new(0, 5, 0));
        assert_eq!(search.find(Footprint::new(2, 2, 2), &lower_free), Some(Anchor::ORIGIN));
    }

    #[test]
    fn bottom_up_fills_floor_first() {
        let dims = Footprint::new(20, 20, 20);
        let mut grid = OccupancyGrid::new(dims);
        let mut search = BottomUpSearch;
        let fp = Footprint::new(10, 10, 10);

        let anchors = (0..8)
            .map(|_| place(&mut search, &mut grid, fp))
            .collect::<Option<Vec<_>>>()
            .unwrap();
        assert_eq!(anchors[1], Anchor::new(0, 0, 10));
        assert_eq!(anchors[2], Anchor::new(10, 0, 0));
        assert!(anchors[..4].iter().all(|a| a.y == 0));
        assert_eq!(place(&mut search, &mut grid, fp), None);
    }

    #[test]
    fn front_to_back_fills_front_first() {
        let dims = Footprint::new(20, 20, 20);
        let mut grid = OccupancyGrid::new(dims);
        let mut search = FrontToBackSearch;
        let fp = Footprint::new(10, 10, 10);

        let anchors = (0..4)
            .map(|_| place(&mut search, &mut grid, fp))
            .collect::<Option<Vec<_>>>()
            .unwrap();
        assert!(anchors.iter().all(|a| a.z == 0));
        assert_eq!(anchors[1], Anchor::new(10, 0, 0));
        assert_eq!(anchors[2], Anchor::new(0, 10, 0));
    }

    #[test]
    fn layered_starts_in_band() {
        let dims = Footprint::new(10, 10, 30);
        let mut grid = OccupancyGrid::new(dims);
        let mut search = LayeredSearch::new(dims, 2, 3);
        assert_eq!(search.band_start(), 20);

        let fp = Footprint::new(10, 10, 10);
        assert_eq!(place(&mut search, &mut grid, fp), Some(Anchor::new(0, 0, 20)));
        //band exhausted, full scan from the front
        assert_eq!(place(&mut search, &mut grid, fp), Some(Anchor::new(0, 0, 0)));
        assert_eq!(place(&mut search, &mut grid, fp), Some(Anchor::new(0, 0, 10)));
        assert_eq!(place(&mut search, &mut grid, fp), None);
    }

    #[test]
    fn mixed_band_selection() {
        let dims = Footprint::new(10, 20, 30);
        let fp = Footprint::new(10, 10, 10);

        let mut grid = OccupancyGrid::new(dims);
        let mut bottom_up = MixedSearch::new(dims, 0, 3);
        assert_eq!(place(&mut bottom_up, &mut grid, fp), Some(Anchor::ORIGIN));
        assert_eq!(place(&mut bottom_up, &mut grid, fp), Some(Anchor::new(0, 0, 10)));

        let mut grid = OccupancyGrid::new(dims);
        let mut layered = MixedSearch::new(dims, 1, 3);
        assert_eq!(place(&mut layered, &mut grid, fp), Some(Anchor::new(0, 0, 10)));
        assert_eq!(place(&mut layered, &mut grid, fp), Some(Anchor::new(0, 10, 10)));
    }
}
