use std::fmt::{Display, Formatter};

use crate::geometry::geo_enums::Axis;
use crate::geometry::primitives::Anchor;

/// Number of grid cells spanned along each axis.
/// Used both for the extent of items and for the dimensions of the grid itself.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Footprint {
    pub x: usize,
    pub y: usize,
    pub z: usize,
}

impl Footprint {
    pub fn new(x: usize, y: usize, z: usize) -> Self {
        Footprint { x, y, z }
    }

    /// Number of whole cells covering a (possibly fractional) extent
    pub fn cells_covering(extent: f64) -> usize {
        extent.ceil() as usize
    }

    pub fn get(&self, axis: Axis) -> usize {
        match axis {
            Axis::X => self.x,
            Axis::Y => self.y,
            Axis::Z => self.z,
        }
    }

    /// Total number of cells, `None` if the count overflows `usize`
    pub fn n_cells(&self) -> Option<usize> {
        self.x.checked_mul(self.y)?.checked_mul(self.z)
    }

    /// Returns whether `other` fits inside `self` when placed at the origin
    pub fn contains(&self, other: &Footprint) -> bool {
        other.x <= self.x && other.y <= self.y && other.z <= self.z
    }

    /// The largest anchor at which `item` still lies within `self`, if any
    pub fn max_anchor(&self, item: &Footprint) -> Option<Anchor> {
        match self.contains(item) {
            true => Some(Anchor::new(
                self.x - item.x,
                self.y - item.y,
                self.z - item.z,
            )),
            false => None,
        }
    }
}

impl Display for Footprint {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x{}x{}", self.x, self.y, self.z)
    }
}
