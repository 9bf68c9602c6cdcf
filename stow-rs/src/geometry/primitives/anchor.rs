use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::geometry::geo_enums::{Axis, Dimensionality};

/// Integer grid position of the corner of a placed item closest to the origin.
/// In 2D containers `z` is always 0.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Anchor {
    pub x: usize,
    pub y: usize,
    pub z: usize,
}

impl Anchor {
    pub const ORIGIN: Anchor = Anchor { x: 0, y: 0, z: 0 };

    pub fn new(x: usize, y: usize, z: usize) -> Self {
        Anchor { x, y, z }
    }

    pub fn new_2d(x: usize, y: usize) -> Self {
        Anchor { x, y, z: 0 }
    }

    pub fn get(&self, axis: Axis) -> usize {
        match axis {
            Axis::X => self.x,
            Axis::Y => self.y,
            Axis::Z => self.z,
        }
    }

    pub fn set(&mut self, axis: Axis, value: usize) {
        match axis {
            Axis::X => self.x = value,
            Axis::Y => self.y = value,
            Axis::Z => self.z = value,
        }
    }

    /// Euclidean distance to the origin of the grid
    pub fn distance_to_origin(&self) -> f64 {
        let (x, y, z) = (self.x as f64, self.y as f64, self.z as f64);
        (x * x + y * y + z * z).sqrt()
    }

    /// Coordinates as a vector of 2 or 3 elements
    pub fn coords(&self, dim: Dimensionality) -> Vec<usize> {
        match dim {
            Dimensionality::Two => vec![self.x, self.y],
            Dimensionality::Three => vec![self.x, self.y, self.z],
        }
    }
}

impl Display for Anchor {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}
