use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

/// Number of spatial axes of a container, item shape or strategy.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Dimensionality {
    /// Area packing, the depth axis collapses to a single cell
    Two,
    /// Volume packing
    Three,
}

impl Display for Dimensionality {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Dimensionality::Two => write!(f, "2D"),
            Dimensionality::Three => write!(f, "3D"),
        }
    }
}

/// Axis of the occupancy grid.
/// `X` spans the width, `Y` the height and `Z` the depth of a container.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Axis {
    X,
    Y,
    Z,
}
