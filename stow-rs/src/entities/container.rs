use crate::error::{PackError, Result};
use crate::geometry::geo_enums::Dimensionality;
use crate::geometry::primitives::Footprint;

/// The fixed space into which items are placed.
/// A container without depth is a 2D (area) container.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Container {
    pub width: f64,
    pub height: f64,
    pub depth: Option<f64>,
}

impl Container {
    /// Upper limit on the number of cells of the occupancy grid of a container
    pub const MAX_GRID_CELLS: usize = 1 << 31;

    pub fn new(width: f64, height: f64, depth: Option<f64>) -> Result<Container> {
        let dims = [Some(width), Some(height), depth];
        if let Some(d) = dims.into_iter().flatten().find(|d| !d.is_finite() || *d <= 0.0) {
            return Err(PackError::InvalidContainerSpec(format!(
                "container dimensions must be positive, got {d}"
            )));
        }
        let container = Container {
            width,
            height,
            depth,
        };
        match container.grid_dims().n_cells() {
            Some(0) => {
                return Err(PackError::InvalidContainerSpec(format!(
                    "container {width}x{height}x{depth:?} does not contain a single whole cell"
                )));
            }
            Some(n) if n <= Self::MAX_GRID_CELLS => {}
            _ => {
                return Err(PackError::InvalidContainerSpec(format!(
                    "grid of container {width}x{height}x{depth:?} exceeds {} cells",
                    Self::MAX_GRID_CELLS
                )));
            }
        }
        Ok(container)
    }

    pub fn new_2d(width: f64, height: f64) -> Result<Container> {
        Container::new(width, height, None)
    }

    pub fn new_3d(width: f64, height: f64, depth: f64) -> Result<Container> {
        Container::new(width, height, Some(depth))
    }

    pub fn dimensionality(&self) -> Dimensionality {
        match self.depth {
            Some(_) => Dimensionality::Three,
            None => Dimensionality::Two,
        }
    }

    /// Total area (2D) or volume (3D)
    pub fn capacity(&self) -> f64 {
        self.width * self.height * self.depth.unwrap_or(1.0)
    }

    /// Dimensions of the occupancy grid: the declared dimensions truncated to whole cells.
    /// 2D containers have a single layer of depth.
    pub fn grid_dims(&self) -> Footprint {
        Footprint::new(
            self.width.floor() as usize,
            self.height.floor() as usize,
            self.depth.map_or(1, |d| d.floor() as usize),
        )
    }
}
