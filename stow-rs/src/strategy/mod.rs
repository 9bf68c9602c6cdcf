use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::error::{PackError, Result};
use crate::geometry::geo_enums::Dimensionality;
use crate::geometry::primitives::{Anchor, Footprint};
use crate::occupancy::OccupancyGrid;
use crate::util::EvalConfig;

mod scan_2d;
mod scan_3d;

/// Axis-ordered first-fit scanning shared by the strategies
pub mod scan;

pub use scan_2d::{BestFitSearch, BottomLeftSearch, FirstFitSearch, TopLeftSearch};
pub use scan_3d::{BottomUpSearch, FrontToBackSearch, HintedSearch, LayeredSearch, MixedSearch};

/// Searches the grid for a position at which an item footprint fits.
/// A searcher lives for a single simulation run and may carry state between placements.
pub trait PositionSearch {
    /// Returns the anchor at which `fp` should be placed, or `None` if it does not fit anywhere
    fn find(&mut self, fp: Footprint, grid: &OccupancyGrid) -> Option<Anchor>;

    /// Informs the searcher that `fp` has been placed at `anchor`
    fn register(&mut self, _fp: Footprint, _anchor: Anchor) {}
}

/// Selects the placement search used during a simulation
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Strategy {
    /// Layer-by-layer scan resuming from the previous placement
    Hinted,
    BottomUp,
    /// Front-to-back scan starting at a preferred depth band
    Layered { band: usize },
    FrontToBack,
    /// Bottom-up for band 0, otherwise layered, front-to-back as fallback
    Mixed { band: usize },
    BottomLeft,
    TopLeft,
    /// Feasible position closest to the origin
    BestFit,
    /// Column-major scan
    FirstFit,
}

impl Strategy {
    pub fn dimensionality(&self) -> Dimensionality {
        match self {
            Strategy::Hinted
            | Strategy::BottomUp
            | Strategy::Layered { .. }
            | Strategy::FrontToBack
            | Strategy::Mixed { .. } => Dimensionality::Three,
            Strategy::BottomLeft | Strategy::TopLeft | Strategy::BestFit | Strategy::FirstFit => {
                Dimensionality::Two
            }
        }
    }

    pub fn is_3d(&self) -> bool {
        self.dimensionality() == Dimensionality::Three
    }

    /// Decodes a strategy from a pair of integer genes.
    /// The strategy gene selects one of four strategies per dimensionality,
    /// the band gene selects the preferred depth band of the banded 3D strategies.
    pub fn from_genes(dim: Dimensionality, strategy_gene: u32, band_gene: u32, n_bands: usize) -> Strategy {
        let band = band_gene as usize % n_bands.max(1);
        match (dim, strategy_gene % 4) {
            (Dimensionality::Three, 0) => Strategy::BottomUp,
            (Dimensionality::Three, 1) => Strategy::Layered { band },
            (Dimensionality::Three, 2) => Strategy::FrontToBack,
            (Dimensionality::Three, _) => Strategy::Mixed { band },
            (Dimensionality::Two, 0) => Strategy::BottomLeft,
            (Dimensionality::Two, 1) => Strategy::TopLeft,
            (Dimensionality::Two, 2) => Strategy::BestFit,
            (Dimensionality::Two, _) => Strategy::FirstFit,
        }
    }

    /// Checks whether the strategy can be used for a container of the given dimensionality
    pub fn check_compatible(&self, dim: Dimensionality, config: &EvalConfig) -> Result<()> {
        if self.dimensionality() != dim {
            return Err(PackError::IncompatibleStrategy(format!(
                "{self} is a {} strategy, the container is {dim}",
                self.dimensionality()
            )));
        }
        match self {
            Strategy::Layered { band } | Strategy::Mixed { band } if *band >= config.n_bands => {
                Err(PackError::IncompatibleStrategy(format!(
                    "{self} exceeds the number of bands ({})",
                    config.n_bands
                )))
            }
            _ => Ok(()),
        }
    }

    /// Creates a fresh searcher for a grid with dimensions `dims`
    pub fn searcher(&self, config: &EvalConfig, dims: Footprint) -> Box<dyn PositionSearch> {
        match *self {
            Strategy::Hinted => Box::new(HintedSearch::new(dims, config.hint_layer_step)),
            Strategy::BottomUp => Box::new(BottomUpSearch),
            Strategy::Layered { band } => Box::new(LayeredSearch::new(dims, band, config.n_bands)),
            Strategy::FrontToBack => Box::new(FrontToBackSearch),
            Strategy::Mixed { band } => Box::new(MixedSearch::new(dims, band, config.n_bands)),
            Strategy::BottomLeft => Box::new(BottomLeftSearch),
            Strategy::TopLeft => Box::new(TopLeftSearch),
            Strategy::BestFit => Box::new(BestFitSearch),
            Strategy::FirstFit => Box::new(FirstFitSearch),
        }
    }
}

impl Display for Strategy {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Strategy::Hinted => write!(f, "hinted"),
            Strategy::BottomUp => write!(f, "bottom-up"),
            Strategy::Layered { band } => write!(f, "layered (band {band})"),
            Strategy::FrontToBack => write!(f, "front-to-back"),
            Strategy::Mixed { band } => write!(f, "mixed (band {band})"),
            Strategy::BottomLeft => write!(f, "bottom-left"),
            Strategy::TopLeft => write!(f, "top-left"),
            Strategy::BestFit => write!(f, "best-fit"),
            Strategy::FirstFit => write!(f, "first-fit"),
        }
    }
}
