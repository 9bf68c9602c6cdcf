mod grid;

#[doc(inline)]
pub use grid::OccupancyGrid;
