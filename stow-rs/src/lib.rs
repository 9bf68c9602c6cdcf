//! Grid-based placement simulator for packing a catalog of item types into a single 2D or 3D container.
//!
//! An [`Encoding`](eval::Encoding) (an item sequence and a [`Strategy`](strategy::Strategy)) is turned into a
//! non-overlapping layout by the [`simulate`](sim::simulate) function and scored by the [`Evaluator`](eval::Evaluator).
//! Every evaluation owns its own [`OccupancyGrid`](occupancy::OccupancyGrid), so evaluations can run concurrently.

/// Entities to model packing problems
pub mod entities;

/// Error types of the library
pub mod error;

/// Metrics, fitness and the evaluation entry point
pub mod eval;

/// Shapes, dimensions and orientations
pub mod geometry;

/// Importing and exporting of instances and solutions
pub mod io;

/// Discretized record of the filled cells of a container
pub mod occupancy;

/// Placement simulation of an item sequence
pub mod sim;

/// Strategies to find a feasible position for an item
pub mod strategy;

/// Helper functions which do not belong to any specific module
pub mod util;
