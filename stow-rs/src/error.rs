use thiserror::Error;

/// Result type alias for operations of this library.
pub type Result<T> = std::result::Result<T, PackError>;

/// Errors that can occur while setting up or evaluating a packing problem.
///
/// Failing to find a position for an item is not an error: the item is skipped.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum PackError {
    /// Negative, zero or non-finite dimension, negative quantity or value, duplicate name.
    #[error("invalid item specification: {0}")]
    InvalidItemSpec(String),

    /// Non-positive or non-finite container dimension.
    #[error("invalid container specification: {0}")]
    InvalidContainerSpec(String),

    /// A 2D item in a 3D container or vice versa.
    #[error("dimension mismatch: {0}")]
    DimensionMismatch(String),

    /// The strategy cannot be used for this container.
    #[error("incompatible strategy: {0}")]
    IncompatibleStrategy(String),

    /// Configuration values out of range.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}
