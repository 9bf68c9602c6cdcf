use std::f64::consts::PI;

use crate::geometry::geo_enums::Dimensionality;
use crate::geometry::primitives::Footprint;

/// Shape of an item type, each variant only carrying its own parameters.
/// All shapes are placed axis-aligned, occupying the cells of their bounding box.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Shape {
    /// Axis-aligned cuboid
    Box { width: f64, height: f64, depth: f64 },
    Rectangle { width: f64, height: f64 },
    Square { side: f64 },
    Circle { radius: f64 },
    /// Triangle with its base along the x-axis
    Triangle { base: f64, height: f64 },
}

impl Shape {
    pub fn dimensionality(&self) -> Dimensionality {
        match self {
            Shape::Box { .. } => Dimensionality::Three,
            Shape::Rectangle { .. }
            | Shape::Square { .. }
            | Shape::Circle { .. }
            | Shape::Triangle { .. } => Dimensionality::Two,
        }
    }

    /// All size parameters of the shape
    pub fn parameters(&self) -> Vec<f64> {
        match *self {
            Shape::Box {
                width,
                height,
                depth,
            } => vec![width, height, depth],
            Shape::Rectangle { width, height } => vec![width, height],
            Shape::Square { side } => vec![side],
            Shape::Circle { radius } => vec![radius],
            Shape::Triangle { base, height } => vec![base, height],
        }
    }

    /// True geometric area (2D) or volume (3D)
    pub fn measure(&self) -> f64 {
        match *self {
            Shape::Box {
                width,
                height,
                depth,
            } => width * height * depth,
            Shape::Rectangle { width, height } => width * height,
            Shape::Square { side } => side * side,
            Shape::Circle { radius } => PI * radius * radius,
            Shape::Triangle { base, height } => 0.5 * base * height,
        }
    }

    /// Extent of the axis-aligned bounding box as (width, height, depth).
    /// The depth of 2D shapes is 1.
    pub fn bbox_extent(&self) -> (f64, f64, f64) {
        match *self {
            Shape::Box {
                width,
                height,
                depth,
            } => (width, height, depth),
            Shape::Rectangle { width, height } => (width, height, 1.0),
            Shape::Square { side } => (side, side, 1.0),
            Shape::Circle { radius } => (2.0 * radius, 2.0 * radius, 1.0),
            Shape::Triangle { base, height } => (base, height, 1.0),
        }
    }

    /// Area (2D) or volume (3D) of the axis-aligned bounding box, always >= [`Shape::measure`]
    pub fn bounding_measure(&self) -> f64 {
        let (w, h, d) = self.bbox_extent();
        match self.dimensionality() {
            Dimensionality::Two => w * h,
            Dimensionality::Three => w * h * d,
        }
    }

    /// Ratio of the true measure to the bounding measure
    pub fn wastage_factor(&self) -> f64 {
        match self {
            Shape::Box { .. } | Shape::Rectangle { .. } | Shape::Square { .. } => 1.0,
            Shape::Circle { .. } => PI / 4.0,
            Shape::Triangle { .. } => 0.5,
        }
    }

    /// Number of grid cells spanned along each axis, fractional extents are rounded up
    pub fn footprint(&self) -> Footprint {
        let (w, h, d) = self.bbox_extent();
        Footprint::new(
            Footprint::cells_covering(w),
            Footprint::cells_covering(h),
            Footprint::cells_covering(d),
        )
    }
}
