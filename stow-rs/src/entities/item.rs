use crate::error::{PackError, Result};
use crate::geometry::Shape;
use crate::geometry::geo_enums::Dimensionality;
use crate::geometry::primitives::Footprint;

/// Catalog entry describing one kind of packable item
#[derive(Clone, Debug, PartialEq)]
pub struct ItemType {
    /// Index of the item type within its [`Instance`](crate::entities::Instance)
    pub id: usize,
    /// Unique key of the item type, as used in external representations
    pub name: String,
    pub shape: Shape,
    /// Number of instances available for placement
    pub quantity: usize,
    /// Value of a single placed instance
    pub value: f64,
}

impl ItemType {
    pub fn new(
        id: usize,
        name: impl Into<String>,
        shape: Shape,
        quantity: usize,
        value: f64,
    ) -> Result<ItemType> {
        let name = name.into();
        if name.is_empty() {
            return Err(PackError::InvalidItemSpec(format!(
                "item {id} has an empty name"
            )));
        }
        if let Some(p) = shape.parameters().into_iter().find(|p| !p.is_finite() || *p <= 0.0) {
            return Err(PackError::InvalidItemSpec(format!(
                "item {name} has a non-positive dimension: {p}"
            )));
        }
        if !value.is_finite() || value < 0.0 {
            return Err(PackError::InvalidItemSpec(format!(
                "item {name} has a negative value: {value}"
            )));
        }
        Ok(ItemType {
            id,
            name,
            shape,
            quantity,
            value,
        })
    }

    /// True area or volume of a single instance
    pub fn measure(&self) -> f64 {
        self.shape.measure()
    }

    /// Area or volume of the axis-aligned box enclosing a single instance
    pub fn bounding_measure(&self) -> f64 {
        self.shape.bounding_measure()
    }

    pub fn wastage_factor(&self) -> f64 {
        self.shape.wastage_factor()
    }

    /// Cells spanned by a single instance in its default orientation
    pub fn footprint(&self) -> Footprint {
        self.shape.footprint()
    }

    pub fn dimensionality(&self) -> Dimensionality {
        self.shape.dimensionality()
    }
}
