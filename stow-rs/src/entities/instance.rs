use itertools::Itertools;

use crate::entities::{Container, ItemType};
use crate::error::{PackError, Result};
use crate::geometry::geo_enums::Dimensionality;
use crate::util::assertions;

/// Static (unmodifiable) description of a packing problem:
/// a single container and the catalog of item types that can be placed in it.
#[derive(Clone, Debug, PartialEq)]
pub struct Instance {
    pub container: Container,
    /// Item types, the id of each item type equals its index
    pub items: Vec<ItemType>,
}

impl Instance {
    pub fn new(container: Container, items: Vec<ItemType>) -> Result<Instance> {
        if !assertions::instance_item_ids_correct(&items) {
            return Err(PackError::InvalidItemSpec(
                "item ids must match their index in the catalog".to_string(),
            ));
        }
        if let Some(dup) = items.iter().map(|i| &i.name).duplicates().next() {
            return Err(PackError::InvalidItemSpec(format!(
                "item name {dup} is not unique"
            )));
        }
        let dim = container.dimensionality();
        if let Some(item) = items.iter().find(|i| i.dimensionality() != dim) {
            return Err(PackError::DimensionMismatch(format!(
                "item {} is {} while the container is {}",
                item.name,
                item.dimensionality(),
                dim
            )));
        }
        Ok(Instance { container, items })
    }

    pub fn item(&self, id: usize) -> &ItemType {
        &self.items[id]
    }

    pub fn item_by_name(&self, name: &str) -> Option<&ItemType> {
        self.items.iter().find(|i| i.name == name)
    }

    pub fn dimensionality(&self) -> Dimensionality {
        self.container.dimensionality()
    }

    pub fn total_item_qty(&self) -> usize {
        self.items.iter().map(|i| i.quantity).sum()
    }
}
