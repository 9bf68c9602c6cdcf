use crate::entities::{Container, Instance, ItemType};
use crate::error::{PackError, Result};
use crate::geometry::Shape;
use crate::io::ext_repr::{ExtContainer, ExtInstance, ExtItem, ExtShape};

/// Converts external representations of items and containers into internal ones.
#[derive(Clone, Copy, Debug, Default)]
pub struct Importer;

impl Importer {
    pub fn new() -> Importer {
        Importer
    }

    pub fn import_instance(&self, ext_instance: &ExtInstance) -> Result<Instance> {
        let container = self.import_container(&ext_instance.container)?;
        let items = ext_instance
            .items
            .iter()
            .enumerate()
            .map(|(id, ext_item)| self.import_item(id, ext_item))
            .collect::<Result<Vec<ItemType>>>()?;
        Instance::new(container, items)
    }

    pub fn import_container(&self, ext_cont: &ExtContainer) -> Result<Container> {
        Container::new(ext_cont.width, ext_cont.height, ext_cont.depth)
    }

    pub fn import_item(&self, id: usize, ext_item: &ExtItem) -> Result<ItemType> {
        let quantity = usize::try_from(ext_item.quantity).map_err(|_| {
            PackError::InvalidItemSpec(format!(
                "item {} has a negative quantity: {}",
                ext_item.name, ext_item.quantity
            ))
        })?;
        ItemType::new(
            id,
            ext_item.name.clone(),
            import_shape(&ext_item.shape),
            quantity,
            ext_item.value,
        )
    }
}

pub fn import_shape(ext_shape: &ExtShape) -> Shape {
    match *ext_shape {
        ExtShape::Box {
            width,
            height,
            depth,
        } => Shape::Box {
            width,
            height,
            depth,
        },
        ExtShape::Rectangle { width, height } => Shape::Rectangle { width, height },
        ExtShape::Square { side } => Shape::Square { side },
        ExtShape::Circle { radius } => Shape::Circle { radius },
        ExtShape::Triangle { base, height } => Shape::Triangle { base, height },
    }
}
