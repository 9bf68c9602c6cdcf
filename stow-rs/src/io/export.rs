use crate::entities::{Instance, Solution};
use crate::geometry::Shape;
use crate::io::ext_repr::{ExtContainer, ExtInstance, ExtItem, ExtPlacement, ExtShape, ExtSolution};

/// Exports a [`Solution`] by composing an [`ExtSolution`] from it.
pub fn export_solution(instance: &Instance, solution: &Solution) -> ExtSolution {
    let dim = instance.dimensionality();
    let placements = solution
        .placements()
        .iter()
        .map(|p| ExtPlacement {
            item: instance.item(p.item_id).name.clone(),
            position: p.anchor.coords(dim),
            rotation: p.rotation.code(),
        })
        .collect();

    ExtSolution {
        placements,
        total_wastage: solution.total_wastage(),
        total_cost: solution.total_cost(),
        fitness: solution.fitness(),
        utilization: solution.metrics().utilization(),
    }
}

pub fn export_instance(instance: &Instance) -> ExtInstance {
    let container = ExtContainer {
        width: instance.container.width,
        height: instance.container.height,
        depth: instance.container.depth,
    };
    let items = instance
        .items
        .iter()
        .map(|item| ExtItem {
            name: item.name.clone(),
            shape: export_shape(&item.shape),
            quantity: item.quantity as i64,
            value: item.value,
        })
        .collect();
    ExtInstance { container, items }
}

pub fn export_shape(shape: &Shape) -> ExtShape {
    match *shape {
        Shape::Box {
            width,
            height,
            depth,
        } => ExtShape::Box {
            width,
            height,
            depth,
        },
        Shape::Rectangle { width, height } => ExtShape::Rectangle { width, height },
        Shape::Square { side } => ExtShape::Square { side },
        Shape::Circle { radius } => ExtShape::Circle { radius },
        Shape::Triangle { base, height } => ExtShape::Triangle { base, height },
    }
}
