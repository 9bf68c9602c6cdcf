use serde::{Deserialize, Serialize};

/// External representation of an [`Instance`](crate::entities::Instance).
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ExtInstance {
    pub container: ExtContainer,
    /// Catalog of item types, the position in the list becomes the id of the item type
    pub items: Vec<ExtItem>,
}

/// External representation of a [`Container`](crate::entities::Container).
/// Containers without a depth are 2D.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ExtContainer {
    pub width: f64,
    pub height: f64,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub depth: Option<f64>,
}

/// External representation of an [`ItemType`](crate::entities::ItemType).
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ExtItem {
    /// Unique name of the item type
    pub name: String,
    pub shape: ExtShape,
    /// Number of available instances
    pub quantity: i64,
    /// Value of a single instance, 0 if not specified
    #[serde(default)]
    pub value: f64,
}

/// Shapes supported for item types
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
#[serde(tag = "type", content = "data")]
#[serde(rename_all = "snake_case")]
pub enum ExtShape {
    Box { width: f64, height: f64, depth: f64 },
    Rectangle { width: f64, height: f64 },
    Square { side: f64 },
    Circle { radius: f64 },
    Triangle { base: f64, height: f64 },
}

/// External representation of a [`Solution`](crate::entities::Solution).
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ExtSolution {
    /// Placements in the order they were made
    pub placements: Vec<ExtPlacement>,
    pub total_wastage: f64,
    pub total_cost: f64,
    pub fitness: f64,
    /// Percentage of the container covered by placed items
    pub utilization: f64,
}

/// External representation of a [`Placement`](crate::entities::Placement).
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ExtPlacement {
    /// Name of the placed item type
    pub item: String,
    /// Grid coordinates of the anchor, 2 or 3 values depending on the container
    pub position: Vec<usize>,
    /// Orientation code in `0..=5`
    pub rotation: u8,
}
