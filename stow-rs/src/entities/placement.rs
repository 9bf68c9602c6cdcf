use crate::entities::Instance;
use crate::geometry::Rotation;
use crate::geometry::geo_enums::Axis;
use crate::geometry::primitives::{Anchor, Footprint};

/// One instance of an item type fixed at a position and orientation inside the container
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Placement {
    /// The id of the placed item type
    pub item_id: usize,
    pub anchor: Anchor,
    pub rotation: Rotation,
}

impl Placement {
    pub fn new(item_id: usize, anchor: Anchor, rotation: Rotation) -> Self {
        Placement {
            item_id,
            anchor,
            rotation,
        }
    }

    /// Cells spanned by the placed item, after applying its rotation
    pub fn footprint(&self, instance: &Instance) -> Footprint {
        self.rotation.apply(instance.item(self.item_id).footprint())
    }

    /// Exclusive upper corner of the cells occupied by the placed item
    pub fn upper(&self, instance: &Instance) -> Anchor {
        let fp = self.footprint(instance);
        Anchor::new(
            self.anchor.x + fp.x,
            self.anchor.y + fp.y,
            self.anchor.z + fp.z,
        )
    }

    /// Returns whether the occupied cells of both placements intersect
    pub fn overlaps(&self, other: &Placement, instance: &Instance) -> bool {
        let (lo_a, hi_a) = (self.anchor, self.upper(instance));
        let (lo_b, hi_b) = (other.anchor, other.upper(instance));
        [Axis::X, Axis::Y, Axis::Z]
            .into_iter()
            .all(|ax| lo_a.get(ax) < hi_b.get(ax) && lo_b.get(ax) < hi_a.get(ax))
    }
}
