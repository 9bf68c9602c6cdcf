use crate::geometry::primitives::Footprint;

/// One of the six axis-aligned orientations of an item.
/// Each variant names which item axes end up along the container's (x, y, z) axes.
///
/// The placement strategies currently always use [`Rotation::Xyz`],
/// the other orientations are available to callers that want to explore them.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Rotation {
    #[default]
    Xyz,
    Xzy,
    Yxz,
    Yzx,
    Zxy,
    Zyx,
}

impl Rotation {
    pub const ALL: [Rotation; 6] = [
        Rotation::Xyz,
        Rotation::Xzy,
        Rotation::Yxz,
        Rotation::Yzx,
        Rotation::Zxy,
        Rotation::Zyx,
    ];

    /// Numeric code in `0..=5`
    pub fn code(self) -> u8 {
        match self {
            Rotation::Xyz => 0,
            Rotation::Xzy => 1,
            Rotation::Yxz => 2,
            Rotation::Yzx => 3,
            Rotation::Zxy => 4,
            Rotation::Zyx => 5,
        }
    }

    pub fn from_code(code: u8) -> Option<Rotation> {
        Rotation::ALL.get(code as usize).copied()
    }

    /// Remaps the extent of an item to the container axes
    pub fn apply(self, fp: Footprint) -> Footprint {
        let Footprint { x, y, z } = fp;
        match self {
            Rotation::Xyz => Footprint::new(x, y, z),
            Rotation::Xzy => Footprint::new(x, z, y),
            Rotation::Yxz => Footprint::new(y, x, z),
            Rotation::Yzx => Footprint::new(y, z, x),
            Rotation::Zxy => Footprint::new(z, x, y),
            Rotation::Zyx => Footprint::new(z, y, x),
        }
    }
}

#[cfg(test)]
mod tests {
    use itertools::Itertools;

    use super::*;

    #[test]
    fn codes_roundtrip() {
        for r in Rotation::ALL {
            assert_eq!(Rotation::from_code(r.code()), Some(r));
        }
        assert_eq!(Rotation::from_code(6), None);
    }

    #[test]
    fn all_rotations_are_distinct_permutations() {
        let fp = Footprint::new(2, 3, 5);
        let rotated = Rotation::ALL.iter().map(|r| r.apply(fp)).collect_vec();
        assert_eq!(rotated.iter().unique().count(), 6);
        for r in rotated {
            assert_eq!(r.n_cells(), Some(30));
            let mut dims = [r.x, r.y, r.z];
            dims.sort();
            assert_eq!(dims, [2, 3, 5]);
        }
    }
}
