//! Map cell types

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

/// Cell state on the generation grid
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, Display, EnumIter,
)]
#[repr(u8)]
pub enum CellType {
    /// Never allocated; background unless it borders Floor
    #[default]
    Void = 0,
    Floor = 1,
    Wall = 2,
}

impl CellType {
    /// Check if this is a wall
    pub const fn is_wall(&self) -> bool {
        matches!(self, CellType::Wall)
    }

    /// Check if this is floor
    pub const fn is_floor(&self) -> bool {
        matches!(self, CellType::Floor)
    }

    pub const fn is_void(&self) -> bool {
        matches!(self, CellType::Void)
    }

    /// Value written to the output wall mask (1 = wall, 0 = anything else)
    pub const fn mask_bit(&self) -> u8 {
        match self {
            CellType::Wall => 1,
            CellType::Void | CellType::Floor => 0,
        }
    }

    /// Cell type read back from a wall mask value
    ///
    /// The mask does not distinguish Void from Floor; every non-wall value
    /// comes back as Floor.
    pub const fn from_mask_bit(bit: u8) -> Self {
        if bit == 0 {
            CellType::Floor
        } else {
            CellType::Wall
        }
    }

    /// ASCII glyph used by debug dumps
    pub const fn glyph(&self) -> char {
        match self {
            CellType::Void => ' ',
            CellType::Floor => '.',
            CellType::Wall => '#',
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_default_is_void() {
        assert_eq!(CellType::default(), CellType::Void);
    }

    #[test]
    fn test_mask_bits() {
        assert_eq!(CellType::Wall.mask_bit(), 1);
        assert_eq!(CellType::Floor.mask_bit(), 0);
        assert_eq!(CellType::Void.mask_bit(), 0);
    }

    #[test]
    fn test_mask_round_trip_is_lossy_for_void() {
        for typ in CellType::iter() {
            let back = CellType::from_mask_bit(typ.mask_bit());
            assert_eq!(back.is_wall(), typ.is_wall());
        }
        assert_eq!(CellType::from_mask_bit(CellType::Void.mask_bit()), CellType::Floor);
    }

    #[test]
    fn test_predicates_are_exclusive() {
        for typ in CellType::iter() {
            let hits = [typ.is_wall(), typ.is_floor(), typ.is_void()]
                .iter()
                .filter(|&&b| b)
                .count();
            assert_eq!(hits, 1, "{typ} should match exactly one predicate");
        }
    }
}
