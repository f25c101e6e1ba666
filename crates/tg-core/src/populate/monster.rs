//! Monster stat templates

use std::borrow::Cow;

use serde::{Deserialize, Serialize};

use crate::consts::MAX_MONSTER_SIZE;
use crate::error::TemplateError;

use super::HitDice;

/// Stat block a monster token is rolled from
///
/// Field names on the wire follow the roster file format.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonsterTemplate {
    pub name: Cow<'static, str>,
    /// Footprint side in cells
    #[serde(default = "default_size")]
    pub size: u32,
    #[serde(rename = "imageUrl")]
    pub image_url: Cow<'static, str>,
    pub hit_dice: HitDice,
    pub ac: i32,
    #[serde(default)]
    pub initiative_bonus: i32,
    #[serde(rename = "sightRadius")]
    pub sight_radius: u32,
}

fn default_size() -> u32 {
    1
}

impl MonsterTemplate {
    pub const fn new(
        name: &'static str,
        size: u32,
        image_url: &'static str,
        hit_dice: HitDice,
        ac: i32,
        initiative_bonus: i32,
        sight_radius: u32,
    ) -> Self {
        Self {
            name: Cow::Borrowed(name),
            size,
            image_url: Cow::Borrowed(image_url),
            hit_dice,
            ac,
            initiative_bonus,
            sight_radius,
        }
    }

    /// Check if the footprint fits a room of the given size
    ///
    /// A zero-sized footprint fits nowhere.
    pub fn fits(&self, room_width: i32, room_height: i32) -> bool {
        let side = |v: i32| u32::try_from(v).unwrap_or(0);
        self.size >= 1 && self.size <= side(room_width) && self.size <= side(room_height)
    }

    /// Footprint side as a grid distance
    pub fn side(&self) -> i32 {
        i32::try_from(self.size).unwrap_or(i32::MAX)
    }

    /// Check that the template can be placed and rolled
    pub fn validate(&self) -> Result<(), TemplateError> {
        if !(1..=MAX_MONSTER_SIZE).contains(&self.size) {
            return Err(TemplateError::Size {
                name: self.name.to_string(),
                size: self.size,
                max: MAX_MONSTER_SIZE,
            });
        }
        self.hit_dice.check().map_err(|source| TemplateError::Dice {
            name: self.name.to_string(),
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const GIANT: MonsterTemplate = MonsterTemplate::new(
        "Hill Giant",
        3,
        "images/hill_giant.png",
        HitDice::new(10, 12, 40),
        13,
        -1,
        60,
    );

    #[test]
    fn test_fits() {
        assert!(GIANT.fits(3, 3));
        assert!(GIANT.fits(8, 5));
        assert!(!GIANT.fits(2, 10));
        assert!(!GIANT.fits(10, 2));
        assert!(!GIANT.fits(-3, 5));

        let huge = MonsterTemplate {
            size: u32::MAX,
            ..GIANT
        };
        assert!(!huge.fits(4, 4));
        let empty = MonsterTemplate { size: 0, ..GIANT };
        assert!(!empty.fits(4, 4));
    }

    #[test]
    fn test_validate() {
        assert_eq!(GIANT.validate(), Ok(()));

        let huge = MonsterTemplate {
            size: u32::MAX,
            ..GIANT
        };
        assert!(matches!(huge.validate(), Err(TemplateError::Size { .. })));
        let empty = MonsterTemplate { size: 0, ..GIANT };
        assert!(matches!(empty.validate(), Err(TemplateError::Size { size: 0, .. })));

        let swarm = MonsterTemplate {
            hit_dice: HitDice::new(1_000_000_000, 100, 0),
            ..GIANT
        };
        assert!(matches!(swarm.validate(), Err(TemplateError::Dice { .. })));
    }

    #[test]
    fn test_roster_entry_format() {
        let json = r#"{
            "name": "Goblin Sneak",
            "imageUrl": "images/goblin.png",
            "hit_dice": "2d6",
            "ac": 15,
            "initiative_bonus": 3,
            "sightRadius": 60
        }"#;
        let goblin: MonsterTemplate = serde_json::from_str(json).unwrap();
        assert_eq!(goblin.name, "Goblin Sneak");
        assert_eq!(goblin.size, 1);
        assert_eq!(goblin.hit_dice, HitDice::new(2, 6, 0));

        let back = serde_json::to_value(&GIANT).unwrap();
        assert_eq!(back["hit_dice"], "10d12+40");
        assert_eq!(back["sightRadius"], 60);
    }
}
