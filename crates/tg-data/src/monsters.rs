//! Monster manual
//!
//! Built-in stat templates used when no roster file is given.

use tg_core::populate::{HitDice, MonsterTemplate};

/// Built-in monster templates
pub static MONSTER_MANUAL: &[MonsterTemplate] = &[
    MonsterTemplate::new(
        "Hill Giant",
        3,
        "images/hill_giant.png",
        HitDice::new(10, 12, 40),
        13,
        -1,
        60,
    ),
    MonsterTemplate::new(
        "Orc War Chief",
        1,
        "images/orc_chief.jpg",
        HitDice::new(11, 8, 44),
        16,
        1,
        60,
    ),
    MonsterTemplate::new(
        "Goblin Sneak",
        1,
        "images/goblin.png",
        HitDice::new(2, 6, 0),
        15,
        3,
        60,
    ),
    MonsterTemplate::new(
        "Clay Golem",
        2,
        "images/clay_golem.jpg",
        HitDice::new(9, 10, 36),
        14,
        -2,
        60,
    ),
    MonsterTemplate::new(
        "Ogre",
        2,
        "images/ogre.png",
        HitDice::new(7, 10, 21),
        11,
        -1,
        60,
    ),
    MonsterTemplate::new(
        "Adherer",
        1,
        "images/Adherer.jpg",
        HitDice::new(5, 8, 10),
        14,
        1,
        60,
    ),
    MonsterTemplate::new(
        "Athasian Sloth",
        2,
        "images/Athasian_Sloth.jpg",
        HitDice::new(8, 10, 32),
        12,
        -2,
        60,
    ),
    MonsterTemplate::new(
        "Beholder",
        2,
        "images/Beholder.jpg",
        HitDice::new(11, 10, 44),
        18,
        2,
        120,
    ),
    MonsterTemplate::new(
        "Carrion Crawler",
        2,
        "images/Carrion_Crawler.jpg",
        HitDice::new(6, 10, 18),
        13,
        1,
        60,
    ),
    MonsterTemplate::new(
        "Chitin Golem",
        2,
        "images/Chitin_Golem.jpg",
        HitDice::new(10, 10, 40),
        17,
        -1,
        60,
    ),
    MonsterTemplate::new(
        "Cistern Fiend",
        2,
        "images/Cistern_Fiend.jpg",
        HitDice::new(7, 10, 21),
        15,
        2,
        60,
    ),
    MonsterTemplate::new(
        "Desert Centaur",
        2,
        "images/Desert_Centar.jpg",
        HitDice::new(6, 10, 12),
        12,
        2,
        60,
    ),
    MonsterTemplate::new(
        "Draconian",
        1,
        "images/Draconian.jpg",
        HitDice::new(4, 8, 8),
        15,
        1,
        60,
    ),
    MonsterTemplate::new(
        "Female Elf",
        1,
        "images/Female_Elf.jpg",
        HitDice::new(5, 8, 5),
        14,
        3,
        60,
    ),
    MonsterTemplate::new(
        "Forest Spirit",
        1,
        "images/Forest_Spirit.jpg",
        HitDice::new(6, 8, 12),
        13,
        2,
        60,
    ),
    MonsterTemplate::new(
        "Gelatinous Cube",
        2,
        "images/Gelatinous_Cube.jpg",
        HitDice::new(9, 10, 36),
        6,
        -3,
        60,
    ),
    MonsterTemplate::new(
        "Ghost",
        1,
        "images/Ghost.jpg",
        HitDice::new(7, 8, 0),
        11,
        2,
        60,
    ),
    MonsterTemplate::new(
        "Harpy",
        1,
        "images/Harpy.jpg",
        HitDice::new(6, 8, 6),
        11,
        1,
        60,
    ),
    MonsterTemplate::new(
        "Kirre",
        2,
        "images/Kirre.jpg",
        HitDice::new(7, 10, 14),
        14,
        2,
        60,
    ),
    MonsterTemplate::new(
        "Male Elf",
        1,
        "images/Male_Elf.jpg",
        HitDice::new(5, 8, 5),
        15,
        3,
        60,
    ),
    MonsterTemplate::new(
        "Male Gnome",
        1,
        "images/Male_Gnome.jpg",
        HitDice::new(4, 6, 4),
        13,
        2,
        60,
    ),
    MonsterTemplate::new(
        "Rastipede",
        2,
        "images/Rastipede.jpg",
        HitDice::new(8, 10, 24),
        16,
        0,
        60,
    ),
    MonsterTemplate::new(
        "Stellar Dragon",
        3,
        "images/Stellar_Dragon.jpg",
        HitDice::new(15, 12, 75),
        19,
        0,
        120,
    ),
    MonsterTemplate::new(
        "Storm Giant",
        3,
        "images/Storm_Giant.jpg",
        HitDice::new(16, 12, 80),
        16,
        2,
        60,
    ),
    MonsterTemplate::new(
        "Vampire",
        1,
        "images/Vampire1.jpg",
        HitDice::new(12, 8, 48),
        16,
        4,
        120,
    ),
    MonsterTemplate::new(
        "Zombies",
        1,
        "images/Zombies.jpg",
        HitDice::new(3, 8, 9),
        8,
        -2,
        60,
    ),
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    #[test]
    fn test_manual_size() {
        assert_eq!(MONSTER_MANUAL.len(), 26);
    }

    #[test]
    fn test_names_unique() {
        let names: BTreeSet<_> = MONSTER_MANUAL.iter().map(|m| &m.name).collect();
        assert_eq!(names.len(), MONSTER_MANUAL.len());
    }

    #[test]
    fn test_hill_giant_entry() {
        let giant = MONSTER_MANUAL.iter().find(|m| m.name == "Hill Giant").unwrap();
        assert_eq!(giant.size, 3);
        assert_eq!(giant.hit_dice, HitDice::new(10, 12, 40));
        assert_eq!(giant.initiative_bonus, -1);
    }

    #[test]
    fn test_sizes_cover_one_to_three() {
        let sizes: BTreeSet<u32> = MONSTER_MANUAL.iter().map(|m| m.size).collect();
        assert_eq!(sizes, BTreeSet::from([1, 2, 3]));
    }

    #[test]
    fn test_templates_sane() {
        for m in MONSTER_MANUAL {
            assert_eq!(m.validate(), Ok(()), "{} is not placeable", m.name);
            let lowest = m.hit_dice.count as i32 + m.hit_dice.bonus;
            assert!(lowest >= 1, "{} can roll 0 hp", m.name);
            assert!(m.ac > 0);
            assert!(m.sight_radius >= 60);
            assert!(m.image_url.starts_with("images/"));
        }
    }
}
