//! Token placement on generated layouts

use std::collections::BTreeSet;

use tg_core::dungeon::{carve_rooms, generate_layout, CellType, Grid, Rectangle};
use tg_core::populate::{
    eligible_monsters, place_encounter, populate, HitDice, MonsterNamer, MonsterTemplate,
};
use tg_core::{GameRng, GeneratorConfig};

// ============================================================================
// Helpers
// ============================================================================

fn giant() -> MonsterTemplate {
    MonsterTemplate::new(
        "Hill Giant",
        3,
        "images/hill_giant.png",
        HitDice::new(10, 12, 40),
        13,
        -1,
        60,
    )
}

fn goblin() -> MonsterTemplate {
    MonsterTemplate::new(
        "Goblin Sneak",
        1,
        "images/goblin.png",
        HitDice::new(2, 6, 0),
        15,
        3,
        60,
    )
}

// ============================================================================
// Encounters
// ============================================================================

#[test]
fn test_large_monster_never_in_tiny_room() {
    let room = Rectangle::new(5, 5, 2, 2);
    let mut grid = Grid::new(20, 20);
    carve_rooms(&mut grid, &[room]);

    let roster = [giant()];
    assert!(eligible_monsters(&roster, &room).is_empty());

    let mut rng = GameRng::new(8);
    let placed = place_encounter(&grid, &room, &roster, 4, &mut MonsterNamer::new(), &mut rng);
    assert!(placed.is_empty());
}

#[test]
fn test_monster_stats_rolled() {
    let room = Rectangle::new(3, 3, 6, 6);
    let mut grid = Grid::new(20, 20);
    carve_rooms(&mut grid, &[room]);

    let roster = [goblin()];
    let mut rng = GameRng::new(14);
    let placed = place_encounter(&grid, &room, &roster, 3, &mut MonsterNamer::new(), &mut rng);
    assert_eq!(placed.len(), 3);

    let names: Vec<_> = placed.iter().map(|t| t.name.as_str()).collect();
    assert_eq!(names, ["Goblin Sneak 1", "Goblin Sneak 2", "Goblin Sneak 3"]);
    for token in &placed {
        let stats = token.stats.as_ref().unwrap();
        assert!((2..=12).contains(&stats.hp));
        assert!((4..=23).contains(&stats.initiative));
        assert_eq!(stats.ac, 15);
        assert_eq!(stats.rotation, 0);
        assert!(!stats.is_minion);
    }
}

// ============================================================================
// Full population
// ============================================================================

#[test]
fn test_tokens_on_floor() {
    let config = GeneratorConfig::default();
    let roster = [giant(), goblin()];
    for seed in 0..10 {
        let mut rng = GameRng::new(seed);
        let layout = generate_layout(&config, &mut rng).unwrap();
        let tokens = populate(&layout, &config, &roster, &mut rng);

        for token in tokens.iter().filter(|t| t.name != "Secret Door" && t.name != "Pool") {
            assert!(
                layout.grid.is(token.x, token.y, CellType::Floor),
                "{} at ({}, {}) is not on floor",
                token.name,
                token.x,
                token.y
            );
        }

        let monster_cells: Vec<_> = tokens
            .iter()
            .filter(|t| t.is_monster())
            .flat_map(|t| t.footprint().tiles().collect::<Vec<_>>())
            .collect();
        let unique: BTreeSet<_> = monster_cells.iter().collect();
        assert_eq!(unique.len(), monster_cells.len(), "monsters overlap");
    }
}

#[test]
fn test_population_counts_bounded() {
    let config = GeneratorConfig {
        num_encounters: 2,
        max_monsters: 2,
        num_treasures: 1,
        num_traps: 5,
        num_secret_doors: 1,
        ..Default::default()
    };
    let mut rng = GameRng::new(31);
    let layout = generate_layout(&config, &mut rng).unwrap();
    let tokens = populate(&layout, &config, &[goblin()], &mut rng);

    let count = |name: &str| tokens.iter().filter(|t| t.name == name).count();
    assert!(tokens.iter().filter(|t| t.is_monster()).count() <= 4);
    assert!(count("Treasure") <= 1);
    assert!(count("Trap") <= 5);
    assert!(count("Secret Door") <= 1);
}

#[test]
fn test_same_seed_same_tokens() {
    let config = GeneratorConfig::default();
    let roster = [giant(), goblin()];
    let run = |seed| {
        let mut rng = GameRng::new(seed);
        let layout = generate_layout(&config, &mut rng).unwrap();
        populate(&layout, &config, &roster, &mut rng)
    };
    assert_eq!(run(2024), run(2024));
}
