//! Dungeon population
//!
//! Turns a generated layout into tokens: start and exit markers, doors,
//! monster encounters, treasure, traps, secret doors and pools.

mod dice;
mod monster;
mod token;

pub use dice::HitDice;
pub use monster::MonsterTemplate;
pub use token::{Marker, MonsterStats, Token};

use std::collections::{BTreeMap, BTreeSet};

use log::{debug, info, warn};

use crate::config::GeneratorConfig;
use crate::consts::{DM_OWNER, INITIATIVE_DIE, TREASURE_SPOT_ATTEMPTS};
use crate::dungeon::{CellType, DungeonLayout, Grid, Pos, Rectangle};
use crate::rng::GameRng;

/// Hands out `"<name> <n>"` labels with a counter per base name
#[derive(Debug, Clone, Default)]
pub struct MonsterNamer {
    counts: BTreeMap<String, u32>,
}

impl MonsterNamer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Next label for a base name
    pub fn next_name(&mut self, base: &str) -> String {
        let n = self.counts.entry(base.to_string()).or_insert(0);
        *n += 1;
        format!("{base} {n}")
    }
}

/// Place every token for a layout
pub fn populate(
    layout: &DungeonLayout,
    config: &GeneratorConfig,
    roster: &[MonsterTemplate],
    rng: &mut GameRng,
) -> Vec<Token> {
    let mut tokens: Vec<Token> = layout.pools().map(Token::pool).collect();

    let (Some(start), Some(exit)) = (layout.start_room(), layout.exit_room()) else {
        warn!("layout has no rooms; nothing to populate");
        return tokens;
    };
    tokens.push(Token::marker(Marker::Start, start.center()));
    tokens.push(Token::marker(Marker::Exit, exit.center()));
    tokens.extend(layout.doors.iter().map(|&p| Token::marker(Marker::Door, p)));

    // start and exit are the first and last rooms
    let inner = layout.rooms.len().saturating_sub(1).max(1);
    let mut available: Vec<Rectangle> = layout.rooms[1..inner].to_vec();
    rng.shuffle(&mut available);

    info!("placing {} encounters", config.num_encounters);
    let mut namer = MonsterNamer::new();
    for _ in 0..config.num_encounters {
        if roster.is_empty() {
            break;
        }
        let Some(room) = available.pop() else {
            break;
        };
        let count = rng.range_usize(config.min_monsters, config.max_monsters);
        tokens.extend(place_encounter(
            &layout.grid,
            &room,
            roster,
            count,
            &mut namer,
            rng,
        ));
    }

    for _ in 0..config.num_treasures {
        let Some(room) = available.pop() else {
            break;
        };
        let spot = treasure_spot(&layout.grid, &room, rng);
        tokens.push(Token::marker(Marker::Treasure, spot));
    }

    tokens.extend(
        pick_trap_spots(layout, config.num_traps, rng)
            .into_iter()
            .map(|p| Token::marker(Marker::Trap, p)),
    );
    tokens.extend(
        layout
            .secret_doors
            .iter()
            .map(|&p| Token::marker(Marker::SecretDoor, p)),
    );

    info!("placed {} tokens", tokens.len());
    tokens
}

/// Templates whose footprint fits the room
pub fn eligible_monsters<'a>(
    roster: &'a [MonsterTemplate],
    room: &Rectangle,
) -> Vec<&'a MonsterTemplate> {
    roster
        .iter()
        .filter(|m| m.fits(room.width(), room.height()))
        .collect()
}

/// Place up to `count` monsters in one room
///
/// Each monster is drawn from the eligible templates and put at the first
/// shuffled floor cell where its whole footprint is free floor inside the
/// room. Monsters that do not fit are skipped with a warning.
pub fn place_encounter(
    grid: &Grid,
    room: &Rectangle,
    roster: &[MonsterTemplate],
    count: usize,
    namer: &mut MonsterNamer,
    rng: &mut GameRng,
) -> Vec<Token> {
    let eligible = eligible_monsters(roster, room);
    if eligible.is_empty() {
        warn!(
            "skipping {}x{} room at ({}, {}): too small for any monster",
            room.width(),
            room.height(),
            room.x1,
            room.y1
        );
        return Vec::new();
    }

    let mut starts: Vec<Pos> = room
        .tiles()
        .filter(|&(x, y)| grid.is(x, y, CellType::Floor))
        .collect();
    rng.shuffle(&mut starts);

    let mut occupied = BTreeSet::new();
    let mut placed = Vec::new();
    for _ in 0..count {
        let Some(&template) = rng.choose(&eligible) else {
            break;
        };
        let footprint_free = |&(x, y): &Pos| {
            let area = Rectangle::new(x, y, template.side(), template.side());
            area.x2 <= room.x2
                && area.y2 <= room.y2
                && area.tiles().all(|(tx, ty)| {
                    grid.is(tx, ty, CellType::Floor) && !occupied.contains(&(tx, ty))
                })
        };
        let Some(spot) = starts.iter().copied().find(|p| footprint_free(p)) else {
            warn!(
                "no room left for a {}x{} {}",
                template.size, template.size, template.name
            );
            continue;
        };

        let token = roll_monster(template, spot, namer, rng);
        occupied.extend(token.footprint().tiles());
        debug!("{} at ({}, {})", token.name, spot.0, spot.1);
        placed.push(token);
    }
    placed
}

/// Monster token with freshly rolled hit points and initiative
fn roll_monster(
    template: &MonsterTemplate,
    (x, y): Pos,
    namer: &mut MonsterNamer,
    rng: &mut GameRng,
) -> Token {
    let hp = template.hit_dice.roll(rng).max(1);
    let initiative = rng.rnd(INITIATIVE_DIE) as i32 + template.initiative_bonus;
    Token {
        name: namer.next_name(&template.name),
        x,
        y,
        size: template.size,
        background_color: None,
        image_url: Some(template.image_url.replace('\\', "/")),
        owner: Some(DM_OWNER.to_string()),
        stats: Some(MonsterStats {
            hp,
            max_hp: hp,
            ac: template.ac,
            initiative,
            sight_radius: template.sight_radius,
            rotation: 0,
            is_minion: false,
        }),
    }
}

/// A random floor cell of the room, or its center after repeated misses
fn treasure_spot(grid: &Grid, room: &Rectangle, rng: &mut GameRng) -> Pos {
    (0..TREASURE_SPOT_ATTEMPTS)
        .map(|_| {
            (
                rng.range_inclusive(room.x1, room.x2 - 1),
                rng.range_inclusive(room.y1, room.y2 - 1),
            )
        })
        .find(|&(x, y)| grid.is(x, y, CellType::Floor))
        .unwrap_or_else(|| room.center())
}

/// Draw trap cells from corridor and room floor
fn pick_trap_spots(layout: &DungeonLayout, count: usize, rng: &mut GameRng) -> Vec<Pos> {
    let mut floor: Vec<Pos> = layout
        .path_tiles
        .union(&layout.room_tiles())
        .copied()
        .filter(|&(x, y)| layout.grid.is(x, y, CellType::Floor))
        .collect();
    rng.shuffle(&mut floor);
    floor.truncate(count);
    floor
}
