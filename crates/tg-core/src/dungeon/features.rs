//! Room decorations: pillars and pools

use log::debug;

use crate::consts::{MAX_PILLARS, MIN_FEATURE_ROOM_SIZE, MIN_PILLARS};
use crate::rng::GameRng;

use super::{CellType, Grid, Pos, Rectangle};

/// Decoration added to a room
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RoomFeature {
    /// Interior cells turned to Wall
    Pillars(Vec<Pos>),
    /// Water area, emitted as a token rather than carved
    Pool(Rectangle),
}

/// Roll decorations for every room
///
/// Each room gets a feature with probability `chance` when it is at least
/// 5×5. Pillars are written to the grid; pools are only returned.
pub fn add_room_features(
    grid: &mut Grid,
    rooms: &[Rectangle],
    chance: f64,
    rng: &mut GameRng,
) -> Vec<RoomFeature> {
    rooms
        .iter()
        .filter_map(|room| add_room_feature(grid, room, chance, rng))
        .collect()
}

fn add_room_feature(
    grid: &mut Grid,
    room: &Rectangle,
    chance: f64,
    rng: &mut GameRng,
) -> Option<RoomFeature> {
    if !rng.chance(chance) {
        return None;
    }
    if room.width() < MIN_FEATURE_ROOM_SIZE || room.height() < MIN_FEATURE_ROOM_SIZE {
        return None;
    }

    let feature = if rng.coin() {
        RoomFeature::Pillars(place_pillars(grid, room, rng))
    } else {
        RoomFeature::Pool(pool_area(room, rng))
    };
    debug!("room at ({}, {}) gets {:?}", room.x1, room.y1, feature);
    Some(feature)
}

/// Try 2-4 pillar spots, keeping those that leave the room connected
fn place_pillars(grid: &mut Grid, room: &Rectangle, rng: &mut GameRng) -> Vec<Pos> {
    let center = room.center();
    let attempts = rng.range_inclusive(MIN_PILLARS, MAX_PILLARS);
    let mut pillars = Vec::new();

    for _ in 0..attempts {
        let px = rng.range_inclusive(room.x1 + 1, room.x2 - 2);
        let py = rng.range_inclusive(room.y1 + 1, room.y2 - 2);
        if (px, py) == center || !grid.is(px, py, CellType::Floor) {
            continue;
        }

        let open = grid.floor_region(center, Some(room)).len();
        grid.set(px, py, CellType::Wall);
        if grid.floor_region(center, Some(room)).len() + 1 == open {
            pillars.push((px, py));
        } else {
            grid.set(px, py, CellType::Floor);
        }
    }
    pillars
}

/// Pool rectangle inside the room's inner margin
fn pool_area(room: &Rectangle, rng: &mut GameRng) -> Rectangle {
    let pool_w = rng.range_inclusive(2, room.width() - 2);
    let pool_h = rng.range_inclusive(2, room.height() - 2);
    let x = rng.range_inclusive(room.x1 + 1, room.x2 - 1 - pool_w);
    let y = rng.range_inclusive(room.y1 + 1, room.y2 - 1 - pool_h);
    Rectangle::new(x, y, pool_w, pool_h)
}
