//! Door and secret-door detection

use std::collections::BTreeSet;

use log::debug;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

use crate::rng::GameRng;

use super::{CellType, Grid, Pos, Rectangle, AXIS_DIRS};

/// How doorways are found
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    Display,
    EnumIter,
    EnumString,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum DoorHeuristic {
    /// Room wall cells cut by a corridor while carving
    #[default]
    Carve,
    /// Former wall cells that now join a room to a corridor
    DestroyedWall,
}

/// Every room-interior coordinate
pub fn room_interior_tiles(rooms: &[Rectangle]) -> BTreeSet<Pos> {
    rooms.iter().flat_map(Rectangle::tiles).collect()
}

/// Find doorways among walls the corridors broke through
///
/// A cell qualifies when it was Wall in `before`, is Floor in `after`, and
/// touches both a room interior and corridor floor along the axes. Cells
/// touching more than one room tile are part of a wide opening and skipped.
/// Each remaining cell is kept with probability `door_chance`.
pub fn detect_destroyed_wall_doors(
    before: &Grid,
    after: &Grid,
    room_tiles: &BTreeSet<Pos>,
    door_chance: f64,
    rng: &mut GameRng,
) -> BTreeSet<Pos> {
    let mut doors = BTreeSet::new();
    let mut wide = 0;

    for (x, y) in after.positions_of(CellType::Floor) {
        if !before.is(x, y, CellType::Wall) {
            continue;
        }

        let mut room_side = 0;
        let mut corridor_side = 0;
        for (dx, dy) in AXIS_DIRS {
            let n = (x + dx, y + dy);
            if room_tiles.contains(&n) {
                room_side += 1;
            } else if after.is(n.0, n.1, CellType::Floor) {
                corridor_side += 1;
            }
        }

        if room_side == 0 || corridor_side == 0 {
            continue;
        }
        if room_side > 1 {
            wide += 1;
            continue;
        }
        if rng.chance(door_chance) {
            doors.insert((x, y));
        }
    }

    debug!("{} doorways found, {} wide openings skipped", doors.len(), wide);
    doors
}

/// Check if a cell makes a plausible secret door
///
/// The cell must be an interior Wall with exactly one Floor axis-neighbor and
/// Wall directly opposite it. Walls with Floor on both sides of an axis are
/// rejected.
pub fn is_secret_door_candidate(grid: &Grid, x: i32, y: i32) -> bool {
    let (w, h) = (grid.width() as i32, grid.height() as i32);
    if x < 1 || y < 1 || x >= w - 1 || y >= h - 1 || !grid.is(x, y, CellType::Wall) {
        return false;
    }

    let floor = |dx: i32, dy: i32| grid.is(x + dx, y + dy, CellType::Floor);
    if (floor(-1, 0) && floor(1, 0)) || (floor(0, -1) && floor(0, 1)) {
        return false;
    }

    let open: Vec<Pos> = AXIS_DIRS
        .iter()
        .copied()
        .filter(|&(dx, dy)| floor(dx, dy))
        .collect();
    match open.as_slice() {
        [(dx, dy)] => grid.is(x - dx, y - dy, CellType::Wall),
        _ => false,
    }
}

/// All secret-door candidates, row by row
pub fn secret_door_candidates(grid: &Grid) -> Vec<Pos> {
    grid.positions_of(CellType::Wall)
        .filter(|&(x, y)| is_secret_door_candidate(grid, x, y))
        .collect()
}

/// Draw up to `count` secret doors without replacement
pub fn pick_secret_doors(grid: &Grid, count: usize, rng: &mut GameRng) -> Vec<Pos> {
    let mut candidates = secret_door_candidates(grid);
    debug!("{} secret door candidates", candidates.len());
    rng.shuffle(&mut candidates);
    candidates.truncate(count);
    candidates
}
