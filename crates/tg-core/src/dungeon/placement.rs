//! Room placement
//!
//! Rejection sampling of non-overlapping rectangles.

use log::debug;

use crate::config::GeneratorConfig;
use crate::rng::GameRng;

use super::{infer_walls, CellType, Grid, Rectangle};

/// Inputs to room placement
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlacementParams {
    pub width: usize,
    pub height: usize,
    pub room_count: usize,
    pub min_size: usize,
    pub max_size: usize,
    pub buffer: usize,
}

impl PlacementParams {
    /// Placement inputs for a config and an already drawn room target
    pub fn from_config(config: &GeneratorConfig, room_count: usize) -> Self {
        Self {
            width: config.width,
            height: config.height,
            room_count,
            min_size: config.min_size,
            max_size: config.max_size,
            buffer: config.buffer,
        }
    }
}

/// Number of rooms to try for
///
/// Uniform in `min_rooms..=max_rooms` when a minimum is set, otherwise
/// `max_rooms`.
pub fn target_room_count(config: &GeneratorConfig, rng: &mut GameRng) -> usize {
    match config.min_rooms {
        Some(min) => rng.range_usize(min, config.max_rooms),
        None => config.max_rooms,
    }
}

/// Place up to `room_count` rooms
///
/// Each attempt samples a size and a top-left corner that keeps a one-cell
/// margin plus room for the wall shell. The result is sorted by center x
/// (stable), which fixes room indices for the rest of generation.
pub fn place_rooms(params: &PlacementParams, rng: &mut GameRng) -> Vec<Rectangle> {
    let mut rooms: Vec<Rectangle> = Vec::new();
    let attempts = GeneratorConfig::placement_attempts(params.room_count);
    let buffer = dim(params.buffer);

    for _ in 0..attempts {
        if rooms.len() >= params.room_count {
            break;
        }

        let w = rng.range_inclusive(dim(params.min_size), dim(params.max_size));
        let h = rng.range_inclusive(dim(params.min_size), dim(params.max_size));

        let max_x = dim(params.width).saturating_sub(w).saturating_sub(2);
        let max_y = dim(params.height).saturating_sub(h).saturating_sub(2);
        if max_x < 1 || max_y < 1 {
            continue;
        }

        let x = rng.range_inclusive(1, max_x);
        let y = rng.range_inclusive(1, max_y);
        let room = Rectangle::new(x, y, w, h);

        if rooms.iter().any(|r| room.intersects(r, buffer)) {
            continue;
        }
        rooms.push(room);
    }

    rooms.sort_by_key(|r| r.center().0);
    debug!(
        "placed {} of {} rooms in {} attempts",
        rooms.len(),
        params.room_count,
        attempts
    );
    rooms
}

/// Grid distance as a signed coordinate, saturating at `i32::MAX`
fn dim(v: usize) -> i32 {
    i32::try_from(v).unwrap_or(i32::MAX)
}

/// Fill room interiors with Floor and surround them with Wall
pub fn carve_rooms(grid: &mut Grid, rooms: &[Rectangle]) {
    for room in rooms {
        for (x, y) in room.tiles() {
            grid.set(x, y, CellType::Floor);
        }
    }
    infer_walls(grid);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::MAX_ROOMS;

    fn params(width: usize, height: usize, room_count: usize) -> PlacementParams {
        PlacementParams {
            width,
            height,
            room_count,
            min_size: 6,
            max_size: 12,
            buffer: 2,
        }
    }

    #[test]
    fn test_rooms_inside_grid() {
        let mut rng = GameRng::new(42);
        let p = params(80, 60, 10);
        for room in place_rooms(&p, &mut rng) {
            assert!(room.x1 >= 1 && room.y1 >= 1);
            assert!(room.x2 <= 80 - 2 && room.y2 <= 60 - 2);
            assert!((6..=12).contains(&room.width()));
            assert!((6..=12).contains(&room.height()));
        }
    }

    #[test]
    fn test_rooms_respect_buffer() {
        let mut rng = GameRng::new(1234);
        let rooms = place_rooms(&params(100, 80, 15), &mut rng);
        for (i, a) in rooms.iter().enumerate() {
            for b in &rooms[i + 1..] {
                assert!(!a.intersects(b, 2), "{a:?} and {b:?} too close");
            }
        }
    }

    #[test]
    fn test_sorted_by_center_x() {
        let mut rng = GameRng::new(77);
        let rooms = place_rooms(&params(80, 60, 10), &mut rng);
        assert!(rooms.windows(2).all(|w| w[0].center().0 <= w[1].center().0));
    }

    #[test]
    fn test_room_too_big_for_grid() {
        let mut rng = GameRng::new(5);
        let p = PlacementParams {
            min_size: 19,
            max_size: 19,
            ..params(20, 20, 2)
        };
        assert!(place_rooms(&p, &mut rng).is_empty());
    }

    #[test]
    fn test_never_exceeds_target() {
        let mut rng = GameRng::new(8);
        let rooms = place_rooms(&params(200, 200, 3), &mut rng);
        assert!(rooms.len() <= 3);
    }

    #[test]
    fn test_oversized_params_end_quietly() {
        let mut rng = GameRng::new(13);
        let p = PlacementParams {
            buffer: i32::MAX as usize,
            ..params(60, 60, 3)
        };
        assert_eq!(place_rooms(&p, &mut rng).len(), 1);

        let p = PlacementParams {
            min_size: usize::MAX,
            max_size: usize::MAX,
            ..params(60, 60, 3)
        };
        assert!(place_rooms(&p, &mut rng).is_empty());
    }

    #[test]
    fn test_room_count_beyond_grid_capacity() {
        let mut rng = GameRng::new(21);
        let rooms = place_rooms(&params(20, 20, MAX_ROOMS), &mut rng);
        assert!(rooms.len() < 10);
    }

    #[test]
    fn test_target_room_count() {
        let mut rng = GameRng::new(11);
        let mut config = GeneratorConfig::default();
        assert_eq!(target_room_count(&config, &mut rng), 10);

        config.min_rooms = Some(4);
        config.max_rooms = 8;
        for _ in 0..100 {
            assert!((4..=8).contains(&target_room_count(&config, &mut rng)));
        }
    }

    #[test]
    fn test_carve_rooms() {
        let mut grid = Grid::new(30, 30);
        let rooms = [Rectangle::new(2, 2, 5, 5), Rectangle::new(15, 15, 6, 4)];
        carve_rooms(&mut grid, &rooms);
        assert_eq!(grid.count(CellType::Floor), 25 + 24);
        assert!(grid.is(1, 1, CellType::Wall));
        assert!(grid.is(21, 19, CellType::Wall));
        assert!(grid.is(10, 10, CellType::Void));
    }
}
