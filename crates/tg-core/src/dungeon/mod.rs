//! Dungeon topology
//!
//! Grid, room geometry, placement, connection, corridor carving, wall
//! inference and door detection.

mod cell;
mod connect;
mod corridor;
mod doors;
mod features;
mod generation;
mod grid;
mod placement;
mod rect;
mod walls;

pub use cell::CellType;
pub use connect::{connect_rooms, ConnectionStrategy, ConnectivityTracker};
pub use corridor::{carve_cells, CorridorStyle, Elbow, LPath};
pub use doors::{
    detect_destroyed_wall_doors, is_secret_door_candidate, pick_secret_doors,
    room_interior_tiles, secret_door_candidates, DoorHeuristic,
};
pub use features::{add_room_features, RoomFeature};
pub use generation::{generate_layout, DungeonLayout};
pub use grid::{Grid, ALL_DIRS, AXIS_DIRS};
pub use placement::{carve_rooms, place_rooms, target_room_count, PlacementParams};
pub use rect::{dist_sq, Pos, Rectangle};
pub use walls::infer_walls;
